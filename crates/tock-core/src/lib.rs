//! tock-core library.
//!
//! Scans a log file line by line and reports every place the leading
//! timestamp jumps backwards, plus the rotated-file fallback used to
//! locate the newest file of a rotation series.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums at module boundaries.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod resolve;
pub mod scan;
pub mod timestamp;
