//! # HeadTrace Core Library
//!
//! Core functionality for the HeadTrace head-orientation recorder.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Microsecond-precision timestamps with ordering and borrow arithmetic
//! - Immutable head-orientation sample records
//! - A per-run trace file writer with guaranteed cleanup
//! - Capture configuration and session manifests
//! - A simulated head-motion source for testing without hardware
//!
//! ## Example
//!
//! ```rust,ignore
//! use headtrace_core::prelude::*;
//!
//! let mut writer = TraceWriter::new("/tmp/traces", "subject01");
//! writer.start()?;
//! writer.add_log(&HeadSample::new(Timestamp::now(), Orientation::default(), 0))?;
//! writer.stop()?;
//! ```

pub mod config;
pub mod demo;
pub mod orientation;
pub mod session;
pub mod timestamp;
pub mod trace;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::CaptureConfig;
    pub use crate::demo::DemoHeadMotion;
    pub use crate::orientation::Orientation;
    pub use crate::session::SessionManifest;
    pub use crate::timestamp::Timestamp;
    pub use crate::trace::{HeadSample, TraceError, TraceWriter};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
