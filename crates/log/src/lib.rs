// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Leveled logging with timestamps, optional colors and callback sinks.
//!
//! ```
//! use reifydb_log::{EventInfo, Level, Logger, info, warn};
//!
//! let logger = Logger::new(Level::Info, false);
//! info!(logger, "listening on port {}", 6565);
//!
//! logger.add_callback(|event: &dyn EventInfo| {
//! 	eprintln!("{} {}", event.level(), event.message());
//! });
//! warn!(logger, "printed by the callback only");
//! ```

pub mod callsite;
mod color;
mod config;
mod error;
mod event;
mod level;
mod logger;
mod macros;

pub use callsite::Callsite;
pub use color::{reset_sequence, set_sequence};
pub use config::{ENV_COLOR, ENV_LEVEL, ENV_QUIET, LoggerBuilder, LoggerConfig};
pub use error::{Error, Result};
pub use event::{Event, EventInfo};
pub use level::Level;
pub use logger::{Callback, Logger, Output};
