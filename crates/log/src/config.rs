// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Logger configuration and builder

use std::{env, io::Write};

use serde::{Deserialize, Serialize};

use crate::{
	Error, EventInfo, Level, Logger, Result,
	logger::{Callback, Output, State, stdout},
};

pub const ENV_LEVEL: &str = "REIFYDB_LOG_LEVEL";
pub const ENV_QUIET: &str = "REIFYDB_LOG_QUIET";
pub const ENV_COLOR: &str = "REIFYDB_LOG_COLOR";

/// Plain logger settings, loadable from any serde format or the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
	pub level: Level,
	pub quiet: bool,
	pub use_color: bool,
}

impl Default for LoggerConfig {
	fn default() -> Self {
		Self {
			level: Level::Info,
			quiet: false,
			use_color: true,
		}
	}
}

impl LoggerConfig {
	/// Read `REIFYDB_LOG_LEVEL`, `REIFYDB_LOG_QUIET` and `REIFYDB_LOG_COLOR`.
	/// Unset variables keep their defaults.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let mut config = Self::default();

		if let Some(level) = lookup(ENV_LEVEL) {
			config.level = level.parse()?;
		}
		if let Some(quiet) = lookup(ENV_QUIET) {
			config.quiet = parse_flag(ENV_QUIET, &quiet)?;
		}
		if let Some(color) = lookup(ENV_COLOR) {
			config.use_color = parse_flag(ENV_COLOR, &color)?;
		}

		Ok(config)
	}

	pub fn build(self) -> Logger {
		LoggerBuilder::from_config(self).build()
	}
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(Error::InvalidFlag {
			key: key.to_string(),
			value: value.to_string(),
		}),
	}
}

/// Builder for configuring a [`Logger`] with fluent API
pub struct LoggerBuilder {
	config: LoggerConfig,
	callbacks: Vec<Callback>,
	out: Option<Output>,
}

impl LoggerBuilder {
	/// Create a new builder: level `INFO`, not quiet, colors on, stdout
	pub fn new() -> Self {
		Self::from_config(LoggerConfig::default())
	}

	pub fn from_config(config: LoggerConfig) -> Self {
		Self {
			config,
			callbacks: Vec::new(),
			out: None,
		}
	}

	/// Minimum level that gets emitted
	pub fn level(mut self, level: Level) -> Self {
		self.config.level = level;
		self
	}

	/// Suppress all output regardless of level
	pub fn quiet(mut self, quiet: bool) -> Self {
		self.config.quiet = quiet;
		self
	}

	/// Enable or disable colored output
	///
	/// # Example
	/// ```
	/// # use reifydb_log::{Level, LoggerBuilder};
	/// let logger = LoggerBuilder::new().level(Level::Debug).color(false).build();
	/// assert!(!logger.use_color());
	/// ```
	pub fn color(mut self, enabled: bool) -> Self {
		self.config.use_color = enabled;
		self
	}

	/// Register a callback up front, see [`Logger::add_callback`]
	pub fn callback<F>(mut self, callback: F) -> Self
	where
		F: Fn(&dyn EventInfo) + Send + Sync + 'static,
	{
		self.callbacks.push(Box::new(callback));
		self
	}

	/// Write console lines and color sequences to `out` instead of stdout
	pub fn writer<W>(mut self, out: W) -> Self
	where
		W: Write + Send + 'static,
	{
		self.out = Some(Box::new(out));
		self
	}

	pub fn build(self) -> Logger {
		Logger::from_state(State {
			level: self.config.level,
			quiet: self.config.quiet,
			use_color: self.config.use_color,
			callbacks: self.callbacks,
			out: self.out.unwrap_or_else(stdout),
		})
	}
}

impl Default for LoggerBuilder {
	fn default() -> Self {
		Self::new()
	}
}
