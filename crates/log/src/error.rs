// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

/// Configuration errors.
///
/// Emitting a log event never fails; these only surface while building a
/// [`LoggerConfig`](crate::LoggerConfig) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("invalid log level '{0}', expected one of TRACE, DEBUG, INFO, WARN, ERROR, FATAL")]
	InvalidLevel(String),

	#[error("invalid value '{value}' for {key}, expected a boolean")]
	InvalidFlag {
		key: String,
		value: String,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
