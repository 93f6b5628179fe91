// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Logging macros capturing file, line and function of the call site

/// Log through `$logger` at `$level` with a format string and arguments
#[macro_export]
macro_rules! log {
	($logger:expr, $level:expr, $($arg:tt)+) => {
		$logger.log(
			$level,
			$crate::Callsite::new(file!(), line!(), $crate::__function!()),
			format_args!($($arg)+),
		)
	};
}

/// Trace level logging
#[macro_export]
macro_rules! trace {
	($logger:expr, $($arg:tt)+) => {
		$crate::log!($logger, $crate::Level::Trace, $($arg)+)
	};
}

/// Debug level logging
#[macro_export]
macro_rules! debug {
	($logger:expr, $($arg:tt)+) => {
		$crate::log!($logger, $crate::Level::Debug, $($arg)+)
	};
}

/// Info level logging
#[macro_export]
macro_rules! info {
	($logger:expr, $($arg:tt)+) => {
		$crate::log!($logger, $crate::Level::Info, $($arg)+)
	};
}

/// Warning level logging
#[macro_export]
macro_rules! warn {
	($logger:expr, $($arg:tt)+) => {
		$crate::log!($logger, $crate::Level::Warn, $($arg)+)
	};
}

/// Error level logging
#[macro_export]
macro_rules! error {
	($logger:expr, $($arg:tt)+) => {
		$crate::log!($logger, $crate::Level::Error, $($arg)+)
	};
}

/// Fatal level logging, then exit the process with status 1
#[macro_export]
macro_rules! fatal {
	($logger:expr, $($arg:tt)+) => {
		$logger.log_fatal(
			$crate::Callsite::new(file!(), line!(), $crate::__function!()),
			format_args!($($arg)+),
		)
	};
}
