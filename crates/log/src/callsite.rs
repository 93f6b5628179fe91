// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Source location of a log call

use std::{panic::Location, path::Path};

/// File, line and function of the expression that issued a log call.
///
/// The logging macros fill in all three fields. The plain level methods on
/// [`Logger`](crate::Logger) only know file and line through
/// `#[track_caller]` and leave the function empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callsite {
	file: &'static str,
	line: u32,
	function: &'static str,
}

impl Callsite {
	pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
		Self {
			file,
			line,
			function,
		}
	}

	/// Location of the caller of the enclosing `#[track_caller]` function
	#[track_caller]
	pub fn caller() -> Self {
		let location = Location::caller();
		Self::new(location.file(), location.line(), "")
	}

	/// Base name of the source file
	pub fn file_name(&self) -> &'static str {
		Path::new(self.file).file_name().and_then(|name| name.to_str()).unwrap_or(self.file)
	}

	pub fn file(&self) -> &'static str {
		self.file
	}

	pub fn line(&self) -> u32 {
		self.line
	}

	pub fn function(&self) -> &'static str {
		self.function
	}
}

/// Turns the type name of a marker fn nested in a function into that
/// function's path, e.g. `app::server::start::{{closure}}::f` into
/// `app::server::start`.
#[doc(hidden)]
pub fn function_path(marker: &'static str) -> &'static str {
	let mut path = marker.strip_suffix("::f").unwrap_or(marker);
	while let Some(outer) = path.strip_suffix("::{{closure}}") {
		path = outer;
	}
	path
}

/// Expands to the path of the enclosing function as a `&'static str`
#[doc(hidden)]
#[macro_export]
macro_rules! __function {
	() => {{
		fn f() {}
		fn type_name_of<T>(_: T) -> &'static str {
			::std::any::type_name::<T>()
		}
		$crate::callsite::function_path(type_name_of(f))
	}};
}

#[cfg(test)]
mod tests {
	use super::{Callsite, function_path};

	#[test]
	fn test_file_name_strips_directories() {
		let callsite = Callsite::new("crates/log/src/logger.rs", 12, "reifydb_log::logger::emit");
		assert_eq!(callsite.file_name(), "logger.rs");
		assert_eq!(callsite.file(), "crates/log/src/logger.rs");
		assert_eq!(callsite.line(), 12);
	}

	#[test]
	fn test_file_name_without_directories() {
		assert_eq!(Callsite::new("main.rs", 1, "").file_name(), "main.rs");
		assert_eq!(Callsite::new("", 0, "").file_name(), "");
	}

	#[test]
	fn test_caller_points_at_call_expression() {
		let expected = line!() + 1;
		let callsite = Callsite::caller();
		assert_eq!(callsite.file_name(), "callsite.rs");
		assert_eq!(callsite.line(), expected);
		assert_eq!(callsite.function(), "");
	}

	#[test]
	fn test_function_path() {
		assert_eq!(function_path("app::server::start::f"), "app::server::start");
		assert_eq!(function_path("app::main::{{closure}}::{{closure}}::f"), "app::main");
		assert_eq!(function_path("app::main"), "app::main");
	}

	#[test]
	fn test_function_macro() {
		assert_eq!(crate::__function!(), "reifydb_log::callsite::tests::test_function_macro");

		let in_closure = || crate::__function!();
		assert_eq!(in_closure(), "reifydb_log::callsite::tests::test_function_macro");
	}
}
