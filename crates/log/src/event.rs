// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log event record and its read-only view

use chrono::{DateTime, Local};

use crate::Level;

/// Read-only view of a log event handed to callbacks
pub trait EventInfo {
	fn time(&self) -> DateTime<Local>;

	/// Base name of the source file of the call site
	fn file(&self) -> &str;

	fn line(&self) -> u32;

	fn level(&self) -> Level;

	fn message(&self) -> &str;

	/// Path of the function that issued the log call, empty when unknown
	fn function(&self) -> &str;
}

/// One log occurrence. Never mutated after construction.
#[derive(Debug, PartialEq, Eq)]
pub struct Event {
	time: DateTime<Local>,
	file: String,
	line: u32,
	function: String,
	level: Level,
	message: String,
}

impl Event {
	pub fn new(
		time: DateTime<Local>,
		file: impl Into<String>,
		line: u32,
		function: impl Into<String>,
		level: Level,
		message: impl Into<String>,
	) -> Self {
		Self {
			time,
			file: file.into(),
			line,
			function: function.into(),
			level,
			message: message.into(),
		}
	}

	/// Console representation without color and without the trailing newline:
	/// `YYYY-MM-DD HH:MM:SS LEVEL file:line function: message`
	pub fn to_line(&self) -> String {
		format!(
			"{} {:<5} {}:{} {}: {}",
			self.time.format("%Y-%m-%d %H:%M:%S"),
			self.level,
			self.file,
			self.line,
			self.function,
			self.message
		)
	}
}

impl EventInfo for Event {
	fn time(&self) -> DateTime<Local> {
		self.time
	}

	fn file(&self) -> &str {
		&self.file
	}

	fn line(&self) -> u32 {
		self.line
	}

	fn level(&self) -> Level {
		self.level
	}

	fn message(&self) -> &str {
		&self.message
	}

	fn function(&self) -> &str {
		&self.function
	}
}
