// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log severity levels

use std::{fmt, str::FromStr};

use colored::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Error;

/// Log severity levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
	Trace = 0,
	Debug = 1,
	Info = 2,
	Warn = 3,
	Error = 4,
	Fatal = 5,
}

impl Level {
	pub const ALL: [Level; 6] = [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error, Level::Fatal];

	pub fn as_str(&self) -> &'static str {
		match self {
			Level::Trace => "TRACE",
			Level::Debug => "DEBUG",
			Level::Info => "INFO",
			Level::Warn => "WARN",
			Level::Error => "ERROR",
			Level::Fatal => "FATAL",
		}
	}

	/// Console color used when colored output is enabled
	pub fn color(&self) -> Color {
		match self {
			Level::Trace => Color::Cyan,
			Level::Debug => Color::Blue,
			Level::Info => Color::Green,
			Level::Warn => Color::Yellow,
			Level::Error => Color::Red,
			Level::Fatal => Color::BrightRed,
		}
	}
}

impl fmt::Display for Level {
	// pad so that width specifiers like {:<5} apply
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl FromStr for Level {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		Level::ALL
			.into_iter()
			.find(|level| level.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| Error::InvalidLevel(s.to_string()))
	}
}

impl Serialize for Level {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Level {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(de::Error::custom)
	}
}
