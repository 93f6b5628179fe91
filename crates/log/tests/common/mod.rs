// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use std::{
	io::{self, Write},
	sync::Arc,
};

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use reifydb_log::{Level, Logger};

/// Shared in-memory console target
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
	pub fn contents(&self) -> String {
		String::from_utf8(self.0.lock().clone()).unwrap()
	}

	pub fn lines(&self) -> Vec<String> {
		self.contents().lines().map(str::to_string).collect()
	}
}

impl Write for Capture {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

pub fn capturing_logger(level: Level, color: bool) -> (Logger, Capture) {
	let capture = Capture::default();
	let logger = Logger::builder().level(level).color(color).writer(capture.clone()).build();
	(logger, capture)
}

/// Remove ANSI color sequences
pub fn strip_colors(s: &str) -> String {
	let mut result = String::with_capacity(s.len());
	let mut chars = s.chars();
	while let Some(c) = chars.next() {
		if c == '\x1b' {
			for c in chars.by_ref() {
				if c == 'm' {
					break;
				}
			}
		} else {
			result.push(c);
		}
	}
	result
}

/// Split a console line into timestamp and the rest, checking the timestamp
pub fn split_timestamp(line: &str) -> (NaiveDateTime, &str) {
	assert!(line.len() > 20, "line too short: {line:?}");
	let (timestamp, rest) = line.split_at(19);
	let timestamp = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
		.unwrap_or_else(|err| panic!("bad timestamp in {line:?}: {err}"));
	(timestamp, rest.strip_prefix(' ').unwrap_or_else(|| panic!("missing separator in {line:?}")))
}
