// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::{self, Write};

use crate::Level;

const RESET: &str = "\x1b[0m";

/// Escape sequence switching the foreground to the color of `level`
pub fn set_sequence(level: Level) -> String {
	format!("\x1b[{}m", level.color().to_fg_str())
}

pub fn reset_sequence() -> &'static str {
	RESET
}

/// Writes the color of a level on creation and the reset sequence on drop.
///
/// Write errors on either sequence are ignored; the bracketed payload reports
/// its own errors through [`Write`].
pub(crate) struct ColorGuard<'a> {
	out: &'a mut (dyn Write + Send + 'static),
}

impl<'a> ColorGuard<'a> {
	pub(crate) fn set(out: &'a mut (dyn Write + Send + 'static), level: Level) -> Self {
		let _ = out.write_all(set_sequence(level).as_bytes());
		Self {
			out,
		}
	}
}

impl Write for ColorGuard<'_> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.out.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.out.flush()
	}
}

impl Drop for ColorGuard<'_> {
	fn drop(&mut self) {
		let _ = self.out.write_all(reset_sequence().as_bytes());
		let _ = self.out.flush();
	}
}
