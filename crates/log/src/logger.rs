// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Leveled logger with callback dispatch

use std::{
	fmt,
	io::{self, Write},
	panic::{AssertUnwindSafe, catch_unwind},
	process,
};

use chrono::Local;
use parking_lot::Mutex;

use crate::{Callsite, Event, EventInfo, Level, LoggerBuilder, color::ColorGuard};

/// Receives every emitted event in place of console printing
pub type Callback = Box<dyn Fn(&dyn EventInfo) + Send + Sync>;

/// Console target, stdout unless configured otherwise
pub type Output = Box<dyn Write + Send>;

pub(crate) struct State {
	pub(crate) level: Level,
	pub(crate) quiet: bool,
	pub(crate) use_color: bool,
	pub(crate) callbacks: Vec<Callback>,
	pub(crate) out: Output,
}

impl State {
	fn dispatch(&mut self, event: &Event) {
		let State {
			use_color,
			callbacks,
			out,
			..
		} = self;

		for callback in callbacks.iter() {
			// reset is written when the guard drops, also if the callback unwinds
			let _color = if *use_color {
				Some(ColorGuard::set(out.as_mut(), event.level()))
			} else {
				None
			};
			callback(event);
		}
	}

	fn print(&mut self, event: &Event) {
		let mut line = event.to_line();
		line.push('\n');

		let result = if self.use_color {
			ColorGuard::set(self.out.as_mut(), event.level()).write_all(line.as_bytes())
		} else {
			self.out.write_all(line.as_bytes()).and_then(|_| self.out.flush())
		};

		if let Err(err) = result {
			tracing::warn!(%err, "failed to write log line");
		}
	}
}

/// Thread-safe leveled logger.
///
/// Every log call is admitted against the minimum level and the quiet flag,
/// turned into an [`Event`] and then either handed to each registered callback
/// in registration order or written to the console as a single line. The whole
/// sequence runs under one lock, so concurrent callers never interleave.
///
/// Callbacks run on the logging thread while the lock is held. They must not
/// log through the same `Logger`.
pub struct Logger {
	state: Mutex<State>,
}

impl Logger {
	/// Create a logger writing to stdout with colors enabled
	pub fn new(level: Level, quiet: bool) -> Self {
		LoggerBuilder::new().level(level).quiet(quiet).build()
	}

	pub fn builder() -> LoggerBuilder {
		LoggerBuilder::new()
	}

	pub(crate) fn from_state(state: State) -> Self {
		Self {
			state: Mutex::new(state),
		}
	}

	/// Register a callback. Once at least one is registered, nothing is
	/// printed to the console anymore.
	pub fn add_callback<F>(&self, callback: F)
	where
		F: Fn(&dyn EventInfo) + Send + Sync + 'static,
	{
		let mut state = self.state.lock();
		state.callbacks.push(Box::new(callback));
		tracing::trace!(callbacks = state.callbacks.len(), "log callback registered");
	}

	pub fn set_use_color(&self, use_color: bool) {
		self.state.lock().use_color = use_color;
	}

	pub fn level(&self) -> Level {
		self.state.lock().level
	}

	pub fn is_quiet(&self) -> bool {
		self.state.lock().quiet
	}

	pub fn use_color(&self) -> bool {
		self.state.lock().use_color
	}

	/// Log at [`Level::Trace`].
	///
	/// The event carries file and line but no function name; use the
	/// corresponding macro when the function is needed.
	#[track_caller]
	pub fn trace(&self, args: fmt::Arguments<'_>) {
		self.log(Level::Trace, Callsite::caller(), args)
	}

	/// Log at [`Level::Debug`].
	///
	/// The event carries file and line but no function name; use the
	/// corresponding macro when the function is needed.
	#[track_caller]
	pub fn debug(&self, args: fmt::Arguments<'_>) {
		self.log(Level::Debug, Callsite::caller(), args)
	}

	/// Log at [`Level::Info`].
	///
	/// The event carries file and line but no function name; use the
	/// corresponding macro when the function is needed.
	#[track_caller]
	pub fn info(&self, args: fmt::Arguments<'_>) {
		self.log(Level::Info, Callsite::caller(), args)
	}

	/// Log at [`Level::Warn`].
	///
	/// The event carries file and line but no function name; use the
	/// corresponding macro when the function is needed.
	#[track_caller]
	pub fn warn(&self, args: fmt::Arguments<'_>) {
		self.log(Level::Warn, Callsite::caller(), args)
	}

	/// Log at [`Level::Error`].
	///
	/// The event carries file and line but no function name; use the
	/// corresponding macro when the function is needed.
	#[track_caller]
	pub fn error(&self, args: fmt::Arguments<'_>) {
		self.log(Level::Error, Callsite::caller(), args)
	}

	/// Log at [`Level::Fatal`] and exit the process with status 1.
	///
	/// The exit happens even when the event itself is filtered out. The event
	/// carries no function name; [`fatal!`](crate::fatal) fills it in.
	#[track_caller]
	pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
		self.log_fatal(Callsite::caller(), args)
	}

	/// Emit one event. Does not exit the process, even at [`Level::Fatal`].
	pub fn log(&self, level: Level, callsite: Callsite, args: fmt::Arguments<'_>) {
		let mut state = self.state.lock();
		if level < state.level || state.quiet {
			return;
		}

		let event = Event::new(
			Local::now(),
			callsite.file_name(),
			callsite.line(),
			callsite.function(),
			level,
			fmt::format(args),
		);

		if state.callbacks.is_empty() {
			state.print(&event);
		} else {
			state.dispatch(&event);
		}
	}

	/// Emit at [`Level::Fatal`] and exit with status 1. A panicking callback
	/// does not prevent the exit.
	pub fn log_fatal(&self, callsite: Callsite, args: fmt::Arguments<'_>) -> ! {
		let _ = catch_unwind(AssertUnwindSafe(|| self.log(Level::Fatal, callsite, args)));
		process::exit(1)
	}
}

impl fmt::Debug for Logger {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.lock();
		f.debug_struct("Logger")
			.field("level", &state.level)
			.field("quiet", &state.quiet)
			.field("use_color", &state.use_color)
			.field("callbacks", &state.callbacks.len())
			.finish()
	}
}

pub(crate) fn stdout() -> Output {
	Box::new(io::stdout())
}
