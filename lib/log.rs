//! Best effort line logging.
//!
//! Lines are formatted into a fixed buffer and handed to a [`Logger`]. A line
//! longer than [`LINE_LEN`] is cut at the last character that fits, a sink
//! that cannot keep up drops it. Neither case is reported to the caller.

use core::fmt::{self, Write};

use heapless::String;

pub const LINE_LEN: usize = 64;

pub type Line = String<LINE_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

pub trait Logger {
    fn emit(&mut self, level: Level, line: &str);

    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        let mut line = Line::new();
        // Error only means the line is full
        let _ = Truncate(&mut line).write_fmt(args);
        self.emit(level, &line);
    }
}

// Pushes char by char so an oversized piece keeps its head
struct Truncate<'a>(&'a mut Line);

impl Write for Truncate<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.0.push(c).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

#[cfg(target_os = "none")]
pub struct DefmtLogger;

#[cfg(target_os = "none")]
impl Logger for DefmtLogger {
    fn emit(&mut self, level: Level, line: &str) {
        match level {
            Level::Debug => defmt::debug!("{=str}", line),
            Level::Info => defmt::info!("{=str}", line),
            Level::Warn => defmt::warn!("{=str}", line),
            Level::Error => defmt::error!("{=str}", line),
        }
    }
}
