use std::string::String;
use std::vec::Vec;

use crate::error::{Error, Result};
use crate::hw::{Converter, Timer};
use crate::log::{Level, Logger};

#[derive(Default)]
pub struct MockConverter {
    pub value: u16,
    pub busy: bool,
    pub starts: usize,
    pub cancels: usize,
    pub reads: usize,
    pub unpends: usize,
}

impl MockConverter {
    pub fn new(value: u16) -> Self {
        MockConverter {
            value,
            ..Default::default()
        }
    }
}

impl Converter for MockConverter {
    fn start(&mut self) -> Result<()> {
        if self.busy {
            return Err(Error::Busy);
        }
        self.starts += 1;
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }

    fn read(&mut self) -> u16 {
        self.reads += 1;
        self.value
    }

    fn unpend(&mut self) {
        self.unpends += 1;
    }
}

#[derive(Default)]
pub struct MockTimer {
    pub starts: usize,
    pub unpends: usize,
}

impl Timer for MockTimer {
    fn start(&mut self) {
        self.starts += 1;
    }

    fn unpend(&mut self) {
        self.unpends += 1;
    }
}

#[derive(Default)]
pub struct RecordLogger {
    lines: Vec<(Level, String)>,
}

impl RecordLogger {
    pub fn new() -> Self {
        RecordLogger::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.clone()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Logger for RecordLogger {
    fn emit(&mut self, level: Level, line: &str) {
        self.lines.push((level, line.into()));
    }
}
