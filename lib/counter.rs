//! Wrapping event counters shared between execution contexts.
//!
//! A [`Counter`] has exactly one [`Writer`], handed out by [`Counter::split`]
//! together with a [`Reader`]. Readers are `Copy` and can be given to any
//! context. With a single writer the increment is a plain load followed by a
//! store, which also works on cores without compare-and-swap (thumbv6m).

use core::sync::atomic::{AtomicU32, Ordering};

pub struct Counter {
    value: AtomicU32,
}

impl Counter {
    pub const fn new() -> Self {
        Counter {
            value: AtomicU32::new(0),
        }
    }

    /// Splits the counter into its only writer and a reader.
    pub fn split(&mut self) -> (Writer<'_>, Reader<'_>) {
        let value = &self.value;
        (Writer { value }, Reader { value })
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new()
    }
}

pub struct Writer<'a> {
    value: &'a AtomicU32,
}

impl<'a> Writer<'a> {
    pub fn increment(&mut self) {
        let n = self.value.load(Ordering::Relaxed);
        self.value.store(n.wrapping_add(1), Ordering::Release);
    }

    pub fn get(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn reader(&self) -> Reader<'a> {
        Reader { value: self.value }
    }

    pub(crate) fn clear(&mut self) {
        self.value.store(0, Ordering::Release);
    }

    #[cfg(test)]
    pub(crate) fn preset(&mut self, value: u32) {
        self.value.store(value, Ordering::Release);
    }
}

#[derive(Clone, Copy)]
pub struct Reader<'a> {
    value: &'a AtomicU32,
}

impl<'a> Reader<'a> {
    pub fn get(&self) -> u32 {
        self.value.load(Ordering::Acquire)
    }
}
