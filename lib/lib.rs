#![cfg_attr(not(test), no_std)]

#[cfg(target_os = "none")]
use defmt_rtt as _; // global logger
#[cfg(target_os = "none")]
use panic_probe as _;

pub mod app;
pub mod config;
pub mod counter;
pub mod error;
pub mod hw;
pub mod log;
pub mod sampler;
pub mod tick;
pub mod transfer;

#[cfg(test)]
mod mock;

#[cfg(target_os = "none")]
mod timestamp {
    use core::sync::atomic::{AtomicUsize, Ordering};

    // Log line sequence number
    static COUNT: AtomicUsize = AtomicUsize::new(0);
    defmt::timestamp!("{=usize}", {
        let n = COUNT.load(Ordering::Relaxed);
        COUNT.store(n + 1, Ordering::Relaxed);
        n
    });
}
