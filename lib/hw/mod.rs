use crate::error::Result;

#[cfg(target_os = "none")]
mod adc;
#[cfg(target_os = "none")]
mod helper;
#[cfg(target_os = "none")]
mod timers;

#[cfg(target_os = "none")]
pub use helper::*;
#[cfg(target_os = "none")]
pub use timers::TickTimer;

/// Periodic interrupt source.
pub trait Timer {
    fn start(&mut self);
    fn unpend(&mut self);
}

/// Single channel analog converter signalling completion by interrupt.
pub trait Converter {
    /// Requests one conversion, `Error::Busy` if the hardware is still converting.
    fn start(&mut self) -> Result<()>;
    /// Aborts an ongoing conversion.
    fn cancel(&mut self);
    /// Last completed raw reading.
    fn read(&mut self) -> u16;
    fn unpend(&mut self);
}
