use crate::config::{APP_NAME, DESCRIPTION, SYSTEM};
use crate::counter::{Reader, Writer};
use crate::error::Error;
use crate::hw::{Converter, Timer};
use crate::log::{Level, Logger};
use crate::sampler::Sampler;
use crate::tick::Ticker;
use crate::transfer::Transfer;

/// Super-loop side of the application, the only writer of the iteration count.
pub struct App<'a> {
    iterations: Writer<'a>,
    clock: Reader<'a>,
}

impl<'a> App<'a> {
    pub fn new(iterations: Writer<'a>, clock: Reader<'a>) -> Self {
        App { iterations, clock }
    }

    pub fn init<TIM, C, T, L>(
        &mut self,
        ticker: &mut Ticker<'_, TIM>,
        sampler: &mut Sampler<C, T>,
        log: &mut L,
    ) where
        TIM: Timer,
        C: Converter,
        T: Transfer,
        L: Logger,
    {
        let now = self.clock.get();
        log.emit(Level::Info, "");
        log.log(
            Level::Info,
            format_args!("{} is running - Tick [ms] = {}", APP_NAME, now),
        );
        log.emit(Level::Info, SYSTEM);
        log.emit(Level::Info, DESCRIPTION);

        self.iterations.clear();
        ticker.start();
        match sampler.start(now) {
            Ok(()) => {}
            // Still exactly one in flight
            Err(Error::Busy) if sampler.is_pending() => {
                log.emit(Level::Debug, "Conversion already pending");
            }
            Err(err) => log.log(Level::Warn, format_args!("First conversion failed: {}", err)),
        }
    }

    /// Heartbeat, called once per super-loop pass.
    #[inline]
    pub fn update(&mut self) {
        self.iterations.increment();
    }

    pub fn iterations(&self) -> u32 {
        self.iterations.get()
    }
}
