use crate::config::{SamplerConfig, SamplingMode};
use crate::error::{Error, Result};
use crate::hw::Converter;
use crate::log::{Level, Logger};
use crate::transfer::{truncate, Transfer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    // Tick at which the conversion was requested
    Pending { since: u32 },
}

pub struct Sampler<C, T> {
    converter: C,
    transfer: T,
    config: SamplerConfig,
    state: State,
    // Tick at which the next continuous conversion is due
    next: Option<u32>,
}

impl<C, T> Sampler<C, T>
where
    C: Converter,
    T: Transfer,
{
    pub fn new(converter: C, transfer: T, config: SamplerConfig) -> Self {
        Sampler {
            converter,
            transfer,
            config,
            state: State::Idle,
            next: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    /// Requests a conversion. At most one is ever in flight.
    pub fn start(&mut self, now: u32) -> Result<()> {
        if self.is_pending() {
            return Err(Error::Busy);
        }
        self.converter.start()?;
        self.state = State::Pending { since: now };
        self.next = None;
        Ok(())
    }

    /// Conversion complete interrupt. Returns the logged whole degrees.
    pub fn complete<L: Logger>(&mut self, now: u32, log: &mut L) -> Result<i32> {
        self.converter.unpend();
        let since = match self.state {
            State::Pending { since } => since,
            State::Idle => {
                log.log(Level::Warn, format_args!("{}", Error::Spurious));
                return Err(Error::Spurious);
            }
        };
        let raw = self.converter.read();
        self.state = State::Idle;
        self.schedule(since, now, log);

        if raw > self.config.full_scale {
            log.log(
                Level::Error,
                format_args!("Invalid sample = {} (max {})", raw, self.config.full_scale),
            );
            return Err(Error::InvalidSample(raw));
        }
        let celsius = truncate(self.transfer.celsius(raw));
        log.log(Level::Info, format_args!("Temperature = {} °C", celsius));
        Ok(celsius)
    }

    /// Super-loop supervision: recovers stalled conversions and starts due ones.
    pub fn poll<L: Logger>(&mut self, now: u32, log: &mut L) {
        if let State::Pending { since } = self.state {
            if now.wrapping_sub(since) >= self.config.stall_timeout {
                self.converter.cancel();
                self.state = State::Idle;
                log.log(
                    Level::Warn,
                    format_args!("{} after {} ticks", Error::Stalled, now.wrapping_sub(since)),
                );
                self.schedule(since, now, log);
            }
            return;
        }
        if let Some(due) = self.next {
            // Signed distance keeps the comparison valid across wrap
            if now.wrapping_sub(due) as i32 >= 0 {
                self.rearm(now, log);
            }
        }
    }

    fn schedule<L: Logger>(&mut self, since: u32, now: u32, log: &mut L) {
        match self.config.mode {
            SamplingMode::OneShot => {}
            SamplingMode::Continuous { period: 0 } => self.rearm(now, log),
            SamplingMode::Continuous { period } => self.next = Some(since.wrapping_add(period)),
        }
    }

    fn rearm<L: Logger>(&mut self, now: u32, log: &mut L) {
        if let Err(err) = self.start(now) {
            // Retry on the next poll
            self.next = Some(now);
            log.log(Level::Warn, format_args!("Rearm failed: {}", err));
        }
    }
}
