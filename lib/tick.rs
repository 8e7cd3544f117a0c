use crate::counter::{Reader, Writer};
use crate::hw::Timer;

/// Tick interrupt handle, the only writer of the tick count.
pub struct Ticker<'a, T> {
    timer: T,
    count: Writer<'a>,
}

impl<'a, T> Ticker<'a, T>
where
    T: Timer,
{
    pub fn new(timer: T, count: Writer<'a>) -> Self {
        Ticker { timer, count }
    }

    pub fn start(&mut self) {
        self.timer.start();
    }

    pub fn on_interrupt(&mut self) {
        self.timer.unpend();
        self.count.increment();
    }

    pub fn clock(&self) -> Reader<'a> {
        self.count.reader()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::Counter;
    use crate::mock::MockTimer;

    #[test]
    fn test_counts_every_interrupt() {
        let mut counter = Counter::new();
        let (writer, clock) = counter.split();
        let mut ticker = Ticker::new(MockTimer::default(), writer);

        ticker.start();
        let before = clock.get();
        for _ in 0..250 {
            ticker.on_interrupt();
        }

        assert_eq!(clock.get(), before + 250);
        assert_eq!(ticker.timer.starts, 1);
        assert_eq!(ticker.timer.unpends, 250);
    }

    #[test]
    fn test_restart_keeps_count() {
        let mut counter = Counter::new();
        let (writer, clock) = counter.split();
        let mut ticker = Ticker::new(MockTimer::default(), writer);

        ticker.start();
        ticker.on_interrupt();
        ticker.start();

        assert_eq!(clock.get(), 1);
        assert_eq!(ticker.timer.starts, 2);
    }

    #[test]
    fn test_wraps() {
        let mut counter = Counter::new();
        let (mut writer, clock) = counter.split();
        writer.preset(u32::MAX - 1);
        let mut ticker = Ticker::new(MockTimer::default(), writer);

        ticker.on_interrupt();
        assert_eq!(clock.get(), u32::MAX);
        ticker.on_interrupt();
        assert_eq!(clock.get(), 0);
        assert_eq!(ticker.clock().get(), 0);
    }
}
