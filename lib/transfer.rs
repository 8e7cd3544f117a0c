/// Raw converter reading to degrees Celsius.
pub trait Transfer {
    fn celsius(&self, raw: u16) -> f32;
}

/// `raw * gain / divisor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub gain: f32,
    pub divisor: f32,
}

impl Linear {
    // FIXME not a validated sensor curve, replace once the sensor is characterised
    pub const PLACEHOLDER: Linear = Linear::new(3.3, 100.0);

    pub const fn new(gain: f32, divisor: f32) -> Self {
        Linear { gain, divisor }
    }
}

impl Transfer for Linear {
    fn celsius(&self, raw: u16) -> f32 {
        raw as f32 * self.gain / self.divisor
    }
}

/// Whole degrees as logged, fraction dropped toward zero.
pub fn truncate(value: f32) -> i32 {
    value as i32
}
