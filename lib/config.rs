//! Build time configuration.

pub const APP_NAME: &str = "thermo";
pub const SYSTEM: &str = "Bare Metal";
pub const DESCRIPTION: &str = "Analog Signal Reading - Interrupt";

/// Tick interrupt rate, one tick per millisecond.
pub const TICK_RATE_HZ: u32 = 1_000;

/// 12-bit converter
pub const ADC_FULL_SCALE: u16 = 4095;

/// Ticks after which a pending conversion is considered lost.
pub const STALL_TIMEOUT_TICKS: u32 = 100;

/// Ticks between conversion starts in continuous mode.
pub const SAMPLE_PERIOD_TICKS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// One conversion armed at init, never re-armed.
    OneShot,
    /// Every completion schedules the next conversion `period` ticks after
    /// the previous start. Zero re-arms from the completion handler.
    Continuous { period: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub mode: SamplingMode,
    pub full_scale: u16,
    pub stall_timeout: u32,
}

impl SamplerConfig {
    #[cfg(not(feature = "continuous-sampling"))]
    pub const DEFAULT: SamplerConfig = SamplerConfig::new(SamplingMode::OneShot);

    #[cfg(feature = "continuous-sampling")]
    pub const DEFAULT: SamplerConfig = SamplerConfig::new(SamplingMode::Continuous {
        period: SAMPLE_PERIOD_TICKS,
    });

    pub const fn new(mode: SamplingMode) -> Self {
        SamplerConfig {
            mode,
            full_scale: ADC_FULL_SCALE,
            stall_timeout: STALL_TIMEOUT_TICKS,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "continuous-sampling"))]
    fn test_default_is_one_shot() {
        assert_eq!(SamplerConfig::default().mode, SamplingMode::OneShot);
    }

    #[test]
    #[cfg(feature = "continuous-sampling")]
    fn test_default_is_continuous() {
        assert_eq!(
            SamplerConfig::default().mode,
            SamplingMode::Continuous {
                period: SAMPLE_PERIOD_TICKS
            }
        );
    }

    #[test]
    fn test_default_limits() {
        let config = SamplerConfig::DEFAULT;

        assert_eq!(config.full_scale, ADC_FULL_SCALE);
        assert_eq!(config.stall_timeout, STALL_TIMEOUT_TICKS);
    }
}
