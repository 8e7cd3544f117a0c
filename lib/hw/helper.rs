use stm32g0xx_hal::gpio::gpioa::PA0;
use stm32g0xx_hal::gpio::Analog;
use stm32g0xx_hal::rcc::{Config, PllConfig, Rcc, RccExt};
use stm32g0xx_hal::stm32g0::stm32g070::RCC;

use crate::hw::adc::Adc as HwAdc;

pub fn init_clock(pac_rcc: RCC) -> Rcc {
    // ((16 MHz / 4) * 32) / 2 = 64 MHz
    let pll_config = PllConfig::with_hsi(4, 32, 2);
    pac_rcc.freeze(Config::pll().pll_cfg(pll_config))
}

// PA0 - ADC temperature sensor input
type InputChannel = PA0<Analog>;

// RESERVED for future use
// PA2 - USART2_TX
// PA3 - USART2_RX

pub type Adc = HwAdc<InputChannel>;
