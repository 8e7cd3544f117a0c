use stm32g0xx_hal::hal::timer::CountDown;
use stm32g0xx_hal::rcc::Rcc;
use stm32g0xx_hal::stm32g0::stm32g070::TIM6;
use stm32g0xx_hal::time::U32Ext;
use stm32g0xx_hal::timer::{Timer as HalTimer, TimerExt};

use crate::config::TICK_RATE_HZ;
use crate::hw::Timer;

/// TIM6 update interrupt at [`TICK_RATE_HZ`].
pub struct TickTimer(HalTimer<TIM6>);

impl TickTimer {
    pub fn new(pac_tim: TIM6, rcc: &mut Rcc) -> Self {
        TickTimer(pac_tim.timer(rcc))
    }
}

impl Timer for TickTimer {
    fn start(&mut self) {
        // Re-arming restarts the period, the tick count is not touched
        self.0.clear_irq();
        self.0.listen();
        self.0.start(TICK_RATE_HZ.hz());
    }

    fn unpend(&mut self) {
        self.0.clear_irq();
    }
}
