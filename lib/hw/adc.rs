use stm32g0xx_hal::analog::adc::Adc as HalAdc;
use stm32g0xx_hal::hal::adc::Channel as AdcChannel;
use stm32g0xx_hal::hal::blocking::delay::DelayUs;
use stm32g0xx_hal::rcc::Rcc;
use stm32g0xx_hal::stm32g0::stm32g070::{ADC, RCC};

use crate::error::{Error, Result};
use crate::hw::Converter;

/// Software triggered single conversion with end-of-conversion interrupt.
pub struct Adc<I> {
    adc: ADC,
    _input: I,
}

// FIXME Move this in some fashionable way upstream

impl<I> Adc<I>
where
    I: AdcChannel<HalAdc, ID = u8>,
{
    pub fn new<D: DelayUs<u8>>(pac_adc: ADC, input: I, rcc: &mut Rcc, delay: &mut D) -> Self {
        Adc::<I>::enable_clock_and_reset(rcc);
        let mut adc = Adc {
            adc: pac_adc,
            _input: input,
        };
        adc.disable();
        adc.enable_vreg(delay);
        adc.calibrate();
        adc.enable();
        adc.configure();
        adc
    }

    fn configure(&mut self) {
        self.adc.cfgr1.write(|w| unsafe {
            // Software trigger
            w.exten().bits(0b00);
            // Single conversion
            w.cont().clear_bit();
            // Right alignment
            w.align().clear_bit();
            // 12-bit resolution
            w.res().bits(0b00)
        });
        // 160.5 cycles for the best precision
        self.adc.smpr.write(|w| unsafe { w.smp1().bits(0b111) });
        // Select input channel
        self.adc
            .chselr()
            .write(|w| unsafe { w.chsel().bits(1 << I::channel()) });
        // End of conversion interrupt
        self.adc.ier.write(|w| w.eocie().set_bit());
    }

    fn enable_clock_and_reset(_: &mut Rcc) {
        let rcc = unsafe { &(*RCC::ptr()) };
        rcc.apbenr2.modify(|_, w| w.adcen().set_bit());
        rcc.apbrstr2.modify(|_, w| w.adcrst().set_bit());
        rcc.apbrstr2.modify(|_, w| w.adcrst().clear_bit());
    }

    fn enable_vreg<D: DelayUs<u8>>(&mut self, delay: &mut D) {
        self.adc.cr.modify(|_, w| w.advregen().set_bit());
        // Max starting time declared by stm32g070 datasheet is 20 us
        delay.delay_us(20);
    }

    fn enable(&mut self) {
        self.adc.isr.write(|w| w.adrdy().set_bit());
        self.adc.cr.modify(|_, w| w.aden().set_bit());
        while self.adc.isr.read().adrdy().bit_is_clear() {}
    }

    fn disable(&mut self) {
        let cr = self.adc.cr.read();
        if cr.aden().bit_is_clear() {
            return;
        }
        if cr.adstart().bit_is_set() {
            self.adc.cr.modify(|_, w| w.adstp().set_bit());
        }
        self.adc.cr.modify(|_, w| w.addis().set_bit());
        while self.adc.cr.read().aden().bit_is_set() {}
        self.adc.isr.write(|w| w.adrdy().set_bit());
    }

    fn calibrate(&mut self) {
        self.adc.cr.modify(|_, w| w.adcal().set_bit());
        while self.adc.isr.read().eocal().bit_is_clear() {}
        self.adc.isr.write(|w| w.eocal().set_bit());
    }
}

impl<I> Converter for Adc<I>
where
    I: AdcChannel<HalAdc, ID = u8>,
{
    fn start(&mut self) -> Result<()> {
        if self.adc.cr.read().adstart().bit_is_set() {
            return Err(Error::Busy);
        }
        self.adc.isr.write(|w| {
            w.eoc().set_bit();
            w.eos().set_bit()
        });
        self.adc.cr.modify(|_, w| w.adstart().set_bit());
        Ok(())
    }

    fn cancel(&mut self) {
        // ADSTP is only honoured while a conversion is ongoing
        if self.adc.cr.read().adstart().bit_is_set() {
            self.adc.cr.modify(|_, w| w.adstp().set_bit());
        }
        self.unpend();
    }

    fn read(&mut self) -> u16 {
        self.adc.dr.read().data().bits()
    }

    fn unpend(&mut self) {
        self.adc.isr.write(|w| {
            w.eoc().set_bit();
            w.eos().set_bit()
        });
    }
}
