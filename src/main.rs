#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
use lib::{
    app::App,
    config::SamplerConfig,
    counter::{Counter, Reader},
    hw::{init_clock, Adc, TickTimer},
    log::DefmtLogger,
    sampler::Sampler,
    tick::Ticker,
    transfer::Linear,
};
#[cfg(target_os = "none")]
use rtic::app;
#[cfg(target_os = "none")]
use stm32g0xx_hal::{delay::DelayExt, gpio::GpioExt};

#[cfg(target_os = "none")]
#[app(device = stm32g0xx_hal::stm32, peripherals = true)]
const APP: () = {
    struct Resources {
        app: App<'static>,
        clock: Reader<'static>,
        ticker: Ticker<'static, TickTimer>,
        sampler: Sampler<Adc, Linear>,
    }

    #[init]
    fn init(cx: init::Context) -> init::LateResources {
        static mut TICKS: Counter = Counter::new();
        static mut ITERATIONS: Counter = Counter::new();

        let core: rtic::export::Peripherals = cx.core;
        let device: stm32g0xx_hal::stm32::Peripherals = cx.device;

        // Counters
        let (tick_writer, clock) = TICKS.split();
        let (iterations, _) = ITERATIONS.split();

        // Clock
        let mut rcc = init_clock(device.RCC);
        let mut delay = core.SYST.delay(&mut rcc);

        // GPIO
        let gpioa = device.GPIOA.split(&mut rcc);

        // Tick
        let timer = TickTimer::new(device.TIM6, &mut rcc);
        let ticker = Ticker::new(timer, tick_writer);

        // ADC
        let adc = Adc::new(device.ADC, gpioa.pa0, &mut rcc, &mut delay);
        let sampler = Sampler::new(adc, Linear::PLACEHOLDER, SamplerConfig::DEFAULT);

        init::LateResources {
            app: App::new(iterations, clock),
            clock,
            ticker,
            sampler,
        }
    }

    #[idle(resources = [app, &clock, ticker, sampler])]
    fn idle(mut cx: idle::Context) -> ! {
        let mut log = DefmtLogger;
        let clock: &Reader<'static> = cx.resources.clock;
        let app: &mut App<'static> = cx.resources.app;

        let mut sampler = cx.resources.sampler;
        cx.resources.ticker.lock(|ticker: &mut Ticker<'static, TickTimer>| {
            sampler.lock(|sampler: &mut Sampler<Adc, Linear>| {
                app.init(ticker, sampler, &mut log);
            })
        });
        loop {
            app.update();
            let now = clock.get();
            sampler.lock(|sampler: &mut Sampler<Adc, Linear>| sampler.poll(now, &mut log));
        }
    }

    #[task(binds = ADC, priority = 1, resources = [&clock, sampler])]
    fn adc(cx: adc::Context) {
        let mut log = DefmtLogger;
        let sampler: &mut Sampler<Adc, Linear> = cx.resources.sampler;

        // Already logged by the sampler
        let _ = sampler.complete(cx.resources.clock.get(), &mut log);
    }

    #[task(binds = TIM6, priority = 2, resources = [ticker])]
    fn tim6(cx: tim6::Context) {
        let ticker: &mut Ticker<'static, TickTimer> = cx.resources.ticker;

        ticker.on_interrupt();
    }
};

#[cfg(not(target_os = "none"))]
fn main() {}
