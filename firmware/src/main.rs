//! Accelerometer bring-up for the two-sensor STM32F405 board.
//!
//! Brings the clock tree up from the internal oscillator, configures both
//! I2C masters and polls the lower BNO055 in accelerometer-only mode,
//! printing one raw X/Y/Z line per cycle.
#![no_std]
#![no_main]

use bno055_accel::i2c::Bno055;
use bno055_accel::types::BNO055OperationMode;
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::i2c::{self, ErrorInterruptHandler, EventInterruptHandler, I2c};
use embassy_stm32::peripherals::{I2C1, I2C2};
use embassy_stm32::time::Hertz;
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

/// Bus frequency for both sensor buses: 100 kHz standard mode.
const BUS_FREQ_HZ: u32 = 100_000;

/// Upper bound on a single bus transaction before it is reported
/// as `Error::Timeout` instead of blocking forever.
const BUS_TIMEOUT: Duration = Duration::from_millis(100);

/// Pause between accelerometer reads.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

bind_interrupts!(struct Irqs {
    I2C1_EV => EventInterruptHandler<I2C1>;
    I2C1_ER => ErrorInterruptHandler<I2C1>;
    I2C2_EV => EventInterruptHandler<I2C2>;
    I2C2_ER => ErrorInterruptHandler<I2C2>;
});

/// Clock tree: HSI through the main PLL to an 84 MHz SYSCLK.
/// 16 MHz / M16 * N336 / P4 = 84 MHz; APB1 runs at half that.
fn clock_config() -> embassy_stm32::Config {
    use embassy_stm32::rcc::*;

    let mut config = embassy_stm32::Config::default();
    config.rcc.hsi = true;
    config.rcc.pll_src = PllSource::HSI;
    config.rcc.pll = Some(Pll {
        prediv: PllPreDiv::DIV16,
        mul: PllMul::MUL336,
        divp: Some(PllPDiv::DIV4),
        divq: Some(PllQDiv::DIV2),
        divr: None,
    });
    config.rcc.sys = Sysclk::PLL1_P;
    config.rcc.ahb_pre = AHBPrescaler::DIV1;
    config.rcc.apb1_pre = APBPrescaler::DIV2;
    config.rcc.apb2_pre = APBPrescaler::DIV1;

    config
}

fn bus_config() -> i2c::Config {
    let mut config = i2c::Config::default();
    config.timeout = BUS_TIMEOUT;

    config
}

/// Fail-stop: mask interrupts and park the core until external reset.
fn fatal() -> ! {
    cortex_m::interrupt::disable();
    loop {
        cortex_m::asm::nop();
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_stm32::init(clock_config());

    let i2c1 = I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        Irqs,
        p.DMA1_CH6,
        p.DMA1_CH0,
        Hertz(BUS_FREQ_HZ),
        bus_config(),
    );
    let i2c2 = I2c::new(
        p.I2C2,
        p.PB10,
        p.PB11,
        Irqs,
        p.DMA1_CH7,
        p.DMA1_CH3,
        Hertz(BUS_FREQ_HZ),
        bus_config(),
    );

    let mut delay = Delay;

    // The lower sensor (alternate address, bus 1) is the one wired up
    // today. The upper one gets the same interface on bus 2 and stays
    // idle until its harness is populated.
    let mut lower = Bno055::new(i2c1).with_alternative_address();
    let _upper = Bno055::new(i2c2);

    if let Err(e) = lower
        .set_mode(BNO055OperationMode::ACC_ONLY, &mut delay)
        .await
    {
        error!("accelerometer mode configuration failed: {}", e);
        fatal();
    }

    loop {
        match lower.accel_data_fixed().await {
            Ok(accel) => info!("X: {}, Y: {}, Z: {}", accel.x, accel.y, accel.z),
            Err(e) => {
                error!("accelerometer read failed: {}", e);
                fatal();
            }
        }

        Timer::after(POLL_INTERVAL).await;
    }
}
