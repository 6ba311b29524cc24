//! Tessera - I2C analog acquisition bridge firmware
//!
//! Firmware binary for RP2040-based boards. The device sits on an I2C
//! bus as a slave peripheral and serves four analog channels: a master
//! write latches a channel selector, each master read answers a fresh
//! 16-bit conversion of the selected channel, high byte first.
//!
//! Named after the Greek "tessera" meaning "four" - the number of
//! analog channels the device serves.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c;
use embassy_rp::i2c_slave::{self, I2cSlave};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use crate::sampler::OnboardAdc;

mod board;
mod channels;
mod sampler;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tessera firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // I2C0 in slave mode on the fixed bus pins (SDA=GPIO4, SCL=GPIO5).
    // The driver enables the internal pull-ups; the master supplies the
    // bus clock, so no rate is configured here.
    let mut bus_config = i2c_slave::Config::default();
    bus_config.addr = board::SLAVE_ADDRESS;
    bus_config.general_call = false;
    let bus = I2cSlave::new(p.I2C0, p.PIN_5, p.PIN_4, Irqs, bus_config);
    info!(
        "I2C slave listening at address {=u16:#x}",
        board::SLAVE_ADDRESS
    );

    // One ADC input per exposed channel, in selector order.
    // Pin assignments are fixed: ADC0..ADC3 on GPIO26..GPIO29.
    let adc = Adc::new_blocking(p.ADC, embassy_rp::adc::Config::default());
    let inputs = [
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_28, Pull::None),
        Channel::new_pin(p.PIN_29, Pull::None),
    ];
    let sampler = OnboardAdc::new(adc, inputs);
    info!("ADC channels initialized");

    // Spawn tasks
    spawner.spawn(tasks::bus_task(bus, sampler)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in the bus
    // task. The heartbeat reports bus activity for debugging.
    loop {
        embassy_time::Timer::after_secs(60).await;
        match channels::BUS_ACTIVITY.try_take() {
            Some(stats) => trace!(
                "Main loop heartbeat: {=u32} selects, {=u32} reads, {=u32} faults",
                stats.selects,
                stats.reads,
                stats.faults
            ),
            None => trace!("Main loop heartbeat: bus idle"),
        }
    }
}
