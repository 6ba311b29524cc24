//! I2C bus responder task
//!
//! Listens for slave-mode bus commands and drives the core responder:
//! writes latch the channel selector, reads answer with a fresh sample
//! of the selected channel. Faults are logged and answered fail-closed;
//! the task never stops listening.

use defmt::*;
use embassy_rp::i2c_slave::{Command, I2cSlave, ReadStatus};
use embassy_rp::peripherals::I2C0;

use tessera_core::{BusResponder, RespondError};

use crate::channels::BUS_ACTIVITY;
use crate::sampler::OnboardAdc;

/// Scratch buffer for incoming write bursts
const WRITE_BUF_SIZE: usize = 16;

/// Cumulative bus activity counters, reported to the heartbeat log
#[derive(Debug, Clone, Copy, Default)]
pub struct BusStats {
    /// Selector bytes latched
    pub selects: u32,
    /// Read requests served (including fail-closed answers)
    pub reads: u32,
    /// Bus errors, unmapped selectors, and failed conversions
    pub faults: u32,
}

/// Bus responder task - serves I2C slave transactions
#[embassy_executor::task]
pub async fn bus_task(mut bus: I2cSlave<'static, I2C0>, mut adc: OnboardAdc) {
    info!("Bus responder task started");

    let mut responder = BusResponder::new();
    let mut stats = BusStats::default();
    let mut buf = [0u8; WRITE_BUF_SIZE];

    loop {
        match bus.listen(&mut buf).await {
            Ok(Command::Write(len)) => {
                latch_selectors(&mut responder, &buf[..len], &mut stats);
            }
            Ok(Command::Read) => {
                serve_read(&mut bus, &responder, &mut adc, &mut stats).await;
            }
            Ok(Command::WriteRead(len)) => {
                // A combined transaction is the write followed by the read
                latch_selectors(&mut responder, &buf[..len], &mut stats);
                serve_read(&mut bus, &responder, &mut adc, &mut stats).await;
            }
            Ok(Command::GeneralCall(len)) => {
                trace!("general call ({} bytes) ignored", len);
            }
            Err(e) => {
                warn!("I2C bus error: {:?}", e);
                stats.faults += 1;
            }
        }

        BUS_ACTIVITY.signal(stats);
    }
}

/// Latch selector bytes from a master write
///
/// Each byte overwrites the previous selection, so the last byte of a
/// burst wins. The byte is not validated; an unmapped selector fails
/// closed on the next read.
fn latch_selectors(responder: &mut BusResponder, data: &[u8], stats: &mut BusStats) {
    for &byte in data {
        debug!("channel select: {=u8}", byte);
    }
    responder.select_from_write(data);
    stats.selects += data.len() as u32;
}

/// Answer a read request with a fresh sample of the selected channel
///
/// An unmapped selector or a failed conversion answers all-zero rather
/// than leaving the master clocking undefined data. Masters reading
/// past the two data bytes get zero padding.
async fn serve_read(
    bus: &mut I2cSlave<'static, I2C0>,
    responder: &BusResponder,
    adc: &mut OnboardAdc,
    stats: &mut BusStats,
) {
    let answer = match responder.respond(adc) {
        Ok(bytes) => bytes,
        Err(RespondError::InvalidChannel(selector)) => {
            warn!(
                "read with unmapped selector {=u8}, answering fail-closed",
                selector
            );
            stats.faults += 1;
            BusResponder::FAIL_CLOSED
        }
        Err(RespondError::Sample(_)) => {
            warn!("ADC conversion failed, answering fail-closed");
            stats.faults += 1;
            BusResponder::FAIL_CLOSED
        }
    };

    match bus.respond_and_fill(&answer, 0x00).await {
        Ok(ReadStatus::Done) => {}
        Ok(ReadStatus::LeftoverBytes(n)) => {
            trace!("master stopped {} bytes early", n);
        }
        Ok(ReadStatus::NeedMoreBytes) => {
            // respond_and_fill pads until the master stops
        }
        Err(e) => {
            warn!("I2C respond error: {:?}", e);
            stats.faults += 1;
        }
    }

    stats.reads += 1;
}
