//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::tasks::BusStats;

/// Cumulative bus activity counters (updated by the bus task after each
/// transaction, drained by the main loop heartbeat)
pub static BUS_ACTIVITY: Signal<CriticalSectionRawMutex, BusStats> = Signal::new();
