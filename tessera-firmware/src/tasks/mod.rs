//! Embassy async tasks

pub mod bus;

pub use bus::{bus_task, BusStats};
