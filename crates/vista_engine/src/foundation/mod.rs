//! Foundation utilities: math types, timing, and logging

pub mod logging;
pub mod math;
pub mod time;
