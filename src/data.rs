//! Market data handling

pub mod resample;
#[cfg(feature = "fetch")]
pub mod sources;
