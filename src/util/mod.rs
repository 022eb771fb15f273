//! Small browser and formatting helpers.

pub mod format;
pub mod storage;
