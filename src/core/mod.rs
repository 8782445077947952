//! Configuration, on-disk storage and small filesystem helpers.

pub mod config;
pub mod storage;
pub mod utils;
