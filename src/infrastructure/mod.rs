pub mod config;
pub mod sheet;
pub mod storage;
