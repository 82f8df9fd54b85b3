pub mod alloy;
pub mod candles;
pub mod config;
pub mod disk_storage;
pub mod error;
pub mod gmx;
pub mod log;
pub mod network;
pub mod reqwest;
pub mod serde;
pub mod wallet;

pub use error::{Result, UtilsError as Error};

pub use reqwest::Reqwest;
