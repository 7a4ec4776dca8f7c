pub mod config;
pub mod controller;
pub mod refresh;

pub use config::SmartConfig;
pub use controller::SmartEngine;
pub use refresh::{
    spawn_hourly_refresh, spawn_refresh, RefreshEvent, RefreshHandle, SharedEngine,
};
