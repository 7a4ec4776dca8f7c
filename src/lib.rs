pub mod behavior;
pub mod db;
pub mod engine;
pub mod greeting;
pub mod models;
pub mod pattern;
pub mod random;
pub mod scoring;
pub mod settings;
pub mod taxonomy;
pub mod utils;

pub use behavior::{BehaviorInsights, SessionTracker};
pub use db::{open_store, Database, KeyValueStore, MemoryStore};
pub use engine::{
    spawn_hourly_refresh, RefreshEvent, RefreshHandle, SharedEngine, SmartConfig, SmartEngine,
};
pub use greeting::{select_greeting, Greeting, GreetingCategory};
pub use models::{BackgroundPattern, BehaviorRecord};
pub use pattern::select_pattern;
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
pub use scoring::{classify, score, ProductivityLabel};
pub use settings::{GreetingTone, PrivacyControls, SettingsConfig};
pub use taxonomy::Category;

/// Install the global logger. `RUST_LOG` overrides the default info level;
/// `TABSENSE_DEBUG=1` turns on debug output for this crate. Calling it twice
/// is harmless.
pub fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if std::env::var("TABSENSE_DEBUG").is_ok_and(|value| value == "1") {
        builder.filter_module("tabsense_lib", log::LevelFilter::Debug);
    }
    builder.parse_default_env();

    if builder.try_init().is_ok() {
        log::info!("tabsense starting up...");
    }
}
