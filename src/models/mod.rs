pub mod behavior;
pub mod pattern;
pub mod session;

pub use behavior::{push_bounded, BehaviorRecord};
pub use pattern::BackgroundPattern;
pub use session::{SessionData, SessionEntry};
