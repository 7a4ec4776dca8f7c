pub mod classifier;
pub mod productivity;

pub use classifier::{classify, classify_bookmark, classify_bookmark_click, classify_search};
pub use productivity::{score, ProductivityLabel};
