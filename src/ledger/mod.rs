//! Input models for the forecast solver: entries, categories, and cadences.

pub mod category;
pub mod color;
pub mod entry;
pub mod time_interval;

pub use category::{Category, CategoryKey};
pub use color::{ColorSource, PaletteColors, RandomColors, DEFAULT_COLOR};
pub use entry::{Entry, EntryKind, TimeRange};
pub use time_interval::{Interval, Step};
