pub mod path;
pub mod table;
pub mod time;

pub use time::{TimeOfDay, format_minutes};
