pub mod estimate;
pub mod format;
pub mod render;
pub mod sanitize;
pub mod session;

mod fields;
