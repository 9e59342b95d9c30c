pub mod content;
pub mod utils;
