mod json;
pub use json::*;
mod time;
pub use time::*;
