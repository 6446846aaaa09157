mod field_error;
mod select;
mod text_input;

pub use field_error::*;
pub use select::*;
pub use text_input::*;
