pub mod document;
pub mod layout;

pub use document::*;
pub use layout::*;
