pub mod buffer;
pub mod link;

pub use buffer::*;
