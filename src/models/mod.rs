pub mod marker;
pub mod span;
pub mod word;

pub use marker::*;
pub use span::*;
pub use word::*;
