pub mod fillers;
pub mod pauses;
pub mod sfx;

pub use fillers::*;
pub use pauses::*;
pub use sfx::*;
