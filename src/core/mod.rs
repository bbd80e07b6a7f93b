pub mod content;
pub mod counter;
pub mod rotation;
pub mod trigger;
pub mod view;

pub use counter::*;
pub use rotation::*;
pub use trigger::*;
pub use view::*;
