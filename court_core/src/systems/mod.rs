pub mod defender;
pub mod flight;
pub mod input;
pub mod relaunch;

pub use defender::*;
pub use flight::*;
pub use input::*;
pub use relaunch::*;
