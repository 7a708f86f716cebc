mod core;
mod window;

pub use self::core::*;
pub use window::*;
