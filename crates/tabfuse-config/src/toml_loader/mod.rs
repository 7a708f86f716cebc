//! TOML options file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::read_table;
pub use paths::{create_default_options, default_options_path, options_path_in};
