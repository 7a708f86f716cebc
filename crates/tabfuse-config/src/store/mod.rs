//! Cached options with atomic replacement on save.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::ConfigStore;
