//! Configuration module.
//!
//! Settings resolve through the chain defaults → TOML file → environment →
//! command line; see [`loader::resolve`].

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{resolve, ConfigError, ConfigFile, ResolvedConfig};
