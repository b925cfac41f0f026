// Adapters layer: concrete implementations of the domain ports for the
// filesystem and the terminal.

#[cfg(feature = "cli")]
pub mod prompt;
pub mod token_store;
