//! Vault lifecycle: the registry of named storage roots.

pub mod registry;
pub mod types;

pub use registry::VaultManager;
pub use types::VaultHandle;
