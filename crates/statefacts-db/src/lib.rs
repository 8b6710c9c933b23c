//! Fun-fact document store for the US states API.
//!
//! One [`FactDocument`] per state code, holding an ordered list of fun
//! facts. Handlers only see the [`FactStore`] trait; the backend is picked
//! at startup.
//!
//! # Modules
//!
//! - [`store`] -- The [`FactStore`] trait (`find_all`, `find_one`, `save`)
//! - [`dragonfly`] -- `Dragonfly` (Redis-compatible) backend
//! - [`memory`] -- Process-local backend for tests and development
//! - [`error`] -- Shared error types
//!
//! # Consistency
//!
//! Writes replace the whole document. Two concurrent mutations of the same
//! state race and the last write wins; there is no versioning.
//!
//! [`FactDocument`]: statefacts_types::FactDocument

pub mod dragonfly;
pub mod error;
pub mod memory;
pub mod store;

// Re-export primary types for convenience.
pub use dragonfly::DragonflyPool;
pub use error::DbError;
pub use memory::MemoryFactStore;
pub use store::FactStore;
