//! Storage adapters implementing the repository traits.

pub mod memory;

pub use memory::InMemoryGames;
