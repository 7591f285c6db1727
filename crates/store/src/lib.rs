//! In-memory repository implementations for the messaging ports.
//!
//! Backed by `tokio::sync::RwLock<HashMap>`; safe for concurrent callers.
//! Nothing survives a restart — durability is deliberately out of scope.

pub mod memory;

pub use memory::{
    InMemoryConversationRepository, InMemoryMessageRepository, InMemoryParticipantRepository,
};
