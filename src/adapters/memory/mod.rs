//! In-memory test doubles serving canned data.

pub mod users;

pub use users::MemoryUserStore;
