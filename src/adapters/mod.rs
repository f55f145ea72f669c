//! Adapter implementations for the port traits.
//!
//! `live` adapters touch the real operating system and network; the
//! `recording`, `failing`, and `memory` adapters are test doubles.

pub mod failing;
pub mod live;
pub mod memory;
pub mod recording;
