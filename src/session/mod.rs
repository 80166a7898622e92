//! Compilation session state.
//!
//! Holds what outlives a single scanner: the name dictionary interning
//! identifier spellings, and the message sink collecting diagnostics keyed by
//! source position.

pub mod compiler;
pub mod messages;
pub mod names;
