//! Feature implementations for paperclips.
//!
//! - Daily counter with day rollover
//! - Statistics over finalized days
//! - Shell integration

pub mod counter;
pub mod shell;
pub mod stats;
