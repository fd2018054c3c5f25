//! Daily paperclip counter.
//!
//! Owns today's done count and the day-boundary rollover that finalizes
//! each day into history.

pub mod daily;
pub mod paperclip;

pub use daily::{
    CompleteOutcome, CounterStatus, DailyCounter, FinalizedDay, ResetOutcome, UndoOutcome,
};
pub use paperclip::{Paperclip, PaperclipState};
