//! Paperclip view model.
//!
//! A renderer draws one paperclip per goal slot; done ones are green and
//! undone ones are red. Paperclips carry no identity beyond their slot.

use serde::{Deserialize, Serialize};

/// Which side of the board a paperclip sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperclipState {
    Undone,
    Done,
}

impl PaperclipState {
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Undone => "red",
            Self::Done => "green",
        }
    }
}

/// A single paperclip slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paperclip {
    pub id: u32,
    pub state: PaperclipState,
}

/// Lay out paperclips for `done` completions against `goal`.
///
/// Done paperclips come first. When `done` exceeds `goal` every paperclip is
/// done and the extra ones are appended.
#[must_use]
pub fn layout(done: u32, goal: u32) -> Vec<Paperclip> {
    (0..done.max(goal))
        .map(|id| Paperclip {
            id,
            state: if id < done {
                PaperclipState::Done
            } else {
                PaperclipState::Undone
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partial() {
        let clips = layout(2, 5);
        assert_eq!(clips.len(), 5);
        assert_eq!(
            clips.iter().filter(|c| c.state == PaperclipState::Done).count(),
            2
        );
        assert_eq!(clips[0].state.color(), "green");
        assert_eq!(clips[4].state.color(), "red");
    }

    #[test]
    fn test_layout_over_completed() {
        let clips = layout(4, 3);
        assert_eq!(clips.len(), 4);
        assert!(clips.iter().all(|c| c.state == PaperclipState::Done));
    }

    #[test]
    fn test_layout_ids_are_slots() {
        let ids: Vec<u32> = layout(0, 3).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
