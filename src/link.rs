use std::time::Duration;

use thiserror::Error;

use crate::model::Seat;

// What the surrounding room reports about itself. The engine only keeps
// driving phases while the room is Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomState {
    Waiting,
    Running,
}

// Collaborator-side failure of a choice request. Both recover inside the
// phase handlers by falling back to the deterministic default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("selection timed out")]
    Timeout,
    #[error("seat disconnected")]
    Disconnected,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid player count: {0}")]
    InvalidPlayerCount(usize),
    #[error("phase channel closed")]
    ChannelClosed,
    #[error("phase dispatch stalled")]
    DispatchStalled,
}

// Seam to the hosting room. Transport and rendering live behind it; the
// engine only sends text and asks seats for numeric selections.
// `request_choice` must keep re-prompting until it has a number or fails,
// non-numeric input never reaches the engine.
pub trait RoomLink: Send + Sync {
    fn state(&self) -> RoomState;
    fn broadcast(&self, text: &str);
    fn send(&self, seat: Seat, text: &str);
    fn request_choice(&self, seat: Seat, timeout: Duration) -> Result<usize, ChoiceError>;
}
