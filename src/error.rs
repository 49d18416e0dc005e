use std::io;
use thiserror::Error;

/// Rejections from the ring buffer. The queue is left untouched in both cases.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("the queue is full, no more pieces can be inserted")]
    Full,

    #[error("the queue is empty, there are no pieces to play")]
    Empty,
}

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("invalid option '{0}', please choose 1, 2 or 0")]
    InvalidInput(String),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ControllerError {
    pub fn invalid_input(raw: impl Into<String>) -> Self {
        Self::InvalidInput(raw.into())
    }

    /// Everything except a broken console is reported and the loop carries on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ControllerError::Io(_))
    }
}
