//! # Tetris piece queue
//!
//! The "next pieces" preview of a falling-block game, kept in a fixed-capacity
//! circular queue. Playing the front piece removes it and a freshly generated
//! piece is appended, so the preview always shows five pieces.
//!
//! ## Modules
//!
//! 1. **queue** - the ring buffer: enqueue, dequeue, full/empty, logical-order snapshot
//! 2. **piece** - piece kinds and the seeded factory handing out increasing ids
//! 3. **controller** - the `1`/`2`/`0` menu loop driving the queue
//! 4. **display** - colored console rendering
//! 5. **config** / **logging** - command-line flags and the tracing subscriber
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin piece_preview -- --seed 42
//! ```

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod logging;
pub mod piece;
pub mod queue;

pub use controller::{Command, Controller, PlayOutcome};
pub use error::{ControllerError, QueueError};
pub use piece::{Piece, PieceFactory, PieceKind};
pub use queue::{PieceQueue, PREVIEW_CAPACITY};
