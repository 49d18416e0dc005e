//! Fixed-capacity circular queue of pieces.
//!
//! Slots are never shifted. `front` walks forward on every dequeue, `rear` on
//! every enqueue, both modulo the capacity. When the queue is full the two
//! cursors point at the same slot, exactly as they do when it is empty, so
//! occupancy is always read from `count`.

use crate::error::QueueError;
use crate::piece::{Piece, PieceFactory};
use rand::Rng;
use std::iter::FusedIterator;
use tracing::debug;

/// Number of upcoming pieces shown in the preview.
pub const PREVIEW_CAPACITY: usize = 5;

#[derive(Debug, Clone)]
pub struct PieceQueue<const N: usize = PREVIEW_CAPACITY> {
    slots: [Option<Piece>; N],
    front: usize,
    rear: usize,
    count: usize,
}

impl<const N: usize> PieceQueue<N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "a piece queue needs at least one slot");

    /// An empty queue. Call [`PieceQueue::initialize`] to pre-fill it.
    pub fn new() -> Self {
        let () = Self::NON_ZERO_CAPACITY;
        PieceQueue {
            slots: [None; N],
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    /// Clears the queue, restarts the factory's id counter and fills every slot.
    pub fn initialize<R: Rng>(&mut self, factory: &mut PieceFactory<R>) {
        self.slots = [None; N];
        self.front = 0;
        self.rear = 0;
        self.count = 0;
        factory.reset();

        for _ in 0..N {
            let inserted = self.enqueue(factory.generate());
            debug_assert!(inserted.is_ok(), "a cleared queue holds exactly N pieces");
        }
    }

    /// Shorthand for `new` followed by `initialize`.
    pub fn filled<R: Rng>(factory: &mut PieceFactory<R>) -> Self {
        let mut queue = Self::new();
        queue.initialize(factory);
        queue
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Physical slot holding the next piece to play.
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Physical slot the next enqueued piece will land in.
    pub fn rear_index(&self) -> usize {
        self.rear
    }

    pub fn peek(&self) -> Option<&Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            debug!(id = piece.id(), "enqueue rejected, queue full");
            return Err(QueueError::Full);
        }

        self.slots[self.rear] = Some(piece);
        self.rear = (self.rear + 1) % N;
        self.count += 1;

        debug!(id = piece.id(), kind = %piece.kind(), rear = self.rear, count = self.count, "enqueued");
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            debug!("dequeue rejected, queue empty");
            return Err(QueueError::Empty);
        }

        // occupied slots always hold a piece
        let piece = self.slots[self.front].take().ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % N;
        self.count -= 1;

        debug!(id = piece.id(), kind = %piece.kind(), front = self.front, count = self.count, "dequeued");
        Ok(piece)
    }

    /// Occupied slots in play order, oldest first.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    pub fn snapshot(&self) -> Vec<Piece> {
        self.iter().copied().collect()
    }
}

impl<const N: usize> Default for PieceQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Borrowing iterator over the logical order
// =============================================================================

pub struct Iter<'a, const N: usize> {
    queue: &'a PieceQueue<N>,
    offset: usize,
}

impl<'a, const N: usize> Iterator for Iter<'a, N> {
    type Item = &'a Piece;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.count {
            return None;
        }
        let slot = (self.queue.front + self.offset) % N;
        self.offset += 1;
        self.queue.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.count.saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Iter<'_, N> {}

impl<const N: usize> FusedIterator for Iter<'_, N> {}

impl<'a, const N: usize> IntoIterator for &'a PieceQueue<N> {
    type Item = &'a Piece;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    proptest! {
        #[test]
        fn cursors_stay_consistent(seed in any::<u64>(), ops in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut factory = PieceFactory::seeded(seed);
            let mut queue: PieceQueue = PieceQueue::new();

            for push in ops {
                if push {
                    let _ = queue.enqueue(factory.generate());
                } else {
                    let _ = queue.dequeue();
                }
                prop_assert!(queue.len() <= queue.capacity());
                prop_assert!(queue.front_index() < PREVIEW_CAPACITY);
                prop_assert_eq!(queue.rear_index(), (queue.front_index() + queue.len()) % PREVIEW_CAPACITY);
            }
        }

        #[test]
        fn behaves_like_a_bounded_vecdeque(seed in any::<u64>(), ops in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut factory = PieceFactory::seeded(seed);
            let mut queue: PieceQueue = PieceQueue::new();
            let mut model: VecDeque<Piece> = VecDeque::new();

            for push in ops {
                if push {
                    let piece = factory.generate();
                    let result = queue.enqueue(piece);
                    if model.len() == PREVIEW_CAPACITY {
                        prop_assert_eq!(result, Err(QueueError::Full));
                    } else {
                        prop_assert!(result.is_ok());
                        model.push_back(piece);
                    }
                } else {
                    prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
                }
                prop_assert_eq!(queue.snapshot(), model.iter().copied().collect::<Vec<_>>());
            }
        }

        #[test]
        fn ids_strictly_increase_across_rotations(seed in any::<u64>(), rotations in 0usize..100) {
            let mut factory = PieceFactory::seeded(seed);
            let mut queue: PieceQueue = PieceQueue::filled(&mut factory);
            let mut last_played = 0;

            for _ in 0..rotations {
                let played = queue.dequeue().unwrap();
                prop_assert!(played.id() > last_played);
                last_played = played.id();
                queue.enqueue(factory.generate()).unwrap();
            }

            let ids: Vec<u64> = queue.iter().map(|p| p.id()).collect();
            let expected: Vec<u64> = (rotations as u64 + 1..=rotations as u64 + 5).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
