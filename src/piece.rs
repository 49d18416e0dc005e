use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

// =============================================================================
// Piece kinds and the piece record
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Uniform over the seven kinds, so `rng.gen::<PieceKind>()` just works.
impl Distribution<PieceKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: u64,
    kind: PieceKind,
}

impl Piece {
    pub fn new(id: u64, kind: PieceKind) -> Self {
        Piece { id, kind }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} #{})", self.kind, self.id)
    }
}

// =============================================================================
// Factory: owns the id counter and the random source
// =============================================================================

/// Hands out pieces with strictly increasing ids starting at 1.
///
/// The random source is injected so a seeded `StdRng` gives a reproducible
/// sequence of kinds in tests.
pub struct PieceFactory<R: Rng = StdRng> {
    rng: R,
    next_id: u64,
}

impl PieceFactory<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        PieceFactory::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        PieceFactory::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PieceFactory<R> {
    pub fn new(rng: R) -> Self {
        PieceFactory { rng, next_id: 1 }
    }

    pub fn generate(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(id, self.rng.gen())
    }

    /// The id the next generated piece will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn reset(&mut self) {
        self.next_id = 1;
    }
}
