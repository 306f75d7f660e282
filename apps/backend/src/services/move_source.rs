//! Where the cpu's moves come from.
//!
//! Gameplay takes a `MoveSource` instead of reaching for a global RNG so tests
//! can script the cpu and production can seed it for reproducible runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Move;

/// Supplier of cpu moves. Implementations must be safe to share across workers.
pub trait MoveSource: Send + Sync {
    fn next_move(&self) -> Move;
}

/// Uniform random moves.
pub struct RandomMoveSource {
    rng: Mutex<StdRng>,
}

impl RandomMoveSource {
    /// `Some(seed)` gives a reproducible sequence; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MoveSource for RandomMoveSource {
    fn next_move(&self) -> Move {
        let idx = self.rng.lock().random_range(0..Move::ALL.len());
        Move::ALL[idx]
    }
}

/// Replays a fixed sequence, wrapping around at the end.
pub struct ScriptedMoveSource {
    script: Vec<Move>,
    cursor: AtomicUsize,
}

impl ScriptedMoveSource {
    /// An empty script falls back to always playing ROCK.
    pub fn new(script: impl Into<Vec<Move>>) -> Self {
        let mut script = script.into();
        if script.is_empty() {
            script.push(Move::Rock);
        }
        Self {
            script,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn always(mv: Move) -> Self {
        Self::new(vec![mv])
    }
}

impl MoveSource for ScriptedMoveSource {
    fn next_move(&self) -> Move {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.script[i % self.script.len()]
    }
}

impl std::fmt::Debug for dyn MoveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MoveSource")
    }
}
