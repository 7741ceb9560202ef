mod board;
mod search;
mod shuffle;
mod solvability;
mod traits;


pub use board::{goal_position, Board, BoardError, BoardState, Position};
pub use search::{solve, HEURISTIC_FACTOR};
pub use shuffle::{shuffled, shuffled_with};
pub use solvability::{count_inversions, is_solvable};
pub use traits::{DebugPrintable, Heuristic};

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

pub(crate) fn hash_tiles(tiles: &[u32]) -> u64 {
    let mut hasher = FxHasher::default();
    for tile in tiles {
        tile.hash(&mut hasher);
    }
    hasher.finish()
}
