use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::{BoardState, Position};
use crate::hash_tiles;
use crate::traits::Heuristic;

/// Weight applied to the heuristic term of a node's priority. Anything above
/// 1 is inadmissible: the search leans greedily toward boards that look close
/// to solved, returning longer-than-optimal move lists much faster.
pub const HEURISTIC_FACTOR: u32 = 2;

struct SearchNode {
    state: BoardState,
    fingerprint: u64,
    heuristic: u32,
    steps: u32,
    parent: Option<usize>,
}

impl SearchNode {
    fn priority(&self) -> u32 {
        self.heuristic * HEURISTIC_FACTOR + self.steps
    }
}

/// Best-first search from `start` to the goal board. Returns the sequence of
/// blank destinations to replay, empty when `start` is already solved.
///
/// The caller must gate this behind `is_solvable`: an unsolvable board never
/// reaches the goal and the search does not give up on its own. The returned
/// path is correct but not guaranteed minimal (see `HEURISTIC_FACTOR`).
pub fn solve(start: &BoardState) -> Vec<Position> {
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut open: BinaryHeap<(Reverse<u32>, usize)> = BinaryHeap::new();

    let root = SearchNode {
        fingerprint: hash_tiles(start.board().tiles()),
        heuristic: start.board().heuristic(),
        steps: 0,
        parent: None,
        state: start.clone(),
    };
    open.push((Reverse(root.priority()), 0));
    arena.push(root);

    while let Some((Reverse(_priority), index)) = open.pop() {
        if arena[index].state.is_goal() {
            return reconstruct_moves(&arena, index);
        }

        let grandparent = arena[index].parent;
        let steps = arena[index].steps + 1;

        for successor in arena[index].state.neighbors() {
            let fingerprint = hash_tiles(successor.board().tiles());

            // One-step lookback: never undo the move that produced this node.
            // Longer cycles are left to the priority ordering to starve.
            if let Some(parent_idx) = grandparent {
                let previous = &arena[parent_idx];
                if previous.fingerprint == fingerprint
                    && previous.state.board() == successor.board()
                {
                    continue;
                }
            }

            let node = SearchNode {
                fingerprint,
                heuristic: successor.board().heuristic(),
                steps,
                parent: Some(index),
                state: successor,
            };
            let id = arena.len();
            open.push((Reverse(node.priority()), id));
            arena.push(node);
        }
    }

    unreachable!("the frontier cannot drain: every expansion pushes a successor");
}

fn reconstruct_moves(arena: &[SearchNode], goal: usize) -> Vec<Position> {
    let mut path: Vec<Position> = Vec::new();

    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        path.push(arena[index].state.blank());
        cursor = arena[index].parent;
    }

    // The last entry collected is the start's own blank, which is not a move
    path.pop();
    path.reverse();
    path
}
