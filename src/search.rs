use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::board::{is_solvable, Board, PuzzleError};
use crate::node::{Arena, Node, NodeId};
use crate::solution::Solution;
use crate::traits::board::Heuristic;

/// One A* session owning its frontier and explored registries.
///
/// Sessions are built fresh per solve call, so repeated searches in the
/// same process never share registry state.
pub struct Search {
    goal: Board,
    arena: Arena,
    frontier: BinaryHeap<Reverse<(u32, u32, NodeId)>>,
    explored: Vec<NodeId>,
    seen: FxHashSet<Board>,
    seq: u32,
}

impl Search {
    pub fn new(root: Board, goal: Board) -> Self {
        let mut search = Search {
            goal,
            arena: Arena::new(),
            frontier: BinaryHeap::new(),
            explored: Vec::new(),
            seen: FxHashSet::default(),
            seq: 0,
        };

        let h = root.manhattan_to(&goal);
        search.push(Node {
            board: root,
            g: vec![],
            h,
            f: h,
            parent: None,
        });

        search
    }

    /// Registers a node as reachable and queues it for expansion.
    ///
    /// The heap key is (f, insertion sequence), so the lowest f pops
    /// first and equal-f ties go to the earliest insertion.
    fn push(&mut self, node: Node) {
        let f = node.f;
        let seq = self.seq;
        self.seq += 1;

        self.seen.insert(node.board);
        let id = self.arena.insert(node);
        self.frontier.push(Reverse((f, seq, id)));
    }

    /// Runs the expansion loop until the goal pops or the frontier drains.
    pub fn run(mut self) -> Result<Solution, PuzzleError> {
        while let Some(Reverse((_, _, id))) = self.frontier.pop() {
            if self.arena.get(id).board == self.goal {
                // the popped goal node sits in neither registry, so the
                // generated count excludes it
                let generated = self.frontier.len() + self.explored.len();
                return Ok(Solution::reconstruct(&self.arena, id, generated));
            }

            for (child, dir) in self.arena.get(id).board.successors() {
                // a board already seen keeps its first discovery; the
                // consistent heuristic makes that discovery optimal
                if self.seen.contains(&child) {
                    continue;
                }

                let mut g = self.arena.get(id).g.clone();
                g.push(dir);
                let h = child.manhattan_to(&self.goal);
                let f = h + g.len() as u32;
                self.push(Node {
                    board: child,
                    g,
                    h,
                    f,
                    parent: Some(id),
                });
            }

            self.explored.push(id);
        }

        Err(PuzzleError::UnsolvableBoard)
    }
}

/// Finds a minimum-cost move sequence from `root` to `goal`.
///
/// Parity-incompatible pairs are rejected up front rather than by
/// draining a ~240M-board frontier; an exhausted frontier reports the
/// same outcome.
pub fn solve(root: Board, goal: Board) -> Result<Solution, PuzzleError> {
    if !is_solvable(&root, &goal) {
        return Err(PuzzleError::UnsolvableBoard);
    }

    Search::new(root, goal).run()
}
