use std::fmt;

use crate::board::Direction;
use crate::node::{Arena, NodeId};

/// The reportable outcome of a successful search.
#[derive(Debug, Clone)]
pub struct Solution {
    moves: Vec<Direction>,
    f_trail: Vec<u32>,
    nodes_generated: usize,
}

impl Solution {
    /// Walks the parent chain of the winning node to recover the f value
    /// of every board along the path, root first.
    pub(crate) fn reconstruct(arena: &Arena, winner: NodeId, nodes_generated: usize) -> Self {
        let mut f_trail = Vec::new();
        let mut cursor = Some(winner);
        while let Some(id) = cursor {
            let node = arena.get(id);
            f_trail.push(node.f);
            cursor = node.parent;
        }
        f_trail.reverse();

        Solution {
            moves: arena.get(winner).g.clone(),
            f_trail,
            nodes_generated,
        }
    }

    pub fn path_len(&self) -> usize {
        self.moves.len()
    }

    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    pub fn f_trail(&self) -> &[u32] {
        &self.f_trail
    }

    /// Frontier plus explored sizes at the moment the goal popped.
    pub fn nodes_generated(&self) -> usize {
        self.nodes_generated
    }
}

impl fmt::Display for Solution {
    /// Four lines: path length, nodes generated, the move symbols, and
    /// the f values from root to goal.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.moves.len())?;
        writeln!(f, "{}", self.nodes_generated)?;

        let symbols: Vec<String> = self
            .moves
            .iter()
            .map(|dir| dir.to_char().to_string())
            .collect();
        writeln!(f, "{}", symbols.join(" "))?;

        let trail: Vec<String> = self.f_trail.iter().map(|value| value.to_string()).collect();
        write!(f, "{}", trail.join(" "))
    }
}
