//! Puzzle file reading and solution file writing.
//!
//! An input file holds six rows of four whitespace-separated tile
//! numbers: the initial board, then the goal board, conventionally
//! separated by one empty line. 0 marks the blank. The output file is
//! the puzzle description followed by an empty line and the four-line
//! solution block.

use std::fs;
use std::path::Path;

use crate::board::{Board, Pos, PuzzleError, CELLS, COLS, ROWS};
use crate::solution::Solution;

pub fn read_boards(path: &Path) -> Result<(Board, Board), PuzzleError> {
    let text = fs::read_to_string(path)?;
    parse_boards(&text)
}

/// Parses the initial and goal boards out of a puzzle description.
///
/// Empty lines are ignored, so the separator between the two boards is
/// optional. Everything else about the shape is strict.
pub fn parse_boards(text: &str) -> Result<(Board, Board), PuzzleError> {
    let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if rows.len() != 2 * ROWS as usize {
        return Err(PuzzleError::MalformedInput(format!(
            "expected {} rows of tiles, found {}",
            2 * ROWS,
            rows.len()
        )));
    }

    let root = parse_board(&rows[..ROWS as usize])?;
    let goal = parse_board(&rows[ROWS as usize..])?;
    Ok((root, goal))
}

fn parse_board(rows: &[&str]) -> Result<Board, PuzzleError> {
    let mut tiles = [Pos::new(0, 0); CELLS];
    let mut placed = [false; CELLS];

    for (row_idx, row) in rows.iter().enumerate() {
        let numbers: Vec<&str> = row.split_whitespace().collect();
        if numbers.len() != COLS as usize {
            return Err(PuzzleError::MalformedInput(format!(
                "expected {} tiles in row {:?}, found {}",
                COLS,
                row,
                numbers.len()
            )));
        }

        for (col_idx, number) in numbers.iter().enumerate() {
            let tile: usize = number.parse().map_err(|_| {
                PuzzleError::MalformedInput(format!("{:?} is not a tile number", number))
            })?;
            if tile >= CELLS {
                return Err(PuzzleError::MalformedInput(format!(
                    "tile number {} is out of range",
                    tile
                )));
            }
            if placed[tile] {
                return Err(PuzzleError::MalformedInput(format!(
                    "tile {} appears more than once",
                    tile
                )));
            }

            placed[tile] = true;
            tiles[tile] = Pos::new(row_idx as i8 + 1, col_idx as i8 + 1);
        }
    }

    Board::new(tiles)
}

/// Writes the solution file next to the puzzle it solves.
pub fn write_solution(input: &Path, output: &Path, solution: &Solution) -> Result<(), PuzzleError> {
    let description = fs::read_to_string(input)?;
    fs::write(
        output,
        format!("{}\n\n{}\n", description.trim_end(), solution),
    )?;
    Ok(())
}
