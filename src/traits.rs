pub(crate) mod board {
    use colored::Colorize;

    use crate::board::{Board, Pos, CELLS, COLS, ROWS};

    pub trait Heuristic {
        fn manhattan_to(&self, goal: &Board) -> u32;
    }

    impl Heuristic for Board {
        /// Sum of per-tile Manhattan distances, blank excluded.
        ///
        /// Admissible and consistent for single-tile slides, which is
        /// what lets the search discard rediscovered boards outright.
        fn manhattan_to(&self, goal: &Board) -> u32 {
            (1..CELLS)
                .map(|tile| self.tile(tile).manhattan(goal.tile(tile)))
                .sum()
        }
    }

    pub trait DebugPrintable {
        fn debug_print(&self);
    }

    impl DebugPrintable for Board {
        fn debug_print(&self) {
            print!("┌");
            for col in 1..=COLS {
                print!("────");
                if col < COLS {
                    print!("┬");
                }
            }
            println!("┐");

            for row in 1..=ROWS {
                print!("│");
                for col in 1..=COLS {
                    let tile = self.tile_at(Pos::new(row, col));
                    if tile == 0 {
                        print!(" {} ", "  ".green());
                    } else {
                        print!(" {:>2} ", tile);
                    }
                    print!("│");
                }
                println!();

                if row < ROWS {
                    print!("├");
                    for col in 1..=COLS {
                        print!("────");
                        if col < COLS {
                            print!("┼");
                        }
                    }
                    println!("┤");
                }
            }

            print!("└");
            for col in 1..=COLS {
                print!("────");
                if col < COLS {
                    print!("┴");
                }
            }
            println!("┘");
        }
    }
}
