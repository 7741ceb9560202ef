use colored::Colorize;

use crate::board::{goal_position, Board};

pub trait Heuristic {
    fn manhattan_distance(&self) -> u32;
    fn linear_conflict(&self) -> u32;
    fn heuristic(&self) -> u32;
}

impl Heuristic for Board {
    /// Sum over all non-blank tiles of the grid-step distance to their goal
    /// cell. Zero exactly when the board is solved.
    fn manhattan_distance(&self) -> u32 {
        let dimension = self.dimension();
        let mut distance: u32 = 0;

        for row in 0..dimension {
            for col in 0..dimension {
                let tile = self.tile(row, col);
                if tile == 0 {
                    continue;
                }
                let goal = goal_position(tile, dimension);
                distance += (goal.row.abs_diff(row) + goal.col.abs_diff(col)) as u32;
            }
        }

        distance
    }

    /// Pairs of tiles sharing a goal row (or column) but sitting in reversed
    /// relative order. Each such pair costs at least two extra slides beyond
    /// its Manhattan distance.
    fn linear_conflict(&self) -> u32 {
        let dimension = self.dimension();
        let mut conflicts: u32 = 0;

        for row in 0..dimension {
            // Goal columns of this row's home tiles, in appearance order
            let mut goal_cols: Vec<usize> = Vec::with_capacity(dimension);
            for col in 0..dimension {
                let tile = self.tile(row, col);
                if tile == 0 {
                    continue;
                }
                let goal = goal_position(tile, dimension);
                if goal.row == row {
                    goal_cols.push(goal.col);
                }
            }
            conflicts += reversed_pairs(&goal_cols);
        }

        for col in 0..dimension {
            let mut goal_rows: Vec<usize> = Vec::with_capacity(dimension);
            for row in 0..dimension {
                let tile = self.tile(row, col);
                if tile == 0 {
                    continue;
                }
                let goal = goal_position(tile, dimension);
                if goal.col == col {
                    goal_rows.push(goal.row);
                }
            }
            conflicts += reversed_pairs(&goal_rows);
        }

        conflicts
    }

    fn heuristic(&self) -> u32 {
        self.manhattan_distance() + 2 * self.linear_conflict()
    }
}

fn reversed_pairs(values: &[usize]) -> u32 {
    let mut pairs: u32 = 0;
    for (idx, &value) in values.iter().enumerate() {
        pairs += values[idx + 1..].iter().filter(|&&later| later < value).count() as u32;
    }
    pairs
}

pub trait DebugPrintable {
    fn debug_print(&self);
}

impl DebugPrintable for Board {
    fn debug_print(&self) {
        let dimension = self.dimension();

        print!("┌");
        for col in 0..dimension {
            print!("────");
            if col < dimension - 1 {
                print!("┬");
            }
        }
        println!("┐");

        for row in 0..dimension {
            print!("│");
            for col in 0..dimension {
                let tile = self.tile(row, col);
                if tile == 0 {
                    print!(" {} ", "  ".green());
                } else {
                    print!(" {:>2} ", tile);
                }
                print!("│");
            }
            println!();

            if row < dimension - 1 {
                print!("├");
                for col in 0..dimension {
                    print!("────");
                    if col < dimension - 1 {
                        print!("┼");
                    }
                }
                println!("┤");
            }
        }

        print!("└");
        for col in 0..dimension {
            print!("────");
            if col < dimension - 1 {
                print!("┴");
            }
        }
        println!("┘");
    }
}
