//! Perfect-maze generation on a square grid.
//!
//! A maze is carved by a randomized depth-first backtracker: starting from a
//! random cell on the leftmost column, passages are carved into unvisited
//! neighbours until every cell has been reached, which leaves a spanning
//! tree of passages (a unique path between any two cells). An entry cell is
//! marked on the left edge and an exit cell in a region biased away from the
//! entry row and toward the right half of the grid.
//!
//! ```
//! use mazegen::{Maze, Role};
//!
//! let maze = Maze::generate_seeded(32, Some(7)).unwrap();
//! let (x, y) = maze.entry().unwrap();
//! assert_eq!(x, 0);
//! assert_eq!(maze[(x, y)].role(), Role::Entry);
//! assert!(maze.cells().all(|cell| cell.visited()));
//! ```

pub mod generators;
pub mod maze;

pub use generators::{GenError, RandomSource};
pub use maze::{Cell, Direction, Grid, Maze, Role};
