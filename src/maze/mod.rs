pub mod cell;
mod grid;

pub use cell::{Cell, Direction, Role};
pub use grid::Grid;

use crate::generators::{self, GenError, RandomSource};

/// A generated perfect maze over a square grid.
///
/// The passage graph carved by generation is a spanning tree: every cell is
/// reachable from every other cell through exactly one path. One cell on
/// the leftmost column carries the `Entry` role; for sizes ≥ 2 exactly one
/// other cell carries `Exit`. Renderers read walls and openings through the
/// per-cell accessors; solvers read traversable edges the same way.
#[derive(Debug)]
pub struct Maze {
    grid: Grid,
    size: u8,
    entry: Option<(u8, u8)>,
    exit: Option<(u8, u8)>,
}

impl Maze {
    /// Generates a maze of the given size with OS-seeded randomness.
    ///
    /// Size 0 is rejected with [`GenError::InvalidSize`]; a
    /// partially-initialized grid is never observable.
    pub fn generate(size: u8) -> Result<Self, GenError> {
        Self::generate_seeded(size, None)
    }

    /// Generates a maze of the given size, optionally seeded for
    /// reproducible output.
    pub fn generate_seeded(size: u8, seed: Option<u64>) -> Result<Self, GenError> {
        Self::generate_with(size, &mut generators::get_rng(seed))
    }

    /// Generates a maze of the given size, drawing every random choice from
    /// the supplied source.
    pub fn generate_with(size: u8, rng: &mut impl RandomSource) -> Result<Self, GenError> {
        if size == 0 {
            return Err(GenError::InvalidSize);
        }
        let mut maze = Maze {
            grid: Grid::new(size),
            size,
            entry: None,
            exit: None,
        };
        generators::recursive_backtrack(&mut maze, rng);
        Ok(maze)
    }

    /// Discards the current grid and carves a fresh maze of the same size.
    /// Nothing carries over between runs: every cell starts unvisited, role
    /// `Normal`, with all passages closed.
    pub fn regenerate(&mut self, seed: Option<u64>) {
        self.regenerate_with(&mut generators::get_rng(seed));
    }

    /// Like [`Maze::regenerate`], with a caller-supplied random source.
    pub fn regenerate_with(&mut self, rng: &mut impl RandomSource) {
        generators::recursive_backtrack(self, rng);
    }

    /// Side length of the maze in cells.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Entry cell position chosen by the last generation run. Always on the
    /// leftmost column.
    pub fn entry(&self) -> Option<(u8, u8)> {
        self.entry
    }

    /// Exit cell position chosen by the last generation run. `None` for a
    /// 1×1 maze, which has no second cell to act as an exit.
    pub fn exit(&self) -> Option<(u8, u8)> {
        self.exit
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    pub(crate) fn reset(&mut self) {
        self.grid = Grid::new(self.size);
        self.entry = None;
        self.exit = None;
    }

    pub(crate) fn visit(&mut self, coord: (u8, u8)) {
        self.grid.cell_mut(coord).visit();
    }

    pub(crate) fn carve(&mut self, from: (u8, u8), to: (u8, u8)) {
        self.grid.carve(from, to);
    }

    pub(crate) fn set_entry(&mut self, coord: (u8, u8)) {
        self.grid.cell_mut(coord).set_role(Role::Entry);
        self.entry = Some(coord);
    }

    pub(crate) fn set_exit(&mut self, coord: (u8, u8)) {
        self.grid.cell_mut(coord).set_role(Role::Exit);
        self.exit = Some(coord);
    }
}

impl std::ops::Index<(u8, u8)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u8, u8)) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(Maze::generate(0).unwrap_err(), GenError::InvalidSize);
        assert_eq!(
            Maze::generate_seeded(0, Some(3)).unwrap_err(),
            GenError::InvalidSize
        );
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = Maze::generate_seeded(1, Some(0)).unwrap();
        assert_eq!(maze.size(), 1);
        assert_eq!(maze.cells().count(), 1);
        assert_eq!(maze.entry(), Some((0, 0)));
        assert_eq!(maze.exit(), None);
        let cell = &maze[(0, 0)];
        assert_eq!(cell.role(), Role::Entry);
        assert!(cell.visited());
        assert_eq!(cell.passages().count(), 0);
    }

    #[test]
    fn test_accessors_match_cell_roles() {
        let maze = Maze::generate_seeded(8, Some(11)).unwrap();
        let entry = maze.entry().unwrap();
        let exit = maze.exit().unwrap();
        assert_eq!(maze[entry].role(), Role::Entry);
        assert_eq!(maze[exit].role(), Role::Exit);
        assert_ne!(entry, exit);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = Maze::generate_seeded(16, Some(7)).unwrap();
        let b = Maze::generate_seeded(16, Some(7)).unwrap();
        assert_eq!(a.entry(), b.entry());
        assert_eq!(a.exit(), b.exit());
        assert!(a.cells().zip(b.cells()).all(|(ca, cb)| ca == cb));
    }

    #[test]
    fn test_regenerate_keeps_size_and_invariants() {
        let mut maze = Maze::generate_seeded(8, Some(1)).unwrap();
        maze.regenerate(Some(2));
        assert_eq!(maze.size(), 8);
        assert_eq!(maze.cells().count(), 64);
        assert!(maze.cells().all(|cell| cell.visited()));
        let entry = maze.entry().unwrap();
        assert_eq!(entry.0, 0);
        assert_eq!(maze[entry].role(), Role::Entry);
        assert_eq!(maze[maze.exit().unwrap()].role(), Role::Exit);
    }
}
