use crate::maze::Maze;

use super::RandomSource;

/// Carves a perfect maze into `maze` with a randomized depth-first
/// backtracker, then places the entry and exit cells.
///
/// The previous grid contents are discarded first; every run starts from
/// fresh cells. The entry always sits on the leftmost column, at a random
/// row. Each carve step opens a passage to one randomly chosen unvisited
/// neighbour and exactly one new cell becomes visited, so when the stack
/// drains the passage graph is a spanning tree over the whole grid.
pub fn recursive_backtrack(maze: &mut Maze, rng: &mut impl RandomSource) {
    maze.reset();
    let size = maze.size();

    let entry = (0, pick_between(rng, 0, size));
    maze.set_entry(entry);
    maze.visit(entry);
    tracing::debug!("[generate] entry cell at {:?}", entry);

    // The stack holds only visited cells; its top is the carving frontier
    let mut stack = vec![entry];

    while let Some(cell) = stack.pop() {
        let unvisited = maze
            .grid()
            .neighbours(cell)
            .filter(|&coord| !maze[coord].visited())
            .collect::<Vec<_>>();

        if !unvisited.is_empty() {
            let neighbour = unvisited[rng.pick(unvisited.len())];
            maze.carve(cell, neighbour);
            maze.visit(neighbour);
            // Put the cell back first so we can come back for its remaining
            // neighbours once this branch is exhausted
            stack.push(cell);
            // The neighbour goes on top; carving continues from there
            stack.push(neighbour);
        }
    }
    tracing::debug!("[generate] carving complete for {}x{} grid", size, size);

    place_exit(maze, entry, rng);
}

/// Picks the exit cell: column from the right part of the grid, row from
/// the half not containing the entry, to bias the exit away from it. The
/// split point reproduces the classic thresholds of a 32-row grid (15) and
/// keeps every drawn-from region non-empty for any size >= 2.
fn place_exit(maze: &mut Maze, entry: (u8, u8), rng: &mut impl RandomSource) {
    let size = maze.size();
    if size < 2 {
        // The single cell already holds the entry role; there is no second
        // cell left to act as an exit
        tracing::debug!("[generate] grid too small for an exit");
        return;
    }

    let split = ((size - 1) / 2).max(1);
    let y = if entry.1 > split {
        pick_between(rng, 0, split)
    } else {
        pick_between(rng, split, size)
    };
    let x = pick_between(rng, split, size);
    maze.set_exit((x, y));
    tracing::debug!("[generate] exit cell at {:?}", (x, y));
}

/// A uniform draw from `[lo, hi)`.
fn pick_between(rng: &mut impl RandomSource, lo: u8, hi: u8) -> u8 {
    lo + rng.pick((hi - lo) as usize) as u8
}
