/// Direction of a carved passage out of a cell.
///
/// Grid coordinates grow rightward and downward: `Up` decreases y, `Down`
/// increases y, `Left` decreases x, `Right` increases x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the grid enumerates neighbours.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The coordinate offset of one step in this direction.
    pub fn offset(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction of the single grid step leading from `from` to `to`.
    ///
    /// # Panics
    /// If the two positions are not exactly one step apart. Neighbour
    /// queries only ever hand out adjacent positions, so reaching the panic
    /// means a bug in neighbour enumeration, not a runtime condition.
    pub fn between(from: (u8, u8), to: (u8, u8)) -> Self {
        let dx = to.0 as i16 - from.0 as i16;
        let dy = to.1 as i16 - from.1 as i16;
        match (dx, dy) {
            (1, 0) => Direction::Right,
            (-1, 0) => Direction::Left,
            (0, 1) => Direction::Down,
            (0, -1) => Direction::Up,
            _ => panic!("no single grid step leads from {:?} to {:?}", from, to),
        }
    }
}

/// Role tag distinguishing the maze's endpoints from ordinary cells.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[default]
    Normal,
    Entry,
    Exit,
}

/// One maze room, owned by the grid at its position.
///
/// A fresh cell is unvisited, role `Normal`, with every passage closed.
/// Generation opens passages pairwise (each carved edge is recorded on both
/// cells) and flips the visited flag once; consumers only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: (u8, u8),
    role: Role,
    visited: bool,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Cell {
    pub(crate) fn new(position: (u8, u8)) -> Self {
        Cell {
            position,
            role: Role::Normal,
            visited: false,
            up: false,
            down: false,
            left: false,
            right: false,
        }
    }

    /// The cell's (x, y) position in the grid, fixed at creation.
    pub fn position(&self) -> (u8, u8) {
        self.position
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the carve traversal has reached this cell.
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Whether a passage has been carved out of this cell in the given
    /// direction.
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// The directions this cell connects through, in enumeration order.
    pub fn passages(&self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(|&d| self.is_open(d))
    }

    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub(crate) fn open_passage(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cell() {
        let cell = Cell::new((3, 7));
        assert_eq!(cell.position(), (3, 7));
        assert_eq!(cell.role(), Role::Normal);
        assert!(!cell.visited());
        assert_eq!(cell.passages().count(), 0);
    }

    #[test]
    fn test_visit_and_role() {
        let mut cell = Cell::new((0, 0));
        cell.visit();
        assert!(cell.visited());
        cell.set_role(Role::Entry);
        assert_eq!(cell.role(), Role::Entry);
    }

    #[test]
    fn test_open_passage() {
        let mut cell = Cell::new((1, 1));
        cell.open_passage(Direction::Right);
        cell.open_passage(Direction::Up);
        assert!(cell.is_open(Direction::Right));
        assert!(cell.is_open(Direction::Up));
        assert!(!cell.is_open(Direction::Left));
        assert!(!cell.is_open(Direction::Down));
        // Enumeration order is left, right, up, down
        assert_eq!(
            cell.passages().collect::<Vec<_>>(),
            vec![Direction::Right, Direction::Up]
        );
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_direction_between_adjacent_cells() {
        assert_eq!(Direction::between((1, 1), (2, 1)), Direction::Right);
        assert_eq!(Direction::between((1, 1), (0, 1)), Direction::Left);
        assert_eq!(Direction::between((1, 1), (1, 2)), Direction::Down);
        assert_eq!(Direction::between((1, 1), (1, 0)), Direction::Up);
    }

    #[test]
    #[should_panic(expected = "no single grid step")]
    fn test_direction_between_diagonal_cells_panics() {
        Direction::between((1, 1), (2, 2));
    }

    #[test]
    #[should_panic(expected = "no single grid step")]
    fn test_direction_between_same_cell_panics() {
        Direction::between((1, 1), (1, 1));
    }
}
