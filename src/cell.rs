use core::fmt;

/// A `(row, col)` location on the maze grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// The 4-neighbourhood in search order: up, down, right, left. Moves that
    /// would leave the non-negative quadrant are skipped; the upper bounds are
    /// left to the grid.
    pub fn neumann_neighborhood(&self) -> impl Iterator<Item = Position> {
        let Position { row, col } = *self;
        [
            row.checked_sub(1).map(|r| Position::new(r, col)),
            Some(Position::new(row + 1, col)),
            Some(Position::new(row, col + 1)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
        ]
        .into_iter()
        .flatten()
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Position {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// What occupies a cell. Each variant renders as one glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Contents {
    #[default]
    Empty,
    Start,
    Goal,
    Blocked,
    Path,
}

impl Contents {
    pub const fn glyph(&self) -> &'static str {
        match self {
            Contents::Empty => " ",
            Contents::Start => "◎",
            Contents::Goal => "◆",
            Contents::Blocked => "░",
            Contents::Path => "★",
        }
    }
}

impl fmt::Display for Contents {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A single grid square. The parent is the position of the cell that first
/// discovered this one during the current search, looked up in the owning maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    pub(crate) contents: Contents,
    pub(crate) parent: Option<Position>,
    pub(crate) visited: bool,
}

impl Cell {
    pub fn new(position: Position, contents: Contents) -> Cell {
        Cell {
            position,
            contents,
            parent: None,
            visited: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn contents(&self) -> Contents {
        self.contents
    }
    pub fn parent(&self) -> Option<Position> {
        self.parent
    }
    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn is_blocked(&self) -> bool {
        self.contents == Contents::Blocked
    }
    pub fn is_goal(&self) -> bool {
        self.contents == Contents::Goal
    }
    pub fn is_start(&self) -> bool {
        self.contents == Contents::Start
    }

    /// Only empty cells take the path mark; start and goal keep their glyphs.
    pub(crate) fn mark_on_path(&mut self) {
        if self.contents == Contents::Empty {
            self.contents = Contents::Path;
        }
    }

    /// Forgets everything the previous search recorded on this cell.
    pub(crate) fn reset(&mut self) {
        self.parent = None;
        self.visited = false;
        if self.contents == Contents::Path {
            self.contents = Contents::Empty;
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.position)?;
        match self.contents {
            Contents::Empty => write!(f, "[EMPTY]")?,
            other => write!(f, "{}", other)?,
        }
        if let Some(parent) = self.parent {
            write!(f, "({}, {})", parent.row, parent.col)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_order() {
        let p = Position::new(2, 2);
        let n = p.neumann_neighborhood().collect::<Vec<_>>();
        assert_eq!(
            n,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 3),
                Position::new(2, 1)
            ]
        );
    }

    #[test]
    fn corner_neighborhood() {
        let n = Position::new(0, 0).neumann_neighborhood().collect::<Vec<_>>();
        assert_eq!(n, vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn path_mark_spares_endpoints() {
        let mut start = Cell::new(Position::new(0, 0), Contents::Start);
        let mut empty = Cell::new(Position::new(0, 1), Contents::Empty);
        start.mark_on_path();
        empty.mark_on_path();
        assert_eq!(start.contents(), Contents::Start);
        assert_eq!(empty.contents(), Contents::Path);
        empty.reset();
        assert_eq!(empty.contents(), Contents::Empty);
    }

    #[test]
    fn cell_display() {
        let mut cell = Cell::new(Position::new(4, 4), Contents::Empty);
        assert_eq!(cell.to_string(), "(4,4): [EMPTY]");
        cell.parent = Some(Position::new(3, 4));
        assert_eq!(cell.to_string(), "(4,4): [EMPTY](3, 4)");
        let goal = Cell::new(Position::new(9, 9), Contents::Goal);
        assert_eq!(goal.to_string(), "(9,9): ◆");
    }
}
