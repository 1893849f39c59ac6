use core::fmt;
use core::ops::Index;

use fxhash::FxHashSet;
use itertools::Itertools;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::cell::{Cell, Contents, Position};
use crate::error::MazeError;
use crate::{DEBUG_BLOCKED, DEBUG_COLS, DEBUG_GOAL, DEBUG_ROWS, DEBUG_START};

/// Construction parameters for a randomly blocked [Maze].
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub goal: Position,
    /// Share of the non start/goal cells that get blocked, in `[0, 1]`.
    pub proportion_blocked: f64,
    /// Ignores every other field except `proportion_blocked` and builds the
    /// fixed 6x5 example maze.
    pub debug: bool,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: 10,
            cols: 10,
            start: Position::new(0, 0),
            goal: Position::new(9, 9),
            proportion_blocked: 0.2,
            debug: false,
        }
    }
}

impl MazeConfig {
    pub fn with_dims(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }
    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }
    pub fn with_goal(mut self, goal: Position) -> Self {
        self.goal = goal;
        self
    }
    pub fn with_proportion_blocked(mut self, proportion_blocked: f64) -> Self {
        self.proportion_blocked = proportion_blocked;
        self
    }
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// [Maze] owns a row-major grid of [Cell]s together with the start and goal positions.
/// Connected components of the unblocked cells are kept in a [UnionFind] structure so
/// that reachability can be answered without searching.
#[derive(Clone, Debug)]
pub struct Maze {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
    components: UnionFind<usize>,
}

impl Maze {
    /// Builds a random maze from `config`, drawing blocked cells from the thread-local RNG.
    pub fn new(config: &MazeConfig) -> Result<Maze, MazeError> {
        Maze::with_rng(config, &mut rand::thread_rng())
    }

    /// Builds a random maze from `config`. Exactly
    /// `floor((rows * cols - 2) * proportion_blocked)` cells other than start and
    /// goal are blocked, sampled uniformly without replacement.
    pub fn with_rng<R: Rng + ?Sized>(config: &MazeConfig, rng: &mut R) -> Result<Maze, MazeError> {
        let proportion = config.proportion_blocked;
        if !proportion.is_finite() || !(0.0..=1.0).contains(&proportion) {
            return Err(MazeError::InvalidProportion(proportion));
        }
        if config.debug {
            return Ok(Maze::debug());
        }
        validate(config.rows, config.cols, config.start, config.goal)?;

        let mut maze = Maze::build(config.rows, config.cols, config.start, config.goal);
        let options = (0..maze.cells.len())
            .filter(|&ix| maze.cells[ix].contents == Contents::Empty)
            .collect::<Vec<usize>>();
        let block_count = (options.len() as f64 * proportion).floor() as usize;
        for &ix in options.choose_multiple(rng, block_count) {
            maze.cells[ix].contents = Contents::Blocked;
        }
        maze.generate_components();
        info!(
            "Generated {}x{} maze with {} blocked cells",
            maze.rows, maze.cols, block_count
        );
        Ok(maze)
    }

    /// The fixed 6x5 example: start in the bottom left, goal in the top right.
    pub fn debug() -> Maze {
        let mut maze = Maze::build(DEBUG_ROWS, DEBUG_COLS, DEBUG_START, DEBUG_GOAL);
        for pos in DEBUG_BLOCKED {
            maze.cell_mut(pos).contents = Contents::Blocked;
        }
        maze.generate_components();
        maze
    }

    /// Builds a maze with exactly the given cells blocked. Duplicate positions are
    /// collapsed; blocking the start or goal is rejected.
    pub fn from_layout<I>(
        rows: usize,
        cols: usize,
        start: Position,
        goal: Position,
        blocked: I,
    ) -> Result<Maze, MazeError>
    where
        I: IntoIterator<Item = Position>,
    {
        validate(rows, cols, start, goal)?;
        let blocked = blocked.into_iter().collect::<FxHashSet<Position>>();
        let mut maze = Maze::build(rows, cols, start, goal);
        for pos in blocked {
            if !maze.in_bounds(pos) {
                return Err(MazeError::OutOfBounds {
                    what: "blocked",
                    position: pos,
                    rows,
                    cols,
                });
            }
            if pos == start || pos == goal {
                return Err(MazeError::BlockedEndpoint(pos));
            }
            maze.cell_mut(pos).contents = Contents::Blocked;
        }
        maze.generate_components();
        Ok(maze)
    }

    /// Empty grid with start and goal placed. Callers have validated the arguments.
    fn build(rows: usize, cols: usize, start: Position, goal: Position) -> Maze {
        let cells = (0..rows)
            .cartesian_product(0..cols)
            .map(|(r, c)| Cell::new(Position::new(r, c), Contents::Empty))
            .collect::<Vec<Cell>>();
        let mut maze = Maze {
            cells,
            rows,
            cols,
            start,
            goal,
            components: UnionFind::new(rows * cols),
        };
        maze.cell_mut(start).contents = Contents::Start;
        maze.cell_mut(goal).contents = Contents::Goal;
        maze
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Position {
        self.start
    }
    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn get_ix(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.in_bounds(pos) {
            Some(&self.cells[self.get_ix(pos)])
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let ix = self.get_ix(pos);
        &mut self.cells[ix]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn count(&self, contents: Contents) -> usize {
        self.cells.iter().filter(|c| c.contents == contents).count()
    }

    fn can_move_to(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| !cell.is_blocked())
    }

    /// Neighbours of `pos` that a search may still enter: in bounds, not blocked and not
    /// yet visited, in the order up, down, right, left.
    pub fn search_locations(&self, pos: Position) -> SmallVec<[Position; 4]> {
        pos.neumann_neighborhood()
            .filter(|&p| self.can_move_to(p) && !self[p].visited)
            .collect()
    }

    /// Clears visited flags, parent links and path marks left by an earlier search.
    pub fn reset_search_state(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Retrieves the component id a given [Position] belongs to.
    pub fn get_component(&self, pos: Position) -> usize {
        self.components.find(self.get_ix(pos))
    }

    /// Checks if both positions are open and on the same component.
    pub fn reachable(&self, from: Position, to: Position) -> bool {
        self.can_move_to(from)
            && self.can_move_to(to)
            && self.components.equiv(self.get_ix(from), self.get_ix(to))
    }

    pub fn unreachable(&self, from: Position, to: Position) -> bool {
        !self.reachable(from, to)
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.cells.len());
        for ix in 0..self.cells.len() {
            if self.cells[ix].is_blocked() {
                continue;
            }
            let p = self.cells[ix].position();
            for n in [Position::new(p.row + 1, p.col), Position::new(p.row, p.col + 1)] {
                if self.can_move_to(n) {
                    let n_ix = self.get_ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
        debug!("Generated connected components for {} cells", self.cells.len());
    }

    /// Follows parent links from `end` back to the start and returns the chain in
    /// start to `end` order.
    ///
    /// # Panics
    /// If the chain does not terminate at the start cell, which means the parent links
    /// are corrupted.
    pub fn trace_path(&self, end: Position) -> Vec<Position> {
        let mut path = std::iter::successors(Some(end), |&p| self[p].parent)
            .take(self.cells.len() + 1)
            .collect::<Vec<Position>>();
        assert_eq!(
            path.last(),
            Some(&self.start),
            "parent chain from {} does not lead back to the start",
            end
        );
        path.reverse();
        path
    }

    /// The path recorded by the last search, if that search reached the goal.
    pub fn reconstruct_path(&self) -> Option<Vec<Position>> {
        self[self.goal].parent.map(|_| self.trace_path(self.goal))
    }

    /// Marks the interior of `path` on the grid. Start and goal keep their contents.
    pub fn mark_path(&mut self, path: &[Position]) {
        for &pos in path {
            self.cell_mut(pos).mark_on_path();
        }
    }

    /// Marks the recorded path and renders the maze with it, or [None] if the goal
    /// has not been reached.
    pub fn render_path(&mut self) -> Option<String> {
        let path = self.reconstruct_path()?;
        self.mark_path(&path);
        Some(self.render())
    }

    /// Rows of `|`-delimited glyphs joined by newlines.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Rejects empty grids, endpoints outside the grid and coinciding endpoints.
fn validate(rows: usize, cols: usize, start: Position, goal: Position) -> Result<(), MazeError> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::InvalidDimensions { rows, cols });
    }
    for (what, position) in [("start", start), ("goal", goal)] {
        if position.row >= rows || position.col >= cols {
            return Err(MazeError::OutOfBounds {
                what,
                position,
                rows,
                cols,
            });
        }
    }
    if start == goal {
        return Err(MazeError::StartIsGoal(start));
    }
    Ok(())
}

impl Index<Position> for Maze {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        self.get(pos)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", pos))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self
            .cells
            .chunks(self.cols)
            .map(|row| format!("|{}|", row.iter().map(Cell::contents).join("|")));
        write!(f, "{}", rows.format("\n"))
    }
}
