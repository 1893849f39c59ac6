//! # maze_search
//!
//! Uninformed search on rectangular grid mazes. A [Maze] is a grid of [Cell]s, some of
//! them blocked, with a start and a goal. [Maze::search] runs
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search) search on a [Stack]
//! or [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) search on a
//! [Queue], records for every discovered cell which cell discovered it, and walks these
//! parent links back from the goal to obtain the path. Movement is restricted to the
//! 4-neighbourhood and every step has the same cost. Like grid_pathfinding, the maze
//! pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so that reachability can be checked without a search.
//!
//! ```
//! use maze_search::{Maze, SearchMode};
//!
//! let mut maze = Maze::debug();
//! let outcome = maze.search(SearchMode::BreadthFirst);
//! assert!(outcome.is_found());
//! println!("{}", maze.render());
//! ```
pub mod cell;
pub mod collections;
pub mod error;
pub mod maze;
pub mod search;

pub use cell::{Cell, Contents, Position};
pub use collections::{Frontier, LinkedList, Queue, Stack};
pub use error::{EmptyError, MazeError};
pub use maze::{Maze, MazeConfig};
pub use search::{Search, SearchMode, SearchOutcome, SearchState};

/// Rows of the fixed example maze built by [Maze::debug].
pub const DEBUG_ROWS: usize = 6;
/// Columns of the fixed example maze.
pub const DEBUG_COLS: usize = 5;
/// Start of the fixed example maze, bottom left.
pub const DEBUG_START: Position = Position::new(5, 0);
/// Goal of the fixed example maze, top right.
pub const DEBUG_GOAL: Position = Position::new(0, 4);
/// Blocked cells of the fixed example maze. The goal stays reachable from the start.
pub const DEBUG_BLOCKED: [Position; 8] = [
    Position::new(1, 0),
    Position::new(1, 3),
    Position::new(2, 1),
    Position::new(2, 4),
    Position::new(3, 2),
    Position::new(5, 1),
    Position::new(5, 3),
    Position::new(5, 4),
];
