use core::fmt;
use log::{debug, info, warn};

use crate::cell::Position;
use crate::collections::{Frontier, Queue, Stack};
use crate::maze::Maze;

/// Frontier discipline used by [Maze::search].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Expands the most recently discovered cell first ([Stack]).
    DepthFirst,
    /// Expands cells in discovery order ([Queue]); the path found has the fewest steps.
    BreadthFirst,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchMode::DepthFirst => write!(f, "depth-first"),
            SearchMode::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Running,
    Found,
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// Result of a completed search. Not finding the goal is a regular outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The path from start to goal, both included.
    Found(Vec<Position>),
    Exhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[Position]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// A single search run over a [Maze]. Holds the maze mutably for its whole lifetime,
/// so two runs can never interleave on the same visited flags and parent links.
///
/// The run starts [Idle](SearchState::Idle); the first [step](Self::step) resets the
/// maze, empties the frontier and seeds it with the start cell. Every later step
/// expands one cell.
pub struct Search<'m, F> {
    maze: &'m mut Maze,
    frontier: F,
    state: SearchState,
    expanded: usize,
}

impl<'m, F: Frontier<Position>> Search<'m, F> {
    pub fn new(maze: &'m mut Maze, frontier: F) -> Self {
        Search {
            maze,
            frontier,
            state: SearchState::Idle,
            expanded: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of cells whose neighbours have been enumerated so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    pub fn maze(&self) -> &Maze {
        &*self.maze
    }

    /// Advances the state machine by one transition and returns the new state.
    /// Terminal states are sticky.
    pub fn step(&mut self) -> SearchState {
        match self.state {
            SearchState::Idle => self.initialize(),
            SearchState::Running => self.expand_next(),
            SearchState::Found | SearchState::Exhausted => {}
        }
        self.state
    }

    fn initialize(&mut self) {
        self.maze.reset_search_state();
        self.frontier.clear();
        let start = self.maze.start();
        self.maze.cell_mut(start).visited = true;
        self.frontier.insert(start);
        self.state = SearchState::Running;
    }

    fn expand_next(&mut self) {
        let current = match self.frontier.remove() {
            Ok(current) => current,
            Err(_) => {
                self.state = SearchState::Exhausted;
                return;
            }
        };
        if current == self.maze.goal() {
            self.state = SearchState::Found;
            return;
        }
        self.expanded += 1;
        let neighbours = self.maze.search_locations(current);
        debug!(
            "Expanding {}: {} new, {} waiting",
            current,
            neighbours.len(),
            self.frontier.len()
        );
        // Visited cells are filtered out above, so a parent is written at most once per run.
        for n in neighbours {
            let cell = self.maze.cell_mut(n);
            cell.parent = Some(current);
            cell.visited = true;
            self.frontier.insert(n);
        }
    }

    /// Steps until a terminal state. On success the path is marked on the maze.
    pub fn run(mut self) -> SearchOutcome {
        while !self.step().is_terminal() {}
        match self.state {
            SearchState::Found => {
                let path = self.maze.trace_path(self.maze.goal());
                self.maze.mark_path(&path);
                info!(
                    "Found path of {} cells after expanding {}",
                    path.len(),
                    self.expanded
                );
                SearchOutcome::Found(path)
            }
            _ => {
                let (start, goal) = (self.maze.start(), self.maze.goal());
                if self.maze.reachable(start, goal) {
                    warn!("Search exhausted although {} is reachable from {}", goal, start);
                } else {
                    info!("{} is not reachable from {}", goal, start);
                }
                SearchOutcome::Exhausted
            }
        }
    }
}

impl Maze {
    /// Searches from start to goal, marking the found path on the grid. Any state left
    /// by an earlier search is cleared first.
    pub fn search(&mut self, mode: SearchMode) -> SearchOutcome {
        info!("Running {} search from {} to {}", mode, self.start(), self.goal());
        match mode {
            SearchMode::DepthFirst => {
                let capacity = self.rows() * self.cols();
                Search::new(self, Stack::with_capacity(capacity)).run()
            }
            SearchMode::BreadthFirst => Search::new(self, Queue::new()).run(),
        }
    }

    pub fn depth_first_search(&mut self) -> SearchOutcome {
        self.search(SearchMode::DepthFirst)
    }

    pub fn breadth_first_search(&mut self) -> SearchOutcome {
        self.search(SearchMode::BreadthFirst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Contents;

    /// Goal walled in on all four sides inside an otherwise open grid.
    fn enclosed_goal() -> Maze {
        let goal = Position::new(2, 2);
        let walls = goal.neumann_neighborhood();
        Maze::from_layout(5, 5, Position::new(0, 0), goal, walls).unwrap()
    }

    #[test]
    fn state_transitions() {
        let mut maze = Maze::debug();
        let mut search = Search::new(&mut maze, Queue::new());
        assert_eq!(search.state(), SearchState::Idle);
        assert_eq!(search.step(), SearchState::Running);
        assert_eq!(search.frontier().len(), 1);
        assert!(search.maze()[Position::new(5, 0)].visited());
        // Start only has (4,0) open.
        assert_eq!(search.step(), SearchState::Running);
        assert_eq!(search.expanded(), 1);
        assert_eq!(search.frontier().top(), Ok(&Position::new(4, 0)));
        while !search.step().is_terminal() {}
        assert_eq!(search.state(), SearchState::Found);
        assert_eq!(search.step(), SearchState::Found);
    }

    /// Anything already waiting in the frontier is dropped when the run starts, so only
    /// cells discovered from the start ever become parents.
    #[test]
    fn prefilled_frontier_is_discarded() {
        for seed in [Position::new(1, 1), Position::new(3, 2)] {
            let mut maze = Maze::from_layout(
                3,
                3,
                Position::new(0, 0),
                Position::new(2, 2),
                std::iter::empty(),
            )
            .unwrap();
            let mut queue = Queue::new();
            queue.push(seed);
            let outcome = Search::new(&mut maze, queue).run();
            assert_eq!(outcome.path().map(|p| p.len()), Some(5));
            assert_eq!(outcome.path().unwrap()[0], maze.start());
        }

        let mut maze = Maze::debug();
        let mut stack = Stack::new();
        stack.push(Position::new(0, 3));
        stack.push(Position::new(9, 9));
        let mut search = Search::new(&mut maze, stack);
        assert_eq!(search.step(), SearchState::Running);
        assert_eq!(search.frontier().len(), 1);
        assert_eq!(search.frontier().top(), Ok(&Position::new(5, 0)));
        assert!(search.run().is_found());
    }

    #[test]
    fn breadth_first_debug_path() {
        let mut maze = Maze::debug();
        let outcome = maze.breadth_first_search();
        let path = outcome.path().unwrap();
        // Row 2 is entered at (2,3) and left at (2,2), the only sideways step.
        let expected: Vec<Position> = [
            (5, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (4, 3),
            (3, 3),
            (2, 3),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 3),
            (0, 4),
        ]
        .into_iter()
        .map(|(r, c)| Position::new(r, c))
        .collect();
        assert_eq!(path, expected.as_slice());
        assert_eq!(maze.count(Contents::Path), path.len() - 2);
        assert_eq!(
            maze.render(),
            [
                "| | |★|★|◆|",
                "|░| |★|░| |",
                "| |░|★|★|░|",
                "| | |░|★| |",
                "|★|★|★|★| |",
                "|◎|░| |░|░|",
            ]
            .join("\n")
        );
    }

    #[test]
    fn depth_first_debug_path() {
        let mut maze = Maze::debug();
        let outcome = maze.depth_first_search();
        assert!(outcome.is_found());
        let path = outcome.path().unwrap();
        assert_eq!(path[0], Position::new(5, 0));
        assert_eq!(*path.last().unwrap(), Position::new(0, 4));
        for w in path.windows(2) {
            assert_eq!(w[0].manhattan_distance(&w[1]), 1);
        }
        for p in &path[1..path.len() - 1] {
            assert_eq!(maze[*p].contents(), Contents::Path);
        }
    }

    #[test]
    fn exhausted_when_enclosed() {
        for mode in [SearchMode::DepthFirst, SearchMode::BreadthFirst] {
            let mut maze = enclosed_goal();
            assert_eq!(maze.search(mode), SearchOutcome::Exhausted);
            assert_eq!(maze.count(Contents::Path), 0);
            assert_eq!(maze.reconstruct_path(), None);
        }
    }

    #[test]
    fn repeated_searches_reset_state() {
        let mut maze = Maze::debug();
        let dfs = maze.depth_first_search();
        let bfs = maze.breadth_first_search();
        assert!(dfs.is_found() && bfs.is_found());
        let bfs_path = bfs.path().unwrap();
        assert_eq!(maze.count(Contents::Path), bfs_path.len() - 2);
        for cell in maze.cells() {
            if cell.contents() == Contents::Path {
                assert!(bfs_path.contains(&cell.position()));
            }
        }
        assert_eq!(maze.breadth_first_search(), bfs);
    }

    /// Every cell that receives a parent is adjacent to it, and the start never gets one.
    #[test]
    fn parents_point_to_adjacent_cells() {
        let mut maze = Maze::debug();
        maze.depth_first_search();
        assert_eq!(maze[maze.start()].parent(), None);
        for cell in maze.cells() {
            if let Some(parent) = cell.parent() {
                assert_eq!(cell.position().manhattan_distance(&parent), 1);
                assert!(maze[parent].visited());
            }
        }
    }
}
