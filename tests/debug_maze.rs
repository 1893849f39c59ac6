use maze_search::{
    Contents, Maze, MazeConfig, Position, SearchMode, DEBUG_BLOCKED, DEBUG_GOAL, DEBUG_START,
};

fn debug_maze() -> Maze {
    Maze::new(&MazeConfig::default().with_debug(true)).unwrap()
}

#[test]
fn both_modes_find_goal() {
    for mode in [SearchMode::DepthFirst, SearchMode::BreadthFirst] {
        let mut maze = debug_maze();
        let outcome = maze.search(mode);
        let path = outcome.path().expect("debug maze is solvable");
        assert_eq!(path[0], DEBUG_START);
        assert_eq!(path[path.len() - 1], DEBUG_GOAL);
        for p in path {
            assert!(!maze[*p].is_blocked());
            assert!(!DEBUG_BLOCKED.contains(p));
        }
        assert_eq!(maze[DEBUG_START].contents(), Contents::Start);
        assert_eq!(maze[DEBUG_GOAL].contents(), Contents::Goal);
    }
}

#[test]
fn render_path_matches_search() {
    let mut maze = debug_maze();
    let outcome = maze.breadth_first_search();
    let after_search = maze.render();
    let rendered = maze.render_path().unwrap();
    assert_eq!(rendered, after_search);
    assert_eq!(maze.reconstruct_path().as_deref(), outcome.path());
}

#[test]
fn blocked_cells_survive_search() {
    let mut maze = debug_maze();
    maze.depth_first_search();
    for p in DEBUG_BLOCKED {
        assert_eq!(maze[p].contents(), Contents::Blocked);
    }
    assert_eq!(maze.count(Contents::Blocked), DEBUG_BLOCKED.len());
}

#[test]
fn debug_maze_is_connected() {
    let maze = debug_maze();
    assert!(maze.reachable(DEBUG_START, DEBUG_GOAL));
    // (1,4) hangs off the goal and (2,0) off the left column.
    assert!(maze.reachable(DEBUG_START, Position::new(1, 4)));
    assert!(maze.reachable(DEBUG_START, Position::new(2, 0)));
    assert!(maze.unreachable(DEBUG_START, Position::new(2, 1)));
}
