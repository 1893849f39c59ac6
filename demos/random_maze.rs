use maze_search::{Maze, MazeConfig, Position};
use rand::{rngs::StdRng, SeedableRng};

// Builds a 12x20 maze with 30% of the cells blocked from a fixed seed and shows the
// breadth-first path, if there is one.
fn main() {
    env_logger::init();
    let config = MazeConfig::default()
        .with_dims(12, 20)
        .with_goal(Position::new(11, 19))
        .with_proportion_blocked(0.3);
    let mut rng = StdRng::seed_from_u64(7);
    let mut maze = match Maze::with_rng(&config, &mut rng) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Could not build maze: {e}");
            return;
        }
    };
    println!("{}\n", maze);
    let outcome = maze.breadth_first_search();
    match outcome.path() {
        Some(path) => println!("{}\n\nPath of {} cells", maze, path.len()),
        None => println!("No path from {} to {}", maze.start(), maze.goal()),
    }
}
