use maze_search::{Maze, SearchMode, SearchOutcome};

// Searches the fixed 6x5 example maze
// | | | | |◆|
// |░| | |░| |
// | |░| | |░|
// | | |░| | |
// | | | | | |
// |◎|░| |░|░|
// with both frontier disciplines and prints the marked paths.
// Run with RUST_LOG=debug to see every expansion.
fn main() {
    env_logger::init();
    let mut maze = Maze::debug();
    println!("{}\n", maze);
    for mode in [SearchMode::DepthFirst, SearchMode::BreadthFirst] {
        match maze.search(mode) {
            SearchOutcome::Found(path) => {
                println!("{} search found a path of {} cells:", mode, path.len());
                println!("{}\n", maze.render());
            }
            SearchOutcome::Exhausted => println!("{} search found no path", mode),
        }
    }
}
