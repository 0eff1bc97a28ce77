//!
//! # Depth Search
//! Builds a depth-limited snapshot of a directory and runs a search over it.
//!
//! # Commands
//! - `tree <path>` - Prints the snapshot as JSON.
//! - `large <path>` - Prints the first file bigger than `-s` bytes (default 1 GiB) found in a directory at level `-m` (default 5) or deeper, the given path being level 1.
//! - `find <path> <name>` - Iterative deepening search for the shallowest entry called `<name>`.
//! - `demo` - Runs the iterative deepening search over a small in-memory tree.
//!
//! # Options
//! - [Optional] Depth - [-d <number>] Deepest level to read, 20 by default. Files directly inside the deepest directories are included.
//! - [Optional] Exclude - [-e <regex_pattern>] Entries whose name matches are left out of the snapshot.
//!
//! Set `RUST_LOG=debug` to see skipped entries and the deepening rounds.
//!
//! # Example
//! ```depth_search large /mnt/media -m 3 -s 4294967296 -e "^\..*"```

mod cli;

use std::env;
use std::process::ExitCode;

use cli::Command;
use depth_search::{
    build, iterative_deepening_search, iterative_deepening_search_by, BuildConfig, FsEntry,
    FsSizer, FsSource, TreeNode,
};

fn main() -> ExitCode {
    env_logger::init();
    match cli::build_from_args(env::args()) {
        Ok(command) => match run(command) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}\n{}", cli::USAGE);
            ExitCode::from(2)
        }
    }
}

fn snapshot(config: &BuildConfig) -> Option<TreeNode<FsEntry>> {
    let root = build(&FsSource, config);
    if root.is_none() {
        println!("Nothing to read at depth {}.", config.max_depth);
    }
    root
}

fn run(command: Command) -> Result<(), serde_json::Error> {
    match command {
        Command::Tree(config) => {
            if let Some(root) = snapshot(&config) {
                println!("{}", serde_json::to_string_pretty(&root)?);
            }
        }
        Command::Large(config, query) => {
            if let Some(root) = snapshot(&config) {
                match query.find(&root, &FsSizer) {
                    Some(path) => println!("Found: {}", path.display()),
                    None => println!(
                        "No file larger than {} bytes at level {} or deeper.",
                        query.min_size, query.min_depth
                    ),
                }
            }
        }
        Command::Find(config, name) => {
            if let Some(root) = snapshot(&config) {
                let found = iterative_deepening_search_by(&root, None, |entry| {
                    entry.file_name() == Some(name.as_str())
                });
                match found {
                    Some(found) => println!("Found at depth {}: {}", found.depth, found.value),
                    None => println!("`{name}` not found."),
                }
            }
        }
        Command::Demo => demo(),
    }
    Ok(())
}

fn demo() {
    let root = TreeNode::new("root").with_children([
        TreeNode::new("folder1").with_children([TreeNode::new("file1.txt")]),
        TreeNode::new("folder2"),
    ]);
    let target = "file1.txt";
    match iterative_deepening_search(&root, &target, None) {
        Some(found) => println!("File '{target}' found at depth {}: {}", found.depth, found.value),
        None => println!("File '{target}' not found."),
    }
}
