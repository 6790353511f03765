#[macro_use]
extern crate log;
extern crate search_trees;

use log::LevelFilter;
use search_trees::avl_tree::AvlTree;
use search_trees::bst::BinarySearchTree;
use search_trees::{Result, SearchTree};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(Debug, PartialEq)]
enum Command {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    Min,
    Max,
    Print,
    Len,
    Clear,
}

// Parses `<command> <tree> [key]` into the name of the tree and the command to run on it.
fn parse_command<'a>(args: &[&'a str]) -> Option<(&'a str, Command)> {
    let (name, tree) = match args {
        [name, tree, ..] => (*name, *tree),
        _ => return None,
    };
    let key = || args.get(2).and_then(|key| key.parse::<i64>().ok());

    let command = match name {
        "insert" => Command::Insert(key()?),
        "remove" => Command::Remove(key()?),
        "contains" => Command::Contains(key()?),
        "min" => Command::Min,
        "max" => Command::Max,
        "print" => Command::Print,
        "len" => Command::Len,
        "clear" => Command::Clear,
        _ => return None,
    };
    Some((tree, command))
}

fn select_tree<'a>(
    name: &str,
    avl: &'a mut AvlTree<i64>,
    bst: &'a mut BinarySearchTree<i64>,
) -> Option<&'a mut dyn SearchTree<i64>> {
    match name {
        "avl" => Some(avl),
        "bst" => Some(bst),
        _ => None,
    }
}

fn run(tree: &mut dyn SearchTree<i64>, command: Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Insert(key) => {
            if tree.insert(key) {
                debug!("inserted {}", key);
            } else {
                info!("{} is already present", key);
            }
        },
        Command::Remove(key) => match tree.remove(&key) {
            Some(key) => debug!("removed {}", key),
            None => info!("{} is not present", key),
        },
        Command::Contains(key) => writeln!(out, "{}", tree.contains(&key))?,
        Command::Min => writeln!(out, "{}", tree.find_min()?)?,
        Command::Max => writeln!(out, "{}", tree.find_max()?)?,
        Command::Print => tree.print_tree(out)?,
        Command::Len => writeln!(out, "{} elements, height {}", tree.len(), tree.height())?,
        Command::Clear => tree.make_empty(),
    }
    Ok(())
}

fn main() {
    let verbosity: usize = env::args()
        .skip(1)
        .filter(|arg| arg.starts_with("-v"))
        .map(|arg| arg.len() - 1)
        .sum();
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Error: could not initialize logger: {}", err);
    }

    let mut avl: AvlTree<i64> = AvlTree::new();
    let mut bst: BinarySearchTree<i64> = BinarySearchTree::new();

    let stdin = io::stdin();
    let stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("could not read command: {}", err);
                break;
            },
        };
        let args: Vec<&str> = line.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }

        let (name, command) = match parse_command(&args) {
            Some(parsed) => parsed,
            None => {
                warn!("unrecognized command: {}", line.trim());
                continue;
            },
        };
        let tree = match select_tree(name, &mut avl, &mut bst) {
            Some(tree) => tree,
            None => {
                warn!("unknown tree `{}`, expected `avl` or `bst`", name);
                continue;
            },
        };

        if let Err(err) = run(tree, command, &mut stdout.lock()) {
            error!("{}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run, select_tree, Command};
    use search_trees::avl_tree::AvlTree;
    use search_trees::bst::BinarySearchTree;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(&["insert", "avl", "5"]), Some(("avl", Command::Insert(5))));
        assert_eq!(parse_command(&["remove", "bst", "-3"]), Some(("bst", Command::Remove(-3))));
        assert_eq!(parse_command(&["min", "bst"]), Some(("bst", Command::Min)));
        assert_eq!(parse_command(&["clear", "avl", "7"]), Some(("avl", Command::Clear)));
    }

    #[test]
    fn test_parse_command_missing_key() {
        assert_eq!(parse_command(&["insert", "avl"]), None);
        assert_eq!(parse_command(&["contains", "bst"]), None);
        assert_eq!(parse_command(&["min"]), None);
    }

    #[test]
    fn test_parse_command_non_numeric_key() {
        assert_eq!(parse_command(&["remove", "bst", "x"]), None);
        assert_eq!(parse_command(&["insert", "avl", "1.5"]), None);
    }

    #[test]
    fn test_parse_command_unknown_command() {
        assert_eq!(parse_command(&["pop", "avl"]), None);
        assert_eq!(parse_command(&["Insert", "avl", "1"]), None);
    }

    #[test]
    fn test_unknown_tree() {
        let mut avl = AvlTree::new();
        let mut bst = BinarySearchTree::new();

        let (name, command) = parse_command(&["insert", "rbt", "1"]).unwrap();
        assert_eq!(name, "rbt");
        assert_eq!(command, Command::Insert(1));
        assert!(select_tree(name, &mut avl, &mut bst).is_none());

        let tree = select_tree("bst", &mut avl, &mut bst).unwrap();
        let mut out = Vec::new();
        run(tree, Command::Insert(1), &mut out).unwrap();
        assert!(bst.contains(&1));
        assert!(!avl.contains(&1));
    }

    #[test]
    fn test_run_empty_tree() {
        let mut tree = AvlTree::new();
        let mut out = Vec::new();
        assert!(run(&mut tree, Command::Min, &mut out).is_err());
        run(&mut tree, Command::Insert(4), &mut out).unwrap();
        run(&mut tree, Command::Max, &mut out).unwrap();
        run(&mut tree, Command::Contains(2), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "4\nfalse\n");
    }
}
