use std::{io::Write, path::PathBuf, process::ExitCode};

use app::{Options, Outcome};
use config::Config;
use maze::Strategy;

mod app;
mod config;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    maze_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    strategy: Option<Strategy>,
    show_explored: bool,
    json: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Args> {
    let mut result = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("{} needs a file argument", arg))?;
                result.config_path = Some(path.into());
            }
            "--strategy" | "-s" => {
                let strategy = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("{} needs a strategy argument", arg))?;
                result.strategy = Some(strategy.parse()?);
            }
            "--show-explored" | "-e" => result.show_explored = true,
            "--json" | "-j" => result.json = true,
            "--help" | "-h" => result.help = true,
            other if other.starts_with('-') => {
                anyhow::bail!("Unknown argument: {}", other);
            }
            other => {
                if result.maze_path.is_some() {
                    anyhow::bail!("Unexpected argument: {}", other);
                }
                result.maze_path = Some(other.into());
            }
        }
    }

    Ok(result)
}

fn print_help() {
    println!("maze-solve - find a way through a text maze");
    println!();
    println!("USAGE:");
    println!("    maze-solve [OPTIONS] <MAZE_FILE>");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>       Configuration file (default: maze-solve.toml)");
    println!("    -s, --strategy <NAME>     dfs (depth-first) or bfs (breadth-first)");
    println!("    -e, --show-explored       Mark every explored cell in the solution");
    println!("    -j, --json                Print the solution as JSON");
    println!("    -h, --help                Print help information");
    println!();
    println!("MAZE FILE:");
    println!("    One line per row, all lines the same length.");
    println!("    A marks the start, B the goal, spaces are open, anything else is a wall.");
    println!("    The characters can be changed in the [charset] section of the config.");
}

/// Command line flags win over the config file
fn merge(args: Args, config: &Config) -> Option<Options> {
    Some(Options {
        maze_path: args.maze_path?,
        strategy: args.strategy.unwrap_or(config.strategy),
        show_explored: args.show_explored || config.show_explored,
        json: args.json,
    })
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            print_help();
            return ExitCode::from(2);
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(options) = merge(args, &config) else {
        print_help();
        return ExitCode::from(2);
    };

    log::debug!("running with {:?}", options);

    match app::run(&options, &config, &mut std::io::stdout().lock()) {
        Ok(Outcome::Solved) => ExitCode::SUCCESS,
        Ok(Outcome::NoSolution) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_all_flags() {
        let parsed = args(&[
            "-s",
            "bfs",
            "--show-explored",
            "-j",
            "-c",
            "cfg.toml",
            "maze.txt",
        ])
        .unwrap();

        assert_eq!(
            parsed,
            Args {
                maze_path: Some("maze.txt".into()),
                config_path: Some("cfg.toml".into()),
                strategy: Some(Strategy::BreadthFirst),
                show_explored: true,
                json: true,
                help: false,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(args(&["--fast"]).is_err());
        assert!(args(&["--strategy"]).is_err());
        assert!(args(&["--strategy", "random", "maze.txt"]).is_err());
        assert!(args(&["a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_merge_with_config() {
        let config = Config {
            strategy: Strategy::BreadthFirst,
            show_explored: true,
            ..Config::default()
        };

        let options = merge(args(&["maze.txt"]).unwrap(), &config).unwrap();
        assert_eq!(options.strategy, Strategy::BreadthFirst);
        assert!(options.show_explored);

        let options = merge(args(&["-s", "dfs", "maze.txt"]).unwrap(), &config).unwrap();
        assert_eq!(options.strategy, Strategy::DepthFirst);

        assert!(merge(args(&[]).unwrap(), &config).is_none());
    }
}
