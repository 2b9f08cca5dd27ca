use std::{io::Write, path::PathBuf};

use anyhow::Context;
use maze::{util::load, Grid, SearchError, Solution, Solver, Strategy};
use serde::Serialize;

use crate::config::Config;

/// What a single run should do, after merging command line and config file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub maze_path: PathBuf,
    pub strategy: Strategy,
    pub show_explored: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    NoSolution,
}

#[derive(Serialize)]
struct Report<'a> {
    strategy: Strategy,
    rows: usize,
    columns: usize,
    solution: Option<&'a Solution>,
}

/// Load, print, solve and print again
pub fn run(options: &Options, config: &Config, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let grid = load(&options.maze_path, &config.charset)
        .with_context(|| format!("Failed to load maze {}", options.maze_path.display()))?;

    if options.json {
        return report_json(&grid, Solver::new(options.strategy), out);
    }

    writeln!(out, "Maze:")?;
    writeln!(out)?;
    write!(out, "{}", grid.render(&config.charset))?;
    writeln!(out, "Solving...")?;

    match Solver::new(options.strategy).solve_explored(&grid) {
        Ok((solution, explored)) => {
            let mut rendered = grid.render(&config.charset).with_path(&solution.path);
            if options.show_explored {
                rendered = rendered.with_explored(&explored);
            }

            writeln!(out, "Solution:")?;
            writeln!(out)?;
            write!(out, "{}", rendered)?;
            writeln!(out, "Path length: {}", solution.len())?;
            writeln!(out, "States explored: {}", solution.explored)?;
            Ok(Outcome::Solved)
        }
        Err(SearchError::NoSolution) => {
            writeln!(out, "No solution.")?;
            Ok(Outcome::NoSolution)
        }
        Err(e) => Err(e.into()),
    }
}

fn report_json(grid: &Grid, solver: Solver, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let solution = match solver.solve(grid) {
        Ok(solution) => Some(solution),
        Err(SearchError::NoSolution) => None,
        Err(e) => return Err(e.into()),
    };

    let report = Report {
        strategy: solver.strategy(),
        rows: grid.rows(),
        columns: grid.columns(),
        solution: solution.as_ref(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;

    Ok(match solution {
        Some(_) => Outcome::Solved,
        None => Outcome::NoSolution,
    })
}
