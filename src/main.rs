//! CLI shim around the sprint planner.
//!
//! Loads the backlog and team specs from CSV, the run configuration from
//! JSON, validates the inputs, runs the genetic search, and prints the
//! best sprint plan found. All planning logic lives in the library; this
//! binary only moves data in and out.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::info;

use sprint_select::config::RunConfig;
use sprint_select::ga::{GaRunner, SprintProblem};
use sprint_select::models::{Story, StoryStatus, Team};
use sprint_select::validation::validate_input;

/// Genetic-algorithm sprint planner.
#[derive(Debug, Parser)]
#[command(name = "sprint-select", version, about)]
struct Cli {
    /// Backlog CSV: id,status,time,priority,dependency
    backlog: PathBuf,
    /// Team specs CSV: id,efficiency,cost,available_time
    teams: PathBuf,
    /// Run configuration JSON
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config: RunConfig = {
        let file = File::open(&cli.config)
            .with_context(|| format!("failed to open {}", cli.config.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", cli.config.display()))?
    };
    config.validate().context("invalid run configuration")?;

    let stories = load_backlog(&cli.backlog)?;
    let teams = load_teams(&cli.teams)?;
    info!(stories = stories.len(), teams = teams.len(), "inputs loaded");

    if let Err(errors) = validate_input(&stories, &teams) {
        for e in &errors {
            eprintln!("error: {}", e.message);
        }
        bail!("{} input validation error(s)", errors.len());
    }

    let problem = SprintProblem::new(stories, teams);
    let result = GaRunner::run(&problem, &config)?;

    println!("Best plan after {} generations:", result.generations);
    for a in &result.best.assignments {
        println!("  {} <- {}", a.team_id, a.story_id);
    }
    println!("Fitness: {}", result.best_fitness);

    Ok(())
}

/// One backlog CSV record. The `dependency` column holds a comma-separated
/// id list and must be quoted when it names more than one story.
#[derive(Debug, Deserialize)]
struct BacklogRow {
    id: String,
    status: String,
    time: f64,
    priority: f64,
    #[serde(default)]
    dependency: String,
}

/// One team-spec CSV record.
#[derive(Debug, Deserialize)]
struct TeamRow {
    id: String,
    efficiency: f64,
    cost: f64,
    available_time: f64,
}

fn load_backlog(path: &Path) -> Result<Vec<Story>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_backlog(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn load_teams(path: &Path) -> Result<Vec<Team>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_teams(BufReader::new(file)).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_backlog<R: Read>(reader: R) -> Result<Vec<Story>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut stories = Vec::new();

    for record in csv_reader.deserialize() {
        let row: BacklogRow = record.context("malformed backlog record")?;
        let status = StoryStatus::parse(&row.status)
            .with_context(|| format!("story '{}': unknown status '{}'", row.id, row.status))?;
        let dependencies = row
            .dependency
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        stories.push(Story {
            id: row.id,
            time: row.time,
            priority: row.priority,
            status,
            dependencies,
        });
    }
    Ok(stories)
}

fn parse_teams<R: Read>(reader: R) -> Result<Vec<Team>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut teams = Vec::new();

    for record in csv_reader.deserialize() {
        let row: TeamRow = record.context("malformed team record")?;
        teams.push(Team {
            id: row.id,
            efficiency: row.efficiency,
            cost: row.cost,
            available_time: row.available_time,
        });
    }
    Ok(teams)
}
