use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use taskforge_core::Config;
use taskforge_db::{DatasetSink, SinkError, SqliteSink};
use taskforge_generate::{GenerationError, Pipeline};

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] taskforge_core::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generate a deterministic project-management fixture database.
#[derive(Parser, Debug)]
#[command(
    name = "taskforge",
    version,
    about = "Synthesizes a consistent project-management dataset into SQLite"
)]
struct Cli {
    /// Output location of the SQLite database file.
    #[arg(long, env = "DB_PATH", default_value = "output/taskforge.sqlite")]
    db_path: PathBuf,
    /// Number of users in the organization.
    #[arg(long, env = "NUM_USERS", default_value_t = 500)]
    num_users: usize,
    /// Number of teams in the organization.
    #[arg(long, env = "NUM_TEAMS", default_value_t = 25)]
    num_teams: usize,
    /// Projects generated for each team.
    #[arg(long, env = "PROJECTS_PER_TEAM", default_value_t = 4)]
    projects_per_team: usize,
    /// Tasks generated for each project.
    #[arg(long, env = "TASKS_PER_PROJECT", default_value_t = 120)]
    tasks_per_project: usize,
    /// Fraction of tasks that receive subtasks (0.0..=1.0).
    #[arg(long, env = "SUBTASK_RATIO", default_value_t = 0.3)]
    subtask_ratio: f64,
    /// Window in days for past timestamps.
    #[arg(long, env = "HISTORY_DAYS", default_value_t = 180)]
    history_days: u32,
    /// Determinism key; identical seed and options reproduce the run.
    #[arg(long, env = "RANDOM_SEED", default_value_t = 42)]
    random_seed: u64,
    /// Optional path for a JSON run summary.
    #[arg(long, env = "REPORT_PATH")]
    report: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            db_path: self.db_path.clone(),
            num_users: self.num_users,
            num_teams: self.num_teams,
            projects_per_team: self.projects_per_team,
            tasks_per_project: self.tasks_per_project,
            subtask_ratio: self.subtask_ratio,
            history_days: self.history_days,
            random_seed: self.random_seed,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "database generation failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config();
    config.validate()?;
    info!(db_path = %config.db_path.display(), seed = config.random_seed, "configuration loaded");

    if let Some(parent) = config.db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut sink = SqliteSink::open(&config.db_path).await?;
    sink.bootstrap().await?;

    let dataset = Pipeline::new(config).run()?;
    let summary = dataset.summary();

    sink.persist(&dataset).await?;

    if let Some(path) = &cli.report {
        std::fs::write(path, serde_json::to_vec_pretty(&summary)?)?;
        info!(report = %path.display(), "run summary written");
    }

    info!(
        users = summary.users,
        teams = summary.teams,
        projects = summary.projects,
        tasks = summary.tasks,
        subtasks = summary.subtasks,
        comments = summary.comments,
        "fixture database generated"
    );
    Ok(())
}
