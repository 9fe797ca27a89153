use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options controlling a generation run.
///
/// Every recognized option is listed here with its valid range; `validate`
/// runs once at startup before any generator executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output location of the SQLite database file.
    pub db_path: PathBuf,
    /// Number of users in the organization.
    pub num_users: usize,
    /// Number of teams in the organization.
    pub num_teams: usize,
    /// Projects generated for each team.
    pub projects_per_team: usize,
    /// Tasks generated for each project.
    pub tasks_per_project: usize,
    /// Fraction of tasks that receive subtasks (0.0..=1.0).
    pub subtask_ratio: f64,
    /// Window in days for past timestamps.
    pub history_days: u32,
    /// Determinism key for the whole run.
    pub random_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("output/taskforge.sqlite"),
            num_users: 500,
            num_teams: 25,
            projects_per_team: 4,
            tasks_per_project: 120,
            subtask_ratio: 0.3,
            history_days: 180,
            random_seed: 42,
        }
    }
}

impl Config {
    /// Check every option against its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(Error::Configuration("db_path must not be empty".into()));
        }
        Self::require_positive("num_users", self.num_users)?;
        Self::require_positive("num_teams", self.num_teams)?;
        Self::require_positive("projects_per_team", self.projects_per_team)?;
        Self::require_positive("tasks_per_project", self.tasks_per_project)?;
        if !(0.0..=1.0).contains(&self.subtask_ratio) {
            return Err(Error::Configuration(format!(
                "subtask_ratio must be within 0.0..=1.0, got {}",
                self.subtask_ratio
            )));
        }
        if self.history_days == 0 {
            return Err(Error::Configuration(
                "history_days must be positive".into(),
            ));
        }
        Ok(())
    }

    fn require_positive(name: &str, value: usize) -> Result<()> {
        if value == 0 {
            return Err(Error::Configuration(format!("{name} must be positive")));
        }
        Ok(())
    }
}
