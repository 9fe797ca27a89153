use chrono::NaiveDateTime;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::{Config, Project, ProjectType};

use crate::dates::{future_date, past_timestamp};
use crate::errors::GenerationError;
use crate::pools::project_names;
use crate::rng::{choose, probability, random_uuid, weighted_choice};

pub const PROJECT_TYPES: [ProjectType; 3] = [
    ProjectType::Engineering,
    ProjectType::Marketing,
    ProjectType::Operations,
];
pub const PROJECT_TYPE_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

const DUE_DATE_RATE: f64 = 0.7;
const DUE_DATE_WINDOW_DAYS: u32 = 120;

/// Generate a fixed number of projects per team.
pub fn generate_projects(
    rng: &mut ChaCha8Rng,
    team_ids: &[String],
    config: &Config,
    now: NaiveDateTime,
) -> Result<Vec<Project>, GenerationError> {
    let mut projects = Vec::with_capacity(team_ids.len() * config.projects_per_team);

    for team_id in team_ids {
        for _ in 0..config.projects_per_team {
            let project_type = *weighted_choice(rng, &PROJECT_TYPES, &PROJECT_TYPE_WEIGHTS)?;
            let name = choose(rng, project_names(project_type)).to_string();
            let created_at = past_timestamp(rng, now, config.history_days);
            let due_date = probability(rng, DUE_DATE_RATE)
                .then(|| future_date(rng, now.date(), DUE_DATE_WINDOW_DAYS));

            projects.push(Project {
                project_id: random_uuid(rng),
                team_id: team_id.clone(),
                name,
                project_type,
                created_at,
                due_date,
            });
        }
    }

    info!(count = projects.len(), "generated projects");
    Ok(projects)
}
