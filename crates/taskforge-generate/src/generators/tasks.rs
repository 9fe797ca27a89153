use std::collections::HashMap;

use chrono::NaiveDateTime;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::{Config, Task};

use crate::dates::{completion_timestamp, maybe_due_date, past_timestamp};
use crate::errors::GenerationError;
use crate::pools::{ENGINEERING_TASKS, MARKETING_TASKS, OPERATIONS_TASKS};
use crate::rng::{choose, probability, random_uuid, weighted_choice};

/// Bias toward the "To Do" / "In Progress" sections.
const SECTION_WEIGHTS: [f64; 5] = [0.15, 0.35, 0.25, 0.15, 0.10];

const DESCRIPTION_RATE: f64 = 0.6;
const ASSIGNEE_RATE: f64 = 0.85;
const COMPLETED_RATE: f64 = 0.65;

/// Generate a fixed number of tasks per project.
pub fn generate_tasks(
    rng: &mut ChaCha8Rng,
    project_ids: &[String],
    sections_by_project: &HashMap<String, Vec<String>>,
    user_ids: &[String],
    config: &Config,
    now: NaiveDateTime,
) -> Result<Vec<Task>, GenerationError> {
    if user_ids.is_empty() {
        return Err(GenerationError::Configuration(
            "task assignment requires at least one user".into(),
        ));
    }

    let mut tasks = Vec::with_capacity(project_ids.len() * config.tasks_per_project);

    for project_id in project_ids {
        let sections = sections_by_project.get(project_id).ok_or_else(|| {
            GenerationError::Configuration(format!("no sections for project {project_id}"))
        })?;

        for _ in 0..config.tasks_per_project {
            let section_id = weighted_choice(rng, sections, &SECTION_WEIGHTS)?.clone();

            // The name pool is picked by an independent draw, not the
            // project's stored type; the source data keeps these decoupled.
            let topic = rng.random::<f64>();
            let name = if topic < 0.5 {
                choose(rng, ENGINEERING_TASKS)
            } else if topic < 0.8 {
                choose(rng, MARKETING_TASKS)
            } else {
                choose(rng, OPERATIONS_TASKS)
            }
            .to_string();

            let description = probability(rng, DESCRIPTION_RATE).then(|| description_for(&name));
            let created_at = past_timestamp(rng, now, config.history_days);
            let due_date = maybe_due_date(rng, now.date());
            let assignee_id =
                probability(rng, ASSIGNEE_RATE).then(|| choose(rng, user_ids).clone());

            let completed = probability(rng, COMPLETED_RATE);
            let completed_at = completed.then(|| completion_timestamp(rng, created_at));

            tasks.push(Task {
                task_id: random_uuid(rng),
                project_id: project_id.clone(),
                section_id,
                assignee_id,
                name,
                description,
                due_date,
                completed,
                created_at,
                completed_at,
            });
        }
    }

    info!(count = tasks.len(), "generated tasks");
    Ok(tasks)
}

fn description_for(name: &str) -> String {
    format!(
        "This task involves: {}.\n\nAcceptance criteria:\n- Requirements implemented\n- Verified and reviewed",
        name.to_lowercase()
    )
}
