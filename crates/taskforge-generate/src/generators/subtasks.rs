use chrono::NaiveDateTime;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::{Config, Subtask};

use crate::dates::{completion_timestamp, past_timestamp};
use crate::pools::SUBTASK_TEMPLATES;
use crate::rng::{choose, probability, random_uuid};

const COMPLETED_RATE: f64 = 0.6;
const ASSIGNEE_RATE: f64 = 0.75;

/// Generate 1..=4 subtasks for tasks selected at the configured ratio.
pub fn generate_subtasks(
    rng: &mut ChaCha8Rng,
    task_ids: &[String],
    user_ids: &[String],
    config: &Config,
    now: NaiveDateTime,
) -> Vec<Subtask> {
    let mut subtasks = Vec::new();

    for task_id in task_ids {
        if !probability(rng, config.subtask_ratio) {
            continue;
        }

        let count = rng.random_range(1..=4);
        for _ in 0..count {
            let created_at = past_timestamp(rng, now, config.history_days);
            let completed = probability(rng, COMPLETED_RATE);
            let completed_at = completed.then(|| completion_timestamp(rng, created_at));
            let assignee_id =
                probability(rng, ASSIGNEE_RATE).then(|| choose(rng, user_ids).clone());

            subtasks.push(Subtask {
                subtask_id: random_uuid(rng),
                parent_task_id: task_id.clone(),
                assignee_id,
                name: choose(rng, SUBTASK_TEMPLATES).to_string(),
                completed,
                created_at,
                completed_at,
            });
        }
    }

    info!(count = subtasks.len(), "generated subtasks");
    subtasks
}
