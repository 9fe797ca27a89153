use chrono::NaiveDateTime;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::Comment;

use crate::dates::past_timestamp;
use crate::errors::GenerationError;
use crate::pools::COMMENT_BODIES;
use crate::rng::{choose, probability, random_uuid, sample_without_replacement};

const COMMENTED_TASK_RATE: f64 = 0.6;
/// Comment timestamps use a fixed window, independent of `history_days`.
const COMMENT_WINDOW_DAYS: u32 = 180;

/// Generate 1..=5 comments for 60% of tasks.
///
/// Authors come from a small per-task commenter subset (1..=3 users sampled
/// without replacement, clamped to the population), not from all org users.
pub fn generate_comments(
    rng: &mut ChaCha8Rng,
    task_ids: &[String],
    user_ids: &[String],
    now: NaiveDateTime,
) -> Result<Vec<Comment>, GenerationError> {
    let mut comments = Vec::new();

    for task_id in task_ids {
        if !probability(rng, COMMENTED_TASK_RATE) {
            continue;
        }

        let comment_count = rng.random_range(1..=5);
        let requested = rng.random_range(1..=3_usize);
        let commenters = sample_without_replacement(
            rng,
            "users",
            user_ids,
            requested.min(user_ids.len()),
        )?;
        if commenters.is_empty() {
            continue;
        }

        for _ in 0..comment_count {
            comments.push(Comment {
                comment_id: random_uuid(rng),
                task_id: task_id.clone(),
                user_id: (*choose(rng, &commenters)).clone(),
                body: choose(rng, COMMENT_BODIES).to_string(),
                created_at: past_timestamp(rng, now, COMMENT_WINDOW_DAYS),
            });
        }
    }

    info!(count = comments.len(), "generated comments");
    Ok(comments)
}
