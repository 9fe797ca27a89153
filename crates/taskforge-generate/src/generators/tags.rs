use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::{Tag, TaskTag};

use crate::errors::GenerationError;
use crate::pools::TAG_NAMES;
use crate::rng::{probability, random_uuid, sample_without_replacement};

const TAGGED_TASK_RATE: f64 = 0.7;

/// Tags plus their task assignments.
#[derive(Debug, Clone)]
pub struct TagsOutput {
    pub tags: Vec<Tag>,
    pub task_tags: Vec<TaskTag>,
}

/// Create the full tag vocabulary, then assign 1..=3 distinct tags to 70% of
/// tasks. Every tag row exists regardless of usage.
pub fn generate_tags(
    rng: &mut ChaCha8Rng,
    task_ids: &[String],
) -> Result<TagsOutput, GenerationError> {
    let mut tags = Vec::with_capacity(TAG_NAMES.len());
    for name in TAG_NAMES {
        tags.push(Tag {
            tag_id: random_uuid(rng),
            name: name.to_string(),
        });
    }

    let mut task_tags = Vec::new();
    for task_id in task_ids {
        if !probability(rng, TAGGED_TASK_RATE) {
            continue;
        }

        let count = rng.random_range(1..=3);
        let chosen = sample_without_replacement(rng, "tags", &tags, count)?;
        for tag in chosen {
            task_tags.push(TaskTag {
                task_id: task_id.clone(),
                tag_id: tag.tag_id.clone(),
            });
        }
    }

    info!(
        tags = tags.len(),
        task_tags = task_tags.len(),
        "generated tags"
    );
    Ok(TagsOutput { tags, task_tags })
}
