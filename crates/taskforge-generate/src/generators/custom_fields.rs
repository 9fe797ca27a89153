use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::{CustomField, CustomFieldValue, FieldType};

use crate::errors::GenerationError;
use crate::generators::projects::{PROJECT_TYPES, PROJECT_TYPE_WEIGHTS};
use crate::pools::{FieldTemplate, field_templates};
use crate::rng::{choose, probability, random_uuid, sample_without_replacement, weighted_choice};

/// Share of tasks eligible for values, per project.
const ELIGIBLE_TASK_SHARE: f64 = 0.2;
const VALUE_RATE: f64 = 0.6;

/// Custom fields plus their sparse per-task values.
#[derive(Debug, Clone)]
pub struct CustomFieldsOutput {
    pub fields: Vec<CustomField>,
    pub values: Vec<CustomFieldValue>,
}

/// Generate a two-field template set per project and assign values sparsely.
///
/// The template set is keyed off a fresh weighted type draw, independent of
/// the project's stored type; the source data keeps these decoupled.
pub fn generate_custom_fields(
    rng: &mut ChaCha8Rng,
    project_ids: &[String],
    task_ids: &[String],
) -> Result<CustomFieldsOutput, GenerationError> {
    let mut fields = Vec::with_capacity(project_ids.len() * 2);
    let mut fields_by_project: Vec<Vec<(String, &'static FieldTemplate)>> =
        Vec::with_capacity(project_ids.len());

    for project_id in project_ids {
        let template_type = *weighted_choice(rng, &PROJECT_TYPES, &PROJECT_TYPE_WEIGHTS)?;
        let mut project_fields = Vec::with_capacity(2);

        for template in field_templates(template_type) {
            let field_id = random_uuid(rng);
            fields.push(CustomField {
                field_id: field_id.clone(),
                project_id: project_id.clone(),
                name: template.name.to_string(),
                field_type: template.field_type,
            });
            project_fields.push((field_id, template));
        }
        fields_by_project.push(project_fields);
    }

    let mut values = Vec::new();
    let eligible = if task_ids.is_empty() {
        0
    } else {
        ((ELIGIBLE_TASK_SHARE * task_ids.len() as f64) as usize)
            .max(1)
            .min(task_ids.len())
    };

    for project_fields in &fields_by_project {
        let eligible_tasks = sample_without_replacement(rng, "tasks", task_ids, eligible)?;
        for task_id in eligible_tasks {
            for (field_id, template) in project_fields {
                if !probability(rng, VALUE_RATE) {
                    continue;
                }
                let value = match template.field_type {
                    FieldType::Number => rng.random_range(1..=13_i64).to_string(),
                    FieldType::Enum => choose(rng, template.allowed_values).to_string(),
                };
                values.push(CustomFieldValue {
                    field_id: field_id.clone(),
                    task_id: task_id.clone(),
                    value,
                });
            }
        }
    }

    info!(
        fields = fields.len(),
        values = values.len(),
        "generated custom fields"
    );
    Ok(CustomFieldsOutput { fields, values })
}
