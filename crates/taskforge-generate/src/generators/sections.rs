use std::collections::HashMap;

use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::Section;

use crate::pools::SECTION_NAMES;
use crate::rng::random_uuid;

/// Sections plus a per-project index of their identifiers, kept in position
/// order so downstream weighted draws line up with the canonical workflow.
#[derive(Debug, Clone)]
pub struct SectionsOutput {
    pub sections: Vec<Section>,
    pub by_project: HashMap<String, Vec<String>>,
}

/// Generate the five canonical workflow sections for every project.
///
/// Deterministic apart from identifier draws: fixed names, fixed order,
/// positions 1..=5.
pub fn generate_sections(rng: &mut ChaCha8Rng, project_ids: &[String]) -> SectionsOutput {
    let mut sections = Vec::with_capacity(project_ids.len() * SECTION_NAMES.len());
    let mut by_project = HashMap::with_capacity(project_ids.len());

    for project_id in project_ids {
        let mut section_ids = Vec::with_capacity(SECTION_NAMES.len());
        for (offset, name) in SECTION_NAMES.iter().enumerate() {
            let section_id = random_uuid(rng);
            sections.push(Section {
                section_id: section_id.clone(),
                project_id: project_id.clone(),
                name: name.to_string(),
                position: (offset + 1) as i64,
            });
            section_ids.push(section_id);
        }
        by_project.insert(project_id.clone(), section_ids);
    }

    info!(projects = project_ids.len(), "generated sections");
    SectionsOutput {
        sections,
        by_project,
    }
}
