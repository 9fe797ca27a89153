//! One generator per entity type.
//!
//! Each generator is a pure function of (upstream identifiers, configuration,
//! stage RNG) producing rows to persist plus any identifier lists needed
//! downstream. No generator reads back from the sink.

pub mod comments;
pub mod custom_fields;
pub mod organization;
pub mod projects;
pub mod sections;
pub mod subtasks;
pub mod tags;
pub mod tasks;
pub mod teams;
pub mod users;

pub use comments::generate_comments;
pub use custom_fields::{CustomFieldsOutput, generate_custom_fields};
pub use organization::generate_organization;
pub use projects::generate_projects;
pub use sections::{SectionsOutput, generate_sections};
pub use subtasks::generate_subtasks;
pub use tags::{TagsOutput, generate_tags};
pub use tasks::generate_tasks;
pub use teams::{TeamsOutput, generate_teams};
pub use users::generate_users;
