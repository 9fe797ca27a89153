//! Shared domain model, configuration, and errors for Taskforge.
//!
//! The row structs here mirror the SQLite tables one to one; the generation
//! and persistence crates both speak in these types.

pub mod config;
pub mod error;
pub mod model;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{
    Comment, CustomField, CustomFieldValue, Dataset, FieldType, Organization, Project,
    ProjectType, Role, RunSummary, Section, Subtask, Tag, Task, TaskTag, Team, TeamMembership,
    User,
};
