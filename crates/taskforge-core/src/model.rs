use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Workspace role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

/// Declared type of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Engineering,
    Marketing,
    Operations,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Engineering => "engineering",
            ProjectType::Marketing => "marketing",
            ProjectType::Operations => "operations",
        }
    }
}

/// Value type of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Enum,
    Number,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Enum => "enum",
            FieldType::Number => "number",
        }
    }
}

/// The single workspace scoping all generated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub org_id: String,
    pub name: String,
    pub domain: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub org_id: String,
    pub full_name: String,
    /// Unique across the run even when two generated names collide.
    pub email: String,
    pub role: Role,
    pub joined_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: String,
    pub org_id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMembership {
    pub team_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub team_id: String,
    pub name: String,
    pub project_type: ProjectType,
    pub created_at: NaiveDateTime,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub section_id: String,
    pub project_id: String,
    pub name: String,
    /// 1..=5, matching the canonical workflow order.
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub project_id: String,
    pub section_id: String,
    pub assignee_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    /// Present iff `completed`; always strictly after `created_at`.
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub subtask_id: String,
    pub parent_task_id: String,
    pub assignee_id: Option<String>,
    pub name: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub tag_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTag {
    pub task_id: String,
    pub tag_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: String,
    pub task_id: String,
    pub user_id: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub field_id: String,
    pub project_id: String,
    pub name: String,
    pub field_type: FieldType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValue {
    pub field_id: String,
    pub task_id: String,
    pub value: String,
}

/// Fully generated dataset for one run, grouped per table.
///
/// Produced in memory by the pipeline and handed to the persistence sink as
/// an immutable snapshot; field order matches foreign-key dependency order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub organization: Organization,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub team_memberships: Vec<TeamMembership>,
    pub projects: Vec<Project>,
    pub sections: Vec<Section>,
    pub tasks: Vec<Task>,
    pub subtasks: Vec<Subtask>,
    pub tags: Vec<Tag>,
    pub task_tags: Vec<TaskTag>,
    pub comments: Vec<Comment>,
    pub custom_fields: Vec<CustomField>,
    pub custom_field_values: Vec<CustomFieldValue>,
}

/// Per-table row counts for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub organizations: u64,
    pub users: u64,
    pub teams: u64,
    pub team_memberships: u64,
    pub projects: u64,
    pub sections: u64,
    pub tasks: u64,
    pub subtasks: u64,
    pub tags: u64,
    pub task_tags: u64,
    pub comments: u64,
    pub custom_fields: u64,
    pub custom_field_values: u64,
}

impl Dataset {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            organizations: 1,
            users: self.users.len() as u64,
            teams: self.teams.len() as u64,
            team_memberships: self.team_memberships.len() as u64,
            projects: self.projects.len() as u64,
            sections: self.sections.len() as u64,
            tasks: self.tasks.len() as u64,
            subtasks: self.subtasks.len() as u64,
            tags: self.tags.len() as u64,
            task_tags: self.task_tags.len() as u64,
            comments: self.comments.len() as u64,
            custom_fields: self.custom_fields.len() as u64,
            custom_field_values: self.custom_field_values.len() as u64,
        }
    }
}
