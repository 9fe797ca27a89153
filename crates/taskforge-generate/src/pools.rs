//! Fixed vocabularies sampled by the generators.
//!
//! These are finite pools, never generated freshly; exhausting a pool cycles
//! or errors depending on the caller's policy.

use taskforge_core::{FieldType, ProjectType};

/// Team names, cycled by index when more teams than names are requested.
pub const TEAM_NAMES: &[&str] = &[
    "Platform Engineering",
    "Frontend Engineering",
    "Backend Engineering",
    "Infrastructure",
    "DevOps",
    "Quality Assurance",
    "Product Management",
    "Design",
    "Growth Marketing",
    "Content Marketing",
    "Sales Operations",
    "Customer Success",
    "Revenue Operations",
    "Business Operations",
    "Finance",
    "HR Operations",
    "IT Support",
];

pub const ENGINEERING_PROJECTS: &[&str] = &[
    "Core Platform Refactor",
    "Authentication Service Improvements",
    "API Performance Optimization",
    "Mobile App Stability Sprint",
    "Observability & Monitoring Upgrade",
    "Billing System Revamp",
];

pub const MARKETING_PROJECTS: &[&str] = &[
    "Q2 Product Launch Campaign",
    "Website SEO Improvements",
    "Customer Case Study Program",
    "Email Nurture Campaign",
    "Brand Refresh Initiative",
];

pub const OPERATIONS_PROJECTS: &[&str] = &[
    "Internal Tooling Improvements",
    "Hiring Pipeline Optimization",
    "Compliance & Security Review",
    "Customer Support Workflow Update",
    "Quarterly Planning & OKRs",
];

/// Canonical workflow sections, in position order 1..=5.
pub const SECTION_NAMES: &[&str] = &["Backlog", "To Do", "In Progress", "In Review", "Done"];

pub const ENGINEERING_TASKS: &[&str] = &[
    "Implement API endpoint",
    "Refactor service module",
    "Fix production bug",
    "Add unit tests",
    "Improve query performance",
    "Update CI pipeline",
];

pub const MARKETING_TASKS: &[&str] = &[
    "Draft campaign copy",
    "Design landing page",
    "Schedule email blast",
    "Prepare social media assets",
    "Analyze campaign performance",
];

pub const OPERATIONS_TASKS: &[&str] = &[
    "Update internal documentation",
    "Review vendor contract",
    "Prepare monthly report",
    "Improve onboarding checklist",
    "Audit system permissions",
];

pub const SUBTASK_TEMPLATES: &[&str] = &[
    "Investigate issue",
    "Implement fix",
    "Add tests",
    "Update documentation",
    "Perform code review",
    "Verify in staging",
];

/// Global tag vocabulary, created once per run regardless of usage.
pub const TAG_NAMES: &[&str] = &[
    "bug",
    "feature",
    "urgent",
    "low-priority",
    "tech-debt",
    "customer-request",
    "blocked",
    "quick-win",
    "needs-review",
    "backend",
    "frontend",
];

pub const COMMENT_BODIES: &[&str] = &[
    "Started working on this.",
    "Blocked due to dependency, will update.",
    "PR is up for review.",
    "This should be ready by EOD.",
    "Can someone please take a look?",
    "Following up on this.",
    "I think this is resolved now.",
    "Waiting for confirmation from stakeholders.",
    "Added more details to the description.",
    "Marking this as done.",
];

/// Project name pool for a declared project type.
pub fn project_names(project_type: ProjectType) -> &'static [&'static str] {
    match project_type {
        ProjectType::Engineering => ENGINEERING_PROJECTS,
        ProjectType::Marketing => MARKETING_PROJECTS,
        ProjectType::Operations => OPERATIONS_PROJECTS,
    }
}

/// Custom-field template for one field of a project-type field set.
#[derive(Debug, Clone, Copy)]
pub struct FieldTemplate {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Allowed values for enum fields; empty for numeric fields.
    pub allowed_values: &'static [&'static str],
}

const ENGINEERING_FIELDS: &[FieldTemplate] = &[
    FieldTemplate {
        name: "Priority",
        field_type: FieldType::Enum,
        allowed_values: &["P0", "P1", "P2", "P3"],
    },
    FieldTemplate {
        name: "Story Points",
        field_type: FieldType::Number,
        allowed_values: &[],
    },
];

const MARKETING_FIELDS: &[FieldTemplate] = &[
    FieldTemplate {
        name: "Channel",
        field_type: FieldType::Enum,
        allowed_values: &["Email", "SEO", "Paid Ads", "Social"],
    },
    FieldTemplate {
        name: "Budget ($)",
        field_type: FieldType::Number,
        allowed_values: &[],
    },
];

const OPERATIONS_FIELDS: &[FieldTemplate] = &[
    FieldTemplate {
        name: "Owner Approval",
        field_type: FieldType::Enum,
        allowed_values: &["Yes", "No"],
    },
    FieldTemplate {
        name: "Risk Level",
        field_type: FieldType::Enum,
        allowed_values: &["Low", "Medium", "High"],
    },
];

/// Two-field template set keyed by project type.
pub fn field_templates(project_type: ProjectType) -> &'static [FieldTemplate] {
    match project_type {
        ProjectType::Engineering => ENGINEERING_FIELDS,
        ProjectType::Marketing => MARKETING_FIELDS,
        ProjectType::Operations => OPERATIONS_FIELDS,
    }
}
