use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use taskforge_core::{Config, Dataset};
use taskforge_generate::Pipeline;

fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

fn scenario_config() -> Config {
    Config {
        db_path: PathBuf::from("output/test.sqlite"),
        num_users: 10,
        num_teams: 2,
        projects_per_team: 1,
        tasks_per_project: 5,
        subtask_ratio: 0.3,
        history_days: 180,
        random_seed: 42,
    }
}

fn run(config: Config) -> Dataset {
    Pipeline::with_clock(config, fixed_clock())
        .run()
        .expect("pipeline run")
}

#[test]
fn stage_order_is_the_dependency_order() {
    let names: Vec<&str> = taskforge_generate::Stage::ORDER
        .iter()
        .map(|stage| stage.name())
        .collect();
    assert_eq!(
        names,
        [
            "organization",
            "users",
            "teams",
            "projects",
            "sections",
            "tasks",
            "subtasks",
            "tags",
            "comments",
            "custom_fields",
        ]
    );
}

#[test]
fn runs_are_identical_for_a_fixed_seed_and_clock() {
    let first = run(scenario_config());
    let second = run(scenario_config());
    assert_eq!(first, second);
}

#[test]
fn different_seeds_produce_different_datasets() {
    let first = run(scenario_config());
    let mut config = scenario_config();
    config.random_seed = 43;
    let second = run(config);
    assert_ne!(first, second);
}

#[test]
fn scenario_counts_match_configuration() {
    let dataset = run(scenario_config());

    assert_eq!(dataset.users.len(), 10);
    assert_eq!(dataset.teams.len(), 2);
    assert_eq!(dataset.projects.len(), 2);
    assert_eq!(dataset.sections.len(), 10);
    assert_eq!(dataset.tasks.len(), 10);
    assert_eq!(dataset.tags.len(), 11);
}

#[test]
fn reruns_reproduce_task_names_and_completion_flags() {
    let first = run(scenario_config());
    let second = run(scenario_config());

    let names: Vec<&str> = first.tasks.iter().map(|task| task.name.as_str()).collect();
    let names_again: Vec<&str> = second.tasks.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, names_again);

    let flags: Vec<bool> = first.tasks.iter().map(|task| task.completed).collect();
    let flags_again: Vec<bool> = second.tasks.iter().map(|task| task.completed).collect();
    assert_eq!(flags, flags_again);
}

#[test]
fn sections_are_canonical_per_project() {
    let dataset = run(scenario_config());
    let canonical = ["Backlog", "To Do", "In Progress", "In Review", "Done"];

    for project in &dataset.projects {
        let mut sections: Vec<_> = dataset
            .sections
            .iter()
            .filter(|section| section.project_id == project.project_id)
            .collect();
        sections.sort_by_key(|section| section.position);

        assert_eq!(sections.len(), 5);
        for (index, section) in sections.iter().enumerate() {
            assert_eq!(section.position, (index + 1) as i64);
            assert_eq!(section.name, canonical[index]);
        }
    }
}

#[test]
fn team_membership_sizes_stay_within_bounds() {
    let dataset = run(scenario_config());
    let population = dataset.users.len() as f64;
    let min_size = (0.10 * population).ceil() as usize;
    let max_size = (0.30 * population).floor() as usize;

    for team in &dataset.teams {
        let members: Vec<_> = dataset
            .team_memberships
            .iter()
            .filter(|membership| membership.team_id == team.team_id)
            .collect();
        assert!(
            members.len() >= min_size && members.len() <= max_size,
            "team {} has {} members, expected {min_size}..={max_size}",
            team.name,
            members.len()
        );
    }

    let pairs: HashSet<(&str, &str)> = dataset
        .team_memberships
        .iter()
        .map(|membership| (membership.team_id.as_str(), membership.user_id.as_str()))
        .collect();
    assert_eq!(pairs.len(), dataset.team_memberships.len());
}

#[test]
fn every_foreign_key_references_an_existing_row() {
    let dataset = run(scenario_config());

    let org_id = dataset.organization.org_id.as_str();
    let user_ids: HashSet<&str> = dataset.users.iter().map(|u| u.user_id.as_str()).collect();
    let team_ids: HashSet<&str> = dataset.teams.iter().map(|t| t.team_id.as_str()).collect();
    let project_ids: HashSet<&str> = dataset
        .projects
        .iter()
        .map(|p| p.project_id.as_str())
        .collect();
    let task_ids: HashSet<&str> = dataset.tasks.iter().map(|t| t.task_id.as_str()).collect();
    let tag_ids: HashSet<&str> = dataset.tags.iter().map(|t| t.tag_id.as_str()).collect();
    let field_ids: HashSet<&str> = dataset
        .custom_fields
        .iter()
        .map(|f| f.field_id.as_str())
        .collect();
    let section_projects: HashMap<&str, &str> = dataset
        .sections
        .iter()
        .map(|s| (s.section_id.as_str(), s.project_id.as_str()))
        .collect();

    for user in &dataset.users {
        assert_eq!(user.org_id, org_id);
    }
    for team in &dataset.teams {
        assert_eq!(team.org_id, org_id);
    }
    for membership in &dataset.team_memberships {
        assert!(team_ids.contains(membership.team_id.as_str()));
        assert!(user_ids.contains(membership.user_id.as_str()));
    }
    for project in &dataset.projects {
        assert!(team_ids.contains(project.team_id.as_str()));
    }
    for task in &dataset.tasks {
        assert!(project_ids.contains(task.project_id.as_str()));
        // The section must belong to the task's own project.
        assert_eq!(
            section_projects.get(task.section_id.as_str()),
            Some(&task.project_id.as_str())
        );
        if let Some(assignee) = &task.assignee_id {
            assert!(user_ids.contains(assignee.as_str()));
        }
    }
    for subtask in &dataset.subtasks {
        assert!(task_ids.contains(subtask.parent_task_id.as_str()));
        if let Some(assignee) = &subtask.assignee_id {
            assert!(user_ids.contains(assignee.as_str()));
        }
    }
    for task_tag in &dataset.task_tags {
        assert!(task_ids.contains(task_tag.task_id.as_str()));
        assert!(tag_ids.contains(task_tag.tag_id.as_str()));
    }
    for comment in &dataset.comments {
        assert!(task_ids.contains(comment.task_id.as_str()));
        assert!(user_ids.contains(comment.user_id.as_str()));
    }
    for field in &dataset.custom_fields {
        assert!(project_ids.contains(field.project_id.as_str()));
    }
    for value in &dataset.custom_field_values {
        assert!(field_ids.contains(value.field_id.as_str()));
        assert!(task_ids.contains(value.task_id.as_str()));
    }
}

#[test]
fn emails_stay_unique_with_many_users() {
    let mut config = scenario_config();
    config.num_users = 300;
    let dataset = run(config);

    let emails: HashSet<&str> = dataset.users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails.len(), 300);
}

#[test]
fn completion_timestamps_postdate_creation_within_two_weeks() {
    let mut config = scenario_config();
    config.tasks_per_project = 50;
    let dataset = run(config);

    for task in &dataset.tasks {
        assert_eq!(task.completed, task.completed_at.is_some());
        if let Some(completed_at) = task.completed_at {
            let delta = completed_at - task.created_at;
            assert!(delta >= Duration::days(1) && delta <= Duration::days(14));
        }
    }
    for subtask in &dataset.subtasks {
        assert_eq!(subtask.completed, subtask.completed_at.is_some());
        if let Some(completed_at) = subtask.completed_at {
            let delta = completed_at - subtask.created_at;
            assert!(delta >= Duration::days(1) && delta <= Duration::days(14));
        }
    }
}

#[test]
fn due_dates_lie_in_the_future() {
    let mut config = scenario_config();
    config.tasks_per_project = 50;
    let dataset = run(config);
    let today = fixed_clock().date();

    for project in &dataset.projects {
        if let Some(due_date) = project.due_date {
            assert!(due_date > today);
        }
    }
    for task in &dataset.tasks {
        if let Some(due_date) = task.due_date {
            assert!(due_date > today && due_date <= today + Duration::days(90));
        }
    }
}

#[test]
fn zero_subtask_ratio_generates_no_subtasks() {
    let mut config = scenario_config();
    config.subtask_ratio = 0.0;
    config.tasks_per_project = 40;
    let dataset = run(config);
    assert!(dataset.subtasks.is_empty());
}

#[test]
fn task_tag_pairs_never_repeat() {
    let mut config = scenario_config();
    config.tasks_per_project = 60;
    let dataset = run(config);

    let pairs: HashSet<(&str, &str)> = dataset
        .task_tags
        .iter()
        .map(|tt| (tt.task_id.as_str(), tt.tag_id.as_str()))
        .collect();
    assert_eq!(pairs.len(), dataset.task_tags.len());
}

#[test]
fn each_project_gets_exactly_two_custom_fields() {
    let dataset = run(scenario_config());

    for project in &dataset.projects {
        let fields: Vec<_> = dataset
            .custom_fields
            .iter()
            .filter(|field| field.project_id == project.project_id)
            .collect();
        assert_eq!(fields.len(), 2, "project {}", project.name);
    }

    for value in &dataset.custom_field_values {
        let field = dataset
            .custom_fields
            .iter()
            .find(|field| field.field_id == value.field_id)
            .expect("value references a known field");
        if field.field_type == taskforge_core::FieldType::Number {
            let number: i64 = value.value.parse().expect("numeric value");
            assert!((1..=13).contains(&number));
        } else {
            assert!(!value.value.is_empty());
        }
    }
}

#[test]
fn comment_counts_per_task_stay_in_range() {
    let mut config = scenario_config();
    config.tasks_per_project = 60;
    let dataset = run(config);

    let mut per_task: HashMap<&str, usize> = HashMap::new();
    for comment in &dataset.comments {
        *per_task.entry(comment.task_id.as_str()).or_insert(0) += 1;
    }
    for (task_id, count) in per_task {
        assert!(
            (1..=5).contains(&count),
            "task {task_id} has {count} comments"
        );
    }
}

#[test]
fn invalid_configuration_aborts_before_generation() {
    let mut config = scenario_config();
    config.num_users = 0;
    let err = Pipeline::with_clock(config, fixed_clock())
        .run()
        .expect_err("zero users accepted");
    assert!(matches!(
        err,
        taskforge_generate::GenerationError::Configuration(_)
    ));
}
