use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};

use taskforge_core::{Config, Dataset};
use taskforge_db::{DatasetSink, SinkError, SqliteSink};
use taskforge_generate::Pipeline;

fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

fn small_config() -> Config {
    Config {
        db_path: PathBuf::from("output/test.sqlite"),
        num_users: 12,
        num_teams: 2,
        projects_per_team: 2,
        tasks_per_project: 8,
        subtask_ratio: 0.5,
        history_days: 90,
        random_seed: 7,
    }
}

fn small_dataset() -> Dataset {
    Pipeline::with_clock(small_config(), fixed_clock())
        .run()
        .expect("pipeline run")
}

#[tokio::test]
async fn bootstrap_is_idempotent() {
    let mut sink = SqliteSink::open_in_memory().await.expect("open sink");
    sink.bootstrap().await.expect("first bootstrap");
    sink.bootstrap().await.expect("second bootstrap");
}

#[tokio::test]
async fn bootstrap_applies_the_whole_schema() {
    let mut sink = SqliteSink::open_in_memory().await.expect("open sink");
    sink.bootstrap().await.expect("bootstrap");

    // Counting succeeds only if the multi-statement DDL created every table.
    for table in [
        "organizations",
        "users",
        "teams",
        "team_memberships",
        "projects",
        "sections",
        "tasks",
        "subtasks",
        "tags",
        "task_tags",
        "comments",
        "custom_fields",
        "custom_field_values",
    ] {
        assert_eq!(sink.table_count(table).await.expect("count"), 0, "table {table}");
    }
}

#[tokio::test]
async fn persist_round_trips_every_table() {
    let dataset = small_dataset();
    let summary = dataset.summary();

    let mut sink = SqliteSink::open_in_memory().await.expect("open sink");
    sink.bootstrap().await.expect("bootstrap");
    sink.persist(&dataset).await.expect("persist");

    let expected = [
        ("organizations", summary.organizations),
        ("users", summary.users),
        ("teams", summary.teams),
        ("team_memberships", summary.team_memberships),
        ("projects", summary.projects),
        ("sections", summary.sections),
        ("tasks", summary.tasks),
        ("subtasks", summary.subtasks),
        ("tags", summary.tags),
        ("task_tags", summary.task_tags),
        ("comments", summary.comments),
        ("custom_fields", summary.custom_fields),
        ("custom_field_values", summary.custom_field_values),
    ];
    for (table, count) in expected {
        let persisted = sink.table_count(table).await.expect("count");
        assert_eq!(persisted, count, "table {table}");
    }
}

#[tokio::test]
async fn dangling_foreign_key_is_rejected() {
    let mut dataset = small_dataset();
    dataset.tasks[0].project_id = "missing-project".to_string();

    let mut sink = SqliteSink::open_in_memory().await.expect("open sink");
    sink.bootstrap().await.expect("bootstrap");

    let err = sink
        .persist(&dataset)
        .await
        .expect_err("dangling FK accepted");
    assert!(matches!(
        err,
        SinkError::ReferentialIntegrity { table: "tasks" }
    ));
}

#[tokio::test]
async fn failed_persist_leaves_no_partial_data() {
    let mut dataset = small_dataset();
    let last = dataset.comments.len() - 1;
    dataset.comments[last].user_id = "missing-user".to_string();

    let mut sink = SqliteSink::open_in_memory().await.expect("open sink");
    sink.bootstrap().await.expect("bootstrap");
    assert!(sink.persist(&dataset).await.is_err());

    // Everything before the failing table must have been rolled back too.
    for table in ["organizations", "users", "tasks", "comments"] {
        assert_eq!(sink.table_count(table).await.expect("count"), 0);
    }
}

#[tokio::test]
async fn persisted_runs_are_reproducible() {
    let dataset_a = small_dataset();
    let dataset_b = small_dataset();
    assert_eq!(dataset_a, dataset_b);

    let mut sink = SqliteSink::open_in_memory().await.expect("open sink");
    sink.bootstrap().await.expect("bootstrap");
    sink.persist(&dataset_a).await.expect("persist");
    assert_eq!(sink.engine(), "sqlite");
}
