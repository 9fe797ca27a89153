use std::path::PathBuf;

use taskforge_core::{Config, Error};

#[test]
fn default_config_is_valid() {
    Config::default().validate().expect("default config");
}

#[test]
fn zero_counts_are_rejected() {
    for field in ["num_users", "num_teams", "projects_per_team", "tasks_per_project"] {
        let mut config = Config::default();
        match field {
            "num_users" => config.num_users = 0,
            "num_teams" => config.num_teams = 0,
            "projects_per_team" => config.projects_per_team = 0,
            _ => config.tasks_per_project = 0,
        }
        let err = config.validate().expect_err("zero count accepted");
        let Error::Configuration(message) = err;
        assert!(message.contains(field), "message should name {field}: {message}");
    }
}

#[test]
fn subtask_ratio_bounds_are_inclusive() {
    let mut config = Config::default();
    config.subtask_ratio = 0.0;
    config.validate().expect("ratio 0.0");

    config.subtask_ratio = 1.0;
    config.validate().expect("ratio 1.0");

    config.subtask_ratio = 1.5;
    assert!(config.validate().is_err());

    config.subtask_ratio = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn empty_db_path_is_rejected() {
    let mut config = Config::default();
    config.db_path = PathBuf::new();
    assert!(config.validate().is_err());
}

#[test]
fn zero_history_window_is_rejected() {
    let mut config = Config::default();
    config.history_days = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = Config::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let back: Config = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(config, back);
}
