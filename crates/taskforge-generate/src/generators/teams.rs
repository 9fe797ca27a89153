use chrono::NaiveDateTime;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::{Config, Team, TeamMembership};

use crate::errors::GenerationError;
use crate::pools::TEAM_NAMES;
use crate::rng::{random_uuid, sample_without_replacement};

const MIN_MEMBERSHIP_SHARE: f64 = 0.10;
const MAX_MEMBERSHIP_SHARE: f64 = 0.30;

/// Teams plus their memberships.
#[derive(Debug, Clone)]
pub struct TeamsOutput {
    pub teams: Vec<Team>,
    pub memberships: Vec<TeamMembership>,
}

/// Generate teams and team memberships.
///
/// Names cycle through the fixed pool by index, so more teams than template
/// names is fine. Each team independently gets 10-30% of all users, sampled
/// without replacement within the team; users may belong to several teams.
pub fn generate_teams(
    rng: &mut ChaCha8Rng,
    org_id: &str,
    user_ids: &[String],
    config: &Config,
    now: NaiveDateTime,
) -> Result<TeamsOutput, GenerationError> {
    if user_ids.is_empty() {
        return Err(GenerationError::Configuration(
            "team memberships require at least one user".into(),
        ));
    }

    let mut teams = Vec::with_capacity(config.num_teams);
    let mut memberships = Vec::new();

    let population = user_ids.len() as f64;
    let min_size = (MIN_MEMBERSHIP_SHARE * population).ceil() as usize;
    let max_size = ((MAX_MEMBERSHIP_SHARE * population).floor() as usize).max(min_size);

    for index in 0..config.num_teams {
        let team_id = random_uuid(rng);
        let name = TEAM_NAMES[index % TEAM_NAMES.len()].to_string();

        let team_size = rng.random_range(min_size..=max_size);
        let members = sample_without_replacement(rng, "users", user_ids, team_size)?;
        for user_id in members {
            memberships.push(TeamMembership {
                team_id: team_id.clone(),
                user_id: user_id.clone(),
            });
        }

        teams.push(Team {
            team_id,
            org_id: org_id.to_string(),
            name,
            created_at: now,
        });
    }

    info!(
        teams = teams.len(),
        memberships = memberships.len(),
        "generated teams"
    );
    Ok(TeamsOutput { teams, memberships })
}
