use chrono::NaiveDateTime;
use fake::Fake;
use fake::faker::name::en::Name;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::{Config, Role, User};

use crate::dates::past_timestamp;
use crate::generators::organization::ORG_DOMAIN;
use crate::rng::{probability, random_uuid};

const ADMIN_RATE: f64 = 0.05;

/// Generate the organization's users.
///
/// Emails derive from the generated name plus the user's index, so they stay
/// unique even when two names collide.
pub fn generate_users(
    rng: &mut ChaCha8Rng,
    org_id: &str,
    config: &Config,
    now: NaiveDateTime,
) -> Vec<User> {
    let mut users = Vec::with_capacity(config.num_users);
    for index in 0..config.num_users {
        let user_id = random_uuid(rng);
        let full_name: String = Name().fake_with_rng(rng);
        let email = email_for(&full_name, index);
        let role = if probability(rng, ADMIN_RATE) {
            Role::Admin
        } else {
            Role::Member
        };
        let joined_at = past_timestamp(rng, now, config.history_days);
        users.push(User {
            user_id,
            org_id: org_id.to_string(),
            full_name,
            email,
            role,
            joined_at,
        });
    }
    info!(count = users.len(), "generated users");
    users
}

fn email_for(full_name: &str, index: usize) -> String {
    let local = full_name.to_lowercase().replace(' ', ".").replace('\'', "");
    format!("{local}.{index}@{ORG_DOMAIN}")
}
