use chrono::NaiveDateTime;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use taskforge_core::Organization;

use crate::rng::random_uuid;

pub const ORG_NAME: &str = "Acme Cloud Technologies";
pub const ORG_DOMAIN: &str = "acmecloud.com";

/// Generate the single organization scoping the whole run.
pub fn generate_organization(rng: &mut ChaCha8Rng, now: NaiveDateTime) -> Organization {
    let organization = Organization {
        org_id: random_uuid(rng),
        name: ORG_NAME.to_string(),
        domain: ORG_DOMAIN.to_string(),
        created_at: now,
    };
    info!(org_id = %organization.org_id, name = %organization.name, "organization created");
    organization
}
