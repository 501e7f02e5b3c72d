use tracing::info;
use crate::checkout::factory::create_policy;
use crate::core::library::PatronTier;
use crate::patrons::domain::model::Patron;

pub fn create_patron(name: &str, tier: PatronTier) -> Patron {
    info!(patron = name, tier = %tier, "patron registered");
    Patron::new(name, create_policy(tier))
}
