use crate::catalog::factory::create_catalog;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::policy::{CheckoutPolicy, PremiumPolicy, StandardPolicy};
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::PatronTier;
use crate::patrons::factory::create_patron;

pub fn create_policy(tier: PatronTier) -> Box<dyn CheckoutPolicy> {
    match tier {
        PatronTier::Regular => Box::new(StandardPolicy),
        PatronTier::Premium => Box::new(PremiumPolicy),
    }
}

pub fn create_checkout_service(config: &Configuration, tier: PatronTier) -> Box<dyn CheckoutService> {
    let catalog = create_catalog(config);
    let patron = create_patron(config.patron_name.as_str(), tier);
    Box::new(CheckoutServiceImpl::new(catalog, patron))
}
