use pricing_widget_wasm::domain::pricing::{
    BillingCycle, PLAN_CATALOG, PlanCatalog, PlanId, PlanPriceResolver, PlanPrices,
    YEARLY_DISCOUNT_FACTOR,
};
use strum::IntoEnumIterator;

#[test]
fn paid_plans_resolve_to_finite_prices() {
    let resolver = PlanPriceResolver::default();
    for plan in [PlanId::Basic, PlanId::Business] {
        for cycle in BillingCycle::iter() {
            let amount = resolver.resolve(plan, cycle).expect("paid plan has a price");
            assert!(amount.value().is_finite() && amount.value() >= 0.0, "{plan} {cycle} -> {amount}");
        }
    }
}

#[test]
fn enterprise_is_custom_for_both_cycles() {
    let resolver = PlanPriceResolver::default();
    assert_eq!(resolver.resolve(PlanId::Enterprise, BillingCycle::Monthly), None);
    assert_eq!(resolver.resolve(PlanId::Enterprise, BillingCycle::Yearly), None);
}

#[test]
fn yearly_is_twelve_months_with_discount() {
    let resolver = PlanPriceResolver::default();
    for (plan, monthly) in [(PlanId::Basic, 99.0), (PlanId::Business, 499.0)] {
        let m = resolver.resolve(plan, BillingCycle::Monthly).unwrap().value();
        let y = resolver.resolve(plan, BillingCycle::Yearly).unwrap().value();
        assert_eq!(m, monthly);
        assert!((y - monthly * 12.0 * YEARLY_DISCOUNT_FACTOR).abs() < 1e-9);
    }
    let basic_yearly = resolver.resolve(PlanId::Basic, BillingCycle::Yearly).unwrap().value();
    assert!((basic_yearly - 950.4).abs() < 1e-9);
}

#[test]
fn every_plan_has_eight_features_in_declared_order() {
    for entry in PLAN_CATALOG.entries() {
        assert_eq!(entry.features.len(), 8, "{}", entry.id);
    }
    let basic = PLAN_CATALOG.get(PlanId::Basic);
    assert_eq!(basic.features[0], "Predefined static fraud rules (plug-and-play)");
    assert_eq!(basic.features[7], "Standard support via email");
    let enterprise = PLAN_CATALOG.get(PlanId::Enterprise);
    assert_eq!(enterprise.features[0], "All Business features");
}

#[test]
fn entries_follow_tab_order() {
    let ids: Vec<PlanId> = PLAN_CATALOG.entries().map(|e| e.id).collect();
    assert_eq!(ids, vec![PlanId::Basic, PlanId::Business, PlanId::Enterprise]);
}

#[test]
fn catalog_is_rebuilt_identically() {
    assert_eq!(PlanCatalog::standard(), *PLAN_CATALOG);
}

#[test]
fn monthly_prices_are_checked_before_deriving_yearly() {
    let prices = PlanPrices::from_monthly(99.0).unwrap();
    assert_eq!(prices, PLAN_CATALOG.get(PlanId::Basic).price_usd);

    assert!(PlanPrices::from_monthly(-5.0).is_err());
    assert!(PlanPrices::from_monthly(f64::NAN).is_err());
    // finite monthly, but the yearly total overflows
    assert!(PlanPrices::from_monthly(f64::MAX).is_err());
}
