use pricing_widget_wasm::application::PresenterState;
use pricing_widget_wasm::domain::{
    errors::PricingError,
    logging::LogLevel,
    pricing::{BillingCycle, CurrencyCode, PlanId},
};
use pricing_widget_wasm::infrastructure::WidgetConfig;

#[test]
fn missing_or_blank_json_gives_defaults() {
    assert_eq!(WidgetConfig::from_json(None).unwrap(), WidgetConfig::default());
    assert_eq!(WidgetConfig::from_json(Some("  ")).unwrap(), WidgetConfig::default());
}

#[test]
fn defaults_match_landing_page_markup() {
    let config = WidgetConfig::default();
    assert_eq!(config.price_amount_id, "priceAmount");
    assert_eq!(config.plan_description_id, "planDesc");
    assert_eq!(config.plan_features_id, "planFeatures");
    assert_eq!(config.currency_select_id, "currency");
    assert_eq!(config.initial_state(), PresenterState::default());
    assert_eq!(config.page.header_scroll_threshold, 100.0);
    assert_eq!(config.page.back_to_top_threshold, 300.0);
    assert_eq!(config.page.observer_root_margin, "0px 0px -100px 0px");
}

#[test]
fn partial_json_overrides_only_given_keys() {
    let config = WidgetConfig::from_json(Some(
        r#"{
            "initialPlan": "business",
            "initialBilling": "yearly",
            "initialCurrency": "KES",
            "logLevel": "warn",
            "page": { "backToTopThreshold": 600 }
        }"#,
    ))
    .unwrap();

    assert_eq!(
        config.initial_state(),
        PresenterState::new(PlanId::Business, BillingCycle::Yearly, CurrencyCode::Kes)
    );
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.page.back_to_top_threshold, 600.0);
    assert_eq!(config.page.header_scroll_threshold, 100.0);
    assert_eq!(config.price_amount_id, "priceAmount");
}

#[test]
fn unknown_initial_values_are_rejected() {
    let err = WidgetConfig::from_json(Some(r#"{ "initialCurrency": "EUR" }"#)).unwrap_err();
    assert!(matches!(err, PricingError::InvalidConfig(_)));

    let err = WidgetConfig::from_json(Some("{ not json")).unwrap_err();
    assert!(matches!(err, PricingError::InvalidConfig(_)));
}
