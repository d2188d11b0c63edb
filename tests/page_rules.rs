use pricing_widget_wasm::domain::page::{
    HeaderStyle, anchor_target, back_to_top_visible, should_close_menu,
};

#[test]
fn header_switches_style_past_threshold() {
    assert_eq!(HeaderStyle::for_scroll(0.0, 100.0), HeaderStyle::RESTING);
    assert_eq!(HeaderStyle::for_scroll(101.0, 100.0), HeaderStyle::SCROLLED);
    assert_eq!(HeaderStyle::SCROLLED.background, "rgba(255, 255, 255, 0.98)");
    assert_eq!(HeaderStyle::RESTING.box_shadow, "none");
}

#[test]
fn back_to_top_appears_after_threshold() {
    assert!(!back_to_top_visible(300.0, 300.0));
    assert!(back_to_top_visible(301.0, 300.0));
}

#[test]
fn only_real_fragments_are_scroll_targets() {
    assert_eq!(anchor_target(Some("#pricing")), Some("#pricing"));
    assert_eq!(anchor_target(Some("#")), None);
    assert_eq!(anchor_target(Some("")), None);
    assert_eq!(anchor_target(None), None);
    assert_eq!(anchor_target(Some("/about")), None);
}

#[test]
fn menu_closes_only_on_outside_clicks() {
    assert!(should_close_menu(false, false));
    assert!(!should_close_menu(true, false));
    assert!(!should_close_menu(false, true));
}
