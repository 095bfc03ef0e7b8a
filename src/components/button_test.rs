use super::*;

// =============================================================
// Theme tokens
// =============================================================

#[test]
fn theme_default_is_primary() {
    assert_eq!(ButtonTheme::default(), ButtonTheme::Primary);
}

#[test]
fn theme_classes_follow_bem_naming() {
    assert_eq!(ButtonTheme::Primary.class(), "btn--primary");
    assert_eq!(ButtonTheme::Secondary.class(), "btn--secondary");
}

// =============================================================
// Size tokens
// =============================================================

#[test]
fn size_default_is_small() {
    assert_eq!(ButtonSize::default(), ButtonSize::Small);
}

#[test]
fn size_classes_follow_bem_naming() {
    assert_eq!(ButtonSize::Small.class(), "btn--small");
    assert_eq!(ButtonSize::Large.class(), "btn--large");
    assert_eq!(ButtonSize::Long.class(), "btn--long");
    assert_eq!(ButtonSize::Responsive.class(), "btn--responsive");
}
