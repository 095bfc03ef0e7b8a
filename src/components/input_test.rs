use super::*;

#[test]
fn size_default_is_default() {
    assert_eq!(InputSize::default(), InputSize::Default);
}

#[test]
fn size_classes_follow_bem_naming() {
    assert_eq!(InputSize::Large.class(), "input--large");
    assert_eq!(InputSize::Small.class(), "input--small");
    assert_eq!(InputSize::Responsive.class(), "input--responsive");
    assert_eq!(InputSize::Default.class(), "input--default");
}
