use super::*;

// =============================================================
// Friend row action table
// =============================================================

#[test]
fn friend_rows_offer_visit_then_delete() {
    assert_eq!(
        row_actions(),
        vec![
            ("Visit", ButtonTheme::Primary, FriendCommand::Visit),
            ("Delete", ButtonTheme::Secondary, FriendCommand::Delete),
        ]
    );
}

#[test]
fn visit_is_the_primary_friend_action() {
    let actions = row_actions();
    assert_eq!(actions[0].1, ButtonTheme::Primary);
    assert_eq!(actions[0].2, FriendCommand::Visit);
}
