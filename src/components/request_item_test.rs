use super::*;

// =============================================================
// Direction -> action table
// =============================================================

#[test]
fn sent_requests_offer_only_cancel() {
    let actions = actions_for(RequestDirection::Sent);
    assert_eq!(
        actions,
        vec![("Cancel", ButtonTheme::Primary, RequestCommand::Cancel)]
    );
}

#[test]
fn received_requests_offer_accept_then_reject() {
    let actions = actions_for(RequestDirection::Received);
    assert_eq!(
        actions,
        vec![
            ("Accept", ButtonTheme::Primary, RequestCommand::Accept),
            ("Reject", ButtonTheme::Secondary, RequestCommand::Reject),
        ]
    );
}

#[test]
fn accept_is_the_primary_received_action() {
    let actions = actions_for(RequestDirection::Received);
    assert_eq!(actions[0].1, ButtonTheme::Primary);
    assert_eq!(actions[0].2, RequestCommand::Accept);
}
