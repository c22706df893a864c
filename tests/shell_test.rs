use divvy::cli::{Action, Session, parse_line, render_snapshot};
use rust_decimal_macros::dec;

/// Feed a script of input lines through the parser and session, as the
/// interactive loop would.
fn run_script(session: &mut Session, lines: &[&str]) {
    for line in lines {
        let command = parse_line(line).expect("script line should parse");
        session.apply(command);
    }
}

#[test]
fn test_scripted_dinner_session() {
    let mut session = Session::new();
    run_script(
        &mut session,
        &[
            "add Alice",
            "add Bob",
            "pick 1",
            "charge 10.00",
            "pick 2",
            "charge 20.00",
            "tax 10",
            "fees 6.00",
        ],
    );

    let snapshot = session.snapshot();
    assert_eq!(snapshot.participants[0].owed, dec!(14.00));
    assert_eq!(snapshot.participants[1].owed, dec!(25.00));
    assert_eq!(snapshot.grand_total, dec!(39.00));

    let rendered = render_snapshot(&snapshot, session.selected(), false);
    assert!(rendered.contains("Alice"));
    assert!(rendered.contains("14.00"));
    assert!(rendered.contains("39.00"));
}

#[test]
fn test_charges_follow_the_picked_participant() {
    let mut session = Session::new();
    run_script(
        &mut session,
        &["add Alice", "add Bob", "pick 2", "charge 5.00", "charge 2.50"],
    );

    let snapshot = session.snapshot();
    assert!(snapshot.participants[0].charges.is_empty());
    assert_eq!(snapshot.participants[1].subtotal(), dec!(7.50));
}

#[test]
fn test_charge_before_pick_is_refused_with_hint() {
    let mut session = Session::new();
    session.apply(parse_line("add Alice").unwrap());

    let action = session.apply(parse_line("charge 5.00").unwrap());
    match action {
        Action::Message(hint) => assert!(hint.contains("pick")),
        other => panic!("expected a hint, got {:?}", other),
    }
    assert_eq!(session.snapshot().participants[0].charges.len(), 0);
}

#[test]
fn test_selection_follows_participant_across_removals() {
    let mut session = Session::new();
    run_script(
        &mut session,
        &["add Alice", "add Bob", "add Carol", "pick 3", "rm 1"],
    );

    // Carol moved up one slot; charges still land on her
    session.apply(parse_line("charge 4.00").unwrap());
    let snapshot = session.snapshot();
    assert_eq!(snapshot.participants[1].name, "Carol");
    assert_eq!(snapshot.participants[1].subtotal(), dec!(4.00));
}

#[test]
fn test_removing_picked_participant_requires_a_new_pick() {
    let mut session = Session::new();
    run_script(&mut session, &["add Alice", "add Bob", "pick 1", "rm 1"]);

    assert_eq!(session.selected(), None);
    let action = session.apply(parse_line("charge 1.00").unwrap());
    assert!(matches!(action, Action::Message(_)));
}

#[test]
fn test_bad_amounts_leave_the_session_unchanged() {
    let mut session = Session::new();
    run_script(
        &mut session,
        &["add Alice", "pick 1", "charge banana", "charge", "tax %%", "fees"],
    );

    let snapshot = session.snapshot();
    assert!(snapshot.participants[0].charges.is_empty());
    assert_eq!(snapshot.tax_rate_percent, dec!(0));
    assert_eq!(snapshot.shared_fees_and_tips, dec!(0));
}

#[test]
fn test_name_is_free_again_after_removal() {
    let mut session = Session::new();
    run_script(&mut session, &["add Alice", "rm 1", "add alice"]);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.participants.len(), 1);
    assert_eq!(snapshot.participants[0].name, "alice");
}

#[test]
fn test_rm_charge_prunes_a_single_item() {
    let mut session = Session::new();
    run_script(
        &mut session,
        &[
            "add Alice",
            "pick 1",
            "charge 1.00",
            "charge 2.00",
            "charge 3.00",
            "rm 1 2",
        ],
    );

    let snapshot = session.snapshot();
    assert_eq!(snapshot.participants[0].charges, vec![dec!(1.00), dec!(3.00)]);
}

#[test]
fn test_parse_errors_read_like_sentences() {
    let err = parse_line("rm zero").unwrap_err();
    assert_eq!(err.to_string(), "expected a number of 1 or more, got 'zero'");

    let err = parse_line("settle").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown command 'settle' (type 'help' for the command list)"
    );

    let err = parse_line("add").unwrap_err();
    assert_eq!(err.to_string(), "usage: add <name>");
}
