use stitchforge::calculator::{calculate, Action, Step};
use stitchforge::verifier::{verify_decrease, verify_increase, verify_steps, Tally};

#[test]
fn test_tally_counts_knits_and_actions() {
    let steps = vec![Step::increase(3, 1), Step::increase(1, 4), Step::decrease(0)];
    assert_eq!(Tally::from_steps(&steps), Tally { knit: 4, actions: 6 });
    assert_eq!(Tally::from_steps(&[]), Tally::default());
}

#[test]
fn test_increase_mismatch_is_flagged() {
    let v = verify_increase(8, 3, 8, 12);
    assert!(!v.ok);
    assert_eq!(
        v.text,
        "Verification: 8 knit + 3 added = 11 ❌ MISMATCH (expected 12)"
    );

    // right total, wrong split
    assert!(!verify_increase(7, 5, 8, 12).ok);
}

#[test]
fn test_decrease_mismatch_is_flagged() {
    let v = verify_decrease(3, 4, 10, 6);
    assert!(!v.ok);
    assert!(
        v.text.ends_with("❌ MISMATCH (expected 10 consumed, 6 produced)"),
        "{}",
        v.text
    );
}

#[test]
fn test_tampered_steps_fail_verification() {
    let result = calculate(8, 12);
    let mut steps = result.steps().to_vec();
    steps.pop();

    let v = verify_steps(Action::Increase, &steps, 8, 12);
    assert!(!v.ok);
}
