use stitchforge::api::{submit, view, view_submission, ResultView, ViewKind};
use stitchforge::calculator::CalculationResult;

#[test]
fn test_submit_validates_before_calculating() {
    assert_eq!(submit("", "5"), Err("Please enter both values.".to_string()));
    assert_eq!(submit("5", "2.5"), Err("Please enter whole numbers only.".to_string()));
    assert_eq!(
        submit("0", "5"),
        Err("Stitch counts must be positive integers.".to_string())
    );
}

#[test]
fn test_submit_returns_infeasibility_as_result() {
    let result = submit("5", "1").unwrap();
    assert!(result.is_error());
}

#[test]
fn test_view_of_pattern() {
    let v = view(&submit(" 8", "12 ").unwrap());
    assert_eq!(v.kind, ViewKind::Increase);
    assert_eq!(v.summary, "Increase 4 stitches evenly (8 → 12)");
    assert_eq!(v.steps.len(), 4);
    assert_eq!(v.verify_ok, Some(true));
    assert_eq!(
        v.export_text.as_deref(),
        Some("1. knit 2, add 1\n2. knit 2, add 1\n3. knit 2, add 1\n4. knit 2, add 1")
    );
    assert!(v.error.is_none());
}

#[test]
fn test_view_of_none_and_errors() {
    let v = view(&CalculationResult::None);
    assert_eq!(v.kind, ViewKind::None);
    assert_eq!(v.summary, "No changes needed");
    assert_eq!(
        v.detail.as_deref(),
        Some("Current and target stitch counts are equal.")
    );
    assert!(v.export_text.is_none());

    let v = view_submission(&submit("", ""));
    assert_eq!(v.kind, ViewKind::Error);
    assert_eq!(v.error.as_deref(), Some("Please enter both values."));
}

#[test]
fn test_view_serializes_camel_case() {
    let v = view(&submit("6", "3").unwrap());
    let json = serde_json::to_value(&v).unwrap();

    assert_eq!(json["kind"], "decrease");
    assert_eq!(json["verifyOk"], true);
    assert_eq!(json["inlinePattern"], "k2tog, k2tog, k2tog");

    let back: ResultView = serde_json::from_value(json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_calculation_result_is_tagged() {
    let json = serde_json::to_value(submit("3", "10").unwrap()).unwrap();
    assert_eq!(json["type"], "increase");
    assert_eq!(json["strategy"], "dense_increase");
    assert_eq!(json["steps"][2]["text"], "knit 1, add 3");
    assert_eq!(json["steps"][2]["action"], "increase");

    let json = serde_json::to_value(CalculationResult::None).unwrap();
    assert_eq!(json["type"], "none");
}
