use crate::calculator::{calculate_counts, CalculationResult};
use crate::checklist::{export_numbered, inline_pattern};
use crate::validation::validate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Service: validate two raw form values and plan the pattern.
///
/// Input problems come back as `Err` with a message ready to show the user.
/// Infeasible decreases are a successful call returning `CalculationResult::Error`.
pub fn submit(raw_start: &str, raw_target: &str) -> Result<CalculationResult, String> {
    let counts = validate(raw_start, raw_target).map_err(|e| {
        debug!("API: rejected input ({:?}, {:?}): {}", raw_start, raw_target, e);
        e.to_string()
    })?;

    let result = calculate_counts(counts);
    info!(
        "API: {} -> {} planned with {} steps",
        counts.start,
        counts.target,
        result.steps().len()
    );
    Ok(result)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    None,
    Increase,
    Decrease,
    Error,
}

/// Everything a front end needs to draw one result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub kind: ViewKind,
    pub summary: String,
    pub detail: Option<String>,
    pub steps: Vec<String>,
    pub verify_text: Option<String>,
    pub verify_ok: Option<bool>,
    pub export_text: Option<String>,
    pub inline_pattern: Option<String>,
    pub error: Option<String>,
}

pub fn view(result: &CalculationResult) -> ResultView {
    match result {
        CalculationResult::None => ResultView {
            kind: ViewKind::None,
            summary: "No changes needed".to_string(),
            detail: Some("Current and target stitch counts are equal.".to_string()),
            steps: Vec::new(),
            verify_text: None,
            verify_ok: None,
            export_text: None,
            inline_pattern: None,
            error: None,
        },
        CalculationResult::Error { message } => ResultView {
            kind: ViewKind::Error,
            summary: String::new(),
            detail: None,
            steps: Vec::new(),
            verify_text: None,
            verify_ok: None,
            export_text: None,
            inline_pattern: None,
            error: Some(message.clone()),
        },
        CalculationResult::Increase(p) | CalculationResult::Decrease(p) => ResultView {
            kind: if matches!(result, CalculationResult::Increase(_)) {
                ViewKind::Increase
            } else {
                ViewKind::Decrease
            },
            summary: p.summary.clone(),
            detail: None,
            steps: p.steps.iter().map(|s| s.text.clone()).collect(),
            verify_text: Some(p.verify.text.clone()),
            verify_ok: Some(p.verify.ok),
            export_text: Some(export_numbered(&p.steps)),
            inline_pattern: Some(inline_pattern(&p.steps)),
            error: None,
        },
    }
}

/// Input errors map onto the same view shape as calculation errors.
pub fn view_submission(submission: &Result<CalculationResult, String>) -> ResultView {
    match submission {
        Ok(result) => view(result),
        Err(message) => view(&CalculationResult::Error {
            message: message.clone(),
        }),
    }
}
