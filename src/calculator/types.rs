use crate::verifier::VerificationResult;
use serde::Serialize;
use std::fmt;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    /// One stitch becomes two ("add").
    Increase,
    /// Two stitches become one ("k2tog").
    Decrease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
pub enum Strategy {
    #[serde(rename = "even_increase")]
    #[strum(serialize = "even_increase")]
    EvenIncrease,
    #[serde(rename = "dense_increase")]
    #[strum(serialize = "dense_increase")]
    DenseIncrease,
    #[serde(rename = "even_decrease")]
    #[strum(serialize = "even_decrease")]
    EvenDecrease,
    #[serde(rename = "all_k2tog")]
    #[strum(serialize = "all_k2tog")]
    AllK2tog,
}

impl Strategy {
    pub fn action(&self) -> Action {
        match self {
            Self::EvenIncrease | Self::DenseIncrease => Action::Increase,
            Self::EvenDecrease | Self::AllK2tog => Action::Decrease,
        }
    }
}

/// One instruction: knit `knit` plain stitches, then perform `actions` operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub text: String,
    pub knit: u32,
    pub actions: u32,
    pub action: Action,
}

impl Step {
    pub fn increase(knit: u32, adds: u32) -> Self {
        Self {
            text: format!("knit {}, add {}", knit, adds),
            knit,
            actions: adds,
            action: Action::Increase,
        }
    }

    /// A single k2tog after `knit` plain stitches. Zero plain stitches reads as a bare "k2tog".
    pub fn decrease(knit: u32) -> Self {
        let text = if knit == 0 {
            "k2tog".to_string()
        } else {
            format!("knit {}, k2tog", knit)
        };
        Self {
            text,
            knit,
            actions: 1,
            action: Action::Decrease,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    pub strategy: Strategy,
    pub summary: String,
    pub steps: Vec<Step>,
    pub verify: VerificationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculationResult {
    /// Start and target already agree.
    None,
    Increase(Pattern),
    Decrease(Pattern),
    Error { message: String },
}

impl CalculationResult {
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Self::Increase(p) | Self::Decrease(p) => Some(p),
            Self::None | Self::Error { .. } => None,
        }
    }

    /// Steps in working order; empty for `None` and `Error`.
    pub fn steps(&self) -> &[Step] {
        self.pattern().map(|p| p.steps.as_slice()).unwrap_or(&[])
    }

    pub fn verification(&self) -> Option<&VerificationResult> {
        self.pattern().map(|p| &p.verify)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
