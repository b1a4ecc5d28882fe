mod tables;

use stitchforge::calculator::CalculationResult;
use stitchforge::checklist::{inline_pattern, Checklist};
use stitchforge::config::{Config, DisplayConfig};
use stitchforge::verifier::VerificationResult;

pub use self::tables::checklist as checklist_table;

pub fn print_result(result: &CalculationResult, config: &Config) {
    let display = &config.display;

    match result {
        CalculationResult::None => {
            println!("\nNo changes needed");
            println!("Current and target stitch counts are equal.");
        }
        CalculationResult::Error { message } => print_error(message),
        CalculationResult::Increase(p) | CalculationResult::Decrease(p) => {
            println!("\n{}", p.summary);
            println!("{}", tables::steps(&p.steps, display.theme));

            if display.show_inline {
                println!("\nPattern: {}", inline_pattern(&p.steps));
            }

            if shows_verification(display, &p.verify) {
                println!("\n{}", p.verify.text);
            }
            if !p.verify.ok {
                eprintln!("\n❌ This pattern did not add up. Please report the stitch counts used.");
            }
        }
    }
}

/// A failed check is always shown, whatever the config says.
pub fn shows_verification(display: &DisplayConfig, verify: &VerificationResult) -> bool {
    !display.hide_verification || !verify.ok
}

pub fn print_error(message: &str) {
    eprintln!("❌ {}", message);
}

pub fn render_checklist(list: &Checklist, config: &Config) -> String {
    let (done, total) = list.progress();
    format!(
        "{}\nProgress: {}/{}",
        checklist_table(list, &config.checklist, config.display.theme),
        done,
        total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(ok: bool) -> VerificationResult {
        VerificationResult {
            ok,
            text: "Verification: ...".to_string(),
        }
    }

    #[test]
    fn hidden_verification_still_shows_failures() {
        let hidden = DisplayConfig {
            hide_verification: true,
            ..DisplayConfig::default()
        };
        assert!(!shows_verification(&hidden, &check(true)));
        assert!(shows_verification(&hidden, &check(false)));

        let shown = DisplayConfig::default();
        assert!(shows_verification(&shown, &check(true)));
        assert!(shows_verification(&shown, &check(false)));
    }
}
