use super::{plan_or_report, CountArgs, EXIT_FAILURE, EXIT_OK, EXIT_UNVERIFIED};
use clap::Args;
use stitchforge::calculator::Pattern;
use stitchforge::checklist::{export_numbered, inline_pattern};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub counts: CountArgs,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// One comma-separated line instead of numbered lines
    #[arg(long, default_value_t = false)]
    pub inline: bool,
}

pub fn run(args: ExportArgs) -> i32 {
    let result = match plan_or_report(&args.counts) {
        Ok(r) => r,
        Err(code) => return code,
    };

    let Some(pattern) = result.pattern() else {
        eprintln!("No changes needed: current and target stitch counts are equal.");
        return EXIT_OK;
    };

    let text = match render(pattern, args.inline) {
        Ok(text) => text,
        Err(code) => return code,
    };

    match &args.output {
        Some(path) => match fs::write(path, format!("{}\n", text)) {
            Ok(()) => {
                info!("Wrote {} steps to {}", pattern.steps.len(), path.display());
                EXIT_OK
            }
            Err(e) => {
                error!("Failed to write {}: {}", path.display(), e);
                EXIT_FAILURE
            }
        },
        None => {
            println!("{}", text);
            EXIT_OK
        }
    }
}

/// Clipboard text for a pattern. Unverified patterns are never exported.
fn render(pattern: &Pattern, inline: bool) -> Result<String, i32> {
    if !pattern.verify.ok {
        error!("Refusing to export an unverified pattern: {}", pattern.verify.text);
        eprintln!("❌ {}", pattern.verify.text);
        return Err(EXIT_UNVERIFIED);
    }

    Ok(if inline {
        inline_pattern(&pattern.steps)
    } else {
        export_numbered(&pattern.steps)
    })
}
