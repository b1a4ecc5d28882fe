use super::{plan_or_report, CountArgs, EXIT_FAILURE, EXIT_OK, EXIT_UNVERIFIED};
use crate::reports;
use clap::Args;
use std::io::{self, BufRead, Write};
use stitchforge::checklist::{Checklist, ChecklistCommand, Outcome, HELP_TEXT};
use stitchforge::config::Config;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct WorkArgs {
    #[command(flatten)]
    pub counts: CountArgs,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: WorkArgs, config: &Config) -> i32 {
    let result = match plan_or_report(&args.counts) {
        Ok(r) => r,
        Err(code) => return code,
    };

    let Some(pattern) = result.pattern() else {
        println!("No changes needed: current and target stitch counts are equal.");
        return EXIT_OK;
    };

    if !pattern.verify.ok {
        reports::print_result(&result, config);
        return EXIT_UNVERIFIED;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session(
        Checklist::new(&pattern.steps),
        &pattern.summary,
        stdin.lock(),
        stdout.lock(),
        config,
    ) {
        Ok(list) => {
            let (done, total) = list.progress();
            info!("Checklist closed at {}/{}", done, total);
            EXIT_OK
        }
        Err(e) => {
            error!("Checklist session failed: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Read-eval loop over `input`. Ends on `quit` or end of input and returns the final state.
fn session<R: BufRead, W: Write>(
    mut list: Checklist,
    summary: &str,
    input: R,
    mut out: W,
    config: &Config,
) -> io::Result<Checklist> {
    writeln!(out, "{}", summary)?;
    writeln!(out, "{}", reports::render_checklist(&list, config))?;
    writeln!(out, "Type h for help.")?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = ChecklistCommand::parse(&line) else {
            writeln!(out, "Unknown command '{}'. Type h for help.", line.trim())?;
            prompt(&mut out)?;
            continue;
        };

        let (next, outcome) = list.apply(command);
        list = next;

        match outcome {
            Outcome::Updated => {
                writeln!(out, "{}", reports::render_checklist(&list, config))?;
                if list.is_complete() {
                    writeln!(out, "🎉 All steps done!")?;
                }
            }
            Outcome::Export(text) => writeln!(out, "{}", text)?,
            Outcome::Help => writeln!(out, "{}", HELP_TEXT)?,
            Outcome::Invalid(message) => writeln!(out, "{}", message)?,
            Outcome::Quit => break,
        }
        prompt(&mut out)?;
    }

    writeln!(out)?;
    Ok(list)
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stitchforge::calculator::calculate;
    use stitchforge::config::Theme;

    fn plain_config() -> Config {
        let mut config = Config::default();
        config.display.theme = Theme::Plain;
        config
    }

    #[test]
    fn session_applies_commands_until_quit() {
        let result = calculate(8, 12);
        let steps = result.steps();
        let input = "1\nn\nbogus\n9\nq\n3\n";
        let mut out = Vec::new();

        let list = session(
            Checklist::new(steps),
            "summary",
            input.as_bytes(),
            &mut out,
            &plain_config(),
        )
        .unwrap();

        // The "3" after quit is never read.
        assert_eq!(list.progress(), (2, 4));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command 'bogus'"));
        assert!(text.contains("No step 9 (pattern has 4 steps)."));
        assert!(text.contains("Progress: 2/4"));
    }

    #[test]
    fn session_reports_completion_and_exports() {
        let result = calculate(6, 3);
        let input = "\n\n\ne\n";
        let mut out = Vec::new();

        let list = session(
            Checklist::new(result.steps()),
            "summary",
            input.as_bytes(),
            &mut out,
            &plain_config(),
        )
        .unwrap();

        assert!(list.is_complete());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("All steps done!"));
        assert!(text.contains("1. k2tog\n2. k2tog\n3. k2tog"));
    }
}
