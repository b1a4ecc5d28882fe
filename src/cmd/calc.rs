use super::{exit_code, CountArgs, EXIT_FAILURE};
use crate::reports;
use clap::Args;
use stitchforge::api;
use stitchforge::config::Config;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub counts: CountArgs,

    /// Print the result view as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: CalcArgs, config: &Config) -> i32 {
    let submission = args.counts.submit();

    if args.json {
        let view = api::view_submission(&submission);
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize result: {}", e);
                return EXIT_FAILURE;
            }
        }
        return exit_code(&submission);
    }

    match &submission {
        Ok(result) => reports::print_result(result, config),
        Err(message) => reports::print_error(message),
    }
    exit_code(&submission)
}
