use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use stitchforge::config::Config;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with display and checklist settings
    #[arg(global = true, long = "config")]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Work out an even increase or decrease and print it
    Calc(cmd::calc::CalcArgs),
    /// Print the pattern as numbered lines, ready to paste
    Export(cmd::export::ExportArgs),
    /// Step through the pattern as an interactive checklist
    Work(cmd::work::WorkArgs),
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.debug);
    info!("🧶 stitchforge {}", env!("CARGO_PKG_VERSION"));

    // Settings typed after the subcommand live in its own matches, not the root.
    let cli_config = match &cli.command {
        Commands::Calc(args) => Some(&args.config),
        Commands::Work(args) => Some(&args.config),
        Commands::Export(_) => None,
    };

    let config = match (cli_config, matches.subcommand()) {
        (Some(cli_config), Some((_, sub_matches))) => {
            if let Some(path) = &cli.config_file {
                info!("📂 Loading config: {}", path.display());
            }
            Config::resolve(cli_config, cli.config_file.as_deref(), sub_matches)
                .unwrap_or_else(|e| {
                    error!("{}", e);
                    eprintln!("❌ {}", e);
                    process::exit(cmd::EXIT_FAILURE);
                })
        }
        // export prints plain text, but a bad file is still an error.
        _ => match &cli.config_file {
            Some(path) => {
                let loaded = Config::load_from_file(path).unwrap_or_else(|e| {
                    error!("{}", e);
                    eprintln!("❌ {}", e);
                    process::exit(cmd::EXIT_FAILURE);
                });
                warn!(
                    "⚠️  export prints plain text; settings in {} are not used",
                    path.display()
                );
                loaded
            }
            None => Config::default(),
        },
    };

    let code = match cli.command {
        Commands::Calc(args) => cmd::calc::run(args, &config),
        Commands::Export(args) => cmd::export::run(args),
        Commands::Work(args) => cmd::work::run(args, &config),
    };
    process::exit(code);
}
