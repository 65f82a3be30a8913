use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;
use viscalc::cli::commands;
use viscalc::cli::{Cli, Commands};
use viscalc::core::Config;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let config = Config::load(cli.global.config.as_deref()).into_diagnostic()?;
    let global = cli.global;

    match cli.command {
        Commands::Calc(args) => commands::calc::run(args, &global, &config),
        Commands::Models(args) => commands::models::run(args, &global, &config),
        Commands::Grades(args) => commands::grades::run(args, &global, &config),
        Commands::Range(args) => commands::range::run(args, &global, &config),
        Commands::Batch(args) => commands::batch::run(args, &global, &config),
        Commands::Config(cmd) => commands::config::run(cmd, &global, &config),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
