//! Smartbanner CLI - preview the smart app banner for a simulated visit.

use std::process;

use clap::Parser;
use smartbanner::UserAction;
use smartbanner::cli::{ActionKind, Cli, Commands, VisitArgs};
use smartbanner::commands::{self, CommandResult, VisitOptions};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `smartbanner=debug`).
const LOG_ENV: &str = "SMARTBANNER_LOG";

fn main() {
    init_logging();

    let cli = Cli::parse();
    let human = cli.human_readable;

    if let Err(e) = run_command(cli.command, human) {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(command: Commands, human: bool) -> Result<(), smartbanner::Error> {
    match command {
        Commands::Detect { user_agent, force } => {
            output(&commands::detect(&user_agent, force.as_deref())?, human)
        }
        Commands::Render(visit) => output(&commands::render(&visit_options(visit))?, human),
        Commands::Action { action, visit } => {
            let action = match action {
                ActionKind::Close => UserAction::Close,
                ActionKind::Install => UserAction::Install,
            };
            output(&commands::action(&visit_options(visit), action)?, human)
        }
        Commands::Defaults { language } => output(&commands::defaults(&language)?, human),
    }
    Ok(())
}

fn visit_options(args: VisitArgs) -> VisitOptions {
    VisitOptions {
        user_agent: args.user_agent,
        config: args.config,
        language: args.language,
        standalone: args.standalone,
        cookies: args.cookies,
        links: args.links,
        no_body: args.no_body,
    }
}

fn output<T: CommandResult>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
