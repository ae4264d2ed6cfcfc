use std::io;

use crate::cli::commands::*;
use crate::cli::output::list_to_json;
use crate::cli::repl::{self, Repl};
use crate::io::config_io;
use crate::io::logging::{self, Fallback};
use crate::io::storage::TodoFile;
use crate::model::config::AppConfig;

/// Default log filter for the command loop, `list` and the window.
const DEFAULT_FILTER: &str = "tally=warn";
/// Default log filter for the web view.
const WEB_FILTER: &str = "tally=info,tower_http=info";

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;
    let file = TodoFile::new(
        cli.file
            .clone()
            .unwrap_or_else(|| config.storage.file.clone()),
    );

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            logging::init(&config.log, DEFAULT_FILTER, Fallback::Stderr)?;
            cmd_repl(&file)
        }
        Commands::Tui => {
            logging::init(&config.log, DEFAULT_FILTER, Fallback::Silent)?;
            crate::tui::run(file, &config)
        }
        Commands::Web(args) => {
            logging::init(&config.log, WEB_FILTER, Fallback::Stderr)?;
            cmd_web(file, config, args)
        }
        Commands::List(args) => {
            logging::init(&config.log, DEFAULT_FILTER, Fallback::Stderr)?;
            cmd_list(&file, args)
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn cmd_repl(file: &TodoFile) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(file, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

fn cmd_list(file: &TodoFile, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let lines = file.load_or_create()?.lines;
    if args.json {
        let json = list_to_json(&file.path().display().to_string(), &lines);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        repl::print_listing(&mut io::stdout().lock(), &lines)?;
    }
    Ok(())
}

fn cmd_web(
    file: TodoFile,
    config: AppConfig,
    args: WebArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let bind = args.bind.unwrap_or_else(|| config.web.bind.clone());
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(crate::web::serve(file, config.web, &bind))?;
    Ok(())
}
