//! Standalone binary for the namer title builder.
//! Usage:
//!   namer [path] [--config <file>] [--separator <sep>] [--no-date-seed] [--inspect]

use clap::{Arg, ArgAction, Command, ValueHint};
use namer_parser::TemplateLoader;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("namer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive title builder over CSV templates")
        .arg(
            Arg::new("path")
                .help("Path to the CSV template (defaults to the configured template.path)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Separator between title sections in the live display"),
        )
        .arg(
            Arg::new("no-date-seed")
                .long("no-date-seed")
                .help("Start with an empty title instead of the current date")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inspect")
                .long("inspect")
                .help("Print the parsed section tree as JSON and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = build_config(&matches).unwrap_or_else(|err| {
        eprintln!("Configuration error: {err}");
        std::process::exit(1);
    });

    let path = matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_else(|| config.template.path.clone());

    if matches.get_flag("inspect") {
        handle_inspect_command(&path);
        return;
    }

    if let Err(err) = namer_viewer::run_title_builder(&path, config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn build_config(
    matches: &clap::ArgMatches,
) -> Result<namer_config::NamerConfig, namer_config::ConfigError> {
    let mut loader = namer_config::Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(separator) = matches.get_one::<String>("separator") {
        loader = loader.set_override("title.separator", separator.as_str())?;
    }
    if matches.get_flag("no-date-seed") {
        loader = loader.set_override("title.seed_with_date", false)?;
    }
    loader.build()
}

/// Handle the --inspect command: parse and dump the tree.
fn handle_inspect_command(path: &str) {
    let loader = TemplateLoader::from_path(path).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
    let sections = loader.parse().unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
    let json = serde_json::to_string_pretty(&sections).unwrap_or_else(|err| {
        eprintln!("Error formatting sections: {err}");
        std::process::exit(1);
    });
    println!("{json}");
}
