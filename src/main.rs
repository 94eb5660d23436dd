//! hilicat - cat with regex-driven syntax highlighting

use std::io;
use std::process;

use clap::Parser;
use crossterm::tty::IsTty;

use hilicat::app::{report_error, App, Settings};
use hilicat::cli::Cli;
use hilicat::config::Config;
use hilicat::error::{HighlightError, Result};
use hilicat::logging;
use hilicat::output::Output;
use hilicat::reader::Source;

fn main() {
    let cli = Cli::parse();
    logging::init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            report_error(&e.to_string());
            process::exit(1);
        }
    }
}

/// Returns whether every input was displayed
fn run(cli: Cli) -> Result<bool> {
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_or_init(&config_path)?;

    if cli.list_languages {
        print_languages(&config);
        return Ok(true);
    }

    let sources = cli.sources();
    if cli.lang.is_none() && sources.contains(&Source::Stdin) {
        return Err(HighlightError::MissingLanguage);
    }

    let settings = Settings::from_cli(&cli, io::stdout().is_tty());
    log::info!(
        "{} input(s), language {}",
        sources.len(),
        settings.lang.as_deref().unwrap_or("by extension")
    );

    let mut output = Output::select(cli.pager);
    let mut app = App::new(config, settings);
    let status = app.run(&sources, &mut output);
    output.finish()?;

    Ok(status.success())
}

fn print_languages(config: &Config) {
    for id in config.language_ids() {
        let extensions = config
            .language(id)
            .map(|lang| lang.extensions.join(", "))
            .unwrap_or_default();
        println!("{id:<12} {extensions}");
    }
}
