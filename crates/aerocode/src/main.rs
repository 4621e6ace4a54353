//! `aerocode` - CLI for the aircraft production console
//!
//! This binary lists, filters and summarises the console's records from the
//! command line.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{bail, Context};
use clap::Parser;
use tracing::warn;

use aerocode::cli::{
    ClassifyCommand, Cli, Command, ConfigCommand, ListCommand, ShowCommand, SummaryCommand,
    TimelineCommand,
};
use aerocode::{authenticate, classify, init_logging, register, render};
use aerocode::{Catalog, Config, OutputFormat, Timeline, View, ViewState};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // Execute the command
    match cli.command {
        Command::Views => {
            println!("{}", render::views(config.console.format)?);
            Ok(())
        }
        Command::List(list_cmd) => handle_list(&config, &list_cmd),
        Command::Show(show_cmd) => handle_show(&config, &show_cmd),
        Command::Summary(summary_cmd) => handle_summary(&config, &summary_cmd),
        Command::Timeline(timeline_cmd) => handle_timeline(&config, &timeline_cmd),
        Command::Classify(classify_cmd) => handle_classify(&classify_cmd),
        Command::Check => handle_check(&config),
        Command::Login(login_cmd) => {
            if !authenticate(&login_cmd.into()) {
                bail!("e-mail and password are required");
            }
            println!(
                "Signed in. Opening {}.",
                config.console.default_view.title()
            );
            Ok(())
        }
        Command::Register(register_cmd) => {
            register(&register_cmd.into()).context("registration refused")?;
            println!("Account created. You can now sign in.");
            Ok(())
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let catalog = Catalog::load(config.seed_path()).context("loading records")?;
    if config.data.check_references {
        let dangling = catalog.dangling_stage_refs().len();
        if dangling > 0 {
            warn!(dangling, "Some stages reference unknown aircraft");
        }
    }
    Ok(catalog)
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let state = ViewState::new(cmd.view.unwrap_or(config.console.default_view))
        .with_query(cmd.search.as_str());
    let format = cmd.format.unwrap_or(config.console.format);
    let catalog = load_catalog(config)?;

    let query = state.query.as_str();
    let output = match state.view {
        View::Aeronaves => render::records(&catalog.aircraft.search(query), format)?,
        View::Funcionarios => render::records(&catalog.employees.search(query), format)?,
        View::Pecas => render::records(&catalog.parts.search(query), format)?,
        View::Etapas => render::records(&catalog.stages.search(query), format)?,
        View::Testes => render::records(&catalog.tests.search(query), format)?,
    };
    println!("{output}");
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let format = cmd.format.unwrap_or(config.console.format);
    let catalog = load_catalog(config)?;

    let output = match cmd.view {
        View::Aeronaves => render::record(catalog.aircraft.require(&cmd.id)?, format)?,
        View::Funcionarios => render::record(catalog.employees.require(&cmd.id)?, format)?,
        View::Pecas => render::record(catalog.parts.require(&cmd.id)?, format)?,
        View::Etapas => render::record(catalog.stages.require(&cmd.id)?, format)?,
        View::Testes => render::record(catalog.tests.require(&cmd.id)?, format)?,
    };
    println!("{output}");
    Ok(())
}

fn handle_summary(config: &Config, cmd: &SummaryCommand) -> anyhow::Result<()> {
    let view = cmd.view.unwrap_or(config.console.default_view);
    let format = cmd.format.unwrap_or(config.console.format);
    let catalog = load_catalog(config)?;

    let summary = match view {
        View::Aeronaves => catalog.aircraft.summary(),
        View::Funcionarios => catalog.employees.summary(),
        View::Pecas => catalog.parts.summary(),
        View::Etapas => catalog.stages.summary(),
        View::Testes => catalog.tests.summary(),
    };
    println!("{}", render::summary(view, &summary, format)?);
    Ok(())
}

fn handle_timeline(config: &Config, cmd: &TimelineCommand) -> anyhow::Result<()> {
    let format = cmd.format.unwrap_or(config.console.format);
    let catalog = load_catalog(config)?;

    let timeline = Timeline::build(catalog.stages.search(&cmd.search));
    if timeline.is_empty() && format != OutputFormat::Json {
        println!("Nenhuma etapa encontrada.");
        return Ok(());
    }
    println!("{}", render::timeline(&timeline, format)?);
    Ok(())
}

fn handle_classify(cmd: &ClassifyCommand) -> anyhow::Result<()> {
    let classification = classify(cmd.view.domain(), &cmd.status);
    let format = if cmd.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };
    println!(
        "{}",
        render::classification(&cmd.status, classification, format)?
    );
    Ok(())
}

fn handle_check(config: &Config) -> anyhow::Result<()> {
    let catalog = Catalog::load(config.seed_path()).context("loading records")?;
    let dangling = catalog.dangling_stage_refs();
    if dangling.is_empty() {
        println!(
            "All {} stages reference known aircraft.",
            catalog.stages.len()
        );
        return Ok(());
    }
    for stage in &dangling {
        println!("{}\t{}", stage.id, stage.aircraft);
    }
    bail!("{} stage(s) reference unknown aircraft", dangling.len())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Console]");
                println!("  Default view:       {}", config.console.default_view);
                println!("  Format:             {}", config.console.format);
                println!();
                println!("[Data]");
                match config.seed_path() {
                    Some(path) => println!("  Seed file:          {}", path.display()),
                    None => println!("  Seed file:          (built-in sample)"),
                }
                println!("  Check references:   {}", config.data.check_references);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => bail!("configuration error: {e}"),
            }
        }
    }
    Ok(())
}
