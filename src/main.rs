use anyhow::Context;
use clap::Parser;
use solid_principles::core::registry::build_demos;
use solid_principles::utils::{logger, validation::Validate};
use solid_principles::{CliConfig, DemoConfig, DemoRunner, StdoutConsole, Transcript};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting solid runner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading example inputs from: {}", path);
            DemoConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => DemoConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let demos = build_demos(
        &cli.principle.principles(),
        &cli.variant.variants(),
        &config,
    );
    tracing::info!("Running {} example(s)", demos.len());

    if cli.json {
        let transcripts = demos
            .iter()
            .map(|demo| DemoRunner::capture(demo.as_ref()))
            .collect::<Result<Vec<Transcript>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&transcripts)?);
        return Ok(());
    }

    let runner = DemoRunner::new(StdoutConsole::shared());
    for (i, demo) in demos.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("### {} ({})", demo.principle(), demo.variant());
        runner
            .run(demo.as_ref())
            .with_context(|| format!("{} example ({}) failed", demo.principle(), demo.variant()))?;
    }

    Ok(())
}
