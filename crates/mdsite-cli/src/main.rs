use anyhow::{Context, Result};
use mdsite_config::Config;
use mdsite_engine::io;
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();

    let config = if args.len() == 2 {
        // CLI argument provided - it must point at a config file
        let config_path = PathBuf::from(&args[1]);
        match Config::load_from_path(&config_path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                eprintln!("Error: Config file '{}' not found", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else if args.len() == 1 {
        // No CLI argument - try the default config file, then defaults
        match Config::load() {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                config
            }
            Ok(None) => {
                log::info!(
                    "No {} found, using default site layout",
                    Config::config_path().display()
                );
                Config::default()
            }
            Err(e) => {
                eprintln!("Error: {e}");
                eprintln!("Usage: {} [config-path]", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [config-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_content_dir(&config.content_dir) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    build_site(&config)
}

fn build_site(config: &Config) -> Result<()> {
    if let Some(static_dir) = &config.static_dir {
        if static_dir.is_dir() {
            let copied = io::copy_static(static_dir, &config.output_dir).with_context(|| {
                format!("Failed to copy static files from {}", static_dir.display())
            })?;
            log::info!("Copied {copied} static files to {}", config.output_dir.display());
        } else {
            log::warn!(
                "Static directory {} does not exist, skipping",
                static_dir.display()
            );
        }
    }

    let written =
        io::generate_pages_recursive(&config.content_dir, &config.template_path, &config.output_dir)
            .context("Failed to generate pages")?;
    log::info!(
        "Generated {} pages into {}",
        written.len(),
        config.output_dir.display()
    );

    Ok(())
}
