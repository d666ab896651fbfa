// jerry-parser - Jerry Talisman purchase report from Hypixel SkyBlock chat logs

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::{debug, error, info, warn, LevelFilter};

use jerry_parser::config::{self, Settings};
use jerry_parser::{resolve_paths, JerryError, JerryParser};

#[derive(Parser, Debug)]
#[command(name = "jerry-parser", version)]
#[command(about = "Total Jerry Talisman purchases from Minecraft chat logs (.log / .log.gz)")]
struct Cli {
    /// Log files or directories of logs (default: logDir from the settings file)
    paths: Vec<PathBuf>,

    /// Recombobulator 3000 price, commas allowed (e.g. 6,500,000)
    #[arg(short = 'p', long = "price")]
    price: Option<String>,

    /// Settings file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module(
            "jerry_parser",
            if cli.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        )
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let settings = Settings::load(&config_path);

    let inputs: Vec<PathBuf> = if cli.paths.is_empty() {
        settings.log_dir.iter().cloned().collect()
    } else {
        cli.paths.clone()
    };
    let paths = match resolve_paths(&inputs) {
        Ok(paths) => paths,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if paths.is_empty() {
        error!("{}", JerryError::NoInput);
        return ExitCode::FAILURE;
    }

    let price = upgrade_price(cli.price.as_deref(), &settings);

    let parser = match JerryParser::builder().upgrade_price(price).build() {
        Ok(parser) => parser,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("{}", parser);

    match parser.run(&paths) {
        Ok(report) => {
            println!();
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Flag or settings file first, then ask on the terminal.
fn upgrade_price(flag: Option<&str>, settings: &Settings) -> i64 {
    if let Some(price) = config::resolve_price(flag, settings) {
        return price;
    }
    if !io::stdin().is_terminal() {
        return 0;
    }
    let typed = match prompt("Send Recombobulator3000 price: ") {
        Ok(line) => line,
        Err(e) => {
            warn!("Could not read price: {}", e);
            String::new()
        }
    };
    let price = config::price_or_zero(&typed);
    info!("Set Recombobulator3000 price -> {}", price);
    price
}

fn prompt(message: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", message)?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
