use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use weather_now_core::{AppError, Config, ConfigError, ValidationResult};
use weather_now_ui::render::{self, RenderOptions};
use weather_now_ui::{AppServices, SubmitOutcome, WeatherModel};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Current weather for a city, from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// City to look up; omit for an interactive prompt
    #[arg(value_name = "CITY")]
    city: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    weather_now_core::init()?;

    let (config, _validation) = match load_config(&args) {
        Ok(loaded) => loaded,
        // Config problems get their fixed message; the detail goes to the log
        Err(e) => match e.downcast::<ConfigError>() {
            Ok(config_err) => {
                tracing::error!("{}", config_err);
                eprintln!("{}", AppError::from(config_err).user_message());
                std::process::exit(2);
            }
            Err(e) => return Err(e),
        },
    };

    let services = AppServices::new(&config)?;
    let mut model = services.weather_model();
    let options = services.render_options();

    tracing::info!("Weather Now started");

    if !args.city.is_empty() {
        let succeeded = run_once(&mut model, &args.city.join(" "), options);
        if !succeeded {
            std::process::exit(1);
        }
        return Ok(());
    }

    run_interactive(&mut model, options)
}

fn load_config(args: &Args) -> Result<(Config, ValidationResult)> {
    match &args.config {
        Some(path) => Config::load_validated_from(path),
        None => Config::load_validated(),
    }
}

/// Look up one city and print the outcome. Returns false on error.
fn run_once(model: &mut WeatherModel, city: &str, options: RenderOptions) -> bool {
    if model.submit(city) == SubmitOutcome::Started {
        println!("{}", render::LOADING);
        while !model.wait_for_result(POLL_INTERVAL) {}
    }

    println!("{}", render::render(model.state(), options));
    model.state().error_message.is_none()
}

fn run_interactive(model: &mut WeatherModel, options: RenderOptions) -> Result<()> {
    println!("{}", render::TITLE);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", render::PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        run_once(model, &line, options);
        println!();
    }

    tracing::info!("Weather Now exiting");
    Ok(())
}
