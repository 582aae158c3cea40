// Main entry point
use clap::Parser;
use colored::Colorize;
use var_name::application::command::{run_command, CommandOptions};
use var_name::domain::error::describe;
use var_name::domain::model::Outcome;
use var_name::domain::traits::Translator;
use var_name::infrastructure::config::{self, load_config, Config};
use var_name::interfaces::cli::Cli;
use var_name::interfaces::clipboard;
use var_name::interfaces::terminal::TerminalHost;
use var_name::presentation::picker::render_json;
use var_name::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.serve_clipboard {
        clipboard::serve_from_stdin()?;
        return Ok(());
    }

    let mut config = load_config()?;
    if let Some(provider) = &cli.provider {
        config.provider = provider.clone();
    }
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }
    if cli.status {
        print_status(&config);
        return Ok(());
    }

    let state = AppState::new(config)?;

    if cli.json {
        let Some(phrase) = cli.phrase().filter(|p| !p.trim().is_empty()) else {
            eprintln!("{}", state.messages.input_invalid.red());
            std::process::exit(1);
        };
        return print_json(&state, phrase.trim()).await;
    }

    let host = TerminalHost::new();
    let translator = state.translator();
    let options = CommandOptions {
        phrase: cli.phrase(),
        copy: !cli.no_copy,
    };

    match run_command(&host, &translator, &state.messages, options).await {
        Outcome::Picked { value, .. } => println!("{}", value),
        Outcome::Failed(_) | Outcome::CopyFailed { .. } => std::process::exit(1),
        Outcome::Copied { .. } | Outcome::Cancelled | Outcome::Dismissed => {}
    }

    Ok(())
}

/// Print the five candidates as JSON without any interaction
async fn print_json(state: &AppState, phrase: &str) -> anyhow::Result<()> {
    match state.translator().translate(phrase).await {
        Ok(translation) => {
            if translation.is_fallback() {
                eprintln!("{}", state.messages.fallback_notice.yellow());
            }
            println!("{}", render_json(translation.result())?);
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{}",
                format!("{}: {}", state.messages.translate_failed, describe(&e)).red()
            );
            std::process::exit(1);
        }
    }
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(config: &Config) {
    println!("{}", "varname Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!("Provider: {:?}", config.provider());
    match config.endpoint() {
        Ok(endpoint) => println!("Endpoint: {}", endpoint),
        Err(e) => println!("Endpoint: {}", e.to_string().red()),
    }
    println!("Model: {}", config.model());
    println!("Timeout: {}s", config.timeout_secs);

    if config.api_key().is_ok() {
        println!("API Key: Configured");
    } else {
        println!("API Key: {}", "Not configured".red());
    }
}
