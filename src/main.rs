use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{error, info};

use vfs_registry::{help, Config, Dispatcher, Outcome, Registry};

const GREETING: &str = "
Welcome to Virtual File System!
Type 'help' to get details and 'exit' to leave.
";

const PROMPT: &str = "$ ";

fn config_path(args: &[String]) -> &str {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
        .unwrap_or("config.toml")
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Load configuration
    let config = match Config::load_with_env(config_path(&args)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", config_path(&args));
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    // Initialize logging
    if let Err(e) = vfs_registry::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // stderr is the error channel; keep warnings and below out of it.
        vfs_registry::logging::init_console_only("error");
    }

    let help_provider = help::from_config(&config.help);
    let stdout = io::stdout();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        return match help_provider.show(&mut stdout.lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    info!("Virtual File System started");
    let mut dispatcher = Dispatcher::new(Registry::new(config.registry), config.display);

    print!("{GREETING}");
    print!("{PROMPT}");
    let _ = stdout.lock().flush();

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("failed to read input: {e}");
                eprintln!("Error reading input: {e}");
                return ExitCode::FAILURE;
            }
        };

        let outcome = dispatcher.execute(&line);
        match &outcome {
            Outcome::Help => {
                if let Err(e) = help_provider.show(&mut stdout.lock()) {
                    eprintln!("Error: {e}");
                }
            }
            Outcome::Exit => {
                println!("See you.");
                info!("Virtual File System stopped");
                return ExitCode::SUCCESS;
            }
            _ => {
                if let Err(e) = outcome.render(&mut stdout.lock(), &mut io::stderr().lock()) {
                    error!("failed to write response: {e}");
                }
            }
        }

        print!("{PROMPT}");
        let _ = stdout.lock().flush();
    }

    info!("Virtual File System stopped at end of input");
    ExitCode::SUCCESS
}
