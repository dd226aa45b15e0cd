//! # tp CLI
//!
//! Command-line interface for the network receipt printer.
//!
//! ## Usage
//!
//! ```bash
//! # Point tp at the printer once
//! tp set-ip 192.168.1.100
//!
//! # Print a task with a big title
//! tp task "Groceries" "milk, eggs, bread"
//!
//! # Print a numbered ticket
//! tp ticket "Support" "#42" "Printer jammed again"
//!
//! # Feed blank paper for handwriting
//! tp small-note
//!
//! # Render a markdown template, show it without printing
//! tp template standup.md --var name=Ada --dry-run
//!
//! # Change settings, then start the web API
//! tp settings --chars-per-line 48 --special-letters yes
//! tp serve --listen 0.0.0.0:5555
//! ```

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use tp::{
    NetworkPrinter, PrinterHandle, RecordingPrinter, TemplateRenderer, TpError,
    config::{self, FileSettings},
    printer,
    server::{self, ServerConfig},
    template::Context,
};

const NO_ADDRESS: &str = "Printer IP address not set. Please set it using the 'set-ip' command.";

/// tp - Thermal receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to $TP_CONFIG, then ./tp_config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a task: big title, separator, text
    Task {
        title: String,
        text: String,

        /// Show what would be printed instead of printing
        #[arg(long)]
        dry_run: bool,
    },

    /// Print a ticket: title, ticket number, separator, text
    Ticket {
        title: String,
        ticket_number: String,
        text: String,

        #[arg(long)]
        dry_run: bool,
    },

    /// Feed a short blank note
    SmallNote {
        #[arg(long)]
        dry_run: bool,
    },

    /// Render and print a markdown template file ("-" reads stdin)
    Template {
        file: String,

        /// Placeholder value, repeatable
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,

        #[arg(long)]
        dry_run: bool,
    },

    /// Save the printer address
    SetIp { ip_address: String },

    /// Show settings, updating the given ones first
    Settings {
        #[arg(long)]
        chars_per_line: Option<usize>,

        /// true/false, yes/no or 1/0
        #[arg(long, value_name = "BOOL")]
        special_letters: Option<String>,
    },

    /// Start the HTTP API
    Serve {
        /// Address to listen on (defaults to the settings file value)
        #[arg(long)]
        listen: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if matches!(cli.command, Commands::Serve { .. }) {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}", error_message(&e));
        std::process::exit(1);
    }
}

/// The missing-address hint is printed as is; everything else gets an
/// `Error:` prefix.
fn error_message(e: &TpError) -> String {
    match e {
        TpError::Config(message) if message == NO_ADDRESS => message.clone(),
        other => format!("Error: {}", other),
    }
}

fn run(cli: Cli) -> Result<(), TpError> {
    let config_path = cli.config.unwrap_or_else(config::default_path);

    match cli.command {
        Commands::Task {
            title,
            text,
            dry_run,
        } => run_job(&config_path, dry_run, |p| printer::print_task(p, &title, &text)),

        Commands::Ticket {
            title,
            ticket_number,
            text,
            dry_run,
        } => run_job(&config_path, dry_run, |p| {
            printer::print_ticket(p, &title, &ticket_number, &text)
        }),

        Commands::SmallNote { dry_run } => {
            run_job(&config_path, dry_run, |p| printer::print_small_note(p))
        }

        Commands::Template {
            file,
            vars,
            dry_run,
        } => {
            let template = read_template(&file)?;
            let context: Context = vars.into_iter().collect();

            // Render before connecting so a bad template never reaches the printer.
            let renderer = TemplateRenderer::new(FileSettings::new(&config_path));
            let segments = renderer.render(&template, &context)?;
            run_job(&config_path, dry_run, |p| printer::print_job(&segments, p))
        }

        Commands::SetIp { ip_address } => {
            let mut settings = config::load_or_default(&config_path)?;
            settings.printer.ip_address = Some(ip_address.trim().to_string());
            config::save(&settings, &config_path)?;
            println!("Printer IP address set to {}", ip_address.trim());
            Ok(())
        }

        Commands::Settings {
            chars_per_line,
            special_letters,
        } => {
            let mut settings = config::load_or_default(&config_path)?;
            let changed = chars_per_line.is_some() || special_letters.is_some();

            if let Some(n) = chars_per_line {
                settings.printer.chars_per_line = n;
            }
            if let Some(value) = special_letters {
                settings.printer.enable_special_letters = config::parse_bool(&value)?;
            }
            if changed {
                settings.validate()?;
                config::save(&settings, &config_path)?;
                println!("Settings saved to {}", config_path.display());
            }

            println!(
                "ip_address             = {}",
                settings.printer.ip_address.as_deref().unwrap_or("(not set)")
            );
            println!("chars_per_line         = {}", settings.printer.chars_per_line);
            println!(
                "enable_special_letters = {}",
                settings.printer.enable_special_letters
            );
            println!("listen                 = {}", settings.server.listen);
            Ok(())
        }

        Commands::Serve { listen } => {
            let settings = config::load_or_default(&config_path)?;
            let config = ServerConfig {
                config_path,
                listen_addr: listen.unwrap_or(settings.server.listen),
            };

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))
        }
    }
}

/// Run a job on the configured printer, or on a recorder for `--dry-run`.
fn run_job<F>(config_path: &Path, dry_run: bool, job: F) -> Result<(), TpError>
where
    F: FnOnce(&mut dyn PrinterHandle) -> Result<(), TpError>,
{
    if dry_run {
        let mut recorder = RecordingPrinter::new();
        job(&mut recorder)?;
        print!("{}", recorder.transcript());
        println!("--- cut ---");
        return Ok(());
    }

    let settings = config::load_or_default(config_path)?;
    let address = settings
        .printer_address()
        .map_err(|_| TpError::Config(NO_ADDRESS.to_string()))?;

    let mut handle = NetworkPrinter::open(address)?;
    let outcome = job(&mut handle);
    let closed = handle.close();
    outcome.and(closed)?;

    println!("Printed successfully!");
    Ok(())
}

fn read_template(file: &str) -> Result<String, TpError> {
    if file == "-" {
        let mut template = String::new();
        std::io::stdin().read_to_string(&mut template)?;
        return Ok(template);
    }
    Ok(std::fs::read_to_string(file)?)
}

/// Parse a `KEY=VALUE` pair.
fn parse_var(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}
