// ucport-cli: CLI entry point for ucport (convert, declaration).

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ucport_codegen::{Definition, LoggedDiagnostics};

#[derive(Parser)]
#[command(name = "ucport", about = "ucport: UE3 SDK header declarations to UnrealScript")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the SDK headers listed in the config into .uc class files.
    Convert {
        /// Path to ucport.config.toml.
        #[arg(long, default_value = "ucport.config.toml")]
        config: PathBuf,
    },
    /// Convert a single declaration fragment and print the result.
    Declaration {
        /// Member line or enum block; `-` reads it from stdin.
        text: String,
        /// Print the parsed declaration as JSON instead of UnrealScript.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert { config } => run_convert(&config),
        Commands::Declaration { text, json } => run_declaration(&text, json),
    };

    if let Err(message) = result {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }
}

fn run_convert(config: &std::path::Path) -> Result<(), String> {
    let summary = ucport_codegen::run_convert(config).map_err(|e| e.to_string())?;
    eprintln!("ucport: {summary}");
    Ok(())
}

fn run_declaration(text: &str, json: bool) -> Result<(), String> {
    let fragment = if text == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        buf
    } else {
        text.to_string()
    };

    let mut diagnostics = LoggedDiagnostics::default();
    let definition = Definition::parse(&fragment, &mut diagnostics).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&definition).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        print!("{}", definition.render());
    }
    Ok(())
}
