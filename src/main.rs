mod analyzer;
mod commands;
mod components;
mod config;
mod diagnostics;
mod discovery;
mod error;
mod info;
mod injections;
mod linker;
mod modules;
mod report;
mod types;
mod watch;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "daggermap",
    about = "Audit Dagger injection graphs in Java and Kotlin sources without compiling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the tree and print the full component wiring graph
    Graph {
        /// Scan root
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every module with its dependencies and injection sites
    Modules {
        /// Scan root
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Report provided dependencies that nothing injects (exit 1 when found)
    Unused {
        /// Scan root
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the daggermap reference document
    Info {
        /// Emit JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Re-run the graph whenever sources change
    Watch {
        /// Scan root
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Graph { path, json } => commands::graph(&path, json),
        Commands::Modules { path, json } => commands::modules(&path, json),
        Commands::Unused { path, json } => commands::unused(&path, json),
        Commands::Info { json } => {
            info::run(json);
            Ok(ExitCode::SUCCESS)
        },
        Commands::Watch { path } => watch::run(&path),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::from(2)
        },
    }
}
