//! CLI frontend for the Skein narrative dice engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "skein",
    about = "Skein — narrative dice roller and shared destiny pool",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a pool expression (a=Ability p=Proficiency b=Boost s=Setback
    /// d=Difficulty c=Challenge f=Force)
    Roll {
        /// Pool expression, e.g. "aapdd"
        expr: String,

        #[command(flatten)]
        args: commands::roll::RollArgs,
    },

    /// Print the full face table of a die type
    Faces {
        /// Die name or one-letter code (e.g. "ability" or "a")
        die: String,
    },

    /// Run a scripted destiny pool session (one authority, one observer)
    Destiny {
        /// Initial light side points
        #[arg(long, default_value = "2")]
        light: u32,

        /// Initial dark side points
        #[arg(long, default_value = "2")]
        dark: u32,

        /// Comma-separated flip script, e.g. "dark,dark,light"
        #[arg(long, default_value = "dark")]
        flips: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { expr, args } => commands::roll::run(&expr, &args),
        Commands::Faces { die } => commands::faces::run(&die),
        Commands::Destiny { light, dark, flips } => commands::destiny::run(light, dark, &flips),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
