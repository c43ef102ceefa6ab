use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mood_core::trigger::EffectTrigger;

mod commands;
mod logging;
mod renderer;

#[derive(Parser)]
#[command(name = "moodtrack")]
#[command(about = "moodtrack - session-based mood tracking from facial emotion scores", long_about = None)]
struct Cli {
    /// Mood history file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Configuration file to use instead of the default one
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded emotion stream as a tracking session
    Track {
        /// JSON-lines recording, one sample per line
        #[arg(long, value_name = "FILE")]
        samples: PathBuf,

        /// Session length in seconds
        #[arg(long, value_name = "SECS")]
        duration: Option<f32>,

        /// Interval between samples in milliseconds
        #[arg(long, value_name = "MS")]
        tick_ms: Option<u64>,
    },
    /// Show the most recent mood records
    History {
        /// Number of records to show
        #[arg(long, default_value_t = mood_core::mood::RECENT_WINDOW)]
        recent: usize,
    },
    /// Project the recent history onto the mood graph
    Graph {
        /// Container width
        #[arg(long)]
        width: Option<f32>,

        /// Multiplier applied to each y value
        #[arg(long)]
        y_spacing: Option<f32>,

        /// Margin kept on each side
        #[arg(long)]
        buffer: Option<f32>,

        /// Print the points as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a set of session maxima
    Classify {
        /// Maximum sadness, already scaled
        sad: f32,
        /// Maximum surprise
        surprised: f32,
        /// Maximum neutrality
        neutral: f32,
    },
    /// Replay a recording through the effect triggers
    Effects {
        /// JSON-lines recording, one sample per line
        #[arg(long, value_name = "FILE")]
        samples: PathBuf,

        /// Trigger as EMOTION=THRESHOLD (repeatable, defaults to the configured triggers)
        #[arg(long = "trigger", value_name = "EMOTION=THRESHOLD", value_parser = commands::effects::parse_trigger)]
        triggers: Vec<EffectTrigger>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let Cli {
        history,
        config,
        command,
    } = cli;
    let context = || commands::Context::load(config.clone(), history.clone());

    match command {
        Commands::Track {
            samples,
            duration,
            tick_ms,
        } => commands::track::run(&context()?, &samples, duration, tick_ms).await,
        Commands::History { recent } => commands::history::run(&context()?, recent).await,
        Commands::Graph {
            width,
            y_spacing,
            buffer,
            json,
        } => {
            let overrides = commands::graph::LayoutOverrides {
                width,
                y_spacing,
                buffer,
            };
            commands::graph::run(&context()?, overrides, json).await
        }
        Commands::Classify {
            sad,
            surprised,
            neutral,
        } => commands::classify::run(sad, surprised, neutral),
        Commands::Effects { samples, triggers } => {
            commands::effects::run(&context()?, &samples, triggers)
        }
    }
}
