//! dynachart CLI - play animated bar charts from CSV tables

mod render;
mod terminal;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dynachart::prelude::*;
use dynachart::step_increments;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::render::format_value;
use crate::terminal::TerminalAdapter;

#[derive(Parser)]
#[command(name = "dynachart")]
#[command(author, version, about = "Animated bar charts from spreadsheet tables")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the animation in the terminal
    Play {
        /// Input CSV file (first column: categories, other columns: data)
        input: PathBuf,

        /// TOML file with animation settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frames per column-to-column transition
        #[arg(short, long)]
        steps: Option<u32>,

        /// Pause after each frame, in milliseconds
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Comma separated point colors (hex or names)
        #[arg(short, long)]
        palette: Option<String>,

        /// Keep bars sorted by value, like a bar chart race
        #[arg(long)]
        sort: bool,

        /// Clear the screen between frames
        #[arg(long)]
        clear: bool,

        /// Width of the longest bar, in characters
        #[arg(short, long, default_value = "50")]
        width: usize,
    },

    /// Print the interpolated frames between two data columns
    Plan {
        /// Input CSV file
        input: PathBuf,

        /// Source column (0-based, data columns only)
        #[arg(long, default_value = "0")]
        from: usize,

        /// Target column (0-based, data columns only)
        #[arg(long, default_value = "1")]
        to: usize,

        /// Frames in the transition
        #[arg(short, long, default_value = "3")]
        steps: u32,
    },

    /// Show the shape and column labels of a table
    Info {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play {
            input,
            config,
            steps,
            delay_ms,
            palette,
            sort,
            clear,
            width,
        } => {
            let config = resolve_config(config.as_deref(), steps, delay_ms, palette.as_deref())?;
            play(&input, config, sort, clear, width)
        }
        Commands::Plan {
            input,
            from,
            to,
            steps,
        } => show_plan(&input, from, to, steps),
        Commands::Info { input } => show_info(&input),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_table(input: &Path) -> Result<DataTable> {
    CsvTableReader::read_file(input, &CsvReadOptions::default())
        .with_context(|| format!("Failed to load '{}'", input.display()))
}

/// Settings from the config file, overridden by command-line flags
fn resolve_config(
    path: Option<&Path>,
    steps: Option<u32>,
    delay_ms: Option<u64>,
    palette: Option<&str>,
) -> Result<AnimationConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            toml::from_str::<AnimationConfig>(&text)
                .with_context(|| format!("Invalid config '{}'", path.display()))?
        }
        None => AnimationConfig::default(),
    };

    if let Some(steps) = steps {
        config = config.with_steps(steps);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_delay_ms(delay_ms);
    }
    if let Some(palette) = palette {
        config = config.with_palette(Palette::parse_list(palette).context("Invalid palette")?);
    }

    config.validate().context("Invalid animation settings")?;
    tracing::debug!(?config, "resolved animation settings");
    Ok(config)
}

fn play(input: &Path, config: AnimationConfig, sort: bool, clear: bool, width: usize) -> Result<()> {
    let table = load_table(input)?;
    let host = MemoryAdapter::new(table).with_sort_by_value(sort);
    let mut adapter = TerminalAdapter::new(host, io::stdout().lock(), width).with_clear(clear);

    let mut sequencer = Sequencer::new(config)?;
    sequencer
        .prepare(&mut adapter)
        .context("Failed to create the chart")?;
    let summary = sequencer
        .run(&mut adapter)
        .context("Animation stopped")?;

    eprintln!(
        "Played {} transitions ({} frames)",
        summary.transitions, summary.frames_applied
    );
    Ok(())
}

fn show_plan(input: &Path, from: usize, to: usize, steps: u32) -> Result<()> {
    let table = load_table(input)?;
    let current = table.snapshot(from)?;
    let next = table.snapshot(to)?;

    let plan = AnimationPlan::between(&current, &next, steps)?;
    let increments = step_increments(current.values(), next.values(), steps)?;

    let mut out = io::stdout().lock();
    writeln!(out, "{} -> {} in {} frames", current.label(), next.label(), plan.len())?;
    writeln!(out, "increment: {}", join_values(&increments))?;
    writeln!(out, "start: {}", join_values(current.values()))?;
    for (index, frame) in plan.iter() {
        writeln!(out, "frame {}: {}", index, join_values(frame.values()))?;
    }
    Ok(())
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_value(v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn show_info(input: &Path) -> Result<()> {
    let table = load_table(input)?;
    let shape = table.shape();

    println!("File: {}", input.display());
    println!("Rows: {} ({})", shape.rows, table.category_header());
    println!("Data columns: {}", shape.columns);
    for (i, label) in table.labels().enumerate() {
        println!("  {}\t{}", i, label);
    }
    if shape.columns < 2 {
        println!("Note: at least two data columns are needed to animate");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "steps_per_transition = 5").unwrap();
        writeln!(file, "palette = [\"red\", \"#00FF00\"]").unwrap();
        file.flush().unwrap();

        let config = resolve_config(Some(file.path()), None, Some(10), None).unwrap();
        assert_eq!(config.steps_per_transition, 5);
        assert_eq!(config.delay_ms, 10);
        assert_eq!(config.palette.colors(), &[Color::RED, Color::rgb(0, 255, 0)]);

        let config = resolve_config(Some(file.path()), Some(2), None, Some("blue")).unwrap();
        assert_eq!(config.steps_per_transition, 2);
        assert_eq!(config.delay_ms, 300);
        assert_eq!(config.palette.colors(), &[Color::BLUE]);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert!(resolve_config(None, Some(0), None, None).is_err());
        assert!(resolve_config(None, None, None, Some("notacolor")).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "palette = []").unwrap();
        file.flush().unwrap();
        assert!(resolve_config(Some(file.path()), None, None, None).is_err());
    }

    #[test]
    fn test_join_values() {
        assert_eq!(join_values(&[5.0, 2.5, -1.0]), "5, 2.50, -1");
    }
}
