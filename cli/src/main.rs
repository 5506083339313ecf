use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gridsweep_core::{CellCount, Coord};

use session::Session;
use settings::Settings;

mod render;
mod session;
mod settings;

/// Headless grid-reveal puzzle: reads one command per line from stdin.
///
/// Commands: `reveal X Y`, `flag X Y`, `drag X Y` (pixel coordinates),
/// `restart`, `show`, `quit`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Settings file in TOML format
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    columns: Option<Coord>,

    #[arg(long)]
    mines: Option<CellCount>,

    /// Force a seed instead of the configured one
    #[arg(short, long, conflicts_with = "random_seed")]
    seed: Option<u64>,

    /// Draw a new seed for every match
    #[arg(long)]
    random_seed: bool,

    /// Print one JSON object per outcome
    #[arg(long)]
    json: bool,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(rows) = self.rows {
            settings.num_rows = rows;
        }
        if let Some(columns) = self.columns {
            settings.num_columns = columns;
        }
        if let Some(mines) = self.mines {
            settings.num_mines = mines;
        }
        if self.random_seed {
            settings.seed = None;
        } else if self.seed.is_some() {
            settings.seed = self.seed;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = args.settings()?;
    log::debug!("settings: {:?}", settings);

    let mut session = Session::new(&settings, args.json)?;
    session.run(io::stdin().lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "gridsweep", "--rows", "9", "--columns", "12", "--mines", "10", "-s", "7",
        ]);

        let settings = args.settings().unwrap();

        assert_eq!(settings.num_rows, 9);
        assert_eq!(settings.num_columns, 12);
        assert_eq!(settings.num_mines, 10);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn random_seed_clears_the_default_seed() {
        let args = Args::parse_from(["gridsweep", "--random-seed"]);

        assert_eq!(args.settings().unwrap().seed, None);
    }

    #[test]
    fn seed_conflicts_with_random_seed() {
        assert!(Args::try_parse_from(["gridsweep", "--seed", "1", "--random-seed"]).is_err());
    }
}
