// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    config::{
        consts::*,
        options::{DeficitScale, FetchOptions, UpdateOptions, ViewOptions},
    },
    errors::{UpdateError, WriteError},
    fetch::HttpPointsFetcher,
    log::{self, LogTarget},
    progress::ConsoleProgress,
    update,
};

/// Refresh every profile's energy points once, re-rank, and write the document back.
#[derive(Parser, Debug, Clone)]
#[command(name = "ep_update", version, about)]
pub struct UpdateArgs {
    /// Leaderboard JSON document (created if missing)
    #[arg(short, long, env = DOCUMENT_ENV, default_value = DEFAULT_DOCUMENT)]
    pub document: PathBuf,

    /// Per-profile fetch timeout
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pause after each fetch
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Fetch this many profiles at once (1 = one at a time)
    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Class of the element holding the points text
    #[arg(long, default_value = BADGE_CLASS)]
    pub badge_class: String,

    #[arg(long, default_value = USER_AGENT)]
    pub user_agent: String,

    /// Save pages that have no points badge here
    #[arg(long)]
    pub debug_dir: Option<PathBuf>,

    /// Print the updated document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl UpdateArgs {
    pub fn to_options(&self) -> UpdateOptions {
        UpdateOptions {
            document: self.document.clone(),
            fetch: FetchOptions {
                timeout: Duration::from_secs(self.timeout_secs),
                user_agent: self.user_agent.clone(),
                badge_class: self.badge_class.clone(),
                debug_dir: self.debug_dir.clone(),
            },
            workers: self.workers,
            pause: Duration::from_millis(self.pause_ms),
            dry_run: self.dry_run,
        }
    }
}

/// Show the leaderboard as a sortable table.
#[derive(Parser, Debug, Clone)]
#[command(name = "ep_leaderboard", version, about)]
pub struct ViewerArgs {
    /// Leaderboard JSON: a file path or an http(s) URL
    #[arg(env = DOCUMENT_ENV, default_value = DEFAULT_DOCUMENT)]
    pub source: String,

    /// Let the Points Behind sort read "K" as thousands (off: only "M" scales)
    #[arg(long)]
    pub kilo_aware_sort: bool,

    /// Default path for the Export button
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    pub export: PathBuf,
}

impl ViewerArgs {
    pub fn to_options(&self) -> ViewOptions {
        ViewOptions {
            source: self.source.clone(),
            deficit_scale: if self.kilo_aware_sort {
                DeficitScale::KiloAndMega
            } else {
                DeficitScale::MegaOnly
            },
            export_path: self.export.clone(),
        }
    }
}

/// `ep_update` entry point: one cycle, then exit.
pub fn run() -> Result<(), UpdateError> {
    run_with(UpdateArgs::parse())
}

pub fn run_with(args: UpdateArgs) -> Result<(), UpdateError> {
    log::init(LogTarget::Stderr);

    let opts = args.to_options();
    logf!("Cli: document={} workers={}", opts.document.display(), opts.workers);

    let fetcher = HttpPointsFetcher::new(&opts.fetch).map_err(UpdateError::Fetcher)?;
    let mut progress = ConsoleProgress::new();

    let report = update::run_cycle(&opts, &fetcher, &mut progress)?;

    logd!(
        "Cli: Done updated={} failed={} written={}",
        report.summary.updated,
        report.summary.failed(),
        report.written
    );

    if !report.written {
        let json = report.document.to_json_pretty().map_err(WriteError::from)?;
        println!("{json}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_args_map_onto_options() {
        let args = UpdateArgs::parse_from([
            "ep_update", "--document", "data/board.json", "--timeout-secs", "3",
            "--workers", "4", "--pause-ms", "250", "--dry-run",
        ]);
        let o = args.to_options();
        assert_eq!(o.document, PathBuf::from("data/board.json"));
        assert_eq!(o.fetch.timeout, Duration::from_secs(3));
        assert_eq!(o.fetch.badge_class, BADGE_CLASS);
        assert_eq!(o.workers, 4);
        assert_eq!(o.pause, Duration::from_millis(250));
        assert!(o.dry_run);
    }

    #[test]
    fn viewer_args() {
        let v = ViewerArgs::parse_from(["ep_leaderboard", "https://example.org/EP_Leaderboard.json", "--kilo-aware-sort"]);
        let o = v.to_options();
        assert_eq!(o.source, "https://example.org/EP_Leaderboard.json");
        assert_eq!(o.deficit_scale, DeficitScale::KiloAndMega);
    }
}
