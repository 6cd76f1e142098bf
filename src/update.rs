// src/update.rs
//! One update cycle: load → fetch every profile → recompute → save.
//!
//! Fetches run one at a time in document order unless `workers > 1`. Either
//! way each result only touches its own entry, and results are applied by
//! entry index, so the final document does not depend on fetch order.

use std::{
    sync::{atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
    time::Duration,
};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    config::{consts::JITTER_MS, options::UpdateOptions},
    errors::{FetchError, UpdateError},
    fetch::PointsFetcher,
    model::LeaderboardDocument,
    progress::Progress,
    rank, store,
};

/// What happened to each entry this cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub attempted: usize,
    pub updated: usize,
    /// (name, reason) for every entry that kept its previous value
    pub failures: Vec<(String, String)>,
}

impl UpdateSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Timestamp format of `generated_at`: `2024-05-01T12:00:00.000Z`.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Refresh points and recompute the board, stamped with the current time.
pub fn update(
    doc: LeaderboardDocument,
    fetcher: &dyn PointsFetcher,
    opts: &UpdateOptions,
    progress: &mut dyn Progress,
) -> (LeaderboardDocument, UpdateSummary) {
    update_at(doc, fetcher, opts, progress, Utc::now())
}

/// `update` with an explicit clock.
pub fn update_at(
    mut doc: LeaderboardDocument,
    fetcher: &dyn PointsFetcher,
    opts: &UpdateOptions,
    progress: &mut dyn Progress,
    now: DateTime<Utc>,
) -> (LeaderboardDocument, UpdateSummary) {
    let mut summary = UpdateSummary { attempted: doc.len(), ..Default::default() };
    progress.begin(doc.len());

    let workers = opts.effective_workers(doc.len());
    logf!("Update: Begin entries={} workers={}", doc.len(), workers);

    let mut failures: Vec<(usize, String, String)> = Vec::new();

    if workers <= 1 {
        for ix in 0..doc.len() {
            progress.item_started(&doc.entries[ix].name);
            let res = fetch_one(fetcher, &doc.entries[ix].profile_url);
            apply_result(&mut doc, &mut summary, &mut failures, &mut *progress, ix, res);
            if !opts.pause.is_zero() && ix + 1 < doc.len() {
                thread::sleep(opts.pause); // be polite
            }
        }
    } else {
        let urls: Vec<String> = doc.entries.iter().map(|e| e.profile_url.clone()).collect();
        let (tx, rx) = mpsc::channel::<(usize, Result<u64, FetchError>)>();
        let counter = AtomicUsize::new(0);

        thread::scope(|s| {
            for _ in 0..workers {
                let tx = tx.clone();
                let urls = &urls;
                let counter = &counter;
                s.spawn(move || {
                    loop {
                        let i = counter.fetch_add(1, Ordering::Relaxed);
                        if i >= urls.len() {
                            break;
                        }
                        let res = fetch_one(fetcher, &urls[i]);
                        if tx.send((i, res)).is_err() {
                            break;
                        }
                        let jitter = (i as u64) % JITTER_MS;
                        thread::sleep(opts.pause + Duration::from_millis(jitter));
                    }
                });
            }
            drop(tx); // main thread is sole receiver now

            for (ix, res) in rx.iter() {
                apply_result(&mut doc, &mut summary, &mut failures, &mut *progress, ix, res);
            }
        });
    }

    // Document order, whatever the completion order was
    failures.sort_by_key(|(ix, _, _)| *ix);
    summary.failures = failures.into_iter().map(|(_, name, reason)| (name, reason)).collect();

    rank::recompute(&mut doc);
    doc.generated_at = timestamp(now);

    progress.finish();
    logd!(
        "Update: Done updated={} failed={} top={:?}",
        summary.updated,
        summary.failed(),
        doc.entries.first().map(|e| e.name.as_str())
    );

    (doc, summary)
}

fn apply_result(
    doc: &mut LeaderboardDocument,
    summary: &mut UpdateSummary,
    failures: &mut Vec<(usize, String, String)>,
    progress: &mut dyn Progress,
    ix: usize,
    res: Result<u64, FetchError>,
) {
    let entry = &mut doc.entries[ix];
    match res {
        Ok(points) => {
            logd!("Update: {} → {} (was {:?})", entry.name, points, entry.points);
            entry.points = Some(points);
            summary.updated += 1;
            progress.item_done(&entry.name, points);
        }
        Err(e) => {
            // stale value stays; still ranked with it
            logd!("Update: Could not update points for {}: {}", entry.name, e);
            let reason = e.to_string();
            progress.item_failed(&entry.name, &reason);
            failures.push((ix, entry.name.clone(), reason));
        }
    }
}

fn fetch_one(fetcher: &dyn PointsFetcher, url: &str) -> Result<u64, FetchError> {
    if url.trim().is_empty() {
        return Err(FetchError::NoProfile);
    }
    fetcher.fetch(url)
}

/// Result of a full cycle.
#[derive(Debug)]
pub struct CycleReport {
    pub document: LeaderboardDocument,
    pub summary: UpdateSummary,
    pub written: bool,
}

/// Load the document at `opts.document`, update it, and write it back.
///
/// A load error aborts before anything is written; a write error fails the
/// cycle even though the computation finished.
pub fn run_cycle(
    opts: &UpdateOptions,
    fetcher: &dyn PointsFetcher,
    progress: &mut dyn Progress,
) -> Result<CycleReport, UpdateError> {
    let doc = store::load(&opts.document)?;
    let (document, summary) = update(doc, fetcher, opts, progress);

    if opts.dry_run {
        logf!("Update: Dry run, {} left untouched", opts.document.display());
        return Ok(CycleReport { document, summary, written: false });
    }

    store::save(&opts.document, &document)?;
    progress.log(&format!("Leaderboard updated: {}", opts.document.display()));
    Ok(CycleReport { document, summary, written: true })
}
