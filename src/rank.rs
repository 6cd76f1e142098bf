// src/rank.rs
//! Ranking and deficit annotation.
//!
//! `recompute` is the only place that writes `rank`, `pointsBehind` and
//! `pointsBehindRaw`. It is a pure function of the current `points` values
//! and the current entry order (which only matters for ties).

use crate::model::{LeaderboardDocument, NOT_APPLICABLE};

const KILO: u64 = 1_000;
const MEGA: u64 = 1_000_000;

/// Sort by points (descending, missing = 0), assign dense ranks, annotate deficits.
pub fn recompute(doc: &mut LeaderboardDocument) {
    // `sort_by` is stable: equal points keep their prior relative order
    doc.entries
        .sort_by(|a, b| b.points_or_zero().cmp(&a.points_or_zero()));

    let top = doc.entries.first().map(|e| e.points_or_zero()).unwrap_or(0);

    for (i, entry) in doc.entries.iter_mut().enumerate() {
        entry.rank = (i + 1) as u32;
        if i == 0 {
            entry.points_behind = None;
            entry.points_behind_raw = Some(s!(NOT_APPLICABLE));
        } else {
            // top is the maximum, so this never underflows
            let behind = top - entry.points_or_zero();
            entry.points_behind = Some(behind);
            entry.points_behind_raw = Some(abbreviate(behind));
        }
    }
}

/// "2.4M", "1.0K", "999". One decimal, rounded half-up.
pub fn abbreviate(n: u64) -> String {
    if n >= MEGA {
        scaled(n, MEGA, 'M')
    } else if n >= KILO {
        scaled(n, KILO, 'K')
    } else {
        n.to_string()
    }
}

fn scaled(n: u64, unit: u64, suffix: char) -> String {
    // tenths of a unit, half-up, in integers so 2_350_000 can't become 2.3M
    let tenths = (n as u128 * 10 + unit as u128 / 2) / unit as u128;
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// 1234567 -> "1,234,567"
pub fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
