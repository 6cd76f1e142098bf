// src/gui/table_model.rs
//! TableView: the leaderboard as display rows, plus client-side sorting.
//!
//! Purpose:
//! - `render` turns a `LeaderboardDocument` into display text, ordered by
//!   `rank` (the document's array order is not trusted here).
//! - `sort_by_column` reorders rows by parsing the *displayed* text back,
//!   so what you see is exactly what gets compared.
//! - `TableController` owns a view plus the per-header sort state, and is
//!   what the egui table talks to.
//!
//! Nothing in here touches egui, so it can be tested without a window.

use std::cmp::Ordering;

use crate::{
    config::{consts::HEADERS, options::DeficitScale},
    model::{LeaderboardDocument, LeaderboardEntry, NOT_APPLICABLE},
    rank::with_thousands,
};

/// `rel` for profile links; they leave the app and shouldn't leak a referrer.
pub const EXTERNAL_REL: &str = "nofollow noreferrer noopener";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Rank,
    Name,
    Points,
    PointsBehind,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Rank, Column::Name, Column::Points, Column::PointsBehind];

    pub fn from_index(ix: usize) -> Option<Column> {
        Self::ALL.get(ix).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        HEADERS[self.index()]
    }

    /// Right-aligned / centered in the view.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Column::Name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub url: String,
    pub new_tab: bool,
    pub rel: &'static str,
}

impl ExternalLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), new_tab: true, rel: EXTERNAL_REL }
    }
}

/// One display row. Every cell is final text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub rank: String,
    pub name: String,
    pub link: Option<ExternalLink>,
    pub points: String,
    pub points_behind: String,
}

impl TableRow {
    fn from_entry(e: &LeaderboardEntry) -> Self {
        let rank = if e.rank == 0 { s!() } else { e.rank.to_string() };
        let link = e.has_profile().then(|| ExternalLink::new(e.profile_url.trim()));
        let points = e.points.map(with_thousands).unwrap_or_default();

        // Persisted text wins; never re-abbreviate here
        let points_behind = match (&e.points_behind_raw, e.points_behind) {
            (Some(raw), _) => raw.clone(),
            (None, Some(n)) => with_thousands(n),
            (None, None) => s!(),
        };

        Self { rank, name: e.name.clone(), link, points, points_behind }
    }

    pub fn cell(&self, col: Column) -> &str {
        match col {
            Column::Rank => &self.rank,
            Column::Name => &self.name,
            Column::Points => &self.points,
            Column::PointsBehind => &self.points_behind,
        }
    }

    pub fn cells(&self) -> Vec<String> {
        Column::ALL.iter().map(|&c| s!(self.cell(c))).collect()
    }
}

/// The table model used by the GUI
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn headers() -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Rows as plain cells, in current display order (copy/export).
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(TableRow::cells).collect()
    }

    pub fn column(&self, col: Column) -> Vec<&str> {
        self.rows.iter().map(|r| r.cell(col)).collect()
    }
}

/// Document → display rows, ordered by rank ascending (stable).
pub fn render(doc: &LeaderboardDocument) -> TableView {
    let mut entries: Vec<&LeaderboardEntry> = doc.entries.iter().collect();
    entries.sort_by_key(|e| e.rank);
    TableView { rows: entries.into_iter().map(TableRow::from_entry).collect() }
}

/* ---------- sorting ---------- */

#[derive(Debug, PartialEq)]
enum SortKey {
    Num(f64),
    Text(String),
}

impl SortKey {
    fn cmp(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Num(a), SortKey::Num(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // Same column always yields the same variant
            _ => Ordering::Equal,
        }
    }
}

/// Longest leading `[+-]digits[.digits]`, like JS `parseFloat`.
/// Text with no number compares as 0 so the order stays total.
fn leading_number(s: &str) -> f64 {
    let s = s.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        match ch {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].trim_end_matches('.').parse().unwrap_or(0.0)
}

/// Magnitude of an abbreviated deficit cell.
pub fn deficit_magnitude(text: &str, scale: DeficitScale) -> f64 {
    let t = text.trim();
    if t == NOT_APPLICABLE {
        return 0.0;
    }
    if let Some(m) = t.strip_suffix('M') {
        return leading_number(m) * 1_000_000.0;
    }
    if scale == DeficitScale::KiloAndMega {
        if let Some(k) = t.strip_suffix('K') {
            return leading_number(k) * 1_000.0;
        }
    }
    // "1.5K" lands here in MegaOnly mode and compares as 1.5
    leading_number(&t.replace(',', ""))
}

fn sort_key(row: &TableRow, col: Column, scale: DeficitScale) -> SortKey {
    let text = row.cell(col);
    match col {
        Column::Rank => SortKey::Num(leading_number(text)),
        Column::Name => SortKey::Text(text.to_lowercase()),
        Column::Points => SortKey::Num(leading_number(&text.replace(',', ""))),
        Column::PointsBehind => SortKey::Num(deficit_magnitude(text, scale)),
    }
}

/// Reorder rows by one column. Pure: the input view is left as is.
/// Equal keys keep their current relative order in either direction.
pub fn sort_by_column(
    view: &TableView,
    col: Column,
    ascending: bool,
    scale: DeficitScale,
) -> TableView {
    let mut keyed: Vec<(SortKey, &TableRow)> =
        view.rows.iter().map(|r| (sort_key(r, col, scale), r)).collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = a.cmp(b);
        if ascending { ord } else { ord.reverse() }
    });

    TableView { rows: keyed.into_iter().map(|(_, r)| r.clone()).collect() }
}

/* ---------- header state ---------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderState {
    #[default]
    Unsorted,
    Asc,
    Desc,
}

impl HeaderState {
    pub fn indicator(self) -> &'static str {
        match self {
            HeaderState::Unsorted => "",
            HeaderState::Asc => " ▲",
            HeaderState::Desc => " ▼",
        }
    }
}

/// A view plus its header sort state. One per table; nothing global.
#[derive(Clone, Debug)]
pub struct TableController {
    view: TableView,
    headers: [HeaderState; 4],
    scale: DeficitScale,
}

impl TableController {
    pub fn new(view: TableView, scale: DeficitScale) -> Self {
        Self { view, headers: [HeaderState::Unsorted; 4], scale }
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn header_state(&self, col: Column) -> HeaderState {
        self.headers[col.index()]
    }

    /// The column carrying an indicator, and whether it is ascending.
    pub fn sorted_by(&self) -> Option<(Column, bool)> {
        Column::ALL.iter().find_map(|&c| match self.header_state(c) {
            HeaderState::Asc => Some((c, true)),
            HeaderState::Desc => Some((c, false)),
            HeaderState::Unsorted => None,
        })
    }

    /// Header click: ascending unless this header is ascending right now.
    /// Every other header loses its indicator. Returns the new direction.
    pub fn click_header(&mut self, col: Column) -> bool {
        let ascending = self.header_state(col) != HeaderState::Asc;
        self.view = sort_by_column(&self.view, col, ascending, self.scale);

        self.headers = [HeaderState::Unsorted; 4];
        self.headers[col.index()] = if ascending { HeaderState::Asc } else { HeaderState::Desc };

        logd!("Table: sort {:?} {}", col, if ascending { "asc" } else { "desc" });
        ascending
    }

    /// Same as `click_header`, addressed by header position.
    pub fn click_header_at(&mut self, ix: usize) -> Option<bool> {
        Column::from_index(ix).map(|c| self.click_header(c))
    }

    /// Fresh data (refresh): new rows in rank order, indicators cleared.
    pub fn replace(&mut self, view: TableView) {
        self.view = view;
        self.headers = [HeaderState::Unsorted; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: &str, name: &str, points: &str, behind: &str) -> TableRow {
        TableRow {
            rank: s!(rank),
            name: s!(name),
            link: None,
            points: s!(points),
            points_behind: s!(behind),
        }
    }

    #[test]
    fn leading_number_is_parse_float_like() {
        assert_eq!(leading_number("2.5"), 2.5);
        assert_eq!(leading_number(" 12abc"), 12.0);
        assert_eq!(leading_number("1.5K"), 1.5);
        assert_eq!(leading_number("-3"), -3.0);
        assert_eq!(leading_number("7."), 7.0);
        assert_eq!(leading_number(""), 0.0);
        assert_eq!(leading_number("abc"), 0.0);
    }

    #[test]
    fn deficit_magnitudes() {
        use DeficitScale::*;
        assert_eq!(deficit_magnitude("N/A", MegaOnly), 0.0);
        assert_eq!(deficit_magnitude("2.0M", MegaOnly), 2_000_000.0);
        assert_eq!(deficit_magnitude("500000", MegaOnly), 500_000.0);
        assert_eq!(deficit_magnitude("1.5K", MegaOnly), 1.5);
        assert_eq!(deficit_magnitude("1.5K", KiloAndMega), 1_500.0);
        assert_eq!(deficit_magnitude("12,000", MegaOnly), 12_000.0);
    }

    #[test]
    fn header_state_machine() {
        let view = TableView {
            rows: vec![row("1", "b", "3", "N/A"), row("2", "A", "2", "1"), row("3", "c", "1", "2")],
        };
        let mut c = TableController::new(view, DeficitScale::MegaOnly);
        assert_eq!(c.sorted_by(), None);

        // unsorted → asc
        assert!(c.click_header(Column::Name));
        assert_eq!(c.header_state(Column::Name), HeaderState::Asc);
        assert_eq!(c.view().column(Column::Name), ["A", "b", "c"]);

        // asc → desc
        assert!(!c.click_header(Column::Name));
        assert_eq!(c.header_state(Column::Name), HeaderState::Desc);
        assert_eq!(c.view().column(Column::Name), ["c", "b", "A"]);

        // desc → asc
        assert!(c.click_header(Column::Name));
        assert_eq!(c.header_state(Column::Name), HeaderState::Asc);

        // another header starts ascending and clears the first
        assert!(c.click_header(Column::Points));
        assert_eq!(c.header_state(Column::Name), HeaderState::Unsorted);
        assert_eq!(c.sorted_by(), Some((Column::Points, true)));
        assert_eq!(c.view().column(Column::Points), ["1", "2", "3"]);

        assert_eq!(c.click_header_at(9), None);
    }

    #[test]
    fn replace_clears_indicators() {
        let mut c = TableController::new(TableView { rows: vec![row("1", "a", "1", "N/A")] }, DeficitScale::MegaOnly);
        c.click_header(Column::Rank);
        c.replace(TableView::empty());
        assert_eq!(c.sorted_by(), None);
        assert!(c.view().is_empty());
    }
}
