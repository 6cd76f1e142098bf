// tests/table_view.rs
//
// Rendering and sorting without a window.

use ep_leaderboard::{
    config::options::DeficitScale,
    gui::table_model::{
        render, sort_by_column, Column, HeaderState, TableController, TableView, EXTERNAL_REL,
    },
    model::{LeaderboardDocument, LeaderboardEntry},
    rank,
};

fn ranked() -> LeaderboardDocument {
    let mut doc = LeaderboardDocument::with_entries(vec![
        LeaderboardEntry::new("carol", "https://example.org/wiki/User:Carol").with_points(1_500),
        LeaderboardEntry::new("Alice", "https://example.org/wiki/User:Alice").with_points(2_501_500),
        LeaderboardEntry::new("bob", "").with_points(2_001_500),
    ]);
    rank::recompute(&mut doc);
    doc
}

fn names(view: &TableView) -> Vec<&str> {
    view.column(Column::Name)
}

#[test]
fn rows_follow_rank_not_file_order() {
    let mut doc = ranked();
    doc.entries.reverse();
    let view = render(&doc);
    assert_eq!(view.column(Column::Rank), ["1", "2", "3"]);
    assert_eq!(names(&view), ["Alice", "bob", "carol"]);
}

#[test]
fn cells_are_formatted_for_display() {
    let view = render(&ranked());
    assert_eq!(view.column(Column::Points), ["2,501,500", "2,001,500", "1,500"]);
    assert_eq!(view.column(Column::PointsBehind), ["N/A", "500.0K", "2.5M"]);
    assert_eq!(view.nrows(), 3);
    assert_eq!(TableView::headers(), ["No.", "User", "Energy Points", "Points Behind"]);
}

#[test]
fn stored_deficit_text_is_shown_verbatim() {
    let mut doc = ranked();
    doc.entries[2].points_behind_raw = Some("about 2.5M".to_string());
    let view = render(&doc);
    assert_eq!(view.rows[2].points_behind, "about 2.5M");
}

#[test]
fn profile_links_open_externally() {
    let view = render(&ranked());
    let alice = view.rows[0].link.as_ref().unwrap();
    assert_eq!(alice.url, "https://example.org/wiki/User:Alice");
    assert!(alice.new_tab);
    assert_eq!(alice.rel, EXTERNAL_REL);
    assert!(view.rows[1].link.is_none(), "no url, plain text");
}

#[test]
fn points_behind_sorts_by_magnitude() {
    let mut doc = LeaderboardDocument::with_entries(vec![
        LeaderboardEntry::new("a", ""),
        LeaderboardEntry::new("b", ""),
        LeaderboardEntry::new("c", ""),
    ]);
    for (i, raw) in ["N/A", "2.0M", "500000"].iter().enumerate() {
        doc.entries[i].rank = i as u32 + 1;
        doc.entries[i].points_behind_raw = Some(raw.to_string());
    }
    let view = render(&doc);

    let asc = sort_by_column(&view, Column::PointsBehind, true, DeficitScale::MegaOnly);
    assert_eq!(asc.column(Column::PointsBehind), ["N/A", "500000", "2.0M"]);

    let desc = sort_by_column(&view, Column::PointsBehind, false, DeficitScale::MegaOnly);
    assert_eq!(desc.column(Column::PointsBehind), ["2.0M", "500000", "N/A"]);
}

#[test]
fn kilo_suffix_only_scales_when_asked() {
    // "500.0K" vs "2.5M" vs "N/A"
    let view = render(&ranked());

    let plain = sort_by_column(&view, Column::PointsBehind, true, DeficitScale::MegaOnly);
    assert_eq!(plain.column(Column::PointsBehind), ["N/A", "500.0K", "2.5M"]);

    let with_k = sort_by_column(&view, Column::PointsBehind, false, DeficitScale::KiloAndMega);
    assert_eq!(with_k.column(Column::PointsBehind), ["2.5M", "500.0K", "N/A"]);
}

#[test]
fn names_sort_case_insensitively() {
    let view = render(&ranked());
    let asc = sort_by_column(&view, Column::Name, true, DeficitScale::default());
    assert_eq!(names(&asc), ["Alice", "bob", "carol"]);
    let desc = sort_by_column(&view, Column::Name, false, DeficitScale::default());
    assert_eq!(names(&desc), ["carol", "bob", "Alice"]);
}

#[test]
fn points_sort_ignores_separators() {
    let view = render(&ranked());
    let asc = sort_by_column(&view, Column::Points, true, DeficitScale::default());
    assert_eq!(names(&asc), ["carol", "bob", "Alice"]);
}

#[test]
fn header_clicks_toggle_and_reset_others() {
    let mut table = TableController::new(render(&ranked()), DeficitScale::default());

    assert!(table.click_header(Column::Name));
    assert_eq!(table.header_state(Column::Name), HeaderState::Asc);
    assert_eq!(names(table.view()), ["Alice", "bob", "carol"]);

    assert!(!table.click_header(Column::Name));
    assert_eq!(table.header_state(Column::Name), HeaderState::Desc);
    assert_eq!(names(table.view()), ["carol", "bob", "Alice"]);

    assert!(table.click_header(Column::Points));
    assert_eq!(table.header_state(Column::Name), HeaderState::Unsorted);
    assert_eq!(table.sorted_by(), Some((Column::Points, true)));

    table.replace(render(&ranked()));
    assert_eq!(table.sorted_by(), None);
    assert_eq!(names(table.view()), ["Alice", "bob", "carol"]);
}
