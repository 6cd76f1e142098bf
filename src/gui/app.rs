// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    config::{options::ViewOptions, state::AppState},
    errors::SourceError,
    model::LeaderboardDocument,
};

use super::{
    source::DocumentSource,
    table_model::{self, TableController, TableView},
};

pub fn run(options: eframe::NativeOptions, view: ViewOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Energy Points Leaderboard",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::new(view), &cc.egui_ctx)))),
    )?;
    Ok(())
}

/// What the status line shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded { entries: usize, generated_at: String },
    Error(String),
}

impl LoadStatus {
    pub fn text(&self) -> String {
        match self {
            LoadStatus::Loading => s!("Loading..."),
            LoadStatus::Loaded { entries, generated_at } if generated_at.is_empty() => {
                format!("Loaded {} entries", entries)
            }
            LoadStatus::Loaded { entries, generated_at } => {
                format!("Loaded {} entries (generated {})", entries, generated_at)
            }
            LoadStatus::Error(msg) => format!("Could not load leaderboard: {}", msg),
        }
    }
}

type LoadResult = Result<LeaderboardDocument, SourceError>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub source: DocumentSource,

    // sortable table
    pub table: TableController,

    // status + in-flight load (worker writes into the channel)
    pub status: LoadStatus,
    pub notice: Option<String>,
    pending: Option<Receiver<LoadResult>>,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let source = DocumentSource::parse(&state.options.source);
        let scale = state.options.deficit_scale;
        logf!("Init: source={} scale={:?}", source, scale);

        let mut app = Self {
            state,
            source,
            table: TableController::new(TableView::empty(), scale),
            status: LoadStatus::Loading,
            notice: None,
            pending: None,
        };
        app.refresh(ctx);
        app
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.pending.is_some()
    }

    /// Kick off a background load unless one is already running.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        if self.running() { return; }

        self.status = LoadStatus::Loading;
        self.notice = None;
        logf!("Load: Begin {}", self.source);

        let (tx, rx) = mpsc::channel();
        let source = self.source.clone();
        let ctx2 = ctx.clone();
        thread::spawn(move || {
            let res = source.load();
            let _ = tx.send(res);
            ctx2.request_repaint();
        });
        self.pending = Some(rx);
    }

    /// Pick up a finished load, if any. Called once per frame.
    pub fn poll_load(&mut self) {
        let Some(rx) = &self.pending else { return };
        let res = match rx.try_recv() {
            Ok(res) => res,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(SourceError::Http {
                url: self.source.to_string(),
                reason: s!("loader stopped unexpectedly"),
            }),
        };
        self.pending = None;
        self.apply_load(res);
    }

    /// On error the table keeps whatever it showed before.
    pub fn apply_load(&mut self, res: LoadResult) {
        match res {
            Ok(doc) => {
                logf!("Load: OK entries={} generated_at={}", doc.len(), doc.generated_at);
                self.table.replace(table_model::render(&doc));
                self.status = LoadStatus::Loaded {
                    entries: doc.len(),
                    generated_at: doc.generated_at,
                };
            }
            Err(e) => {
                loge!("Load: Error {}: {}", self.source, e);
                self.status = LoadStatus::Error(e.to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            super::components::toolbar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::data_table::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::options::DeficitScale,
        gui::table_model::Column,
        model::LeaderboardEntry,
        rank,
    };

    fn idle_app() -> App {
        App {
            state: AppState::default(),
            source: DocumentSource::parse("EP_Leaderboard.json"),
            table: TableController::new(TableView::empty(), DeficitScale::default()),
            status: LoadStatus::Loading,
            notice: None,
            pending: None,
        }
    }

    fn board() -> LeaderboardDocument {
        let mut doc = LeaderboardDocument::with_entries(vec![
            LeaderboardEntry::new("Ada", "").with_points(20),
            LeaderboardEntry::new("Bob", "").with_points(10),
        ]);
        rank::recompute(&mut doc);
        doc.generated_at = s!("2024-05-01T12:00:00.000Z");
        doc
    }

    #[test]
    fn failed_reload_keeps_the_table() {
        let mut app = idle_app();
        app.apply_load(Ok(board()));
        assert_eq!(
            app.status,
            LoadStatus::Loaded { entries: 2, generated_at: s!("2024-05-01T12:00:00.000Z") }
        );
        app.table.click_header(Column::Name);
        let before = app.table.view().clone();

        app.apply_load(Err(SourceError::Http {
            url: s!("https://example.org/EP_Leaderboard.json"),
            reason: s!("status: 503 Service Unavailable"),
        }));

        assert_eq!(app.table.view(), &before);
        assert_eq!(app.table.sorted_by(), Some((Column::Name, true)));
        assert!(matches!(&app.status, LoadStatus::Error(msg) if msg.contains("503")));
        assert!(app.status.text().starts_with("Could not load leaderboard:"));
    }

    #[test]
    fn finished_worker_is_picked_up() {
        let mut app = idle_app();
        let (tx, rx) = mpsc::channel();
        app.pending = Some(rx);
        assert!(app.running());

        app.poll_load();
        assert!(app.running(), "nothing sent yet");

        tx.send(Ok(board())).unwrap();
        app.poll_load();
        assert!(!app.running());
        assert_eq!(app.table.view().nrows(), 2);
    }
}
