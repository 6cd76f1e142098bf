// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use clap::Parser;
use eframe::egui::ViewportBuilder;
use ep_leaderboard::{
    cli::ViewerArgs,
    config::state::GuiState,
    gui,
    log::{self, LogTarget},
};

fn main() {
    let args = ViewerArgs::parse();
    log::init(LogTarget::default());

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w, size.window_h])
            .with_min_inner_size([420.0, 240.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, args.to_options()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
