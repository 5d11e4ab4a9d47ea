#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::{egui, glow};
use std::time::Duration;

use nordvpn_toggle::{ui, Args, State, ToggleApp, INITIAL_HEIGHT, INITIAL_WIDTH, PROGRAM_TITLE};

struct App(ToggleApp);

// Main eframe application loop
impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let app = &mut self.0;
        ctx.request_repaint_after(Duration::from_millis(250));

        egui::CentralPanel::default().show(ctx, |ui| match app.state {
            State::Initialising => {
                ui.centered_and_justified(|ui| {
                    ui.label("Initialising...");
                });
                app.enable();
            }
            State::About => {
                ui::draw_about_screen(app, ui);
            }
            State::Running => {
                ui::draw_running_state(app, ui);
            }
        });
    }

    // Called when the application is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.0.shutdown_app();
    }
}

// Application Entry Point
fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    log::info!("Starting {}", PROGRAM_TITLE);
    if args.dry_run {
        log::warn!("Dry run: commands will be logged, not executed.");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT])
            .with_title(PROGRAM_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        PROGRAM_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App(ToggleApp::new(&args))))),
    )
}
