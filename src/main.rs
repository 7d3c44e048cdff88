#![windows_subsystem = "windows"]
//! Galactic Conquest Editor - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod model;
mod presenter;
mod settings;
mod theme;
mod types;
mod ui;

use app::App;
use constants::*;
use eframe::egui;
use model::GameObjectRepository;
use presenter::EditorPresenter;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{error, info};
use types::MenuOutcome;
use ui::file_picker::RfdFilePicker;
use ui::main_window::MainWindow;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,galactic_conquest_editor=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME);

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Galactic Conquest Editor starting");

    let settings = settings::Settings::load(&data_dir);

    let repository = Rc::new(RefCell::new(GameObjectRepository::demo()));
    let presenter = EditorPresenter::new(repository).with_data_folder(settings.data_folder_path());
    let picker = RfdFilePicker::new(settings.data_folder_path());
    let window = match MainWindow::new(presenter, Box::new(picker)) {
        Ok(window) => window,
        Err(e) => {
            error!(error = %e, "Failed to build main window");
            return Err(e.into());
        }
    };

    // Restore saved window position/size
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let mut viewport = MainWindow::<EditorPresenter>::viewport_builder();
    if let (Some(w), Some(h)) = (settings.window_w, settings.window_h) {
        viewport = viewport.with_inner_size([w, h]);
    }
    let needs_center = win_pos.is_none();
    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, window, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        match self.window.show(ctx, &mut self.list_panel_width) {
            MenuOutcome::Handled => {}
            MenuOutcome::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuOutcome::OpenDialog(kind) => self.open_dialog(kind),
        }

        self.render_active_dialog(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
