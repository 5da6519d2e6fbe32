/**
 * egui Native Desktop App - Main Entry Point
 *
 * Sets up logging (stderr plus the in-app diagnostics console) and runs the
 * film catalog client.
 */
use eframe::egui;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cinerate::egui_app::debug::DEFAULT_MAX_ENTRIES;
use cinerate::egui_app::theme::styles;
use cinerate::egui_app::{views, AppState, DiagnosticsLog};

fn init_tracing(diagnostics: &DiagnosticsLog) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinerate=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(diagnostics.layer())
        .init();
}

fn main() -> Result<(), eframe::Error> {
    let diagnostics = DiagnosticsLog::new(DEFAULT_MAX_ENTRIES);
    init_tracing(&diagnostics);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Cinerate",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(CinerateApp::new(diagnostics)))
        }),
    )
}

/// Main application state
struct CinerateApp {
    state: AppState,
}

impl CinerateApp {
    fn new(diagnostics: DiagnosticsLog) -> Self {
        Self {
            state: AppState::new(diagnostics),
        }
    }
}

impl eframe::App for CinerateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.update();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_diagnostics_window(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
