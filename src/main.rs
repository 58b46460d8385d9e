//! Patch-Cables Viewer.
//!
//! Zeigt Prozessoren und ihre Kabel eines MIDI-Patches und erlaubt das
//! Ziehen und Löschen von Verbindungen im Connect-Modus.

use eframe::egui;
use patch_cables::{
    ActionDispatcher, CableOptions, PatchStore, SceneController, StoreAction, StoreState,
    ThemeProvider,
};

const DEMO_PATCH: &str = include_str!("../tests/fixtures/demo_patch.json");

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Patch-Cables v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Patch-Cables"),
            ..Default::default()
        };

        eframe::run_native(
            "Patch-Cables",
            options,
            Box::new(|_cc| {
                let project = load_project(std::env::args().nth(1).as_deref())?;
                Ok(Box::new(ViewerApp::new(project)))
            }),
        )
    }
}

/// Lädt den Start-Patch aus einer JSON-Datei oder den eingebauten Demo-Patch.
fn load_project(path: Option<&str>) -> anyhow::Result<StoreState> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let state = StoreState::from_json(&content)?;
            log::info!("Patch geladen aus: {}", path);
            Ok(state)
        }
        None => StoreState::from_json(DEMO_PATCH),
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    store: PatchStore,
    controller: SceneController,
    viewport: patch_cables::ui::CableViewport,
}

impl ViewerApp {
    fn new(project: StoreState) -> Self {
        let cable_options = CableOptions::load_from_file(&CableOptions::config_path());
        let mut store = PatchStore::new(StoreState::new());
        let controller = SceneController::new(cable_options, store.state());
        store.dispatch(StoreAction::CreateProject(Box::new(project)));

        let mut app = Self {
            store,
            controller,
            viewport: patch_cables::ui::CableViewport::new(),
        };
        app.process_notifications();
        app
    }

    fn process_notifications(&mut self) {
        for action in self.store.take_notifications() {
            self.controller.handle_action(&action, self.store.state());
        }
    }

    fn collect_key_actions(&self, ctx: &egui::Context) -> Vec<StoreAction> {
        let mut actions = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(egui::Key::C) {
                actions.push(StoreAction::ToggleConnectMode);
            }
            if i.key_pressed(egui::Key::T) {
                actions.push(StoreAction::SetTheme {
                    theme: self.store.state().theme.toggled(),
                });
            }
        });
        actions
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in self.collect_key_actions(ctx) {
            self.store.dispatch(action);
        }
        self.process_notifications();

        let colors = self.store.state().theme_colors();
        let connect_mode = self.controller.cables().is_connect_mode();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!(
                "Prozessoren: {} | Kabel: {} | Connect-Modus: {} (C) | Theme wechseln (T)",
                self.controller.processors().len(),
                self.controller.cables().group().len(),
                if connect_mode { "an" } else { "aus" },
            ));
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport
                    .show(ui, &mut self.controller, &colors, &mut self.store);
            });

        self.process_notifications();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let path = CableOptions::config_path();
        if let Err(e) = self.controller.cables().options().save_to_file(&path) {
            log::error!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
        self.controller.shutdown();
    }
}
