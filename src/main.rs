use std::path::PathBuf;

use eframe::egui::{self, Vec2};
use tracing_subscriber::EnvFilter;

use crate::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::ui::app::CandleBoardApp;

mod market;
mod prefs;
mod theme;
mod ui;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let prefs_path = FilePreferenceStore::default_path();
    let store: Box<dyn PreferenceStore> = match FilePreferenceStore::load(&prefs_path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!("⚠ Preferences unavailable ({err:#}); continuing without persistence");
            Box::new(MemoryPreferenceStore::new())
        }
    };

    let data_path = std::env::var_os("CANDLEBOARD_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("candles.json"));
    let series = match market::load_series(&data_path) {
        Ok(series) => {
            tracing::info!("📥 Loaded {} series from {}", series.len(), data_path.display());
            series
        }
        Err(err) => {
            tracing::warn!("⚠ Candle data unavailable: {err:#}");
            market::SeriesMap::new()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(1000.0, 700.0))
            .with_min_inner_size(Vec2::new(640.0, 400.0)),
        centered: true,
        default_theme: eframe::Theme::Dark,
        follow_system_theme: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "CandleBoard",
        options,
        Box::new(move |_cc| Box::new(CandleBoardApp::new(store, series))),
    )
}
