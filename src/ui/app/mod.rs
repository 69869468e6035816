use eframe::egui;

use crate::market::signals::{self, Signal};
use crate::market::{Candle, MarketIndex, SeriesMap};
use crate::prefs::{PreferenceStore, THEME_MODE_KEY};
use crate::theme::ThemeMode;
use crate::ui::{signals_ui, table_ui};

/// Display state of the candle table. Not persisted: every launch starts
/// hidden, as the dashboard loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Visible,
    Hidden,
}

impl VisibilityState {
    pub fn toggled(self) -> Self {
        match self {
            VisibilityState::Visible => VisibilityState::Hidden,
            VisibilityState::Hidden => VisibilityState::Visible,
        }
    }

    /// Label of the toggle button: it names the action a click performs.
    pub fn toggle_label(self) -> &'static str {
        match self {
            VisibilityState::Visible => "Hide Table",
            VisibilityState::Hidden => "Show Table",
        }
    }
}

pub struct CandleBoardApp {
    pub table_visibility: VisibilityState,
    /// `None` until a preference is applied; the built-in visuals stay
    /// untouched in that state.
    pub theme: Option<ThemeMode>,
    pub selected_index: MarketIndex,
    pub series: SeriesMap,
    pub bullish: Vec<Signal>,
    pub bearish: Vec<Signal>,
    store: Box<dyn PreferenceStore>,
}

impl CandleBoardApp {
    pub fn new(store: Box<dyn PreferenceStore>, series: SeriesMap) -> Self {
        let mut app = Self {
            table_visibility: VisibilityState::Hidden,
            theme: None,
            selected_index: MarketIndex::Nifty,
            series,
            bullish: Vec::new(),
            bearish: Vec::new(),
            store,
        };
        app.restore_theme();
        app.refresh_signals();
        app
    }

    pub fn candles(&self) -> &[Candle] {
        self.series
            .get(self.selected_index.name())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn toggle_table(&mut self) {
        self.table_visibility = self.table_visibility.toggled();
    }

    /// Applies `mode` and persists it under [`THEME_MODE_KEY`]. A failed
    /// store write is logged, never surfaced to the UI.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = Some(mode);
        if let Err(err) = self.store.set(THEME_MODE_KEY, mode.as_str()) {
            tracing::warn!("⚠ Failed to persist theme preference: {err:#}");
        }
        tracing::info!("🎨 Theme set to {mode}");
    }

    /// Anything other than an applied dark theme flips to dark.
    pub fn toggle_theme(&mut self) {
        let next = if self.theme == Some(ThemeMode::Dark) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_theme(next);
    }

    /// Glyph for the theme button; the built-in visuals are dark.
    pub fn theme_glyph(&self) -> &'static str {
        self.theme.unwrap_or(ThemeMode::Dark).glyph()
    }

    pub fn select_index(&mut self, index: MarketIndex) {
        if self.selected_index != index {
            self.selected_index = index;
            self.refresh_signals();
        }
    }

    /// Restores the stored theme on startup. Only the exact strings
    /// "light" and "dark" count; anything else leaves the default alone.
    fn restore_theme(&mut self) {
        let Some(stored) = self.store.get(THEME_MODE_KEY) else {
            return;
        };
        match stored.parse::<ThemeMode>() {
            Ok(mode) => self.set_theme(mode),
            Err(err) => tracing::warn!("⚠ Ignoring stored theme preference: {err}"),
        }
    }

    fn refresh_signals(&mut self) {
        let (bullish, bearish) = signals::detect_signals(
            self.candles(),
            signals::BASE_INTERVAL,
            self.selected_index.name(),
        );
        self.bullish = bullish;
        self.bearish = bearish;
    }

    #[cfg(test)]
    fn stored_theme(&self) -> Option<String> {
        self.store.get(THEME_MODE_KEY)
    }
}

impl eframe::App for CandleBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(mode) = self.theme {
            ctx.set_visuals(mode.visuals());
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📊 CandleBoard");
                ui.separator();

                for index in MarketIndex::ALL {
                    let response = ui
                        .selectable_label(self.selected_index == index, index.name())
                        .on_hover_text(format!("Security ID {}", index.security_id()));
                    if response.clicked() {
                        self.select_index(index);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme_glyph()).clicked() {
                        self.toggle_theme();
                    }
                    if ui.button(self.table_visibility.toggle_label()).clicked() {
                        self.toggle_table();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.table_visibility == VisibilityState::Visible {
                table_ui::draw_candle_table(self, ui);
                ui.add_space(10.0);
            }

            ui.separator();
            signals_ui::draw_signal_panels(self, ui);
        });
    }
}
