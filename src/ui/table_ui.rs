use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::ui::app::CandleBoardApp;
use crate::ui::util;

const ROW_HEIGHT: f32 = 18.0;

pub fn draw_candle_table(app: &CandleBoardApp, ui: &mut egui::Ui) {
    let candles = app.candles();
    if candles.is_empty() {
        ui.label(format!(
            "No candle data loaded for {}.",
            app.selected_index.name()
        ));
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(150.0))
        .columns(Column::remainder(), 5)
        .header(20.0, |mut header| {
            for title in ["Time", "Open", "High", "Low", "Close", "Volume"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, candles.len(), |mut row| {
                let candle = &candles[row.index()];
                row.col(|ui| {
                    ui.label(candle.timestamp.format("%Y-%m-%d %H:%M").to_string());
                });
                row.col(|ui| {
                    ui.label(util::price(candle.open));
                });
                row.col(|ui| {
                    ui.label(util::price(candle.high));
                });
                row.col(|ui| {
                    ui.label(util::price(candle.low));
                });
                row.col(|ui| {
                    ui.label(util::price(candle.close));
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", candle.volume));
                });
            });
        });
}
