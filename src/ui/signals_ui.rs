use eframe::egui::{self, Color32, RichText};

use crate::market::signals::Signal;
use crate::ui::app::CandleBoardApp;
use crate::ui::util;

pub fn draw_signal_panels(app: &CandleBoardApp, ui: &mut egui::Ui) {
    ui.columns(2, |columns| {
        draw_signal_list(
            &mut columns[0],
            "📈 Bullish Signals",
            Color32::from_rgb(0, 160, 60),
            &app.bullish,
        );
        draw_signal_list(
            &mut columns[1],
            "📉 Bearish Signals",
            Color32::from_rgb(200, 50, 50),
            &app.bearish,
        );
    });
}

fn draw_signal_list(ui: &mut egui::Ui, title: &str, color: Color32, signals: &[Signal]) {
    ui.group(|ui| {
        ui.label(RichText::new(title).color(color).strong());
        ui.separator();
        if signals.is_empty() {
            ui.label("No signals detected.");
            return;
        }
        for signal in signals {
            ui.label(format!(
                "{} [{}] {} | SL {} | TGT {}",
                signal.time.format("%d-%m-%Y %H:%M"),
                signal.interval,
                signal.kind.label(),
                util::price(signal.stoploss),
                util::price(signal.target),
            ));
        }
    });
}
