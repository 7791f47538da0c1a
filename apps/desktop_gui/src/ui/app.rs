use eframe::egui;

use crate::controller::events::{Key, Notice};
use crate::controller::reducer::Calculator;
use crate::ui::theme;

/// The original button layout: rows of labels, top to bottom.
const BUTTON_ROWS: [[&str; 4]; 5] = [
    ["C", "←", "%", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "=", "H"],
];

fn key_for_label(label: &str) -> Key {
    match label {
        "C" => Key::Clear,
        "←" => Key::Backspace,
        "H" => Key::History,
        "=" => Key::Evaluate,
        other => Key::Input(other.chars().next().unwrap_or('0')),
    }
}

pub struct CalculatorApp {
    calculator: Calculator,
    notice: Option<Notice>,
}

impl CalculatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = theme::WINDOW_BG;
        visuals.window_fill = theme::DISPLAY_BG;
        cc.egui_ctx.set_visuals(visuals);
        Self {
            calculator: Calculator::new(),
            notice: None,
        }
    }

    fn dispatch(&mut self, key: Key) {
        if let Some(notice) = self.calculator.handle(key) {
            self.notice = Some(notice);
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // A pending notice behaves like a modal dialog.
        if self.notice.is_some() {
            return;
        }
        let mut keys = Vec::new();
        ctx.input(|input| {
            for event in &input.events {
                match event {
                    egui::Event::Text(text) => {
                        for c in text.chars() {
                            match c {
                                '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%' => {
                                    keys.push(Key::Input(c));
                                }
                                '=' => keys.push(Key::Evaluate),
                                _ => {}
                            }
                        }
                    }
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => keys.push(Key::Evaluate),
                    egui::Event::Key {
                        key: egui::Key::Backspace,
                        pressed: true,
                        ..
                    } => keys.push(Key::Backspace),
                    egui::Event::Key {
                        key: egui::Key::Escape,
                        pressed: true,
                        ..
                    } => keys.push(Key::Clear),
                    _ => {}
                }
            }
        });
        for key in keys {
            self.dispatch(key);
        }
    }

    fn draw_display(&self, ui: &mut egui::Ui) {
        egui::Frame::new()
            .fill(theme::DISPLAY_BG)
            .corner_radius(4)
            .inner_margin(egui::Margin::symmetric(8, 16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let expression = self.calculator.expression();
                    let text = if expression.is_empty() { "0" } else { expression };
                    ui.label(
                        egui::RichText::new(text)
                            .size(28.0)
                            .strong()
                            .color(theme::LIGHT_TEXT),
                    );
                });
            });
    }

    fn draw_buttons(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        let spacing = 4.0;
        let button_width = (ui.available_width() - spacing * 3.0) / 4.0;
        for row in BUTTON_ROWS {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
                for label in row {
                    let (fill, text_color) = theme::button_colors(label);
                    let button = egui::Button::new(
                        egui::RichText::new(label)
                            .size(18.0)
                            .strong()
                            .color(text_color),
                    )
                    .fill(fill)
                    .corner_radius(4)
                    .min_size(egui::vec2(button_width, 44.0));
                    if ui.add(button).clicked() {
                        self.dispatch(key_for_label(label));
                    }
                }
            });
            ui.add_space(spacing);
        }
    }

    fn draw_history_panel(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Calculation History")
                .strong()
                .color(theme::LIGHT_TEXT),
        );
        egui::Frame::new()
            .fill(theme::DISPLAY_BG)
            .corner_radius(4)
            .inner_margin(egui::Margin::same(6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(ui.available_height());
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for record in self.calculator.ledger().all() {
                            ui.label(
                                egui::RichText::new(record.to_string())
                                    .color(theme::LIGHT_TEXT),
                            );
                        }
                    });
            });
    }

    fn draw_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        let (title, body) = match &notice {
            Notice::History(entries) => ("History", entries.join("\n")),
            Notice::HistoryEmpty => ("History", "No calculations yet!".to_string()),
            Notice::Error(message) => ("Error", message.clone()),
        };
        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(body);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::WINDOW_BG)
                    .inner_margin(egui::Margin::same(10)),
            )
            .show(ctx, |ui| {
                self.draw_display(ui);
                self.draw_buttons(ui);
                self.draw_history_panel(ui);
            });

        self.draw_notice(ctx);
    }
}
