use egui::Color32;

pub const WINDOW_BG: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const DISPLAY_BG: Color32 = Color32::from_rgb(0x34, 0x49, 0x5e);
pub const OPERATOR_BG: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);
pub const SPECIAL_BG: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
pub const NUMBER_BG: Color32 = Color32::from_rgb(0xec, 0xf0, 0xf1);
pub const LIGHT_TEXT: Color32 = Color32::WHITE;
pub const DARK_TEXT: Color32 = WINDOW_BG;

/// Fill and text colors for a calculator button: red for operators, blue
/// for the special keys, light for digits.
pub fn button_colors(label: &str) -> (Color32, Color32) {
    match label {
        "/" | "*" | "-" | "+" | "=" => (OPERATOR_BG, LIGHT_TEXT),
        "C" | "←" | "%" | "H" => (SPECIAL_BG, LIGHT_TEXT),
        _ => (NUMBER_BG, DARK_TEXT),
    }
}
