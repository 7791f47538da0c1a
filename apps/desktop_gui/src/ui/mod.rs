//! UI layer: the eframe app shell and the calculator palette.

pub mod app;
pub mod theme;

pub use app::CalculatorApp;
