//! GUI screens, tabs and shared widgets

pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod monitoring_tab;
pub mod overview_tab;
pub mod tabs;
pub mod widgets;

pub use auth::AuthScreen;
pub use dashboard::{DashboardState, DashboardTab};
pub use landing::LandingPage;

use egui::Color32;

// Brand palette, shared across screens
pub const PRIMARY: Color32 = Color32::from_rgb(16, 185, 129);
pub const PRIMARY_DARK: Color32 = Color32::from_rgb(5, 150, 105);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(245, 158, 11);
pub const INFO: Color32 = Color32::from_rgb(59, 130, 246);
pub const SLATE: Color32 = Color32::from_rgb(100, 116, 139);
pub const SLATE_LIGHT: Color32 = Color32::from_rgb(241, 245, 249);
pub const SLATE_DARK: Color32 = Color32::from_rgb(15, 23, 42);
pub const CARD_BORDER: Color32 = Color32::from_rgb(226, 232, 240);

/// Card chrome used by every panel: white surface, hairline border,
/// rounded corners.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, CARD_BORDER))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
}

/// Small rounded status chip, e.g. severity and delivery badges.
pub fn status_chip(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(color).small().strong());
        });
}
