//! Sign-in stub. There is no credential check in the demo build; any
//! submission lands on the dashboard.

use eframe::egui;
use tracing::info;

use crate::app::RouteAction;

use super::{card_frame, PRIMARY, SLATE, SLATE_DARK};

#[derive(Debug, Default)]
pub struct AuthScreen {
    email: String,
    password: String,
}

impl AuthScreen {
    pub fn render(&mut self, ctx: &egui::Context) -> Option<RouteAction> {
        let mut route = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_rgb(243, 244, 246)))
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.2);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(360.0);

                    ui.label(egui::RichText::new("🛡").size(34.0).color(PRIMARY));
                    ui.label(
                        egui::RichText::new("Sign in to your command center")
                            .size(18.0)
                            .strong()
                            .color(SLATE_DARK),
                    );
                    ui.add_space(16.0);

                    card_frame().show(ui, |ui| {
                        ui.label(egui::RichText::new("Email Address").small().color(SLATE));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.email)
                                .hint_text("admin@sentinel-ai.com")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new("Password").small().color(SLATE));
                        ui.add(
                            egui::TextEdit::singleline(&mut self.password)
                                .password(true)
                                .hint_text("••••••••")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(14.0);

                        let sign_in = egui::Button::new(
                            egui::RichText::new("Sign In")
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .fill(PRIMARY)
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(ui.available_width(), 36.0));
                        if ui.add(sign_in).clicked() {
                            let who = if self.email.trim().is_empty() {
                                "operator"
                            } else {
                                self.email.trim()
                            };
                            info!("Authentication stub: accepting sign-in for {}", who);
                            route = Some(RouteAction::Authenticate);
                        }

                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new("Demo build: any credentials are accepted.")
                                .small()
                                .color(SLATE),
                        );
                    });

                    ui.add_space(12.0);
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("← Back to site").small().color(SLATE),
                            )
                            .frame(false),
                        )
                        .clicked()
                    {
                        route = Some(RouteAction::Back);
                    }
                });
            });

        route
    }
}
