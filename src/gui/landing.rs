//! Marketing landing page: navbar, hero, carousel, features, pricing

use chrono::{Datelike, Utc};
use eframe::egui;
use std::time::Instant;
use tracing::debug;

use crate::app::RouteAction;

use super::widgets::{Carousel, FeedbackWidget, SLIDES};
use super::{card_frame, PRIMARY, PRIMARY_DARK, SLATE, SLATE_DARK, SLATE_LIGHT};

/// Scroll distance after which the navbar switches to the elevated
/// treatment.
const NAV_ELEVATION_THRESHOLD: f32 = 10.0;

pub struct LandingPage {
    carousel: Carousel,
    feedback: FeedbackWidget,
    scrolled: bool,
}

impl LandingPage {
    pub fn new() -> Self {
        Self {
            carousel: Carousel::new(SLIDES.len(), Instant::now()),
            feedback: FeedbackWidget::new(),
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn set_scroll_offset(&mut self, offset_y: f32) {
        self.scrolled = offset_y > NAV_ELEVATION_THRESHOLD;
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn render(&mut self, ctx: &egui::Context) -> Option<RouteAction> {
        let now = Instant::now();
        self.carousel.advance_if_due(now);
        ctx.request_repaint_after(self.carousel.time_to_next(now));

        let mut route = None;

        let nav_frame = egui::Frame::none()
            .fill(egui::Color32::WHITE)
            .inner_margin(egui::Margin::symmetric(24.0, 10.0))
            .shadow(if self.scrolled {
                egui::epaint::Shadow {
                    offset: egui::vec2(0.0, 2.0),
                    blur: 8.0,
                    spread: 0.0,
                    color: egui::Color32::from_black_alpha(26),
                }
            } else {
                egui::epaint::Shadow::NONE
            });

        egui::TopBottomPanel::top("landing_nav")
            .frame(nav_frame)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new("🛡").size(20.0).color(PRIMARY));
                    ui.label(
                        egui::RichText::new("CLEAN-AIR ")
                            .strong()
                            .size(16.0)
                            .color(SLATE_DARK),
                    );
                    ui.label(
                        egui::RichText::new("SENTINEL")
                            .strong()
                            .size(16.0)
                            .color(PRIMARY),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let access = egui::Button::new(
                            egui::RichText::new("Access Dashboard")
                                .color(egui::Color32::WHITE),
                        )
                        .fill(PRIMARY)
                        .rounding(egui::Rounding::same(14.0));
                        if ui.add(access).clicked() {
                            route = Some(RouteAction::RequestLogin);
                        }

                        for anchor in ["Pricing", "How it Works", "Features"] {
                            ui.add(
                                egui::Button::new(
                                    egui::RichText::new(anchor).small().color(SLATE),
                                )
                                .frame(false),
                            );
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(action) = self.render_body(ui, now) {
                        route = Some(action);
                    }
                });
                self.set_scroll_offset(output.state.offset.y);
            });

        route
    }

    fn render_body(&mut self, ui: &mut egui::Ui, now: Instant) -> Option<RouteAction> {
        let mut route = None;

        // Hero
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            egui::Frame::none()
                .fill(PRIMARY.gamma_multiply(0.08))
                .stroke(egui::Stroke::new(1.0, PRIMARY.gamma_multiply(0.35)))
                .rounding(egui::Rounding::same(12.0))
                .inner_margin(egui::Margin::symmetric(12.0, 4.0))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("● New: YOLOv8 Integration Live")
                            .small()
                            .color(PRIMARY_DARK),
                    );
                });

            ui.add_space(18.0);
            ui.label(
                egui::RichText::new("AI-Powered Illegal")
                    .size(40.0)
                    .strong()
                    .color(SLATE_DARK),
            );
            ui.label(
                egui::RichText::new("Waste Burning Detection")
                    .size(40.0)
                    .strong()
                    .color(PRIMARY),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(
                    "Protecting Urban Air Quality with Real-time Monitoring & Instant \
                     Telegram Alerts. Identify pollution sources instantly without new hardware.",
                )
                .size(15.0)
                .color(SLATE),
            );

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 300.0).max(0.0) / 2.0);
                let get_started = egui::Button::new(
                    egui::RichText::new("Get Started  →")
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(PRIMARY)
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(150.0, 40.0));
                if ui.add(get_started).clicked() {
                    route = Some(RouteAction::RequestLogin);
                }

                let demo = egui::Button::new(egui::RichText::new("▶ Watch Demo").color(SLATE))
                    .rounding(egui::Rounding::same(8.0))
                    .min_size(egui::vec2(130.0, 40.0));
                if ui.add(demo).clicked() {
                    debug!("Demo video requested (demo stub)");
                }
            });

            ui.add_space(28.0);
            self.carousel.render(ui, now);
        });

        ui.add_space(40.0);

        // Features
        section_heading(ui, "Why Clean-Air Sentinel?");
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Advanced technology meeting critical environmental needs.")
                    .small()
                    .color(SLATE),
            );
        });
        ui.add_space(16.0);
        ui.columns(3, |cols| {
            feature_card(
                &mut cols[0],
                "👁",
                "AI Deep Learning",
                "Uses YOLOv8 to detect smoke/fire in noisy urban environments with 99% \
                 accuracy, filtering out fog and steam.",
            );
            feature_card(
                &mut cols[1],
                "⚡",
                "Real-time Alerts",
                "Instant notifications via Telegram with high-res image evidence, location \
                 tagging, and confidence scores.",
            );
            feature_card(
                &mut cols[2],
                "🖥",
                "No New Hardware",
                "100% Software solution. Connects seamlessly with existing RTSP/ONVIF city \
                 surveillance cameras.",
            );
        });

        ui.add_space(40.0);

        // How it works
        section_heading(ui, "How It Works");
        ui.add_space(16.0);
        ui.columns(3, |cols| {
            step_card(&mut cols[0], "1", "Connect Cameras", "Link existing RTSP streams to our secure local gateway.");
            step_card(&mut cols[1], "2", "AI Analysis", "Deep learning algorithms process video feeds 24/7 for smoke patterns.");
            step_card(&mut cols[2], "3", "Receive Alerts", "Authorities receive instant verified alerts to dispatch response teams.");
        });

        ui.add_space(40.0);

        // Pricing
        egui::Frame::none()
            .fill(SLATE_DARK)
            .inner_margin(egui::Margin::symmetric(32.0, 32.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Simple, Transparent Pricing")
                            .size(24.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new("Choose the plan that fits your monitoring scale.")
                            .small()
                            .color(SLATE),
                    );
                });
                ui.add_space(20.0);
                ui.columns(2, |cols| {
                    if pricing_card(
                        &mut cols[0],
                        "Basic",
                        "For SMEs & Small Residential Areas",
                        "$49",
                        &[
                            "Up to 10 Cameras",
                            "Standard Detection Speed",
                            "Email Support",
                            "7-day Archive",
                        ],
                        "Start Free Trial",
                        false,
                    ) {
                        route = Some(RouteAction::RequestLogin);
                    }
                    if pricing_card(
                        &mut cols[1],
                        "Pro",
                        "For Industrial Zones & Cities",
                        "$199",
                        &[
                            "Unlimited Cameras",
                            "Real-time Telegram Alerts",
                            "24/7 Priority Support",
                            "Advanced Analytics & API",
                        ],
                        "Contact Sales",
                        true,
                    ) {
                        debug!("Sales contact requested from pricing (demo stub)");
                    }
                });
            });

        ui.add_space(32.0);

        // Feedback
        ui.vertical_centered(|ui| {
            ui.set_max_width(420.0);
            self.feedback.render(ui, false);
        });

        ui.add_space(32.0);

        // Footer
        egui::Frame::none()
            .fill(SLATE_LIGHT)
            .inner_margin(egui::Margin::symmetric(32.0, 20.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("🛡").color(SLATE));
                    ui.label(
                        egui::RichText::new("CLEAN-AIR SENTINEL")
                            .strong()
                            .color(SLATE_DARK),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for (label, url) in [
                            ("Contact", "https://sentinel-ai.example/contact"),
                            ("Terms", "https://sentinel-ai.example/terms"),
                            ("Privacy", "https://sentinel-ai.example/privacy"),
                        ] {
                            if ui
                                .add(
                                    egui::Button::new(
                                        egui::RichText::new(label).small().color(SLATE),
                                    )
                                    .frame(false),
                                )
                                .clicked()
                            {
                                let _ = open::that(url);
                            }
                        }
                    });
                });
                ui.label(
                    egui::RichText::new(format!(
                        "© {} Clean-Air Sentinel. All rights reserved.",
                        Utc::now().year()
                    ))
                    .small()
                    .color(SLATE),
                );
            });

        route
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(24.0)
                .strong()
                .color(SLATE_DARK),
        );
    });
}

fn feature_card(ui: &mut egui::Ui, icon: &str, title: &str, body: &str) {
    card_frame().show(ui, |ui| {
        ui.label(egui::RichText::new(icon).size(24.0));
        ui.add_space(6.0);
        ui.label(egui::RichText::new(title).strong().size(16.0).color(SLATE_DARK));
        ui.add_space(4.0);
        ui.label(egui::RichText::new(body).small().color(SLATE));
    });
}

fn step_card(ui: &mut egui::Ui, number: &str, title: &str, body: &str) {
    ui.vertical_centered(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(44.0, 44.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.circle_filled(rect.center(), 22.0, PRIMARY);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            number,
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(title).strong().color(SLATE_DARK));
        ui.label(egui::RichText::new(body).small().color(SLATE));
    });
}

/// Renders a pricing card; returns true when its call-to-action fires.
fn pricing_card(
    ui: &mut egui::Ui,
    name: &str,
    audience: &str,
    monthly_price: &str,
    features: &[&str],
    cta: &str,
    popular: bool,
) -> bool {
    let mut clicked = false;
    let fill = if popular {
        PRIMARY_DARK.gamma_multiply(0.85)
    } else {
        egui::Color32::from_rgb(30, 41, 59)
    };

    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(14.0))
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(name)
                        .size(19.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                if popular {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        egui::Frame::none()
                            .fill(PRIMARY)
                            .rounding(egui::Rounding::same(10.0))
                            .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new("POPULAR")
                                        .small()
                                        .strong()
                                        .color(egui::Color32::WHITE),
                                );
                            });
                    });
                }
            });
            ui.label(egui::RichText::new(audience).small().color(SLATE));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(monthly_price)
                        .size(30.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(egui::RichText::new("/mo").color(SLATE));
            });
            ui.add_space(8.0);
            for feature in features {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("✔").color(PRIMARY));
                    ui.label(
                        egui::RichText::new(*feature)
                            .small()
                            .color(egui::Color32::from_rgb(203, 213, 225)),
                    );
                });
            }
            ui.add_space(12.0);
            let button = egui::Button::new(
                egui::RichText::new(cta).strong().color(if popular {
                    PRIMARY_DARK
                } else {
                    egui::Color32::WHITE
                }),
            )
            .fill(if popular {
                egui::Color32::WHITE
            } else {
                egui::Color32::TRANSPARENT
            })
            .stroke(egui::Stroke::new(1.0, SLATE))
            .min_size(egui::vec2(ui.available_width(), 34.0));
            if ui.add(button).clicked() {
                clicked = true;
            }
        });

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_elevates_past_ten_pixels() {
        let mut page = LandingPage::new();
        assert!(!page.is_scrolled());

        page.set_scroll_offset(10.0);
        assert!(!page.is_scrolled());

        page.set_scroll_offset(10.5);
        assert!(page.is_scrolled());

        page.set_scroll_offset(0.0);
        assert!(!page.is_scrolled());
    }

    #[test]
    fn fresh_pages_start_on_the_first_slide() {
        let page = LandingPage::new();
        assert_eq!(page.carousel().index(), 0);
        assert_eq!(page.carousel().slide_count(), SLIDES.len());
    }
}
