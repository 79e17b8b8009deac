//! Remaining dashboard tabs - Alerts, Analytics, Settings, Subscription

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use tracing::debug;

use crate::config::AppConfig;
use crate::data::{AlertLog, Camera, ChartPoint, DataProvider, DistrictSlice};

use super::monitoring_tab::seed_color;
use super::{card_frame, status_chip, PRIMARY, SLATE, SLATE_DARK, SLATE_LIGHT};

// ========== ALERTS TAB ==========

pub struct AlertsTab {
    selected: Option<AlertLog>,
    search_text: String,
}

impl AlertsTab {
    pub fn new() -> Self {
        Self {
            selected: None,
            search_text: String::new(),
        }
    }

    pub fn selected(&self) -> Option<&AlertLog> {
        self.selected.as_ref()
    }

    pub fn select_alert(&mut self, alert: &AlertLog) {
        self.selected = Some(alert.clone());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn render(&mut self, ui: &mut egui::Ui, data: &dyn DataProvider) {
        // Controls row. Search and filters are presentational in the
        // demo build; the table always shows the full static list.
        card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.search_text)
                        .hint_text("🔍 Search by ID or Location...")
                        .desired_width(260.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let export = egui::Button::new(
                        egui::RichText::new("⬇ Export CSV").color(egui::Color32::WHITE),
                    )
                    .fill(PRIMARY);
                    if ui.add(export).clicked() {
                        debug!("Export CSV requested (demo stub)");
                    }
                    if ui.button("Filters").clicked() {
                        debug!("Filter picker requested (demo stub)");
                    }
                });
            });
        });

        ui.add_space(10.0);

        let mut clicked: Option<AlertLog> = None;

        card_frame().show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                // The shell already scrolls; let the table take its full height
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(80.0))
                .column(Column::auto().at_least(90.0))
                .column(Column::remainder())
                .column(Column::auto().at_least(80.0))
                .column(Column::auto().at_least(80.0))
                .column(Column::auto().at_least(110.0))
                .header(26.0, |mut header| {
                    for title in ["ID", "Timestamp", "Location", "Severity", "Status", "Actions"] {
                        header.col(|ui| {
                            ui.label(egui::RichText::new(title).small().strong().color(SLATE));
                        });
                    }
                })
                .body(|mut body| {
                    for alert in data.alerts() {
                        body.row(30.0, |mut row| {
                            row.col(|ui| {
                                ui.monospace(
                                    egui::RichText::new(&alert.id).small().color(SLATE),
                                );
                            });
                            row.col(|ui| {
                                ui.label(&alert.timestamp);
                            });
                            row.col(|ui| {
                                ui.label(egui::RichText::new(&alert.location).strong());
                            });
                            row.col(|ui| {
                                status_chip(ui, alert.severity.label(), alert.severity.color());
                            });
                            row.col(|ui| {
                                status_chip(ui, alert.status.label(), alert.status.color());
                            });
                            row.col(|ui| {
                                let view = egui::Button::new(
                                    egui::RichText::new("👁 View Proof")
                                        .small()
                                        .color(PRIMARY),
                                )
                                .frame(false);
                                if ui.add(view).clicked() {
                                    clicked = Some(alert.clone());
                                }
                            });
                        });
                    }
                });
        });

        if let Some(alert) = clicked {
            self.select_alert(&alert);
        }

        self.render_evidence_modal(ui.ctx());
    }

    fn render_evidence_modal(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.selected.clone() else {
            return;
        };

        // Backdrop absorbs clicks so they never reach the table below;
        // clicking it dismisses the modal.
        let screen = ctx.screen_rect();
        let backdrop = egui::Area::new(egui::Id::new("evidence_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let response = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));
                response
            });
        if backdrop.inner.clicked() {
            self.clear_selection();
            return;
        }

        let mut open = true;
        let mut dismiss = false;
        egui::Window::new("Detection Evidence")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .default_width(540.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Alert ID: {} • {}",
                        alert.id, alert.timestamp
                    ))
                    .small()
                    .color(SLATE),
                );
                ui.add_space(6.0);

                // Evidence frame
                let width = ui.available_width();
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(width, width * 9.0 / 16.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, egui::Rounding::same(6.0), egui::Color32::BLACK);

                match &alert.image_ref {
                    Some(image_ref) => {
                        painter.rect_filled(
                            rect.shrink(8.0),
                            egui::Rounding::same(4.0),
                            seed_color(image_ref),
                        );
                        painter.text(
                            rect.shrink(16.0).left_bottom(),
                            egui::Align2::LEFT_BOTTOM,
                            format!(
                                "{} Detected • Confidence: {}%",
                                alert.kind.label(),
                                alert.confidence
                            ),
                            egui::FontId::proportional(13.0),
                            egui::Color32::WHITE,
                        );
                        painter.text(
                            rect.shrink(16.0).right_top(),
                            egui::Align2::RIGHT_TOP,
                            image_ref,
                            egui::FontId::monospace(10.0),
                            egui::Color32::from_white_alpha(140),
                        );
                    }
                    None => {
                        painter.text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            "👁  No image data available",
                            egui::FontId::proportional(13.0),
                            egui::Color32::from_rgb(107, 114, 128),
                        );
                    }
                }

                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm = egui::Button::new(
                        egui::RichText::new("Confirm & Archive").color(egui::Color32::WHITE),
                    )
                    .fill(PRIMARY);
                    if ui.add(confirm).clicked() {
                        // Stub: there is no alert store to mutate
                        debug!("Alert {} confirmed (demo stub, closing only)", alert.id);
                        dismiss = true;
                    }
                    if ui.button("Mark as False Alarm").clicked() {
                        debug!(
                            "Alert {} marked false alarm (demo stub, closing only)",
                            alert.id
                        );
                        dismiss = true;
                    }
                });
            });

        if !open || dismiss {
            self.clear_selection();
        }
    }
}

// ========== ANALYTICS TAB ==========

pub struct AnalyticsTab;

impl AnalyticsTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, ui: &mut egui::Ui, data: &dyn DataProvider, config: &AppConfig) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Performance Analytics")
                    .strong()
                    .size(16.0)
                    .color(SLATE_DARK),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⬇ Export Report").clicked() {
                    debug!("Report export requested (demo stub)");
                }
            });
        });

        ui.add_space(10.0);

        ui.columns(2, |cols| {
            card_frame().show(&mut cols[0], |ui| {
                ui.label(egui::RichText::new("Alerts (Last 7 Days)").strong());
                ui.label(
                    egui::RichText::new("Frequency of illegal burning detections")
                        .small()
                        .color(SLATE),
                );
                ui.add_space(8.0);
                render_bar_chart(ui, data.weekly_alert_series());
            });

            // Deep analytics are a Pro-plan feature; the chart renders
            // behind a static locked veil on the Basic tier.
            let locked = config.plan.tier != "pro";
            let response = card_frame().show(&mut cols[1], |ui| {
                ui.label(egui::RichText::new("Pollution by District").strong());
                ui.label(
                    egui::RichText::new("Distribution of detected incidents")
                        .small()
                        .color(SLATE),
                );
                ui.add_space(8.0);
                render_district_chart(ui, data.district_distribution());
            });

            if locked {
                render_locked_overlay(&mut cols[1], response.response.rect);
            }
        });

        ui.add_space(12.0);

        card_frame().show(ui, |ui| {
            ui.label(egui::RichText::new("Air Quality Index (Today)").strong());
            ui.label(
                egui::RichText::new("PM2.5 readings around the monitored zones")
                    .small()
                    .color(SLATE),
            );
            ui.add_space(8.0);
            render_line_chart(ui, data.air_quality_series());
        });
    }
}

fn render_line_chart(ui: &mut egui::Ui, series: &[ChartPoint]) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 160.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let max = series.iter().map(|p| p.value).fold(1.0_f32, f32::max);
    let plot = rect.shrink2(egui::vec2(12.0, 18.0));
    let step = plot.width() / (series.len().max(2) - 1) as f32;

    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        egui::Stroke::new(1.0, SLATE_LIGHT),
    );

    let points: Vec<egui::Pos2> = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            egui::pos2(
                plot.min.x + step * i as f32,
                plot.max.y - (p.value / max) * plot.height(),
            )
        })
        .collect();

    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], egui::Stroke::new(2.0, PRIMARY));
    }

    for (point, sample) in points.iter().zip(series) {
        painter.circle_filled(*point, 3.0, PRIMARY);
        painter.text(
            egui::pos2(point.x, plot.max.y + 6.0),
            egui::Align2::CENTER_TOP,
            &sample.label,
            egui::FontId::proportional(10.0),
            SLATE,
        );
    }

    // Call out the spike reading
    if let Some((peak_pos, peak)) = points
        .iter()
        .zip(series)
        .max_by(|a, b| a.1.value.total_cmp(&b.1.value))
    {
        painter.text(
            *peak_pos - egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{:.0}", peak.value),
            egui::FontId::proportional(10.0),
            SLATE_DARK,
        );
    }
}

fn render_bar_chart(ui: &mut egui::Ui, series: &[ChartPoint]) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 220.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let max = series.iter().map(|p| p.value).fold(1.0_f32, f32::max);
    let plot = rect.shrink2(egui::vec2(8.0, 18.0));
    let slot = plot.width() / series.len().max(1) as f32;
    let bar_width = (slot * 0.55).min(40.0);

    // Baseline
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        egui::Stroke::new(1.0, SLATE_LIGHT),
    );

    for (i, point) in series.iter().enumerate() {
        let x = plot.min.x + slot * (i as f32 + 0.5);
        let h = (point.value / max) * plot.height();
        let bar = egui::Rect::from_min_max(
            egui::pos2(x - bar_width / 2.0, plot.max.y - h),
            egui::pos2(x + bar_width / 2.0, plot.max.y),
        );
        painter.rect_filled(
            bar,
            egui::Rounding {
                nw: 4.0,
                ne: 4.0,
                sw: 0.0,
                se: 0.0,
            },
            PRIMARY,
        );
        painter.text(
            egui::pos2(x, bar.min.y - 4.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{}", point.value as i32),
            egui::FontId::proportional(10.0),
            SLATE,
        );
        painter.text(
            egui::pos2(x, plot.max.y + 6.0),
            egui::Align2::CENTER_TOP,
            &point.label,
            egui::FontId::proportional(10.0),
            SLATE,
        );
    }
}

fn render_district_chart(ui: &mut egui::Ui, slices: &[DistrictSlice]) {
    let total: f32 = slices.iter().map(|s| s.value).sum();

    for slice in slices {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("⬤").small().color(slice.fill()));
            ui.label(egui::RichText::new(&slice.district).small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0}%", slice.value))
                        .small()
                        .strong()
                        .color(SLATE_DARK),
                );
            });
        });

        // Proportional bar
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 8.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::Rounding::same(4.0), SLATE_LIGHT);
        let filled = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * (slice.value / total.max(1.0)), rect.height()),
        );
        painter.rect_filled(filled, egui::Rounding::same(4.0), slice.fill());
        ui.add_space(6.0);
    }

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("{:.0}%", total))
                .size(20.0)
                .strong()
                .color(SLATE_DARK),
        );
        ui.label(egui::RichText::new("of incidents attributed").small().color(SLATE));
    });
}

fn render_locked_overlay(ui: &mut egui::Ui, card_rect: egui::Rect) {
    let painter = ui.painter();
    painter.rect_filled(
        card_rect,
        egui::Rounding::same(10.0),
        egui::Color32::from_rgba_unmultiplied(248, 250, 252, 235),
    );
    painter.text(
        card_rect.center() - egui::vec2(0.0, 26.0),
        egui::Align2::CENTER_CENTER,
        "🔒",
        egui::FontId::proportional(26.0),
        SLATE_DARK,
    );
    painter.text(
        card_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Deep analytics is a Pro feature",
        egui::FontId::proportional(13.0),
        SLATE_DARK,
    );

    let button_rect = egui::Rect::from_center_size(
        card_rect.center() + egui::vec2(0.0, 34.0),
        egui::vec2(140.0, 30.0),
    );
    let upgrade = ui.put(
        button_rect,
        egui::Button::new(egui::RichText::new("Upgrade to Pro").color(egui::Color32::WHITE))
            .fill(PRIMARY),
    );
    if upgrade.clicked() {
        debug!("Upgrade CTA clicked (demo stub)");
    }
}

// ========== SETTINGS TAB ==========

pub struct SettingsTab {
    full_name: String,
    email: String,
    bot_token: String,
    chat_id: String,
}

impl SettingsTab {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            full_name: "Admin User".to_string(),
            email: "admin@sentinel-ai.com".to_string(),
            bot_token: config.alerts.bot_token.clone(),
            chat_id: config.alerts.chat_id.clone(),
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, data: &dyn DataProvider, config: &AppConfig) {
        // Profile
        card_frame().show(ui, |ui| {
            ui.label(egui::RichText::new("👤 User Profile").strong().color(SLATE_DARK));
            ui.add_space(8.0);
            egui::Grid::new("profile_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Full Name");
                    ui.text_edit_singleline(&mut self.full_name);
                    ui.end_row();
                    ui.label("Email Address");
                    ui.text_edit_singleline(&mut self.email);
                    ui.end_row();
                });
            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let save = egui::Button::new(
                    egui::RichText::new("💾 Save Changes").color(egui::Color32::WHITE),
                )
                .fill(PRIMARY);
                if ui.add(save).clicked() {
                    // Nothing durable exists behind this form
                    debug!("Profile save requested (demo stub)");
                }
            });
        });

        ui.add_space(12.0);

        // Telegram notification stub
        card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new("🔔 Notification Settings")
                    .strong()
                    .color(SLATE_DARK),
            );
            ui.label(
                egui::RichText::new(
                    "Configure your Telegram bot to receive real-time alerts.",
                )
                .small()
                .color(SLATE),
            );
            ui.add_space(8.0);
            egui::Grid::new("telegram_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Telegram Bot Token");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.bot_token)
                            .password(true)
                            .hint_text("123456789:ABCdef..."),
                    );
                    ui.end_row();
                    ui.label("Chat ID / Channel ID");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.chat_id)
                            .hint_text("@my_channel_id"),
                    );
                    ui.end_row();
                });
        });

        ui.add_space(12.0);

        // Camera management
        card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("🎥 Camera Setup").strong().color(SLATE_DARK),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "Cameras: {} / {} (Basic Plan Limit)",
                            data.cameras().len(),
                            config.plan.camera_limit
                        ))
                        .small()
                        .color(SLATE),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("+ Add Camera").color(PRIMARY),
                            )
                            .frame(false),
                        )
                        .clicked()
                    {
                        debug!("Add camera requested (demo stub)");
                    }
                });
            });

            ui.add_space(6.0);

            for camera in data.cameras() {
                ui.separator();
                self.render_camera_row(ui, camera, config);
            }
        });
    }

    fn render_camera_row(&self, ui: &mut egui::Ui, camera: &Camera, config: &AppConfig) {
        ui.horizontal(|ui| {
            // Thumbnail swatch
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(48.0, 30.0), egui::Sense::hover());
            ui.painter().rect_filled(
                rect,
                egui::Rounding::same(4.0),
                seed_color(&camera.thumbnail_seed),
            );

            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&camera.name).strong());
                ui.label(
                    egui::RichText::new(rtsp_preview(&config.plan.rtsp_base, &camera.id))
                        .small()
                        .monospace()
                        .color(SLATE),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑").clicked() {
                    debug!("Delete requested for {} (demo stub)", camera.id);
                }
                if ui.button("✏").clicked() {
                    debug!("Edit requested for {} (demo stub)", camera.id);
                }
            });
        });
    }
}

/// Synthetic stream URL shown in the camera list, derived from the
/// camera's numeric suffix the way the marketing demo fakes it.
pub fn rtsp_preview(base: &str, camera_id: &str) -> String {
    let suffix = camera_id.chars().last().unwrap_or('0');
    format!("{base}{suffix}/stream")
}

// ========== SUBSCRIPTION TAB ==========

pub struct SubscriptionTab;

impl SubscriptionTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, ui: &mut egui::Ui, data: &dyn DataProvider, config: &AppConfig) {
        ui.label(
            egui::RichText::new("Subscription & Billing")
                .strong()
                .size(16.0)
                .color(SLATE_DARK),
        );
        ui.add_space(10.0);

        // Current plan banner
        card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                status_chip(ui, "CURRENT PLAN", PRIMARY);
                ui.label(
                    egui::RichText::new("Basic Plan")
                        .size(20.0)
                        .strong()
                        .color(SLATE_DARK),
                );
            });
            ui.label(
                egui::RichText::new("Valid until Dec 31, 2024 • Auto-renewal on")
                    .small()
                    .color(SLATE),
            );
            ui.add_space(8.0);

            let used = data.cameras().len();
            let limit = config.plan.camera_limit;
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Camera Usage").small().strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{used} / {limit} Cameras"))
                            .small()
                            .color(SLATE),
                    );
                });
            });
            ui.add(
                egui::ProgressBar::new(usage_fraction(used, limit))
                    .desired_height(8.0)
                    .fill(PRIMARY),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Manage Billing").clicked() {
                    debug!("Billing portal requested (demo stub)");
                }
                if ui.button("Contact Support").clicked() {
                    debug!("Support contact requested (demo stub)");
                }
            });
        });

        ui.add_space(12.0);

        // Plan comparison
        ui.columns(2, |cols| {
            plan_card(
                &mut cols[0],
                "Basic Plan",
                "SMEs, Single Factories, Residential Areas",
                "Affordable",
                "Easy to Deploy",
                &[
                    "< 50 Cameras",
                    "Fire/Smoke & Illegal Waste Burning Detection",
                    "Real-time Telegram Alerts",
                    "Event Logging & Standard Video Proof Storage",
                ],
                PlanCta::Current,
            );
            plan_card(
                &mut cols[1],
                "Pro Plan",
                "Industrial Zones, Smart Cities, Major Infrastructure",
                "Enterprise Pricing",
                "For Large Scale & Distributed Architecture",
                &[
                    "Unlimited Cameras (Supports Distributed Systems)",
                    "Deep Analytics & Reports (By Area, Time, Risk Level)",
                    "Custom Dashboard & Multi-channel Alerts",
                    "API Integration (GIS, Urban Management)",
                    "User Role Management (Decentralized)",
                ],
                PlanCta::ContactSales,
            );
        });
    }
}

/// Fraction of the camera allowance in use, clamped for the meter.
pub fn usage_fraction(used: usize, limit: usize) -> f32 {
    if limit == 0 {
        return 1.0;
    }
    (used as f32 / limit as f32).clamp(0.0, 1.0)
}

enum PlanCta {
    Current,
    ContactSales,
}

fn plan_card(
    ui: &mut egui::Ui,
    name: &str,
    audience: &str,
    price: &str,
    price_note: &str,
    features: &[&str],
    cta: PlanCta,
) {
    let active = matches!(cta, PlanCta::Current);
    let frame = if active {
        card_frame().stroke(egui::Stroke::new(2.0, PRIMARY))
    } else {
        card_frame()
    };

    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(name)
                    .size(17.0)
                    .strong()
                    .color(SLATE_DARK),
            );
            if active {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    status_chip(ui, "ACTIVE", PRIMARY);
                });
            }
        });
        ui.label(egui::RichText::new(audience).small().color(SLATE));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(price).size(19.0).strong().color(SLATE_DARK));
        ui.label(egui::RichText::new(price_note).small().color(SLATE));
        ui.add_space(8.0);

        for feature in features {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("✔").color(PRIMARY));
                ui.label(egui::RichText::new(*feature).small());
            });
        }

        ui.add_space(10.0);
        match cta {
            PlanCta::Current => {
                ui.add_enabled(
                    false,
                    egui::Button::new(egui::RichText::new("Current Plan").color(PRIMARY))
                        .fill(PRIMARY.gamma_multiply(0.12))
                        .min_size(egui::vec2(ui.available_width(), 30.0)),
                );
            }
            PlanCta::ContactSales => {
                let upgrade = egui::Button::new(
                    egui::RichText::new("Contact Sales to Upgrade")
                        .color(egui::Color32::WHITE),
                )
                .fill(SLATE_DARK)
                .min_size(egui::vec2(ui.available_width(), 30.0));
                if ui.add(upgrade).clicked() {
                    debug!("Sales contact requested (demo stub)");
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataProvider, StaticDataProvider};

    // ----- alert selection -----

    #[test]
    fn selection_starts_empty() {
        let tab = AlertsTab::new();
        assert!(tab.selected().is_none());
    }

    #[test]
    fn selecting_a_row_holds_that_record() {
        let provider = StaticDataProvider;
        let mut tab = AlertsTab::new();
        let alert = &provider.alerts()[1];

        tab.select_alert(alert);
        assert_eq!(tab.selected(), Some(alert));
    }

    #[test]
    fn any_close_path_returns_to_no_selection() {
        let provider = StaticDataProvider;
        let mut tab = AlertsTab::new();
        tab.select_alert(&provider.alerts()[0]);
        tab.clear_selection();
        assert!(tab.selected().is_none());

        // Clearing twice stays empty
        tab.clear_selection();
        assert!(tab.selected().is_none());
    }

    #[test]
    fn reselecting_replaces_the_previous_record() {
        let provider = StaticDataProvider;
        let mut tab = AlertsTab::new();
        tab.select_alert(&provider.alerts()[0]);
        tab.select_alert(&provider.alerts()[3]);
        assert_eq!(tab.selected().map(|a| a.id.as_str()), Some("AL-1020"));
    }

    // ----- settings helpers -----

    #[test]
    fn rtsp_preview_uses_the_camera_suffix() {
        assert_eq!(
            rtsp_preview("rtsp://192.168.1.10", "CAM-01"),
            "rtsp://192.168.1.101/stream"
        );
        assert_eq!(
            rtsp_preview("rtsp://192.168.1.10", "CAM-04"),
            "rtsp://192.168.1.104/stream"
        );
    }

    // ----- subscription helpers -----

    #[test]
    fn usage_fraction_matches_the_demo_plan() {
        assert!((usage_fraction(4, 50) - 0.08).abs() < f32::EPSILON);
    }

    #[test]
    fn usage_fraction_saturates() {
        assert_eq!(usage_fraction(80, 50), 1.0);
        assert_eq!(usage_fraction(1, 0), 1.0);
    }
}
