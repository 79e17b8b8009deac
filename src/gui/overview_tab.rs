//! Overview tab: stat cards, recent activity and monitored zones

use eframe::egui;

use crate::data::{AlertLog, DataProvider};

use super::dashboard::DashboardTab;
use super::{card_frame, status_chip, DANGER, INFO, PRIMARY, SLATE, SLATE_DARK, SLATE_LIGHT, WARNING};

/// The activity feed shows at most the first three alerts, in table
/// order, unmodified.
pub fn recent_feed(alerts: &[AlertLog]) -> &[AlertLog] {
    &alerts[..alerts.len().min(3)]
}

pub struct OverviewTab;

impl OverviewTab {
    pub fn new() -> Self {
        Self
    }

    /// Renders the panel; returns a tab to jump to when the user asks
    /// for the full activity log.
    pub fn render(&mut self, ui: &mut egui::Ui, data: &dyn DataProvider) -> Option<DashboardTab> {
        let mut jump = None;

        // Stat cards
        ui.columns(4, |cols| {
            stat_card(
                &mut cols[0],
                "Total Alerts",
                "1,284",
                "Lifetime Detections",
                WARNING,
                Some("+12% this week"),
            );
            stat_card(
                &mut cols[1],
                "Active Cameras",
                "24/25",
                "1 Offline",
                PRIMARY,
                None,
            );
            stat_card(
                &mut cols[2],
                "System Health",
                "99.9%",
                "Operational",
                INFO,
                None,
            );
            stat_card(
                &mut cols[3],
                "Today's Violations",
                "3",
                "Requires Action",
                DANGER,
                None,
            );
        });

        ui.add_space(12.0);

        ui.columns(2, |cols| {
            // Recent Activity
            card_frame().show(&mut cols[0], |ui| {
                ui.label(
                    egui::RichText::new("📈 Recent Activity")
                        .strong()
                        .color(SLATE_DARK),
                );
                ui.add_space(8.0);

                for alert in recent_feed(data.alerts()) {
                    render_activity_row(ui, alert);
                }

                ui.add_space(4.0);
                let view_all = egui::Button::new(
                    egui::RichText::new("View All Activity").color(PRIMARY).strong(),
                )
                .frame(false)
                .min_size(egui::vec2(ui.available_width(), 26.0));
                if ui.add(view_all).clicked() {
                    jump = Some(DashboardTab::Alerts);
                }
            });

            // Monitored zones mini map
            card_frame().show(&mut cols[1], |ui| {
                ui.label(
                    egui::RichText::new("📍 Monitored Zones")
                        .strong()
                        .color(SLATE_DARK),
                );
                ui.add_space(8.0);
                render_zone_map(ui);
            });
        });

        jump
    }
}

fn render_activity_row(ui: &mut egui::Ui, alert: &AlertLog) {
    egui::Frame::none()
        .inner_margin(egui::Margin::symmetric(4.0, 6.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("⚠")
                        .size(16.0)
                        .color(alert.kind.color()),
                );
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} Detected at {}",
                                alert.kind.label(),
                                alert.location
                            ))
                            .strong(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(&alert.timestamp).small().color(SLATE),
                                );
                            },
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "AI Confidence: {}%",
                                alert.confidence
                            ))
                            .small()
                            .color(SLATE),
                        );
                        status_chip(ui, alert.status.label(), alert.status.color());
                    });
                });
            });
        });
    ui.separator();
}

fn render_zone_map(ui: &mut egui::Ui) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 210.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, egui::Rounding::same(8.0), SLATE_LIGHT);

    // Dot grid backdrop
    let spacing = 20.0;
    let mut y = rect.min.y + spacing / 2.0;
    while y < rect.max.y {
        let mut x = rect.min.x + spacing / 2.0;
        while x < rect.max.x {
            painter.circle_filled(
                egui::pos2(x, y),
                1.5,
                egui::Color32::from_rgb(203, 213, 225),
            );
            x += spacing;
        }
        y += spacing;
    }

    // Zone markers: two healthy, one alerting
    let zone_a = rect.min + egui::vec2(rect.width() * 0.25, rect.height() * 0.33);
    let zone_b = rect.min + egui::vec2(rect.width() * 0.33, rect.height() * 0.75);
    let alert_zone = rect.min + egui::vec2(rect.width() * 0.66, rect.height() * 0.5);

    for pos in [zone_a, zone_b] {
        painter.circle_stroke(pos, 8.0, egui::Stroke::new(2.0, PRIMARY.gamma_multiply(0.3)));
        painter.circle_filled(pos, 4.5, PRIMARY);
    }

    painter.circle_stroke(
        alert_zone,
        9.0,
        egui::Stroke::new(2.0, DANGER.gamma_multiply(0.35)),
    );
    painter.circle_filled(alert_zone, 4.5, DANGER);
    painter.text(
        alert_zone + egui::vec2(12.0, -12.0),
        egui::Align2::LEFT_CENTER,
        "Alert!",
        egui::FontId::proportional(11.0),
        DANGER,
    );

    painter.text(
        rect.max - egui::vec2(8.0, 6.0),
        egui::Align2::RIGHT_BOTTOM,
        "Hanoi, VN",
        egui::FontId::proportional(10.0),
        SLATE,
    );
}

fn stat_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    subtitle: &str,
    accent: egui::Color32,
    trend: Option<&str>,
) {
    card_frame().show(ui, |ui| {
        ui.label(egui::RichText::new(title).small().color(SLATE));
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(22.0)
                    .strong()
                    .color(SLATE_DARK),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("⬤").color(accent.gamma_multiply(0.8)));
            });
        });
        ui.horizontal(|ui| {
            if let Some(trend) = trend {
                ui.label(egui::RichText::new(trend).small().strong().color(PRIMARY));
            }
            ui.label(egui::RichText::new(subtitle).small().color(SLATE));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataProvider, StaticDataProvider};

    #[test]
    fn feed_shows_the_first_three_alerts_in_order() {
        let provider = StaticDataProvider;
        let feed = recent_feed(provider.alerts());
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].id, "AL-1023");
        assert_eq!(feed[0].confidence, 98);
        assert_eq!(feed[1].id, "AL-1022");
        assert_eq!(feed[2].id, "AL-1021");
        assert_eq!(feed[2].confidence, 88);
    }

    #[test]
    fn feed_handles_short_tables() {
        let provider = StaticDataProvider;
        let one = &provider.alerts()[..1];
        assert_eq!(recent_feed(one).len(), 1);
        assert!(recent_feed(&[]).is_empty());
    }

    #[test]
    fn feed_entries_are_untouched_copies_of_the_table() {
        let provider = StaticDataProvider;
        let feed = recent_feed(provider.alerts());
        assert_eq!(feed, &provider.alerts()[..3]);
    }
}
