//! Dashboard shell: sidebar, header chrome and tab dispatch

use chrono::Local;
use eframe::egui;

use crate::app::RouteAction;
use crate::config::AppConfig;
use crate::data::DataProvider;

use super::monitoring_tab::MonitoringTab;
use super::overview_tab::OverviewTab;
use super::tabs::{AlertsTab, AnalyticsTab, SettingsTab, SubscriptionTab};
use super::widgets::FeedbackWidget;
use super::{CARD_BORDER, DANGER, PRIMARY, SLATE, SLATE_DARK};

/// Sidebar width below which the shell collapses to the overlay layout.
const NARROW_BREAKPOINT: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Monitoring,
    Alerts,
    Analytics,
    Subscription,
    Settings,
}

impl DashboardTab {
    pub const MAIN: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Monitoring,
        DashboardTab::Alerts,
        DashboardTab::Analytics,
    ];

    pub const SYSTEM: [DashboardTab; 2] = [DashboardTab::Subscription, DashboardTab::Settings];

    /// Header title shown for the active tab.
    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Command Center Overview",
            DashboardTab::Monitoring => "Live Surveillance",
            DashboardTab::Alerts => "Incident Logs",
            DashboardTab::Analytics => "Data Analytics",
            DashboardTab::Subscription => "Subscription Management",
            DashboardTab::Settings => "System Configuration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Monitoring => "Live Monitoring",
            DashboardTab::Alerts => "Alert Logs",
            DashboardTab::Analytics => "Analytics",
            DashboardTab::Subscription => "Subscription",
            DashboardTab::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "📊",
            DashboardTab::Monitoring => "🎥",
            DashboardTab::Alerts => "⚠",
            DashboardTab::Analytics => "📈",
            DashboardTab::Subscription => "💳",
            DashboardTab::Settings => "⚙",
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        match self {
            DashboardTab::Alerts => Some("New"),
            _ => None,
        }
    }
}

pub struct DashboardState {
    active_tab: DashboardTab,
    sidebar_open: bool,

    feedback: FeedbackWidget,

    // Tab components
    overview: OverviewTab,
    monitoring: MonitoringTab,
    alerts_tab: AlertsTab,
    analytics: AnalyticsTab,
    settings: SettingsTab,
    subscription: SubscriptionTab,
}

impl DashboardState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            active_tab: DashboardTab::Overview,
            sidebar_open: false,
            feedback: FeedbackWidget::new(),
            overview: OverviewTab::new(),
            monitoring: MonitoringTab::new(),
            alerts_tab: AlertsTab::new(),
            analytics: AnalyticsTab::new(),
            settings: SettingsTab::new(config),
            subscription: SubscriptionTab::new(),
        }
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    /// Activates a tab and always closes the mobile sidebar.
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
        self.sidebar_open = false;
    }

    pub fn alerts_tab(&self) -> &AlertsTab {
        &self.alerts_tab
    }

    pub fn alerts_tab_mut(&mut self) -> &mut AlertsTab {
        &mut self.alerts_tab
    }

    pub fn render(
        &mut self,
        ctx: &egui::Context,
        data: &dyn DataProvider,
        config: &AppConfig,
    ) -> Option<RouteAction> {
        let narrow = ctx.screen_rect().width() < NARROW_BREAKPOINT;
        let mut route = None;

        if !narrow || self.sidebar_open {
            egui::SidePanel::left("sidebar")
                .exact_width(250.0)
                .resizable(false)
                .frame(
                    egui::Frame::none()
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(1.0, CARD_BORDER)),
                )
                .show(ctx, |ui| {
                    if let Some(action) = self.render_sidebar(ui) {
                        route = Some(action);
                    }
                });
        }

        egui::TopBottomPanel::top("header")
            .exact_height(56.0)
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::WHITE)
                    .stroke(egui::Stroke::new(1.0, CARD_BORDER))
                    .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui, narrow, config);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(243, 244, 246))
                    .inner_margin(egui::Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_tab_content(ui, data, config);
                });
            });

        route
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) -> Option<RouteAction> {
        let mut route = None;

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(egui::RichText::new("🛡").size(22.0).color(PRIMARY));
            ui.label(
                egui::RichText::new("CLEAN-AIR ")
                    .strong()
                    .size(15.0)
                    .color(SLATE_DARK),
            );
            ui.label(
                egui::RichText::new("SENTINEL")
                    .strong()
                    .size(15.0)
                    .color(PRIMARY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(8.0);

        // Leave room for the pinned sign-out row below
        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - 56.0)
            .show(ui, |ui| {
                for tab in DashboardTab::MAIN {
                    self.sidebar_item(ui, tab);
                }

                ui.add_space(12.0);
                ui.separator();
                ui.label(
                    egui::RichText::new("SYSTEM")
                        .small()
                        .strong()
                        .color(SLATE),
                );
                ui.add_space(4.0);

                for tab in DashboardTab::SYSTEM {
                    self.sidebar_item(ui, tab);
                }

                ui.add_space(20.0);
                self.feedback.render(ui, true);
                ui.add_space(12.0);
            });

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add_space(10.0);
            let sign_out = ui.add(
                egui::Button::new(egui::RichText::new("↩  Sign Out").color(SLATE))
                    .frame(false),
            );
            if sign_out.clicked() {
                route = Some(RouteAction::Logout);
            }
            ui.separator();
        });

        route
    }

    fn sidebar_item(&mut self, ui: &mut egui::Ui, tab: DashboardTab) {
        let active = self.active_tab == tab;
        let text = format!("{}  {}", tab.icon(), tab.label());
        let rich = if active {
            egui::RichText::new(text).color(PRIMARY).strong()
        } else {
            egui::RichText::new(text).color(SLATE)
        };

        ui.horizontal(|ui| {
            let button = egui::Button::new(rich)
                .fill(if active {
                    PRIMARY.gamma_multiply(0.12)
                } else {
                    egui::Color32::TRANSPARENT
                })
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2((ui.available_width() - 40.0).max(120.0), 34.0));

            if ui.add(button).clicked() {
                self.select_tab(tab);
            }

            if let Some(badge) = tab.badge() {
                egui::Frame::none()
                    .fill(DANGER)
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::symmetric(6.0, 1.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(badge)
                                .small()
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                    });
            }
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui, narrow: bool, config: &AppConfig) {
        ui.horizontal_centered(|ui| {
            if narrow && ui.button("☰").clicked() {
                self.open_sidebar();
            }

            ui.heading(
                egui::RichText::new(self.active_tab.title())
                    .size(18.0)
                    .color(SLATE_DARK),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Admin identity block
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Admin User").small().strong());
                    ui.label(egui::RichText::new("Supervisor").small().color(SLATE));
                });
                ui.separator();

                // Bell with unread dot
                let bell = ui.add(egui::Button::new("🔔").frame(false));
                ui.painter().circle_filled(
                    bell.rect.right_top() + egui::vec2(-4.0, 4.0),
                    3.0,
                    DANGER,
                );

                if config.ui.show_live_clock {
                    ui.label(
                        egui::RichText::new(Local::now().format("%H:%M:%S").to_string())
                            .monospace()
                            .color(SLATE),
                    );
                    ui.separator();
                }

                egui::Frame::none()
                    .fill(PRIMARY.gamma_multiply(0.12))
                    .rounding(egui::Rounding::same(10.0))
                    .inner_margin(egui::Margin::symmetric(10.0, 3.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("●").color(PRIMARY).small());
                            ui.label(
                                egui::RichText::new("System Online")
                                    .small()
                                    .color(PRIMARY_DARK_TEXT),
                            );
                        });
                    });
            });
        });
    }

    fn render_tab_content(
        &mut self,
        ui: &mut egui::Ui,
        data: &dyn DataProvider,
        config: &AppConfig,
    ) {
        match self.active_tab {
            DashboardTab::Overview => {
                if let Some(jump) = self.overview.render(ui, data) {
                    self.select_tab(jump);
                }
            }
            DashboardTab::Monitoring => self.monitoring.render(ui, data),
            DashboardTab::Alerts => self.alerts_tab.render(ui, data),
            DashboardTab::Analytics => self.analytics.render(ui, data, config),
            DashboardTab::Subscription => self.subscription.render(ui, data, config),
            DashboardTab::Settings => self.settings.render(ui, data, config),
        }
    }
}

const PRIMARY_DARK_TEXT: egui::Color32 = egui::Color32::from_rgb(4, 120, 87);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn shell_starts_on_overview_with_sidebar_closed() {
        let state = DashboardState::new(&AppConfig::default());
        assert_eq!(state.active_tab(), DashboardTab::Overview);
        assert!(!state.sidebar_open());
    }

    #[rstest]
    #[case(DashboardTab::Overview)]
    #[case(DashboardTab::Monitoring)]
    #[case(DashboardTab::Alerts)]
    #[case(DashboardTab::Analytics)]
    #[case(DashboardTab::Subscription)]
    #[case(DashboardTab::Settings)]
    fn selecting_any_tab_closes_the_sidebar(#[case] tab: DashboardTab) {
        let mut state = DashboardState::new(&AppConfig::default());
        state.open_sidebar();
        state.select_tab(tab);
        assert_eq!(state.active_tab(), tab);
        assert!(!state.sidebar_open());
    }

    #[rstest]
    #[case(DashboardTab::Overview, "Command Center Overview")]
    #[case(DashboardTab::Monitoring, "Live Surveillance")]
    #[case(DashboardTab::Alerts, "Incident Logs")]
    #[case(DashboardTab::Analytics, "Data Analytics")]
    #[case(DashboardTab::Subscription, "Subscription Management")]
    #[case(DashboardTab::Settings, "System Configuration")]
    fn header_title_follows_the_active_tab(#[case] tab: DashboardTab, #[case] title: &str) {
        assert_eq!(tab.title(), title);
    }

    #[test]
    fn panel_state_survives_tab_switches() {
        use crate::data::{DataProvider, StaticDataProvider};

        let provider = StaticDataProvider;
        let mut state = DashboardState::new(&AppConfig::default());

        state.select_tab(DashboardTab::Alerts);
        state.alerts_tab_mut().select_alert(&provider.alerts()[0]);

        // Each panel owns its state; navigating away does not clear it
        state.select_tab(DashboardTab::Monitoring);
        state.select_tab(DashboardTab::Alerts);
        assert_eq!(
            state.alerts_tab().selected().map(|a| a.id.as_str()),
            Some("AL-1023")
        );
    }

    #[test]
    fn only_alerts_carries_the_new_badge() {
        for tab in DashboardTab::MAIN.into_iter().chain(DashboardTab::SYSTEM) {
            match tab {
                DashboardTab::Alerts => assert_eq!(tab.badge(), Some("New")),
                _ => assert_eq!(tab.badge(), None),
            }
        }
    }
}
