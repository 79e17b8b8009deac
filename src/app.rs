//! Main application state and screen routing

use eframe::egui;
use tracing::info;

use crate::config::AppConfig;
use crate::data::StaticDataProvider;
use crate::gui::{AuthScreen, DashboardState, LandingPage};

/// Top-level screen. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Landing,
    Auth,
    Dashboard,
}

/// Navigation events emitted by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    /// Landing → Auth
    RequestLogin,
    /// Auth → Dashboard (the stub always succeeds)
    Authenticate,
    /// Auth → Landing
    Back,
    /// Dashboard → Landing
    Logout,
}

/// The router transition table. Any pair not listed is a no-op.
pub fn next_view(view: AppView, action: RouteAction) -> AppView {
    match (view, action) {
        (AppView::Landing, RouteAction::RequestLogin) => AppView::Auth,
        (AppView::Auth, RouteAction::Authenticate) => AppView::Dashboard,
        (AppView::Auth, RouteAction::Back) => AppView::Landing,
        (AppView::Dashboard, RouteAction::Logout) => AppView::Landing,
        (view, _) => view,
    }
}

pub struct SentinelApp {
    config: AppConfig,
    data: StaticDataProvider,

    view: AppView,

    // Screen state. Rebuilt whenever a screen is entered, which is what
    // tears down carousel timers and widget state on navigation.
    landing: LandingPage,
    auth: AuthScreen,
    dashboard: DashboardState,
}

impl SentinelApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            dashboard: DashboardState::new(&config),
            landing: LandingPage::new(),
            auth: AuthScreen::default(),
            data: StaticDataProvider,
            view: AppView::Landing,
            config,
        }
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardState {
        &mut self.dashboard
    }

    pub fn apply_route(&mut self, action: RouteAction) {
        let target = next_view(self.view, action);
        if target == self.view {
            return;
        }

        info!("Navigating {:?} → {:?}", self.view, target);

        // Mount the target screen fresh
        match target {
            AppView::Landing => self.landing = LandingPage::new(),
            AppView::Auth => self.auth = AuthScreen::default(),
            AppView::Dashboard => self.dashboard = DashboardState::new(&self.config),
        }

        self.view = target;
    }
}

impl eframe::App for SentinelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = match self.view {
            AppView::Landing => self.landing.render(ctx),
            AppView::Auth => self.auth.render(ctx),
            AppView::Dashboard => self.dashboard.render(ctx, &self.data, &self.config),
        };

        if let Some(action) = action {
            self.apply_route(action);
        }

        // Keep the clock and carousel moving
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::DashboardTab;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppView::Landing, RouteAction::RequestLogin, AppView::Auth)]
    #[case(AppView::Auth, RouteAction::Authenticate, AppView::Dashboard)]
    #[case(AppView::Auth, RouteAction::Back, AppView::Landing)]
    #[case(AppView::Dashboard, RouteAction::Logout, AppView::Landing)]
    // Everything else stays put
    #[case(AppView::Landing, RouteAction::Authenticate, AppView::Landing)]
    #[case(AppView::Landing, RouteAction::Back, AppView::Landing)]
    #[case(AppView::Landing, RouteAction::Logout, AppView::Landing)]
    #[case(AppView::Auth, RouteAction::RequestLogin, AppView::Auth)]
    #[case(AppView::Auth, RouteAction::Logout, AppView::Auth)]
    #[case(AppView::Dashboard, RouteAction::RequestLogin, AppView::Dashboard)]
    #[case(AppView::Dashboard, RouteAction::Authenticate, AppView::Dashboard)]
    #[case(AppView::Dashboard, RouteAction::Back, AppView::Dashboard)]
    fn transition_table(
        #[case] from: AppView,
        #[case] action: RouteAction,
        #[case] expected: AppView,
    ) {
        assert_eq!(next_view(from, action), expected);
    }

    fn any_action() -> impl Strategy<Value = RouteAction> {
        prop_oneof![
            Just(RouteAction::RequestLogin),
            Just(RouteAction::Authenticate),
            Just(RouteAction::Back),
            Just(RouteAction::Logout),
        ]
    }

    proptest! {
        // Every action sequence keeps the router inside the three-state
        // machine, and each step obeys the transition contract.
        #[test]
        fn router_follows_the_transition_table(actions in prop::collection::vec(any_action(), 0..64)) {
            let mut view = AppView::Landing;
            for action in actions {
                let next = next_view(view, action);
                match (view, action) {
                    (AppView::Landing, RouteAction::RequestLogin) => prop_assert_eq!(next, AppView::Auth),
                    (AppView::Auth, RouteAction::Authenticate) => prop_assert_eq!(next, AppView::Dashboard),
                    (AppView::Auth, RouteAction::Back) => prop_assert_eq!(next, AppView::Landing),
                    (AppView::Dashboard, RouteAction::Logout) => prop_assert_eq!(next, AppView::Landing),
                    _ => prop_assert_eq!(next, view),
                }
                view = next;
            }
        }
    }

    #[test]
    fn navigation_remounts_the_dashboard() {
        let mut app = SentinelApp::new(AppConfig::default());
        app.apply_route(RouteAction::RequestLogin);
        app.apply_route(RouteAction::Authenticate);
        assert_eq!(app.view(), AppView::Dashboard);

        app.dashboard_mut().select_tab(DashboardTab::Alerts);
        app.apply_route(RouteAction::Logout);
        assert_eq!(app.view(), AppView::Landing);

        // Logging back in lands on a fresh shell
        app.apply_route(RouteAction::RequestLogin);
        app.apply_route(RouteAction::Authenticate);
        assert_eq!(app.dashboard().active_tab(), DashboardTab::Overview);
    }

    #[test]
    fn no_op_actions_do_not_remount() {
        let mut app = SentinelApp::new(AppConfig::default());
        app.apply_route(RouteAction::RequestLogin);
        app.apply_route(RouteAction::Authenticate);
        app.dashboard_mut().select_tab(DashboardTab::Analytics);

        // Not valid from Dashboard; state must survive
        app.apply_route(RouteAction::Authenticate);
        assert_eq!(app.dashboard().active_tab(), DashboardTab::Analytics);
    }
}
