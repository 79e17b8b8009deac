//! Shared stateful widgets: feedback micro-survey and the hero carousel

use eframe::egui;
use std::time::{Duration, Instant};
use tracing::debug;

use super::{card_frame, DANGER, PRIMARY, SLATE, SLATE_DARK, WARNING};

// ========== FEEDBACK WIDGET ==========

pub const POSITIVE_TAGS: [&str; 4] = ["Detection", "Speed", "Easy", "UI"];
pub const NEGATIVE_REASONS: [&str; 4] = [
    "Slow Performance",
    "Inaccurate Data",
    "UI/UX Issues",
    "Other Bugs",
];

const DEFAULT_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackRating {
    Frustrated,
    Neutral,
    Delighted,
}

impl FeedbackRating {
    pub const ALL: [FeedbackRating; 3] = [
        FeedbackRating::Frustrated,
        FeedbackRating::Neutral,
        FeedbackRating::Delighted,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            FeedbackRating::Frustrated => "😡",
            FeedbackRating::Neutral => "😐",
            FeedbackRating::Delighted => "🤩",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            FeedbackRating::Frustrated => "frustrated",
            FeedbackRating::Neutral => "neutral",
            FeedbackRating::Delighted => "delighted",
        }
    }
}

/// Branching micro-survey. Purely local: submissions are logged and
/// discarded, nothing leaves the process.
#[derive(Debug, Clone)]
pub struct FeedbackWidget {
    rating: Option<FeedbackRating>,
    stars: u8,
    tags: Vec<String>,
    reasons: Vec<String>,
    message: String,
    submitted: bool,
}

impl Default for FeedbackWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackWidget {
    pub fn new() -> Self {
        Self {
            rating: None,
            stars: DEFAULT_STARS,
            tags: Vec::new(),
            reasons: Vec::new(),
            message: String::new(),
            submitted: false,
        }
    }

    pub fn rating(&self) -> Option<FeedbackRating> {
        self.rating
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Picking the delighted rating always re-seeds the stars at 5.
    pub fn select_rating(&mut self, rating: FeedbackRating) {
        self.rating = Some(rating);
        if rating == FeedbackRating::Delighted {
            self.stars = DEFAULT_STARS;
        }
    }

    pub fn set_stars(&mut self, stars: u8) {
        self.stars = stars.clamp(1, DEFAULT_STARS);
    }

    /// Toggle-set semantics: add if absent, remove if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn toggle_reason(&mut self, reason: &str) {
        if let Some(pos) = self.reasons.iter().position(|r| r == reason) {
            self.reasons.remove(pos);
        } else {
            self.reasons.push(reason.to_string());
        }
    }

    pub fn submit(&mut self) {
        let payload = serde_json::json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "rating": self.rating.map(|r| r.slug()),
            "stars": self.stars,
            "tags": self.tags,
            "reasons": self.reasons,
            "message": self.message,
        });
        debug!("Feedback captured (local only): {}", payload);
        self.submitted = true;
    }

    /// Full-state reset back to the untouched widget.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn render(&mut self, ui: &mut egui::Ui, compact: bool) {
        if self.submitted {
            self.render_thanks(ui);
            return;
        }

        card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new("💬 HELP US IMPROVE")
                    .small()
                    .strong()
                    .color(SLATE_DARK),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                for rating in FeedbackRating::ALL {
                    let selected = self.rating == Some(rating);
                    let size = if selected { 26.0 } else { 20.0 };
                    let button =
                        egui::Button::new(egui::RichText::new(rating.emoji()).size(size))
                            .frame(false);
                    if ui.add(button).clicked() {
                        self.select_rating(rating);
                    }
                }
            });

            match self.rating {
                Some(FeedbackRating::Delighted) => self.render_positive_flow(ui, compact),
                Some(FeedbackRating::Frustrated) | Some(FeedbackRating::Neutral) => {
                    self.render_negative_flow(ui)
                }
                None => {}
            }
        });
    }

    fn render_positive_flow(&mut self, ui: &mut egui::Ui, compact: bool) {
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            for star in 1..=DEFAULT_STARS {
                let lit = star <= self.stars;
                let color = if lit { WARNING } else { SLATE };
                let button = egui::Button::new(egui::RichText::new("★").color(color).size(16.0))
                    .frame(false);
                if ui.add(button).clicked() {
                    self.set_stars(star);
                }
            }
        });

        ui.label(egui::RichText::new("What's best?").small().color(SLATE));
        ui.horizontal_wrapped(|ui| {
            for tag in POSITIVE_TAGS {
                let active = self.tags.iter().any(|t| t == tag);
                let chip = egui::Button::new(
                    egui::RichText::new(tag).small().color(if active {
                        egui::Color32::WHITE
                    } else {
                        SLATE_DARK
                    }),
                )
                .fill(if active {
                    PRIMARY
                } else {
                    egui::Color32::WHITE
                })
                .stroke(egui::Stroke::new(1.0, PRIMARY))
                .rounding(egui::Rounding::same(6.0));
                if ui.add(chip).clicked() {
                    self.toggle_tag(tag);
                }
            }
        });

        let rows = if compact { 2 } else { 3 };
        ui.add(
            egui::TextEdit::multiline(&mut self.message)
                .hint_text("Tell us more...")
                .desired_rows(rows)
                .desired_width(f32::INFINITY),
        );

        let send = egui::Button::new(
            egui::RichText::new("Send Love")
                .small()
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(PRIMARY)
        .rounding(egui::Rounding::same(6.0))
        .min_size(egui::vec2(ui.available_width(), 26.0));
        if ui.add(send).clicked() {
            self.submit();
        }
    }

    fn render_negative_flow(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.label(egui::RichText::new("What's wrong?").small().color(SLATE));

        for reason in NEGATIVE_REASONS {
            let mut checked = self.reasons.iter().any(|r| r == reason);
            if ui.checkbox(&mut checked, reason).changed() {
                self.toggle_reason(reason);
            }
        }

        ui.add(
            egui::TextEdit::multiline(&mut self.message)
                .hint_text("Describe your issue...")
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );

        let send = egui::Button::new(
            egui::RichText::new("Send Feedback")
                .small()
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(SLATE_DARK)
        .rounding(egui::Rounding::same(6.0))
        .min_size(egui::vec2(ui.available_width(), 26.0));
        if ui.add(send).clicked() {
            self.submit();
        }
    }

    fn render_thanks(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(PRIMARY.gamma_multiply(0.10))
            .stroke(egui::Stroke::new(1.0, PRIMARY.gamma_multiply(0.4)))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("🛡").size(18.0).color(PRIMARY));
                    ui.label(
                        egui::RichText::new("Feedback Sent!")
                            .small()
                            .strong()
                            .color(SLATE_DARK),
                    );
                    ui.label(
                        egui::RichText::new("Thank you for helping us improve Clean-Air Sentinel.")
                            .small()
                            .color(SLATE),
                    );
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("Submit another").small().underline(),
                            )
                            .frame(false),
                        )
                        .clicked()
                    {
                        self.reset();
                    }
                });
            });
    }
}

// ========== CAROUSEL ==========

pub const SLIDE_INTERVAL: Duration = Duration::from_secs(3);

/// Auto-advancing slide state. All timing goes through injected
/// instants so the wrap/restart behavior tests without a UI loop.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    slide_count: usize,
    interval: Duration,
    last_advance: Instant,
}

impl Carousel {
    pub fn new(slide_count: usize, now: Instant) -> Self {
        Self {
            index: 0,
            slide_count,
            interval: SLIDE_INTERVAL,
            last_advance: now,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Advances past every elapsed interval, wrapping modulo the slide
    /// count. Returns true when the index moved.
    pub fn advance_if_due(&mut self, now: Instant) -> bool {
        if self.slide_count == 0 {
            return false;
        }

        let mut advanced = false;
        while now.duration_since(self.last_advance) >= self.interval {
            self.index = (self.index + 1) % self.slide_count;
            self.last_advance += self.interval;
            advanced = true;
        }
        advanced
    }

    /// Manual dot selection: jumps immediately and restarts the
    /// interval, so the choice is never raced away by an imminent tick.
    pub fn select(&mut self, slide: usize, now: Instant) {
        if self.slide_count == 0 {
            return;
        }
        self.index = slide % self.slide_count;
        self.last_advance = now;
    }

    /// Time until the next automatic advance; drives repaint scheduling.
    pub fn time_to_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.duration_since(self.last_advance))
    }
}

/// Deployment scenes shown in the landing carousel.
pub const SLIDES: [(&str, &str, [u8; 3]); 4] = [
    ("Park Zone A - North", "Central Park perimeter", [6, 78, 59]),
    ("Industrial Dist. Gate 4", "Sector 7 logistics yard", [30, 41, 59]),
    ("Residential Block C", "Downtown rooftops", [49, 46, 129]),
    ("Waste Management Facility", "Outskirts transfer site", [69, 26, 3]),
];

impl Carousel {
    pub fn render(&mut self, ui: &mut egui::Ui, now: Instant) {
        let width = ui.available_width().min(720.0);
        let height = width * 9.0 / 21.0;
        let (rect, _response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        let (title, subtitle, color) = SLIDES[self.index % SLIDES.len()];
        painter.rect_filled(
            rect,
            egui::Rounding::same(14.0),
            egui::Color32::from_rgb(color[0], color[1], color[2]),
        );

        // Footer gradient band with the scene caption
        let band = egui::Rect::from_min_max(
            egui::pos2(rect.min.x, rect.max.y - 54.0),
            rect.max,
        );
        painter.rect_filled(
            band,
            egui::Rounding {
                nw: 0.0,
                ne: 0.0,
                sw: 14.0,
                se: 14.0,
            },
            egui::Color32::from_black_alpha(140),
        );
        painter.text(
            band.min + egui::vec2(16.0, 10.0),
            egui::Align2::LEFT_TOP,
            title,
            egui::FontId::proportional(15.0),
            egui::Color32::WHITE,
        );
        painter.text(
            band.min + egui::vec2(16.0, 30.0),
            egui::Align2::LEFT_TOP,
            subtitle,
            egui::FontId::proportional(11.0),
            egui::Color32::from_white_alpha(180),
        );

        // Live chip, to match the monitoring tiles
        painter.text(
            rect.min + egui::vec2(16.0, 14.0),
            egui::Align2::LEFT_TOP,
            "● LIVE DEMO FEED",
            egui::FontId::proportional(11.0),
            DANGER,
        );

        // Dot indicators
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - SLIDES.len() as f32 * 18.0) / 2.0);
            for i in 0..self.slide_count {
                let active = i == self.index;
                let dot = egui::Button::new(
                    egui::RichText::new("●")
                        .size(if active { 12.0 } else { 9.0 })
                        .color(if active { PRIMARY } else { SLATE }),
                )
                .frame(false);
                if ui.add(dot).clicked() {
                    self.select(i, now);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ----- feedback -----

    #[test]
    fn delighted_rating_always_seeds_five_stars() {
        let mut widget = FeedbackWidget::new();
        widget.select_rating(FeedbackRating::Delighted);
        widget.set_stars(2);
        assert_eq!(widget.stars(), 2);

        widget.select_rating(FeedbackRating::Delighted);
        assert_eq!(widget.stars(), 5);
    }

    #[test]
    fn other_ratings_leave_stars_alone() {
        let mut widget = FeedbackWidget::new();
        widget.select_rating(FeedbackRating::Delighted);
        widget.set_stars(3);
        widget.select_rating(FeedbackRating::Neutral);
        assert_eq!(widget.stars(), 3);
    }

    #[test]
    fn tag_toggle_is_idempotent_in_pairs() {
        let mut widget = FeedbackWidget::new();
        widget.toggle_tag("Speed");
        assert_eq!(widget.tags(), ["Speed".to_string()]);
        widget.toggle_tag("Speed");
        assert!(widget.tags().is_empty());
    }

    #[test]
    fn stars_are_clamped_to_one_through_five() {
        let mut widget = FeedbackWidget::new();
        widget.set_stars(0);
        assert_eq!(widget.stars(), 1);
        widget.set_stars(9);
        assert_eq!(widget.stars(), 5);
    }

    #[test]
    fn submit_then_reset_restores_the_initial_state() {
        let mut widget = FeedbackWidget::new();
        widget.select_rating(FeedbackRating::Delighted);
        widget.set_stars(4);
        widget.toggle_tag("UI");
        widget.message = "great".to_string();
        widget.submit();
        assert!(widget.is_submitted());

        widget.reset();
        assert_eq!(widget.rating(), None);
        assert!(!widget.is_submitted());
        assert_eq!(widget.stars(), 5);
        assert!(widget.tags().is_empty());
        assert!(widget.reasons().is_empty());
        assert!(widget.message.is_empty());
    }

    #[test]
    fn reason_toggle_mirrors_checkbox_state() {
        let mut widget = FeedbackWidget::new();
        widget.select_rating(FeedbackRating::Frustrated);
        widget.toggle_reason("Other Bugs");
        widget.toggle_reason("Inaccurate Data");
        assert_eq!(widget.reasons().len(), 2);
        widget.toggle_reason("Other Bugs");
        assert_eq!(widget.reasons(), ["Inaccurate Data".to_string()]);
    }

    // ----- carousel -----

    #[test]
    fn auto_advance_cycles_with_period_n() {
        let t0 = Instant::now();
        let mut carousel = Carousel::new(4, t0);

        let mut seen = Vec::new();
        for tick in 1..=8u32 {
            carousel.advance_if_due(t0 + SLIDE_INTERVAL * tick);
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn nothing_happens_before_the_interval_elapses() {
        let t0 = Instant::now();
        let mut carousel = Carousel::new(3, t0);
        assert!(!carousel.advance_if_due(t0 + Duration::from_millis(2999)));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.advance_if_due(t0 + Duration::from_millis(3000)));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn late_frames_catch_up_across_missed_intervals() {
        let t0 = Instant::now();
        let mut carousel = Carousel::new(4, t0);
        carousel.advance_if_due(t0 + SLIDE_INTERVAL * 5);
        assert_eq!(carousel.index(), 1); // 5 mod 4
    }

    #[test]
    fn manual_selection_jumps_and_restarts_the_timer() {
        let t0 = Instant::now();
        let mut carousel = Carousel::new(4, t0);

        let select_at = t0 + Duration::from_millis(2900);
        carousel.select(2, select_at);
        assert_eq!(carousel.index(), 2);

        // The tick that was imminent before the click no longer fires
        assert!(!carousel.advance_if_due(t0 + Duration::from_millis(3100)));
        assert_eq!(carousel.index(), 2);

        // A full interval after selection it moves on
        assert!(carousel.advance_if_due(select_at + SLIDE_INTERVAL));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn selection_wraps_modulo_slide_count() {
        let t0 = Instant::now();
        let mut carousel = Carousel::new(4, t0);
        carousel.select(7, t0);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let t0 = Instant::now();
        let mut carousel = Carousel::new(0, t0);
        assert!(!carousel.advance_if_due(t0 + SLIDE_INTERVAL * 3));
        carousel.select(2, t0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn time_to_next_counts_down() {
        let t0 = Instant::now();
        let carousel = Carousel::new(4, t0);
        assert_eq!(
            carousel.time_to_next(t0 + Duration::from_secs(1)),
            Duration::from_secs(2)
        );
        assert_eq!(carousel.time_to_next(t0 + SLIDE_INTERVAL), Duration::ZERO);
    }
}
