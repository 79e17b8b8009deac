//! Record types served by the data provider

use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraStatus {
    Online,
    Offline,
    Alert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub status: CameraStatus,
    pub location: String,
    /// Stands in for the feed thumbnail URL; seeds the placeholder art.
    pub thumbnail_seed: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Smoke,
    Fire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Sent,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertLog {
    pub id: String,
    /// Display string, e.g. "10:42 AM" or "Yesterday".
    pub timestamp: String,
    pub location: String,
    pub kind: AlertKind,
    pub severity: Severity,
    /// Detector confidence, bounded 0-100.
    pub confidence: u8,
    pub status: DeliveryStatus,
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictSlice {
    pub district: String,
    pub value: f32,
    pub color: [u8; 3],
}

impl CameraStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CameraStatus::Online => "LIVE",
            CameraStatus::Offline => "OFFLINE",
            CameraStatus::Alert => "DETECTING",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            CameraStatus::Online => Color32::from_rgb(22, 163, 74),  // Green
            CameraStatus::Offline => Color32::from_rgb(100, 116, 139), // Slate
            CameraStatus::Alert => Color32::from_rgb(220, 38, 38),   // Red
        }
    }

    pub fn is_streaming(&self) -> bool {
        !matches!(self, CameraStatus::Offline)
    }
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Smoke => "Smoke",
            AlertKind::Fire => "Fire",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            AlertKind::Smoke => Color32::from_rgb(234, 88, 12), // Orange
            AlertKind::Fire => Color32::from_rgb(220, 38, 38),  // Red
        }
    }
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Severity::High => Color32::from_rgb(220, 38, 38),   // Red
            Severity::Medium => Color32::from_rgb(234, 88, 12), // Orange
            Severity::Low => Color32::from_rgb(202, 138, 4),    // Yellow
        }
    }
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "Sent",
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Failed => "Failed",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            DeliveryStatus::Sent => Color32::from_rgb(22, 163, 74),     // Green
            DeliveryStatus::Pending => Color32::from_rgb(100, 116, 139), // Slate
            DeliveryStatus::Failed => Color32::from_rgb(220, 38, 38),   // Red
        }
    }
}

impl DistrictSlice {
    pub fn fill(&self) -> Color32 {
        Color32::from_rgb(self.color[0], self.color[1], self.color[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_status_labels() {
        assert_eq!(CameraStatus::Online.label(), "LIVE");
        assert_eq!(CameraStatus::Alert.label(), "DETECTING");
        assert_eq!(CameraStatus::Offline.label(), "OFFLINE");
    }

    #[test]
    fn offline_cameras_do_not_stream() {
        assert!(CameraStatus::Online.is_streaming());
        assert!(CameraStatus::Alert.is_streaming());
        assert!(!CameraStatus::Offline.is_streaming());
    }

    #[test]
    fn severity_orders_high_first() {
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }

    #[test]
    fn district_slice_fill_matches_rgb() {
        let slice = DistrictSlice {
            district: "Hoan Kiem".to_string(),
            value: 35.0,
            color: [16, 185, 129],
        };
        assert_eq!(slice.fill(), Color32::from_rgb(16, 185, 129));
    }
}
