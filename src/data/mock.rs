//! Static mock tables backing the demo build
//!
//! Everything the console shows comes from these tables. A production
//! deployment swaps the provider in `data::mod` for one backed by the
//! detection pipeline; the shapes stay the same.

use once_cell::sync::Lazy;

use super::types::{
    AlertKind, AlertLog, Camera, CameraStatus, ChartPoint, DeliveryStatus, DistrictSlice, Severity,
};

pub static CAMERAS: Lazy<Vec<Camera>> = Lazy::new(|| {
    vec![
        Camera {
            id: "CAM-01".to_string(),
            name: "Park Zone A - North".to_string(),
            // Simulating an active detection on the first feed
            status: CameraStatus::Alert,
            location: "Central Park".to_string(),
            thumbnail_seed: "park1".to_string(),
        },
        Camera {
            id: "CAM-02".to_string(),
            name: "Industrial Dist. Gate 4".to_string(),
            status: CameraStatus::Online,
            location: "Sector 7".to_string(),
            thumbnail_seed: "factory1".to_string(),
        },
        Camera {
            id: "CAM-03".to_string(),
            name: "Residential Block C".to_string(),
            status: CameraStatus::Online,
            location: "Downtown".to_string(),
            thumbnail_seed: "city1".to_string(),
        },
        Camera {
            id: "CAM-04".to_string(),
            name: "Waste Management Facility".to_string(),
            status: CameraStatus::Offline,
            location: "Outskirts".to_string(),
            thumbnail_seed: "waste".to_string(),
        },
    ]
});

pub static RECENT_ALERTS: Lazy<Vec<AlertLog>> = Lazy::new(|| {
    vec![
        AlertLog {
            id: "AL-1023".to_string(),
            timestamp: "10:42 AM".to_string(),
            location: "Park Zone A".to_string(),
            kind: AlertKind::Smoke,
            severity: Severity::High,
            confidence: 98,
            status: DeliveryStatus::Sent,
            image_ref: Some("evidence/al-1023.jpg".to_string()),
        },
        AlertLog {
            id: "AL-1022".to_string(),
            timestamp: "09:15 AM".to_string(),
            location: "Industrial Dist.".to_string(),
            kind: AlertKind::Fire,
            severity: Severity::High,
            confidence: 92,
            status: DeliveryStatus::Sent,
            image_ref: Some("evidence/al-1022.jpg".to_string()),
        },
        AlertLog {
            id: "AL-1021".to_string(),
            timestamp: "Yesterday".to_string(),
            location: "Residential Block C".to_string(),
            kind: AlertKind::Smoke,
            severity: Severity::Medium,
            confidence: 88,
            status: DeliveryStatus::Sent,
            image_ref: None,
        },
        AlertLog {
            id: "AL-1020".to_string(),
            timestamp: "Yesterday".to_string(),
            location: "Park Zone A".to_string(),
            kind: AlertKind::Smoke,
            severity: Severity::Low,
            confidence: 75,
            status: DeliveryStatus::Pending,
            image_ref: None,
        },
    ]
});

pub static AIR_QUALITY: Lazy<Vec<ChartPoint>> = Lazy::new(|| {
    [
        ("06:00", 45.0),
        ("08:00", 65.0),
        ("10:00", 120.0), // Spike from the simulated burning event
        ("12:00", 90.0),
        ("14:00", 55.0),
        ("16:00", 40.0),
        ("18:00", 42.0),
    ]
    .into_iter()
    .map(|(label, value)| ChartPoint {
        label: label.to_string(),
        value,
    })
    .collect()
});

pub static WEEKLY_ALERTS: Lazy<Vec<ChartPoint>> = Lazy::new(|| {
    [
        ("Mon", 4.0),
        ("Tue", 7.0),
        ("Wed", 3.0),
        ("Thu", 9.0),
        ("Fri", 12.0),
        ("Sat", 6.0),
        ("Sun", 5.0),
    ]
    .into_iter()
    .map(|(label, value)| ChartPoint {
        label: label.to_string(),
        value,
    })
    .collect()
});

pub static DISTRICT_DISTRIBUTION: Lazy<Vec<DistrictSlice>> = Lazy::new(|| {
    [
        ("Hoan Kiem", 35.0, [16, 185, 129]),
        ("Dong Da", 25.0, [52, 211, 153]),
        ("Ba Dinh", 20.0, [245, 158, 11]),
        ("Long Bien", 20.0, [239, 68, 68]),
    ]
    .into_iter()
    .map(|(district, value, color)| DistrictSlice {
        district: district.to_string(),
        value,
        color,
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn camera_ids_are_unique() {
        let ids: HashSet<_> = CAMERAS.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), CAMERAS.len());
    }

    #[test]
    fn alert_ids_are_unique() {
        let ids: HashSet<_> = RECENT_ALERTS.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), RECENT_ALERTS.len());
    }

    #[test]
    fn alert_confidence_is_bounded() {
        assert!(RECENT_ALERTS.iter().all(|a| a.confidence <= 100));
    }

    #[test]
    fn alerts_are_ordered_newest_first() {
        assert_eq!(RECENT_ALERTS[0].id, "AL-1023");
        assert_eq!(RECENT_ALERTS[1].id, "AL-1022");
        assert_eq!(RECENT_ALERTS[2].id, "AL-1021");
        assert_eq!(RECENT_ALERTS[3].id, "AL-1020");
    }

    #[test]
    fn district_distribution_sums_to_whole() {
        let total: f32 = DISTRICT_DISTRIBUTION.iter().map(|s| s.value).sum();
        assert!((total - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn air_quality_spikes_at_ten() {
        let peak = AIR_QUALITY
            .iter()
            .max_by(|a, b| a.value.total_cmp(&b.value))
            .unwrap();
        assert_eq!(peak.label, "10:00");
    }
}
