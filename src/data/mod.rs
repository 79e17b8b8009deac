//! Read-only data access for the console
//!
//! The UI never touches the tables directly; it goes through
//! [`DataProvider`] so a real backend (detection pipeline, alert store)
//! can replace [`StaticDataProvider`] without touching any panel.

pub mod mock;
pub mod types;

pub use types::{
    AlertKind, AlertLog, Camera, CameraStatus, ChartPoint, DeliveryStatus, DistrictSlice, Severity,
};

pub trait DataProvider {
    fn cameras(&self) -> &[Camera];
    fn alerts(&self) -> &[AlertLog];
    fn air_quality_series(&self) -> &[ChartPoint];
    fn weekly_alert_series(&self) -> &[ChartPoint];
    fn district_distribution(&self) -> &[DistrictSlice];
}

/// Serves the hardcoded demo tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDataProvider;

impl DataProvider for StaticDataProvider {
    fn cameras(&self) -> &[Camera] {
        &mock::CAMERAS
    }

    fn alerts(&self) -> &[AlertLog] {
        &mock::RECENT_ALERTS
    }

    fn air_quality_series(&self) -> &[ChartPoint] {
        &mock::AIR_QUALITY
    }

    fn weekly_alert_series(&self) -> &[ChartPoint] {
        &mock::WEEKLY_ALERTS
    }

    fn district_distribution(&self) -> &[DistrictSlice] {
        &mock::DISTRICT_DISTRIBUTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_provider_serves_all_tables() {
        let provider = StaticDataProvider;
        assert_eq!(provider.cameras().len(), 4);
        assert_eq!(provider.alerts().len(), 4);
        assert_eq!(provider.air_quality_series().len(), 7);
        assert_eq!(provider.weekly_alert_series().len(), 7);
        assert_eq!(provider.district_distribution().len(), 4);
    }
}
