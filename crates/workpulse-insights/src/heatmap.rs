//! Activity heat grid.

use serde::Serialize;
use workpulse_core::types::GeoActivity;

/// Fill opacity for an activity value: `min(1, 0.15 + value / 140)`.
pub fn heat_intensity(value: f64) -> f64 {
    let intensity = 0.15 + value / 140.0;
    if intensity.is_nan() {
        return 0.15;
    }
    intensity.min(1.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatCell {
    pub country: String,
    pub value: f64,
    pub intensity: f64,
}

pub fn heat_grid(activity: &[GeoActivity]) -> Vec<HeatCell> {
    activity
        .iter()
        .map(|g| HeatCell {
            country: g.country.clone(),
            value: g.value,
            intensity: heat_intensity(g.value),
        })
        .collect()
}
