//! # Measurement Estimators
//!
//! Pure functions mapping a site's raw measurements to estimated power output,
//! PFBS removal rate, and a bounded eco-impact score. Stateless; every input
//! combination yields a defined value and nothing here can fail.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::SiteRecord;

/// Calibration constants for the estimators, with documented units.
///
/// Defaults match the 2026 coastal survey calibration; override via
/// `config/default.toml` or `FLOWVAC__ESTIMATOR__*` environment variables
/// when recalibrating.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EstimatorParams {
    /// Seawater density (kg/m³)
    #[validate(range(min = 900.0, max = 1100.0))]
    pub water_density_kg_m3: f64,
    /// Nominal intake cross-section used when no rated power exists (m²)
    #[validate(range(min = 0.1))]
    pub nominal_area_m2: f64,
    /// Kinetic-to-electrical conversion efficiency (0-1)
    #[validate(range(min = 0.0, max = 1.0))]
    pub conversion_efficiency: f64,
    /// Baseline PFBS removal when no observation exists (kg/h)
    #[validate(range(min = 0.0))]
    pub removal_baseline_kg_h: f64,
    /// Flow-proportional removal weight (per m/s)
    pub removal_flow_weight: f64,
    /// Power-proportional removal weight (dimensionless)
    pub removal_power_weight: f64,
    /// Power normalization for the removal blend (kW)
    #[validate(range(min = 1.0))]
    pub removal_power_norm_kw: f64,
    /// Saturation scale of the eco-score power term (kW)
    #[validate(range(min = 1.0))]
    pub eco_power_scale_kw: f64,
    /// Saturation scale of the eco-score removal term (kg/h)
    #[validate(range(min = 0.01))]
    pub eco_removal_scale_kg_h: f64,
    /// Weight of the power term in the eco score
    #[validate(range(min = 0.0, max = 1.0))]
    pub eco_power_weight: f64,
    /// Weight of the removal term in the eco score
    #[validate(range(min = 0.0, max = 1.0))]
    pub eco_removal_weight: f64,
    /// Penalty applied when mean flow exceeds the safe intake flow
    #[validate(range(min = 0.0, max = 1.0))]
    pub intake_penalty: f64,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            water_density_kg_m3: 1025.0,
            nominal_area_m2: 10.0,
            conversion_efficiency: 0.35,
            removal_baseline_kg_h: 0.2,
            removal_flow_weight: 0.3,
            removal_power_weight: 0.4,
            removal_power_norm_kw: 50.0,
            eco_power_scale_kw: 80.0,
            eco_removal_scale_kg_h: 2.0,
            eco_power_weight: 0.6,
            eco_removal_weight: 0.4,
            intake_penalty: 0.3,
        }
    }
}

/// Estimated generated power in kW.
///
/// Uses the site's rated power when strictly positive; otherwise computes
/// kinetic-energy-flux power from density, nominal area, and the cube of the
/// mean flow velocity. Degenerate (zero or negative) flow yields zero or
/// negative wattage, which callers must guard against downstream.
pub fn estimate_power_kw(site: &SiteRecord, params: &EstimatorParams) -> f64 {
    if site.rated_power_kw > 0.0 {
        return site.rated_power_kw;
    }

    let power_w = 0.5
        * params.water_density_kg_m3
        * params.nominal_area_m2
        * site.mean_flow_m_s.powi(3)
        * params.conversion_efficiency;
    power_w / 1000.0
}

/// Estimated PFBS removal rate in kg/h.
///
/// Uses the observed removal rate when strictly positive; otherwise a blend
/// of a fixed baseline, a flow-proportional term, and a power-proportional
/// term. Monotonically increasing in both flow and rated power.
pub fn estimate_removal_kg_h(site: &SiteRecord, params: &EstimatorParams) -> f64 {
    if site.observed_removal_kg_h > 0.0 {
        return site.observed_removal_kg_h;
    }

    let flow_factor = site.mean_flow_m_s;
    let power_factor = site.rated_power_kw / params.removal_power_norm_kw;
    params.removal_baseline_kg_h
        * (1.0
            + flow_factor * params.removal_flow_weight
            + power_factor * params.removal_power_weight)
}

/// Eco-impact score in [0, 1].
///
/// Combines saturating transforms of power and removal rate, minus a fixed
/// penalty when the site's mean flow exceeds its safe intake flow. Returns 0
/// for non-positive power or negative removal; this is a guard clause for
/// degenerate inputs, not an error.
pub fn estimate_eco_impact(
    site: &SiteRecord,
    power_kw: f64,
    removal_kg_h: f64,
    params: &EstimatorParams,
) -> f64 {
    if power_kw <= 0.0 || removal_kg_h < 0.0 {
        return 0.0;
    }

    let power_score = (power_kw / params.eco_power_scale_kw).tanh();
    let removal_score = (removal_kg_h / params.eco_removal_scale_kg_h).tanh();

    let intake_penalty = if site.mean_flow_m_s > site.max_intake_flow_m_s {
        params.intake_penalty
    } else {
        0.0
    };

    let score = params.eco_power_weight * power_score
        + params.eco_removal_weight * removal_score
        - intake_penalty;
    score.clamp(0.0, 1.0)
}
