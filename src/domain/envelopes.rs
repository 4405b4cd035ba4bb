//! Site envelopes: the independent limit sets a candidate device is checked
//! against. Each envelope owns one feasibility domain and answers a single
//! yes/no question via its `admits` predicate; none of them mutates state or
//! retains anything between calls.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::device::DeviceDesign;

/// Deployment context tag for a placement proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentContext {
    Urban,
    Coastal,
}

/// Physical envelope of the installation volume.
///
/// Pipe depth <= soil depth is assumed by the feasibility check but never
/// independently validated; the check only constrains the device against the
/// site, not the site record against itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteGeometry {
    /// Maximum footprint area (m²)
    pub footprint_m2: f64,
    /// Vertical clearance (m)
    pub clearance_m: f64,
    /// Soil depth (m)
    pub soil_depth_m: f64,
    /// Pipe depth (m)
    pub pipe_depth_m: f64,
    /// Zoning code, e.g. "MU-IND"
    pub zoning_code: String,
}

impl SiteGeometry {
    /// Device fits iff its footprint and height fit the volume and its
    /// installation depth lands between pipe depth and soil depth.
    pub fn admits(&self, design: &DeviceDesign) -> bool {
        design.footprint_m2 <= self.footprint_m2
            && design.height_m <= self.clearance_m
            && design.depth_m <= self.soil_depth_m
            && design.depth_m >= self.pipe_depth_m
    }
}

/// Flow operating window at the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HydraulicEnvelope {
    /// Minimum volumetric flow (m³/s)
    pub q_min_m3_s: f64,
    /// Maximum volumetric flow (m³/s)
    pub q_max_m3_s: f64,
    /// Maximum flow velocity (m/s)
    pub v_max_m_s: f64,
    /// Maximum permissible head loss (m)
    pub head_loss_max_m: f64,
    /// Backflow risk at this site; a flagged site never passes
    pub backflow_flag: bool,
}

impl HydraulicEnvelope {
    pub fn admits(&self, design: &DeviceDesign) -> bool {
        design.design_flow_m3_s >= self.q_min_m3_s
            && design.design_flow_m3_s <= self.q_max_m3_s
            && design.design_velocity_m_s <= self.v_max_m_s
            && design.head_loss_m <= self.head_loss_max_m
            && !self.backflow_flag
    }
}

/// Operational affordances at the site. All four bounds must hold at once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceBudget {
    /// Available power (kW)
    pub power_avail_kw: f64,
    /// Daily energy budget (kWh)
    pub energy_daily_kwh: f64,
    /// Crew hours available per month
    pub crew_hours_month: f64,
    /// Maximum maintenance interval (days)
    pub maintenance_interval_max_days: u32,
}

impl ResourceBudget {
    pub fn admits(&self, design: &DeviceDesign) -> bool {
        design.nominal_power_kw <= self.power_avail_kw
            && design.daily_energy_kwh <= self.energy_daily_kwh
            && design.crew_hours_month <= self.crew_hours_month
            && design.maintenance_interval_days <= self.maintenance_interval_max_days
    }
}

/// Device construction masses and lengths. Only the derived embodied-carbon
/// total participates in feasibility, never the raw components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialBom {
    /// Structural steel mass (kg)
    pub steel_kg: f64,
    /// Polymer housing mass (kg)
    pub polymer_kg: f64,
    /// Filter media mass (kg)
    pub filter_media_kg: f64,
    /// Cable run length (m)
    pub cable_m: f64,
    /// Pipe run length (m)
    pub pipe_m: f64,
}

/// Per-unit embodied-carbon coefficients, EPA embodied-carbon dataset.
/// Named configuration so the figures can be recalibrated without a code
/// change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarbonCoefficients {
    /// Structural steel (kgCO2e per kg)
    pub steel_kg_co2e_per_kg: f64,
    /// Polymer (kgCO2e per kg)
    pub polymer_kg_co2e_per_kg: f64,
    /// Filter media (kgCO2e per kg)
    pub filter_kg_co2e_per_kg: f64,
    /// Cable (kgCO2e per m)
    pub cable_kg_co2e_per_m: f64,
    /// Pipe (kgCO2e per m)
    pub pipe_kg_co2e_per_m: f64,
}

impl Default for CarbonCoefficients {
    fn default() -> Self {
        Self {
            steel_kg_co2e_per_kg: 1.8,
            polymer_kg_co2e_per_kg: 2.5,
            filter_kg_co2e_per_kg: 3.2,
            cable_kg_co2e_per_m: 0.5,
            pipe_kg_co2e_per_m: 0.8,
        }
    }
}

impl MaterialBom {
    /// Total embodied carbon of the device build (kgCO2e).
    pub fn embodied_carbon_kg(&self, coeffs: &CarbonCoefficients) -> f64 {
        self.steel_kg * coeffs.steel_kg_co2e_per_kg
            + self.polymer_kg * coeffs.polymer_kg_co2e_per_kg
            + self.filter_media_kg * coeffs.filter_kg_co2e_per_kg
            + self.cable_m * coeffs.cable_kg_co2e_per_m
            + self.pipe_m * coeffs.pipe_kg_co2e_per_m
    }
}

/// Ecological limits at the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BioSafetyEnvelope {
    /// Habitat type label, e.g. "URBAN_CANAL"
    pub habitat_type: String,
    /// Exclusion radius around the installation (m)
    pub exclusion_radius_m: f64,
    /// Count of sensitive species present
    pub sensitive_species: u32,
    /// Maximum operating noise (dB)
    pub noise_limit_db: f64,
    /// Maximum electromagnetic field (µT)
    pub em_limit_ut: f64,
    /// Maximum bio-stress index (0-1)
    pub bio_stress_max: f64,
}

impl BioSafetyEnvelope {
    pub fn admits(&self, design: &DeviceDesign) -> bool {
        design.modeled_stress <= self.bio_stress_max
            && design.modeled_noise_db <= self.noise_limit_db
            && design.modeled_em_ut <= self.em_limit_ut
            && design.impacted_species <= self.sensitive_species
    }
}
