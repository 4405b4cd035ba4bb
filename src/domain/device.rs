use serde::{Deserialize, Serialize};

/// Candidate FlowVac device design evaluated against a site's envelopes.
///
/// All values describe the proposed unit, not the site. The engine compares
/// these against the site envelopes in [`crate::domain::envelopes`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceDesign {
    /// Device footprint area (m²)
    pub footprint_m2: f64,
    /// Device height above the mounting plane (m)
    pub height_m: f64,
    /// Installation depth below grade (m)
    pub depth_m: f64,
    /// Design volumetric flow (m³/s)
    pub design_flow_m3_s: f64,
    /// Design flow velocity through the intake (m/s)
    pub design_velocity_m_s: f64,
    /// Head loss introduced by the unit (m)
    pub head_loss_m: f64,
    /// Nominal electrical power draw (kW)
    pub nominal_power_kw: f64,
    /// Daily energy requirement (kWh)
    pub daily_energy_kwh: f64,
    /// Required maintenance crew time (hours/month)
    pub crew_hours_month: f64,
    /// Required maintenance visit interval (days)
    pub maintenance_interval_days: u32,
    /// Modeled bio-stress index contribution (0-1)
    pub modeled_stress: f64,
    /// Modeled operating noise (dB)
    pub modeled_noise_db: f64,
    /// Modeled electromagnetic field strength (µT)
    pub modeled_em_ut: f64,
    /// Count of sensitive species impacted by the installation
    pub impacted_species: u32,
}

impl DeviceDesign {
    /// The FV-2 reference unit. Historical siting surveys were run against
    /// this one fixed design; kept as a named preset so old verdicts stay
    /// reproducible.
    pub fn reference() -> Self {
        Self {
            footprint_m2: 10.0,
            height_m: 2.5,
            depth_m: 2.0,
            design_flow_m3_s: 0.1,
            design_velocity_m_s: 1.5,
            head_loss_m: 0.4,
            nominal_power_kw: 12.0,
            daily_energy_kwh: 50.0,
            crew_hours_month: 3.5,
            maintenance_interval_days: 100,
            modeled_stress: 0.15,
            modeled_noise_db: 60.0,
            modeled_em_ut: 0.4,
            impacted_species: 3,
        }
    }
}

impl Default for DeviceDesign {
    fn default() -> Self {
        Self::reference()
    }
}
