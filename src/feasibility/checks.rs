//! Uniform constraint-check surface over the five feasibility domains.
//!
//! Each domain's predicate lives on its envelope type in
//! [`crate::domain::envelopes`]; this module names the domains and lets the
//! engine iterate them instead of hardwiring each check into its control flow.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use validator::Validate;

use crate::domain::CarbonCoefficients;

/// The five independently-varying feasibility domains.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckDomain {
    Geometry,
    Hydraulic,
    Resource,
    BioSafety,
    MaterialCarbon,
}

/// Pass/fail outcome of one constraint domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub domain: CheckDomain,
    pub passed: bool,
}

/// Embodied-carbon policy: coefficients plus the absolute ceiling a device
/// build must stay strictly below.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CarbonPolicy {
    pub coefficients: CarbonCoefficients,
    /// Absolute embodied-carbon ceiling (kgCO2e)
    #[validate(range(min = 1.0))]
    pub ceiling_kg_co2e: f64,
}

impl Default for CarbonPolicy {
    fn default() -> Self {
        Self {
            coefficients: CarbonCoefficients::default(),
            ceiling_kg_co2e: 500.0,
        }
    }
}
