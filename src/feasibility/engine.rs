//! # Placement Decision Engine
//!
//! Composes the five constraint domains and the delta-balance rule into one
//! accept/reject verdict for a candidate placement. Every sub-check is
//! evaluated exhaustively so the report carries a full diagnostic set even
//! when the verdict is already determined to be Reject.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::domain::{
    BioSafetyEnvelope, DeploymentContext, DeviceDesign, HydraulicEnvelope, MaterialBom,
    ResourceBudget, SiteGeometry,
};

use super::balance::DeltaBalance;
use super::checks::{CarbonPolicy, CheckDomain, CheckResult};

/// One candidate placement: the site's envelopes, the device bill of
/// materials, the deployment context, and the estimator-derived deltas.
/// Constructed once per evaluation, never mutated, discarded after the
/// verdict is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementProposal {
    pub geometry: SiteGeometry,
    pub hydraulics: HydraulicEnvelope,
    pub resources: ResourceBudget,
    pub bom: MaterialBom,
    pub bio_safety: BioSafetyEnvelope,
    pub context: DeploymentContext,
    pub balance: DeltaBalance,
}

impl PlacementProposal {
    /// Evaluate one constraint domain against a device design. Total over
    /// its input domain; constraint evaluation never fails.
    pub fn check(&self, domain: CheckDomain, design: &DeviceDesign, carbon: &CarbonPolicy) -> bool {
        match domain {
            CheckDomain::Geometry => self.geometry.admits(design),
            CheckDomain::Hydraulic => self.hydraulics.admits(design),
            CheckDomain::Resource => self.resources.admits(design),
            CheckDomain::BioSafety => self.bio_safety.admits(design),
            CheckDomain::MaterialCarbon => {
                self.bom.embodied_carbon_kg(&carbon.coefficients) < carbon.ceiling_kg_co2e
            }
        }
    }
}

/// Verdict plus per-constraint diagnostics for one evaluated placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementReport {
    /// The single accept/reject verdict
    pub accepted: bool,
    /// Delta-balance rule outcome
    pub balance_ok: bool,
    /// Pass/fail per constraint domain, in [`CheckDomain`] order
    pub checks: Vec<CheckResult>,
    pub evaluated_at: DateTime<Utc>,
}

impl PlacementReport {
    /// Domains that failed, for failure attribution in reports and logs.
    pub fn failed_domains(&self) -> Vec<CheckDomain> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.domain)
            .collect()
    }
}

/// The placement decision engine. Holds the carbon policy; everything else
/// arrives with the proposal. Evaluation is deterministic and side-effect
/// free apart from the report timestamp and structured log events.
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    carbon: CarbonPolicy,
}

impl PlacementEngine {
    pub fn new(carbon: CarbonPolicy) -> Self {
        Self { carbon }
    }

    pub fn carbon_policy(&self) -> &CarbonPolicy {
        &self.carbon
    }

    /// Evaluate one proposal against one device design.
    ///
    /// The verdict is exactly the logical AND of the delta-balance rule and
    /// the five constraint domains; no short-circuiting, so the report always
    /// carries all six sub-results.
    pub fn evaluate(&self, proposal: &PlacementProposal, design: &DeviceDesign) -> PlacementReport {
        let checks: Vec<CheckResult> = CheckDomain::iter()
            .map(|domain| CheckResult {
                domain,
                passed: proposal.check(domain, design, &self.carbon),
            })
            .collect();

        let balance_ok = proposal.balance.holds();
        let accepted = balance_ok && checks.iter().all(|c| c.passed);

        for check in &checks {
            debug!(
                domain = %check.domain,
                passed = check.passed,
                context = %proposal.context,
                "constraint evaluated"
            );
        }
        debug!(balance_ok, accepted, "placement verdict");

        PlacementReport {
            accepted,
            balance_ok,
            checks,
            evaluated_at: Utc::now(),
        }
    }
}
