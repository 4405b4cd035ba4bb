use serde::{Deserialize, Serialize};

/// Three scalar deltas describing what a placement does to the network:
/// change in delivered/served network-impact weight, change in net energy
/// draw (kWh), and change in eco-impact score, each measured against the
/// pre-placement baseline by an upstream estimator pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DeltaBalance {
    /// Change in network-impact weight; must strictly increase
    pub network_delta: f64,
    /// Change in net energy consumption (kWh); must not increase
    pub energy_delta_kwh: f64,
    /// Change in eco-impact score; must not decrease
    pub eco_delta: f64,
}

impl DeltaBalance {
    /// The balance rule: a pure three-way sign test. Magnitudes never matter;
    /// one violated sign fails the rule regardless of the other two.
    pub fn holds(&self) -> bool {
        self.network_delta > 0.0 && self.energy_delta_kwh <= 0.0 && self.eco_delta >= 0.0
    }
}
