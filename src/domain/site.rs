use serde::{Deserialize, Serialize};

/// Immutable description of one candidate installation site.
///
/// Produced by ingestion ([`crate::ingest::load_sites`]) and read-only
/// thereafter; one record per physical site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteRecord {
    /// Site identifier, e.g. "CN-014"
    pub site_id: String,
    /// Latitude in degrees (positive = north)
    pub latitude_deg: f64,
    /// Longitude in degrees (positive = east)
    pub longitude_deg: f64,
    /// Water depth at the site (m)
    pub depth_m: f64,
    /// Mean flow velocity (m/s)
    pub mean_flow_m_s: f64,
    /// Flow velocity variance (m²/s²)
    pub flow_variance_m2_s2: f64,
    /// Rated power of an installed unit, 0 if not yet rated (kW)
    pub rated_power_kw: f64,
    /// Observed PFBS removal rate, 0 if not yet measured (kg/h)
    pub observed_removal_kg_h: f64,
    /// Maximum safe intake flow velocity (m/s)
    pub max_intake_flow_m_s: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_record_serialization() {
        let site = SiteRecord {
            site_id: "CN-001".to_string(),
            latitude_deg: 57.7,
            longitude_deg: 11.9,
            depth_m: 4.2,
            mean_flow_m_s: 1.1,
            flow_variance_m2_s2: 0.05,
            rated_power_kw: 18.0,
            observed_removal_kg_h: 0.4,
            max_intake_flow_m_s: 2.0,
        };

        let json = serde_json::to_string(&site).unwrap();
        let back: SiteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(site, back);
    }
}
