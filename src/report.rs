//! Line-oriented estimator report: one `id,power,removal,eco` line per site,
//! preceded by `#`-prefixed header lines naming the report and its source.

use itertools::Itertools;

use crate::domain::SiteRecord;
use crate::estimate::{self, EstimatorParams};

/// One formatted report line for a site: identifier, power (2 decimals),
/// removal rate (3 decimals), eco score (3 decimals).
pub fn site_line(site: &SiteRecord, params: &EstimatorParams) -> String {
    let power_kw = estimate::estimate_power_kw(site, params);
    let removal_kg_h = estimate::estimate_removal_kg_h(site, params);
    let eco_score = estimate::estimate_eco_impact(site, power_kw, removal_kg_h, params);

    format!(
        "{},{:.2},{:.3},{:.3}",
        site.site_id, power_kw, removal_kg_h, eco_score
    )
}

/// Full report for a batch of sites.
pub fn render(sites: &[SiteRecord], source: &str, params: &EstimatorParams) -> String {
    let mut out = format!("# FlowVac power and PFBS estimation\n# Source: {source}\n");
    let body = sites.iter().map(|site| site_line(site, params)).join("\n");
    out.push_str(&body);
    if !body.is_empty() {
        out.push('\n');
    }
    out
}
