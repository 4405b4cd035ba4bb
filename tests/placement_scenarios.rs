//! End-to-end placement scenarios against the reference device design.

use rstest::rstest;

use flowvac_siting::domain::{
    BioSafetyEnvelope, CarbonCoefficients, DeploymentContext, DeviceDesign, HydraulicEnvelope,
    MaterialBom, ResourceBudget, SiteGeometry,
};
use flowvac_siting::feasibility::{
    CheckDomain, DeltaBalance, PlacementEngine, PlacementProposal,
};

fn baseline_proposal() -> PlacementProposal {
    PlacementProposal {
        geometry: SiteGeometry {
            footprint_m2: 12.0,
            clearance_m: 3.0,
            soil_depth_m: 2.2,
            pipe_depth_m: 1.8,
            zoning_code: "MU-IND".to_string(),
        },
        hydraulics: HydraulicEnvelope {
            q_min_m3_s: 0.05,
            q_max_m3_s: 0.2,
            v_max_m_s: 2.0,
            head_loss_max_m: 0.5,
            backflow_flag: false,
        },
        resources: ResourceBudget {
            power_avail_kw: 15.0,
            energy_daily_kwh: 60.0,
            crew_hours_month: 4.0,
            maintenance_interval_max_days: 120,
        },
        bom: MaterialBom {
            steel_kg: 80.0,
            polymer_kg: 40.0,
            filter_media_kg: 15.0,
            cable_m: 100.0,
            pipe_m: 30.0,
        },
        bio_safety: BioSafetyEnvelope {
            habitat_type: "URBAN_CANAL".to_string(),
            exclusion_radius_m: 25.0,
            sensitive_species: 3,
            noise_limit_db: 65.0,
            em_limit_ut: 0.5,
            bio_stress_max: 0.2,
        },
        context: DeploymentContext::Urban,
        balance: DeltaBalance {
            network_delta: 0.5,
            energy_delta_kwh: -8.0,
            eco_delta: 0.01,
        },
    }
}

#[test]
fn baseline_scenario_accepts() {
    let engine = PlacementEngine::default();
    let report = engine.evaluate(&baseline_proposal(), &DeviceDesign::reference());
    assert!(report.accepted, "failed: {:?}", report.failed_domains());
}

/// Undersized site footprint rejects the placement even when every other
/// module and the balance rule pass; the verdict is a pure AND.
#[test]
fn undersized_footprint_rejects_whole_placement() {
    let mut proposal = baseline_proposal();
    proposal.geometry = SiteGeometry {
        footprint_m2: 8.0,
        clearance_m: 3.0,
        soil_depth_m: 2.2,
        pipe_depth_m: 1.8,
        zoning_code: "MU-IND".to_string(),
    };

    let engine = PlacementEngine::default();
    let report = engine.evaluate(&proposal, &DeviceDesign::reference());

    assert!(!report.accepted);
    assert!(report.balance_ok);
    assert_eq!(report.failed_domains(), vec![CheckDomain::Geometry]);
}

/// The published hydraulic window example: design 0.1 / 1.5 / 0.4 passes
/// window 0.05-0.2 / 2.0 / 0.5 with no backflow.
#[test]
fn hydraulic_window_example_passes() {
    let engine = PlacementEngine::default();
    let report = engine.evaluate(&baseline_proposal(), &DeviceDesign::reference());
    assert!(report
        .checks
        .iter()
        .any(|c| c.domain == CheckDomain::Hydraulic && c.passed));
}

/// The published carbon example: 100/50/20 kg and 200/50 m total 509 kgCO2e,
/// over the 500 kgCO2e ceiling.
#[test]
fn carbon_example_totals_509_and_fails() {
    let mut proposal = baseline_proposal();
    proposal.bom = MaterialBom {
        steel_kg: 100.0,
        polymer_kg: 50.0,
        filter_media_kg: 20.0,
        cable_m: 200.0,
        pipe_m: 50.0,
    };
    assert_eq!(
        proposal
            .bom
            .embodied_carbon_kg(&CarbonCoefficients::default()),
        509.0
    );

    let engine = PlacementEngine::default();
    let report = engine.evaluate(&proposal, &DeviceDesign::reference());
    assert!(!report.accepted);
    assert_eq!(report.failed_domains(), vec![CheckDomain::MaterialCarbon]);
}

#[rstest]
#[case::negative_network(DeltaBalance { network_delta: -0.1, energy_delta_kwh: -8.0, eco_delta: 0.01 })]
#[case::zero_network(DeltaBalance { network_delta: 0.0, energy_delta_kwh: -8.0, eco_delta: 0.01 })]
#[case::positive_energy(DeltaBalance { network_delta: 0.5, energy_delta_kwh: 0.5, eco_delta: 0.01 })]
#[case::negative_eco(DeltaBalance { network_delta: 0.5, energy_delta_kwh: -8.0, eco_delta: -0.01 })]
fn balance_violations_reject(#[case] balance: DeltaBalance) {
    let mut proposal = baseline_proposal();
    proposal.balance = balance;

    let engine = PlacementEngine::default();
    let report = engine.evaluate(&proposal, &DeviceDesign::reference());
    assert!(!report.accepted);
    assert!(!report.balance_ok);
    // All five constraint domains still pass and are still reported
    assert!(report.checks.iter().all(|c| c.passed));
}

#[rstest]
#[case::urban(DeploymentContext::Urban)]
#[case::coastal(DeploymentContext::Coastal)]
fn context_tag_does_not_change_verdict(#[case] context: DeploymentContext) {
    let mut proposal = baseline_proposal();
    proposal.context = context;

    let engine = PlacementEngine::default();
    assert!(engine
        .evaluate(&proposal, &DeviceDesign::reference())
        .accepted);
}

#[test]
fn backflow_site_rejects_regardless_of_design_headroom() {
    let mut proposal = baseline_proposal();
    proposal.hydraulics.backflow_flag = true;

    let mut gentle = DeviceDesign::reference();
    gentle.design_velocity_m_s = 0.2;
    gentle.head_loss_m = 0.05;

    let engine = PlacementEngine::default();
    let report = engine.evaluate(&proposal, &gentle);
    assert!(!report.accepted);
    assert_eq!(report.failed_domains(), vec![CheckDomain::Hydraulic]);
}
