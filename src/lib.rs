//! # FlowVac Siting
//!
//! Placement feasibility evaluation for FlowVac units: water-flow devices
//! that draw energy from and remove PFBS out of flowing water at a fixed
//! site. The core is the [`feasibility`] engine, which combines five
//! independent constraint domains with a delta-balance sign test into a
//! single explainable accept/reject verdict. The [`estimate`] module derives
//! power, removal-rate, and eco-impact figures from raw site measurements;
//! [`ingest`] and [`report`] sit at the flat-file boundary.

pub mod config;
pub mod domain;
pub mod estimate;
pub mod feasibility;
pub mod ingest;
pub mod report;
pub mod telemetry;
