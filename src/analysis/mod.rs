//! Production analysis: weight, risk and selling points
//!
//! Each engine is a pure projection of a [`FabricConfiguration`] and a
//! [`Catalog`]. [`analyze`] runs all three over a single resolution.

/// Production risk rules and aggregation
pub mod risk;
/// Selling point and copy generation
pub mod selling;
/// Areal weight estimation
pub mod weight;

use crate::catalog::Catalog;
use crate::fabric::config::FabricConfiguration;
use risk::RiskReport;
use selling::SellingReport;
use serde::Serialize;
use weight::FabricWeight;

/// Combined output of the three analysis engines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FabricAnalysis {
    /// Weave id the analysis was run for
    pub weave_id: String,
    /// Estimated weight, absent when the weave or warp yarn is unknown
    pub weight: Option<FabricWeight>,
    /// Production risks
    pub risks: RiskReport,
    /// Marketing points and copy
    pub selling: SellingReport,
}

/// Run weight, risk and selling analysis for one configuration
///
/// Unknown weave or warp yarn ids degrade to an absent weight, a clean risk
/// report and an empty selling report.
#[tracing::instrument(skip(config, catalog), fields(weave = %config.weave_id))]
pub fn analyze(config: &FabricConfiguration, catalog: &Catalog) -> FabricAnalysis {
    let resolved = config.resolve(catalog);
    FabricAnalysis {
        weave_id: config.weave_id.clone(),
        weight: resolved.as_ref().map(weight::estimate_weight),
        risks: resolved
            .as_ref()
            .map_or_else(RiskReport::clean, risk::assess_risks),
        selling: resolved
            .as_ref()
            .map_or_else(SellingReport::empty, selling::generate_selling_points),
    }
}
