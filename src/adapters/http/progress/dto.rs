//! HTTP DTOs for progress endpoints.

use serde::Serialize;

use crate::application::handlers::progress::ProgressReport;
use crate::domain::mentor::{NarrativeSource, ProgressNarrative};
use crate::domain::progress::{MoodTrendPoint, ProgressMetrics};

/// Comprehensive progress view.
///
/// The narrative lists sit at the top level next to `metrics`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReportResponse {
    pub metrics: ProgressMetrics,
    #[serde(flatten)]
    pub narrative: ProgressNarrative,
    pub mood_trends: Vec<MoodTrendPoint>,
    pub narrative_source: NarrativeSource,
}

impl From<ProgressReport> for ProgressReportResponse {
    fn from(report: ProgressReport) -> Self {
        Self {
            metrics: report.metrics,
            narrative: report.narrative,
            mood_trends: report.mood_trends,
            narrative_source: report.narrative_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_matches_client_shape() {
        let response = ProgressReportResponse::from(ProgressReport {
            metrics: ProgressMetrics::empty(),
            narrative: ProgressNarrative::empty_history(),
            narrative_source: NarrativeSource::EmptyHistory,
            mood_trends: Vec::new(),
        });
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["metrics"]["totalEntries"], 0);
        assert_eq!(json["metrics"]["moodDistribution"]["positive"], 0);
        assert_eq!(json["patterns"].as_array().unwrap().len(), 0);
        assert_eq!(
            json["growthAreas"][0],
            "Begin your emotional wellness journey by writing your first journal entry"
        );
        assert_eq!(json["moodTrends"].as_array().unwrap().len(), 0);
        assert_eq!(json["narrativeSource"], "empty_history");
    }
}
