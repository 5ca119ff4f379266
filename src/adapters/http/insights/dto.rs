//! HTTP DTOs for insight endpoints.

use serde::Serialize;

use crate::application::handlers::insights::EmotionalInsightsReport;
use crate::domain::mentor::{EmotionalInsights, NarrativeSource};

/// Patterns, growth areas and strengths at the top level, plus their origin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalInsightsResponse {
    #[serde(flatten)]
    pub insights: EmotionalInsights,
    pub insights_source: NarrativeSource,
}

impl From<EmotionalInsightsReport> for EmotionalInsightsResponse {
    fn from(report: EmotionalInsightsReport) -> Self {
        Self {
            insights: report.insights,
            insights_source: report.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_renders_flat_lists() {
        let json = serde_json::to_value(EmotionalInsightsResponse::from(EmotionalInsightsReport {
            insights: EmotionalInsights::fallback(),
            source: NarrativeSource::Fallback,
        }))
        .unwrap();

        assert_eq!(
            json["patterns"][0],
            "Regular journaling shows commitment to self-reflection"
        );
        assert_eq!(json["strengths"].as_array().unwrap().len(), 1);
        assert_eq!(json["insightsSource"], "fallback");
    }
}
