//! Assessment record and the MBTI result bundle stored in it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    AssessmentId, DomainError, ErrorCode, Timestamp, UserId, ValidationError,
};
use crate::domain::personality::{JournalingInsights, PersonalityProfile, Response};

/// Kind of psychology assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    Mbti,
    Big5,
    Enneagram,
    Disc,
}

impl AssessmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Mbti => "mbti",
            AssessmentType::Big5 => "big5",
            AssessmentType::Enneagram => "enneagram",
            AssessmentType::Disc => "disc",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mbti" => Ok(AssessmentType::Mbti),
            "big5" => Ok(AssessmentType::Big5),
            "enneagram" => Ok(AssessmentType::Enneagram),
            "disc" => Ok(AssessmentType::Disc),
            other => Err(ValidationError::invalid_format(
                "assessment_type",
                format!("'{}' is not one of mbti, big5, enneagram, disc", other),
            )),
        }
    }
}

/// Everything stored for a completed MBTI questionnaire.
///
/// Raw responses are kept so results can be rescored later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiAssessmentResults {
    #[serde(flatten)]
    pub profile: PersonalityProfile,
    pub journaling_insights: JournalingInsights,
    pub responses: Vec<Response>,
}

impl MbtiAssessmentResults {
    pub fn to_json(&self) -> Result<Value, DomainError> {
        serde_json::to_value(self).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize MBTI results: {}", e),
            )
        })
    }
}

/// Validated input for storing an assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssessment {
    pub user_id: UserId,
    pub assessment_type: AssessmentType,
    pub results: Value,
}

impl NewAssessment {
    /// # Errors
    ///
    /// - `ValidationFailed` if `results` is not a non-empty JSON object
    pub fn new(
        user_id: UserId,
        assessment_type: AssessmentType,
        results: Value,
    ) -> Result<Self, DomainError> {
        match &results {
            Value::Object(map) if !map.is_empty() => {}
            _ => {
                return Err(DomainError::validation(
                    "results",
                    "Assessment results cannot be empty",
                ))
            }
        }
        Ok(Self {
            user_id,
            assessment_type,
            results,
        })
    }
}

/// A stored assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    id: AssessmentId,
    user_id: UserId,
    assessment_type: AssessmentType,
    results: Value,
    created_at: Timestamp,
}

impl Assessment {
    /// Creates a new assessment from validated input.
    pub fn create(new: NewAssessment) -> Self {
        Self {
            id: AssessmentId::new(),
            user_id: new.user_id,
            assessment_type: new.assessment_type,
            results: new.results,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute from persistence (no validation).
    pub fn reconstitute(
        id: AssessmentId,
        user_id: UserId,
        assessment_type: AssessmentType,
        results: Value,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            assessment_type,
            results,
            created_at,
        }
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.assessment_type
    }

    pub fn results(&self) -> &Value {
        &self.results
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Type code stored in an MBTI assessment's results.
    pub fn mbti_type(&self) -> Option<&str> {
        if self.assessment_type != AssessmentType::Mbti {
            return None;
        }
        self.results.get("type").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::personality::{catalog, PersonalityClassifier};
    use serde_json::json;

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    #[test]
    fn parses_known_types() {
        assert_eq!("big5".parse::<AssessmentType>(), Ok(AssessmentType::Big5));
        assert!("myers".parse::<AssessmentType>().is_err());
    }

    #[test]
    fn empty_or_non_object_results_are_rejected() {
        for results in [json!({}), json!([1, 2]), json!("text"), Value::Null] {
            let err = NewAssessment::new(user(), AssessmentType::Disc, results).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }
        assert!(NewAssessment::new(user(), AssessmentType::Disc, json!({"d": 1})).is_ok());
    }

    #[test]
    fn mbti_results_store_type_at_top_level() {
        let responses: Vec<Response> = catalog().iter().map(|i| Response::new(i.id, 4)).collect();
        let profile = PersonalityClassifier::classify(&responses);
        let bundle = MbtiAssessmentResults {
            journaling_insights: JournalingInsights::for_type(&profile.type_code),
            profile,
            responses,
        };
        let json = bundle.to_json().unwrap();

        assert_eq!(json["type"], "ESTJ");
        assert!(json["journalingInsights"]["growthPrompts"].is_array());
        assert_eq!(json["responses"].as_array().unwrap().len(), 32);

        let assessment = Assessment::create(
            NewAssessment::new(user(), AssessmentType::Mbti, json.clone()).unwrap(),
        );
        assert_eq!(assessment.mbti_type(), Some("ESTJ"));

        let roundtrip: MbtiAssessmentResults = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, bundle);
    }

    #[test]
    fn non_mbti_assessment_has_no_type() {
        let assessment = Assessment::create(
            NewAssessment::new(user(), AssessmentType::Big5, json!({"type": "ESTJ"})).unwrap(),
        );
        assert_eq!(assessment.mbti_type(), None);
    }
}
