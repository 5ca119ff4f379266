//! Assessment Module - Stored questionnaire results.
//!
//! Only MBTI results are computed here. Other assessment types are stored
//! as opaque JSON objects.

mod record;

pub use record::{Assessment, AssessmentType, MbtiAssessmentResults, NewAssessment};
