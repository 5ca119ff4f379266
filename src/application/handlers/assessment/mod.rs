//! Assessment handlers.
//!
//! MBTI submissions are validated strictly before scoring. Other assessment
//! types are stored as opaque JSON.

mod create_assessment;
mod get_latest_mbti;
mod get_questionnaire;
mod list_assessments;
mod submit_mbti_assessment;

pub use create_assessment::{CreateAssessmentCommand, CreateAssessmentHandler};
pub use get_latest_mbti::{latest_mbti_type, GetLatestMbtiHandler, GetLatestMbtiQuery};
pub use get_questionnaire::GetQuestionnaireHandler;
pub use list_assessments::{ListAssessmentsHandler, ListAssessmentsQuery};
pub use submit_mbti_assessment::{
    SubmitMbtiAssessmentCommand, SubmitMbtiAssessmentHandler, SubmitMbtiAssessmentResult,
};
