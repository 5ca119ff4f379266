//! GetQuestionnaireHandler - Query handler for the MBTI question catalog.

use crate::domain::personality::{catalog, QuestionnaireItem};

/// Handler returning the fixed questionnaire.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetQuestionnaireHandler;

impl GetQuestionnaireHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> &'static [QuestionnaireItem] {
        catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::personality::CATALOG_SIZE;

    #[test]
    fn returns_full_catalog() {
        let items = GetQuestionnaireHandler::new().handle();
        assert_eq!(items.len(), CATALOG_SIZE);
        assert_eq!(items[0].id, "EI_1");
    }
}
