//! Static per-type narrative bundles.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive text attached to a personality type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNarrative {
    pub description: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub emotional_style: String,
    pub relationship_style: String,
    pub stress_response: String,
}

impl TypeNarrative {
    /// Looks up the narrative for a four-letter type code.
    ///
    /// Unknown codes get the generic narrative.
    pub fn for_type(type_code: &str) -> Self {
        NARRATIVES
            .get(type_code)
            .cloned()
            .unwrap_or_else(Self::generic)
    }

    /// Narrative used when a type code has no table entry.
    pub fn generic() -> Self {
        narrative(
            "A unique personality type with its own strengths and challenges.",
            &["Individual strengths", "Personal qualities"],
            &["Areas for development", "Growth opportunities"],
            "Your unique emotional approach.",
            "Your personal relationship style.",
            "Your individual stress response pattern.",
        )
    }
}

fn narrative(
    description: &str,
    strengths: &[&str],
    growth_areas: &[&str],
    emotional_style: &str,
    relationship_style: &str,
    stress_response: &str,
) -> TypeNarrative {
    TypeNarrative {
        description: description.to_string(),
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
        growth_areas: growth_areas.iter().map(|s| s.to_string()).collect(),
        emotional_style: emotional_style.to_string(),
        relationship_style: relationship_style.to_string(),
        stress_response: stress_response.to_string(),
    }
}

static NARRATIVES: Lazy<HashMap<&'static str, TypeNarrative>> = Lazy::new(|| {
    let mut m = HashMap::with_capacity(16);
    m.insert("ENFP", narrative(
        "The Campaigner - Enthusiastic, creative, and sociable free spirits who can always find a reason to smile.",
        &["Excellent communication skills", "Natural enthusiasm", "Creative problem-solving", "Empathetic and understanding"],
        &["Following through on commitments", "Managing time and priorities", "Handling routine tasks", "Making difficult decisions"],
        "Expressive and empathetic, you feel emotions deeply and aren't afraid to show them. You're naturally optimistic and can inspire others with your enthusiasm.",
        "You form deep, meaningful connections quickly and value authentic emotional bonds. You're supportive and encouraging to those you care about.",
        "Under stress, you may become overwhelmed by possibilities and struggle to focus. You might withdraw emotionally or become uncharacteristically critical.",
    ));
    m.insert("INFP", narrative(
        "The Mediator - Poetic, kind, and altruistic, always eager to help a good cause.",
        &["Deep empathy", "Strong values", "Creative expression", "Authentic relationships"],
        &["Asserting needs", "Handling criticism", "Making practical decisions", "Managing perfectionism"],
        "You experience emotions intensely and authentically. Your feelings run deep, and you value emotional honesty and integrity above all.",
        "You seek deep, meaningful connections and are incredibly loyal. You prefer quality over quantity in relationships and value being truly understood.",
        "When stressed, you may become withdrawn and self-critical. You might struggle with decision-making and feel overwhelmed by external pressures.",
    ));
    m.insert("ENFJ", narrative(
        "The Protagonist - Charismatic and inspiring leaders, able to mesmerize their listeners.",
        &["Natural leadership", "Excellent interpersonal skills", "Inspiring others", "Understanding people's needs"],
        &["Setting boundaries", "Focusing on own needs", "Handling conflict", "Managing perfectionism"],
        "You're emotionally expressive and attuned to others' feelings. You have a gift for understanding and motivating people emotionally.",
        "You're nurturing and supportive, often putting others' needs before your own. You excel at bringing out the best in people.",
        "Under stress, you may become overly critical of yourself and others. You might neglect your own needs while trying to help everyone else.",
    ));
    m.insert("INFJ", narrative(
        "The Advocate - Creative and insightful, inspired and independent perfectionists.",
        &["Deep insight", "Visionary thinking", "Empathetic understanding", "Principled decision-making"],
        &["Expressing needs directly", "Managing perfectionism", "Handling criticism", "Maintaining work-life balance"],
        "You feel emotions deeply but may keep them private. You're highly intuitive about others' emotional states and value emotional authenticity.",
        "You form few but very deep relationships. You value being understood and appreciated for your authentic self.",
        "When stressed, you may become withdrawn and overwhelmed. You might ruminate excessively or become uncharacteristically harsh in your judgments.",
    ));
    m.insert("ENTP", narrative(
        "The Debater - Smart and curious thinkers who cannot resist an intellectual challenge.",
        &["Quick thinking", "Innovative ideas", "Adaptability", "Enthusiasm for learning"],
        &["Following through on projects", "Attention to detail", "Managing routine tasks", "Being sensitive to others' feelings"],
        "You're emotionally resilient and optimistic. You tend to intellectualize emotions and may struggle with deep emotional processing.",
        "You enjoy stimulating conversations and debates. You're charming and enjoy meeting new people but may struggle with emotional depth.",
        "Under stress, you may become scattered and indecisive. You might avoid dealing with problems by pursuing new distractions.",
    ));
    m.insert("INTP", narrative(
        "The Thinker - Innovative inventors with an unquenchable thirst for knowledge.",
        &["Logical analysis", "Independent thinking", "Theoretical understanding", "Objective decision-making"],
        &["Expressing emotions", "Following schedules", "Completing projects", "Managing practical matters"],
        "You tend to keep emotions private and may struggle to express feelings. You prefer logical analysis over emotional processing.",
        "You value intellectual compatibility and need space for independence. You show care through sharing ideas and interests.",
        "When stressed, you may withdraw completely or become uncharacteristically emotional. You might procrastinate or avoid dealing with the stressor.",
    ));
    m.insert("ENTJ", narrative(
        "The Commander - Bold, imaginative, and strong-willed leaders who always find a way.",
        &["Natural leadership", "Strategic thinking", "Efficient organization", "Confident decision-making"],
        &["Considering others' feelings", "Patience with slower processes", "Delegating effectively", "Managing work-life balance"],
        "You're emotionally controlled and may struggle to express vulnerability. You prefer action over emotional discussion.",
        "You're protective and loyal but may struggle with emotional intimacy. You show care through acts of service and problem-solving.",
        "Under stress, you may become more controlling or aggressive. You might ignore your emotional needs and push harder toward goals.",
    ));
    m.insert("INTJ", narrative(
        "The Architect - Imaginative and strategic thinkers, with a plan for everything.",
        &["Strategic planning", "Independent thinking", "High standards", "Long-term vision"],
        &["Expressing emotions", "Being flexible with plans", "Considering others' input", "Managing perfectionism"],
        "You keep emotions private and controlled. You may struggle with emotional expression but feel deeply about your values and goals.",
        "You're selective in relationships and value intellectual connection. You're loyal but may struggle with emotional expression.",
        "When stressed, you may become more withdrawn and critical. You might overanalyze situations or become rigid in your thinking.",
    ));
    m.insert("ESFP", narrative(
        "The Entertainer - Spontaneous, energetic, and enthusiastic people who love life and charm others.",
        &["Enthusiasm", "People skills", "Adaptability", "Practical problem-solving"],
        &["Long-term planning", "Handling criticism", "Sticking to schedules", "Abstract thinking"],
        "You're emotionally expressive and spontaneous. You live in the moment and aren't afraid to show your feelings.",
        "You're warm, caring, and fun-loving. You enjoy being around people and making others feel good about themselves.",
        "Under stress, you may become overly emotional or avoid dealing with problems. You might seek immediate gratification or distraction.",
    ));
    m.insert("ISFP", narrative(
        "The Adventurer - Flexible and charming artists, always ready to explore new possibilities.",
        &["Artistic ability", "Adaptability", "Empathy", "Authentic relationships"],
        &["Asserting opinions", "Long-term planning", "Handling conflict", "Making decisions quickly"],
        "You feel emotions deeply but may keep them private. You're sensitive to others' emotions and value harmony.",
        "You're gentle and caring, preferring harmony in relationships. You show love through actions rather than words.",
        "When stressed, you may withdraw or become overwhelmed by emotions. You might avoid conflict or become indecisive.",
    ));
    m.insert("ESFJ", narrative(
        "The Consul - Extraordinarily caring, social, and popular people, always eager to help.",
        &["Interpersonal skills", "Practical help", "Organization", "Loyalty"],
        &["Handling criticism", "Setting boundaries", "Being flexible", "Focusing on own needs"],
        "You're emotionally expressive and attuned to others' needs. You feel responsible for others' emotional well-being.",
        "You're nurturing and supportive, often putting others first. You value harmony and work hard to maintain good relationships.",
        "Under stress, you may become overly worried about others or take criticism too personally. You might neglect your own needs.",
    ));
    m.insert("ISFJ", narrative(
        "The Protector - Very dedicated and warm protectors, always ready to defend their loved ones.",
        &["Reliability", "Attention to detail", "Empathy", "Practical support"],
        &["Asserting needs", "Handling change", "Setting boundaries", "Taking risks"],
        "You're emotionally supportive but may suppress your own needs. You're sensitive to others' emotions and prefer emotional stability.",
        "You're loyal and caring, often putting others' needs before your own. You show love through acts of service and remembering details.",
        "When stressed, you may become overwhelmed by responsibilities or withdraw to avoid conflict. You might bottle up emotions.",
    ));
    m.insert("ESTP", narrative(
        "The Entrepreneur - Smart, energetic, and perceptive people who truly enjoy living on the edge.",
        &["Adaptability", "Practical problem-solving", "People skills", "Crisis management"],
        &["Long-term planning", "Following through", "Considering consequences", "Abstract thinking"],
        "You're emotionally resilient and live in the moment. You may struggle with deep emotional processing but are good at moving on.",
        "You're fun-loving and spontaneous in relationships. You enjoy shared activities and may struggle with emotional depth.",
        "Under stress, you may become more impulsive or seek immediate relief. You might avoid dealing with emotional issues.",
    ));
    m.insert("ISTP", narrative(
        "The Virtuoso - Bold and practical experimenters, masters of all kinds of tools.",
        &["Practical skills", "Problem-solving", "Adaptability", "Independent thinking"],
        &["Expressing emotions", "Long-term planning", "Considering others' feelings", "Following schedules"],
        "You tend to keep emotions private and may struggle with emotional expression. You prefer action over emotional discussion.",
        "You value independence and may struggle with emotional intimacy. You show care through practical help and shared activities.",
        "When stressed, you may withdraw completely or act impulsively. You might avoid emotional discussions or become more isolated.",
    ));
    m.insert("ESTJ", narrative(
        "The Executive - Excellent administrators, unsurpassed at managing things or people.",
        &["Leadership", "Organization", "Efficiency", "Practical decision-making"],
        &["Considering others' feelings", "Being flexible", "Expressing emotions", "Delegating"],
        "You're emotionally controlled and may struggle with vulnerability. You prefer practical solutions over emotional processing.",
        "You're loyal and responsible but may struggle with emotional expression. You show care through providing and organizing.",
        "Under stress, you may become more controlling or critical. You might work harder instead of addressing emotional needs.",
    ));
    m.insert("ISTJ", narrative(
        "The Logistician - Practical and fact-minded, reliable and responsible.",
        &["Reliability", "Attention to detail", "Organization", "Systematic approach"],
        &["Adapting to change", "Expressing emotions", "Being flexible", "Considering new perspectives"],
        "You're emotionally steady but may struggle with expression. You prefer emotional stability and may avoid emotional discussions.",
        "You're loyal and dependable but may struggle with emotional intimacy. You show love through consistency and reliability.",
        "When stressed, you may become more rigid or withdraw. You might focus excessively on details or become overwhelmed by change.",
    ));
    m
});

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [&str; 16] = [
        "ENFP", "INFP", "ENFJ", "INFJ", "ENTP", "INTP", "ENTJ", "INTJ", "ESFP", "ISFP", "ESFJ",
        "ISFJ", "ESTP", "ISTP", "ESTJ", "ISTJ",
    ];

    #[test]
    fn every_type_code_has_a_specific_narrative() {
        let generic = TypeNarrative::generic();
        for code in ALL_TYPES {
            let narrative = TypeNarrative::for_type(code);
            assert_ne!(narrative, generic, "type {}", code);
            assert_eq!(narrative.strengths.len(), 4);
            assert_eq!(narrative.growth_areas.len(), 4);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_generic() {
        let narrative = TypeNarrative::for_type("XXXX");
        assert_eq!(
            narrative.description,
            "A unique personality type with its own strengths and challenges."
        );
        assert_eq!(narrative.strengths, vec!["Individual strengths", "Personal qualities"]);
    }

    #[test]
    fn narrative_serializes_camel_case() {
        let json = serde_json::to_value(TypeNarrative::for_type("INTJ")).unwrap();
        assert!(json["growthAreas"].is_array());
        assert!(json["stressResponse"].as_str().unwrap().starts_with("When stressed"));
    }
}
