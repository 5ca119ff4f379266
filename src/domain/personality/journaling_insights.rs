//! Per-type journaling guidance.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a personality type tends to journal and what to watch for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalingInsights {
    pub journaling_style: String,
    pub emotional_processing: String,
    pub stress_signals: Vec<String>,
    pub growth_prompts: Vec<String>,
}

impl JournalingInsights {
    /// Looks up the insights for a type code, falling back to the generic set.
    pub fn for_type(type_code: &str) -> Self {
        INSIGHTS
            .get(type_code)
            .cloned()
            .unwrap_or_else(Self::generic)
    }

    pub fn generic() -> Self {
        insights(
            "Your unique journaling style reflects your personality.",
            "You have your own way of processing emotions.",
            &["Individual stress patterns"],
            &["Personal growth questions"],
        )
    }
}

fn insights(
    journaling_style: &str,
    emotional_processing: &str,
    stress_signals: &[&str],
    growth_prompts: &[&str],
) -> JournalingInsights {
    JournalingInsights {
        journaling_style: journaling_style.to_string(),
        emotional_processing: emotional_processing.to_string(),
        stress_signals: stress_signals.iter().map(|s| s.to_string()).collect(),
        growth_prompts: growth_prompts.iter().map(|s| s.to_string()).collect(),
    }
}

static INSIGHTS: Lazy<HashMap<&'static str, JournalingInsights>> = Lazy::new(|| {
    let mut m = HashMap::with_capacity(16);
    m.insert("ENFP", insights(
        "You likely journal in bursts of inspiration, exploring possibilities and connecting ideas. Your entries may jump between topics as new thoughts emerge.",
        "You process emotions externally and may benefit from voice-to-text journaling or sharing entries with trusted friends for processing.",
        &["Feeling overwhelmed by possibilities", "Difficulty making decisions", "Avoiding routine tasks"],
        &["What small step can I take toward my goals today?", "How can I turn this idea into action?", "What routine would actually support my creativity?"],
    ));
    m.insert("INFP", insights(
        "Your journaling is deeply personal and reflective. You may write extensively about values, emotions, and the meaning behind experiences.",
        "You process emotions internally and thoroughly. Journaling helps you understand your complex inner world and align actions with values.",
        &["Feeling misunderstood", "Overwhelmed by criticism", "Struggling with perfectionism"],
        &["How can I honor my needs while meeting obligations?", "What would self-compassion look like here?", "How can I share my authentic self safely?"],
    ));
    m.insert("ENFJ", insights(
        "You may focus on relationships and how to help others. Your entries often explore interpersonal dynamics and ways to support those around you.",
        "You're naturally attuned to emotions but may neglect your own. Journaling helps you process your feelings separate from others' needs.",
        &["Feeling responsible for everyone", "Difficulty saying no", "Burnout from overgiving"],
        &["What do I need right now?", "How can I set healthy boundaries?", "What would happen if I prioritized my own well-being?"],
    ));
    m.insert("INFJ", insights(
        "Your journaling is introspective and visionary. You explore deep insights, future possibilities, and the underlying meanings of experiences.",
        "You process emotions deeply but privately. Journaling provides a safe space to explore your complex inner world without judgment.",
        &["Feeling overwhelmed by others' emotions", "Perfectionism paralysis", "Withdrawing from social connections"],
        &["How can I trust my intuition more?", "What boundaries do I need to protect my energy?", "How can I share my insights with others?"],
    ));
    m.insert("ENTP", insights(
        "Your entries may be scattered and idea-focused, jumping between topics as connections form. You might use journaling to brainstorm and explore possibilities.",
        "You may intellectualize emotions rather than feeling them directly. Journaling can help you connect with your emotional experience.",
        &["Feeling bored or restless", "Avoiding emotional conversations", "Starting many projects without finishing"],
        &["What am I really feeling beneath the thoughts?", "How can I turn these ideas into reality?", "What would emotional vulnerability look like for me?"],
    ));
    m.insert("INTP", insights(
        "Your journaling is analytical and exploratory. You may use it to work through complex ideas and understand patterns in your thinking.",
        "You prefer to understand emotions logically. Journaling helps you analyze feelings and identify patterns without the pressure of immediate response.",
        &["Feeling pressured to make decisions", "Overwhelmed by emotional demands", "Avoiding social obligations"],
        &["What data am I getting from this emotion?", "How can I communicate my needs clearly?", "What would happen if I acted on this insight?"],
    ));
    m.insert("ENTJ", insights(
        "Your journaling is goal-oriented and strategic. You may use it to plan, review progress, and identify obstacles to overcome.",
        "You may focus on practical solutions rather than emotional processing. Journaling can help you recognize the emotional components of situations.",
        &["Impatience with inefficiency", "Difficulty delegating", "Ignoring personal needs for goals"],
        &["What emotions am I experiencing about this situation?", "How can I better support my team?", "What would self-care look like while pursuing my goals?"],
    ));
    m.insert("INTJ", insights(
        "Your journaling is systematic and future-focused. You explore long-term visions, analyze patterns, and plan strategic approaches to goals.",
        "You prefer to understand emotions systematically. Journaling helps you process feelings privately and integrate them into your broader understanding.",
        &["Frustration with inefficiency", "Overwhelmed by social demands", "Perfectionism preventing action"],
        &["How can I share my vision with others?", "What emotions are informing this decision?", "How can I be more flexible while maintaining my standards?"],
    ));
    m.insert("ESFP", insights(
        "Your journaling captures moments and experiences vividly. You may write about daily events, people you've met, and immediate feelings.",
        "You process emotions in the moment and through experience. Journaling helps you reflect on patterns and learn from experiences.",
        &["Feeling trapped by routine", "Overwhelmed by future planning", "Difficulty with conflict"],
        &["What did I learn from this experience?", "How can I prepare for the future while enjoying today?", "What support do I need to handle this challenge?"],
    ));
    m.insert("ISFP", insights(
        "Your journaling is personal and value-driven. You explore your authentic feelings and how experiences align with your personal values.",
        "You feel emotions deeply but may need time to understand them. Journaling provides space to process feelings at your own pace.",
        &["Feeling pressured to conform", "Overwhelmed by conflict", "Struggling with decisions"],
        &["What do my values tell me about this situation?", "How can I honor my needs while maintaining harmony?", "What would courage look like here?"],
    ));
    m.insert("ESFJ", insights(
        "Your journaling often focuses on relationships and how to help others. You may write about social interactions and ways to maintain harmony.",
        "You're naturally aware of emotions but may focus more on others' feelings than your own. Journaling helps you attend to your emotional needs.",
        &["Feeling unappreciated", "Overwhelmed by others' needs", "Difficulty with criticism"],
        &["What appreciation do I need right now?", "How can I set boundaries while still caring for others?", "What would putting my needs first look like?"],
    ));
    m.insert("ISFJ", insights(
        "Your journaling is detailed and caring, often focusing on others' well-being and how to be helpful. You may document daily experiences thoroughly.",
        "You may suppress your own emotions to maintain harmony. Journaling provides a private space to acknowledge and process your feelings.",
        &["Feeling overwhelmed by responsibilities", "Difficulty saying no", "Avoiding conflict at personal cost"],
        &["What do I need to feel supported?", "How can I express my needs without feeling selfish?", "What changes would improve my well-being?"],
    ));
    m.insert("ESTP", insights(
        "Your journaling captures action and experiences. You may write briefly about daily events, successes, and practical challenges you're facing.",
        "You prefer to process emotions through action and experience. Journaling can help you reflect on patterns and learn from experiences.",
        &["Feeling restless or confined", "Avoiding emotional conversations", "Acting impulsively under pressure"],
        &["What is this emotion telling me to do?", "How can I channel this energy productively?", "What would slowing down reveal to me?"],
    ));
    m.insert("ISTP", insights(
        "Your journaling is practical and problem-focused. You may write about challenges you're solving and technical or practical interests.",
        "You may struggle with emotional expression but can benefit from exploring feelings through problem-solving frameworks in journaling.",
        &["Feeling trapped by obligations", "Overwhelmed by emotional demands", "Withdrawing from social interactions"],
        &["What is the problem I'm trying to solve here?", "How can I create more space for myself?", "What would expressing this feeling look like?"],
    ));
    m.insert("ESTJ", insights(
        "Your journaling is organized and goal-oriented. You may use it to plan, track progress, and identify obstacles to achieving objectives.",
        "You may focus on practical solutions over emotional processing. Journaling can help you recognize and address emotional components of situations.",
        &["Frustration with inefficiency", "Difficulty delegating control", "Ignoring personal needs for productivity"],
        &["What emotions are driving my reactions here?", "How can I better support others while achieving goals?", "What would work-life balance look like for me?"],
    ));
    m.insert("ISTJ", insights(
        "Your journaling is systematic and detailed. You may document experiences thoroughly and reflect on lessons learned and practical applications.",
        "You prefer emotional stability and may need structure to process feelings. Journaling provides a reliable framework for emotional exploration.",
        &["Feeling overwhelmed by change", "Difficulty expressing emotions", "Stress from unexpected disruptions"],
        &["How can I adapt to this change while honoring my needs?", "What support systems do I have available?", "What would flexibility look like in this situation?"],
    ));
    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_has_three_prompts_and_signals() {
        let insights = JournalingInsights::for_type("ISFJ");
        assert_eq!(insights.stress_signals.len(), 3);
        assert_eq!(insights.growth_prompts.len(), 3);
        assert_eq!(insights.growth_prompts[0], "What do I need to feel supported?");
    }

    #[test]
    fn all_sixteen_types_are_covered() {
        assert_eq!(INSIGHTS.len(), 16);
    }

    #[test]
    fn unknown_type_gets_generic_insights() {
        let insights = JournalingInsights::for_type("");
        assert_eq!(insights, JournalingInsights::generic());
        assert_eq!(insights.stress_signals, vec!["Individual stress patterns"]);
    }
}
