//! Prompts for the remote model.
//!
//! Each prompt is a system instruction plus the user turn. Nothing here talks
//! to the network; a [`RemoteCoach`](crate::RemoteCoach) sends them.

use serde::Serialize;
use thirdvoice::RelationshipContext;

/// What a prompt asks the model to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    Analysis,
    Reframe,
    Translation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachPrompt {
    pub kind: PromptKind,
    pub system: String,
    pub user: String,
}

/// One-line framing of the rewrite request for each relationship.
pub fn context_goal(context: RelationshipContext) -> &'static str {
    match context {
        RelationshipContext::General => "Improve this message to be clearer and kinder.",
        RelationshipContext::Romantic => "Make this message to a partner more loving.",
        RelationshipContext::Coparenting => {
            "Rephrase this co-parenting message so it stays focused on the child."
        }
        RelationshipContext::Workplace => "Make this professional message clearer.",
        RelationshipContext::Family => "Improve this family message with care.",
        RelationshipContext::Friend => "Help this message to a friend sound supportive.",
    }
}

/// Tone guidance for each relationship.
pub fn context_instructions(context: RelationshipContext) -> &'static str {
    match context {
        RelationshipContext::Romantic => {
            "Focus on love, understanding and partnership. Use warm, caring language."
        }
        RelationshipContext::Coparenting => {
            "Focus on the children's wellbeing. Use collaborative, child-focused language."
        }
        RelationshipContext::Workplace => {
            "Use professional, solution-focused language. Be respectful and constructive."
        }
        RelationshipContext::Family => {
            "Acknowledge shared history and use patient, caring language."
        }
        RelationshipContext::Friend => "Keep it casual, supportive and honest.",
        RelationshipContext::General => {
            "Use diplomatic, empathetic language that promotes understanding."
        }
    }
}

const ANALYSIS_SYSTEM: &str = "\
You analyze interpersonal messages for sentiment and emotion. Reply with a single JSON object and no other text. Fields:
- sentiment: \"positive\", \"negative\" or \"neutral\"
- confidence: number between 0.0 and 1.0
- primary_emotion: the main emotion detected
- emotions: list of {\"emotion\": name, \"score\": number}
- tone: short description of the overall tone
- potential_triggers: list of words or phrases that might cause a negative reaction";

const REFRAME_RULES: &str = "\
Rules:
1. Keep the core intent of the message
2. Remove accusatory language such as \"you always\" and \"you never\"
3. Prefer \"I\" statements over \"you\" statements
4. Add empathy and understanding
5. Focus on solutions rather than problems
6. Keep it natural and authentic
7. Make it shorter if the original is too long

Reply with the rewritten message only, no explanations.";

const TRANSLATION_SYSTEM: &str = "\
You are an emotional translator helping two people understand each other. For the message you are given, explain:
1. What emotions the sender might be feeling
2. What they might really mean beneath the surface
3. How the receiver could respond
4. What the sender might need right now

Be empathetic and insightful.";

fn quoted(message: &str) -> String {
    format!("Message:\n\"\"\"\n{}\n\"\"\"", message.trim())
}

impl CoachPrompt {
    pub fn analysis(message: &str) -> Self {
        Self {
            kind: PromptKind::Analysis,
            system: ANALYSIS_SYSTEM.to_string(),
            user: quoted(message),
        }
    }

    pub fn reframe(message: &str, context: RelationshipContext) -> Self {
        let system = format!(
            "{}\n\nContext: {}\nInstructions: {}\n\n{}",
            context_goal(context),
            context,
            context_instructions(context),
            REFRAME_RULES
        );
        Self {
            kind: PromptKind::Reframe,
            system,
            user: quoted(message),
        }
    }

    pub fn translation(message: &str) -> Self {
        Self {
            kind: PromptKind::Translation,
            system: TRANSLATION_SYSTEM.to_string(),
            user: quoted(message),
        }
    }
}
