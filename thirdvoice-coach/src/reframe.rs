//! Rule-based reframing for when no model is available.
//!
//! The message is lowercased, accusatory phrasing is softened by a fixed
//! sequence of whole-word replacements, and the result is wrapped in an
//! opener and closer for the relationship.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thirdvoice::RelationshipContext;
use unicode_segmentation::UnicodeSegmentation;

enum Rewrite {
    Literal(&'static str),
    /// `you` becomes `I feel`; a contraction keeps its pronoun after it.
    SecondPerson,
}

/// Applied in order; later rules see the output of earlier ones.
static REPLACEMENTS: Lazy<Vec<(Regex, Rewrite)>> = Lazy::new(|| {
    [
        (r"\byou always\b", Rewrite::Literal("I've noticed")),
        (r"\byou never\b", Rewrite::Literal("it would help if")),
        (r"\byou\b(['\x{2019}][a-z]+)?", Rewrite::SecondPerson),
        (r"\balways\b", Rewrite::Literal("sometimes")),
        (r"\bnever\b", Rewrite::Literal("rarely")),
        // lowercasing also hit the speaker's own pronoun
        (r"\bi\b", Rewrite::Literal("I")),
    ]
    .into_iter()
    .map(|(pattern, rewrite)| {
        (
            Regex::new(pattern).expect("reframe patterns are valid"),
            rewrite,
        )
    })
    .collect()
});

struct Frame {
    opener: &'static str,
    closer: &'static str,
}

fn frame(context: RelationshipContext) -> Frame {
    match context {
        RelationshipContext::Coparenting => Frame {
            opener: "Hi, I wanted to talk about something regarding our child.",
            closer: "Can we find a solution that works for everyone?",
        },
        RelationshipContext::Romantic => Frame {
            opener: "Hey love, I wanted to share something that's been on my mind.",
            closer: "I care about us and want to work through this together.",
        },
        RelationshipContext::Workplace => Frame {
            opener: "I wanted to discuss something with you.",
            closer: "I'd appreciate your thoughts on how we can improve this situation.",
        },
        RelationshipContext::General | RelationshipContext::Family | RelationshipContext::Friend => {
            Frame {
                opener: "I hope you're doing well. I wanted to bring something up:",
                closer: "I'd love to hear your thoughts on this.",
            }
        }
    }
}

/// Soften the wording of a message without changing its frame.
pub fn soften(message: &str) -> String {
    let mut text = message.trim().to_lowercase();
    for (pattern, rewrite) in REPLACEMENTS.iter() {
        text = match rewrite {
            Rewrite::Literal(replacement) => pattern.replace_all(&text, *replacement),
            Rewrite::SecondPerson => pattern.replace_all(&text, |caps: &Captures| {
                match caps.get(1) {
                    Some(contraction) => format!("I feel you{}", contraction.as_str()),
                    None => "I feel".to_string(),
                }
            }),
        }
        .into_owned();
    }
    capitalize_first(&text)
}

/// Reframe a message with the built-in rules.
pub fn reframe_offline(message: &str, context: RelationshipContext) -> String {
    let Frame { opener, closer } = frame(context);
    let mut body = soften(message);
    if body.is_empty() {
        return format!("{} {}", opener, closer);
    }
    if !body.ends_with(|c: char| matches!(c, '.' | '!' | '?')) {
        body.push('.');
    }
    format!("{} {} {}", opener, body, closer)
}

fn capitalize_first(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut out = first.to_uppercase();
            out.push_str(graphemes.as_str());
            out
        }
        None => String::new(),
    }
}
