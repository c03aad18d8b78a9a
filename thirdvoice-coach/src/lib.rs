#![doc(
    html_logo_url = "https://thethirdvoice.ai/assets/thirdvoice.svg",
    issue_tracker_base_url = "https://github.com/thethirdvoice/thirdvoice/issues/"
)]

//! Message coaching on top of the `thirdvoice` engine.
//!
//! A [`Coach`] analyzes, reframes and translates messages. [`OfflineCoach`]
//! needs nothing but the local tables. [`FallbackCoach`] sends prompts to a
//! caller-supplied [`RemoteCoach`] and uses the offline answer whenever the
//! remote path is disabled, times out or returns something unusable.
//!
//! ```
//! use thirdvoice::RelationshipContext;
//! use thirdvoice_coach::{Coach, OfflineCoach};
//!
//! let coach = OfflineCoach::default();
//! let reframed = coach
//!     .reframe("You never call me back", RelationshipContext::Romantic)
//!     .unwrap();
//! assert!(reframed.contains("It would help if call me back."));
//! ```
//!
//! Settings come from a TOML [`CoachConfig`].

mod analysis;
mod coach;
mod config;
mod error;
mod prompt;
mod reframe;

pub use analysis::{
    describe_tone, AnalysisSource, EmotionScore, MessageAnalysis, DEFAULT_MODEL_CONFIDENCE,
    KEYWORD_CONFIDENCE, UNSPECIFIED_EMOTION,
};
pub use coach::{translation_summary, Coach, FallbackCoach, OfflineCoach, RemoteCoach};
pub use config::{CoachConfig, ExtraWords, DEFAULT_MAX_INPUT_CHARS, DEFAULT_REMOTE_TIMEOUT_SECS};
pub use error::{CoachError, CoachResult};
pub use prompt::{context_goal, context_instructions, CoachPrompt, PromptKind};
pub use reframe::{reframe_offline, soften};
