//! Coaching strategies.
//!
//! [`OfflineCoach`] answers everything from the local engine and rules.
//! [`FallbackCoach`] asks a [`RemoteCoach`] first and drops back to the
//! offline answer whenever the remote path is disabled or fails.

use std::time::Duration;

use thirdvoice::{EmotionEngine, RelationshipContext, MIN_TEXT_CHARS};

use crate::{reframe_offline, CoachConfig, CoachError, CoachPrompt, CoachResult, MessageAnalysis};

/// A model that completes prompts, usually over the network.
pub trait RemoteCoach {
    /// Backend name used in logs.
    fn name(&self) -> &str;

    /// Send a prompt and return the model's raw reply.
    ///
    /// Implementations must give up once `timeout` has elapsed and return
    /// [`CoachError::Timeout`]; the caller does not enforce it.
    fn complete(&self, prompt: &CoachPrompt, timeout: Duration) -> CoachResult<String>;
}

impl<R: RemoteCoach + ?Sized> RemoteCoach for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn complete(&self, prompt: &CoachPrompt, timeout: Duration) -> CoachResult<String> {
        (**self).complete(prompt, timeout)
    }
}

/// The three coaching operations.
pub trait Coach {
    /// Sentiment, emotion and triggers of a message.
    fn analyze(&self, message: &str, context: RelationshipContext) -> CoachResult<MessageAnalysis>;

    /// Rewrite a message to be kinder and less accusatory.
    fn reframe(&self, message: &str, context: RelationshipContext) -> CoachResult<String>;

    /// Explain the feelings behind a received message.
    fn translate(&self, message: &str) -> CoachResult<String>;
}

#[derive(Debug, Clone)]
pub struct OfflineCoach {
    engine: EmotionEngine,
    config: CoachConfig,
}

impl OfflineCoach {
    pub fn new(config: CoachConfig) -> CoachResult<Self> {
        let engine = config.build_engine()?;
        Ok(Self::with_engine(engine, config))
    }

    pub fn with_engine(engine: EmotionEngine, config: CoachConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &EmotionEngine {
        &self.engine
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    /// Apply the input limit and reject messages too short to coach.
    pub fn prepare<'a>(&self, message: &'a str) -> CoachResult<&'a str> {
        let message = self.config.clamp_input(message);
        if message.trim().chars().count() < MIN_TEXT_CHARS {
            return Err(CoachError::MessageTooShort);
        }
        Ok(message)
    }
}

impl Default for OfflineCoach {
    fn default() -> Self {
        Self::with_engine(EmotionEngine::default(), CoachConfig::default())
    }
}

impl Coach for OfflineCoach {
    fn analyze(&self, message: &str, context: RelationshipContext) -> CoachResult<MessageAnalysis> {
        MessageAnalysis::offline(&self.engine, self.prepare(message)?, context)
    }

    fn reframe(&self, message: &str, context: RelationshipContext) -> CoachResult<String> {
        Ok(reframe_offline(self.prepare(message)?, context))
    }

    fn translate(&self, message: &str) -> CoachResult<String> {
        let analysis = self.analyze(message, self.config.default_context)?;
        Ok(translation_summary(&analysis))
    }
}

/// Plain-text summary of an analysis, for readers of a received message.
pub fn translation_summary(analysis: &MessageAnalysis) -> String {
    let mut out = format!(
        "Likely feeling: {} ({:.0}% confidence)\nTone: {}",
        analysis.primary_emotion,
        analysis.confidence * 100.0,
        analysis.tone
    );
    if !analysis.potential_triggers.is_empty() {
        let quoted: Vec<String> = analysis
            .potential_triggers
            .iter()
            .map(|t| format!("\"{}\"", t))
            .collect();
        out.push_str("\nWords that may sting: ");
        out.push_str(&quoted.join(", "));
    }
    if let Some(advice) = &analysis.advice {
        out.push('\n');
        out.push_str(advice);
    }
    out
}

/// Remote-first coaching with an offline safety net.
pub struct FallbackCoach<R> {
    remote: R,
    offline: OfflineCoach,
}

impl<R: RemoteCoach> FallbackCoach<R> {
    pub fn new(remote: R, offline: OfflineCoach) -> Self {
        Self { remote, offline }
    }

    pub fn from_config(remote: R, config: CoachConfig) -> CoachResult<Self> {
        Ok(Self::new(remote, OfflineCoach::new(config)?))
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn offline(&self) -> &OfflineCoach {
        &self.offline
    }

    /// The remote reply, or `None` when the offline path should answer.
    fn ask(&self, prompt: CoachPrompt) -> Option<String> {
        let config = self.offline.config();
        if !config.remote_enabled {
            tracing::debug!(kind = ?prompt.kind, "remote coaching disabled");
            return None;
        }

        match self.remote.complete(&prompt, config.remote_timeout()) {
            Ok(reply) if !reply.trim().is_empty() => Some(reply),
            Ok(_) => {
                tracing::warn!(
                    backend = self.remote.name(),
                    kind = ?prompt.kind,
                    "remote model returned an empty reply, using offline fallback"
                );
                None
            }
            Err(err) => {
                tracing::warn!(
                    backend = self.remote.name(),
                    kind = ?prompt.kind,
                    error = %err,
                    "remote model failed, using offline fallback"
                );
                None
            }
        }
    }
}

impl<R: RemoteCoach> Coach for FallbackCoach<R> {
    fn analyze(&self, message: &str, context: RelationshipContext) -> CoachResult<MessageAnalysis> {
        let message = self.offline.prepare(message)?;
        match self.ask(CoachPrompt::analysis(message)) {
            Some(reply) => Ok(MessageAnalysis::from_model_response(&reply)),
            None => self.offline.analyze(message, context),
        }
    }

    fn reframe(&self, message: &str, context: RelationshipContext) -> CoachResult<String> {
        let message = self.offline.prepare(message)?;
        match self.ask(CoachPrompt::reframe(message, context)) {
            Some(reply) => Ok(reply.trim().to_string()),
            None => self.offline.reframe(message, context),
        }
    }

    fn translate(&self, message: &str) -> CoachResult<String> {
        let message = self.offline.prepare(message)?;
        match self.ask(CoachPrompt::translation(message)) {
            Some(reply) => Ok(reply.trim().to_string()),
            None => self.offline.translate(message),
        }
    }
}
