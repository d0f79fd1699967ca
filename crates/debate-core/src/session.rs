//! Play sessions and their scoring state
//!
//! A [`Session`] owns one player's [`GameState`] and applies the scoring
//! policy to each submitted argument:
//!
//! - the first use of a category scores its full weight
//! - every later use of the same category scores half (floored), never less
//! - skepticism drops by half the effective score, bottoming out at zero
//! - an argument that matches nothing leaves the state untouched

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::Classifier;
use crate::error::DebateError;
use crate::random::{RandomSource, StdRandom};

/// Unique identifier for a session
pub type SessionId = Uuid;

/// Credibility needed to convince the skeptic
pub const CONFIDENCE_THRESHOLD: u32 = 100;

/// Skepticism at the start of a game
pub const INITIAL_SKEPTICISM: f64 = 100.0;

pub const NOT_UNDERSTOOD_MESSAGE: &str =
    "I don't understand how that proves the Earth is round. Please provide clearer evidence.";

pub const REPEAT_MESSAGE: &str =
    "This type of argument has been used before. Reduced effectiveness.";

pub const FALLBACK_HINT: &str = "Try combining different types of evidence in your argument";

/// Observable phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Active,
    /// Terminal: credibility reached the threshold
    Convinced,
}

/// Mutable scoring state of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    credibility_score: u32,
    attempts: u32,
    skepticism: f64,
    /// Category ids in order of first use
    used_categories: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            credibility_score: 0,
            attempts: 0,
            skepticism: INITIAL_SKEPTICISM,
            used_categories: Vec::new(),
        }
    }

    pub fn credibility_score(&self) -> u32 {
        self.credibility_score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn skepticism(&self) -> f64 {
        self.skepticism
    }

    pub fn used_categories(&self) -> &[String] {
        &self.used_categories
    }

    /// Whether this category has already been scored once
    pub fn has_used(&self, category: &str) -> bool {
        self.used_categories.iter().any(|c| c == category)
    }

    pub fn is_convinced(&self) -> bool {
        self.credibility_score >= CONFIDENCE_THRESHOLD
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_convinced() {
            SessionPhase::Convinced
        } else {
            SessionPhase::Active
        }
    }

    /// Effective score for a category given its base weight
    pub fn effective_score(&self, category: &str, base_weight: u32) -> u32 {
        if self.has_used(category) {
            base_weight / 2
        } else {
            base_weight
        }
    }

    /// Apply one scored argument
    pub fn record(&mut self, category: &str, effective_score: u32) {
        if !self.has_used(category) {
            self.used_categories.push(category.to_string());
        }
        self.credibility_score = self.credibility_score.saturating_add(effective_score);
        self.attempts = self.attempts.saturating_add(1);
        self.skepticism = (self.skepticism - f64::from(effective_score) / 2.0).max(0.0);
    }

    /// Read-only projection of the state
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            credibility_score: self.credibility_score,
            attempts: self.attempts,
            skepticism: self.skepticism,
            convinced: self.is_convinced(),
            used_categories: self.used_categories.clone(),
        }
    }
}

/// Status view handed to presentation and reward layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub credibility_score: u32,
    pub attempts: u32,
    pub skepticism: f64,
    pub convinced: bool,
    pub used_categories: Vec<String>,
}

/// A successfully classified and scored argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArgument {
    pub category: String,
    /// Score actually credited (halved on repeats)
    pub score: u32,
    pub rebuttal: String,
    /// Set when the category had been used before
    pub repeat_message: Option<String>,
    /// Description of the evidence category
    pub evidence_type: String,
    pub status: StatusSnapshot,
}

/// Outcome of [`Session::submit`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitResult {
    Scored(ScoredArgument),
    /// Nothing in the argument matched a keyword; state is unchanged
    NotUnderstood {
        message: String,
        status: StatusSnapshot,
    },
}

impl SubmitResult {
    pub fn success(&self) -> bool {
        matches!(self, SubmitResult::Scored(_))
    }

    pub fn status(&self) -> &StatusSnapshot {
        match self {
            SubmitResult::Scored(scored) => &scored.status,
            SubmitResult::NotUnderstood { status, .. } => status,
        }
    }

    pub fn scored(&self) -> Option<&ScoredArgument> {
        match self {
            SubmitResult::Scored(scored) => Some(scored),
            SubmitResult::NotUnderstood { .. } => None,
        }
    }
}

/// One player's game
#[derive(Debug)]
pub struct Session {
    pub id: SessionId,
    pub started_at: DateTime<Utc>,
    classifier: Classifier,
    state: GameState,
    random: Box<dyn RandomSource>,
}

impl Session {
    /// New session drawing from OS-seeded randomness
    pub fn new(classifier: Classifier) -> Self {
        Self::with_random(classifier, Box::new(StdRandom::from_entropy()))
    }

    /// New session with an injected random source
    pub fn with_random(classifier: Classifier, random: Box<dyn RandomSource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            classifier,
            state: GameState::new(),
            random,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    pub fn status(&self) -> StatusSnapshot {
        self.state.snapshot()
    }

    /// Classify and score one argument
    pub fn submit(&mut self, raw_text: &str) -> Result<SubmitResult, DebateError> {
        let Some(classification) = self.classifier.classify(raw_text) else {
            metrics::counter!("debate_arguments_not_understood_total").increment(1);
            return Ok(SubmitResult::NotUnderstood {
                message: NOT_UNDERSTOOD_MESSAGE.to_string(),
                status: self.state.snapshot(),
            });
        };

        let category = classification.category;
        let repeated = self.state.has_used(&category);
        let score = self.state.effective_score(&category, classification.weight);

        // Resolve everything fallible before touching state
        let evidence_type = self.classifier.description_for(&category)?.to_string();
        let rebuttal = self
            .classifier
            .rebuttal_for(&category, self.random.as_mut())?
            .to_string();

        let was_convinced = self.state.is_convinced();
        self.state.record(&category, score);

        metrics::counter!("debate_arguments_total", "category" => category.clone()).increment(1);
        if repeated {
            metrics::counter!("debate_repeat_arguments_total").increment(1);
        }
        tracing::debug!(
            session = %self.id,
            category = %category,
            score,
            repeated,
            total = self.state.credibility_score(),
            "Scored argument"
        );
        if !was_convinced && self.state.is_convinced() {
            metrics::counter!("debate_sessions_convinced_total").increment(1);
            tracing::info!(
                session = %self.id,
                attempts = self.state.attempts(),
                score = self.state.credibility_score(),
                "Session convinced"
            );
        }

        Ok(SubmitResult::Scored(ScoredArgument {
            category,
            score,
            rebuttal,
            repeat_message: repeated.then(|| REPEAT_MESSAGE.to_string()),
            evidence_type,
            status: self.state.snapshot(),
        }))
    }

    /// Suggest a category the player has not used yet
    pub fn hint(&mut self) -> String {
        let unused: Vec<_> = self
            .classifier
            .table()
            .iter()
            .filter(|c| !self.state.has_used(&c.id))
            .collect();

        if unused.is_empty() {
            return FALLBACK_HINT.to_string();
        }
        let pick = unused[self.random.pick(unused.len())];
        format!("Try using evidence about {}", pick.description)
    }
}
