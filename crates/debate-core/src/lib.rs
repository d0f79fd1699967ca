//! # Debate Core
//!
//! Engine for a keyword-scored debate game in which the player tries to
//! convince a skeptic that the Earth is round.
//!
//! - [`EvidenceTable`] — validated evidence categories (keywords, weights, rebuttals)
//! - [`Classifier`] — maps argument text to the heaviest matching category
//! - [`Session`] — one player's game: scoring, repeat penalty, hints
//! - [`SessionRegistry`] — sessions retrievable by id
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use debate_core::{Classifier, EvidenceTable, ScriptedRandom, Session};
//!
//! let table = Arc::new(EvidenceTable::builtin().unwrap());
//! let mut session = Session::with_random(
//!     Classifier::new(table),
//!     Box::new(ScriptedRandom::first()),
//! );
//!
//! let result = session.submit("NASA has satellite photos").unwrap();
//! assert_eq!(result.scored().unwrap().score, 15);
//!
//! let result = session.submit("more satellite images").unwrap();
//! assert_eq!(result.scored().unwrap().score, 7);
//! assert_eq!(session.status().credibility_score, 22);
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod evidence;
pub mod random;
pub mod registry;
pub mod session;

pub use classifier::{Classification, Classifier};
pub use config::GameConfig;
pub use error::{ConfigError, DebateError};
pub use evidence::{EvidenceCategory, EvidenceTable};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use registry::SessionRegistry;
pub use session::{
    GameState, ScoredArgument, Session, SessionId, SessionPhase, StatusSnapshot, SubmitResult,
    CONFIDENCE_THRESHOLD,
};
