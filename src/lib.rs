//! # riftkb - Structured MOBA knowledge base
//!
//! riftkb is the structured knowledge layer of a game-assistant system. It
//! ingests semantic-graph documents (a Turtle subset of subject-predicate-object
//! triples) describing game entities — champions, items, monsters, turrets —
//! and builds an immutable, queryable in-memory model.
//!
//! ## Core Concepts
//!
//! - **Fact**: one parsed (subject, predicate, object) triple
//! - **KnowledgeBase**: the build-once, read-only collection of typed entities
//! - **NameResolver**: maps human-typed names (aliases, punctuation variants)
//!   to canonical identifiers
//! - **QueryEngine**: a fixed catalog of structured query operations with
//!   typed results and typed recoverable errors
//!
//! The language-model collaborators sit outside this crate: an intent
//! classifier produces an [`IntentRequest`], [`dispatch`] routes it, and the
//! serialized [`QueryResult`] (or [`QueryError`]) is rendered into prose by
//! the response generator. The crate never constructs natural-language text.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use riftkb::{DocumentSet, KnowledgeBase, QueryEngine, SkillSlot};
//!
//! let docs = DocumentSet::from_dir("data/ontology")?;
//! let kb = KnowledgeBase::load(&docs)?;
//! let engine = QueryEngine::new(&kb);
//!
//! let id = engine.resolver().resolve("TF", None)?.id;
//! let result = engine.skill_value_at_level(&id, SkillSlot::Q, 3)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod champion;
pub mod error;
pub mod intent;
pub mod item;
pub mod objective;
pub mod query;
pub mod resolver;
pub mod schema;
pub mod store;
pub mod triple;
pub mod turtle;
pub mod value;

// Re-export primary types at crate root for convenience
pub use champion::{BaseStats, Champion, Skill, SkillRank, StatGrowth};
pub use error::{LoadError, ModelError, ParseError, ParseErrorKind, QueryError};
pub use intent::{dispatch, IntentRequest};
pub use item::Item;
pub use objective::{Monster, Turret};
pub use query::{stat_at_level, CounterDirection, QueryEngine, QueryResult};
pub use resolver::{normalize_name, NameResolver, Resolved};
pub use schema::{Category, SkillSlot};
pub use store::{DocumentSet, KnowledgeBase};
pub use triple::{Fact, FactIndex};
pub use turtle::parse_document;
pub use value::Value;
