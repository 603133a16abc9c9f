//! Error types for riftkb.
//!
//! All errors are strongly typed using thiserror and split along the
//! propagation policy: load-phase errors ([`LoadError`] and its causes) are
//! fatal — there is never a partially built knowledge base — while
//! query-phase errors ([`QueryError`]) are always returned to the caller as
//! values so the response-generation collaborator can render a message.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::schema::{Category, SkillSlot};

/// A malformed-document failure, with the position the parser gave up at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {kind}")]
pub struct ParseError {
    /// 1-based line of the offending token.
    pub line: usize,
    /// 1-based column of the offending token.
    pub column: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// The cause carried by a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A string literal ran to end of document without a closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// An IRI in a prefix declaration was never closed.
    #[error("unterminated IRI")]
    UnterminatedIri,

    /// A prefixed name used a prefix with no prior `@prefix` declaration.
    #[error("unknown prefix '{prefix}'")]
    UnknownPrefix { prefix: String },

    /// The predicate position held something other than `a` or a prefixed
    /// name.
    #[error("malformed predicate '{token}'")]
    MalformedPredicate { token: String },

    /// A numeric literal did not parse.
    #[error("malformed number '{token}'")]
    MalformedNumber { token: String },

    /// A required token was absent.
    #[error("expected {expected}, found '{found}'")]
    Expected { expected: &'static str, found: String },

    /// The document ended mid-statement.
    #[error("unexpected end of document")]
    UnexpectedEof,
}

/// A schema violation inside one document: a subject is missing a required
/// predicate, or carries one with the wrong object type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A required predicate is absent from the subject's fact group.
    #[error("{category} '{subject}' is missing required predicate '{predicate}'")]
    MissingPredicate {
        category: Category,
        subject: String,
        predicate: &'static str,
    },

    /// A predicate's object has the wrong type.
    #[error("{category} '{subject}': predicate '{predicate}' expected {expected}, found {found}")]
    IllTyped {
        category: Category,
        subject: String,
        predicate: String,
        expected: &'static str,
        found: String,
    },

    /// A skill subject's name suffix is not a recognized slot key.
    #[error("champion '{subject}': skill subject '{skill}' has unrecognized slot '{token}'")]
    UnknownSkillSlot {
        subject: String,
        skill: String,
        token: String,
    },

    /// An authored skill level is outside the valid rank range.
    #[error("champion '{subject}': skill level {level} is outside 1..=5")]
    SkillLevelOutOfRange { subject: String, level: i64 },
}

/// Fatal load-phase error. The whole load fails; no partial store is served.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A document file could not be read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One of the documents is not syntactically valid.
    #[error("malformed {document} document: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: ParseError,
    },

    /// A document parsed but violates the entity schema.
    #[error("invalid {document} document: {source}")]
    Model {
        document: &'static str,
        #[source]
        source: ModelError,
    },

    /// The same canonical identifier appeared in two categories.
    #[error("identifier '{id}' collides between categories {first} and {second}")]
    IdentifierCollision {
        id: String,
        first: Category,
        second: Category,
    },

    /// A relationship list names an entity that does not exist.
    #[error("{category} '{subject}': predicate '{predicate}' references unknown {target} '{reference}'")]
    DanglingReference {
        category: Category,
        subject: String,
        predicate: &'static str,
        target: Category,
        reference: String,
    },
}

/// Recoverable query-phase error. Serializes so the external collaborator can
/// always produce a user-facing message; never raised past the query engine.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum QueryError {
    /// No entity matched the given name.
    #[error("nothing named '{name}' was found")]
    NotFound {
        name: String,
        category: Option<Category>,
        /// Closest canonical identifiers by edit distance, best first.
        suggestions: Vec<String>,
    },

    /// The name matched entities in more than one category and no hint was
    /// given.
    #[error("'{name}' matches more than one category ({candidates:?}); supply a category hint")]
    AmbiguousName {
        name: String,
        candidates: Vec<Category>,
    },

    /// A level outside the valid set, which is carried along.
    #[error("level {given} is invalid; valid levels are {valid:?}")]
    InvalidLevel { given: u8, valid: Vec<u8> },

    /// A slot token the champion does not have (or that no champion has).
    #[error("unknown skill slot '{given}'; valid slots are {valid:?}")]
    InvalidSlot {
        given: String,
        valid: Vec<SkillSlot>,
    },

    /// An intent tag outside the fixed catalog.
    #[error("unsupported intent '{tag}'")]
    UnsupportedIntent { tag: String },

    /// A catalog intent arrived without a slot it requires.
    #[error("intent '{tag}' requires parameter '{parameter}'")]
    MissingParameter {
        tag: String,
        parameter: &'static str,
    },
}

impl QueryError {
    /// Returns true for resolution failures (the caller may retry with a
    /// corrected name or a category hint).
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::AmbiguousName { .. })
    }

    /// Returns true for caller-correctable input errors carrying the valid
    /// range or set.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidLevel { .. } | Self::InvalidSlot { .. })
    }
}
