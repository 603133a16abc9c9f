//! Facts and the subject-grouped fact index.
//!
//! A [`Fact`] is the parser's only output unit. The model builder never walks
//! the raw fact sequence; it works through a [`FactIndex`], which groups facts
//! by subject while preserving source order (list-valued predicates such as
//! build order depend on it) and offers the typed accessors the category
//! builders share.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One (subject, predicate, object) triple, with prefixes already reduced to
/// local names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    /// Local name of the subject.
    pub subject: String,
    /// Local name of the predicate (`type` for class declarations).
    pub predicate: String,
    /// The typed object.
    pub object: Value,
}

impl Fact {
    /// Creates a fact.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: Value,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// A document's facts grouped by subject, in first-seen subject order.
#[derive(Debug, Default, Clone)]
pub struct FactIndex {
    order: Vec<String>,
    by_subject: HashMap<String, Vec<Fact>>,
}

impl FactIndex {
    /// Builds an index from an ordered fact sequence.
    #[must_use]
    pub fn from_facts(facts: Vec<Fact>) -> Self {
        let mut index = Self::default();
        index.extend(facts);
        index
    }

    /// Appends further facts, e.g. from the enrichment document. Per-subject
    /// source order is preserved.
    pub fn extend(&mut self, facts: Vec<Fact>) {
        for fact in facts {
            let group = match self.by_subject.get_mut(&fact.subject) {
                Some(group) => group,
                None => {
                    self.order.push(fact.subject.clone());
                    self.by_subject.entry(fact.subject.clone()).or_default()
                }
            };
            group.push(fact);
        }
    }

    /// Total number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_subject.values().map(Vec::len).sum()
    }

    /// Returns true if the index holds no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_subject.is_empty()
    }

    /// Subjects in first-seen order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// All facts for a subject, in source order. Empty for unknown subjects.
    #[must_use]
    pub fn facts(&self, subject: &str) -> &[Fact] {
        self.by_subject.get(subject).map_or(&[], Vec::as_slice)
    }

    /// Subjects declared with `a <class>` for the given class, in first-seen
    /// order.
    #[must_use]
    pub fn subjects_of_type(&self, class: &str) -> Vec<&str> {
        self.order
            .iter()
            .filter(|s| self.has_type(s, class))
            .map(String::as_str)
            .collect()
    }

    /// Returns true if the subject carries a `type` fact for the class.
    #[must_use]
    pub fn has_type(&self, subject: &str, class: &str) -> bool {
        self.facts(subject).iter().any(|f| {
            f.predicate == crate::schema::pred::TYPE && f.object.as_ref_name() == Some(class)
        })
    }

    /// All class names of a subject, in source order.
    #[must_use]
    pub fn types(&self, subject: &str) -> Vec<&str> {
        self.objects(subject, crate::schema::pred::TYPE)
            .filter_map(Value::as_ref_name)
            .collect()
    }

    /// All objects of a predicate on a subject, in source order.
    ///
    /// The predicate is captured by value so the iterator borrows only the
    /// index.
    pub fn objects<'a>(
        &'a self,
        subject: &str,
        predicate: &str,
    ) -> impl Iterator<Item = &'a Value> + 'a {
        let predicate = predicate.to_string();
        self.facts(subject)
            .iter()
            .filter(move |f| f.predicate == predicate)
            .map(|f| &f.object)
    }

    /// First object of a predicate, if any.
    #[must_use]
    pub fn first(&self, subject: &str, predicate: &str) -> Option<&Value> {
        self.facts(subject)
            .iter()
            .find(|f| f.predicate == predicate)
            .map(|f| &f.object)
    }

    /// First string object of a predicate.
    #[must_use]
    pub fn str_value(&self, subject: &str, predicate: &str) -> Option<&str> {
        self.objects(subject, predicate).find_map(Value::as_str)
    }

    /// First numeric object of a predicate. Quoted numbers coerce, matching
    /// how loosely the source documents type their literals.
    #[must_use]
    pub fn float_value(&self, subject: &str, predicate: &str) -> Option<f64> {
        self.objects(subject, predicate).find_map(|v| match v {
            Value::Int(_) | Value::Float(_) => v.as_float(),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// First integer object of a predicate. Decimals with no fractional part
    /// and quoted integers coerce.
    #[must_use]
    pub fn int_value(&self, subject: &str, predicate: &str) -> Option<i64> {
        self.objects(subject, predicate).find_map(|v| match v {
            Value::Int(n) => Some(*n),
            #[allow(clippy::cast_possible_truncation)]
            Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// First boolean object of a predicate. Quoted `"true"`/`"false"` coerce.
    #[must_use]
    pub fn bool_value(&self, subject: &str, predicate: &str) -> Option<bool> {
        self.objects(subject, predicate).find_map(|v| match v {
            Value::Bool(b) => Some(*b),
            Value::Str(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        })
    }

    /// First reference object of a predicate.
    #[must_use]
    pub fn ref_value(&self, subject: &str, predicate: &str) -> Option<&str> {
        self.objects(subject, predicate).find_map(Value::as_ref_name)
    }

    /// All reference objects of a predicate, in source order.
    #[must_use]
    pub fn ref_list(&self, subject: &str, predicate: &str) -> Vec<&str> {
        self.objects(subject, predicate)
            .filter_map(Value::as_ref_name)
            .collect()
    }

    /// All string objects of a predicate, in source order.
    #[must_use]
    pub fn str_list(&self, subject: &str, predicate: &str) -> Vec<&str> {
        self.objects(subject, predicate)
            .filter_map(Value::as_str)
            .collect()
    }
}
