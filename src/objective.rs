//! Map objectives: jungle monsters and turrets.
//!
//! Both categories share the same thin shape — a display label, an objective
//! health pool, and a loosely-typed stat block — so they live together here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::resolver::normalize_name;
use crate::schema::{self, pred, Category};
use crate::triple::FactIndex;
use crate::value::Value;

fn stat_block(index: &FactIndex, subject: &str) -> BTreeMap<String, f64> {
    let mut stats = BTreeMap::new();
    if let Some(stats_subject) = index.ref_value(subject, pred::HAS_BASE_STATS) {
        for fact in index.facts(stats_subject) {
            if let Some(v) = fact.object.as_float() {
                stats.insert(fact.predicate.clone(), v);
            }
        }
    }
    stats
}

fn extension_map(
    index: &FactIndex,
    subject: &str,
    category: Category,
) -> BTreeMap<String, Vec<Value>> {
    let mut extensions: BTreeMap<String, Vec<Value>> = BTreeMap::new();
    for fact in index.facts(subject) {
        if !schema::is_recognized(category, &fact.predicate) {
            extensions
                .entry(fact.predicate.clone())
                .or_default()
                .push(fact.object.clone());
        }
    }
    extensions
}

/// A neutral jungle monster or boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Canonical identifier (normalized display name).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Monster class (Boss or NeutralMonster), when declared.
    pub kind: Option<String>,
    /// Objective health pool.
    pub health: Option<f64>,
    /// Basic attack range.
    pub attack_range: Option<f64>,
    /// Numeric facts from the monster's stat block, keyed by predicate name.
    pub stats: BTreeMap<String, f64>,
    /// Comment lines, in source order.
    pub info: Vec<String>,
    /// Predicates outside the fixed schema, retained as-is.
    pub extensions: BTreeMap<String, Vec<Value>>,
}

impl Monster {
    /// Builds a monster from its subject's fact group.
    ///
    /// # Errors
    ///
    /// Fails if the display label is missing.
    pub fn from_graph(index: &FactIndex, subject: &str) -> Result<Self, ModelError> {
        let name = index
            .str_value(subject, pred::LABEL)
            .ok_or_else(|| ModelError::MissingPredicate {
                category: Category::Monster,
                subject: subject.to_string(),
                predicate: pred::LABEL,
            })?
            .to_string();

        Ok(Self {
            id: normalize_name(&name),
            kind: schema::MONSTER_TYPES
                .iter()
                .find(|t| index.has_type(subject, t))
                .map(|t| (*t).to_string()),
            health: index.float_value(subject, pred::OBJECTIVE_HEALTH),
            attack_range: index.float_value(subject, pred::ATTACK_RANGE),
            stats: stat_block(index, subject),
            info: index
                .str_list(subject, pred::COMMENT)
                .into_iter()
                .map(str::to_string)
                .collect(),
            extensions: extension_map(index, subject, Category::Monster),
            name,
        })
    }
}

/// A lane turret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    /// Canonical identifier (normalized display name).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Objective health pool.
    pub health: Option<f64>,
    /// Basic attack range.
    pub attack_range: Option<f64>,
    /// Numeric facts from the turret's stat block, keyed by predicate name.
    pub stats: BTreeMap<String, f64>,
    /// Comment lines, in source order.
    pub info: Vec<String>,
    /// Predicates outside the fixed schema, retained as-is.
    pub extensions: BTreeMap<String, Vec<Value>>,
}

impl Turret {
    /// Builds a turret from its subject's fact group.
    ///
    /// # Errors
    ///
    /// Fails if the display label is missing.
    pub fn from_graph(index: &FactIndex, subject: &str) -> Result<Self, ModelError> {
        let name = index
            .str_value(subject, pred::LABEL)
            .ok_or_else(|| ModelError::MissingPredicate {
                category: Category::Turret,
                subject: subject.to_string(),
                predicate: pred::LABEL,
            })?
            .to_string();

        Ok(Self {
            id: normalize_name(&name),
            health: index.float_value(subject, pred::OBJECTIVE_HEALTH),
            attack_range: index.float_value(subject, pred::ATTACK_RANGE),
            stats: stat_block(index, subject),
            info: index
                .str_list(subject, pred::COMMENT)
                .into_iter()
                .map(str::to_string)
                .collect(),
            extensions: extension_map(index, subject, Category::Turret),
            name,
        })
    }
}
