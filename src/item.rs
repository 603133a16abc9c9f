//! The item entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::resolver::normalize_name;
use crate::schema::{self, pred, Category};
use crate::triple::FactIndex;
use crate::value::Value;

/// A purchasable item.
///
/// `build_path` holds canonical identifiers of component items; the
/// knowledge-base cross-reference pass validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Canonical identifier (normalized display name).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Item class (Advanced/Component/Consumable), when declared.
    pub kind: Option<String>,
    /// Total purchase price.
    pub gold_cost: Option<u32>,
    /// Component identifiers, in source order.
    pub build_path: Vec<String>,
    /// Stat bonuses from the item's stat block, keyed by predicate name.
    pub stats: BTreeMap<String, f64>,
    /// Effect classes, in source order.
    pub effect_types: Vec<String>,
    /// Flavor description, from the subject's comment.
    pub description: String,
    /// Whether the item carries a unique passive.
    pub unique_passive: Option<bool>,
    /// Predicates outside the fixed item schema, retained as-is.
    pub extensions: BTreeMap<String, Vec<Value>>,
}

impl Item {
    /// Builds an item from its subject's fact group.
    ///
    /// # Errors
    ///
    /// Fails if the display name is missing.
    pub fn from_graph(index: &FactIndex, subject: &str) -> Result<Self, ModelError> {
        let name = index
            .str_value(subject, pred::ITEM_NAME)
            .ok_or_else(|| ModelError::MissingPredicate {
                category: Category::Item,
                subject: subject.to_string(),
                predicate: pred::ITEM_NAME,
            })?
            .to_string();

        let mut stats = BTreeMap::new();
        if let Some(stats_subject) = index.ref_value(subject, pred::PROVIDES_STATS) {
            for fact in index.facts(stats_subject) {
                if let Some(v) = fact.object.as_float() {
                    stats.insert(fact.predicate.clone(), v);
                }
            }
        }

        let mut extensions: BTreeMap<String, Vec<Value>> = BTreeMap::new();
        for fact in index.facts(subject) {
            if !schema::is_recognized(Category::Item, &fact.predicate) {
                extensions
                    .entry(fact.predicate.clone())
                    .or_default()
                    .push(fact.object.clone());
            }
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let gold_cost = index
            .int_value(subject, pred::GOLD_COST)
            .filter(|n| *n >= 0)
            .map(|n| n as u32);

        Ok(Self {
            id: normalize_name(&name),
            kind: schema::ITEM_TYPES
                .iter()
                .find(|t| index.has_type(subject, t))
                .map(|t| (*t).to_string()),
            gold_cost,
            build_path: index
                .ref_list(subject, pred::BUILD_PATH)
                .into_iter()
                .map(normalize_name)
                .collect(),
            stats,
            effect_types: index
                .ref_list(subject, pred::HAS_EFFECT_TYPE)
                .into_iter()
                .map(str::to_string)
                .collect(),
            description: index
                .str_value(subject, pred::COMMENT)
                .unwrap_or_default()
                .to_string(),
            unique_passive: index.bool_value(subject, pred::UNIQUE_PASSIVE),
            extensions,
            name,
        })
    }
}
