//! The champion entity and its fact-group builders.
//!
//! A champion is the richest entity in the model: scalar attributes, two
//! nested stat blocks, a skill table with leveled sub-entities, and the
//! ordered relationship lists (counters, synergies, recommended items) that
//! the cross-reference pass validates after all categories are built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::resolver::normalize_name;
use crate::schema::{self, pred, Category, SkillSlot};
use crate::triple::FactIndex;
use crate::value::Value;

/// Skill classes the model distinguishes.
const SKILL_KINDS: [&str; 4] = ["ActiveSkill", "PassiveSkill", "UltimateSkill", "ToggleSkill"];

/// Level-1 stat snapshot. Absent stats were absent in the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct BaseStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_resist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_damage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_range: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_regen: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_regen: Option<f64>,
}

impl BaseStats {
    /// Reads a base-stat block subject.
    #[must_use]
    pub fn from_graph(index: &FactIndex, subject: &str) -> Self {
        Self {
            health: index.float_value(subject, pred::BASE_HEALTH),
            mana: index.float_value(subject, pred::BASE_MANA),
            armor: index.float_value(subject, pred::BASE_ARMOR),
            magic_resist: index.float_value(subject, pred::BASE_MAGIC_RESIST),
            attack_damage: index.float_value(subject, pred::BASE_ATTACK_DAMAGE),
            attack_speed: index.float_value(subject, pred::BASE_ATTACK_SPEED),
            attack_range: index.float_value(subject, pred::ATTACK_RANGE),
            movement_speed: index.float_value(subject, pred::BASE_MOVEMENT_SPEED),
            health_regen: index.float_value(subject, pred::HAS_HEALTH_REGEN),
            mana_regen: index.float_value(subject, pred::HAS_MANA_REGEN),
        }
    }
}

/// Per-level growth values for the stats that scale with character level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct StatGrowth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_damage: Option<f64>,
}

impl StatGrowth {
    /// Reads a stat-growth block subject.
    #[must_use]
    pub fn from_graph(index: &FactIndex, subject: &str) -> Self {
        Self {
            health: index.float_value(subject, pred::HEALTH_PER_LEVEL),
            mana: index.float_value(subject, pred::MANA_PER_LEVEL),
            armor: index.float_value(subject, pred::ARMOR_PER_LEVEL),
            attack_damage: index.float_value(subject, pred::ATTACK_DAMAGE_PER_LEVEL),
        }
    }
}

/// One rank of a skill's leveled table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct SkillRank {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_range: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// A champion skill: name, typing, and the rank table keyed by ability level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Which slot the skill occupies.
    pub slot: SkillSlot,
    /// Display name.
    pub name: String,
    /// Skill classes (Active/Passive/Ultimate/Toggle), in source order.
    pub kinds: Vec<String>,
    /// Damage type class, if the skill deals damage.
    pub damage_type: Option<String>,
    /// Resource spent on cast.
    pub cost_type: Option<String>,
    /// Flat resource cost, when not leveled.
    pub base_cost: Option<f64>,
    /// Cooldown used when a rank has no override.
    pub base_cooldown: Option<f64>,
    /// Highest rank the skill can be trained to.
    pub max_level: u8,
    /// Targeting mode.
    pub target: Option<String>,
    /// Ranks sorted by ability level. Empty for passives.
    pub levels: BTreeMap<u8, SkillRank>,
}

impl Skill {
    /// Reads a skill subject belonging to `champion_subject`.
    ///
    /// The slot is encoded as a suffix of the skill's subject name
    /// (`Evelynn_Q`, `Evelynn_P`).
    pub fn from_graph(
        index: &FactIndex,
        subject: &str,
        champion_subject: &str,
    ) -> Result<Self, ModelError> {
        let slot_token = subject
            .strip_prefix(champion_subject)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(subject);
        let slot = match slot_token {
            "P" | "Passive" => SkillSlot::Passive,
            "Q" => SkillSlot::Q,
            "W" => SkillSlot::W,
            "E" => SkillSlot::E,
            "R" => SkillSlot::R,
            _ => {
                return Err(ModelError::UnknownSkillSlot {
                    subject: champion_subject.to_string(),
                    skill: subject.to_string(),
                    token: slot_token.to_string(),
                })
            }
        };

        let name = index
            .str_value(subject, pred::SKILL_NAME)
            .or_else(|| index.str_value(subject, pred::LABEL))
            .unwrap_or(slot.as_str())
            .to_string();

        let kinds = index
            .types(subject)
            .into_iter()
            .filter(|t| SKILL_KINDS.contains(t))
            .map(str::to_string)
            .collect();

        let mut levels = BTreeMap::new();
        for level_subject in index.ref_list(subject, pred::HAS_SKILL_LEVEL) {
            let number = index
                .int_value(level_subject, pred::SKILL_LEVEL_NUMBER)
                .ok_or_else(|| ModelError::MissingPredicate {
                    category: Category::Champion,
                    subject: level_subject.to_string(),
                    predicate: pred::SKILL_LEVEL_NUMBER,
                })?;
            if !(1..=5).contains(&number) {
                return Err(ModelError::SkillLevelOutOfRange {
                    subject: champion_subject.to_string(),
                    level: number,
                });
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rank = number as u8;
            levels.insert(
                rank,
                SkillRank {
                    damage: index.float_value(level_subject, pred::DAMAGE_AT_SKILL_LEVEL),
                    cooldown: index.float_value(level_subject, pred::COOLDOWN_AT_SKILL_LEVEL),
                    mana_cost: index.float_value(level_subject, pred::MANA_COST_AT_SKILL_LEVEL),
                    cast_range: index.float_value(level_subject, pred::CAST_RANGE_AT_SKILL_LEVEL),
                    duration: index.float_value(level_subject, pred::DURATION_AT_SKILL_LEVEL),
                },
            );
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max_level = index
            .int_value(subject, pred::MAXIMUM_LEVEL)
            .filter(|n| (0..=5).contains(n))
            .map_or(5, |n| n as u8);

        Ok(Self {
            slot,
            name,
            kinds,
            damage_type: index
                .ref_value(subject, pred::HAS_DAMAGE_TYPE)
                .map(str::to_string),
            cost_type: index.str_value(subject, pred::COST_TYPE).map(str::to_string),
            base_cost: index.float_value(subject, pred::BASE_COST),
            base_cooldown: index.float_value(subject, pred::COOLDOWN),
            max_level,
            target: index
                .str_value(subject, pred::SKILL_TARGET)
                .map(str::to_string),
            levels,
        })
    }

    /// The ability levels this skill is authored with, sorted ascending.
    #[must_use]
    pub fn authored_levels(&self) -> Vec<u8> {
        self.levels.keys().copied().collect()
    }
}

/// A fully modeled champion.
///
/// Relationship lists hold canonical identifiers; they are validated against
/// the target category by the knowledge-base cross-reference pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    /// Canonical identifier (normalized display name).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Flavor title, from the subject's comment.
    pub title: String,
    /// Primary hero class, by fixed class precedence.
    pub hero_type: Option<String>,
    /// Primary damage type class.
    pub damage_type: Option<String>,
    /// Attack type class.
    pub attack_type: Option<String>,
    /// Mechanical complexity class.
    pub complexity: Option<String>,
    /// Whether basic attacks are ranged.
    pub is_ranged: Option<bool>,
    /// Role classes, in source order.
    pub roles: Vec<String>,
    /// Typical lane classes, in source order.
    pub lanes: Vec<String>,
    /// Level-1 stats.
    pub base_stats: BaseStats,
    /// Per-level stat growth.
    pub stat_growth: StatGrowth,
    /// Skills by slot.
    pub skills: BTreeMap<SkillSlot, Skill>,
    /// Champions this champion is strong against.
    pub counters: Vec<String>,
    /// Champions that are strong against this champion.
    pub countered_by: Vec<String>,
    /// Heavily favorable matchups.
    pub hard_counters: Vec<String>,
    /// Heavily unfavorable matchups.
    pub hard_countered_by: Vec<String>,
    /// Best synergy partners.
    pub strong_synergy: Vec<String>,
    /// Ordinary synergy partners.
    pub synergy: Vec<String>,
    /// Marginal synergy partners.
    pub weak_synergy: Vec<String>,
    /// Items to build every game.
    pub core_items: Vec<String>,
    /// Items to usually build.
    pub recommended_items: Vec<String>,
    /// Items for specific matchups.
    pub situational_items: Vec<String>,
    /// Predicates outside the fixed champion schema, retained as-is.
    pub extensions: BTreeMap<String, Vec<Value>>,
}

fn normalized_ref_list(index: &FactIndex, subject: &str, predicate: &str) -> Vec<String> {
    index
        .ref_list(subject, predicate)
        .into_iter()
        .map(normalize_name)
        .collect()
}

impl Champion {
    /// Builds a champion from its subject's fact group.
    ///
    /// # Errors
    ///
    /// Fails if the display name or base-stat block is missing, or a skill
    /// subject is malformed.
    pub fn from_graph(index: &FactIndex, subject: &str) -> Result<Self, ModelError> {
        let name = index
            .str_value(subject, pred::HERO_NAME)
            .ok_or_else(|| ModelError::MissingPredicate {
                category: Category::Champion,
                subject: subject.to_string(),
                predicate: pred::HERO_NAME,
            })?
            .to_string();

        let stats_subject = match index.first(subject, pred::HAS_BASE_STATS) {
            Some(Value::Ref(s)) => s.as_str(),
            Some(other) => {
                return Err(ModelError::IllTyped {
                    category: Category::Champion,
                    subject: subject.to_string(),
                    predicate: pred::HAS_BASE_STATS.to_string(),
                    expected: "reference",
                    found: other.type_name().to_string(),
                })
            }
            None => {
                return Err(ModelError::MissingPredicate {
                    category: Category::Champion,
                    subject: subject.to_string(),
                    predicate: pred::HAS_BASE_STATS,
                })
            }
        };
        let base_stats = BaseStats::from_graph(index, stats_subject);

        let stat_growth = index
            .ref_value(subject, pred::HAS_STAT_GROWTH)
            .map(|s| StatGrowth::from_graph(index, s))
            .unwrap_or_default();

        let mut skills = BTreeMap::new();
        for skill_subject in index.ref_list(subject, pred::HAS_SKILL) {
            let skill = Skill::from_graph(index, skill_subject, subject)?;
            skills.entry(skill.slot).or_insert(skill);
        }

        let mut extensions: BTreeMap<String, Vec<Value>> = BTreeMap::new();
        for fact in index.facts(subject) {
            if !schema::is_recognized(Category::Champion, &fact.predicate) {
                extensions
                    .entry(fact.predicate.clone())
                    .or_default()
                    .push(fact.object.clone());
            }
        }

        Ok(Self {
            id: normalize_name(&name),
            title: index
                .str_value(subject, pred::COMMENT)
                .unwrap_or_default()
                .to_string(),
            hero_type: schema::HERO_TYPES
                .iter()
                .find(|t| index.has_type(subject, t))
                .map(|t| (*t).to_string()),
            damage_type: index
                .ref_value(subject, pred::DEALS_DAMAGE_TYPE)
                .map(str::to_string),
            attack_type: index
                .ref_value(subject, pred::HAS_ATTACK_TYPE)
                .map(str::to_string),
            complexity: index
                .ref_value(subject, pred::HAS_COMPLEXITY)
                .map(str::to_string),
            is_ranged: index.bool_value(subject, pred::IS_RANGED),
            roles: index
                .ref_list(subject, pred::PLAYS_ROLE)
                .into_iter()
                .map(str::to_string)
                .collect(),
            lanes: index
                .ref_list(subject, pred::TYPICAL_LANE)
                .into_iter()
                .map(str::to_string)
                .collect(),
            base_stats,
            stat_growth,
            skills,
            counters: normalized_ref_list(index, subject, pred::COUNTERS),
            countered_by: normalized_ref_list(index, subject, pred::COUNTERED_BY),
            hard_counters: normalized_ref_list(index, subject, pred::HARD_COUNTERS),
            hard_countered_by: normalized_ref_list(index, subject, pred::HARD_COUNTERED_BY),
            strong_synergy: normalized_ref_list(index, subject, pred::STRONG_SYNERGY_WITH),
            synergy: normalized_ref_list(index, subject, pred::SYNERGY_WITH),
            weak_synergy: normalized_ref_list(index, subject, pred::WEAK_SYNERGY_WITH),
            core_items: normalized_ref_list(index, subject, pred::CORE_ITEM),
            recommended_items: normalized_ref_list(index, subject, pred::RECOMMENDED_ITEM),
            situational_items: normalized_ref_list(index, subject, pred::SITUATIONAL_ITEM),
            extensions,
            name,
        })
    }

    /// Looks up a skill by slot.
    #[must_use]
    pub fn skill(&self, slot: SkillSlot) -> Option<&Skill> {
        self.skills.get(&slot)
    }

    /// Slots this champion actually has, in display order.
    #[must_use]
    pub fn slots(&self) -> Vec<SkillSlot> {
        SkillSlot::ALL
            .into_iter()
            .filter(|s| self.skills.contains_key(s))
            .collect()
    }
}
