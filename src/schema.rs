//! The fixed schema vocabulary of the knowledge graph.
//!
//! The query engine supports a closed set of query shapes over a fixed
//! schema, so the predicate names, entity classes, and skill slots the model
//! builder recognizes live here in one place. Predicates not listed for a
//! category are not dropped — they land in the entity's extension map.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Entity category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Playable champion.
    Champion,
    /// Purchasable item.
    Item,
    /// Neutral jungle monster or boss.
    Monster,
    /// Lane turret.
    Turret,
}

impl Category {
    /// All categories, in load order.
    pub const ALL: [Self; 4] = [Self::Champion, Self::Item, Self::Monster, Self::Turret];

    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Champion => "champion",
            Self::Item => "item",
            Self::Monster => "monster",
            Self::Turret => "turret",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A champion's skill slot.
///
/// Passive has no ability levels; Q/W/E/R carry a leveled table with ranks
/// in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillSlot {
    /// The innate passive; carries no rank table.
    #[serde(rename = "P")]
    Passive,
    /// First basic ability.
    Q,
    /// Second basic ability.
    W,
    /// Third basic ability.
    E,
    /// The ultimate.
    R,
}

impl SkillSlot {
    /// All slots, in display order.
    pub const ALL: [Self; 5] = [Self::Passive, Self::Q, Self::W, Self::E, Self::R];

    /// One-letter key as it appears in skill subject names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passive => "P",
            Self::Q => "Q",
            Self::W => "W",
            Self::E => "E",
            Self::R => "R",
        }
    }

    /// Parses a caller-supplied slot token, returning
    /// [`QueryError::InvalidSlot`] listing the valid set on failure.
    pub fn parse(token: &str) -> Result<Self, QueryError> {
        match token.trim().to_ascii_uppercase().as_str() {
            "P" | "PASSIVE" => Ok(Self::Passive),
            "Q" => Ok(Self::Q),
            "W" => Ok(Self::W),
            "E" => Ok(Self::E),
            "R" | "ULT" | "ULTIMATE" => Ok(Self::R),
            _ => Err(QueryError::InvalidSlot {
                given: token.to_string(),
                valid: Self::ALL.to_vec(),
            }),
        }
    }
}

impl FromStr for SkillSlot {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SkillSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate local names recognized by the model builder.
pub mod pred {
    #![allow(missing_docs)]

    // Universal
    pub const TYPE: &str = "type";
    pub const LABEL: &str = "label";
    pub const COMMENT: &str = "comment";

    // Champion
    pub const HERO_NAME: &str = "heroName";
    pub const DEALS_DAMAGE_TYPE: &str = "dealsDamageType";
    pub const HAS_ATTACK_TYPE: &str = "hasAttackType";
    pub const HAS_COMPLEXITY: &str = "hasComplexity";
    pub const IS_RANGED: &str = "isRanged";
    pub const PLAYS_ROLE: &str = "playsRole";
    pub const TYPICAL_LANE: &str = "typicalLane";
    pub const HAS_BASE_STATS: &str = "hasBaseStats";
    pub const HAS_STAT_GROWTH: &str = "hasStatGrowth";
    pub const HAS_SKILL: &str = "hasSkill";

    // Relationships (ordered reference lists)
    pub const COUNTERS: &str = "counters";
    pub const COUNTERED_BY: &str = "counteredBy";
    pub const HARD_COUNTERS: &str = "hardCounters";
    pub const HARD_COUNTERED_BY: &str = "hardCounteredBy";
    pub const STRONG_SYNERGY_WITH: &str = "strongSynergyWith";
    pub const SYNERGY_WITH: &str = "synergyWith";
    pub const WEAK_SYNERGY_WITH: &str = "weakSynergyWith";
    pub const CORE_ITEM: &str = "coreItem";
    pub const RECOMMENDED_ITEM: &str = "recommendedItem";
    pub const SITUATIONAL_ITEM: &str = "situationalItem";

    // Skills
    pub const SKILL_NAME: &str = "skillName";
    pub const HAS_DAMAGE_TYPE: &str = "hasDamageType";
    pub const COST_TYPE: &str = "costType";
    pub const BASE_COST: &str = "baseCost";
    pub const COOLDOWN: &str = "cooldown";
    pub const MAXIMUM_LEVEL: &str = "maximumLevel";
    pub const SKILL_TARGET: &str = "skillTarget";
    pub const HAS_SKILL_LEVEL: &str = "hasSkillLevel";
    pub const SKILL_LEVEL_NUMBER: &str = "skillLevelNumber";
    pub const DAMAGE_AT_SKILL_LEVEL: &str = "damageAtSkillLevel";
    pub const COOLDOWN_AT_SKILL_LEVEL: &str = "cooldownAtSkillLevel";
    pub const MANA_COST_AT_SKILL_LEVEL: &str = "manaCostAtSkillLevel";
    pub const CAST_RANGE_AT_SKILL_LEVEL: &str = "castRangeAtSkillLevel";
    pub const DURATION_AT_SKILL_LEVEL: &str = "durationAtSkillLevel";

    // Base stats
    pub const BASE_HEALTH: &str = "baseHealth";
    pub const BASE_MANA: &str = "baseMana";
    pub const BASE_ARMOR: &str = "baseArmor";
    pub const BASE_MAGIC_RESIST: &str = "baseMagicResist";
    pub const BASE_ATTACK_DAMAGE: &str = "baseAttackDamage";
    pub const BASE_ATTACK_SPEED: &str = "baseAttackSpeed";
    pub const BASE_MOVEMENT_SPEED: &str = "baseMovementSpeed";
    pub const ATTACK_RANGE: &str = "attackRange";
    pub const HAS_HEALTH_REGEN: &str = "hasHealthRegen";
    pub const HAS_MANA_REGEN: &str = "hasManaRegen";

    // Stat growth
    pub const HEALTH_PER_LEVEL: &str = "healthPerLevel";
    pub const MANA_PER_LEVEL: &str = "manaPerLevel";
    pub const ARMOR_PER_LEVEL: &str = "armorPerLevel";
    pub const ATTACK_DAMAGE_PER_LEVEL: &str = "attackDamagePerLevel";

    // Items
    pub const ITEM_NAME: &str = "itemName";
    pub const GOLD_COST: &str = "goldCost";
    pub const BUILD_PATH: &str = "buildPath";
    pub const PROVIDES_STATS: &str = "providesStats";
    pub const HAS_EFFECT_TYPE: &str = "hasEffectType";
    pub const UNIQUE_PASSIVE: &str = "uniquePassive";

    // Monsters and turrets
    pub const OBJECTIVE_HEALTH: &str = "objectiveHealth";
}

/// Champion classes; the first matching class decides the hero type.
pub const HERO_TYPES: [&str; 8] = [
    "AssassinHero",
    "MageHero",
    "WarriorHero",
    "CarryHero",
    "SupportHero",
    "TankHero",
    "MeleeHero",
    "RangedHero",
];

/// Item classes.
pub const ITEM_TYPES: [&str; 3] = ["AdvancedItem", "ComponentItem", "ConsumableItem"];

/// Monster classes.
pub const MONSTER_TYPES: [&str; 2] = ["Boss", "NeutralMonster"];

/// Turret class.
pub const TURRET_TYPE: &str = "Tower";

/// Returns true if the predicate belongs to the category's fixed schema.
/// Anything else is retained in the entity's extension map.
#[must_use]
pub fn is_recognized(category: Category, predicate: &str) -> bool {
    use pred::*;

    if matches!(predicate, TYPE | LABEL | COMMENT) {
        return true;
    }

    match category {
        Category::Champion => matches!(
            predicate,
            HERO_NAME
                | DEALS_DAMAGE_TYPE
                | HAS_ATTACK_TYPE
                | HAS_COMPLEXITY
                | IS_RANGED
                | PLAYS_ROLE
                | TYPICAL_LANE
                | HAS_BASE_STATS
                | HAS_STAT_GROWTH
                | HAS_SKILL
                | COUNTERS
                | COUNTERED_BY
                | HARD_COUNTERS
                | HARD_COUNTERED_BY
                | STRONG_SYNERGY_WITH
                | SYNERGY_WITH
                | WEAK_SYNERGY_WITH
                | CORE_ITEM
                | RECOMMENDED_ITEM
                | SITUATIONAL_ITEM
        ),
        Category::Item => matches!(
            predicate,
            ITEM_NAME | GOLD_COST | BUILD_PATH | PROVIDES_STATS | HAS_EFFECT_TYPE | UNIQUE_PASSIVE
        ),
        Category::Monster | Category::Turret => matches!(
            predicate,
            OBJECTIVE_HEALTH | ATTACK_RANGE | HAS_BASE_STATS
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", Category::Champion), "champion");
        assert_eq!(format!("{}", Category::Turret), "turret");
    }

    #[test]
    fn test_skill_slot_parse_variants() {
        assert_eq!(SkillSlot::parse("q").unwrap(), SkillSlot::Q);
        assert_eq!(SkillSlot::parse(" R ").unwrap(), SkillSlot::R);
        assert_eq!(SkillSlot::parse("passive").unwrap(), SkillSlot::Passive);
        assert_eq!(SkillSlot::parse("ult").unwrap(), SkillSlot::R);
    }

    #[test]
    fn test_skill_slot_parse_invalid_lists_valid_set() {
        let err = SkillSlot::parse("X").unwrap_err();
        match err {
            QueryError::InvalidSlot { given, valid } => {
                assert_eq!(given, "X");
                assert_eq!(valid, SkillSlot::ALL.to_vec());
            }
            other => panic!("expected InvalidSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_skill_slot_serde_rename() {
        let json = serde_json::to_string(&SkillSlot::Passive).unwrap();
        assert_eq!(json, "\"P\"");
        let json = serde_json::to_string(&SkillSlot::Q).unwrap();
        assert_eq!(json, "\"Q\"");
    }

    #[test]
    fn test_recognized_predicates() {
        assert!(is_recognized(Category::Champion, pred::HERO_NAME));
        assert!(is_recognized(Category::Champion, pred::COUNTERS));
        assert!(is_recognized(Category::Item, pred::BUILD_PATH));
        assert!(is_recognized(Category::Monster, pred::OBJECTIVE_HEALTH));
        // Enrichment predicates are not part of any fixed schema.
        assert!(!is_recognized(Category::Champion, "hasCrowdControl"));
        assert!(!is_recognized(Category::Item, pred::HERO_NAME));
    }
}
