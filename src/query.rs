//! The fixed query catalog.
//!
//! [`QueryEngine`] borrows a loaded [`KnowledgeBase`] and answers the closed
//! set of query shapes over it. Every operation takes canonical identifiers
//! (the intent dispatcher resolves raw names first) and returns a
//! serializable [`QueryResult`] or a recoverable [`QueryError`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::champion::{BaseStats, Champion, Skill, StatGrowth};
use crate::error::QueryError;
use crate::resolver::{normalize_name, NameResolver};
use crate::schema::{Category, SkillSlot};
use crate::store::KnowledgeBase;

/// Character levels run 1..=18.
pub const MAX_CHARACTER_LEVEL: u8 = 18;

/// Ability ranks run 1..=5.
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Linear per-level stat scaling: the base value plus one growth increment
/// for every level past the first.
#[must_use]
pub fn stat_at_level(base: f64, growth: f64, level: u8) -> f64 {
    base + growth * f64::from(level.saturating_sub(1))
}

/// Rounds to one decimal place for presentation.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Which side of the counter relation a query asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterDirection {
    /// Champions this champion is strong against.
    Counters,
    /// Champions that are strong against this champion.
    CounteredBy,
}

impl CounterDirection {
    /// Lenient parse; anything that is not `"counters"` reads as the
    /// defensive direction.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("counters") {
            Self::Counters
        } else {
            Self::CounteredBy
        }
    }
}

/// One rank row in a skill summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct RankRow {
    pub level: u8,
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

/// A skill slot and its display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct SkillEntry {
    pub key: SkillSlot,
    pub name: String,
}

/// One stat compared across two champions. Absent means the champion has no
/// value for that stat.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct StatPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<f64>,
}

/// The answer to any catalog query, tagged for serialization.
///
/// The tag field is `result`; `kind` stays free for the entity-class fields
/// some variants carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum QueryResult {
    SkillValue {
        champion_id: String,
        champion: String,
        skill_key: SkillSlot,
        skill_name: String,
        level: u8,
        damage: Option<f64>,
        damage_type: Option<String>,
        cooldown: Option<f64>,
        mana_cost: Option<f64>,
    },
    SkillSummary {
        champion_id: String,
        champion: String,
        skill_key: SkillSlot,
        skill_name: String,
        kinds: Vec<String>,
        damage_type: Option<String>,
        cost_type: Option<String>,
        base_cooldown: Option<f64>,
        target: Option<String>,
        max_level: u8,
        ranks: Vec<RankRow>,
    },
    SkillCooldown {
        champion_id: String,
        champion: String,
        skill_key: SkillSlot,
        skill_name: String,
        level: Option<u8>,
        cooldown: Option<f64>,
        cooldowns_by_level: BTreeMap<u8, f64>,
    },
    SkillManaCost {
        champion_id: String,
        champion: String,
        skill_key: SkillSlot,
        skill_name: String,
        cost_type: Option<String>,
        level: Option<u8>,
        mana_cost: Option<f64>,
        mana_costs_by_level: BTreeMap<u8, f64>,
    },
    BaseStats {
        champion_id: String,
        champion: String,
        title: String,
        stats: BaseStats,
        growth: StatGrowth,
    },
    Stat {
        champion_id: String,
        champion: String,
        stat: String,
        value: Option<f64>,
    },
    StatsAtLevel {
        champion_id: String,
        champion: String,
        level: u8,
        stats: BTreeMap<String, f64>,
    },
    Counters {
        champion_id: String,
        champion: String,
        direction: CounterDirection,
        hard: Vec<String>,
        normal: Vec<String>,
        total: usize,
    },
    Synergies {
        champion_id: String,
        champion: String,
        strong: Vec<String>,
        normal: Vec<String>,
        weak: Vec<String>,
        total: usize,
    },
    Build {
        champion_id: String,
        champion: String,
        core: Vec<String>,
        recommended: Vec<String>,
        situational: Vec<String>,
    },
    ChampionOverview {
        champion_id: String,
        champion: String,
        title: String,
        hero_type: Option<String>,
        damage_type: Option<String>,
        attack_type: Option<String>,
        complexity: Option<String>,
        is_ranged: Option<bool>,
        roles: Vec<String>,
        lanes: Vec<String>,
        skills: Vec<SkillEntry>,
    },
    SkillList {
        champion_id: String,
        champion: String,
        skills: Vec<SkillEntry>,
    },
    ItemInfo {
        item_id: String,
        item: String,
        kind: Option<String>,
        gold_cost: Option<u32>,
        build_path: Vec<String>,
        stats: BTreeMap<String, f64>,
        effect_types: Vec<String>,
        description: String,
    },
    MonsterInfo {
        monster_id: String,
        monster: String,
        kind: Option<String>,
        health: Option<f64>,
        attack_range: Option<f64>,
        stats: BTreeMap<String, f64>,
        info: Vec<String>,
    },
    TurretInfo {
        turret_id: String,
        turret: String,
        health: Option<f64>,
        attack_range: Option<f64>,
        stats: BTreeMap<String, f64>,
        info: Vec<String>,
    },
    ChampionComparison {
        first_id: String,
        first: String,
        second_id: String,
        second: String,
        stats: BTreeMap<String, StatPair>,
    },
    MonsterList {
        count: usize,
        monsters: Vec<String>,
    },
    TurretList {
        count: usize,
        turrets: Vec<String>,
    },
    RoleChampions {
        role: String,
        count: usize,
        champions: Vec<String>,
    },
    LaneChampions {
        lane: String,
        count: usize,
        champions: Vec<String>,
    },
}

/// Caller-facing stat names accepted by [`QueryEngine::specific_stat`].
const STAT_ALIASES: &[(&str, &str)] = &[
    ("health", "health"),
    ("hp", "health"),
    ("mana", "mana"),
    ("mp", "mana"),
    ("armor", "armor"),
    ("magic_resist", "magic_resist"),
    ("mr", "magic_resist"),
    ("attack_damage", "attack_damage"),
    ("ad", "attack_damage"),
    ("attack_speed", "attack_speed"),
    ("as", "attack_speed"),
    ("attack_range", "attack_range"),
    ("range", "attack_range"),
    ("movement_speed", "movement_speed"),
    ("ms", "movement_speed"),
    ("move_speed", "movement_speed"),
    ("speed", "movement_speed"),
    ("health_regen", "health_regen"),
    ("hp5", "health_regen"),
    ("mana_regen", "mana_regen"),
    ("mp5", "mana_regen"),
];

/// Role words accepted by [`QueryEngine::champions_by_role`], mapped to role
/// classes.
const ROLE_WORDS: &[(&str, &str)] = &[
    ("assassin", "AssassinRole"),
    ("mage", "MageRole"),
    ("warrior", "WarriorRole"),
    ("fighter", "WarriorRole"),
    ("carry", "CarryRole"),
    ("marksman", "CarryRole"),
    ("adc", "CarryRole"),
    ("support", "SupportRole"),
    ("tank", "TankRole"),
];

/// Lane words accepted by [`QueryEngine::champions_by_lane`], mapped to lane
/// classes.
const LANE_WORDS: &[(&str, &str)] = &[
    ("top", "TopLane"),
    ("mid", "MidLane"),
    ("middle", "MidLane"),
    ("bot", "BotLane"),
    ("bottom", "BotLane"),
    ("jungle", "Jungle"),
    ("jg", "Jungle"),
];

/// Read-only query surface over a loaded knowledge base.
#[derive(Debug)]
pub struct QueryEngine<'kb> {
    kb: &'kb KnowledgeBase,
    resolver: NameResolver,
}

impl<'kb> QueryEngine<'kb> {
    /// Builds the engine and its name resolver.
    #[must_use]
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self {
            kb,
            resolver: NameResolver::from_kb(kb),
        }
    }

    /// The underlying store.
    #[must_use]
    pub const fn kb(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    /// The name resolver, for callers that resolve before querying.
    #[must_use]
    pub const fn resolver(&self) -> &NameResolver {
        &self.resolver
    }

    fn champion(&self, id: &str) -> Result<&'kb Champion, QueryError> {
        self.kb.champion(id).ok_or_else(|| QueryError::NotFound {
            name: id.to_string(),
            category: Some(Category::Champion),
            suggestions: self.resolver.suggestions(Category::Champion, id),
        })
    }

    fn skill<'c>(champion: &'c Champion, slot: SkillSlot) -> Result<&'c Skill, QueryError> {
        champion.skill(slot).ok_or_else(|| QueryError::InvalidSlot {
            given: slot.as_str().to_string(),
            valid: champion.slots(),
        })
    }

    fn rank_of(skill: &Skill, level: u8) -> Result<&crate::champion::SkillRank, QueryError> {
        if skill.slot == SkillSlot::Passive {
            // Passives have no ranks; nothing is a valid level.
            return Err(QueryError::InvalidLevel {
                given: level,
                valid: Vec::new(),
            });
        }
        if !(1..=MAX_SKILL_LEVEL).contains(&level) {
            return Err(QueryError::InvalidLevel {
                given: level,
                valid: (1..=MAX_SKILL_LEVEL).collect(),
            });
        }
        skill.levels.get(&level).ok_or_else(|| QueryError::InvalidLevel {
            given: level,
            valid: skill.authored_levels(),
        })
    }

    /// The leveled values of one skill rank.
    pub fn skill_value_at_level(
        &self,
        champion_id: &str,
        slot: SkillSlot,
        level: u8,
    ) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        let skill = Self::skill(champion, slot)?;
        let rank = Self::rank_of(skill, level)?;
        Ok(QueryResult::SkillValue {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            skill_key: slot,
            skill_name: skill.name.clone(),
            level,
            damage: rank.damage,
            damage_type: skill.damage_type.clone(),
            cooldown: rank.cooldown.or(skill.base_cooldown),
            mana_cost: rank.mana_cost,
        })
    }

    /// Full description of one skill, including its rank table.
    pub fn skill_summary(
        &self,
        champion_id: &str,
        slot: SkillSlot,
    ) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        let skill = Self::skill(champion, slot)?;
        let ranks = skill
            .levels
            .iter()
            .map(|(level, r)| RankRow {
                level: *level,
                damage: r.damage,
                cooldown: r.cooldown,
                mana_cost: r.mana_cost,
                cast_range: r.cast_range,
                duration: r.duration,
            })
            .collect();
        Ok(QueryResult::SkillSummary {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            skill_key: slot,
            skill_name: skill.name.clone(),
            kinds: skill.kinds.clone(),
            damage_type: skill.damage_type.clone(),
            cost_type: skill.cost_type.clone(),
            base_cooldown: skill.base_cooldown,
            target: skill.target.clone(),
            max_level: skill.max_level,
            ranks,
        })
    }

    /// Cooldown of a skill, at one rank or across all authored ranks.
    pub fn skill_cooldown(
        &self,
        champion_id: &str,
        slot: SkillSlot,
        level: Option<u8>,
    ) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        let skill = Self::skill(champion, slot)?;
        let cooldown = match level {
            Some(l) => Self::rank_of(skill, l)?.cooldown.or(skill.base_cooldown),
            None => skill.base_cooldown,
        };
        let cooldowns_by_level = skill
            .levels
            .iter()
            .filter_map(|(l, r)| r.cooldown.map(|c| (*l, c)))
            .collect();
        Ok(QueryResult::SkillCooldown {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            skill_key: slot,
            skill_name: skill.name.clone(),
            level,
            cooldown,
            cooldowns_by_level,
        })
    }

    /// Resource cost of a skill, at one rank or across all authored ranks.
    pub fn skill_mana_cost(
        &self,
        champion_id: &str,
        slot: SkillSlot,
        level: Option<u8>,
    ) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        let skill = Self::skill(champion, slot)?;
        let mana_cost = match level {
            Some(l) => Self::rank_of(skill, l)?.mana_cost.or(skill.base_cost),
            None => skill.base_cost,
        };
        let mana_costs_by_level = skill
            .levels
            .iter()
            .filter_map(|(l, r)| r.mana_cost.map(|c| (*l, c)))
            .collect();
        Ok(QueryResult::SkillManaCost {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            skill_key: slot,
            skill_name: skill.name.clone(),
            cost_type: skill.cost_type.clone(),
            level,
            mana_cost,
            mana_costs_by_level,
        })
    }

    /// The full level-1 stat block and growth values.
    pub fn base_stats(&self, champion_id: &str) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        Ok(QueryResult::BaseStats {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            title: champion.title.clone(),
            stats: champion.base_stats.clone(),
            growth: champion.stat_growth.clone(),
        })
    }

    /// One named base stat. Accepts the common shorthand names (`hp`, `ad`,
    /// `ms`).
    pub fn specific_stat(
        &self,
        champion_id: &str,
        stat: &str,
    ) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        let key = normalize_name(stat);
        let Some(canonical) = STAT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, c)| *c)
        else {
            let mut known: Vec<String> = STAT_ALIASES
                .iter()
                .map(|(_, c)| (*c).to_string())
                .collect();
            known.sort_unstable();
            known.dedup();
            return Err(QueryError::NotFound {
                name: stat.to_string(),
                category: None,
                suggestions: known,
            });
        };
        let s = &champion.base_stats;
        let value = match canonical {
            "health" => s.health,
            "mana" => s.mana,
            "armor" => s.armor,
            "magic_resist" => s.magic_resist,
            "attack_damage" => s.attack_damage,
            "attack_speed" => s.attack_speed,
            "attack_range" => s.attack_range,
            "movement_speed" => s.movement_speed,
            "health_regen" => s.health_regen,
            _ => s.mana_regen,
        };
        Ok(QueryResult::Stat {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            stat: canonical.to_string(),
            value,
        })
    }

    /// Stats scaled to a character level in 1..=18. Stats without growth
    /// data pass through unscaled.
    pub fn stats_at_level(
        &self,
        champion_id: &str,
        level: u8,
    ) -> Result<QueryResult, QueryError> {
        if !(1..=MAX_CHARACTER_LEVEL).contains(&level) {
            return Err(QueryError::InvalidLevel {
                given: level,
                valid: (1..=MAX_CHARACTER_LEVEL).collect(),
            });
        }
        let champion = self.champion(champion_id)?;
        let base = &champion.base_stats;
        let growth = &champion.stat_growth;

        let mut stats = BTreeMap::new();
        let mut scaled = |name: &str, base: Option<f64>, growth: Option<f64>| {
            if let Some(b) = base {
                stats.insert(
                    name.to_string(),
                    round1(stat_at_level(b, growth.unwrap_or(0.0), level)),
                );
            }
        };
        scaled("health", base.health, growth.health);
        scaled("mana", base.mana, growth.mana);
        scaled("armor", base.armor, growth.armor);
        scaled("attack_damage", base.attack_damage, growth.attack_damage);
        scaled("magic_resist", base.magic_resist, None);

        let mut passthrough = |name: &str, value: Option<f64>| {
            if let Some(v) = value {
                stats.insert(name.to_string(), v);
            }
        };
        passthrough("attack_speed", base.attack_speed);
        passthrough("attack_range", base.attack_range);
        passthrough("movement_speed", base.movement_speed);

        Ok(QueryResult::StatsAtLevel {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            level,
            stats,
        })
    }

    /// Counter relations in one direction. Empty lists are a valid answer.
    pub fn counters(
        &self,
        champion_id: &str,
        direction: CounterDirection,
    ) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        let (hard, normal) = match direction {
            CounterDirection::Counters => (&champion.hard_counters, &champion.counters),
            CounterDirection::CounteredBy => {
                (&champion.hard_countered_by, &champion.countered_by)
            }
        };
        Ok(QueryResult::Counters {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            direction,
            hard: hard.clone(),
            normal: normal.clone(),
            total: hard.len() + normal.len(),
        })
    }

    /// Synergy partners by tier.
    pub fn synergies(&self, champion_id: &str) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        Ok(QueryResult::Synergies {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            strong: champion.strong_synergy.clone(),
            normal: champion.synergy.clone(),
            weak: champion.weak_synergy.clone(),
            total: champion.strong_synergy.len()
                + champion.synergy.len()
                + champion.weak_synergy.len(),
        })
    }

    /// Recommended item build, by tier, as item identifiers.
    pub fn build(&self, champion_id: &str) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        Ok(QueryResult::Build {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            core: champion.core_items.clone(),
            recommended: champion.recommended_items.clone(),
            situational: champion.situational_items.clone(),
        })
    }

    fn skill_entries(champion: &Champion) -> Vec<SkillEntry> {
        champion
            .slots()
            .into_iter()
            .filter_map(|slot| {
                champion.skill(slot).map(|s| SkillEntry {
                    key: slot,
                    name: s.name.clone(),
                })
            })
            .collect()
    }

    /// One-screen champion overview.
    pub fn champion_overview(&self, champion_id: &str) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        Ok(QueryResult::ChampionOverview {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            title: champion.title.clone(),
            hero_type: champion.hero_type.clone(),
            damage_type: champion.damage_type.clone(),
            attack_type: champion.attack_type.clone(),
            complexity: champion.complexity.clone(),
            is_ranged: champion.is_ranged,
            roles: champion.roles.clone(),
            lanes: champion.lanes.clone(),
            skills: Self::skill_entries(champion),
        })
    }

    /// Slot and name of every skill the champion has.
    pub fn skill_list(&self, champion_id: &str) -> Result<QueryResult, QueryError> {
        let champion = self.champion(champion_id)?;
        Ok(QueryResult::SkillList {
            champion_id: champion.id.clone(),
            champion: champion.name.clone(),
            skills: Self::skill_entries(champion),
        })
    }

    /// Item description by canonical id.
    pub fn item_info(&self, item_id: &str) -> Result<QueryResult, QueryError> {
        let item = self.kb.item(item_id).ok_or_else(|| QueryError::NotFound {
            name: item_id.to_string(),
            category: Some(Category::Item),
            suggestions: self.resolver.suggestions(Category::Item, item_id),
        })?;
        Ok(QueryResult::ItemInfo {
            item_id: item.id.clone(),
            item: item.name.clone(),
            kind: item.kind.clone(),
            gold_cost: item.gold_cost,
            build_path: item.build_path.clone(),
            stats: item.stats.clone(),
            effect_types: item.effect_types.clone(),
            description: item.description.clone(),
        })
    }

    /// Monster description by canonical id.
    pub fn monster_info(&self, monster_id: &str) -> Result<QueryResult, QueryError> {
        let monster = self
            .kb
            .monster(monster_id)
            .ok_or_else(|| QueryError::NotFound {
                name: monster_id.to_string(),
                category: Some(Category::Monster),
                suggestions: self.resolver.suggestions(Category::Monster, monster_id),
            })?;
        Ok(QueryResult::MonsterInfo {
            monster_id: monster.id.clone(),
            monster: monster.name.clone(),
            kind: monster.kind.clone(),
            health: monster.health,
            attack_range: monster.attack_range,
            stats: monster.stats.clone(),
            info: monster.info.clone(),
        })
    }

    /// Turret description by canonical id.
    pub fn turret_info(&self, turret_id: &str) -> Result<QueryResult, QueryError> {
        let turret = self
            .kb
            .turret(turret_id)
            .ok_or_else(|| QueryError::NotFound {
                name: turret_id.to_string(),
                category: Some(Category::Turret),
                suggestions: self.resolver.suggestions(Category::Turret, turret_id),
            })?;
        Ok(QueryResult::TurretInfo {
            turret_id: turret.id.clone(),
            turret: turret.name.clone(),
            health: turret.health,
            attack_range: turret.attack_range,
            stats: turret.stats.clone(),
            info: turret.info.clone(),
        })
    }

    /// Base stats of two champions side by side. Stats absent from both are
    /// omitted.
    pub fn compare_champions(
        &self,
        first_id: &str,
        second_id: &str,
    ) -> Result<QueryResult, QueryError> {
        let first = self.champion(first_id)?;
        let second = self.champion(second_id)?;
        let (a, b) = (&first.base_stats, &second.base_stats);

        let mut stats = BTreeMap::new();
        let mut pair = |name: &str, first: Option<f64>, second: Option<f64>| {
            if first.is_some() || second.is_some() {
                stats.insert(name.to_string(), StatPair { first, second });
            }
        };
        pair("health", a.health, b.health);
        pair("mana", a.mana, b.mana);
        pair("armor", a.armor, b.armor);
        pair("magic_resist", a.magic_resist, b.magic_resist);
        pair("attack_damage", a.attack_damage, b.attack_damage);
        pair("attack_speed", a.attack_speed, b.attack_speed);
        pair("attack_range", a.attack_range, b.attack_range);
        pair("movement_speed", a.movement_speed, b.movement_speed);
        pair("health_regen", a.health_regen, b.health_regen);
        pair("mana_regen", a.mana_regen, b.mana_regen);

        Ok(QueryResult::ChampionComparison {
            first_id: first.id.clone(),
            first: first.name.clone(),
            second_id: second.id.clone(),
            second: second.name.clone(),
            stats,
        })
    }

    /// Display names of every known monster, sorted.
    #[must_use]
    pub fn monster_list(&self) -> QueryResult {
        let mut monsters: Vec<String> = self.kb.monsters().map(|m| m.name.clone()).collect();
        monsters.sort_unstable();
        QueryResult::MonsterList {
            count: monsters.len(),
            monsters,
        }
    }

    /// Display names of every known turret, sorted.
    #[must_use]
    pub fn turret_list(&self) -> QueryResult {
        let mut turrets: Vec<String> = self.kb.turrets().map(|t| t.name.clone()).collect();
        turrets.sort_unstable();
        QueryResult::TurretList {
            count: turrets.len(),
            turrets,
        }
    }

    fn display_names(&self, ids: &[String]) -> Vec<String> {
        let mut names: Vec<String> = ids
            .iter()
            .filter_map(|id| self.kb.champion(id).map(|c| c.name.clone()))
            .collect();
        names.sort_unstable();
        names
    }

    /// Champions that play a role, by common role word (`"tank"`,
    /// `"adc"`).
    pub fn champions_by_role(&self, role: &str) -> Result<QueryResult, QueryError> {
        let key = normalize_name(role);
        let Some(class) = ROLE_WORDS
            .iter()
            .find(|(word, _)| *word == key)
            .map(|(_, c)| *c)
        else {
            return Err(QueryError::NotFound {
                name: role.to_string(),
                category: None,
                suggestions: ROLE_WORDS.iter().map(|(w, _)| (*w).to_string()).collect(),
            });
        };
        let champions = self.display_names(self.kb.champions_by_role(class));
        Ok(QueryResult::RoleChampions {
            role: class.to_string(),
            count: champions.len(),
            champions,
        })
    }

    /// Champions typically played in a lane, by common lane word
    /// (`"top"`, `"jungle"`).
    pub fn champions_by_lane(&self, lane: &str) -> Result<QueryResult, QueryError> {
        let key = normalize_name(lane);
        let Some(class) = LANE_WORDS
            .iter()
            .find(|(word, _)| *word == key)
            .map(|(_, c)| *c)
        else {
            return Err(QueryError::NotFound {
                name: lane.to_string(),
                category: None,
                suggestions: LANE_WORDS.iter().map(|(w, _)| (*w).to_string()).collect(),
            });
        };
        let champions = self.display_names(self.kb.champions_by_lane(class));
        Ok(QueryResult::LaneChampions {
            lane: class.to_string(),
            count: champions.len(),
            champions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentSet;

    const CHAMPIONS: &str = r##"
@prefix moba: <http://example.org/moba#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

moba:Evelynn a moba:AssassinHero ;
    moba:heroName "Evelynn" ;
    rdfs:comment "Agony's Embrace" ;
    moba:playsRole moba:AssassinRole ;
    moba:typicalLane moba:Jungle ;
    moba:hasBaseStats moba:Evelynn_S ;
    moba:hasStatGrowth moba:Evelynn_G ;
    moba:hasSkill moba:Evelynn_Q ;
    moba:counters moba:Ashe .

moba:Evelynn_S moba:baseHealth 642 ;
    moba:baseMana 315 ;
    moba:baseArmor 37 ;
    moba:baseAttackDamage 61 ;
    moba:baseAttackSpeed 0.667 ;
    moba:baseMovementSpeed 335 .

moba:Evelynn_G moba:healthPerLevel 98 ;
    moba:armorPerLevel 4.2 ;
    moba:attackDamagePerLevel 3 .

moba:Evelynn_Q a moba:ActiveSkill ;
    moba:skillName "Hate Spike" ;
    moba:hasDamageType moba:MagicDamage ;
    moba:cooldown 4 ;
    moba:hasSkillLevel moba:EQ1 , moba:EQ3 .

moba:EQ1 moba:skillLevelNumber 1 ; moba:damageAtSkillLevel 25 ; moba:cooldownAtSkillLevel 4 .
moba:EQ3 moba:skillLevelNumber 3 ; moba:damageAtSkillLevel 35 ; moba:manaCostAtSkillLevel 30 .

moba:Ashe a moba:CarryHero ;
    moba:heroName "Ashe" ;
    moba:playsRole moba:CarryRole ;
    moba:typicalLane moba:BotLane ;
    moba:hasBaseStats moba:Ashe_S .

moba:Ashe_S moba:baseHealth 610 .
"##;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::load(&DocumentSet {
            champions: CHAMPIONS.to_string(),
            items: String::new(),
            monsters: String::new(),
            turrets: String::new(),
            enrichment: None,
        })
        .unwrap()
    }

    #[test]
    fn test_stat_at_level_is_linear() {
        assert_eq!(stat_at_level(642.0, 98.0, 1), 642.0);
        assert_eq!(stat_at_level(642.0, 98.0, 2), 740.0);
        assert_eq!(stat_at_level(642.0, 98.0, 18), 642.0 + 98.0 * 17.0);
    }

    #[test]
    fn test_skill_value_at_level() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let result = engine
            .skill_value_at_level("evelynn", SkillSlot::Q, 3)
            .unwrap();
        match result {
            QueryResult::SkillValue { skill_name, damage, damage_type, cooldown, mana_cost, .. } => {
                assert_eq!(skill_name, "Hate Spike");
                assert_eq!(damage, Some(35.0));
                assert_eq!(damage_type.as_deref(), Some("MagicDamage"));
                // Rank 3 has no cooldown fact; the base cooldown fills in.
                assert_eq!(cooldown, Some(4.0));
                assert_eq!(mana_cost, Some(30.0));
            }
            other => panic!("expected SkillValue, got {other:?}"),
        }
    }

    #[test]
    fn test_skill_level_out_of_range() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let err = engine
            .skill_value_at_level("evelynn", SkillSlot::Q, 7)
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidLevel { given: 7, valid: vec![1, 2, 3, 4, 5] }
        );
        // In range, but not authored.
        let err = engine
            .skill_value_at_level("evelynn", SkillSlot::Q, 2)
            .unwrap_err();
        assert_eq!(err, QueryError::InvalidLevel { given: 2, valid: vec![1, 3] });
    }

    #[test]
    fn test_missing_skill_lists_available_slots() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let err = engine
            .skill_value_at_level("evelynn", SkillSlot::W, 1)
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidSlot { given: "W".to_string(), valid: vec![SkillSlot::Q] }
        );
    }

    #[test]
    fn test_unknown_champion_has_suggestions() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let err = engine.base_stats("evelyn").unwrap_err();
        match err {
            QueryError::NotFound { suggestions, .. } => {
                assert_eq!(suggestions, vec!["evelynn"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_specific_stat_aliases() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let result = engine.specific_stat("evelynn", "HP").unwrap();
        assert_eq!(
            result,
            QueryResult::Stat {
                champion_id: "evelynn".into(),
                champion: "Evelynn".into(),
                stat: "health".into(),
                value: Some(642.0),
            }
        );
        let err = engine.specific_stat("evelynn", "luck").unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[test]
    fn test_stats_at_level_scaling() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let result = engine.stats_at_level("evelynn", 3).unwrap();
        match result {
            QueryResult::StatsAtLevel { level, stats, .. } => {
                assert_eq!(level, 3);
                assert_eq!(stats["health"], 642.0 + 98.0 * 2.0);
                assert_eq!(stats["armor"], 45.4);
                // No growth data: passes through unscaled.
                assert_eq!(stats["movement_speed"], 335.0);
            }
            other => panic!("expected StatsAtLevel, got {other:?}"),
        }

        let err = engine.stats_at_level("evelynn", 19).unwrap_err();
        assert!(matches!(err, QueryError::InvalidLevel { given: 19, .. }));
    }

    #[test]
    fn test_counters_and_empty_lists_are_valid() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let result = engine.counters("evelynn", CounterDirection::Counters).unwrap();
        match result {
            QueryResult::Counters { normal, hard, total, .. } => {
                assert_eq!(normal, vec!["ashe"]);
                assert!(hard.is_empty());
                assert_eq!(total, 1);
            }
            other => panic!("expected Counters, got {other:?}"),
        }
        // No authored relations is an empty answer, not an error.
        let result = engine.counters("ashe", CounterDirection::Counters).unwrap();
        match result {
            QueryResult::Counters { total, .. } => assert_eq!(total, 0),
            other => panic!("expected Counters, got {other:?}"),
        }
    }

    #[test]
    fn test_role_and_lane_queries() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let result = engine.champions_by_role("adc").unwrap();
        assert_eq!(
            result,
            QueryResult::RoleChampions {
                role: "CarryRole".into(),
                count: 1,
                champions: vec!["Ashe".into()],
            }
        );
        let result = engine.champions_by_lane("jungle").unwrap();
        match result {
            QueryResult::LaneChampions { lane, champions, .. } => {
                assert_eq!(lane, "Jungle");
                assert_eq!(champions, vec!["Evelynn"]);
            }
            other => panic!("expected LaneChampions, got {other:?}"),
        }
        assert!(engine.champions_by_role("jester").is_err());
    }

    #[test]
    fn test_skill_mana_cost() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        match engine
            .skill_mana_cost("evelynn", SkillSlot::Q, Some(3))
            .unwrap()
        {
            QueryResult::SkillManaCost { mana_cost, mana_costs_by_level, .. } => {
                assert_eq!(mana_cost, Some(30.0));
                // Only rank 3 carries a cost in this data.
                assert_eq!(mana_costs_by_level.len(), 1);
                assert_eq!(mana_costs_by_level[&3], 30.0);
            }
            other => panic!("expected SkillManaCost, got {other:?}"),
        }
        // Rank 7 is invalid for costs just as it is for damage.
        let err = engine
            .skill_mana_cost("evelynn", SkillSlot::Q, Some(7))
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidLevel { given: 7, .. }));
    }

    #[test]
    fn test_compare_champions() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        match engine.compare_champions("evelynn", "ashe").unwrap() {
            QueryResult::ChampionComparison { first, second, stats, .. } => {
                assert_eq!(first, "Evelynn");
                assert_eq!(second, "Ashe");
                assert_eq!(stats["health"].first, Some(642.0));
                assert_eq!(stats["health"].second, Some(610.0));
                // Ashe has no mana in this data; the pair is one-sided.
                assert_eq!(stats["mana"].first, Some(315.0));
                assert_eq!(stats["mana"].second, None);
            }
            other => panic!("expected ChampionComparison, got {other:?}"),
        }
        let err = engine.compare_champions("evelynn", "zed").unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[test]
    fn test_empty_objective_lists() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        assert_eq!(
            engine.monster_list(),
            QueryResult::MonsterList { count: 0, monsters: vec![] }
        );
        assert_eq!(
            engine.turret_list(),
            QueryResult::TurretList { count: 0, turrets: vec![] }
        );
    }

    #[test]
    fn test_counter_direction_parse() {
        assert_eq!(CounterDirection::parse("counters"), CounterDirection::Counters);
        assert_eq!(CounterDirection::parse("Counters"), CounterDirection::Counters);
        assert_eq!(CounterDirection::parse("countered_by"), CounterDirection::CounteredBy);
        assert_eq!(CounterDirection::parse("anything"), CounterDirection::CounteredBy);
    }
}
