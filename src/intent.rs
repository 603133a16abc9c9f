//! Intent dispatch: routing a classified request to a catalog query.
//!
//! An upstream classifier produces an intent tag plus loosely-filled
//! parameter slots. [`dispatch`] validates the slots the tag needs, resolves
//! names with the right category hint, and calls the matching
//! [`QueryEngine`] operation. Unknown tags and missing required slots come
//! back as recoverable errors, never panics.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::query::{CounterDirection, QueryEngine, QueryResult};
use crate::schema::{Category, SkillSlot};

/// A classified request: the intent tag and whatever slots the classifier
/// filled. Absent slots deserialize as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct IntentRequest {
    pub intent: String,
    pub champion_name: Option<String>,
    pub second_champion_name: Option<String>,
    pub skill_key: Option<String>,
    pub skill_level: Option<u8>,
    pub character_level: Option<u8>,
    pub stat_name: Option<String>,
    pub counter_direction: Option<String>,
    pub item_name: Option<String>,
    pub monster_name: Option<String>,
    pub turret_name: Option<String>,
    pub role: Option<String>,
    pub lane: Option<String>,
}

impl IntentRequest {
    /// Creates a request with only the intent tag set.
    #[must_use]
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }
}

fn require<'a>(
    slot: &'a Option<String>,
    tag: &str,
    parameter: &'static str,
) -> Result<&'a str, QueryError> {
    slot.as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| QueryError::MissingParameter {
            tag: tag.to_string(),
            parameter,
        })
}

fn slot_or(request: &IntentRequest, default: SkillSlot) -> Result<SkillSlot, QueryError> {
    match request.skill_key.as_deref() {
        Some(token) if !token.trim().is_empty() => SkillSlot::parse(token),
        _ => Ok(default),
    }
}

/// Routes a request to the catalog operation its tag names.
///
/// # Errors
///
/// [`QueryError::UnsupportedIntent`] for unknown tags,
/// [`QueryError::MissingParameter`] for absent required slots, and whatever
/// the underlying operation returns.
pub fn dispatch(engine: &QueryEngine<'_>, request: &IntentRequest) -> Result<QueryResult, QueryError> {
    let tag = request.intent.trim();

    let resolve_champion = || -> Result<String, QueryError> {
        let name = require(&request.champion_name, tag, "champion_name")?;
        Ok(engine
            .resolver()
            .resolve(name, Some(Category::Champion))?
            .id)
    };

    match tag {
        "SKILL_DAMAGE_AT_LEVEL" => {
            let id = resolve_champion()?;
            let slot = slot_or(request, SkillSlot::Q)?;
            let level = request.skill_level.ok_or_else(|| QueryError::MissingParameter {
                tag: tag.to_string(),
                parameter: "skill_level",
            })?;
            engine.skill_value_at_level(&id, slot, level)
        }
        "SKILL_INFO" => {
            let id = resolve_champion()?;
            let slot = slot_or(request, SkillSlot::Q)?;
            engine.skill_summary(&id, slot)
        }
        "SKILL_COOLDOWN" => {
            let id = resolve_champion()?;
            let slot = slot_or(request, SkillSlot::R)?;
            engine.skill_cooldown(&id, slot, request.skill_level)
        }
        "SKILL_MANA_COST" => {
            let id = resolve_champion()?;
            let slot = slot_or(request, SkillSlot::Q)?;
            engine.skill_mana_cost(&id, slot, request.skill_level)
        }
        "CHAMPION_BASE_STATS" => {
            let id = resolve_champion()?;
            match request.stat_name.as_deref().filter(|s| !s.trim().is_empty()) {
                Some(stat) => engine.specific_stat(&id, stat),
                None => engine.base_stats(&id),
            }
        }
        "CHAMPION_STATS_AT_LEVEL" => {
            let id = resolve_champion()?;
            let level =
                request
                    .character_level
                    .ok_or_else(|| QueryError::MissingParameter {
                        tag: tag.to_string(),
                        parameter: "character_level",
                    })?;
            engine.stats_at_level(&id, level)
        }
        "CHAMPION_INFO" => {
            let id = resolve_champion()?;
            engine.champion_overview(&id)
        }
        "CHAMPION_COMPARISON" => {
            let first = resolve_champion()?;
            let other = require(&request.second_champion_name, tag, "second_champion_name")?;
            let second = engine
                .resolver()
                .resolve(other, Some(Category::Champion))?
                .id;
            engine.compare_champions(&first, &second)
        }
        "LIST_SKILLS" => {
            let id = resolve_champion()?;
            engine.skill_list(&id)
        }
        "COUNTER_QUERY" => {
            let id = resolve_champion()?;
            let direction = request
                .counter_direction
                .as_deref()
                .map_or(CounterDirection::CounteredBy, CounterDirection::parse);
            engine.counters(&id, direction)
        }
        "SYNERGY_QUERY" => {
            let id = resolve_champion()?;
            engine.synergies(&id)
        }
        "BUILD_QUERY" => {
            let id = resolve_champion()?;
            engine.build(&id)
        }
        "ITEM_INFO" => {
            let name = require(&request.item_name, tag, "item_name")?;
            let id = engine.resolver().resolve(name, Some(Category::Item))?.id;
            engine.item_info(&id)
        }
        // A nameless objective query lists everything in the category.
        "MONSTER_INFO" => match request.monster_name.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(name) => {
                let id = engine.resolver().resolve(name, Some(Category::Monster))?.id;
                engine.monster_info(&id)
            }
            None => Ok(engine.monster_list()),
        },
        "TURRET_INFO" => match request.turret_name.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(name) => {
                let id = engine.resolver().resolve(name, Some(Category::Turret))?.id;
                engine.turret_info(&id)
            }
            None => Ok(engine.turret_list()),
        },
        "ROLE_QUERY" => {
            let role = require(&request.role, tag, "role")?;
            engine.champions_by_role(role)
        }
        "LANE_QUERY" => {
            let lane = require(&request.lane, tag, "lane")?;
            engine.champions_by_lane(lane)
        }
        _ => Err(QueryError::UnsupportedIntent {
            tag: request.intent.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DocumentSet, KnowledgeBase};

    const CHAMPIONS: &str = r##"
@prefix moba: <http://example.org/moba#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

moba:Twisted_Fate a moba:MageHero ;
    moba:heroName "Twisted Fate" ;
    moba:hasBaseStats moba:TF_S ;
    moba:hasSkill moba:Twisted_Fate_Q .

moba:TF_S moba:baseHealth 604 ; moba:baseMana 333 .

moba:Twisted_Fate_Q a moba:ActiveSkill ;
    moba:skillName "Wild Cards" ;
    moba:cooldown 6 ;
    moba:hasSkillLevel moba:TFQ1 .

moba:TFQ1 moba:skillLevelNumber 1 ; moba:damageAtSkillLevel 60 .
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
    fn test_dispatch_skill_damage_with_alias() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let mut request = IntentRequest::new("SKILL_DAMAGE_AT_LEVEL");
        request.champion_name = Some("tf".into());
        request.skill_key = Some("q".into());
        request.skill_level = Some(1);
        let result = dispatch(&engine, &request).unwrap();
        match result {
            QueryResult::SkillValue { champion, skill_name, damage, .. } => {
                assert_eq!(champion, "Twisted Fate");
                assert_eq!(skill_name, "Wild Cards");
                assert_eq!(damage, Some(60.0));
            }
            other => panic!("expected SkillValue, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_defaults_skill_key() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let mut request = IntentRequest::new("SKILL_INFO");
        request.champion_name = Some("Twisted Fate".into());
        let result = dispatch(&engine, &request).unwrap();
        assert!(matches!(
            result,
            QueryResult::SkillSummary { skill_key: SkillSlot::Q, .. }
        ));
    }

    #[test]
    fn test_dispatch_missing_parameter() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let request = IntentRequest::new("SKILL_DAMAGE_AT_LEVEL");
        let err = dispatch(&engine, &request).unwrap_err();
        assert_eq!(
            err,
            QueryError::MissingParameter {
                tag: "SKILL_DAMAGE_AT_LEVEL".to_string(),
                parameter: "champion_name",
            }
        );

        let mut request = IntentRequest::new("SKILL_DAMAGE_AT_LEVEL");
        request.champion_name = Some("tf".into());
        let err = dispatch(&engine, &request).unwrap_err();
        assert_eq!(
            err,
            QueryError::MissingParameter {
                tag: "SKILL_DAMAGE_AT_LEVEL".to_string(),
                parameter: "skill_level",
            }
        );
    }

    #[test]
    fn test_dispatch_mana_cost_defaults_to_q() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let mut request = IntentRequest::new("SKILL_MANA_COST");
        request.champion_name = Some("tf".into());
        let result = dispatch(&engine, &request).unwrap();
        assert!(matches!(
            result,
            QueryResult::SkillManaCost { skill_key: SkillSlot::Q, level: None, .. }
        ));
    }

    #[test]
    fn test_dispatch_comparison_requires_second_champion() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let mut request = IntentRequest::new("CHAMPION_COMPARISON");
        request.champion_name = Some("tf".into());
        let err = dispatch(&engine, &request).unwrap_err();
        assert_eq!(
            err,
            QueryError::MissingParameter {
                tag: "CHAMPION_COMPARISON".to_string(),
                parameter: "second_champion_name",
            }
        );
    }

    #[test]
    fn test_dispatch_nameless_monster_query_lists_all() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let request = IntentRequest::new("MONSTER_INFO");
        // No monsters are loaded here; the fallback still answers.
        assert_eq!(
            dispatch(&engine, &request).unwrap(),
            QueryResult::MonsterList { count: 0, monsters: vec![] }
        );
    }

    #[test]
    fn test_dispatch_unsupported_intent() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let request = IntentRequest::new("WEATHER_FORECAST");
        let err = dispatch(&engine, &request).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnsupportedIntent { tag: "WEATHER_FORECAST".to_string() }
        );
    }

    #[test]
    fn test_dispatch_base_stats_with_and_without_stat_name() {
        let kb = kb();
        let engine = QueryEngine::new(&kb);
        let mut request = IntentRequest::new("CHAMPION_BASE_STATS");
        request.champion_name = Some("Twisted Fate".into());
        assert!(matches!(
            dispatch(&engine, &request).unwrap(),
            QueryResult::BaseStats { .. }
        ));
        request.stat_name = Some("mana".into());
        match dispatch(&engine, &request).unwrap() {
            QueryResult::Stat { stat, value, .. } => {
                assert_eq!(stat, "mana");
                assert_eq!(value, Some(333.0));
            }
            other => panic!("expected Stat, got {other:?}"),
        }
    }

    #[test]
    fn test_request_deserializes_with_absent_slots() {
        let request: IntentRequest =
            serde_json::from_str(r#"{"intent":"CHAMPION_INFO","champion_name":"tf"}"#).unwrap();
        assert_eq!(request.intent, "CHAMPION_INFO");
        assert_eq!(request.champion_name.as_deref(), Some("tf"));
        assert!(request.skill_level.is_none());
    }
}
