//! Shared fixture documents for the end-to-end tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use riftkb::{DocumentSet, KnowledgeBase};

pub const CHAMPIONS_TTL: &str = r##"
@prefix moba: <http://example.org/moba#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

moba:Evelynn a moba:AssassinHero , moba:MeleeHero ;
    moba:heroName "Evelynn" ;
    rdfs:comment "Agony's Embrace" ;
    moba:dealsDamageType moba:MagicDamage ;
    moba:isRanged false ;
    moba:playsRole moba:AssassinRole ;
    moba:typicalLane moba:Jungle ;
    moba:hasBaseStats moba:Evelynn_BaseStats ;
    moba:hasStatGrowth moba:Evelynn_Growth ;
    moba:hasSkill moba:Evelynn_P , moba:Evelynn_Q ;
    moba:counters moba:Ashe ;
    moba:counteredBy moba:Twisted_Fate ;
    moba:coreItem moba:Rabadons_Deathcap .

moba:Evelynn_BaseStats moba:baseHealth 642 ;
    moba:baseMana 315 ;
    moba:baseArmor 37 ;
    moba:baseMagicResist 32.1 ;
    moba:baseAttackDamage 61 ;
    moba:baseAttackSpeed 0.667 ;
    moba:baseMovementSpeed 335 ;
    moba:attackRange 125 .

moba:Evelynn_Growth moba:healthPerLevel 98 ;
    moba:manaPerLevel 40 ;
    moba:armorPerLevel 4.2 ;
    moba:attackDamagePerLevel 3 .

moba:Evelynn_P a moba:PassiveSkill ;
    moba:skillName "Demon Shade" .

moba:Evelynn_Q a moba:ActiveSkill ;
    moba:skillName "Hate Spike" ;
    moba:hasDamageType moba:MagicDamage ;
    moba:costType "Mana" ;
    moba:cooldown 4 ;
    moba:maximumLevel 5 ;
    moba:hasSkillLevel moba:Evelynn_Q_L1 , moba:Evelynn_Q_L2 , moba:Evelynn_Q_L3 ,
        moba:Evelynn_Q_L4 , moba:Evelynn_Q_L5 .

moba:Evelynn_Q_L1 moba:skillLevelNumber 1 ; moba:damageAtSkillLevel 25 ;
    moba:cooldownAtSkillLevel 4 ; moba:manaCostAtSkillLevel 30 .
moba:Evelynn_Q_L2 moba:skillLevelNumber 2 ; moba:damageAtSkillLevel 30 ;
    moba:cooldownAtSkillLevel 4 ; moba:manaCostAtSkillLevel 30 .
moba:Evelynn_Q_L3 moba:skillLevelNumber 3 ; moba:damageAtSkillLevel 35 ;
    moba:cooldownAtSkillLevel 4 ; moba:manaCostAtSkillLevel 30 .
moba:Evelynn_Q_L4 moba:skillLevelNumber 4 ; moba:damageAtSkillLevel 40 ;
    moba:cooldownAtSkillLevel 4 ; moba:manaCostAtSkillLevel 30 .
moba:Evelynn_Q_L5 moba:skillLevelNumber 5 ; moba:damageAtSkillLevel 45 ;
    moba:cooldownAtSkillLevel 4 ; moba:manaCostAtSkillLevel 30 .

moba:Twisted_Fate a moba:MageHero , moba:RangedHero ;
    moba:heroName "Twisted Fate" ;
    rdfs:comment "The Card Master" ;
    moba:isRanged true ;
    moba:playsRole moba:MageRole ;
    moba:typicalLane moba:MidLane ;
    moba:hasBaseStats moba:TF_BaseStats ;
    moba:hasSkill moba:Twisted_Fate_Q ;
    moba:counters moba:Evelynn ;
    moba:recommendedItem moba:Rabadons_Deathcap .

moba:TF_BaseStats moba:baseHealth 604 ;
    moba:baseMana 333 ;
    moba:baseMovementSpeed 330 .

moba:Twisted_Fate_Q a moba:ActiveSkill ;
    moba:skillName "Wild Cards" ;
    moba:hasDamageType moba:MagicDamage ;
    moba:cooldown 6 ;
    moba:hasSkillLevel moba:TF_Q_L1 .

moba:TF_Q_L1 moba:skillLevelNumber 1 ; moba:damageAtSkillLevel 60 .

moba:Miss_Fortune a moba:CarryHero , moba:RangedHero ;
    moba:heroName "Miss Fortune" ;
    rdfs:comment "The Bounty Hunter" ;
    moba:playsRole moba:CarryRole ;
    moba:typicalLane moba:BotLane ;
    moba:hasBaseStats moba:MF_BaseStats ;
    moba:coreItem moba:Infinity_Edge .

moba:MF_BaseStats moba:baseHealth 640 ;
    moba:baseAttackDamage 52 .

moba:Ashe a moba:CarryHero ;
    moba:heroName "Ashe" ;
    moba:playsRole moba:CarryRole ;
    moba:typicalLane moba:BotLane ;
    moba:hasBaseStats moba:Ashe_BaseStats ;
    moba:synergyWith moba:Miss_Fortune .

moba:Ashe_BaseStats moba:baseHealth 610 ;
    moba:baseAttackDamage 59 .
"##;

pub const ITEMS_TTL: &str = r##"
@prefix moba: <http://example.org/moba#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

moba:Rabadons_Deathcap a moba:AdvancedItem ;
    moba:itemName "Rabadon's Deathcap" ;
    rdfs:comment "Massively increases ability power." ;
    moba:goldCost 3600 ;
    moba:buildPath moba:Needlessly_Large_Rod ;
    moba:providesStats moba:Deathcap_Stats ;
    moba:uniquePassive true .

moba:Deathcap_Stats moba:abilityPower 120 .

moba:Needlessly_Large_Rod a moba:ComponentItem ;
    moba:itemName "Needlessly Large Rod" ;
    moba:goldCost 1250 .

moba:Infinity_Edge a moba:AdvancedItem ;
    moba:itemName "Infinity Edge" ;
    moba:goldCost 3400 ;
    moba:buildPath moba:BF_Sword .

moba:BF_Sword a moba:ComponentItem ;
    moba:itemName "B.F. Sword" ;
    moba:goldCost 1300 .
"##;

pub const MONSTERS_TTL: &str = r##"
@prefix moba: <http://example.org/moba#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

moba:Baron_Nashor a moba:Boss ;
    rdfs:label "Baron Nashor" ;
    rdfs:comment "Spawns at 20 minutes." ;
    moba:objectiveHealth 6300 ;
    moba:attackRange 955 .

moba:Blue_Sentinel a moba:NeutralMonster ;
    rdfs:label "Blue Sentinel" ;
    moba:objectiveHealth 2300 .
"##;

pub const TURRETS_TTL: &str = r##"
@prefix moba: <http://example.org/moba#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

moba:Outer_Turret a moba:Tower ;
    rdfs:label "Outer Turret" ;
    moba:objectiveHealth 5000 ;
    moba:attackRange 750 .
"##;

pub const ENRICHMENT_TTL: &str = r##"
@prefix moba: <http://example.org/moba#> .

moba:Evelynn moba:hasCrowdControl moba:CharmCC ;
    moba:powerSpike "mid game"@en .
"##;

pub fn document_set() -> DocumentSet {
    DocumentSet {
        champions: CHAMPIONS_TTL.to_string(),
        items: ITEMS_TTL.to_string(),
        monsters: MONSTERS_TTL.to_string(),
        turrets: TURRETS_TTL.to_string(),
        enrichment: Some(ENRICHMENT_TTL.to_string()),
    }
}

pub fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase::load(&document_set()).expect("fixture documents load")
}
