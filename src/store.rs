//! Document loading and the immutable knowledge base.
//!
//! Loading is a single fallible pass: parse the four category documents
//! (plus the optional enrichment document), build every entity, then run the
//! global checks — identifier uniqueness across categories and resolution of
//! every cross-entity reference. A [`KnowledgeBase`] that loads successfully
//! is internally consistent and never changes afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::champion::Champion;
use crate::error::{LoadError, ModelError};
use crate::item::Item;
use crate::objective::{Monster, Turret};
use crate::schema::{self, pred, Category};
use crate::triple::FactIndex;
use crate::turtle::parse_document;

/// The raw document texts a knowledge base is loaded from.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    /// The champion document.
    pub champions: String,
    /// The item document.
    pub items: String,
    /// The monster document.
    pub monsters: String,
    /// The turret document.
    pub turrets: String,
    /// Supplementary champion facts, merged before model building.
    pub enrichment: Option<String>,
}

impl DocumentSet {
    /// Reads the document set from a directory using the conventional file
    /// names (`champions.ttl`, `items.ttl`, `monsters.ttl`, `turrets.ttl`,
    /// and optionally `enrichment.ttl`).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if a required file cannot be read.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let read = |file: &str| {
            let path = dir.join(file);
            fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
        };

        let enrichment_path = dir.join("enrichment.ttl");
        let enrichment = if enrichment_path.exists() {
            Some(
                fs::read_to_string(&enrichment_path).map_err(|source| LoadError::Io {
                    path: enrichment_path,
                    source,
                })?,
            )
        } else {
            None
        };

        Ok(Self {
            champions: read("champions.ttl")?,
            items: read("items.ttl")?,
            monsters: read("monsters.ttl")?,
            turrets: read("turrets.ttl")?,
            enrichment,
        })
    }
}

/// The immutable, validated entity store.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    champions: BTreeMap<String, Champion>,
    items: BTreeMap<String, Item>,
    monsters: BTreeMap<String, Monster>,
    turrets: BTreeMap<String, Turret>,
    by_role: BTreeMap<String, Vec<String>>,
    by_lane: BTreeMap<String, Vec<String>>,
}

fn parse_doc(document: &'static str, text: &str) -> Result<FactIndex, LoadError> {
    let facts =
        parse_document(text).map_err(|source| LoadError::Parse { document, source })?;
    Ok(FactIndex::from_facts(facts))
}

fn model_err(document: &'static str) -> impl Fn(ModelError) -> LoadError {
    move |source| LoadError::Model { document, source }
}

/// Subjects declared with any of the given classes, first-seen order,
/// deduplicated.
fn subjects_of_any<'a>(index: &'a FactIndex, classes: &[&str]) -> Vec<&'a str> {
    index
        .subjects()
        .filter(|s| classes.iter().any(|c| index.has_type(s, c)))
        .collect()
}

impl KnowledgeBase {
    /// Parses, models, and validates the document set.
    ///
    /// Duplicate identifiers inside one category keep the first occurrence;
    /// the same identifier appearing in two different categories is fatal,
    /// as is any relationship reference that does not resolve.
    ///
    /// # Errors
    ///
    /// Any parse failure, model failure, identifier collision, or dangling
    /// reference aborts the load.
    pub fn load(docs: &DocumentSet) -> Result<Self, LoadError> {
        let mut champion_index = parse_doc("champions", &docs.champions)?;
        if let Some(enrichment) = &docs.enrichment {
            let facts = parse_document(enrichment)
                .map_err(|source| LoadError::Parse { document: "enrichment", source })?;
            champion_index.extend(facts);
        }
        let item_index = parse_doc("items", &docs.items)?;
        let monster_index = parse_doc("monsters", &docs.monsters)?;
        let turret_index = parse_doc("turrets", &docs.turrets)?;

        let mut champions = BTreeMap::new();
        for subject in subjects_of_any(&champion_index, &schema::HERO_TYPES) {
            let champion =
                Champion::from_graph(&champion_index, subject).map_err(model_err("champions"))?;
            champions.entry(champion.id.clone()).or_insert(champion);
        }

        let mut items = BTreeMap::new();
        for subject in subjects_of_any(&item_index, &schema::ITEM_TYPES) {
            let item = Item::from_graph(&item_index, subject).map_err(model_err("items"))?;
            items.entry(item.id.clone()).or_insert(item);
        }

        let mut monsters = BTreeMap::new();
        for subject in subjects_of_any(&monster_index, &schema::MONSTER_TYPES) {
            let monster =
                Monster::from_graph(&monster_index, subject).map_err(model_err("monsters"))?;
            monsters.entry(monster.id.clone()).or_insert(monster);
        }

        let mut turrets = BTreeMap::new();
        for subject in subjects_of_any(&turret_index, &[schema::TURRET_TYPE]) {
            let turret =
                Turret::from_graph(&turret_index, subject).map_err(model_err("turrets"))?;
            turrets.entry(turret.id.clone()).or_insert(turret);
        }

        let kb = Self {
            by_role: role_index(&champions, |c| &c.roles),
            by_lane: role_index(&champions, |c| &c.lanes),
            champions,
            items,
            monsters,
            turrets,
        };
        kb.check_identifier_uniqueness()?;
        kb.check_references()?;
        Ok(kb)
    }

    fn check_identifier_uniqueness(&self) -> Result<(), LoadError> {
        let mut seen: BTreeMap<&str, Category> = BTreeMap::new();
        for (category, ids) in [
            (Category::Champion, self.ids(Category::Champion)),
            (Category::Item, self.ids(Category::Item)),
            (Category::Monster, self.ids(Category::Monster)),
            (Category::Turret, self.ids(Category::Turret)),
        ] {
            for id in ids {
                if let Some(first) = seen.insert(id, category) {
                    return Err(LoadError::IdentifierCollision {
                        id: id.to_string(),
                        first,
                        second: category,
                    });
                }
            }
        }
        Ok(())
    }

    fn check_references(&self) -> Result<(), LoadError> {
        let champion_lists: [(&'static str, fn(&Champion) -> &Vec<String>, Category); 10] = [
            (pred::COUNTERS, |c| &c.counters, Category::Champion),
            (pred::COUNTERED_BY, |c| &c.countered_by, Category::Champion),
            (pred::HARD_COUNTERS, |c| &c.hard_counters, Category::Champion),
            (pred::HARD_COUNTERED_BY, |c| &c.hard_countered_by, Category::Champion),
            (pred::STRONG_SYNERGY_WITH, |c| &c.strong_synergy, Category::Champion),
            (pred::SYNERGY_WITH, |c| &c.synergy, Category::Champion),
            (pred::WEAK_SYNERGY_WITH, |c| &c.weak_synergy, Category::Champion),
            (pred::CORE_ITEM, |c| &c.core_items, Category::Item),
            (pred::RECOMMENDED_ITEM, |c| &c.recommended_items, Category::Item),
            (pred::SITUATIONAL_ITEM, |c| &c.situational_items, Category::Item),
        ];

        for champion in self.champions.values() {
            for (predicate, list, target) in &champion_lists {
                for reference in list(champion) {
                    let resolves = match target {
                        Category::Champion => self.champions.contains_key(reference),
                        _ => self.items.contains_key(reference),
                    };
                    if !resolves {
                        return Err(LoadError::DanglingReference {
                            category: Category::Champion,
                            subject: champion.id.clone(),
                            predicate,
                            target: *target,
                            reference: reference.clone(),
                        });
                    }
                }
            }
        }

        for item in self.items.values() {
            for reference in &item.build_path {
                if !self.items.contains_key(reference) {
                    return Err(LoadError::DanglingReference {
                        category: Category::Item,
                        subject: item.id.clone(),
                        predicate: pred::BUILD_PATH,
                        target: Category::Item,
                        reference: reference.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Looks up a champion by canonical id.
    #[must_use]
    pub fn champion(&self, id: &str) -> Option<&Champion> {
        self.champions.get(id)
    }

    /// Looks up an item by canonical id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Looks up a monster by canonical id.
    #[must_use]
    pub fn monster(&self, id: &str) -> Option<&Monster> {
        self.monsters.get(id)
    }

    /// Looks up a turret by canonical id.
    #[must_use]
    pub fn turret(&self, id: &str) -> Option<&Turret> {
        self.turrets.get(id)
    }

    /// All champions, sorted by id.
    pub fn champions(&self) -> impl Iterator<Item = &Champion> {
        self.champions.values()
    }

    /// All items, sorted by id.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// All monsters, sorted by id.
    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.values()
    }

    /// All turrets, sorted by id.
    pub fn turrets(&self) -> impl Iterator<Item = &Turret> {
        self.turrets.values()
    }

    /// Canonical ids of a category, sorted.
    #[must_use]
    pub fn ids(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Champion => self.champions.keys().map(String::as_str).collect(),
            Category::Item => self.items.keys().map(String::as_str).collect(),
            Category::Monster => self.monsters.keys().map(String::as_str).collect(),
            Category::Turret => self.turrets.keys().map(String::as_str).collect(),
        }
    }

    /// (canonical id, display name) pairs of a category, sorted by id.
    #[must_use]
    pub fn names(&self, category: Category) -> Vec<(&str, &str)> {
        match category {
            Category::Champion => self
                .champions
                .iter()
                .map(|(id, c)| (id.as_str(), c.name.as_str()))
                .collect(),
            Category::Item => self
                .items
                .iter()
                .map(|(id, i)| (id.as_str(), i.name.as_str()))
                .collect(),
            Category::Monster => self
                .monsters
                .iter()
                .map(|(id, m)| (id.as_str(), m.name.as_str()))
                .collect(),
            Category::Turret => self
                .turrets
                .iter()
                .map(|(id, t)| (id.as_str(), t.name.as_str()))
                .collect(),
        }
    }

    /// Champion ids grouped by role class (`"AssassinRole"`), first-seen
    /// order within a role.
    #[must_use]
    pub fn champions_by_role(&self, role: &str) -> &[String] {
        self.by_role.get(role).map_or(&[], Vec::as_slice)
    }

    /// Champion ids grouped by lane class (`"TopLane"`).
    #[must_use]
    pub fn champions_by_lane(&self, lane: &str) -> &[String] {
        self.by_lane.get(lane).map_or(&[], Vec::as_slice)
    }
}

fn role_index(
    champions: &BTreeMap<String, Champion>,
    lists: impl Fn(&Champion) -> &Vec<String>,
) -> BTreeMap<String, Vec<String>> {
    let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for champion in champions.values() {
        for key in lists(champion) {
            index.entry(key.clone()).or_default().push(champion.id.clone());
        }
    }
    index
}
