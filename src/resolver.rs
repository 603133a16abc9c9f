//! Name resolution: canonical identifiers, aliases, and suggestions.
//!
//! Every lookup funnels through one normalization ([`normalize_name`]) so
//! that `"Dr. Mundo"`, `"dr mundo"`, and `"DR-MUNDO"` all reach the same
//! canonical identifier. A curated alias table covers the community
//! shorthands normalization cannot derive (`tf`, `j4`, `asol`), and failed
//! lookups come back with edit-distance suggestions.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::QueryError;
use crate::schema::Category;
use crate::store::KnowledgeBase;

/// Community shorthands that normalization alone cannot map. Aliases are
/// only registered when their target exists in the loaded data.
const ALIASES: &[(&str, &str)] = &[
    ("mundo", "dr_mundo"),
    ("doctor_mundo", "dr_mundo"),
    ("lee", "lee_sin"),
    ("jarvan", "jarvan_iv"),
    ("j4", "jarvan_iv"),
    ("tf", "twisted_fate"),
    ("mf", "miss_fortune"),
    ("asol", "aurelion_sol"),
    ("aurelion", "aurelion_sol"),
    ("cho", "chogath"),
    ("kog", "kogmaw"),
    ("kha", "khazix"),
    ("yi", "master_yi"),
    ("xin", "xin_zhao"),
    ("tahm", "tahm_kench"),
    ("renata", "renata_glasc"),
    ("nunu", "nunu_willump"),
    ("monkey_king", "wukong"),
];

/// Maximum edit distance for a "did you mean" suggestion.
const SUGGESTION_DISTANCE: usize = 3;
const SUGGESTION_LIMIT: usize = 3;

fn strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"['’.]").expect("static pattern"))
}

fn collapse_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"))
}

/// Normalizes a raw name into a canonical identifier.
///
/// Lowercases, drops apostrophes and periods, collapses every other
/// non-alphanumeric run into a single underscore, and trims underscores at
/// the ends.
///
/// # Examples
///
/// ```
/// use riftkb::normalize_name;
///
/// assert_eq!(normalize_name("Dr. Mundo"), "dr_mundo");
/// assert_eq!(normalize_name("Kai'Sa"), "kaisa");
/// assert_eq!(normalize_name("Rabadon's Deathcap"), "rabadons_deathcap");
/// ```
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = strip_re().replace_all(&lowered, "");
    let collapsed = collapse_re().replace_all(&stripped, "_");
    collapsed.trim_matches('_').to_string()
}

/// A successful resolution: which category matched, and the canonical id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The category the name resolved in.
    pub category: Category,
    /// Canonical identifier of the matched entity.
    pub id: String,
}

/// Lookup tables from normalized keys to canonical identifiers, one table
/// per category.
#[derive(Debug, Clone)]
pub struct NameResolver {
    tables: BTreeMap<Category, HashMap<String, String>>,
    ids: BTreeMap<Category, Vec<String>>,
}

impl NameResolver {
    /// Builds the resolver from a loaded knowledge base.
    ///
    /// Each entity registers under its canonical id and its normalized
    /// display name; curated aliases are added on top when their target id
    /// is present in the category.
    #[must_use]
    pub fn from_kb(kb: &KnowledgeBase) -> Self {
        let mut tables: BTreeMap<Category, HashMap<String, String>> = BTreeMap::new();
        let mut ids: BTreeMap<Category, Vec<String>> = BTreeMap::new();

        for category in Category::ALL {
            let mut table = HashMap::new();
            let mut canon = Vec::new();
            for (id, name) in kb.names(category) {
                table.insert(id.to_string(), id.to_string());
                table.insert(normalize_name(name), id.to_string());
                canon.push(id.to_string());
            }
            for (alias, target) in ALIASES {
                if canon.iter().any(|id| id == target) {
                    table
                        .entry((*alias).to_string())
                        .or_insert_with(|| (*target).to_string());
                }
            }
            canon.sort_unstable();
            tables.insert(category, table);
            ids.insert(category, canon);
        }

        Self { tables, ids }
    }

    /// Resolves a raw name to a canonical identifier.
    ///
    /// With a category hint, only that category's table is consulted.
    /// Without one, all categories are tried: exactly one match resolves,
    /// several distinct matches are [`QueryError::AmbiguousName`], and none
    /// is [`QueryError::NotFound`] with suggestions.
    pub fn resolve(&self, raw: &str, hint: Option<Category>) -> Result<Resolved, QueryError> {
        let key = normalize_name(raw);
        if key.is_empty() {
            return Err(QueryError::NotFound {
                name: raw.to_string(),
                category: hint,
                suggestions: Vec::new(),
            });
        }

        if let Some(category) = hint {
            return match self.lookup(category, &key) {
                Some(id) => Ok(Resolved {
                    category,
                    id: id.to_string(),
                }),
                None => Err(QueryError::NotFound {
                    name: raw.to_string(),
                    category: Some(category),
                    suggestions: self.suggestions(category, &key),
                }),
            };
        }

        let hits: Vec<Resolved> = Category::ALL
            .into_iter()
            .filter_map(|category| {
                self.lookup(category, &key).map(|id| Resolved {
                    category,
                    id: id.to_string(),
                })
            })
            .collect();

        match hits.len() {
            0 => {
                let mut suggestions: Vec<String> = Category::ALL
                    .into_iter()
                    .flat_map(|c| self.suggestions(c, &key))
                    .collect();
                suggestions.sort_unstable();
                suggestions.dedup();
                suggestions.truncate(SUGGESTION_LIMIT);
                Err(QueryError::NotFound {
                    name: raw.to_string(),
                    category: None,
                    suggestions,
                })
            }
            1 => Ok(hits.into_iter().next().expect("one hit")),
            _ => Err(QueryError::AmbiguousName {
                name: raw.to_string(),
                candidates: hits.into_iter().map(|r| r.category).collect(),
            }),
        }
    }

    fn lookup(&self, category: Category, key: &str) -> Option<&str> {
        self.tables
            .get(&category)
            .and_then(|t| t.get(key))
            .map(String::as_str)
    }

    /// Closest canonical ids in a category, nearest first, ties broken
    /// alphabetically.
    #[must_use]
    pub fn suggestions(&self, category: Category, key: &str) -> Vec<String> {
        let Some(ids) = self.ids.get(&category) else {
            return Vec::new();
        };
        let mut scored: Vec<(usize, &String)> = ids
            .iter()
            .filter_map(|id| {
                let d = edit_distance(key, id);
                (d <= SUGGESTION_DISTANCE).then_some((d, id))
            })
            .collect();
        scored.sort();
        scored
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|(_, id)| id.clone())
            .collect()
    }
}

/// Levenshtein distance, two-row formulation.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DocumentSet, KnowledgeBase};

    fn sample_kb() -> KnowledgeBase {
        let docs = DocumentSet {
            champions: "@prefix moba: <http://x#> .\n\
                        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
                        moba:Twisted_Fate a moba:MageHero ;\n\
                            moba:heroName \"Twisted Fate\" ;\n\
                            moba:hasBaseStats moba:TF_S .\n\
                        moba:TF_S moba:baseHealth 600 .\n\
                        moba:Dr_Mundo a moba:TankHero ;\n\
                            moba:heroName \"Dr. Mundo\" ;\n\
                            moba:hasBaseStats moba:DM_S .\n\
                        moba:DM_S moba:baseHealth 640 .\n"
                .to_string(),
            items: "@prefix moba: <http://x#> .\n\
                    moba:Deathcap a moba:AdvancedItem ;\n\
                        moba:itemName \"Rabadon's Deathcap\" .\n"
                .to_string(),
            monsters: String::new(),
            turrets: String::new(),
            enrichment: None,
        };
        KnowledgeBase::load(&docs).unwrap()
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Twisted Fate"), "twisted_fate");
        assert_eq!(normalize_name("Dr. Mundo"), "dr_mundo");
        assert_eq!(normalize_name("Kai'Sa"), "kaisa");
        assert_eq!(normalize_name("Kog'Maw"), "kogmaw");
        assert_eq!(normalize_name("  Miss   Fortune  "), "miss_fortune");
        assert_eq!(normalize_name("Rabadon's Deathcap"), "rabadons_deathcap");
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("---"), "");
    }

    #[test]
    fn test_resolve_by_display_name_and_id() {
        let kb = sample_kb();
        let resolver = NameResolver::from_kb(&kb);
        let hit = resolver.resolve("Twisted Fate", None).unwrap();
        assert_eq!(hit.category, Category::Champion);
        assert_eq!(hit.id, "twisted_fate");
        let hit = resolver.resolve("twisted_fate", Some(Category::Champion)).unwrap();
        assert_eq!(hit.id, "twisted_fate");
    }

    #[test]
    fn test_resolve_aliases() {
        let kb = sample_kb();
        let resolver = NameResolver::from_kb(&kb);
        assert_eq!(resolver.resolve("TF", None).unwrap().id, "twisted_fate");
        assert_eq!(resolver.resolve("mundo", None).unwrap().id, "dr_mundo");
        // Alias targets absent from the data are not registered.
        assert!(resolver.resolve("j4", None).is_err());
    }

    #[test]
    fn test_resolve_not_found_carries_suggestions() {
        let kb = sample_kb();
        let resolver = NameResolver::from_kb(&kb);
        let err = resolver
            .resolve("dr_mundi", Some(Category::Champion))
            .unwrap_err();
        match err {
            QueryError::NotFound { name, category, suggestions } => {
                assert_eq!(name, "dr_mundi");
                assert_eq!(category, Some(Category::Champion));
                assert_eq!(suggestions, vec!["dr_mundo"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_alias_colliding_with_other_category_is_ambiguous() {
        let docs = DocumentSet {
            champions: "@prefix moba: <http://x#> .\n\
                        moba:Dr_Mundo a moba:TankHero ;\n\
                            moba:heroName \"Dr. Mundo\" ;\n\
                            moba:hasBaseStats moba:DM_S .\n\
                        moba:DM_S moba:baseHealth 640 .\n"
                .to_string(),
            // An item whose canonical id matches the champion's alias key.
            items: "@prefix moba: <http://x#> .\n\
                    moba:Mundo_Poster a moba:ConsumableItem ;\n\
                        moba:itemName \"Mundo\" .\n"
                .to_string(),
            monsters: String::new(),
            turrets: String::new(),
            enrichment: None,
        };
        let kb = KnowledgeBase::load(&docs).unwrap();
        let resolver = NameResolver::from_kb(&kb);

        let err = resolver.resolve("mundo", None).unwrap_err();
        assert_eq!(
            err,
            QueryError::AmbiguousName {
                name: "mundo".to_string(),
                candidates: vec![Category::Champion, Category::Item],
            }
        );
        // A hint picks the side.
        assert_eq!(
            resolver.resolve("mundo", Some(Category::Champion)).unwrap().id,
            "dr_mundo"
        );
        assert_eq!(
            resolver.resolve("mundo", Some(Category::Item)).unwrap().id,
            "mundo"
        );
    }

    #[test]
    fn test_resolve_empty_name() {
        let kb = sample_kb();
        let resolver = NameResolver::from_kb(&kb);
        let err = resolver.resolve("  --  ", None).unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[test]
    fn test_hint_restricts_category() {
        let kb = sample_kb();
        let resolver = NameResolver::from_kb(&kb);
        let err = resolver
            .resolve("Rabadon's Deathcap", Some(Category::Champion))
            .unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
        let hit = resolver.resolve("Rabadon's Deathcap", None).unwrap();
        assert_eq!(hit.category, Category::Item);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", "abc"), 0);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("evelyn", "evelynn"), 1);
    }
}
