// src/competitors.rs
//
// Competitor aggregation: group canonical records by identity, fold in the
// participant catalog, keep every competitor's search index in sync.
//
// Identity collisions: records sharing a key merge into one competitor even
// when other fields differ. Two different people with the same name and no
// id/bib therefore collide. That is a known limitation of the corpus, not
// something to paper over here.

use std::collections::HashMap;

use crate::core::text::{build_search_index, normalize_text};
use crate::model::{cmp_years_desc, sentinel, NormalizedRecord};
use crate::schema::catalog::CatalogEntry;

#[derive(Clone, Debug, PartialEq)]
pub struct Competitor {
    key: String,
    name: String,
    origin: String,
    team: String,
    bib: String,
    gender: String,
    age_group: String,
    participant_id: Option<String>,
    records: Vec<NormalizedRecord>,
    search_index: String,
}

impl Competitor {
    fn from_record(key: String, first: &NormalizedRecord) -> Self {
        Self {
            key,
            name: first.name.clone(),
            origin: first.origin.clone(),
            team: first.team.clone(),
            bib: first.bib.clone(),
            gender: first.gender.clone(),
            age_group: first.age_group.clone(),
            participant_id: first.participant_id.clone(),
            records: Vec::new(),
            search_index: s!(),
        }
    }

    fn from_catalog(key: String, entry: &CatalogEntry) -> Self {
        let mut c = Self {
            key,
            name: entry.name().map(String::from).unwrap_or_else(|| s!(sentinel::CATALOG_NAME)),
            origin: entry.origin().map(String::from).unwrap_or_else(|| s!(sentinel::ORIGIN)),
            team: s!(sentinel::CATALOG_TEAM),
            bib: entry.id().unwrap_or_else(|| s!(sentinel::BIB)),
            gender: entry.gender().map(String::from).unwrap_or_else(|| s!(sentinel::GENDER)),
            age_group: entry.age_group().unwrap_or_else(|| s!(sentinel::AGE_GROUP)),
            participant_id: entry.id(),
            records: Vec::new(),
            search_index: s!(),
        };
        c.refresh_search_index();
        c
    }

    pub fn key(&self) -> &str { &self.key }
    pub fn name(&self) -> &str { &self.name }
    pub fn origin(&self) -> &str { &self.origin }
    pub fn team(&self) -> &str { &self.team }
    pub fn bib(&self) -> &str { &self.bib }
    pub fn gender(&self) -> &str { &self.gender }
    pub fn age_group(&self) -> &str { &self.age_group }
    pub fn participant_id(&self) -> Option<&str> { self.participant_id.as_deref() }
    pub fn records(&self) -> &[NormalizedRecord] { &self.records }
    pub fn search_index(&self) -> &str { &self.search_index }

    /// Normalized substring match against the search index.
    pub fn matches(&self, normalized_term: &str) -> bool {
        !normalized_term.is_empty() && self.search_index.contains(normalized_term)
    }

    /// Add records, restore year-descending order, rebuild the index.
    pub fn extend_records<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = NormalizedRecord>,
    {
        self.records.extend(records);
        // stable: equal years keep insertion order
        self.records.sort_by(|a, b| cmp_years_desc(a.year(), b.year()));
        self.refresh_search_index();
    }

    /// Fill fields that are still at their sentinel from a catalog entry.
    /// Present values are never overwritten; the name is never touched.
    pub fn fill_from_catalog(&mut self, entry: &CatalogEntry) {
        fill_if_missing(&mut self.origin, sentinel::ORIGIN, entry.origin().map(String::from));
        fill_if_missing(&mut self.team, sentinel::TEAM, Some(s!(sentinel::CATALOG_TEAM)));
        fill_if_missing(&mut self.bib, sentinel::BIB, entry.id());
        fill_if_missing(&mut self.gender, sentinel::GENDER, entry.gender().map(String::from));
        fill_if_missing(&mut self.age_group, sentinel::AGE_GROUP, entry.age_group());
        if self.participant_id.is_none() {
            self.participant_id = entry.id();
        }
        self.refresh_search_index();
    }

    fn refresh_search_index(&mut self) {
        let summary = self
            .records
            .iter()
            .map(NormalizedRecord::summary)
            .collect::<Vec<_>>()
            .join(" ");

        self.search_index = build_search_index([
            self.name.as_str(),
            self.origin.as_str(),
            self.team.as_str(),
            self.bib.as_str(),
            self.gender.as_str(),
            self.age_group.as_str(),
            self.participant_id.as_deref().unwrap_or(""),
            summary.as_str(),
        ]);
    }
}

fn fill_if_missing(slot: &mut String, missing: &str, value: Option<String>) {
    if slot.trim().is_empty() || slot == missing {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            *slot = v;
        }
    }
}

/// Grouping key for a record: its participant key, else its normalized name.
pub fn grouping_key(record: &NormalizedRecord) -> String {
    if !record.participant_key.trim().is_empty() {
        record.participant_key.clone()
    } else {
        normalize_text(&record.name)
    }
}

/// Catalog entries join on the same key shape as records.
pub fn catalog_key(entry: &CatalogEntry) -> String {
    match entry.id() {
        Some(id) => normalize_text(&id),
        None => normalize_text(entry.name().unwrap_or("")),
    }
}

/// Group records into competitors, in order of first appearance.
pub fn aggregate(records: &[NormalizedRecord]) -> Vec<Competitor> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(Competitor, Vec<NormalizedRecord>)> = Vec::new();

    for rec in records {
        let key = grouping_key(rec);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                groups.push((Competitor::from_record(key.clone(), rec), Vec::new()));
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].1.push(rec.clone());
    }

    groups
        .into_iter()
        .map(|(mut c, recs)| {
            c.extend_records(recs);
            c
        })
        .collect()
}

/// Left join of the catalog onto aggregated competitors. Unknown catalog
/// participants are appended as competitors with no records.
pub fn merge_catalog(competitors: Vec<Competitor>, catalog: &[CatalogEntry]) -> Vec<Competitor> {
    let mut out = competitors;
    let mut index: HashMap<String, usize> = out
        .iter()
        .enumerate()
        .map(|(i, c)| (s!(c.key()), i))
        .collect();

    let mut filled = 0usize;
    let mut added = 0usize;

    for entry in catalog {
        let key = catalog_key(entry);
        if key.is_empty() { continue; }

        match index.get(&key) {
            Some(&i) => {
                out[i].fill_from_catalog(entry);
                filled += 1;
            }
            None => {
                out.push(Competitor::from_catalog(key.clone(), entry));
                index.insert(key, out.len() - 1);
                added += 1;
            }
        }
    }

    logd!("Catalog merge: matched={filled} added={added} total={}", out.len());
    out
}

/// Competitors whose index contains the normalized term. An empty term
/// matches nothing (the UI shows instructions instead).
pub fn search<'a>(competitors: &'a [Competitor], term: &str) -> Vec<&'a Competitor> {
    let term = normalize_text(term);
    if term.is_empty() {
        return Vec::new();
    }
    competitors.iter().filter(|c| c.matches(&term)).collect()
}

pub fn find_by_key<'a>(competitors: &'a [Competitor], key: &str) -> Option<&'a Competitor> {
    let key = normalize_text(key);
    competitors.iter().find(|c| c.key == key)
}
