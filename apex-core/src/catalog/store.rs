//! src/catalog/store.rs
//! ============================================================================
//! # CatalogStore: Authoritative Record Set and Query Pipeline
//!
//! Owns every loaded record (`all`) and the currently displayed subset
//! (`visible`). The visible subset is always derived from `all` through one
//! pipeline, [`CatalogQuery::apply`]:
//!
//! 1. filter by the active criterion (always reading the full set)
//! 2. sort by the active mode
//! 3. narrow by the search text
//!
//! Every mutating call updates the stored query and re-runs that pipeline,
//! so the view never holds a second copy of the query logic.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::catalog::filter::{FilterOption, SortMode};
use crate::catalog::loader::{self, LoadError};
use crate::catalog::predator::{Predator, PredatorId};

/// The three user controls that determine the visible subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub filter: FilterOption,
    pub sort: SortMode,
}

impl CatalogQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, filter: FilterOption, sort: SortMode) -> Self {
        Self {
            search: search.into(),
            filter,
            sort,
        }
    }

    /// filter → sort → search, starting from the full set.
    #[must_use]
    pub fn apply(&self, all: &[Predator]) -> Vec<Predator> {
        let filtered = filter_records(all, &self.filter);
        let sorted = sort_records(filtered, self.sort);
        search_records(sorted, &self.search)
    }
}

/// Records from `all` matching `criterion`, in their original order.
#[must_use]
pub fn filter_records(all: &[Predator], criterion: &FilterOption) -> Vec<Predator> {
    if criterion.is_wildcard() {
        return all.to_vec();
    }
    all.iter()
        .filter(|predator| criterion.matches(predator))
        .cloned()
        .collect()
}

/// Stable, total ordering; ties on name fall back to `id`.
#[must_use]
pub fn sort_records(mut records: Vec<Predator>, mode: SortMode) -> Vec<Predator> {
    match mode {
        SortMode::InsertionOrder => records.sort_by_key(|p| p.id),
        SortMode::Alphabetical => {
            records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        }
    }
    records
}

/// Case-insensitive substring match on `name`. An empty term returns the input untouched.
#[must_use]
pub fn search_records(records: Vec<Predator>, term: &str) -> Vec<Predator> {
    if term.is_empty() {
        return records;
    }
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|predator| predator.name_contains(&needle))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    all: Vec<Predator>,
    visible: Vec<Predator>,
    query: CatalogQuery,
    loaded: bool,
}

impl CatalogStore {
    /// An empty store standing in for a failed or pending load.
    #[must_use]
    pub fn uninitialized() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_records(records: Vec<Predator>) -> Self {
        let mut store = Self {
            all: records,
            visible: Vec::new(),
            query: CatalogQuery::default(),
            loaded: true,
        };
        store.refresh();
        store
    }

    /// Builds a store from the bundled dataset.
    pub fn load_bundled() -> Result<Self, LoadError> {
        loader::load().map(Self::from_records)
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn all(&self) -> &[Predator] {
        &self.all
    }

    #[must_use]
    pub fn visible(&self) -> &[Predator] {
        &self.visible
    }

    #[must_use]
    pub const fn query(&self) -> &CatalogQuery {
        &self.query
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PredatorId) -> Option<&Predator> {
        self.all.iter().find(|p| p.id == id)
    }

    /// Replaces the whole query and recomputes the visible set.
    pub fn apply_query(&mut self, query: CatalogQuery) -> &[Predator] {
        self.query = query;
        self.refresh();
        &self.visible
    }

    /// Narrows the filtered, sorted set by name.
    pub fn search(&mut self, term: &str) -> &[Predator] {
        self.query.search = term.to_string();
        self.refresh();
        &self.visible
    }

    pub fn sort_by(&mut self, mode: SortMode) -> &[Predator] {
        self.query.sort = mode;
        self.refresh();
        &self.visible
    }

    /// Replaces the active criterion; never intersects with the previous one.
    pub fn filter(&mut self, criterion: FilterOption) -> &[Predator] {
        self.query.filter = criterion;
        self.refresh();
        &self.visible
    }

    /// Every movie title across the full set, deduplicated and ascending.
    #[must_use]
    pub fn distinct_movies(&self) -> Vec<String> {
        self.all
            .iter()
            .flat_map(|p| p.movies.iter().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// Removes a record from both sets. Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: PredatorId) -> Option<Predator> {
        let position = self.all.iter().position(|p| p.id == id)?;
        let removed = self.all.remove(position);
        self.visible.retain(|p| p.id != id);
        info!("Deleted predator {} ({})", removed.id, removed.name);
        Some(removed)
    }

    fn refresh(&mut self) {
        self.visible = self.query.apply(&self.all);
        debug!(
            filter = %self.query.filter,
            sort = ?self.query.sort,
            search = %self.query.search,
            visible = self.visible.len(),
            total = self.all.len(),
            "Recomputed visible predators"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::predator::HabitatType;

    fn predator(id: PredatorId, name: &str, habitat: HabitatType, movies: &[&str]) -> Predator {
        Predator {
            id,
            name: name.to_string(),
            habitat,
            latitude: 0.0,
            longitude: 0.0,
            movies: movies.iter().map(|m| (*m).to_string()).collect(),
            movie_scenes: Vec::new(),
            link: String::new(),
        }
    }

    fn rex_dataset() -> Vec<Predator> {
        vec![
            predator(1, "Rex", HabitatType::Land, &["A"]),
            predator(2, "Giant Rex", HabitatType::Land, &["A"]),
            predator(3, "Shark", HabitatType::Sea, &["B"]),
        ]
    }

    fn mixed_dataset() -> Vec<Predator> {
        vec![
            predator(4, "Pteranodon", HabitatType::Air, &["Jurassic World", "Jurassic Park III"]),
            predator(1, "Tyrannosaurus Rex", HabitatType::Land, &["Jurassic Park", "Jurassic World"]),
            predator(7, "Mosasaurus", HabitatType::Sea, &["Jurassic World"]),
            predator(3, "velociraptor", HabitatType::Land, &["Jurassic Park"]),
            predator(5, "Mosasaurus", HabitatType::Sea, &[]),
        ]
    }

    fn names(records: &[Predator]) -> Vec<&str> {
        records.iter().map(|p| p.name.as_str()).collect()
    }

    fn ids(records: &[Predator]) -> Vec<PredatorId> {
        records.iter().map(|p| p.id).collect()
    }

    #[test]
    fn filter_sort_search_compose_in_order() {
        let mut store = CatalogStore::from_records(rex_dataset());
        store.filter(FilterOption::ByType(HabitatType::Land));
        store.sort_by(SortMode::Alphabetical);
        let visible = store.search("rex");
        assert_eq!(names(visible), vec!["Giant Rex", "Rex"]);
    }

    #[test]
    fn apply_query_matches_step_by_step_calls() {
        let mut store = CatalogStore::from_records(rex_dataset());
        let query = CatalogQuery::new(
            "REX",
            FilterOption::ByType(HabitatType::Land),
            SortMode::Alphabetical,
        );
        let visible = store.apply_query(query).to_vec();
        assert_eq!(names(&visible), vec!["Giant Rex", "Rex"]);
    }

    #[test]
    fn search_returns_matching_subset() {
        let all = mixed_dataset();
        for term in ["rex", "SAUR", "o", "zzz", "Velo"] {
            let result = search_records(all.clone(), term);
            let needle = term.to_lowercase();
            assert!(result.iter().all(|p| all.contains(p)));
            assert!(result.iter().all(|p| p.name.to_lowercase().contains(&needle)));
            let expected = all
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .count();
            assert_eq!(result.len(), expected);
        }
    }

    #[test]
    fn empty_search_is_identity() {
        let all = mixed_dataset();
        assert_eq!(search_records(all.clone(), ""), all);
    }

    #[test]
    fn search_narrows_filtered_set_only() {
        let mut store = CatalogStore::from_records(mixed_dataset());
        store.filter(FilterOption::ByType(HabitatType::Sea));
        let visible = store.search("rex");
        assert!(visible.is_empty());

        let visible = store.search("");
        assert_eq!(ids(visible), vec![5, 7]);
    }

    #[test]
    fn insertion_order_sorts_by_id() {
        let sorted = sort_records(mixed_dataset(), SortMode::InsertionOrder);
        assert_eq!(ids(&sorted), vec![1, 3, 4, 5, 7]);
    }

    #[test]
    fn alphabetical_is_bytewise_with_id_tiebreak() {
        let sorted = sort_records(mixed_dataset(), SortMode::Alphabetical);
        assert_eq!(ids(&sorted), vec![5, 7, 4, 1, 3]);
    }

    #[test]
    fn sorting_is_idempotent() {
        for mode in [SortMode::InsertionOrder, SortMode::Alphabetical] {
            let once = sort_records(mixed_dataset(), mode);
            let twice = sort_records(once.clone(), mode);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn wildcard_filter_is_identity_regardless_of_prior_filter() {
        let mut store = CatalogStore::from_records(mixed_dataset());
        store.filter(FilterOption::ByMovie("Jurassic Park".to_string()));
        assert_eq!(store.visible().len(), 2);

        let visible = store.filter(FilterOption::ByType(HabitatType::All)).to_vec();
        assert_eq!(ids(&visible), vec![1, 3, 4, 5, 7]);
        assert_eq!(filter_records(store.all(), &FilterOption::default()), store.all());
    }

    #[test]
    fn filters_replace_instead_of_intersecting() {
        let mut store = CatalogStore::from_records(mixed_dataset());
        store.filter(FilterOption::ByType(HabitatType::Air));
        let visible = store.filter(FilterOption::ByType(HabitatType::Land)).to_vec();
        assert_eq!(ids(&visible), vec![1, 3]);
    }

    #[test]
    fn movie_filter_uses_exact_titles() {
        let mut store = CatalogStore::from_records(mixed_dataset());
        let visible = store
            .filter(FilterOption::ByMovie("Jurassic World".to_string()))
            .to_vec();
        assert_eq!(ids(&visible), vec![1, 4, 7]);

        let visible = store.filter(FilterOption::ByMovie("jurassic world".to_string()));
        assert!(visible.is_empty());
    }

    #[test]
    fn unknown_movie_filter_yields_empty() {
        let mut store = CatalogStore::from_records(mixed_dataset());
        assert!(store
            .filter(FilterOption::ByMovie("Not A Movie".to_string()))
            .is_empty());
    }

    #[test]
    fn distinct_movies_are_unique_and_sorted() {
        let store = CatalogStore::from_records(mixed_dataset());
        let movies = store.distinct_movies();
        assert_eq!(
            movies,
            vec!["Jurassic Park", "Jurassic Park III", "Jurassic World"]
        );
        assert!(movies.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn delete_removes_from_both_sets_once() {
        let mut store = CatalogStore::from_records(mixed_dataset());
        store.filter(FilterOption::ByType(HabitatType::Sea));
        assert_eq!(store.visible().len(), 2);

        let removed = store.delete(7).map(|p| p.id);
        assert_eq!(removed, Some(7));
        assert_eq!(store.len(), 4);
        assert_eq!(ids(store.visible()), vec![5]);

        assert!(store.delete(7).is_none());
        assert_eq!(store.len(), 4);
        assert_eq!(store.visible().len(), 1);
    }

    #[test]
    fn delete_of_hidden_record_keeps_visible_intact() {
        let mut store = CatalogStore::from_records(mixed_dataset());
        store.filter(FilterOption::ByType(HabitatType::Air));
        store.delete(1);
        assert_eq!(ids(store.visible()), vec![4]);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn queries_on_empty_store_are_empty() {
        let mut store = CatalogStore::uninitialized();
        assert!(!store.is_loaded());
        assert!(store.search("rex").is_empty());
        assert!(store.filter(FilterOption::ByType(HabitatType::Land)).is_empty());
        assert!(store.distinct_movies().is_empty());
        assert!(store.delete(1).is_none());
    }

    #[test]
    fn failed_load_leaves_store_uninitialized() {
        let text = r#"[{"id": 1, "type": "land", "latitude": 0, "longitude": 0,
                        "movies": [], "movie_scenes": [], "link": ""}]"#;
        let store = loader::parse(text)
            .map(CatalogStore::from_records)
            .unwrap_or_else(|_| CatalogStore::uninitialized());
        assert!(!store.is_loaded());
        assert!(store.is_empty());
        assert!(store.visible().is_empty());
    }

    #[test]
    fn bundled_store_starts_unfiltered_in_id_order() {
        let store = CatalogStore::load_bundled().unwrap();
        assert_eq!(store.visible().len(), store.len());
        assert!(store.visible().windows(2).all(|w| w[0].id < w[1].id));
    }
}
