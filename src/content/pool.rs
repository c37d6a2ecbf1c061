//! Static content pools keyed by mode.

use super::error::PoolError;
use super::item::ContentItem;
use crate::config::GameConfig;
use crate::validation::check_pool;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Mode used when a requested mode is unknown or empty.
pub const DEFAULT_MODE: &str = "original";

/// Read-only mapping from mode key to ordered items.
///
/// Construction validates the pool: the default mode must have content and
/// ids must be unique within a mode. After that the pool is never mutated,
/// and lookups by mode always resolve to a non-empty slice.
#[derive(Clone, Debug)]
pub struct ContentPool<T> {
    modes: BTreeMap<String, Vec<T>>,
    default_mode: String,
}

impl<T: ContentItem> ContentPool<T> {
    /// Build a pool whose fallback mode is [`DEFAULT_MODE`].
    pub fn new(modes: BTreeMap<String, Vec<T>>) -> Result<Self, PoolError> {
        Self::with_default_mode(modes, DEFAULT_MODE)
    }

    pub fn with_default_mode(
        modes: BTreeMap<String, Vec<T>>,
        default_mode: impl Into<String>,
    ) -> Result<Self, PoolError> {
        let default_mode = default_mode.into();
        check_pool(&modes, &default_mode).map_err(PoolError::Invalid)?;

        tracing::debug!(
            modes = modes.len(),
            default_mode = %default_mode,
            "content pool loaded"
        );

        Ok(Self {
            modes,
            default_mode,
        })
    }

    /// Build a pool that falls back to the configured default mode.
    pub fn from_config(
        modes: BTreeMap<String, Vec<T>>,
        config: &GameConfig,
    ) -> Result<Self, PoolError> {
        Self::with_default_mode(modes, config.default_mode.as_str())
    }

    /// Parse a JSON object of `{ "mode": [item, ...] }`.
    pub fn from_json(json: &str) -> Result<Self, PoolError>
    where
        T: DeserializeOwned,
    {
        let modes: BTreeMap<String, Vec<T>> = serde_json::from_str(json)?;
        Self::new(modes)
    }

    /// [`from_json`](Self::from_json) with the fallback mode taken from `config`.
    pub fn from_json_with(json: &str, config: &GameConfig) -> Result<Self, PoolError>
    where
        T: DeserializeOwned,
    {
        let modes: BTreeMap<String, Vec<T>> = serde_json::from_str(json)?;
        Self::from_config(modes, config)
    }

    pub fn default_mode(&self) -> &str {
        &self.default_mode
    }

    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn contains_mode(&self, mode: &str) -> bool {
        self.modes.contains_key(mode)
    }

    /// Items of exactly `mode`, without fallback.
    pub fn get(&self, mode: &str) -> Option<&[T]> {
        self.modes.get(mode).map(Vec::as_slice)
    }

    /// Resolve `mode` to the key actually served and its items.
    ///
    /// Unknown or empty modes resolve to the default mode.
    pub fn resolve<'a>(&'a self, mode: &'a str) -> (&'a str, &'a [T]) {
        match self.served(mode) {
            Some(items) => (mode, items),
            None => (self.default_mode.as_str(), self.fallback(mode)),
        }
    }

    /// Items served for `mode`, never empty.
    pub fn items(&self, mode: &str) -> &[T] {
        self.served(mode).unwrap_or_else(|| self.fallback(mode))
    }

    fn served(&self, mode: &str) -> Option<&[T]> {
        self.modes
            .get(mode)
            .filter(|items| !items.is_empty())
            .map(Vec::as_slice)
    }

    fn fallback(&self, requested: &str) -> &[T] {
        tracing::warn!(
            requested,
            fallback = %self.default_mode,
            "unknown or empty content mode, using default pool"
        );
        self.modes
            .get(&self.default_mode)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of items across every mode.
    pub fn len(&self) -> usize {
        self.modes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Statement;
    use crate::validation::PoolViolation;

    fn statement(id: &str) -> Statement {
        Statement::new(id, format!("Never have I ever {id}"))
    }

    fn modes(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<Statement>> {
        entries
            .iter()
            .map(|(mode, ids)| {
                (
                    mode.to_string(),
                    ids.iter().map(|id| statement(id)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn unknown_mode_resolves_to_default() {
        let pool = ContentPool::new(modes(&[("original", &["a", "b"]), ("couples", &["c"])]))
            .unwrap();

        let (mode, items) = pool.resolve("nonexistent");
        assert_eq!(mode, "original");
        assert_eq!(items.len(), 2);
        assert_eq!(pool.items("couples")[0].id(), "c");
    }

    #[test]
    fn empty_mode_resolves_to_default() {
        let pool = ContentPool::new(modes(&[("original", &["a"]), ("extreme", &[])])).unwrap();
        assert_eq!(pool.resolve("extreme").0, "original");
        assert_eq!(pool.get("extreme").map(<[_]>::len), Some(0));
    }

    #[test]
    fn empty_default_pool_is_rejected() {
        let err = ContentPool::new(modes(&[("couples", &["a"])])).unwrap_err();
        match err {
            PoolError::Invalid(violations) => assert_eq!(
                violations,
                vec![PoolViolation::EmptyDefaultPool {
                    mode: "original".to_string()
                }]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_ids_within_mode_are_rejected() {
        let err = ContentPool::new(modes(&[("original", &["a", "a"])])).unwrap_err();
        assert!(err.to_string().contains("Duplicate item id 'a'"));
    }

    #[test]
    fn same_id_in_different_modes_is_allowed() {
        let pool = ContentPool::new(modes(&[("original", &["a"]), ("couples", &["a"])])).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn from_json_parses_modes() {
        let json = r#"{
            "original": [{ "id": "n1", "text": "been skydiving", "intensity": 1 }],
            "extreme": [{ "id": "n2", "text": "lied to a friend", "intensity": 4 }]
        }"#;

        let pool: ContentPool<Statement> = ContentPool::from_json(json).unwrap();
        assert_eq!(pool.modes().collect::<Vec<_>>(), vec!["extreme", "original"]);
        assert_eq!(pool.items("extreme")[0].intensity().level(), 4);
    }

    #[test]
    fn configured_default_mode_serves_fallback() {
        let config = GameConfig::from_json(r#"{ "default_mode": "party" }"#).unwrap();
        let pool = ContentPool::from_config(
            modes(&[("original", &["o1"]), ("party", &["p1", "p2"])]),
            &config,
        )
        .unwrap();

        assert_eq!(pool.default_mode(), "party");
        assert_eq!(pool.resolve("nonexistent").0, "party");
        assert!(pool.items("nonexistent").iter().all(|s| s.id().starts_with('p')));
    }

    #[test]
    fn configured_default_mode_must_have_content() {
        let config = GameConfig::from_json(r#"{ "default_mode": "party" }"#).unwrap();
        let err = ContentPool::<Statement>::from_json_with(
            r#"{ "original": [{ "id": "o1", "text": "been abroad" }] }"#,
            &config,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Default mode 'party' has no content"));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = ContentPool::<Statement>::from_json("not json").unwrap_err();
        assert!(matches!(err, PoolError::Parse(_)));
    }
}
