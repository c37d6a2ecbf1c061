//! Random content selection that avoids repeats within a session.
//!
//! Picks come uniformly from the items of a mode that have not been shown
//! yet. Once every item has been shown the pick falls back to the whole
//! mode pool, so a session keeps going with repeats instead of running dry.

use super::item::ContentItem;
use super::pool::ContentPool;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ids already shown in the current session, in the order they were shown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedIds {
    ids: Vec<String>,
}

impl UsedIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|used| used == id)
    }

    /// Remember `id`. Ids already present are not added twice.
    pub fn record(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Whether every item in `items` has been shown.
    pub fn covers<T: ContentItem>(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.contains(item.id()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for UsedIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut used = UsedIds::new();
        for id in iter {
            used.record(id);
        }
        used
    }
}

/// Uniform pick from `items` preferring ones not in `exclude`.
///
/// Returns `None` only when `items` is empty.
fn pick<'a, T, R>(items: &[&'a T], exclude: &UsedIds, rng: &mut R) -> Option<&'a T>
where
    T: ContentItem,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }

    let unseen: Vec<&'a T> = items
        .iter()
        .copied()
        .filter(|item| !exclude.contains(item.id()))
        .collect();

    let candidates = if unseen.is_empty() {
        tracing::debug!(
            items = items.len(),
            "all content shown, allowing repeats"
        );
        items
    } else {
        unseen.as_slice()
    };

    Some(candidates[rng.random_range(0..candidates.len())])
}

/// Select the next item for `mode`.
///
/// Unknown or empty modes use the pool's default mode. When every item of
/// the mode is in `exclude`, any item of the mode may be returned again.
pub fn select_next<'a, T, R>(
    pool: &'a ContentPool<T>,
    mode: &str,
    exclude: &UsedIds,
    rng: &mut R,
) -> &'a T
where
    T: ContentItem,
    R: Rng + ?Sized,
{
    let items: Vec<&'a T> = pool.items(mode).iter().collect();
    // `items` is never empty: pools reject an empty default mode.
    let item =
        pick(&items, exclude, rng).unwrap_or_else(|| &pool.items(pool.default_mode())[0]);
    tracing::debug!(mode, id = item.id(), "selected content");
    item
}

/// Like [`select_next`], restricted to items matching `predicate`.
///
/// Falls back to the default mode when `mode` has no matching item, and
/// returns `None` when neither has one.
pub fn select_next_where<'a, T, R, F>(
    pool: &'a ContentPool<T>,
    mode: &str,
    exclude: &UsedIds,
    rng: &mut R,
    predicate: F,
) -> Option<&'a T>
where
    T: ContentItem,
    R: Rng + ?Sized,
    F: Fn(&T) -> bool,
{
    let matching = |items: &'a [T]| -> Vec<&'a T> {
        items.iter().filter(|item| predicate(item)).collect()
    };

    let mut items = matching(pool.items(mode));
    if items.is_empty() {
        items = matching(pool.items(pool.default_mode()));
    }

    pick(&items, exclude, rng)
}

/// Session-scoped rotation over one pool.
///
/// Owns the used-id list and the random source, and records every item it
/// hands out.
pub struct Rotation<'a, T, R> {
    pool: &'a ContentPool<T>,
    mode: String,
    used: UsedIds,
    rng: R,
}

impl<'a, T: ContentItem, R: Rng> Rotation<'a, T, R> {
    pub fn new(pool: &'a ContentPool<T>, mode: impl Into<String>, rng: R) -> Self {
        Self {
            pool,
            mode: mode.into(),
            used: UsedIds::new(),
            rng,
        }
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Switch modes. Items already shown stay excluded.
    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mode = mode.into();
    }

    pub fn used(&self) -> &UsedIds {
        &self.used
    }

    /// Pick the next item and mark it as used.
    pub fn next_item(&mut self) -> &'a T {
        let item = select_next(self.pool, &self.mode, &self.used, &mut self.rng);
        self.used.record(item.id());
        item
    }

    /// Pick the next item matching `predicate` and mark it as used.
    pub fn next_where<F>(&mut self, predicate: F) -> Option<&'a T>
    where
        F: Fn(&T) -> bool,
    {
        let item = select_next_where(self.pool, &self.mode, &self.used, &mut self.rng, predicate)?;
        self.used.record(item.id());
        Some(item)
    }

    /// Forget everything shown so far.
    pub fn reset(&mut self) {
        self.used.clear();
    }
}
