//! Shuffled decks for swipe-card games.

use super::item::ContentItem;
use super::pool::ContentPool;
use rand::seq::SliceRandom;
use rand::Rng;

/// A shuffled stack of cards consumed from the top.
///
/// The top of the visual stack is the end of the sequence, so `draw` pops
/// from the back. An empty deck is the game-over signal.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck<T> {
    cards: Vec<T>,
}

impl<T: ContentItem> Deck<T> {
    /// Shuffle the given cards into a deck.
    ///
    /// Unlike [`shuffled`](Self::shuffled) there is no fallback: an empty
    /// `cards` gives an empty deck.
    pub fn from_items<R: Rng + ?Sized>(mut cards: Vec<T>, rng: &mut R) -> Self {
        cards.shuffle(rng);
        Self { cards }
    }

    /// Build a deck from one or more categories of `pool`.
    ///
    /// Category pools are concatenated as they are; the same id appearing
    /// in two categories yields two cards. Unknown categories are skipped,
    /// and a selection that yields nothing uses the default mode.
    pub fn shuffled<R, S>(pool: &ContentPool<T>, categories: &[S], rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let mut cards = Vec::new();
        for category in categories {
            match pool.get(category.as_ref()) {
                Some(items) => cards.extend_from_slice(items),
                None => tracing::warn!(category = category.as_ref(), "unknown deck category"),
            }
        }

        if cards.is_empty() {
            cards.extend_from_slice(pool.items(pool.default_mode()));
        }

        tracing::debug!(
            categories = categories.len(),
            cards = cards.len(),
            "deck shuffled"
        );
        Self::from_items(cards, rng)
    }

    /// Take the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<T> {
        self.cards.pop()
    }

    /// The card currently on top.
    pub fn top(&self) -> Option<&T> {
        self.cards.last()
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once every card has been drawn.
    pub fn is_game_over(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ContentItem> Iterator for Deck<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cards.len(), Some(self.cards.len()))
    }
}

impl<T: ContentItem> ExactSizeIterator for Deck<T> {}
