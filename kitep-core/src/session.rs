//! Load-state machine for a library view
//!
//! A view is in exactly one of loading, failed, or ready; the tagged union
//! makes "loading and failed at once" unrepresentable. Fetches are tied to a
//! generation token so a snapshot from a superseded request (a reload or a
//! locale change racing an older fetch) is discarded instead of merged.

use crate::error::FetchError;
use crate::locale::Locale;
use crate::selection::Selection;
use crate::types::{Book, Category};

/// One wholesale fetch of the backend collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub books: Vec<Book>,
    pub categories: Vec<Category>,
}

/// Where the view currently is in its load cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Failed(FetchError),
    Ready(Snapshot),
}

/// Token tying a fetch outcome to the request that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// The state a front end holds for the library screen: load state, the
/// user's selection, and the active locale.
#[derive(Debug)]
pub struct LibrarySession {
    state: LoadState,
    selection: Selection,
    locale: Locale,
    generation: u64,
}

impl LibrarySession {
    /// A fresh session, waiting for its first load.
    pub fn new(locale: Locale) -> Self {
        Self {
            state: LoadState::Loading,
            selection: Selection::new(),
            locale,
            generation: 0,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Enter the loading state and mint the token the eventual
    /// [`finish_load`](Self::finish_load) must present. Retry after a
    /// failure is just another `begin_load`.
    pub fn begin_load(&mut self) -> Generation {
        self.generation += 1;
        self.state = LoadState::Loading;
        Generation(self.generation)
    }

    /// Apply a fetch outcome. Returns false and changes nothing when the
    /// token is stale, i.e. a newer `begin_load` superseded this fetch.
    pub fn finish_load(
        &mut self,
        generation: Generation,
        outcome: Result<Snapshot, FetchError>,
    ) -> bool {
        if generation.0 != self.generation {
            return false;
        }
        self.state = match outcome {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(error) => LoadState::Failed(error),
        };
        true
    }

    /// Switch the interface language. Category choices are cleared since the
    /// category list is about to be refetched for the new locale; the caller
    /// follows up with `begin_load` and a fresh fetch.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale {
            self.locale = locale;
            self.selection.clear_categories();
        }
    }

    /// The filtered books for the current selection; empty unless ready.
    pub fn visible_books(&self) -> Vec<&Book> {
        match &self.state {
            LoadState::Ready(snapshot) => self.selection.filter(&snapshot.books),
            _ => Vec::new(),
        }
    }

    /// The fetched categories; empty unless ready.
    pub fn categories(&self) -> &[Category] {
        match &self.state {
            LoadState::Ready(snapshot) => &snapshot.categories,
            _ => &[],
        }
    }
}
