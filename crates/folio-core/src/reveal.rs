//! One-way reveal-on-scroll bookkeeping.
//!
//! An element moves from pending to revealed the first time an intersection
//! callback reports it on screen, and never moves back.

use std::collections::HashSet;
use std::hash::Hash;

/// The two reveal animations on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// General content fading in
    FadeIn,
    /// Skill bars filling up
    Skill,
}

/// Intersection observer settings plus the class added on reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub class: &'static str,
}

impl RevealKind {
    pub fn options(&self) -> RevealOptions {
        match self {
            // Negative bottom margin: fire slightly before the element is fully on screen
            RevealKind::FadeIn => RevealOptions {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px",
                class: "visible",
            },
            RevealKind::Skill => RevealOptions {
                threshold: 0.5,
                root_margin: "0px",
                class: "animate",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// One entry from an intersection callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionSample<K> {
    pub key: K,
    pub intersecting: bool,
}

impl<K> IntersectionSample<K> {
    pub fn new(key: K, intersecting: bool) -> Self {
        Self { key, intersecting }
    }
}

/// Tracks which observed elements have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    kind: RevealKind,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new(kind: RevealKind) -> Self {
        Self {
            kind,
            revealed: HashSet::new(),
        }
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    pub fn state(&self, key: &K) -> RevealState {
        if self.revealed.contains(key) {
            RevealState::Revealed
        } else {
            RevealState::Pending
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Handle one callback. Returns the elements that were pending and are
    /// now revealed; only these need the class added.
    pub fn observe<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = IntersectionSample<K>>,
    {
        let mut newly = Vec::new();
        for entry in entries {
            if entry.intersecting && self.revealed.insert(entry.key.clone()) {
                newly.push(entry.key);
            }
        }
        if !newly.is_empty() {
            tracing::debug!(kind = ?self.kind, count = newly.len(), "revealed elements");
        }
        newly
    }
}
