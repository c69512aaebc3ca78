//! In-memory event store.
//!
//! Maps each `Date` to the set of event names recorded on it. Both levels are
//! B-trees, so iteration is chronological and names come out sorted.
//! A date key only exists while it has at least one event.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::date::Date;

#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: BTreeMap<Date, BTreeSet<String>>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// Record `name` on `date`.
    ///
    /// Dates with month or day 0 are ignored. Returns true if the name was
    /// not already present on that date.
    pub fn add(&mut self, date: Date, name: impl Into<String>) -> bool {
        if !date.is_event_date() {
            return false;
        }

        self.events.entry(date).or_default().insert(name.into())
    }

    /// All event names on `date`, empty if there are none.
    pub fn find(&self, date: &Date) -> BTreeSet<String> {
        self.events.get(date).cloned().unwrap_or_default()
    }

    /// Remove a single event. Returns whether it existed.
    pub fn delete_event(&mut self, date: &Date, name: &str) -> bool {
        let removed = self
            .events
            .get_mut(date)
            .is_some_and(|names| names.remove(name));

        if removed {
            self.prune(date);
        }
        removed
    }

    /// Remove every event on `date`. Returns how many were removed.
    pub fn delete_date(&mut self, date: &Date) -> usize {
        self.events.remove(date).map_or(0, |names| names.len())
    }

    /// (date, name) pairs in chronological order, names sorted within a date.
    pub fn enumerate(&self) -> impl Iterator<Item = (&Date, &str)> + '_ {
        self.events
            .iter()
            .flat_map(|(date, names)| names.iter().map(move |name| (date, name.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn date_count(&self) -> usize {
        self.events.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.values().map(BTreeSet::len).sum()
    }

    /// Drop the bucket for `date` if it has become empty.
    fn prune(&mut self, date: &Date) {
        if self.events.get(date).is_some_and(BTreeSet::is_empty) {
            self.events.remove(date);
        }
    }
}

impl fmt::Display for EventStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (date, name) in self.enumerate() {
            writeln!(f, "{} {}", date, name)?;
        }
        Ok(())
    }
}
