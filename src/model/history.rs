use std::collections::VecDeque;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::treasury::{ExpenseBreakdown, IncomeBreakdown};

/// Number of past phases kept per history.
pub const HISTORY_CAPACITY: usize = 12;

/// Bounded queue of per-phase records, oldest at the front.
///
/// Once full, each push drops the oldest entry. Serializes as a plain
/// array, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseHistory<T> {
    entries: VecDeque<T>,
}

pub type IncomeHistory = PhaseHistory<IncomeBreakdown>;
pub type ExpenseHistory = PhaseHistory<ExpenseBreakdown>;

impl<T> PhaseHistory<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == HISTORY_CAPACITY
    }

    /// Entry by age, where 0 is the oldest retained phase.
    pub fn get(&self, age: usize) -> Option<&T> {
        self.entries.get(age)
    }

    pub fn oldest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for PhaseHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TryFrom<Vec<T>> for PhaseHistory<T> {
    type Error = String;

    fn try_from(entries: Vec<T>) -> Result<Self, Self::Error> {
        if entries.len() > HISTORY_CAPACITY {
            return Err(format!(
                "phase history holds at most {HISTORY_CAPACITY} entries, got {}",
                entries.len()
            ));
        }
        Ok(Self {
            entries: entries.into(),
        })
    }
}

impl<T: Serialize> Serialize for PhaseHistory<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PhaseHistory<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(entries).map_err(D::Error::custom)
    }
}
