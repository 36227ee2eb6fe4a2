// ── Shared parameter value types ──

use std::fmt;
use std::str::FromStr;

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// TR-069 `dateTime` parameter.
pub type DateTime = chrono::DateTime<Utc>;

/// The "unknown time" sentinel, `0001-01-01T00:00:00Z`.
pub fn unknown_time() -> DateTime {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::MIN_UTC)
}

/// True when `value` is the unknown-time sentinel.
pub fn is_unknown_time(value: &DateTime) -> bool {
    *value == unknown_time()
}

// ── ParameterList ───────────────────────────────────────────────────

/// A comma-separated list parameter, e.g. `AES-CBC,AES-CTR`.
///
/// On the wire the list is a single string; items are trimmed when
/// parsed and joined with a bare comma when written. An empty string is
/// an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterList<T>(Vec<T>);

impl<T> ParameterList<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn items(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: PartialEq> ParameterList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.0.contains(item)
    }
}

impl<T> Default for ParameterList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ParameterList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> FromIterator<T> for ParameterList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ParameterList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for ParameterList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T> FromStr for ParameterList<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }
        s.split(',')
            .map(str::trim)
            .map(|item| {
                item.parse().map_err(|e: T::Err| ModelError::InvalidListItem {
                    item: item.to_owned(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

impl<T: fmt::Display> Serialize for ParameterList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for ParameterList<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
