//! Ordered environment builder
//!
//! Accumulates `NAME=value` pairs for a remote script.
//!
//! INVARIANTS:
//! - INVARIANT-1: every name appears exactly once
//! - INVARIANT-2: a name keeps its first-insertion position when overwritten
//! - INVARIANT-3: stored values are already shell-quoted
//! - INVARIANT-4: names are shell identifiers (`[A-Za-z_][A-Za-z0-9_]*`)

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::quoting::quote;

/// Ordered, shell-quoted environment for a single command invocation.
///
/// Created empty per command, filled synchronously, then exported once.
#[derive(Clone, Debug, Default)]
pub struct EnvBuilder {
    /// Name -> quoted value, in first-insertion order
    entries: IndexMap<String, String>,
}

/// Whether `name` can appear on the left of a shell assignment
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl EnvBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the quoted form of `value` under `name`.
    ///
    /// A new name is appended to the order; an existing name is updated in
    /// place and keeps its position.
    ///
    /// `name` must be a shell identifier, otherwise `NAME=value` is no longer
    /// an assignment.
    pub fn set(&mut self, name: impl Into<String>, value: impl AsRef<str>) {
        let name = name.into();
        debug_assert!(is_valid_name(&name), "invalid environment variable name: {name:?}");

        self.entries.insert(name, quote(value.as_ref()).into_owned());
    }

    /// Set `name` only when a value was supplied.
    ///
    /// `None` leaves the builder untouched so the script's own default (or an
    /// earlier layer) applies. `Some("")` sets an explicit empty string.
    pub fn set_optional<V: AsRef<str>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    /// Set any displayable value when supplied (integers, lamport amounts, ...).
    pub fn set_optional_display<T: fmt::Display>(&mut self, name: impl Into<String>, value: Option<T>) {
        if let Some(value) = value {
            self.set(name, value.to_string());
        }
    }

    /// Set `true` / `false` when supplied.
    pub fn set_optional_bool(&mut self, name: impl Into<String>, value: Option<bool>) {
        if let Some(value) = value {
            self.set(name, if value { "true" } else { "false" });
        }
    }

    /// Join a supplied list with single spaces and set it as one value.
    ///
    /// Used for flag lists the remote script re-splits.
    pub fn set_optional_sequence<S: AsRef<str>>(&mut self, name: impl Into<String>, values: Option<&[S]>) {
        if let Some(values) = values {
            let joined = values
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(" ");
            self.set(name, joined);
        }
    }

    /// Apply `set` to every pair, in iteration order.
    ///
    /// Pass an ordered sequence (array, slice, `Vec`, `BTreeMap`) when the
    /// resulting order matters. With a `HashMap` the relative order of its
    /// keys follows the map's iteration order, which varies between runs.
    pub fn set_all<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        for (name, value) in pairs {
            self.set(name, value);
        }
    }

    /// Quoted value stored for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, quoted value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Ordered `NAME=value` strings, the exact form handed to the executor.
    pub fn to_key_value_list(&self) -> Vec<String> {
        self.iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect()
    }

    /// Unordered name -> quoted value lookup
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Key/value list joined with single spaces
    pub fn to_environment_string(&self) -> String {
        self.to_key_value_list().join(" ")
    }
}

/// Two builders are equal only when they hold the same entries in the same order.
impl PartialEq for EnvBuilder {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for EnvBuilder {}

impl fmt::Display for EnvBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_environment_string())
    }
}

/// Serializes as a map of name -> quoted value, in insertion order.
impl Serialize for EnvBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
