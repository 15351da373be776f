// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! String metadata attached to volumes and surfaces.
//!
//! CAD tools tag entities by placing them in named groups such as
//! `mat:Steel`, `boundary:reflective` or `temp:600`. A group name is split on
//! a delimiter set into alternating key/value tokens, so `mat:Steel/rho:7.8`
//! yields `material = Steel` and `density = 7.8`. The parsed pairs become
//! per-entity properties.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::arena::MeshArena;
use crate::keys::EntityHandle;

/// Delimiters separating keys and values in group names.
pub const DEFAULT_DELIMITERS: &str = ":/";

/// Multi-valued string properties of one entity.
pub type Properties = FxHashMap<String, Vec<String>>;

/// A named group of entities as stored in the geometry file.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub members: Vec<EntityHandle>,
}

/// Splits group names into property key/value pairs.
#[derive(Debug, Clone)]
pub struct PropertyParser {
    keywords: FxHashSet<String>,
    synonyms: FxHashMap<String, String>,
    delimiters: String,
}

impl PropertyParser {
    /// Creates a parser that accepts the given keywords (case-insensitive).
    pub fn new<I, S>(keywords: I, delimiters: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            synonyms: FxHashMap::default(),
            delimiters: delimiters.to_string(),
        }
    }

    /// Maps an alternate spelling onto a canonical keyword, e.g. `mat` → `material`.
    pub fn with_synonym(mut self, alias: &str, keyword: &str) -> Self {
        self.synonyms
            .insert(alias.to_lowercase(), keyword.to_lowercase());
        self
    }

    /// Returns the delimiter set.
    pub fn delimiters(&self) -> &str {
        &self.delimiters
    }

    /// Splits a group name into `(keyword, value)` pairs.
    ///
    /// Tokens that do not name a known keyword are skipped together with
    /// their value. A trailing keyword without a value yields an empty value.
    pub fn parse_group_name(&self, name: &str) -> Vec<(String, String)> {
        let tokens: Vec<&str> = name
            .split(|c| self.delimiters.contains(c))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        tokens
            .chunks(2)
            .filter_map(|pair| {
                let key = pair[0].to_lowercase();
                let key = self.synonyms.get(&key).cloned().unwrap_or(key);
                if !self.keywords.contains(&key) {
                    return None;
                }
                let value = pair.get(1).copied().unwrap_or_default().to_string();
                Some((key, value))
            })
            .collect()
    }
}

impl MeshArena {
    /// Adds a named group of entities.
    pub fn add_group(&mut self, name: &str, members: Vec<EntityHandle>) {
        self.groups.push(Group {
            name: name.to_string(),
            members,
        });
    }

    /// Returns all groups in file order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Appends a value to an entity property.
    pub fn add_property(&mut self, handle: EntityHandle, key: &str, value: &str) {
        self.properties
            .entry(handle)
            .or_default()
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Returns all properties of an entity, if any.
    pub fn properties(&self, handle: EntityHandle) -> Option<&Properties> {
        self.properties.get(&handle)
    }

    /// Returns the first value of a property.
    pub fn property(&self, handle: EntityHandle, key: &str) -> Option<&str> {
        self.properties
            .get(&handle)?
            .get(key)?
            .first()
            .map(String::as_str)
    }

    /// Turns group names into entity properties.
    ///
    /// Returns the number of property values assigned.
    pub fn apply_groups(&mut self, parser: &PropertyParser) -> usize {
        let mut assigned = Vec::new();
        for group in &self.groups {
            for (key, value) in parser.parse_group_name(&group.name) {
                for &member in &group.members {
                    assigned.push((member, key.clone(), value.clone()));
                }
            }
        }

        let count = assigned.len();
        for (member, key, value) in assigned {
            self.add_property(member, &key, &value);
        }
        count
    }
}
