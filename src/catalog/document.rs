//! Catalog documents and their JSON form.
//!
//! ```json
//! {
//!   "name": "payment-logos",
//!   "version": "1.0.0",
//!   "total": 2,
//!   "logos": [ { "id": "visa", ... }, { "id": "amex", ... } ]
//! }
//! ```
//!
//! Grouped layouts replace the array with a map keyed by category:
//! `"variants": { "dark": { "count": 1, "assets": [...] }, ... }`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::AssetDescriptor;
use crate::config::Layout;

/// Descriptors sharing one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub count: usize,
    pub assets: Vec<AssetDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entries {
    Flat(Vec<AssetDescriptor>),
    /// Categories in first-seen order.
    Grouped(Vec<(String, Group)>),
}

/// One per-domain JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub name: String,
    pub version: String,
    /// Field name holding the entries
    pub key: String,
    /// Sum of group counts, fixed when the catalog is built.
    pub total: usize,
    pub entries: Entries,
}

impl Catalog {
    pub fn build(
        name: &str,
        version: &str,
        key: &str,
        layout: Layout,
        descriptors: Vec<AssetDescriptor>,
    ) -> Self {
        let entries = match layout {
            Layout::Flat => Entries::Flat(descriptors),
            Layout::Grouped => Entries::Grouped(group_by_category(descriptors)),
        };
        let total = match &entries {
            Entries::Flat(items) => items.len(),
            Entries::Grouped(groups) => groups.iter().map(|(_, g)| g.count).sum(),
        };

        Self {
            name: name.to_string(),
            version: version.to_string(),
            key: key.to_string(),
            total,
            entries,
        }
    }

    /// Pretty JSON (2-space indent) with a trailing newline.
    pub fn render(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the catalog to `path`, replacing any previous version.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        fs::write(path, self.render()?)
            .with_context(|| format!("Failed to write catalog '{}'", path.display()))
    }
}

fn group_by_category(descriptors: Vec<AssetDescriptor>) -> Vec<(String, Group)> {
    let mut groups: Vec<(String, Group)> = Vec::new();
    for desc in descriptors {
        match groups.iter_mut().find(|(category, _)| *category == desc.category) {
            Some((_, group)) => {
                group.count += 1;
                group.assets.push(desc);
            }
            None => groups.push((
                desc.category.clone(),
                Group {
                    count: 1,
                    assets: vec![desc],
                },
            )),
        }
    }
    groups
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("version", &self.version)?;
        map.serialize_entry("total", &self.total)?;
        match &self.entries {
            Entries::Flat(items) => map.serialize_entry(&self.key, items)?,
            Entries::Grouped(groups) => map.serialize_entry(&self.key, &GroupMap(groups))?,
        }
        map.end()
    }
}

/// Serializes grouped entries as an ordered JSON object.
struct GroupMap<'a>(&'a [(String, Group)]);

impl Serialize for GroupMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, group) in self.0 {
            map.serialize_entry(category, group)?;
        }
        map.end()
    }
}
