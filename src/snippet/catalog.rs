use crate::snippet::types::SnippetRecord;
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which record field names a catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum KeyPolicy {
    /// Invocation keyword; the canonical, stable key.
    #[default]
    Prefix,
    /// Free-text description, as the legacy default template set did.
    Description,
}

impl KeyPolicy {
    pub fn key_of<'a>(&self, record: &'a SnippetRecord) -> &'a str {
        match self {
            KeyPolicy::Prefix => &record.prefix,
            KeyPolicy::Description => &record.description,
        }
    }
}

/// A later record replaced an earlier one under the same key. Indices are
/// positions in the assembled record sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    pub replaced: usize,
    pub by: usize,
}

/// Ordered mapping of snippet key to record, as written to a
/// `.code-snippets` file.
///
/// Serializes as the bare mapping; `collisions` is bookkeeping from
/// assembly and is not part of the file format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetCatalog {
    entries: IndexMap<String, SnippetRecord>,
    collisions: Vec<KeyCollision>,
}

impl SnippetCatalog {
    /// Fold `records` into a catalog. On a key collision the later record
    /// wins and keeps the slot of the first one.
    pub fn assemble<I>(records: I, policy: KeyPolicy) -> Self
    where
        I: IntoIterator<Item = SnippetRecord>,
    {
        let mut entries: IndexMap<String, SnippetRecord> = IndexMap::new();
        let mut owners: IndexMap<String, usize> = IndexMap::new();
        let mut collisions = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let key = policy.key_of(&record).to_string();
            if let Some(previous) = owners.insert(key.clone(), index) {
                tracing::debug!(key = %key, replaced = previous, by = index, "snippet key collision");
                collisions.push(KeyCollision {
                    key: key.clone(),
                    replaced: previous,
                    by: index,
                });
            }
            entries.insert(key, record);
        }

        Self {
            entries,
            collisions,
        }
    }

    pub fn get(&self, key: &str) -> Option<&SnippetRecord> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnippetRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn collisions(&self) -> &[KeyCollision] {
        &self.collisions
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Serialize for SnippetCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SnippetCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::<String, SnippetRecord>::deserialize(deserializer)?;
        Ok(Self {
            entries,
            collisions: Vec::new(),
        })
    }
}
