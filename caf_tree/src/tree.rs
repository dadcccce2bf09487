use crate::tree_record::TreeRecord;
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};
use tracing::debug;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum TreeError {
    /// two records share a name, but names are the keys of a tree
    DuplicateName(String),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for TreeError {}

/// One directory level of the store: names mapped to the records of its children.
///
/// A `Tree` is built once from its complete set of entries and never changes afterwards.
/// Entries are kept sorted by name, so enumeration order only depends on the names and
/// never on the order in which the entries were collected.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default)]
pub struct Tree {
    records: BTreeMap<String, TreeRecord>,
}

impl Tree {
    /// Takes ownership of `records`. Pass a clone if you want to keep using your map.
    ///
    /// The keys are used as given: they are not compared with [`TreeRecord::name`], so a
    /// lookup finds whatever record the caller stored under that key. Use
    /// [`Tree::from_records`] to key the records by their own names.
    pub fn new(records: BTreeMap<String, TreeRecord>) -> Tree {
        Tree { records }
    }

    /// Keys every record by its own name.
    pub fn from_records<I>(records: I) -> Result<Tree, TreeError>
    where
        I: IntoIterator<Item = TreeRecord>,
    {
        let mut result = BTreeMap::new();
        for record in records {
            match result.entry(record.name().to_string()) {
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(record);
                }
                btree_map::Entry::Occupied(entry) => {
                    debug!("Rejecting duplicate tree record name {:?}", entry.key());
                    return Err(TreeError::DuplicateName(entry.key().clone()));
                }
            }
        }
        Ok(Tree { records: result })
    }

    /// `None` if there is no entry called `name`.
    pub fn record(&self, name: &str) -> Option<&TreeRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn records(&self) -> &BTreeMap<String, TreeRecord> {
        &self.records
    }

    /// In ascending order of the names.
    pub fn iter(&self) -> btree_map::Iter<'_, String, TreeRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> btree_map::Keys<'_, String, TreeRecord> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'t> IntoIterator for &'t Tree {
    type Item = (&'t String, &'t TreeRecord);
    type IntoIter = btree_map::Iter<'t, String, TreeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
