use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::{create_dir_all, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CHANGELOG_FILE_NAME: &str = "changelogs.json";

/// Version number mapped to the list of changes shipped in that release.
///
/// The data file may carry `null` instead of a list; such entries read back as
/// empty. Keys order as raw strings, not as semantic versions, so "1.9.0"
/// sorts above "1.10.0".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangelogMap {
    releases: BTreeMap<String, Option<Vec<String>>>,
}

impl ChangelogMap {
    pub fn new() -> Self {
        Self {
            releases: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn contains(&self, version: &str) -> bool {
        self.releases.contains_key(version)
    }

    /// Known versions, greatest first.
    pub fn versions(&self) -> Vec<&str> {
        self.releases.keys().rev().map(|k| k.as_str()).collect()
    }

    /// Change items recorded for `version`. Unknown versions and `null`
    /// entries both give an empty slice.
    pub fn items(&self, version: &str) -> &[String] {
        match self.releases.get(version) {
            Some(Some(items)) => items,
            _ => &[],
        }
    }

    /// The greatest version key under plain string comparison, if any.
    pub fn latest_version(&self) -> Option<&str> {
        self.releases.keys().next_back().map(|k| k.as_str())
    }

    /// Change items of the latest version, in data-file order. An empty map
    /// or a `null` entry gives an empty slice.
    pub fn latest_items(&self) -> &[String] {
        match self.latest_version() {
            Some(version) => self.items(version),
            None => &[],
        }
    }

    /// Records a release. Returns false when the version already exists.
    pub fn insert(&mut self, version: String, items: Vec<String>) -> bool {
        match self.releases.entry(version) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Some(items));
                true
            }
        }
    }
}

/// File-backed [`ChangelogMap`]. A missing data file loads as an empty map;
/// only malformed JSON is an error.
pub struct ChangelogStore {
    data_path: Option<PathBuf>,
    pub changelogs: ChangelogMap,
}

impl Default for ChangelogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogStore {
    pub fn new() -> Self {
        Self {
            data_path: None,
            changelogs: ChangelogMap::new(),
        }
    }

    pub fn load(&mut self, data_path: &Path) -> Result<&mut Self, Box<dyn Error + Send + Sync>> {
        let changelogs = if let Ok(file) = File::open(data_path) {
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)?
        } else {
            ChangelogMap::new()
        };
        self.data_path = Some(data_path.to_path_buf());
        self.changelogs = changelogs;
        Ok(self)
    }

    pub fn save(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let path = self
            .data_path
            .as_deref()
            .ok_or("ChangelogStore save: path not set")?;
        let parent = path
            .parent()
            .ok_or("ChangelogStore save: get parent dir failed")?;
        let _ = create_dir_all(parent);
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &self.changelogs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_from_json(json: &str) -> ChangelogMap {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_latest_items_picks_greatest_key() {
        let map = map_from_json(r#"{"2.0.0": ["Fixed crash"], "1.0.0": ["Initial release"]}"#);
        assert_eq!(map.latest_version(), Some("2.0.0"));
        assert_eq!(map.latest_items(), ["Fixed crash".to_string()]);
    }

    #[test]
    fn test_latest_items_empty_map() {
        let map = ChangelogMap::new();
        assert_eq!(map.latest_version(), None);
        assert!(map.latest_items().is_empty());
    }

    #[test]
    fn test_latest_items_single_version() {
        let map = map_from_json(r#"{"1.0.0": ["X"]}"#);
        assert_eq!(map.latest_items(), ["X".to_string()]);
    }

    #[test]
    fn test_latest_items_null_entry() {
        // The greatest key carries null, so the selection degrades to empty
        // instead of falling back to an older version.
        let map = map_from_json(r#"{"2.0.0": null, "1.0.0": ["Initial release"]}"#);
        assert_eq!(map.latest_version(), Some("2.0.0"));
        assert!(map.latest_items().is_empty());
    }

    #[test]
    fn test_ordering_is_plain_string_comparison() {
        // "1.9.0" > "1.10.0" as strings even though semver says otherwise.
        let map = map_from_json(r#"{"1.9.0": ["a"], "1.10.0": ["b"]}"#);
        assert_eq!(map.latest_version(), Some("1.9.0"));
        assert_eq!(map.latest_items(), ["a".to_string()]);
    }

    #[test]
    fn test_latest_items_preserve_source_order() {
        let map = map_from_json(r#"{"1.1.0": ["third", "first", "second"]}"#);
        assert_eq!(
            map.latest_items(),
            [
                "third".to_string(),
                "first".to_string(),
                "second".to_string()
            ]
        );
    }

    #[test]
    fn test_items_unknown_version() {
        let map = map_from_json(r#"{"1.0.0": ["X"]}"#);
        assert!(map.items("9.9.9").is_empty());
    }

    #[test]
    fn test_versions_greatest_first() {
        let map = map_from_json(r#"{"0.9.5": ["a"], "0.9.7": ["c"], "0.9.6": ["b"]}"#);
        assert_eq!(map.versions(), vec!["0.9.7", "0.9.6", "0.9.5"]);
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut map = ChangelogMap::new();
        assert!(map.insert("1.0.0".to_string(), vec!["X".to_string()]));
        assert!(!map.insert("1.0.0".to_string(), vec!["Y".to_string()]));
        assert_eq!(map.items("1.0.0"), ["X".to_string()]);
    }

    #[test]
    fn test_store_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CHANGELOG_FILE_NAME);

        let mut store = ChangelogStore::new();
        store.load(&path).unwrap();
        assert!(store.changelogs.is_empty());
        // Loading must not create the file.
        assert!(path.try_exists().is_ok_and(|x| !x));
    }

    #[test]
    fn test_store_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CHANGELOG_FILE_NAME);

        let mut store = ChangelogStore::new();
        store.load(&path).unwrap();
        store
            .changelogs
            .insert("0.9.7".to_string(), vec!["Added vehicle flags".to_string()]);
        store.save().unwrap();

        let mut store = ChangelogStore::new();
        store.load(&path).unwrap();
        assert_eq!(store.changelogs.len(), 1);
        assert_eq!(
            store.changelogs.items("0.9.7"),
            ["Added vehicle flags".to_string()]
        );
    }

    #[test]
    fn test_store_save_without_path() {
        let store = ChangelogStore::new();
        assert!(store.save().is_err());
    }

    #[test]
    fn test_store_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CHANGELOG_FILE_NAME);
        std::fs::write(&path, "{not json").unwrap();

        let mut store = ChangelogStore::new();
        assert!(store.load(&path).is_err());
    }
}
