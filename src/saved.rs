use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::PathBuf,
};

use tiny_bail::prelude::*;

/// A pluggable key-value capability backing the saved set, so persistence
/// can be swapped out (notably for an in-memory store in tests).
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// File-backed store: each key maps to a JSON file under a base directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        r!(fs::create_dir_all(&self.dir));
        r!(fs::write(self.path(key), value));
    }
}

/// In-memory store. Nothing survives the process; handy for tests.
#[derive(Default)]
pub struct MemStore(HashMap<String, String>);

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

/// The set of saved job ids, mirrored to the store as a JSON array on every
/// change.
pub struct SavedJobs<S: KvStore> {
    store: S,
    ids: BTreeSet<u32>,
}

impl<S: KvStore> SavedJobs<S> {
    const KEY: &str = "saved_jobs";

    /// Loads the persisted set once at boot. Missing or malformed data
    /// silently defaults to an empty set.
    pub fn load(store: S) -> Self {
        let ids = store
            .get(Self::KEY)
            .and_then(|raw| serde_json::from_str::<Vec<u32>>(&raw).ok())
            .unwrap_or_default()
            .into_iter()
            .collect();
        Self { store, ids }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flips membership of `id` and persists the whole set immediately (one
    /// write per toggle). Returns true if the id is now saved.
    pub fn toggle(&mut self, id: u32) -> bool {
        let now_saved = if self.ids.contains(&id) {
            self.ids.remove(&id);
            false
        } else {
            self.ids.insert(id);
            true
        };
        self.persist();
        now_saved
    }

    fn persist(&mut self) {
        let ids = self.ids.iter().collect::<Vec<_>>();
        let raw = r!(serde_json::to_string(&ids));
        self.store.set(Self::KEY, &raw);
    }
}
