//! Profile persistence: one JSON document mapping sanitized profile
//! names to their prompts. Every mutation is written through to disk
//! immediately; a missing document is an empty store, not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// A named system prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub prompt: String,
    pub created_at: u64, // Unix timestamp
}

impl Profile {
    fn new(name: &str, prompt: &str) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            name: name.to_string(),
            prompt: prompt.to_string(),
            created_at,
        }
    }

    /// Creation date formatted for display.
    pub fn created_display(&self) -> String {
        chrono::DateTime::from_timestamp(self.created_at as i64, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Reduce a display name to a storage key: lowercase, runs of anything
/// outside `[a-z0-9]` collapsed to single hyphens.
pub fn sanitize_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !key.is_empty() {
                key.push('-');
            }
            pending_hyphen = false;
            key.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    key
}

/// Profile store backed by a single JSON file.
pub struct ProfileStore {
    profiles: HashMap<String, Profile>,
    storage_path: PathBuf,
}

impl ProfileStore {
    /// Open a store at the given path, loading any existing document.
    pub fn new(storage_path: impl AsRef<Path>) -> io::Result<Self> {
        let storage_path = storage_path.as_ref().to_path_buf();
        let profiles = if storage_path.exists() {
            let contents = fs::read_to_string(&storage_path)?;
            serde_json::from_str(&contents).map_err(io::Error::from)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            profiles,
            storage_path,
        })
    }

    /// Create or overwrite a profile and persist the store.
    pub fn save_profile(&mut self, name: &str, prompt: &str) -> io::Result<Profile> {
        let key = sanitize_name(name);
        if key.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "profile name must contain at least one alphanumeric character",
            ));
        }
        let profile = Profile::new(name, prompt);
        self.profiles.insert(key, profile.clone());
        self.persist()?;
        Ok(profile)
    }

    /// Look up a profile by (unsanitized) name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(&sanitize_name(name))
    }

    /// Delete a profile by name, persisting on success. Returns whether
    /// anything was removed.
    pub fn delete(&mut self, name: &str) -> io::Result<bool> {
        if self.profiles.remove(&sanitize_name(name)).is_some() {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// All profiles, newest first.
    pub fn list(&self) -> Vec<&Profile> {
        let mut profiles: Vec<&Profile> = self.profiles.values().collect();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        profiles
    }

    /// Check if the store holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.storage_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.profiles)?;
        fs::write(&self.storage_path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("My Profile"), "my-profile");
        assert_eq!(sanitize_name("  Rust!! Helper  "), "rust-helper");
        assert_eq!(sanitize_name("simple"), "simple");
        assert_eq!(sanitize_name("***"), "");
    }

    #[test]
    fn test_save_get_delete() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::new(dir.path().join("profiles.json")).unwrap();

        store.save_profile("Code Reviewer", "You review Rust code.").unwrap();
        let profile = store.get("code reviewer").unwrap();
        assert_eq!(profile.name, "Code Reviewer");
        assert_eq!(profile.prompt, "You review Rust code.");

        assert!(store.delete("Code Reviewer").unwrap());
        assert!(!store.delete("Code Reviewer").unwrap());
        assert!(store.get("Code Reviewer").is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::new(dir.path().join("profiles.json")).unwrap();
        assert!(store.save_profile("!!!", "prompt").is_err());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.json");

        let mut store = ProfileStore::new(&path).unwrap();
        store.save_profile("helper", "Be helpful.").unwrap();
        drop(store);

        let reopened = ProfileStore::new(&path).unwrap();
        assert_eq!(reopened.get("helper").unwrap().prompt, "Be helpful.");
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("nope.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempdir().unwrap();
        let mut store = ProfileStore::new(dir.path().join("profiles.json")).unwrap();

        store.save_profile("helper", "v1").unwrap();
        store.save_profile("Helper", "v2").unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get("helper").unwrap().prompt, "v2");
    }
}
