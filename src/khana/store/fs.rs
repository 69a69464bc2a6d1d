use super::StorageBackend;
use crate::error::{KhanaError, Result};
use crate::model::{Recipe, Theme};
use crate::seed;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const RECIPES_FILE: &str = "recipes.json";
const THEME_FILE: &str = "theme.json";

/// File-based storage: `recipes.json` and `theme.json` under a single root
/// directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(KhanaError::Io)?;
        }
        Ok(())
    }

    /// Write via a uuid-suffixed temp file and rename, so a failed write never
    /// clobbers the previous contents.
    fn write_atomic(&self, filename: &str, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.root.join(filename);
        let tmp = self.root.join(format!(".{}-{}.tmp", filename, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(KhanaError::Io)?;
        fs::rename(&tmp, &target).map_err(KhanaError::Io)?;
        Ok(())
    }

    fn reseed(&mut self) -> Result<Vec<Recipe>> {
        let seeded = seed::default_recipes();
        self.save_recipes(&seeded)?;
        Ok(seeded)
    }
}

impl StorageBackend for FileStore {
    fn load_recipes(&mut self) -> Result<Vec<Recipe>> {
        let path = self.root.join(RECIPES_FILE);
        if !path.exists() {
            return self.reseed();
        }

        // Unreadable or unparsable content is treated identically to absent
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return self.reseed(),
        };
        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => Ok(recipes),
            Err(_) => self.reseed(),
        }
    }

    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        // Serialize fully before touching the slot
        let content =
            serde_json::to_string_pretty(recipes).map_err(KhanaError::Serialization)?;
        self.write_atomic(RECIPES_FILE, &content)
    }

    fn load_theme(&self) -> Theme {
        let path = self.root.join(THEME_FILE);
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Theme::default(),
        };
        serde_json::from_str::<Theme>(&raw).unwrap_or_default()
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        let content = serde_json::to_string(&theme).map_err(KhanaError::Serialization)?;
        self.write_atomic(THEME_FILE, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn first_load_seeds_and_persists() {
        let (dir, mut store) = setup();

        let recipes = store.load_recipes().unwrap();
        assert_eq!(recipes.len(), 3);
        assert!(dir.path().join("recipes.json").exists());

        // Second load reads the persisted seed back, ids unchanged
        let again = store.load_recipes().unwrap();
        assert_eq!(again, recipes);
    }

    #[test]
    fn corrupted_slot_is_reseeded() {
        let (dir, mut store) = setup();
        fs::write(dir.path().join("recipes.json"), "not json").unwrap();

        let recipes = store.load_recipes().unwrap();
        assert_eq!(recipes.len(), 3);
        assert!(recipes.iter().any(|r| r.title == "Masala Chai"));

        // The reseed was written back, so the next load is stable
        let again = store.load_recipes().unwrap();
        assert_eq!(again, recipes);
    }

    #[test]
    fn wrong_shape_is_treated_as_corrupted() {
        let (dir, mut store) = setup();
        fs::write(dir.path().join("recipes.json"), "{\"not\": \"an array\"}").unwrap();

        let recipes = store.load_recipes().unwrap();
        assert_eq!(recipes.len(), 3);
    }

    #[test]
    fn save_load_round_trip_is_lossless() {
        let (_dir, mut store) = setup();
        let mut recipes = store.load_recipes().unwrap();
        recipes[0].image_url = "https://example.com/paneer.jpg".to_string();
        store.save_recipes(&recipes).unwrap();

        let loaded = store.load_recipes().unwrap();
        assert_eq!(loaded, recipes);
    }

    #[test]
    fn save_leaves_no_tmp_artifacts() {
        let (dir, mut store) = setup();
        store.save_recipes(&seed::default_recipes()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn theme_defaults_to_light_when_absent_or_invalid() {
        let (dir, mut store) = setup();
        assert_eq!(store.load_theme(), Theme::Light);

        fs::write(dir.path().join("theme.json"), "\"neon\"").unwrap();
        assert_eq!(store.load_theme(), Theme::Light);

        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_theme(), Theme::Dark);
    }
}
