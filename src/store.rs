use anyhow::{Context, Result, bail};
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::shopping_list::{Item, ShoppingList};

/// Whole-collection persistence
///
/// `load` never fails: unreadable or unparsable data is logged and treated
/// as an empty list. `save` overwrites everything that was stored before.
pub trait Storage: Send + Sync {
    fn load(&self) -> ShoppingList;
    fn save(&self, list: &ShoppingList) -> Result<()>;
    fn health_check(&self) -> Result<()>;
}

/// Storage backed by a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Open the data file, creating its directory and an empty `[]` document
    /// when the file is missing or has zero length.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
                tracing::info!("Created data directory: {}", dir.display());
            }
        }

        let needs_init = match fs::metadata(&path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };
        if needs_init {
            fs::write(&path, "[]")
                .with_context(|| format!("Failed to initialize data file {}", path.display()))?;
            tracing::info!("Initialized empty data file: {}", path.display());
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ShoppingList> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let list = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(list)
    }
}

impl Storage for FileStorage {
    fn load(&self) -> ShoppingList {
        match self.read() {
            Ok(list) => list,
            Err(err) => {
                tracing::error!("Error reading or parsing data file: {:#}", err);
                ShoppingList::default()
            }
        }
    }

    fn save(&self, list: &ShoppingList) -> Result<()> {
        let data = serde_json::to_string_pretty(list).context("Failed to serialize shopping list")?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn health_check(&self) -> Result<()> {
        let meta = fs::metadata(&self.path)
            .with_context(|| format!("Data file {} is not accessible", self.path.display()))?;
        if !meta.is_file() {
            bail!("Data file {} is not a regular file", self.path.display());
        }
        Ok(())
    }
}

/// In-process storage used to exercise handlers without touching disk
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    list: std::sync::Mutex<ShoppingList>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_items(list: ShoppingList) -> Self {
        Self {
            list: std::sync::Mutex::new(list),
            fail_writes: false,
        }
    }

    /// A store whose `save` always errors; reads still see `list`
    pub fn failing(list: ShoppingList) -> Self {
        Self {
            list: std::sync::Mutex::new(list),
            fail_writes: true,
        }
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ShoppingList> {
        self.list.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn load(&self) -> ShoppingList {
        self.guard().clone()
    }

    fn save(&self, list: &ShoppingList) -> Result<()> {
        if self.fail_writes {
            bail!("disk full");
        }
        *self.guard() = list.clone();
        Ok(())
    }

    fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// Shareable handle serializing every load-mutate-save cycle
///
/// A single lock covers reads too, so a request never observes a file that
/// another request is halfway through rewriting.
#[derive(Clone)]
pub struct ShoppingListStore {
    storage: Arc<dyn Storage>,
    lock: Arc<Mutex<()>>,
}

impl ShoppingListStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Current contents of the list
    pub async fn list(&self) -> ShoppingList {
        let _guard = self.lock.lock().await;
        self.storage.load()
    }

    /// Append an item built from `fields` under the next free id
    pub async fn create(&self, fields: Map<String, JsonValue>) -> Result<Item> {
        let _guard = self.lock.lock().await;
        let mut list = self.storage.load();
        let item = list
            .insert(fields)
            .context("No item ids left: the largest stored id is at the integer limit")?;
        self.storage.save(&list)?;
        Ok(item)
    }

    /// Shallow-merge `patch` into item `id`. Nothing is written when the id
    /// is unknown.
    pub async fn update(&self, id: i64, patch: Map<String, JsonValue>) -> Result<Option<Item>> {
        let _guard = self.lock.lock().await;
        let mut list = self.storage.load();
        let Some(item) = list.update(id, patch) else {
            return Ok(None);
        };
        self.storage.save(&list)?;
        Ok(Some(item))
    }

    /// Remove item `id`. Nothing is written when the id is unknown.
    pub async fn delete(&self, id: i64) -> Result<Option<Item>> {
        let _guard = self.lock.lock().await;
        let mut list = self.storage.load();
        let Some(item) = list.remove(id) else {
            return Ok(None);
        };
        self.storage.save(&list)?;
        Ok(Some(item))
    }

    pub async fn health_check(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.storage.health_check()
    }
}
