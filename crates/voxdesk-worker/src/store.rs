//! One-JSON-file-per-order storage.

use std::path::{Path, PathBuf};
use thiserror::Error;
use voxdesk_grocery::Order;

/// Errors that can occur while reading or writing order files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("order store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An order file could not be encoded or decoded.
    #[error("order store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The order id cannot be used as part of a file name.
    #[error("invalid order id: {0:?}")]
    InvalidOrderId(String),
}

/// A directory of `order_<orderId>.json` files.
#[derive(Debug, Clone)]
pub struct OrderStore {
    dir: PathBuf,
}

impl OrderStore {
    /// Uses `dir` for order files. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the order files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `order_id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidOrderId` for ids that are empty or
    /// contain path separators.
    pub fn path_for(&self, order_id: &str) -> Result<PathBuf, StoreError> {
        if order_id.is_empty()
            || order_id.contains(|c: char| c == '/' || c == '\\')
            || order_id.contains("..")
        {
            return Err(StoreError::InvalidOrderId(order_id.to_string()));
        }
        Ok(self.dir.join(format!("order_{order_id}.json")))
    }

    /// Writes an order, replacing any previous version of it.
    ///
    /// The file is written next to its final path and renamed into place so
    /// readers never see a partial document.
    pub fn save(&self, order: &Order) -> Result<PathBuf, StoreError> {
        let path = self.path_for(&order.order_id)?;
        std::fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(order)?)?;
        std::fs::rename(&tmp, &path)?;

        tracing::debug!(order_id = %order.order_id, path = %path.display(), "order saved");
        Ok(path)
    }

    /// Reads one order, or `None` if it does not exist.
    pub fn load(&self, order_id: &str) -> Result<Option<Order>, StoreError> {
        let path = self.path_for(order_id)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Reads every order in the directory.
    ///
    /// Files that cannot be read or parsed are logged and skipped. A missing
    /// directory holds no orders.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` only if the directory itself cannot be listed.
    pub fn load_all(&self) -> Result<Vec<Order>, StoreError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_order_file(path))
            .collect();
        paths.sort();

        let mut orders = Vec::with_capacity(paths.len());
        for path in paths {
            match read_order(&path) {
                Ok(order) => orders.push(order),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable order file"
                    );
                }
            }
        }
        Ok(orders)
    }
}

fn is_order_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("order_") && name.ends_with(".json"))
}

fn read_order(path: &Path) -> Result<Order, StoreError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
