//! Snapshot persistence backends.
//!
//! The placement core treats stored snapshots as opaque: it hands a
//! [`TransformSnapshot`] to a [`SnapshotPersistence`] and gets a [`SnapshotHandle`]
//! back. [`MemorySnapshotStore`] keeps everything in a map; with the `ron` feature,
//! [`RonSnapshotFiles`] writes one `.ron` file per snapshot.
use std::collections::HashMap;
use std::fmt;

use tracing::info;

use crate::error::{Error, Result};
use crate::snapshot::TransformSnapshot;
use crate::transform::{Placeable, Space};

/// Opaque identifier returned by [`SnapshotPersistence::save`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotHandle(pub String);

impl fmt::Display for SnapshotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage for captured snapshots.
pub trait SnapshotPersistence {
    fn save(&mut self, snapshot: &TransformSnapshot) -> Result<SnapshotHandle>;

    fn load(&self, handle: &SnapshotHandle) -> Result<TransformSnapshot>;
}

/// Capture `placeables` in `space` and save the result to `store`.
pub fn bake_snapshot<P: Placeable>(
    placeables: &[P],
    space: Space,
    store: &mut dyn SnapshotPersistence,
) -> Result<SnapshotHandle> {
    let snapshot = TransformSnapshot::capture(placeables, space);
    let handle = store.save(&snapshot)?;
    info!("Baked {} transforms into snapshot '{}'.", snapshot.len(), handle);
    Ok(handle)
}

/// In-memory store with sequential handles.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshots: HashMap<SnapshotHandle, TransformSnapshot>,
    next_id: u64,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotPersistence for MemorySnapshotStore {
    fn save(&mut self, snapshot: &TransformSnapshot) -> Result<SnapshotHandle> {
        let handle = SnapshotHandle(format!("snapshot-{:04}", self.next_id));
        self.next_id += 1;
        self.snapshots.insert(handle.clone(), snapshot.clone());
        Ok(handle)
    }

    fn load(&self, handle: &SnapshotHandle) -> Result<TransformSnapshot> {
        self.snapshots
            .get(handle)
            .cloned()
            .ok_or_else(|| Error::UnknownSnapshot {
                handle: handle.0.clone(),
            })
    }
}

/// Directory of RON files, one per snapshot. The handle is the file stem.
#[cfg(feature = "ron")]
#[derive(Debug, Clone)]
pub struct RonSnapshotFiles {
    dir: std::path::PathBuf,
    stem: String,
}

#[cfg(feature = "ron")]
impl RonSnapshotFiles {
    pub const DEFAULT_STEM: &'static str = "TransformsPreset";

    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            stem: Self::DEFAULT_STEM.to_owned(),
        }
    }

    /// File stem used for new snapshots; clashes get a `_N` suffix.
    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = stem.into();
        self
    }

    pub fn path_for(&self, handle: &SnapshotHandle) -> std::path::PathBuf {
        self.dir.join(format!("{}.ron", handle.0))
    }

    fn next_free_handle(&self) -> SnapshotHandle {
        let mut n = 0usize;
        loop {
            let name = if n == 0 {
                self.stem.clone()
            } else {
                format!("{}_{n}", self.stem)
            };
            let handle = SnapshotHandle(name);
            if !self.path_for(&handle).exists() {
                return handle;
            }
            n += 1;
        }
    }
}

#[cfg(feature = "ron")]
impl SnapshotPersistence for RonSnapshotFiles {
    fn save(&mut self, snapshot: &TransformSnapshot) -> Result<SnapshotHandle> {
        std::fs::create_dir_all(&self.dir)?;
        let handle = self.next_free_handle();
        std::fs::write(self.path_for(&handle), snapshot.to_ron_string()?)?;
        Ok(handle)
    }

    fn load(&self, handle: &SnapshotHandle) -> Result<TransformSnapshot> {
        let text = match std::fs::read_to_string(self.path_for(handle)) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::UnknownSnapshot {
                    handle: handle.0.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        TransformSnapshot::from_ron_str(&text)
    }
}
