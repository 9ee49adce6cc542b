//! Transform snapshots: capture the transforms of a list of placeables and replay
//! them later, possibly onto a different list.
//!
//! Records are index-aligned with the list they were captured from. Applying a
//! snapshot only ever writes existing placeables; it never creates or removes any.
use glam::{Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::events::{EventSink, PlacementEvent, PlacementEventKind};
use crate::transform::{divide_or_keep, Placeable, Space, Transform};

pub mod store;

pub use store::{bake_snapshot, MemorySnapshotStore, SnapshotHandle, SnapshotPersistence};
#[cfg(feature = "ron")]
pub use store::RonSnapshotFiles;

/// One captured transform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransformRecord {
    pub position: Vec3,
    pub rotation: Quat,
    /// Missing in snapshots written before scale was recorded; such records leave
    /// the target's scale alone.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scale: Option<Vec3>,
}

impl TransformRecord {
    pub fn new(position: Vec3, rotation: Quat, scale: Option<Vec3>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }
}

impl From<Transform> for TransformRecord {
    fn from(t: Transform) -> Self {
        Self::new(t.position, t.rotation, Some(t.scale))
    }
}

/// Ordered, fixed-length sequence of [`TransformRecord`]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransformSnapshot {
    records: Vec<TransformRecord>,
}

impl TransformSnapshot {
    pub fn from_records(records: Vec<TransformRecord>) -> Self {
        Self { records }
    }

    /// Read every placeable's transform in `space`, in order.
    pub fn capture<P: Placeable>(placeables: &[P], space: Space) -> Self {
        let records = placeables
            .iter()
            .map(|p| TransformRecord::from(p.transform_in(space)))
            .collect::<Vec<_>>();
        debug!("Captured {} transforms in {:?} space.", records.len(), space);
        Self { records }
    }

    /// Write the records onto `targets` without reporting events.
    pub fn apply<P: Placeable>(&self, targets: &mut [P], space: Space) -> usize {
        apply_snapshot(self, targets, space, &mut ())
    }

    pub fn records(&self) -> &[TransformRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&TransformRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformRecord> {
        self.records.iter()
    }

    #[cfg(feature = "ron")]
    pub fn to_ron_string(&self) -> crate::error::Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| crate::error::Error::Serialization(e.to_string()))
    }

    #[cfg(feature = "ron")]
    pub fn from_ron_str(s: &str) -> crate::error::Result<Self> {
        ron::from_str(s).map_err(|e| crate::error::Error::Serialization(e.to_string()))
    }
}

/// Write record `i` onto target `i` for every index present in both.
///
/// When `targets` is longer than the snapshot, the extra targets are left untouched
/// and a warning is logged and sent to `sink`. Returns the number of targets written.
///
/// In [`Space::World`] the recorded lossy scale is divided component-wise by the
/// parent's world scale to obtain the local scale. This ignores parent rotation
/// and is approximate for rotated, non-uniformly scaled parents.
pub fn apply_snapshot<P: Placeable>(
    snapshot: &TransformSnapshot,
    targets: &mut [P],
    space: Space,
    sink: &mut dyn EventSink,
) -> usize {
    if targets.len() > snapshot.len() {
        warn!(
            "Snapshot holds {} transforms but {} targets were given; the remaining {} are not changed.",
            snapshot.len(),
            targets.len(),
            targets.len() - snapshot.len()
        );
        if sink.wants(PlacementEventKind::Warning) {
            sink.send(PlacementEvent::Warning {
                context: "snapshot".into(),
                message: format!(
                    "Target count {} exceeds snapshot length {}; some targets were not applied",
                    targets.len(),
                    snapshot.len()
                ),
            });
        }
    }

    let mut applied = 0;
    for (record, target) in snapshot.records.iter().zip(targets.iter_mut()) {
        match space {
            Space::Local => {
                let scale = record.scale.unwrap_or(target.local_transform().scale);
                target.set_local_transform(Transform {
                    position: record.position,
                    rotation: record.rotation,
                    scale,
                });
            }
            Space::World => {
                target.set_world_pose(record.position, record.rotation);
                if let Some(world_scale) = record.scale {
                    let local_scale = match target.parent_world_scale() {
                        Some(parent_scale) => divide_or_keep(
                            world_scale,
                            parent_scale,
                            target.local_transform().scale,
                        ),
                        None => world_scale,
                    };
                    target.set_local_scale(local_scale);
                }
            }
        }
        applied += 1;
    }

    if sink.wants(PlacementEventKind::SnapshotApplied) {
        sink.send(PlacementEvent::SnapshotApplied {
            applied,
            skipped: targets.len() - applied,
        });
    }

    applied
}
