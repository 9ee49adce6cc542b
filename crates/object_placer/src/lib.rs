#![forbid(unsafe_code)]
//! object_placer: procedural placement of child objects inside simple volumes.
//!
//! Modules:
//! - volume: box, cylinder and isosceles-triangle volumes plus wireframe outlines
//! - sampling: random points in volumes, grid alignment, rotation/offset/scale jitter
//! - snapshot: capture and replay transform snapshots, with pluggable persistence
//! - place: placement configuration, the placement pass, count reconciliation
//! - events: observe passes through event sinks
//!
//! The crate never owns scene objects. Callers implement [`transform::Placeable`]
//! for their own handles and pass slices of them in.
pub mod error;
pub mod events;
pub mod place;
pub mod sampling;
pub mod snapshot;
pub mod transform;
pub mod volume;

/// Convenient re-exports for common types. Import with `use object_placer::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::events::{
        EventSink, FnSink, MultiSink, PlacementEvent, PlacementEventKind, VecSink,
    };
    pub use crate::place::{
        clear_placeables, place, reconcile_count, rotate_yaw_towards, DestroyMode, FlatGround,
        IndexRange, PassSummary, PlaceableFactory, PlacementConfig, PlacementContext,
        PlacementMode, PlacementOptions, PlacementRunner, SceneNodePool, SurfaceProjector,
    };
    pub use crate::sampling::{
        aligned_position, sample_in_box, sample_in_cylinder, sample_in_triangle, sample_offset,
        sample_rotation, sample_scale_multiplier, VolumeSampling,
    };
    #[cfg(feature = "ron")]
    pub use crate::snapshot::RonSnapshotFiles;
    pub use crate::snapshot::{
        apply_snapshot, bake_snapshot, MemorySnapshotStore, SnapshotHandle, SnapshotPersistence,
        TransformRecord, TransformSnapshot,
    };
    pub use crate::transform::{Placeable, SceneNode, Space, Transform};
    pub use crate::volume::outline::LineSegment;
    pub use crate::volume::{BoxVolume, CylinderVolume, IsoscelesTriangle};
}
