//! Placement pipeline: configuration, the placement pass, surface projection,
//! count reconciliation and look-at helpers.
pub mod config;
pub mod look_at;
pub mod reconcile;
pub mod runner;
pub mod surface;

pub use config::{IndexRange, PlacementConfig, PlacementMode, PlacementOptions};
pub use look_at::rotate_yaw_towards;
pub use reconcile::{
    clear_placeables, instance_name, reconcile_count, DestroyMode, PlaceableFactory,
    SceneNodePool,
};
pub use runner::{place, PassSummary, PlacementContext, PlacementRunner};
pub use surface::{project_or_keep, FlatGround, SurfaceProjector};
