//! Count reconciliation: grow or shrink a list of placeables to a desired length
//! before a placement pass.
//!
//! Creation and destruction go through a [`PlaceableFactory`], so the same code
//! serves tooling contexts that destroy immediately and runtime contexts that
//! defer destruction. Placement itself never changes the list length.
use tracing::info;

use crate::events::{EventSink, PlacementEvent, PlacementEventKind};
use crate::transform::{Placeable, SceneNode, Transform};

/// Creates and destroys placeables for count reconciliation.
pub trait PlaceableFactory {
    type Item: Placeable;

    /// Base name for new instances; instance `i` is named `{prefab_name}_{i:03}`.
    fn prefab_name(&self) -> &str;

    fn instantiate(&mut self, name: &str) -> Self::Item;

    fn destroy(&mut self, item: Self::Item);
}

/// Name given to the instance created at `index`.
pub fn instance_name(prefab_name: &str, index: usize) -> String {
    format!("{prefab_name}_{index:03}")
}

/// Resize `list` to exactly `desired` entries.
///
/// Missing entries are instantiated at the end; surplus entries are destroyed
/// from the end. Existing entries below `desired` are kept as they are.
pub fn reconcile_count<F: PlaceableFactory>(
    mut list: Vec<F::Item>,
    desired: usize,
    factory: &mut F,
    sink: &mut dyn EventSink,
) -> Vec<F::Item> {
    let mut created = 0;
    for index in list.len()..desired {
        let name = instance_name(factory.prefab_name(), index);
        list.push(factory.instantiate(&name));
        created += 1;
    }

    let mut destroyed = 0;
    while list.len() > desired {
        if let Some(item) = list.pop() {
            factory.destroy(item);
            destroyed += 1;
        }
    }

    if created > 0 || destroyed > 0 {
        info!(
            "Reconciled '{}' instances to {} ({} created, {} destroyed).",
            factory.prefab_name(),
            desired,
            created,
            destroyed
        );
    }
    if sink.wants(PlacementEventKind::CountReconciled) {
        sink.send(PlacementEvent::CountReconciled {
            created,
            destroyed,
            count: list.len(),
        });
    }

    list
}

/// Destroy every entry of `list`.
pub fn clear_placeables<F: PlaceableFactory>(
    list: Vec<F::Item>,
    factory: &mut F,
    sink: &mut dyn EventSink,
) -> Vec<F::Item> {
    reconcile_count(list, 0, factory, sink)
}

/// When destroyed [`SceneNode`]s actually go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DestroyMode {
    /// Dropped inside [`PlaceableFactory::destroy`].
    #[default]
    Immediate,
    /// Queued until [`SceneNodePool::flush_destroyed`].
    Deferred,
}

/// [`PlaceableFactory`] producing [`SceneNode`]s under a shared parent.
#[derive(Debug, Clone)]
pub struct SceneNodePool {
    prefab_name: String,
    template: Transform,
    parent: Option<Transform>,
    mode: DestroyMode,
    pending: Vec<SceneNode>,
    destroyed: usize,
}

impl SceneNodePool {
    pub fn new(prefab_name: impl Into<String>) -> Self {
        Self {
            prefab_name: prefab_name.into(),
            template: Transform::IDENTITY,
            parent: None,
            mode: DestroyMode::Immediate,
            pending: Vec::new(),
            destroyed: 0,
        }
    }

    /// Local transform given to new instances.
    pub fn with_template(mut self, template: Transform) -> Self {
        self.template = template;
        self
    }

    /// World transform of the parent new instances are attached to.
    pub fn with_parent(mut self, parent: Transform) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_destroy_mode(mut self, mode: DestroyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Nodes destroyed in [`DestroyMode::Deferred`] and not yet flushed.
    pub fn pending_destroy(&self) -> &[SceneNode] {
        &self.pending
    }

    /// Drop all pending nodes, returning how many were dropped.
    pub fn flush_destroyed(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        self.destroyed += n;
        n
    }

    /// Nodes that have actually been dropped so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }
}

impl PlaceableFactory for SceneNodePool {
    type Item = SceneNode;

    fn prefab_name(&self) -> &str {
        &self.prefab_name
    }

    fn instantiate(&mut self, name: &str) -> SceneNode {
        SceneNode {
            name: name.to_owned(),
            local: self.template,
            parent: self.parent,
        }
    }

    fn destroy(&mut self, item: SceneNode) {
        match self.mode {
            DestroyMode::Immediate => {
                drop(item);
                self.destroyed += 1;
            }
            DestroyMode::Deferred => self.pending.push(item),
        }
    }
}
