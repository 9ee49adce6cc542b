//! Placement pass: compute a transform for every target in the active range and
//! write it back.
use glam::{Quat, Vec3};
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::events::{EventSink, PlacementEvent, PlacementEventKind};
use crate::place::config::{PlacementConfig, PlacementMode, PlacementOptions};
use crate::place::surface::{project_or_keep, SurfaceProjector};
use crate::sampling::{aligned_position, sample_offset, sample_rotation, sample_scale_multiplier};
use crate::snapshot::{apply_snapshot, TransformSnapshot};
use crate::transform::{Placeable, Transform};

/// Outcome of one placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    pub mode: PlacementMode,
    /// Targets that were written.
    pub placed: usize,
    /// Targets left untouched.
    pub skipped: usize,
    /// Targets whose position was snapped onto a surface.
    pub projected: usize,
}

impl PassSummary {
    fn empty(mode: PlacementMode) -> Self {
        Self {
            mode,
            placed: 0,
            skipped: 0,
            projected: 0,
        }
    }
}

/// External collaborators for a pass.
#[derive(Clone, Copy)]
pub struct PlacementContext<'a> {
    /// Used when [`PlacementOptions::project_onto_surface`] is set.
    pub projector: &'a dyn SurfaceProjector,
    /// Required for [`PlacementMode::Preset`].
    pub snapshot: Option<&'a TransformSnapshot>,
}

impl Default for PlacementContext<'_> {
    fn default() -> Self {
        Self {
            projector: &(),
            snapshot: None,
        }
    }
}

impl<'a> PlacementContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projector(mut self, projector: &'a dyn SurfaceProjector) -> Self {
        self.projector = projector;
        self
    }

    pub fn with_snapshot(mut self, snapshot: &'a TransformSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }
}

/// Validated configuration bundled with its collaborators.
pub struct PlacementRunner<'a> {
    /// Sanitized configuration applied by this runner.
    pub config: PlacementConfig,
    pub context: PlacementContext<'a>,
}

impl<'a> PlacementRunner<'a> {
    pub fn try_new(config: PlacementConfig, context: PlacementContext<'a>) -> Result<Self> {
        let config = config.sanitized();
        config.validate()?;
        if config.mode == PlacementMode::Preset && context.snapshot.is_none() {
            return Err(Error::MissingSnapshot);
        }
        Ok(Self { config, context })
    }

    /// Runs a pass over `targets`, returning its summary.
    pub fn run<P: Placeable>(&self, targets: &mut [P], rng: &mut impl RngCore) -> Result<PassSummary> {
        place(&self.config, &self.context, targets, rng, None)
    }

    pub fn run_with_events<P: Placeable>(
        &self,
        targets: &mut [P],
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<PassSummary> {
        place(&self.config, &self.context, targets, rng, Some(sink))
    }
}

/// Run one placement pass.
///
/// [`PlacementMode::Preset`] replays `ctx.snapshot` in `config.space` and ignores
/// the options. Every other mode visits `config.range` in index order and writes a
/// new local position and rotation (and scale, when randomized) to each target.
///
/// A failing sample aborts the pass; targets written before the failure keep
/// their new transforms.
pub fn place<P: Placeable, R: RngCore>(
    config: &PlacementConfig,
    ctx: &PlacementContext<'_>,
    targets: &mut [P],
    rng: &mut R,
    sink: Option<&mut dyn EventSink>,
) -> Result<PassSummary> {
    if let Some(s) = sink {
        place_internal(config, ctx, targets, rng, s)
    } else {
        place_internal(config, ctx, targets, rng, &mut ())
    }
}

fn place_internal<P: Placeable, R: RngCore>(
    config: &PlacementConfig,
    ctx: &PlacementContext<'_>,
    targets: &mut [P],
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<PassSummary> {
    let mode = config.mode;

    if mode == PlacementMode::Preset {
        let snapshot = ctx.snapshot.ok_or(Error::MissingSnapshot)?;
        let applied = apply_snapshot(snapshot, targets, config.space, sink);
        let summary = PassSummary {
            placed: applied,
            skipped: targets.len() - applied,
            ..PassSummary::empty(mode)
        };
        finish(summary, sink);
        return Ok(summary);
    }

    let range = config.range.resolve(targets.len());
    if sink.wants(PlacementEventKind::PassStarted) {
        sink.send(PlacementEvent::PassStarted {
            mode,
            start: range.start,
            end: range.end,
            target_count: targets.len(),
        });
    }

    let options = &config.options;
    let mut summary = PassSummary::empty(mode);
    for index in range.clone() {
        let target = &mut targets[index];
        let current = target.local_transform();

        let mut position = base_position(config, index, current.position, rng)?;
        let rotation = resolve_rotation(options, rng);

        if options.add_random_offset {
            position += sample_offset(options.min_offset, options.max_offset, rng);
        }

        if options.project_onto_surface {
            let (projected, hit) =
                project_or_keep(ctx.projector, position, options.surface_sample_radius);
            position = projected;
            if hit {
                summary.projected += 1;
            }
        }

        let scale = if options.multiply_random_scale {
            current.scale * sample_scale_multiplier(options.min_scale, options.max_scale, rng)
        } else {
            current.scale
        };

        let transform = Transform {
            position,
            rotation,
            scale,
        };
        target.set_local_transform(transform);
        summary.placed += 1;

        if sink.wants(PlacementEventKind::Placed) {
            sink.send(PlacementEvent::Placed { index, transform });
        }
    }

    summary.skipped = targets.len() - summary.placed;
    debug!(
        "Placement pass {:?} wrote {} of {} targets ({}..{}), {} projected.",
        mode,
        summary.placed,
        targets.len(),
        range.start,
        range.end,
        summary.projected
    );
    finish(summary, sink);
    Ok(summary)
}

fn base_position(
    config: &PlacementConfig,
    index: usize,
    current: Vec3,
    rng: &mut dyn RngCore,
) -> Result<Vec3> {
    if let Some(volume) = config.sampled_volume() {
        return volume.sample_point(rng);
    }
    Ok(match config.mode {
        PlacementMode::AlignInGrid => aligned_position(
            &config.box_volume,
            config.rows.max(1),
            config.columns.max(1),
            index,
        ),
        _ => current,
    })
}

fn resolve_rotation(options: &PlacementOptions, rng: &mut dyn RngCore) -> Quat {
    if options.sample_rotation {
        sample_rotation(options.min_rotation_euler, options.max_rotation_euler, rng)
    } else {
        options.fixed_rotation
    }
}

fn finish(summary: PassSummary, sink: &mut dyn EventSink) {
    if sink.wants(PlacementEventKind::PassFinished) {
        sink.send(PlacementEvent::PassFinished { summary });
    }
}
