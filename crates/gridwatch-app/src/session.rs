//! Console session — applies operator commands, runs ticks, and assembles
//! render snapshots.
//!
//! The shared-state discipline lives here: `tick` mutates only the registry;
//! command handling mutates only the viewport, filter, selection, and drag
//! state. The renderer sees fully-formed snapshots and nothing else.

use glam::DVec2;

use gridwatch_core::commands::OperatorCommand;
use gridwatch_core::seed::TargetSeed;
use gridwatch_core::state::{RenderSnapshot, TargetMarker, TargetRecord, ViewportView};
use gridwatch_core::types::{ContainerSize, ScreenPoint};
use gridwatch_sim::registry::{RegistryConfig, TargetRegistry};
use gridwatch_view::filter::FilterState;
use gridwatch_view::hit;
use gridwatch_view::selection::Selection;
use gridwatch_view::viewport::{wheel_factor, Viewport};

use crate::input::{PointerInput, Release};

/// Configuration for a new session.
pub struct SessionConfig {
    /// RNG seed forwarded to the registry.
    pub seed: u64,
    /// Initial host surface bounds, replaced by `SetContainerSize`.
    pub container: ContainerSize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            container: ContainerSize::new(1280.0, 720.0),
        }
    }
}

/// The console session. Owns the registry and all interaction state.
pub struct ConsoleSession {
    registry: TargetRegistry,
    viewport: Viewport,
    filter: FilterState,
    selection: Selection,
    pointer: PointerInput,
    container: ContainerSize,
}

impl ConsoleSession {
    /// Create a session with an empty registry.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            registry: TargetRegistry::new(RegistryConfig { seed: config.seed }),
            viewport: Viewport::new(),
            filter: FilterState::new(),
            selection: Selection::new(),
            pointer: PointerInput::new(),
            container: config.container,
        }
    }

    /// Seed the registry. Called once at start.
    pub fn initialize(&mut self, seeds: &[TargetSeed]) {
        self.registry.initialize(seeds);
    }

    /// Advance the motion simulation by one tick.
    pub fn tick(&mut self) {
        self.registry.tick();
    }

    /// Apply one operator command.
    pub fn apply(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::PointerDown { x, y, primary } => {
                self.pointer
                    .press(DVec2::new(x, y), primary, self.viewport.pan());
            }
            OperatorCommand::PointerMove { x, y } => {
                if let Some(pan) = self.pointer.drag_to(DVec2::new(x, y)) {
                    self.viewport.set_pan(pan);
                }
            }
            OperatorCommand::PointerUp { x, y } => {
                if let Release::Click(point) = self.pointer.release(DVec2::new(x, y)) {
                    self.resolve_click(point);
                }
            }
            OperatorCommand::PointerLeave => self.pointer.abandon(),
            // Wheel zooms regardless of drag state and never starts or
            // stops a drag.
            OperatorCommand::Wheel { delta_y } => self.viewport.zoom_by(wheel_factor(delta_y)),
            OperatorCommand::StepZoomIn => self.viewport.step_in(),
            OperatorCommand::StepZoomOut => self.viewport.step_out(),
            OperatorCommand::ZoomTo { zoom } => self.viewport.zoom_to(zoom),
            OperatorCommand::ResetView => self.viewport.reset(),
            OperatorCommand::SetSearchText { text } => self.filter.set_search_text(text),
            OperatorCommand::SetStatusFilter { filter } => self.filter.set_status_filter(filter),
            OperatorCommand::SelectTarget { id } => self.selection.select(id),
            OperatorCommand::ClearSelection => self.selection.clear(),
            OperatorCommand::SetContainerSize { width, height } => {
                self.container = ContainerSize::new(width, height);
            }
        }
    }

    /// Abandon any in-flight pointer gesture (teardown path).
    pub fn abandon_pointer(&mut self) {
        self.pointer.abandon();
    }

    /// Assemble the read-only render snapshot: visible markers with
    /// resolved screen positions, the current transform, and the selected
    /// target's full record for the detail readout.
    pub fn snapshot(&self) -> RenderSnapshot {
        let records = self.registry.records();
        let markers = self.visible_markers(&records);
        let selected = self.selection.resolve(&records).cloned();

        RenderSnapshot {
            time: self.registry.time(),
            markers,
            viewport: ViewportView {
                zoom: self.viewport.zoom(),
                pan: self.viewport.pan(),
                container: self.container,
            },
            selected,
        }
    }

    fn visible_markers(&self, records: &[TargetRecord]) -> Vec<TargetMarker> {
        self.filter
            .visible_targets(records)
            .into_iter()
            .map(|record| TargetMarker {
                id: record.id.clone(),
                name: record.name.clone(),
                status: record.status,
                world: record.world,
                screen: self.viewport.world_to_screen(record.world, self.container),
                marker_scale: self.viewport.marker_scale(),
                selected: self.selection.is_selected(&record.id),
                speed_kmh: record.speed_kmh,
                heading_deg: record.heading_deg,
                trail: record.trail.clone(),
            })
            .collect()
    }

    /// Resolve a click against the markers as rendered: a marker hit
    /// selects it, a background hit clears the selection.
    fn resolve_click(&mut self, point: ScreenPoint) {
        let records = self.registry.records();
        let markers = self.visible_markers(&records);
        match hit::hit_test(&markers, point) {
            Some(marker) => {
                let id = marker.id.clone();
                self.selection.select(id);
            }
            None => self.selection.clear(),
        }
    }
}
