//! Quadrant classification for drop targets.
//!
//! A target is split into four edge bands plus the remaining center:
//!
//! ```text
//! +---------------------------+
//! |      |     top     |      |
//! | left |-------------| right|
//! |      |   center    |      |
//! |      |-------------|      |
//! |      |   bottom    |      |
//! +---------------------------+
//! ```
//!
//! Bands are checked in the order left, right, top, bottom and the first
//! accepted band containing the pointer wins, so corners resolve to the
//! horizontal zone.

use dropzone_core::geometry::Size;
use dropzone_core::math::Vec2;
use dropzone_core::profiling::profile_function;

use crate::sizing::{OverlayModel, SizeUnit, Sizing};
use crate::zone::{AcceptedZones, DropZone, Quadrant};

/// Outcome of classifying a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Pointer is inside an accepted edge band.
    Edge(Quadrant),
    /// Pointer is outside every accepted band and the center is accepted.
    Center,
    /// Pointer is over the target but no accepted zone claims it.
    NotApplicable,
}

impl Classification {
    /// The zone this classification resolves to, if any.
    pub fn zone(&self) -> Option<DropZone> {
        match self {
            Classification::Edge(quadrant) => Some((*quadrant).into()),
            Classification::Center => Some(DropZone::Center),
            Classification::NotApplicable => None,
        }
    }

    /// The edge quadrant, `None` for center and not-applicable.
    pub fn quadrant(&self) -> Option<Quadrant> {
        match self {
            Classification::Edge(quadrant) => Some(*quadrant),
            _ => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, Classification::NotApplicable)
    }
}

/// Decides whether a coordinate lies in the leading or trailing band of an axis.
pub trait BandMetric {
    /// `position` is within the band starting at 0.
    fn near_start(&self, position: f32, extent: f32) -> bool;
    /// `position` is within the band ending at `extent`.
    fn near_end(&self, position: f32, extent: f32) -> bool;
}

/// Band width given as a percentage (0-100) of the axis extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageBand {
    pub threshold: f32,
}

impl BandMetric for PercentageBand {
    fn near_start(&self, position: f32, extent: f32) -> bool {
        100.0 * position / extent < self.threshold
    }

    fn near_end(&self, position: f32, extent: f32) -> bool {
        100.0 * position / extent > 100.0 - self.threshold
    }
}

/// Band width given as an absolute distance from the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBand {
    pub threshold: f32,
}

impl BandMetric for PixelBand {
    fn near_start(&self, position: f32, _extent: f32) -> bool {
        position < self.threshold
    }

    fn near_end(&self, position: f32, extent: f32) -> bool {
        position > extent - self.threshold
    }
}

/// Classify `point` (relative to the target's top-left corner) using `metric`.
///
/// `size` must be non-degenerate; callers skip classification for zero-sized
/// targets.
pub fn classify_with<M: BandMetric>(
    metric: &M,
    accepted: AcceptedZones,
    point: Vec2,
    size: Size<f32>,
) -> Classification {
    debug_assert!(!size.is_degenerate(), "classify called on a degenerate target");

    if accepted.contains(AcceptedZones::LEFT) && metric.near_start(point.x, size.width) {
        return Classification::Edge(Quadrant::Left);
    }
    if accepted.contains(AcceptedZones::RIGHT) && metric.near_end(point.x, size.width) {
        return Classification::Edge(Quadrant::Right);
    }
    if accepted.contains(AcceptedZones::TOP) && metric.near_start(point.y, size.height) {
        return Classification::Edge(Quadrant::Top);
    }
    if accepted.contains(AcceptedZones::BOTTOM) && metric.near_end(point.y, size.height) {
        return Classification::Edge(Quadrant::Bottom);
    }

    if accepted.contains(AcceptedZones::CENTER) {
        Classification::Center
    } else {
        Classification::NotApplicable
    }
}

/// Classify `point` with the band metric selected by `activation`'s unit.
pub fn classify(
    accepted: AcceptedZones,
    point: Vec2,
    size: Size<f32>,
    activation: Sizing,
) -> Classification {
    profile_function!();
    let classification = match activation.unit {
        SizeUnit::Percentage => classify_with(
            &PercentageBand {
                threshold: activation.value,
            },
            accepted,
            point,
            size,
        ),
        SizeUnit::Pixels => classify_with(
            &PixelBand {
                threshold: activation.value,
            },
            accepted,
            point,
            size,
        ),
    };
    tracing::trace!(?point, ?size, ?classification, "classified pointer");
    classification
}

/// Zone detector bound to a target's accepted zones and activation sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZoneDetector {
    pub accepted: AcceptedZones,
    pub activation: Sizing,
}

impl Default for DropZoneDetector {
    fn default() -> Self {
        Self {
            accepted: AcceptedZones::all(),
            activation: OverlayModel::default().resolved_activation(),
        }
    }
}

impl DropZoneDetector {
    /// Create a detector accepting every zone with 20% bands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a detector from the accepted zones and an overlay model.
    pub fn from_model(accepted: AcceptedZones, model: &OverlayModel) -> Self {
        Self {
            accepted,
            activation: model.resolved_activation(),
        }
    }

    /// Restrict the zones this detector can report.
    pub fn with_accepted(mut self, accepted: AcceptedZones) -> Self {
        self.accepted = accepted;
        self
    }

    /// Change the band width.
    pub fn with_activation(mut self, activation: Sizing) -> Self {
        self.activation = activation;
        self
    }

    /// Classify a pointer position relative to the target's top-left corner.
    pub fn detect(&self, point: Vec2, size: Size<f32>) -> Classification {
        classify(self.accepted, point, size, self.activation)
    }
}
