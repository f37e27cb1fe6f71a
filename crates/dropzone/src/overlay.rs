//! Overlay sizing and placement for the drop preview.
//!
//! The overlay starts out covering the whole target. For an edge zone it is
//! scaled down along the split axis and shifted towards that edge, so the
//! preview shows where the dropped item would end up. Axes shorter than
//! [`SMALL_DIMENSION`] keep the full-bleed overlay and report a
//! [`SmallEdges`] marker instead, leaving the styling to the host.

use std::fmt;

use bitflags::bitflags;
use dropzone_core::geometry::{Rect, Size};
use dropzone_core::math::Vec2;

use crate::sizing::{DEFAULT_OVERLAY_FRACTION, SizeUnit, Sizing};
use crate::zone::Quadrant;

/// Axes shorter than this are too small to shrink the overlay on.
pub const SMALL_DIMENSION: f32 = 100.0;

bitflags! {
    /// Presentation markers for edge zones on small targets.
    ///
    /// At most one marker is set at a time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SmallEdges: u8 {
        const SMALL_TOP    = 1 << 0;
        const SMALL_BOTTOM = 1 << 1;
        const SMALL_LEFT   = 1 << 2;
        const SMALL_RIGHT  = 1 << 3;
    }
}

impl SmallEdges {
    /// Class name for every marker, in toggle order.
    pub const CLASS_NAMES: [(SmallEdges, &'static str); 4] = [
        (SmallEdges::SMALL_RIGHT, "small-right"),
        (SmallEdges::SMALL_LEFT, "small-left"),
        (SmallEdges::SMALL_TOP, "small-top"),
        (SmallEdges::SMALL_BOTTOM, "small-bottom"),
    ];

    /// Class names of the markers that are set.
    pub fn class_names(self) -> impl Iterator<Item = &'static str> {
        Self::CLASS_NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

/// Displacement and scale applied to the full-size overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlayTransform {
    /// Overlay covers the whole target.
    #[default]
    Identity,
    /// Overlay is scaled along the quadrant's axis and pushed towards it.
    Edge {
        quadrant: Quadrant,
        /// Fraction of the target extent to shift by, always non-negative.
        translate: f32,
        scale: f32,
    },
}

impl OverlayTransform {
    /// Build the edge transform for an overlay covering `fraction` of the target.
    pub fn for_edge(quadrant: Quadrant, fraction: f32) -> Self {
        OverlayTransform::Edge {
            quadrant,
            translate: (1.0 - fraction) / 2.0,
            scale: fraction,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, OverlayTransform::Identity)
    }

    /// Signed displacement as a fraction of the target size.
    pub fn translation(&self) -> Vec2 {
        match *self {
            OverlayTransform::Identity => Vec2::ZERO,
            OverlayTransform::Edge {
                quadrant,
                translate,
                ..
            } => match quadrant {
                Quadrant::Right => Vec2::new(translate, 0.0),
                Quadrant::Left => Vec2::new(-translate, 0.0),
                Quadrant::Top => Vec2::new(0.0, -translate),
                Quadrant::Bottom => Vec2::new(0.0, translate),
            },
        }
    }

    /// Per-axis scale factors.
    pub fn scale(&self) -> Vec2 {
        match *self {
            OverlayTransform::Identity => Vec2::ONE,
            OverlayTransform::Edge {
                quadrant, scale, ..
            } => {
                if quadrant.is_horizontal() {
                    Vec2::new(scale, 1.0)
                } else {
                    Vec2::new(1.0, scale)
                }
            }
        }
    }

    /// Where the overlay ends up when drawn over `target`.
    ///
    /// Scaling happens around the target's center, as with a centered
    /// transform origin.
    pub fn apply(&self, target: Rect<f32>) -> Rect<f32> {
        let size = Vec2::new(target.width, target.height);
        let scaled = size * self.scale();
        let center = Vec2::new(target.x, target.y) + size / 2.0 + self.translation() * size;
        let origin = center - scaled / 2.0;
        Rect::new(origin.x, origin.y, scaled.x, scaled.y)
    }
}

/// CSS transform syntax; identity renders as an empty string.
impl fmt::Display for OverlayTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OverlayTransform::Identity => Ok(()),
            OverlayTransform::Edge {
                quadrant,
                translate,
                scale,
            } => {
                let percent = 100.0 * translate;
                match quadrant {
                    Quadrant::Right => write!(f, "translateX({}%) scaleX({})", percent, scale),
                    Quadrant::Left => write!(f, "translateX(-{}%) scaleX({})", percent, scale),
                    Quadrant::Top => write!(f, "translateY(-{}%) scaleY({})", percent, scale),
                    Quadrant::Bottom => write!(f, "translateY({}%) scaleY({})", percent, scale),
                }
            }
        }
    }
}

/// Everything the host needs to present the overlay for one hover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    pub transform: OverlayTransform,
    pub markers: SmallEdges,
}

impl OverlayGeometry {
    pub const FULL: OverlayGeometry = OverlayGeometry {
        transform: OverlayTransform::Identity,
        markers: SmallEdges::empty(),
    };

    /// Compute the overlay for `quadrant` (`None` means center) on a target of `size`.
    pub fn compute(quadrant: Option<Quadrant>, size: Size<f32>, sizing: Option<Sizing>) -> Self {
        let Some(quadrant) = quadrant else {
            return Self::FULL;
        };

        let small_x = size.width < SMALL_DIMENSION;
        let small_y = size.height < SMALL_DIMENSION;
        let small = if quadrant.is_horizontal() {
            small_x
        } else {
            small_y
        };

        if small {
            let marker = match quadrant {
                Quadrant::Top => SmallEdges::SMALL_TOP,
                Quadrant::Bottom => SmallEdges::SMALL_BOTTOM,
                Quadrant::Left => SmallEdges::SMALL_LEFT,
                Quadrant::Right => SmallEdges::SMALL_RIGHT,
            };
            return OverlayGeometry {
                transform: OverlayTransform::Identity,
                markers: marker,
            };
        }

        let extent = if quadrant.is_horizontal() {
            size.width
        } else {
            size.height
        };

        OverlayGeometry {
            transform: OverlayTransform::for_edge(quadrant, overlay_fraction(sizing, extent)),
            markers: SmallEdges::empty(),
        }
    }
}

/// Fraction of `extent` the overlay covers along the split axis.
pub fn overlay_fraction(sizing: Option<Sizing>, extent: f32) -> f32 {
    match sizing {
        None => DEFAULT_OVERLAY_FRACTION,
        Some(Sizing {
            value,
            unit: SizeUnit::Percentage,
        }) => value.max(0.0).min(100.0) / 100.0,
        Some(Sizing {
            value,
            unit: SizeUnit::Pixels,
        }) => value.max(0.0).min(extent) / extent,
    }
}
