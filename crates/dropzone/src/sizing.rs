//! Activation band and overlay sizing.

use std::fmt;
use std::str::FromStr;

use crate::error::{DropTargetError, DropTargetResult};

/// Default width of the edge activation bands, in percent of the target.
pub const DEFAULT_ACTIVATION_PERCENT: f32 = 20.0;

/// Default overlay extent along the split axis, as a fraction of the target.
pub const DEFAULT_OVERLAY_FRACTION: f32 = 0.5;

/// Unit of a [`Sizing`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeUnit {
    /// Absolute distance in layout units.
    Pixels,
    /// Percentage (0-100) of the relevant target dimension.
    #[default]
    Percentage,
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeUnit::Pixels => f.write_str("pixels"),
            SizeUnit::Percentage => f.write_str("percentage"),
        }
    }
}

impl FromStr for SizeUnit {
    type Err = DropTargetError;

    fn from_str(s: &str) -> DropTargetResult<Self> {
        match s {
            "pixels" => Ok(SizeUnit::Pixels),
            "percentage" => Ok(SizeUnit::Percentage),
            other => Err(DropTargetError::InvalidSizeUnit(other.to_string())),
        }
    }
}

/// A length tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    pub value: f32,
    pub unit: SizeUnit,
}

impl Sizing {
    pub const fn pixels(value: f32) -> Self {
        Self {
            value,
            unit: SizeUnit::Pixels,
        }
    }

    pub const fn percentage(value: f32) -> Self {
        Self {
            value,
            unit: SizeUnit::Percentage,
        }
    }

    pub fn is_pixels(&self) -> bool {
        self.unit == SizeUnit::Pixels
    }

    pub fn is_percentage(&self) -> bool {
        self.unit == SizeUnit::Percentage
    }
}

/// Sizing knobs for the overlay and for zone detection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayModel {
    /// Extent of the drawn overlay. `None` draws half the target.
    pub size: Option<Sizing>,
    /// Width of the edge detection bands. `None` means 20%.
    pub activation_size: Option<Sizing>,
}

impl OverlayModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overlay extent.
    pub fn size(mut self, size: Sizing) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the edge band width.
    pub fn activation_size(mut self, activation_size: Sizing) -> Self {
        self.activation_size = Some(activation_size);
        self
    }

    /// Activation band with defaults filled in.
    ///
    /// Missing sizing falls back to 20%. A non-finite value keeps its unit
    /// but falls back to 20.
    pub fn resolved_activation(&self) -> Sizing {
        match self.activation_size {
            None => Sizing::percentage(DEFAULT_ACTIVATION_PERCENT),
            Some(sizing) if sizing.value.is_finite() => sizing,
            Some(sizing) => Sizing {
                value: DEFAULT_ACTIVATION_PERCENT,
                unit: sizing.unit,
            },
        }
    }
}
