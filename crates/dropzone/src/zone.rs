//! Zone, quadrant and direction types.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{DropTargetError, DropTargetResult};

/// Region of a drop target where a dragged item would land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropZone {
    /// Top edge band.
    Top,
    /// Left edge band.
    Left,
    /// Bottom edge band.
    Bottom,
    /// Right edge band.
    Right,
    /// Everything outside the edge bands.
    Center,
}

impl DropZone {
    /// The edge quadrant for this zone, or `None` for [`DropZone::Center`].
    pub fn quadrant(&self) -> Option<Quadrant> {
        match self {
            DropZone::Top => Some(Quadrant::Top),
            DropZone::Left => Some(Quadrant::Left),
            DropZone::Bottom => Some(Quadrant::Bottom),
            DropZone::Right => Some(Quadrant::Right),
            DropZone::Center => None,
        }
    }

    pub fn is_edge(&self) -> bool {
        !matches!(self, DropZone::Center)
    }

    pub fn is_center(&self) -> bool {
        matches!(self, DropZone::Center)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropZone::Top => "top",
            DropZone::Left => "left",
            DropZone::Bottom => "bottom",
            DropZone::Right => "right",
            DropZone::Center => "center",
        }
    }
}

impl fmt::Display for DropZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropZone {
    type Err = DropTargetError;

    fn from_str(s: &str) -> DropTargetResult<Self> {
        match s {
            "top" => Ok(DropZone::Top),
            "left" => Ok(DropZone::Left),
            "bottom" => Ok(DropZone::Bottom),
            "right" => Ok(DropZone::Right),
            "center" => Ok(DropZone::Center),
            other => Err(DropTargetError::InvalidZone(other.to_string())),
        }
    }
}

/// One of the four edge bands of a drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Top,
    Bottom,
    Left,
    Right,
}

impl Quadrant {
    /// Whether this quadrant splits along the X axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Quadrant::Left | Quadrant::Right)
    }
}

impl From<Quadrant> for DropZone {
    fn from(quadrant: Quadrant) -> Self {
        match quadrant {
            Quadrant::Top => DropZone::Top,
            Quadrant::Bottom => DropZone::Bottom,
            Quadrant::Left => DropZone::Left,
            Quadrant::Right => DropZone::Right,
        }
    }
}

bitflags! {
    /// Set of zones a drop target is willing to highlight.
    ///
    /// Without [`AcceptedZones::CENTER`] a pointer outside every accepted
    /// edge band is not over a drop zone at all. An empty set turns the
    /// target into a plain "something is dragged over me" indicator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AcceptedZones: u8 {
        const TOP    = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT   = 1 << 2;
        const RIGHT  = 1 << 3;
        const CENTER = 1 << 4;

        const EDGES = Self::TOP.bits() | Self::BOTTOM.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl AcceptedZones {
    /// Build a set from zone names such as `"left"` or `"center"`.
    pub fn from_names<I, S>(names: I) -> DropTargetResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<DropZone>())
            .collect()
    }

    pub fn accepts(&self, zone: DropZone) -> bool {
        self.contains(AcceptedZones::from(zone))
    }

    pub fn accepts_quadrant(&self, quadrant: Quadrant) -> bool {
        self.accepts(quadrant.into())
    }
}

impl From<DropZone> for AcceptedZones {
    fn from(zone: DropZone) -> Self {
        match zone {
            DropZone::Top => AcceptedZones::TOP,
            DropZone::Left => AcceptedZones::LEFT,
            DropZone::Bottom => AcceptedZones::BOTTOM,
            DropZone::Right => AcceptedZones::RIGHT,
            DropZone::Center => AcceptedZones::CENTER,
        }
    }
}

impl FromIterator<DropZone> for AcceptedZones {
    fn from_iter<I: IntoIterator<Item = DropZone>>(iter: I) -> Self {
        iter.into_iter()
            .fold(AcceptedZones::empty(), |set, zone| set | AcceptedZones::from(zone))
    }
}

/// Placement direction used by layout code when inserting next to a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Above,
    Below,
    Left,
    Right,
    Within,
}

impl FromStr for Direction {
    type Err = DropTargetError;

    fn from_str(s: &str) -> DropTargetResult<Self> {
        match s {
            "above" => Ok(Direction::Above),
            "below" => Ok(Direction::Below),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "within" => Ok(Direction::Within),
            other => Err(DropTargetError::InvalidDirection(other.to_string())),
        }
    }
}

impl From<Direction> for DropZone {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Above => DropZone::Top,
            Direction::Below => DropZone::Bottom,
            Direction::Left => DropZone::Left,
            Direction::Right => DropZone::Right,
            Direction::Within => DropZone::Center,
        }
    }
}

/// Map a direction name straight to its zone.
///
/// Unknown names are an error; there is no fallback zone.
pub fn direction_to_zone(direction: &str) -> DropTargetResult<DropZone> {
    direction.parse::<Direction>().map(DropZone::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_mapping() {
        assert_eq!(direction_to_zone("above"), Ok(DropZone::Top));
        assert_eq!(direction_to_zone("below"), Ok(DropZone::Bottom));
        assert_eq!(direction_to_zone("left"), Ok(DropZone::Left));
        assert_eq!(direction_to_zone("right"), Ok(DropZone::Right));
        assert_eq!(direction_to_zone("within"), Ok(DropZone::Center));
    }

    #[test]
    fn test_unknown_direction_fails() {
        assert_eq!(
            direction_to_zone("sideways"),
            Err(DropTargetError::InvalidDirection("sideways".to_string()))
        );
    }

    #[test]
    fn test_accepted_from_names() {
        let zones = AcceptedZones::from_names(["left", "right", "center"]).unwrap();
        assert!(zones.accepts(DropZone::Left));
        assert!(zones.accepts(DropZone::Right));
        assert!(zones.accepts(DropZone::Center));
        assert!(!zones.accepts(DropZone::Top));
        assert!(!zones.accepts_quadrant(Quadrant::Bottom));
    }

    #[test]
    fn test_accepted_from_names_rejects_unknown() {
        let result = AcceptedZones::from_names(["left", "middle"]);
        assert_eq!(result, Err(DropTargetError::InvalidZone("middle".to_string())));
    }

    #[test]
    fn test_empty_names_is_indicator_only() {
        let zones = AcceptedZones::from_names(Vec::<&str>::new()).unwrap();
        assert!(zones.is_empty());
    }

    #[test]
    fn test_zone_quadrant_round_trip() {
        for quadrant in [Quadrant::Top, Quadrant::Bottom, Quadrant::Left, Quadrant::Right] {
            assert_eq!(DropZone::from(quadrant).quadrant(), Some(quadrant));
        }
        assert_eq!(DropZone::Center.quadrant(), None);
    }
}
