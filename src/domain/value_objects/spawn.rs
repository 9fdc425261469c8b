//! Spawn placement value objects - triggers, facing and coordinate regions

use serde::{Deserialize, Serialize};

use super::MonsterDefinitionId;

/// Policy controlling when a spawn area becomes active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnTrigger {
    /// Always active while the map is loaded
    Automatic,
    /// Active only while the map's event is running
    AutomaticDuringEvent,
    /// Active only while the current event wave is running
    AutomaticDuringWave,
    /// Spawned once when the event starts
    OnceAtEventStart,
    /// Spawned once when an event wave starts
    OnceAtWaveStart,
    /// Only spawned by explicit game logic
    ManuallyInvoked,
}

impl SpawnTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnTrigger::Automatic => "automatic",
            SpawnTrigger::AutomaticDuringEvent => "automatic_during_event",
            SpawnTrigger::AutomaticDuringWave => "automatic_during_wave",
            SpawnTrigger::OnceAtEventStart => "once_at_event_start",
            SpawnTrigger::OnceAtWaveStart => "once_at_wave_start",
            SpawnTrigger::ManuallyInvoked => "manually_invoked",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "automatic" => Some(SpawnTrigger::Automatic),
            "automatic_during_event" => Some(SpawnTrigger::AutomaticDuringEvent),
            "automatic_during_wave" => Some(SpawnTrigger::AutomaticDuringWave),
            "once_at_event_start" => Some(SpawnTrigger::OnceAtEventStart),
            "once_at_wave_start" => Some(SpawnTrigger::OnceAtWaveStart),
            "manually_invoked" => Some(SpawnTrigger::ManuallyInvoked),
            _ => None,
        }
    }

    /// Whether the trigger is tied to an event schedule
    pub fn is_event_bound(&self) -> bool {
        !matches!(self, SpawnTrigger::Automatic | SpawnTrigger::ManuallyInvoked)
    }
}

impl std::fmt::Display for SpawnTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facing of a monster or NPC placed at an exact point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    West,
    SouthWest,
    South,
    SouthEast,
    East,
    NorthEast,
    North,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::SouthWest => "south_west",
            Direction::South => "south",
            Direction::SouthEast => "south_east",
            Direction::East => "east",
            Direction::NorthEast => "north_east",
            Direction::North => "north",
            Direction::NorthWest => "north_west",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive rectangular region of map cells
///
/// A region with `x_min == x_max` and `y_min == y_max` is a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub x_min: u8,
    pub x_max: u8,
    pub y_min: u8,
    pub y_max: u8,
}

impl SpawnRegion {
    pub fn new(x_min: u8, x_max: u8, y_min: u8, y_max: u8) -> Result<Self, RegionError> {
        if x_min > x_max {
            return Err(RegionError::InvertedX { min: x_min, max: x_max });
        }
        if y_min > y_max {
            return Err(RegionError::InvertedY { min: y_min, max: y_max });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn point(x: u8, y: u8) -> Self {
        Self {
            x_min: x,
            x_max: x,
            y_min: y,
            y_max: y,
        }
    }

    pub fn is_point(&self) -> bool {
        self.x_min == self.x_max && self.y_min == self.y_max
    }

    pub fn is_well_formed(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }
}

/// Reasons a region cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    #[error("x range {min}..={max} is inverted")]
    InvertedX { min: u8, max: u8 },

    #[error("y range {min}..={max} is inverted")]
    InvertedY { min: u8, max: u8 },
}

/// A resolved reference to a monster definition from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterReference {
    pub id: MonsterDefinitionId,
    pub number: u16,
}

impl MonsterReference {
    pub fn new(id: MonsterDefinitionId, number: u16) -> Self {
        Self { id, number }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_region_is_a_point() {
        let region = SpawnRegion::new(58, 58, 140, 140).unwrap();
        assert!(region.is_point());
        assert_eq!(region, SpawnRegion::point(58, 140));
    }

    #[test]
    fn test_region_may_span_the_whole_axis() {
        let region = SpawnRegion::new(0, 255, 10, 20).unwrap();
        assert!(region.is_well_formed());
        assert!(!region.is_point());
        assert_eq!((region.x_min, region.x_max), (0, 255));
    }

    #[test]
    fn test_inverted_region_is_rejected() {
        assert_eq!(
            SpawnRegion::new(20, 10, 0, 0),
            Err(RegionError::InvertedX { min: 20, max: 10 })
        );
        assert_eq!(
            SpawnRegion::new(10, 20, 5, 4),
            Err(RegionError::InvertedY { min: 5, max: 4 })
        );
    }

    #[test]
    fn test_trigger_and_direction_text_forms() {
        for trigger in [
            SpawnTrigger::Automatic,
            SpawnTrigger::AutomaticDuringEvent,
            SpawnTrigger::AutomaticDuringWave,
            SpawnTrigger::OnceAtEventStart,
            SpawnTrigger::OnceAtWaveStart,
            SpawnTrigger::ManuallyInvoked,
        ] {
            assert_eq!(SpawnTrigger::parse(trigger.as_str()), Some(trigger));
        }
        for direction in Direction::ALL {
            assert_eq!(Direction::parse(direction.as_str()), Some(direction));
        }
        assert_eq!(SpawnTrigger::parse("sometimes"), None);
        assert!(SpawnTrigger::OnceAtWaveStart.is_event_bound());
        assert!(!SpawnTrigger::ManuallyInvoked.is_event_bound());
    }
}
