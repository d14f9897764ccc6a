use serde::{Deserialize, Serialize};

/// Terrain type of a map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Plains,
    Forest,
    Fields,
    Bridge,
    Town,
    Shop,
    Major,
    Cave,
    Mountain,
    Hills,
}

/// A building the hero can enter from its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    Shop,
    Major,
    Cave,
}

impl Terrain {
    pub fn all() -> [Terrain; 10] {
        [
            Terrain::Plains,
            Terrain::Forest,
            Terrain::Fields,
            Terrain::Bridge,
            Terrain::Town,
            Terrain::Shop,
            Terrain::Major,
            Terrain::Cave,
            Terrain::Mountain,
            Terrain::Hills,
        ]
    }

    /// Text shown on the LOCATION line.
    pub fn display_text(&self) -> &'static str {
        match self {
            Terrain::Plains => "PLAINS",
            Terrain::Forest => "WOODS",
            Terrain::Fields => "FIELDS",
            Terrain::Bridge => "BRIDGE",
            Terrain::Town => "TOWN CENTER",
            Terrain::Shop => "SHOP",
            Terrain::Major => "MAJOR",
            Terrain::Cave => "CAVE",
            Terrain::Mountain => "MOUNTAIN",
            Terrain::Hills => "HILLS",
        }
    }

    /// Whether walking onto this terrain can start a random encounter.
    pub fn triggers_encounters(&self) -> bool {
        matches!(
            self,
            Terrain::Plains
                | Terrain::Forest
                | Terrain::Bridge
                | Terrain::Mountain
                | Terrain::Hills
        )
    }

    pub fn structure(&self) -> Option<Structure> {
        match self {
            Terrain::Shop => Some(Structure::Shop),
            Terrain::Major => Some(Structure::Major),
            Terrain::Cave => Some(Structure::Cave),
            _ => None,
        }
    }
}
