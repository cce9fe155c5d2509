use crate::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spd: u16,
    pub int: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub scientific_name: Option<String>, // Latin binomial or family
    pub element: Element,
    pub base_stats: BaseStats,
    pub moves: Vec<String>, // Move ids in the move catalog
}

impl SpeciesData {
    pub fn knows_move(&self, move_id: &str) -> bool {
        self.moves.iter().any(|known| known == move_id)
    }
}
