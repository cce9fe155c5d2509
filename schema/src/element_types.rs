use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Element {
    Normal,
    Electric,
    Grass,
    Poison,
    Flying,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Element {
    /// Effectiveness multiplier for an attacking element against a defending one.
    ///
    /// There is no matchup chart yet: every pairing is neutral.
    pub fn effectiveness(_attacking: Element, _defending: Element) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_matchup_is_neutral() {
        for attacking in Element::iter() {
            for defending in Element::iter() {
                assert_eq!(Element::effectiveness(attacking, defending), 1.0);
            }
        }
    }
}
