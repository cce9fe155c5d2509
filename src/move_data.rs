use crate::errors::{CatalogError, CatalogResult};
use schema::{Element, MoveCategory, MoveDefinition, MoveEffect, StatKind, StatusKind, Target};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// File name the catalog is read from inside a data directory.
pub const MOVES_FILE: &str = "moves.ron";

// Built once on first use and shared read-only by every turn
static BUILTIN_MOVES: LazyLock<MoveCatalog> = LazyLock::new(MoveCatalog::from_builtin_table);

/// Read-only lookup table from move id to its definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveCatalog {
    moves: BTreeMap<String, MoveDefinition>,
}

impl MoveCatalog {
    /// The moves that ship with the game.
    pub fn builtin() -> &'static MoveCatalog {
        &BUILTIN_MOVES
    }

    /// Build a catalog from definitions, validating each one and rejecting duplicate ids.
    pub fn from_definitions(definitions: Vec<MoveDefinition>) -> CatalogResult<Self> {
        let mut moves = BTreeMap::new();
        for definition in definitions {
            definition
                .validate()
                .map_err(|reason| CatalogError::InvalidMove {
                    id: definition.id.clone(),
                    reason,
                })?;
            if moves.contains_key(&definition.id) {
                return Err(CatalogError::DuplicateId(definition.id));
            }
            moves.insert(definition.id.clone(), definition);
        }
        Ok(Self { moves })
    }

    /// Parse a RON list of `MoveDefinition`s.
    pub fn from_ron_str(content: &str) -> CatalogResult<Self> {
        let definitions: Vec<MoveDefinition> = ron::from_str(content)?;
        Self::from_definitions(definitions)
    }

    /// Load `moves.ron` from a data directory.
    pub fn load_from_dir(data_path: &Path) -> CatalogResult<Self> {
        let path = data_path.join(MOVES_FILE);
        let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_ron_str(&content)?;
        tracing::debug!(path = %path.display(), moves = catalog.len(), "loaded move catalog");
        Ok(catalog)
    }

    pub fn get(&self, move_id: &str) -> Option<&MoveDefinition> {
        self.moves.get(move_id)
    }

    pub fn contains(&self, move_id: &str) -> bool {
        self.moves.contains_key(move_id)
    }

    /// Move ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    fn from_builtin_table() -> Self {
        let moves = builtin_definitions()
            .into_iter()
            .map(|definition| (definition.id.clone(), definition))
            .collect();
        Self { moves }
    }
}

fn builtin_definitions() -> Vec<MoveDefinition> {
    vec![
        MoveDefinition {
            id: "leapStrike".to_string(),
            name: "Leap Strike".to_string(),
            element: Element::Electric,
            power: 25,
            category: MoveCategory::Offense,
            accuracy: None,
            effects: vec![],
        },
        MoveDefinition {
            id: "webSnare".to_string(),
            name: "Web Snare".to_string(),
            element: Element::Grass,
            power: 15,
            category: MoveCategory::Offense,
            accuracy: None,
            effects: vec![MoveEffect::StatChange {
                stat: StatKind::Spd,
                stages: -1,
                target: Target::Opponent,
            }],
        },
        MoveDefinition {
            id: "sporeBurst".to_string(),
            name: "Spore Burst".to_string(),
            element: Element::Poison,
            power: 20,
            category: MoveCategory::Offense,
            accuracy: None,
            effects: vec![MoveEffect::ApplyStatus {
                status: StatusKind::Poison,
                target: Target::Opponent,
                duration: None,
                chance: Some(0.3),
            }],
        },
        MoveDefinition {
            id: "harden".to_string(),
            name: "Harden".to_string(),
            element: Element::Normal,
            power: 0,
            category: MoveCategory::Defense,
            accuracy: None,
            effects: vec![MoveEffect::StatChange {
                stat: StatKind::Def,
                stages: 1,
                target: Target::User,
            }],
        },
        MoveDefinition {
            id: "wingSlice".to_string(),
            name: "Wing Slice".to_string(),
            element: Element::Flying,
            power: 30,
            category: MoveCategory::Offense,
            accuracy: Some(0.9),
            effects: vec![],
        },
        MoveDefinition {
            id: "toxicCloud".to_string(),
            name: "Toxic Cloud".to_string(),
            element: Element::Poison,
            power: 0,
            category: MoveCategory::Status,
            accuracy: None,
            effects: vec![MoveEffect::ApplyStatus {
                status: StatusKind::Poison,
                target: Target::Opponent,
                duration: None,
                chance: Some(0.75),
            }],
        },
        MoveDefinition {
            id: "dizzyDance".to_string(),
            name: "Dizzy Dance".to_string(),
            element: Element::Flying,
            power: 0,
            category: MoveCategory::Status,
            accuracy: None,
            effects: vec![MoveEffect::ApplyStatus {
                status: StatusKind::Confusion,
                target: Target::Opponent,
                duration: Some(4),
                chance: None,
            }],
        },
        MoveDefinition {
            id: "pollenHaze".to_string(),
            name: "Pollen Haze".to_string(),
            element: Element::Grass,
            power: 0,
            category: MoveCategory::Status,
            accuracy: None,
            effects: vec![
                MoveEffect::ApplyStatus {
                    status: StatusKind::Blindness,
                    target: Target::Opponent,
                    duration: Some(3),
                    chance: None,
                },
                MoveEffect::StatChange {
                    stat: StatKind::Evasion,
                    stages: 1,
                    target: Target::User,
                },
            ],
        },
        MoveDefinition {
            id: "focusStance".to_string(),
            name: "Focus Stance".to_string(),
            element: Element::Normal,
            power: 0,
            category: MoveCategory::Defense,
            accuracy: None,
            effects: vec![
                MoveEffect::StatChange {
                    stat: StatKind::Accuracy,
                    stages: 1,
                    target: Target::User,
                },
                MoveEffect::StatChange {
                    stat: StatKind::Atk,
                    stages: 1,
                    target: Target::User,
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = MoveCatalog::builtin();
        assert_eq!(catalog.len(), 9);
        for id in catalog.ids() {
            let definition = catalog.get(id).unwrap();
            assert_eq!(definition.id, id);
            assert!(
                definition.validate().is_ok(),
                "builtin move {} failed validation",
                id
            );
        }
    }

    #[test]
    fn test_builtin_lookup() {
        let harden = MoveCatalog::builtin().get("harden").unwrap();
        assert_eq!(harden.category, MoveCategory::Defense);
        assert_eq!(harden.power, 0);
        assert!(MoveCatalog::builtin().get("hyperBeam").is_none());
    }

    #[test]
    fn test_data_directory_matches_builtin_table() {
        let loaded = MoveCatalog::load_from_dir(Path::new("data")).unwrap();
        assert_eq!(&loaded, MoveCatalog::builtin());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let harden = MoveCatalog::builtin().get("harden").unwrap().clone();
        let result = MoveCatalog::from_definitions(vec![harden.clone(), harden]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "harden"));
    }

    #[test]
    fn test_invalid_definition_is_rejected() {
        let content = r#"[
            (
                id: "wildSwing",
                name: "Wild Swing",
                element: Normal,
                power: 40,
                category: Offense,
                accuracy: Some(1.4),
            ),
        ]"#;
        let result = MoveCatalog::from_ron_str(content);
        assert!(matches!(result, Err(CatalogError::InvalidMove { id, .. }) if id == "wildSwing"));
    }

    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        let result = MoveCatalog::from_ron_str("[ (id: ");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let result = MoveCatalog::load_from_dir(Path::new("does-not-exist"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
