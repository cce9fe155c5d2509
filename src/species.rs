use crate::combatant::Combatant;
use crate::errors::{CatalogError, CatalogResult};
use crate::move_data::MoveCatalog;
use schema::{BaseStats, Element, SpeciesData};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

pub const SPECIES_FILE: &str = "species.ron";

static BUILTIN_SPECIES: LazyLock<SpeciesCatalog> =
    LazyLock::new(SpeciesCatalog::from_builtin_table);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesCatalog {
    species: BTreeMap<String, SpeciesData>,
}

impl SpeciesCatalog {
    pub fn builtin() -> &'static SpeciesCatalog {
        &BUILTIN_SPECIES
    }

    pub fn from_species(entries: Vec<SpeciesData>) -> CatalogResult<Self> {
        let mut species = BTreeMap::new();
        for entry in entries {
            if species.contains_key(&entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            species.insert(entry.id.clone(), entry);
        }
        Ok(Self { species })
    }

    pub fn from_ron_str(content: &str) -> CatalogResult<Self> {
        let entries: Vec<SpeciesData> = ron::from_str(content)?;
        Self::from_species(entries)
    }

    /// Load `species.ron` from a data directory.
    pub fn load_from_dir(data_path: &Path) -> CatalogResult<Self> {
        let path = data_path.join(SPECIES_FILE);
        let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_ron_str(&content)?;
        tracing::debug!(path = %path.display(), species = catalog.len(), "loaded species catalog");
        Ok(catalog)
    }

    /// Checks that every move a species knows exists in `moves`.
    pub fn validate_against(&self, moves: &MoveCatalog) -> CatalogResult<()> {
        for entry in self.species.values() {
            if let Some(missing) = entry.moves.iter().find(|id| !moves.contains(id)) {
                return Err(CatalogError::UnknownMove {
                    species: entry.id.clone(),
                    move_id: missing.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, species_id: &str) -> Option<&SpeciesData> {
        self.species.get(species_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesData> {
        self.species.values()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Builds a full-health combatant for `species_id`, or `None` if the species is unknown.
    pub fn spawn(&self, combatant_id: impl Into<String>, species_id: &str) -> Option<Combatant> {
        self.get(species_id)
            .map(|data| Combatant::from_species(combatant_id, data))
    }

    fn from_builtin_table() -> Self {
        let species = builtin_species()
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect();
        Self { species }
    }
}

fn builtin_species() -> Vec<SpeciesData> {
    vec![
        SpeciesData {
            id: "jumpingSpider".to_string(),
            name: "Jumping Spider".to_string(),
            scientific_name: Some("Salticidae".to_string()),
            element: Element::Electric,
            base_stats: BaseStats {
                hp: 70,
                atk: 60,
                def: 40,
                spd: 55,
                int: 50,
            },
            moves: vec![
                "leapStrike".to_string(),
                "webSnare".to_string(),
                "dizzyDance".to_string(),
                "focusStance".to_string(),
            ],
        },
        SpeciesData {
            id: "puffballMushroom".to_string(),
            name: "Puffball".to_string(),
            scientific_name: Some("Lycoperdon perlatum".to_string()),
            element: Element::Poison,
            base_stats: BaseStats {
                hp: 90,
                atk: 30,
                def: 65,
                spd: 20,
                int: 40,
            },
            moves: vec![
                "sporeBurst".to_string(),
                "harden".to_string(),
                "toxicCloud".to_string(),
            ],
        },
        SpeciesData {
            id: "dragonfly".to_string(),
            name: "Dragonfly".to_string(),
            scientific_name: Some("Anisoptera".to_string()),
            element: Element::Flying,
            base_stats: BaseStats {
                hp: 65,
                atk: 55,
                def: 45,
                spd: 70,
                int: 45,
            },
            moves: vec![
                "wingSlice".to_string(),
                "webSnare".to_string(),
                "pollenHaze".to_string(),
            ],
        },
    ]
}
