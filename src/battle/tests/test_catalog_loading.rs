#[cfg(test)]
mod tests {
    use crate::battle::state::{TurnOutcome, TurnRng};
    use crate::battle::turn_orchestrator::resolve_turn;
    use crate::errors::CatalogError;
    use crate::move_data::{MoveCatalog, MOVES_FILE};
    use crate::species::{SpeciesCatalog, SPECIES_FILE};
    use std::fs;

    const MOVES: &str = r#"[
        (
            id: "stingJab",
            name: "Sting Jab",
            element: Poison,
            power: 18,
            category: Offense,
            accuracy: Some(1.0),
            effects: [
                ApplyStatus(status: Poison, target: Opponent, chance: Some(1.0)),
            ],
        ),
        (
            id: "curlUp",
            name: "Curl Up",
            element: Normal,
            power: 0,
            category: Defense,
            effects: [
                StatChange(stat: Def, stages: 2, target: User),
            ],
        ),
    ]"#;

    const SPECIES: &str = r#"[
        (
            id: "pillBug",
            name: "Pill Bug",
            scientific_name: Some("Armadillidium vulgare"),
            element: Normal,
            base_stats: (hp: 60, atk: 35, def: 70, spd: 25, int: 30),
            moves: ["stingJab", "curlUp"],
        ),
    ]"#;

    #[test]
    fn test_catalogs_load_from_a_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MOVES_FILE), MOVES).unwrap();
        fs::write(dir.path().join(SPECIES_FILE), SPECIES).unwrap();

        let moves = MoveCatalog::load_from_dir(dir.path()).unwrap();
        let species = SpeciesCatalog::load_from_dir(dir.path()).unwrap();

        assert_eq!(moves.len(), 2);
        assert_eq!(species.len(), 1);
        assert!(species.validate_against(&moves).is_ok());
        assert!(species.validate_against(MoveCatalog::builtin()).is_err());
    }

    #[test]
    fn test_loaded_catalog_drives_a_turn() {
        let moves = MoveCatalog::from_ron_str(MOVES).unwrap();
        let species = SpeciesCatalog::from_ron_str(SPECIES).unwrap();
        let attacker = species.spawn("a-0", "pillBug").unwrap();
        let defender = species.spawn("b-0", "pillBug").unwrap();
        // accuracy, then the poison roll
        let mut rng = TurnRng::new_for_test(vec![0.99, 0.99]);

        let result = resolve_turn(&attacker, &defender, "stingJab", &moves, &mut rng);

        assert_eq!(result.outcome, TurnOutcome::Hit);
        assert!(result.defender.has_status(schema::StatusKind::Poison));
        // 18 + 35/2 - 70/3 = 12.17
        assert_eq!(result.defender.hp(), 60 - 12);
    }

    #[test]
    fn test_invalid_file_reports_the_move() {
        let dir = tempfile::tempdir().unwrap();
        let broken = MOVES.replace("stages: 2", "stages: 0");
        fs::write(dir.path().join(MOVES_FILE), broken).unwrap();

        let result = MoveCatalog::load_from_dir(dir.path());

        assert!(matches!(result, Err(CatalogError::InvalidMove { id, .. }) if id == "curlUp"));
    }
}
