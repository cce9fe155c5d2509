#[cfg(test)]
mod tests {
    use crate::battle::move_effects::{apply_move_effects, calculate_damage};
    use crate::battle::state::{LogCategory, TurnRng};
    use crate::battle::tests::common::TestCombatantBuilder;
    use crate::move_data::MoveCatalog;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Element, MoveCategory, MoveDefinition};

    fn strike(power: u16) -> MoveDefinition {
        MoveDefinition {
            id: "testStrike".to_string(),
            name: "Test Strike".to_string(),
            element: Element::Normal,
            power,
            category: MoveCategory::Offense,
            accuracy: None,
            effects: vec![],
        }
    }

    #[rstest]
    // power + atk/2 - def/3, rounded
    #[case(25, 60, 40, 42)]
    #[case(20, 30, 40, 22)]
    #[case(30, 55, 40, 44)]
    #[case(10, 10, 30, 5)]
    // never below one
    #[case(5, 10, 300, 1)]
    #[case(1, 1, 65, 1)]
    fn test_damage_formula(
        #[case] power: u16,
        #[case] atk: u16,
        #[case] def: u16,
        #[case] expected: u16,
    ) {
        let attacker = TestCombatantBuilder::new("jumpingSpider").with_atk(atk).build();
        let defender = TestCombatantBuilder::new("puffballMushroom").with_def(def).build();

        assert_eq!(calculate_damage(&strike(power), &attacker, &defender), expected);
    }

    #[test]
    fn test_damage_is_clamped_at_zero_hp() {
        let attacker = TestCombatantBuilder::new("jumpingSpider").build();
        let defender = TestCombatantBuilder::new("puffballMushroom").with_hp(10).build();
        let mut rng = TurnRng::new_for_test(vec![]);

        let outcome = apply_move_effects(&strike(80), &attacker, &defender, &mut rng);

        assert_eq!(outcome.defender.hp(), 0);
        assert!(outcome.defender_fainted);
        assert_eq!(outcome.damage_dealt, calculate_damage(&strike(80), &attacker, &defender));
        let categories: Vec<_> = outcome.log.iter().map(|m| m.category).collect();
        assert_eq!(categories, vec![LogCategory::Damage, LogCategory::Faint]);
    }

    #[test]
    fn test_non_damaging_moves_deal_no_damage() {
        let attacker = TestCombatantBuilder::new("puffballMushroom").build();
        let defender = TestCombatantBuilder::new("jumpingSpider").build();
        let mut rng = TurnRng::new_for_test(vec![]);
        let harden = MoveCatalog::builtin().get("harden").unwrap();

        let outcome = apply_move_effects(harden, &attacker, &defender, &mut rng);

        assert_eq!(outcome.damage_dealt, 0);
        assert_eq!(outcome.defender, defender);
        assert_eq!(outcome.attacker.stats.def, 75);
        assert!(outcome.effect_applied);
    }

    #[test]
    fn test_zero_power_offense_move_deals_no_damage() {
        let attacker = TestCombatantBuilder::new("jumpingSpider").build();
        let defender = TestCombatantBuilder::new("puffballMushroom").build();
        let mut rng = TurnRng::new_for_test(vec![]);

        let outcome = apply_move_effects(&strike(0), &attacker, &defender, &mut rng);

        assert_eq!(outcome.damage_dealt, 0);
        assert_eq!(outcome.defender.hp(), 90);
        assert!(outcome.log.is_empty());
        assert!(!outcome.effect_applied);
    }
}
