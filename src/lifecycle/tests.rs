// Tests for the repair workflow rules

#[cfg(test)]
mod tests {
    use super::super::engine::*;
    use super::super::types::*;
    use proptest::prelude::*;

    const EDGES: &[(&str, &str)] = &[
        ("AVARIADO", "EM REPARAÇÃO"),
        ("AVARIADO", "AGUARDANDO PEÇA"),
        ("EM REPARAÇÃO", "REPARADO"),
        ("EM REPARAÇÃO", "AGUARDANDO PEÇA"),
        ("EM REPARAÇÃO", "AVARIADO"),
        ("AGUARDANDO PEÇA", "EM REPARAÇÃO"),
        ("AGUARDANDO PEÇA", "AVARIADO"),
        ("REPARADO", "ENTREGUE AO CLIENTE"),
        ("REPARADO", "EM REPARAÇÃO"),
        ("ENTREGUE AO CLIENTE", "AVARIADO"),
    ];

    fn any_state() -> impl Strategy<Value = EquipmentState> {
        prop::sample::select(EquipmentState::ALL.to_vec())
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(EquipmentState::parse("  avariado "), Some(EquipmentState::Broken));
        assert_eq!(EquipmentState::parse("em reparação"), Some(EquipmentState::InRepair));
        assert_eq!(EquipmentState::parse("Aguardando Peça"), Some(EquipmentState::AwaitingPart));
        assert_eq!(EquipmentState::parse("entregue ao cliente\n"), Some(EquipmentState::Delivered));
        assert_eq!(EquipmentState::parse(""), None);
        assert_eq!(EquipmentState::parse("   "), None);
        assert_eq!(EquipmentState::parse("UNKNOWN"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_label() {
        let err = "PERDIDO".parse::<EquipmentState>().unwrap_err();
        assert_eq!(err, UnknownState("PERDIDO".to_string()));
        assert_eq!("reparado".parse::<EquipmentState>().unwrap(), EquipmentState::Repaired);
    }

    #[test]
    fn test_serde_uses_canonical_label() {
        let json = serde_json::to_string(&EquipmentState::AwaitingPart).unwrap();
        assert_eq!(json, "\"AGUARDANDO PEÇA\"");

        let parsed: EquipmentState = serde_json::from_str("\" em reparação \"").unwrap();
        assert_eq!(parsed, EquipmentState::InRepair);
        assert!(serde_json::from_str::<EquipmentState>("\"NOPE\"").is_err());
    }

    #[test]
    fn test_every_table_edge_is_valid() {
        for (from, to) in EDGES {
            assert!(is_valid_transition(from, to), "{from} -> {to} should be allowed");
        }
    }

    #[test]
    fn test_blank_input_is_never_a_valid_transition() {
        assert!(!is_valid_transition("", "AVARIADO"));
        assert!(!is_valid_transition("AVARIADO", "   "));
        assert!(!is_valid_transition("", ""));
    }

    #[test]
    fn test_valid_next_states_from_broken() {
        let expected = vec![EquipmentState::InRepair, EquipmentState::AwaitingPart];
        assert_eq!(valid_next_states("avariado"), expected);
        assert_eq!(valid_next_states("  AvArIaDo  "), expected);
        assert!(valid_next_states("").is_empty());
        assert!(valid_next_states("UNKNOWN").is_empty());
    }

    #[test]
    fn test_delivered_can_only_reopen() {
        assert_eq!(EquipmentState::Delivered.next_states(), &[EquipmentState::Broken]);
        assert!(!is_valid_transition("ENTREGUE AO CLIENTE", "REPARADO"));
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage("AVARIADO"), 25);
        assert_eq!(progress_percentage("EM REPARAÇÃO"), 50);
        assert_eq!(progress_percentage("AGUARDANDO PEÇA"), 50);
        assert_eq!(progress_percentage("REPARADO"), 75);
        assert_eq!(progress_percentage("ENTREGUE AO CLIENTE"), 100);
        assert_eq!(progress_percentage(""), 0);
        assert_eq!(progress_percentage("UNKNOWN"), 0);
    }

    #[test]
    fn test_phase_index_aliases_awaiting_part() {
        assert_eq!(phase_index("AVARIADO"), 0);
        assert_eq!(phase_index("aguardando peça"), 1);
        assert_eq!(phase_index("EM REPARAÇÃO"), 1);
        assert_eq!(phase_index("ENTREGUE AO CLIENTE"), 3);
        assert_eq!(phase_index("  "), -1);
        assert_eq!(phase_index("UNKNOWN"), -1);
    }

    #[test]
    fn test_phase_completion() {
        assert!(is_phase_completed("REPARADO", "AVARIADO"));
        assert!(!is_phase_completed("AVARIADO", "REPARADO"));
        assert!(!is_phase_completed("AGUARDANDO PEÇA", "EM REPARAÇÃO"));
        assert!(is_phase_completed("AGUARDANDO PEÇA", "AVARIADO"));
        assert!(!is_phase_completed("UNKNOWN", "AVARIADO"));
        assert!(!is_phase_completed("REPARADO", ""));
    }

    #[test]
    fn test_phase_activity() {
        assert!(is_phase_active("AGUARDANDO PEÇA", "EM REPARAÇÃO"));
        assert!(is_phase_active("reparado", "REPARADO"));
        assert!(!is_phase_active("EM REPARAÇÃO", "AGUARDANDO PEÇA"));
        assert!(!is_phase_active("", "AVARIADO"));
    }

    #[test]
    fn test_badge_class_fallback() {
        assert_eq!(state_badge_class("avariado"), "bg-danger text-white");
        assert_eq!(state_badge_class("ENTREGUE AO CLIENTE"), "bg-primary text-white");
        assert_eq!(state_badge_class(""), "bg-secondary text-white");
        assert_eq!(state_badge_class("UNKNOWN"), "bg-secondary text-white");
    }

    #[test]
    fn test_phase_order_matches_states() {
        for (position, phase) in Phase::ORDER.iter().enumerate() {
            assert_eq!(phase.index(), position);
            assert_eq!(phase.state().phase(), *phase);
        }
    }

    proptest! {
        #[test]
        fn prop_self_loop_always_allowed(state in any_state()) {
            prop_assert!(is_valid_transition(state.as_str(), state.as_str()));
            prop_assert!(state.can_transition_to(state));
        }

        #[test]
        fn prop_transitions_match_table(from in any_state(), to in any_state()) {
            let listed = EDGES.iter().any(|(a, b)| *a == from.as_str() && *b == to.as_str());
            let expected = listed || from == to;
            prop_assert_eq!(is_valid_transition(from.as_str(), to.as_str()), expected);
            prop_assert_eq!(from.can_transition_to(to), expected);
        }

        #[test]
        fn prop_case_and_padding_do_not_matter(from in any_state(), to in any_state()) {
            let padded_lower = format!("  {}  ", from.as_str().to_lowercase());
            prop_assert_eq!(
                is_valid_transition(&padded_lower, to.as_str()),
                is_valid_transition(from.as_str(), to.as_str())
            );
        }

        #[test]
        fn prop_progress_is_bounded_and_monotonic_in_phase(a in any_state(), b in any_state()) {
            prop_assert!(a.progress_percentage() <= 100);
            if a.phase_index() < b.phase_index() {
                prop_assert!(a.progress_percentage() < b.progress_percentage());
            }
        }
    }
}
