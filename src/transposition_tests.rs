#[cfg(test)]
mod tests {
    use crate::games::adugo::{AdugoState, Side};
    use crate::transposition::TranspositionTable;

    #[test]
    fn starts_empty() {
        let table: TranspositionTable<AdugoState> = TranspositionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.lookup(&AdugoState::initial()), None);
    }

    #[test]
    fn store_then_lookup() {
        let mut table = TranspositionTable::new();
        let state = AdugoState::initial();
        table.store(state.clone(), 0.25);
        assert_eq!(table.lookup(&state), Some(0.25));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn side_to_move_distinguishes_otherwise_equal_boards() {
        let mut table = TranspositionTable::new();
        let jaguar_turn = AdugoState::initial();
        let mut dogs_turn = jaguar_turn.clone();
        dogs_turn.to_move = Side::Dogs;

        table.store(jaguar_turn.clone(), -0.5);
        assert_eq!(table.lookup(&jaguar_turn), Some(-0.5));
        assert_eq!(table.lookup(&dogs_turn), None, "keys must include the mover");

        table.store(dogs_turn.clone(), 0.5);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(&jaguar_turn), Some(-0.5));
        assert_eq!(table.lookup(&dogs_turn), Some(0.5));
    }

    #[test]
    fn store_overwrites_previous_value() {
        let mut table = TranspositionTable::new();
        let state = AdugoState::initial();
        table.store(state.clone(), 0.1);
        table.store(state.clone(), 0.9);
        assert_eq!(table.lookup(&state), Some(0.9));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn clear_empties_the_table() {
        let mut table = TranspositionTable::new();
        table.store(AdugoState::initial(), 0.0);
        assert!(!table.is_empty());
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.lookup(&AdugoState::initial()), None);
    }
}
