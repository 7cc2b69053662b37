// Deck state: the working order of the cards and the operations that change it.

use crate::types::{CardId, CardRecord, SEED_CARDS};

/// Cards in their current on-screen order.
pub struct Deck {
    cards: Vec<CardRecord>,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            cards: SEED_CARDS.to_vec(),
        }
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Remove the card at `from` and reinsert it at `to`. Every other card
    /// keeps its relative order.
    pub fn move_card(&mut self, from: usize, to: usize) {
        if from == to || from >= self.cards.len() || to >= self.cards.len() {
            return;
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
    }

    /// Finish a drag: `active` takes the position currently held by `over`.
    /// Returns true if the order actually changed.
    pub fn apply_drag_end(&mut self, active: CardId, over: Option<CardId>) -> bool {
        let Some(over) = over else {
            log::debug!("Card {} dropped outside the grid; order unchanged", active);
            return false;
        };
        if over == active {
            return false;
        }
        let (Some(from), Some(to)) = (self.position_of(active), self.position_of(over)) else {
            log::warn!("Drag end with unknown card id: active={}, over={}", active, over);
            return false;
        };
        self.move_card(from, to);
        log::info!("Moved card {} from position {} to {}", active, from, to);
        true
    }

    /// Restore the seeded arrangement. Returns true if anything moved.
    pub fn reset(&mut self) -> bool {
        if self.cards.iter().map(|c| c.id).eq(SEED_CARDS.iter().map(|c| c.id)) {
            return false;
        }
        self.cards = SEED_CARDS.to_vec();
        log::info!("Card order reset to the seeded arrangement");
        true
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(deck: &Deck) -> Vec<&'static str> {
        deck.cards().iter().map(|c| c.id.get()).collect()
    }

    #[test]
    fn seed_order_is_one_through_ten() {
        let deck = Deck::new();
        assert_eq!(ids(&deck), ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn dragging_three_onto_seven() {
        let mut deck = Deck::new();
        let changed = deck.apply_drag_end(CardId("3"), Some(CardId("7")));
        assert!(changed);
        assert_eq!(ids(&deck), ["1", "2", "4", "5", "6", "7", "3", "8", "9", "10"]);
    }

    #[test]
    fn dragging_backward_inserts_before_later_cards() {
        let mut deck = Deck::new();
        assert!(deck.apply_drag_end(CardId("7"), Some(CardId("3"))));
        assert_eq!(ids(&deck), ["1", "2", "7", "3", "4", "5", "6", "8", "9", "10"]);
    }

    #[test]
    fn dragging_to_either_end() {
        let mut deck = Deck::new();
        assert!(deck.apply_drag_end(CardId("10"), Some(CardId("1"))));
        assert_eq!(ids(&deck)[0], "10");

        let mut deck = Deck::new();
        assert!(deck.apply_drag_end(CardId("1"), Some(CardId("10"))));
        assert_eq!(ids(&deck)[9], "1");
    }

    #[test]
    fn dropping_on_itself_is_a_noop() {
        let mut deck = Deck::new();
        assert!(!deck.apply_drag_end(CardId("4"), Some(CardId("4"))));
        assert_eq!(ids(&deck), ids(&Deck::new()));
    }

    #[test]
    fn dropping_outside_is_a_noop() {
        let mut deck = Deck::new();
        assert!(!deck.apply_drag_end(CardId("4"), None));
        assert_eq!(ids(&deck), ids(&Deck::new()));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut deck = Deck::new();
        assert!(!deck.apply_drag_end(CardId("99"), Some(CardId("2"))));
        assert!(!deck.apply_drag_end(CardId("2"), Some(CardId("99"))));
        assert_eq!(ids(&deck), ids(&Deck::new()));
    }

    #[test]
    fn moves_permute_but_never_lose_cards() {
        let mut deck = Deck::new();
        deck.apply_drag_end(CardId("3"), Some(CardId("7")));
        deck.apply_drag_end(CardId("10"), Some(CardId("1")));
        deck.apply_drag_end(CardId("5"), Some(CardId("2")));

        let mut sorted = ids(&deck);
        sorted.sort_by_key(|id| id.parse::<u32>().unwrap());
        assert_eq!(sorted, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn untouched_cards_keep_their_relative_order() {
        let mut deck = Deck::new();
        deck.apply_drag_end(CardId("3"), Some(CardId("7")));
        let rest: Vec<&str> = ids(&deck).into_iter().filter(|id| *id != "3").collect();
        assert_eq!(rest, ["1", "2", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn reset_restores_the_seed() {
        let mut deck = Deck::new();
        deck.apply_drag_end(CardId("3"), Some(CardId("7")));
        deck.apply_drag_end(CardId("9"), Some(CardId("2")));

        assert!(deck.reset());
        assert_eq!(ids(&deck), ids(&Deck::new()));
        // Already seeded, nothing to do.
        assert!(!deck.reset());
    }

    #[test]
    fn move_card_ignores_out_of_range_indices() {
        let mut deck = Deck::new();
        deck.move_card(0, 42);
        deck.move_card(42, 0);
        assert_eq!(ids(&deck), ids(&Deck::new()));
    }
}
