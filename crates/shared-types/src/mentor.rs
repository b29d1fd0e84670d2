use serde::{Deserialize, Serialize};

/// A mentor profile shown in the matching carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub skills: Vec<String>,
    pub experience_years: u8,
    pub location: String,
    pub rating: f32,
    pub bio: String,
    pub mentees: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// The user's decision on the currently shown mentor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Pass,
    Connect,
}

/// Cursor over a fixed mentor list.
///
/// The list never shrinks; both decisions advance the cursor, wrapping
/// modulo the list length. An empty list is a dead end handled by the
/// rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deck {
    pub index: usize,
}

impl Deck {
    /// Step to the next card, wrapping around at the end of the list.
    pub fn advance(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_passes_on_three_cards_wrap_back_to_start() {
        let mut deck = Deck::default();
        deck.advance(3);
        assert_eq!(deck.index, 1);
        deck.advance(3);
        assert_eq!(deck.index, 2);
        deck.advance(3);
        assert_eq!(deck.index, 0);
    }

    #[test]
    fn advancing_an_empty_deck_stays_put() {
        let mut deck = Deck::default();
        deck.advance(0);
        assert_eq!(deck.index, 0);
    }

    #[test]
    fn single_card_deck_always_shows_the_same_card() {
        let mut deck = Deck::default();
        deck.advance(1);
        deck.advance(1);
        assert_eq!(deck.index, 0);
    }
}
