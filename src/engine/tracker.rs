use super::deck::{Card, CardId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackerState
{
    #[default]
    Idle,
    OneSelected(CardId),
    Evaluating(CardId, CardId),
}

/// Result of a single pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection
{
    Ignored,
    First(CardId),
    Pair(CardId, CardId),
}

/// Turns cards face-up and remembers which ones await comparison.
#[derive(Debug, Default)]
pub struct FlipTracker
{
    state: TrackerState,
}

impl FlipTracker
{
    pub fn state(&self) -> TrackerState
    {
        self.state
    }

    /// Flips `id` face-up if it is hidden and unmatched.
    ///
    /// Picks made while a pair is being evaluated, or on cards that are
    /// unknown, face-up or matched, leave everything untouched.
    pub fn select(&mut self, cards: &mut [Card], id: CardId) -> Selection
    {
        let first = match self.state {
            TrackerState::Idle => None,
            TrackerState::OneSelected(first) => Some(first),
            TrackerState::Evaluating(..) => return Selection::Ignored,
        };
        let Some(card) = cards.iter_mut().find(|card| card.id == id) else {
            return Selection::Ignored;
        };
        if !card.is_selectable() {
            return Selection::Ignored;
        }

        card.face_up = true;
        match first {
            None => {
                self.state = TrackerState::OneSelected(id);
                Selection::First(id)
            }
            Some(first) => {
                self.state = TrackerState::Evaluating(first, id);
                Selection::Pair(first, id)
            }
        }
    }

    pub fn clear(&mut self)
    {
        self.state = TrackerState::Idle;
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn cards() -> Vec<Card>
    {
        ["a", "a", "b", "b"]
            .iter()
            .enumerate()
            .map(|(idx, symbol)| Card {
                id: CardId(idx),
                symbol: *symbol,
                face_up: false,
                matched: false,
            })
            .collect()
    }

    #[test]
    fn walks_idle_one_selected_evaluating()
    {
        let mut cards = cards();
        let mut tracker = FlipTracker::default();
        assert_eq!(tracker.state(), TrackerState::Idle);

        assert_eq!(tracker.select(&mut cards, CardId(0)), Selection::First(CardId(0)));
        assert_eq!(tracker.state(), TrackerState::OneSelected(CardId(0)));
        assert!(cards[0].face_up);

        assert_eq!(
            tracker.select(&mut cards, CardId(2)),
            Selection::Pair(CardId(0), CardId(2))
        );
        assert_eq!(tracker.state(), TrackerState::Evaluating(CardId(0), CardId(2)));
        assert!(cards[2].face_up);
    }

    #[test]
    fn ignores_picks_while_evaluating()
    {
        let mut cards = cards();
        let mut tracker = FlipTracker::default();
        tracker.select(&mut cards, CardId(0));
        tracker.select(&mut cards, CardId(1));

        assert_eq!(tracker.select(&mut cards, CardId(3)), Selection::Ignored);
        assert!(!cards[3].face_up);
        assert_eq!(tracker.state(), TrackerState::Evaluating(CardId(0), CardId(1)));

        // Even an unknown id is rejected before the card lookup.
        assert_eq!(tracker.select(&mut cards, CardId(42)), Selection::Ignored);
        assert_eq!(tracker.state(), TrackerState::Evaluating(CardId(0), CardId(1)));
    }

    #[test]
    fn same_card_twice_is_a_no_op()
    {
        let mut cards = cards();
        let mut tracker = FlipTracker::default();
        tracker.select(&mut cards, CardId(1));
        let before = cards.clone();

        assert_eq!(tracker.select(&mut cards, CardId(1)), Selection::Ignored);
        assert_eq!(tracker.state(), TrackerState::OneSelected(CardId(1)));
        assert_eq!(cards, before);
    }

    #[test]
    fn matched_and_unknown_cards_are_ignored()
    {
        let mut cards = cards();
        cards[2].matched = true;
        cards[2].face_up = true;
        let mut tracker = FlipTracker::default();

        assert_eq!(tracker.select(&mut cards, CardId(2)), Selection::Ignored);
        assert_eq!(tracker.select(&mut cards, CardId(42)), Selection::Ignored);
        assert_eq!(tracker.state(), TrackerState::Idle);
    }

    #[test]
    fn clear_returns_to_idle()
    {
        let mut cards = cards();
        let mut tracker = FlipTracker::default();
        tracker.select(&mut cards, CardId(0));
        tracker.clear();
        assert_eq!(tracker.state(), TrackerState::Idle);

        assert_eq!(tracker.select(&mut cards, CardId(1)), Selection::First(CardId(1)));
    }
}
