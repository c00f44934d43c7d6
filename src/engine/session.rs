use super::deck::{Card, CardId, PairCount, build_deck};
use super::tracker::{FlipTracker, Selection, TrackerState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Handle for a scheduled flip-back.
///
/// Tokens carry the generation of the game that issued them; once the
/// session is reset, older tokens no longer apply to anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertToken
{
    generation: u64,
    seq: u64,
    due: Instant,
}

impl RevertToken
{
    /// When the two cards should be hidden again.
    pub fn due(&self) -> Instant
    {
        self.due
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingRevert
{
    token: RevertToken,
    cards: [CardId; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome
{
    Ignored,
    Flipped(CardId),
    Matched(CardId, CardId),
    Mismatched(RevertToken),
}

pub struct Session
{
    rng: ChaCha8Rng,
    reveal_delay: Duration,
    cards: Vec<Card>,
    tracker: FlipTracker,
    pair_count: Option<PairCount>,
    moves: u32,
    generation: u64,
    next_seq: u64,
    pending: Vec<PendingRevert>,
}

impl Session
{
    pub fn new(reveal_delay: Duration) -> Self
    {
        Self::with_rng(ChaCha8Rng::from_entropy(), reveal_delay)
    }

    pub fn seeded(seed: u64, reveal_delay: Duration) -> Self
    {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), reveal_delay)
    }

    fn with_rng(rng: ChaCha8Rng, reveal_delay: Duration) -> Self
    {
        Self {
            rng,
            reveal_delay,
            cards: Vec::new(),
            tracker: FlipTracker::default(),
            pair_count: None,
            moves: 0,
            generation: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Deals a fresh deck. Unsupported sizes are ignored.
    pub fn start_game(&mut self, pair_count: usize)
    {
        let Some(pairs) = PairCount::from_count(pair_count) else {
            return;
        };
        self.invalidate_reverts();
        self.cards = build_deck(pairs, &mut self.rng);
        self.tracker.clear();
        self.moves = 0;
        self.pair_count = Some(pairs);
    }

    /// Drops the board and goes back to size selection.
    pub fn end_game(&mut self)
    {
        self.invalidate_reverts();
        self.cards.clear();
        self.tracker.clear();
        self.moves = 0;
        self.pair_count = None;
    }

    pub fn select_card(&mut self, id: CardId, now: Instant) -> Outcome
    {
        self.tick(now);
        if !self.is_started() {
            return Outcome::Ignored;
        }

        match self.tracker.select(&mut self.cards, id) {
            Selection::Ignored => Outcome::Ignored,
            Selection::First(first) => Outcome::Flipped(first),
            Selection::Pair(first, second) => self.evaluate(first, second, now),
        }
    }

    /// Applies every flip-back whose deadline has passed.
    pub fn tick(&mut self, now: Instant)
    {
        if self.pending.is_empty() {
            return;
        }
        let (due, waiting): (Vec<PendingRevert>, Vec<PendingRevert>) =
            self.pending.iter().partition(|revert| revert.token.due <= now);
        self.pending = waiting;
        for revert in due {
            self.flip_back(revert.cards);
        }
    }

    /// Runs a scheduled flip-back directly.
    ///
    /// Returns false and changes nothing when the token belongs to an
    /// earlier game or was already applied.
    pub fn apply_revert(&mut self, token: RevertToken) -> bool
    {
        if token.generation != self.generation {
            return false;
        }
        let Some(index) = self.pending.iter().position(|revert| revert.token == token) else {
            return false;
        };
        let revert = self.pending.remove(index);
        self.flip_back(revert.cards);
        true
    }

    pub fn cards(&self) -> &[Card]
    {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card>
    {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn moves(&self) -> u32
    {
        self.moves
    }

    pub fn is_started(&self) -> bool
    {
        self.pair_count.is_some()
    }

    pub fn pair_count(&self) -> Option<PairCount>
    {
        self.pair_count
    }

    pub fn tracker_state(&self) -> TrackerState
    {
        self.tracker.state()
    }

    pub fn matched_pairs(&self) -> usize
    {
        self.cards.iter().filter(|card| card.matched).count() / 2
    }

    pub fn is_won(&self) -> bool
    {
        !self.cards.is_empty() && self.cards.iter().all(|card| card.matched)
    }

    fn evaluate(&mut self, first: CardId, second: CardId, now: Instant) -> Outcome
    {
        let same = match (self.card(first), self.card(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };
        self.moves += 1;
        self.tracker.clear();

        if same {
            for card in self.cards.iter_mut() {
                if card.id == first || card.id == second {
                    card.matched = true;
                }
            }
            return Outcome::Matched(first, second);
        }

        let token = RevertToken {
            generation: self.generation,
            seq: self.next_seq,
            due: now + self.reveal_delay,
        };
        self.next_seq += 1;
        self.pending.push(PendingRevert {
            token,
            cards: [first, second],
        });
        Outcome::Mismatched(token)
    }

    fn flip_back(&mut self, ids: [CardId; 2])
    {
        for card in self.cards.iter_mut() {
            if ids.contains(&card.id) && card.face_up && !card.matched {
                card.face_up = false;
            }
        }
    }

    fn invalidate_reverts(&mut self)
    {
        self.generation += 1;
        self.next_seq = 0;
        self.pending.clear();
    }
}
