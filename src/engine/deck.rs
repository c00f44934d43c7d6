use rand::Rng;

pub const SYMBOLS: [&str; 8] = ["🍎", "🍌", "🍇", "🍊", "🍓", "🍉", "🥝", "🍒"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

/// Board sizes offered on the selection screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairCount
{
    Four,
    #[default]
    Six,
    Eight,
}

impl PairCount
{
    pub const ALL: [PairCount; 3] = [PairCount::Four, PairCount::Six, PairCount::Eight];

    pub fn from_count(count: usize) -> Option<Self>
    {
        match count {
            4 => Some(PairCount::Four),
            6 => Some(PairCount::Six),
            8 => Some(PairCount::Eight),
            _ => None,
        }
    }

    pub fn pairs(self) -> usize
    {
        match self {
            PairCount::Four => 4,
            PairCount::Six => 6,
            PairCount::Eight => 8,
        }
    }

    pub fn cards(self) -> usize
    {
        self.pairs() * 2
    }

    pub fn symbols(self) -> &'static [&'static str]
    {
        &SYMBOLS[..self.pairs()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card
{
    pub id: CardId,
    pub symbol: &'static str,
    pub face_up: bool,
    pub matched: bool,
}

impl Card
{
    fn face_down(id: usize, symbol: &'static str) -> Self
    {
        Self {
            id: CardId(id),
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// A card can be picked only while it is hidden and still in play.
    pub fn is_selectable(&self) -> bool
    {
        !self.face_up && !self.matched
    }
}

/// Builds `2 * pairs` face-down cards, two per symbol, in random order.
///
/// Symbol `i` is carried by cards `2i` and `2i + 1`.
pub fn build_deck(pairs: PairCount, rng: &mut impl Rng) -> Vec<Card>
{
    let mut cards: Vec<Card> = pairs
        .symbols()
        .iter()
        .enumerate()
        .flat_map(|(index, symbol)| {
            [
                Card::face_down(index * 2, *symbol),
                Card::face_down(index * 2 + 1, *symbol),
            ]
        })
        .collect();
    shuffle(&mut cards, rng);
    cards
}

/// In-place Fisher–Yates: every permutation is equally likely.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl Rng)
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
