use super::Lang;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluralCategory
{
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// CLDR cardinal category for an integer count.
pub fn category(lang: Lang, count: u64) -> PluralCategory
{
    match lang {
        Lang::Fr | Lang::Hi => {
            if count <= 1 {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }
        Lang::En | Lang::Es | Lang::It => {
            if count == 1 {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }
        Lang::Vi | Lang::Ko | Lang::Zh => PluralCategory::Other,
        Lang::Ar => arabic(count),
    }
}

fn arabic(count: u64) -> PluralCategory
{
    match (count, count % 100) {
        (0, _) => PluralCategory::Zero,
        (1, _) => PluralCategory::One,
        (2, _) => PluralCategory::Two,
        (_, 3..=10) => PluralCategory::Few,
        (_, 11..=99) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}
