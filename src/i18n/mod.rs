//! Translated UI strings.
//!
//! Keys use dotted namespaces (`presentation.rule1`, `hint.board`). A key
//! missing from the active language falls back to French, then to the
//! key itself. Counted strings pick their form from the language's CLDR
//! plural category and substitute `{{count}}`.

mod catalog;
mod plural;

use catalog::Message;
pub use plural::{PluralCategory, category};

pub const FALLBACK: Lang = Lang::Fr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang
{
    #[default]
    Fr,
    En,
    Vi,
    Es,
    Ko,
    Hi,
    It,
    Zh,
    Ar,
}

impl Lang
{
    pub const ALL: [Lang; 9] = [
        Lang::Fr,
        Lang::En,
        Lang::Vi,
        Lang::Es,
        Lang::Ko,
        Lang::Hi,
        Lang::It,
        Lang::Zh,
        Lang::Ar,
    ];

    pub fn code(self) -> &'static str
    {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
            Lang::Vi => "vi",
            Lang::Es => "es",
            Lang::Ko => "ko",
            Lang::Hi => "hi",
            Lang::It => "it",
            Lang::Zh => "zh",
            Lang::Ar => "ar",
        }
    }

    pub fn native_name(self) -> &'static str
    {
        match self {
            Lang::Fr => "Français",
            Lang::En => "English",
            Lang::Vi => "Tiếng Việt",
            Lang::Es => "Español",
            Lang::Ko => "한국어",
            Lang::Hi => "हिंदी",
            Lang::It => "Italiano",
            Lang::Zh => "中文",
            Lang::Ar => "العربية",
        }
    }

    /// Accepts bare codes and locale tags such as `en-US` or `pt_BR.UTF-8`.
    pub fn from_code(code: &str) -> Option<Self>
    {
        let primary = code
            .split(|ch: char| ch == '-' || ch == '_' || ch == '.')
            .next()?
            .to_ascii_lowercase();
        Lang::ALL.into_iter().find(|lang| lang.code() == primary)
    }

    pub fn next(self) -> Self
    {
        let idx = Lang::ALL.iter().position(|lang| *lang == self).unwrap_or(0);
        Lang::ALL[(idx + 1) % Lang::ALL.len()]
    }
}

/// String lookup handed to whatever renders the game.
pub trait Translate
{
    fn text(&self, key: &str) -> String;

    fn count(&self, key: &str, count: u64) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Catalog
{
    lang: Lang,
}

impl Catalog
{
    pub fn new(lang: Lang) -> Self
    {
        Self { lang }
    }

    pub fn lang(&self) -> Lang
    {
        self.lang
    }

    pub fn set_lang(&mut self, lang: Lang)
    {
        self.lang = lang;
    }

    fn resolve(&self, key: &str) -> Option<(Lang, &'static Message)>
    {
        catalog::lookup(self.lang, key)
            .map(|message| (self.lang, message))
            .or_else(|| catalog::lookup(FALLBACK, key).map(|message| (FALLBACK, message)))
    }
}

impl Translate for Catalog
{
    fn text(&self, key: &str) -> String
    {
        match self.resolve(key) {
            Some((_, Message::Text(text))) => text.to_string(),
            Some((lang, Message::Plural(_))) => self.count_in(lang, key, 1),
            None => key.to_string(),
        }
    }

    fn count(&self, key: &str, count: u64) -> String
    {
        match self.resolve(key) {
            Some((_, Message::Text(text))) => interpolate(text, count),
            Some((lang, Message::Plural(_))) => self.count_in(lang, key, count),
            None => key.to_string(),
        }
    }
}

impl Catalog
{
    fn count_in(&self, lang: Lang, key: &str, count: u64) -> String
    {
        let Some(Message::Plural(forms)) = catalog::lookup(lang, key) else {
            return key.to_string();
        };
        let wanted = category(lang, count);
        let form = forms
            .iter()
            .find(|(category, _)| *category == wanted)
            .or_else(|| forms.iter().find(|(category, _)| *category == PluralCategory::Other))
            .map(|(_, form)| *form)
            .unwrap_or(key);
        interpolate(form, count)
    }
}

fn interpolate(template: &str, count: u64) -> String
{
    template.replace("{{count}}", &count.to_string())
}
