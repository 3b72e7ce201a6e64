//! The cleaning pipeline: a fixed, ordered list of [`Step`]s folded over the
//! input text.
//!
//! The order is part of the contract. Domain phrases and addresses are
//! substituted before generic URL/mention/hashtag handling, so a coin name
//! inside a link becomes a coin marker rather than disappearing with the
//! link. Markers are in place before repetition and whitespace reduction,
//! both of which leave them intact.

use std::fmt;

use crate::placeholder::{Category, PlaceholderMap};
use crate::steps;

// ─────────────────────────────────────────────────────────────────────────────
// Step
// ─────────────────────────────────────────────────────────────────────────────

/// One stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Lowercase,
    DomainPhrases,
    CryptoAddresses,
    Accents,
    Urls,
    Mentions,
    Hashtags,
    ResidualLinks,
    NewlinesTabs,
    Emoji,
    Repetition,
    Whitespace,
    Trim,
}

/// The fixed pipeline order used by [`TextCleaner::clean`].
pub const PIPELINE: [Step; 13] = [
    Step::Lowercase,
    Step::DomainPhrases,
    Step::CryptoAddresses,
    Step::Accents,
    Step::Urls,
    Step::Mentions,
    Step::Hashtags,
    Step::ResidualLinks,
    Step::NewlinesTabs,
    Step::Emoji,
    Step::Repetition,
    Step::Whitespace,
    Step::Trim,
];

impl Step {
    /// Run this stage on `text`, drawing markers from `markers`.
    pub fn apply(self, text: &str, markers: &PlaceholderMap) -> String {
        match self {
            Step::Lowercase => steps::to_lower(text),
            Step::DomainPhrases => steps::replace_domain_phrases(text, markers),
            Step::CryptoAddresses => {
                steps::replace_crypto_addresses(text, Some(markers.marker(Category::Address)))
            }
            Step::Accents => steps::remove_accents(text),
            Step::Urls => steps::replace_urls(text, Some(markers.marker(Category::Url))),
            Step::Mentions => steps::replace_mentions(text, Some(markers.marker(Category::Mention))),
            Step::Hashtags => steps::replace_hashtags(text, Some(markers.marker(Category::Hashtag))),
            Step::ResidualLinks => steps::remove_links(text),
            Step::NewlinesTabs => steps::remove_newlines_tabs(text),
            Step::Emoji => steps::remove_emoji(text),
            Step::Repetition => steps::reduce_repetition(text),
            Step::Whitespace => steps::normalize_whitespace(text),
            Step::Trim => steps::trim(text),
        }
    }

    /// Short snake_case name, used in logs and traces.
    pub fn name(self) -> &'static str {
        match self {
            Step::Lowercase => "lowercase",
            Step::DomainPhrases => "domain_phrases",
            Step::CryptoAddresses => "crypto_addresses",
            Step::Accents => "accents",
            Step::Urls => "urls",
            Step::Mentions => "mentions",
            Step::Hashtags => "hashtags",
            Step::ResidualLinks => "residual_links",
            Step::NewlinesTabs => "newlines_tabs",
            Step::Emoji => "emoji",
            Step::Repetition => "repetition",
            Step::Whitespace => "whitespace",
            Step::Trim => "trim",
        }
    }
}

/// Steps that see a marker of `category` once it is in the text.
///
/// Domain markers are inserted phrase by phrase, so the rest of the domain
/// step also runs over them.
pub(crate) fn after_insertion(category: Category) -> impl Iterator<Item = Step> {
    let (inserted_by, inclusive) = match category {
        Category::Coin | Category::Wallet | Category::Platform => (Step::DomainPhrases, true),
        Category::Address => (Step::CryptoAddresses, false),
        Category::Url => (Step::Urls, false),
        Category::Mention => (Step::Mentions, false),
        Category::Hashtag => (Step::Hashtags, false),
    };
    PIPELINE
        .into_iter()
        .skip_while(move |&step| step != inserted_by)
        .skip(usize::from(!inclusive))
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TextCleaner — full pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// Normalises noisy social-media posts about the coin into a canonical form.
///
/// ```
/// let cleaner = cmptk::TextCleaner::new();
/// assert_eq!(cleaner.clean("ISLM coin to the moon!!!"), "<COIN> to the moon!");
/// ```
///
/// The cleaner holds only an immutable [`PlaceholderMap`], so one instance
/// can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    placeholders: PlaceholderMap,
}

impl TextCleaner {
    /// Cleaner with the default `<COIN>`, `<URL>`, … markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cleaner that inserts the markers from `placeholders`.
    pub fn with_placeholders(placeholders: PlaceholderMap) -> Self {
        Self { placeholders }
    }

    /// The markers this cleaner inserts.
    pub fn placeholders(&self) -> &PlaceholderMap {
        &self.placeholders
    }

    /// Run every [`PIPELINE`] step over `text` and return the result.
    ///
    /// Never fails; empty input yields an empty string.
    pub fn clean(&self, text: &str) -> String {
        PIPELINE.iter().fold(text.to_string(), |acc, &step| {
            let out = step.apply(&acc, &self.placeholders);
            log::trace!("{}: {} -> {} bytes", step, acc.len(), out.len());
            out
        })
    }

    /// Like [`clean`](Self::clean) but keeps the text after every step.
    ///
    /// The last entry's text equals `clean(text)`.
    pub fn clean_traced(&self, text: &str) -> Vec<(Step, String)> {
        let mut trace = Vec::with_capacity(PIPELINE.len());
        let mut current = text.to_string();
        for step in PIPELINE {
            current = step.apply(&current, &self.placeholders);
            trace.push((step, current.clone()));
        }
        trace
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
