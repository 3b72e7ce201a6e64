//! Placeholder markers — the fixed tokens that stand in for recognised
//! entities (coin names, wallets, addresses, links, …).
//!
//! Markers are inserted after the text has been lowercased, so the default
//! uppercase tags survive to the output and can never be re-matched by the
//! lowercase domain phrases.

use std::fmt;

use serde::Deserialize;

use crate::cleaner;
use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Semantic category of a placeholder marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Coin,
    Wallet,
    Platform,
    Address,
    Mention,
    Url,
    Hashtag,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Coin,
        Category::Wallet,
        Category::Platform,
        Category::Address,
        Category::Mention,
        Category::Url,
        Category::Hashtag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Coin => "coin",
            Category::Wallet => "wallet",
            Category::Platform => "platform",
            Category::Address => "address",
            Category::Mention => "mention",
            Category::Url => "url",
            Category::Hashtag => "hashtag",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON overrides
// ─────────────────────────────────────────────────────────────────────────────

/// Marker overrides as read from JSON; absent keys keep their default.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MarkerOverrides {
    coin: Option<String>,
    wallet: Option<String>,
    platform: Option<String>,
    #[serde(alias = "crypto_address")]
    address: Option<String>,
    mention: Option<String>,
    url: Option<String>,
    hashtag: Option<String>,
}

impl MarkerOverrides {
    fn into_pairs(self) -> [(Category, Option<String>); 7] {
        [
            (Category::Coin, self.coin),
            (Category::Wallet, self.wallet),
            (Category::Platform, self.platform),
            (Category::Address, self.address),
            (Category::Mention, self.mention),
            (Category::Url, self.url),
            (Category::Hashtag, self.hashtag),
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PlaceholderMap
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable mapping from [`Category`] to the literal marker inserted in its
/// place.
///
/// Every category always has a marker, so [`marker`](Self::marker) is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    markers: [String; 7],
}

impl Default for PlaceholderMap {
    fn default() -> Self {
        Self {
            markers: [
                " <COIN> ".to_string(),
                " <WALLET> ".to_string(),
                " <PLATFORM> ".to_string(),
                " <ADDRESS> ".to_string(),
                " <MENTION> ".to_string(),
                " <URL> ".to_string(),
                " <HASHTAG> ".to_string(),
            ],
        }
    }
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker literal for `category`, including its padding spaces.
    pub fn marker(&self, category: Category) -> &str {
        &self.markers[category.index()]
    }

    /// Return a copy of the map with the marker for `category` replaced.
    ///
    /// Blank markers are rejected; use the step functions directly with
    /// `None` to delete matches instead. So is any marker that the steps
    /// running after its insertion would rewrite, e.g. `" <COOOIN> "` or
    /// `" a/b "`: apart from padding, a marker reaches the output verbatim.
    pub fn with_marker(mut self, category: Category, marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        if marker.trim().is_empty() {
            return Err(Error::EmptyMarker(category));
        }
        self.markers[category.index()] = marker;

        let marker = self.marker(category);
        let settled = cleaner::after_insertion(category)
            .fold(marker.to_string(), |acc, step| step.apply(&acc, &self));
        if settled.trim() != marker.trim() {
            return Err(Error::UnstableMarker(category));
        }
        Ok(self)
    }

    /// Parse marker overrides from a JSON object keyed by category name.
    ///
    /// ```
    /// use cmptk::{Category, PlaceholderMap};
    ///
    /// let map = PlaceholderMap::from_json(r#"{ "coin": " [COIN] " }"#).unwrap();
    /// assert_eq!(map.marker(Category::Coin), " [COIN] ");
    /// assert_eq!(map.marker(Category::Url), " <URL> ");
    /// ```
    ///
    /// Missing keys keep their default marker. Unknown keys are an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: MarkerOverrides = serde_json::from_str(json)?;

        let mut map = Self::default();
        let mut applied = 0;
        for (category, marker) in overrides.into_pairs() {
            if let Some(marker) = marker {
                map = map.with_marker(category, marker)?;
                applied += 1;
            }
        }
        log::debug!("loaded {} placeholder override(s)", applied);
        Ok(map)
    }

    /// Iterate over `(category, marker)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL
            .iter()
            .map(move |&category| (category, self.marker(category)))
    }
}
