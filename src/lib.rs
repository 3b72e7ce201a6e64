//! # cmptk
//!
//! Text normalisation for crypto-community social-media posts about
//! ISLM / Haqq. Turns noisy, informal text into a canonical form ready for
//! tokenisation or model input.
//!
//! ## Quick start
//!
//! ```
//! use cmptk::TextCleaner;
//!
//! let cleaner = TextCleaner::new();
//! assert_eq!(cleaner.clean("Málaga café"), "malaga cafe");
//! assert_eq!(cleaner.clean("Helloooo     world"), "helloo world");
//! ```
//!
//! Markers can be swapped out without touching the pipeline:
//!
//! ```
//! use cmptk::{PlaceholderMap, TextCleaner};
//!
//! let map = PlaceholderMap::from_json(r#"{ "mention": " @user " }"#)?;
//! let cleaner = TextCleaner::with_placeholders(map);
//! assert_eq!(cleaner.clean("gm @alice"), "gm @user");
//! # Ok::<(), cmptk::Error>(())
//! ```
//!
//! ## Pipeline
//! 1. **Lowercase**
//! 2. **Domain phrases** — coin, wallet and platform names → `<COIN>`, `<WALLET>`, `<PLATFORM>`.
//! 3. **Addresses** — `0x` + 40 hex digits → `<ADDRESS>`.
//! 4. **Accents** — transliterate to ASCII.
//! 5. **URLs** → `<URL>`.
//! 6. **Mentions** → `<MENTION>`.
//! 7. **Hashtags** → `<HASHTAG>`.
//! 8. **Residual links** — leftover `http…` fragments and `x.com` tokens removed.
//! 9. **Newlines / tabs / backslashes** → spaces; slashes removed.
//! 10. **Emoji** removed.
//! 11. **Repetition** — letters capped at two, punctuation at one.
//! 12. **Whitespace** collapsed; a space forced after `?` and `)`.
//! 13. **Trim**.
//!
//! Every step is a pure function in [`steps`]; the order lives in
//! [`cleaner::PIPELINE`].

pub mod cleaner;
pub mod error;
pub mod placeholder;
pub mod steps;

// ─── Re-exports for convenience ─────────────────────────────────────────────

pub use cleaner::{Step, TextCleaner, PIPELINE};
pub use error::{Error, Result};
pub use placeholder::{Category, PlaceholderMap};
