//! The individual text transformations that make up the cleaning pipeline.
//!
//! Every function here is pure and total: a pattern that does not match is a
//! no-op. They are public so each stage can be exercised in isolation; the
//! order in which [`TextCleaner`](crate::TextCleaner) applies them lives in
//! [`cleaner`](crate::cleaner).
//!
//! Functions that take `replace_with: Option<&str>` delete the match on
//! `None` and substitute the literal string otherwise (no `$` expansion).

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};

use crate::placeholder::{Category, PlaceholderMap};

// ─────────────────────────────────────────────────────────────────────────────
// Domain vocabulary
// ─────────────────────────────────────────────────────────────────────────────

/// Literal phrases replaced by [`replace_domain_phrases`], in application
/// order. Longer phrases precede the shorter aliases they contain.
pub const DOMAIN_PHRASES: &[(&str, Category)] = &[
    ("islm coin", Category::Coin),
    ("islamiccoin", Category::Coin),
    ("islamic coin", Category::Coin),
    ("islm", Category::Coin),
    ("haqq wallet", Category::Wallet),
    ("haqq network", Category::Wallet),
    ("haqq", Category::Wallet),
    ("galxe", Category::Platform),
];

// ─────────────────────────────────────────────────────────────────────────────
// Compiled regexes (lazily initialised once)
// ─────────────────────────────────────────────────────────────────────────────

static RE_ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b0x[0-9a-fA-F]{40}\b").unwrap());
static RE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static RE_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static RE_HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static RE_HTTP_FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").unwrap());
static RE_DOT_COM: Lazy<Regex> = Lazy::new(|| Regex::new(r" [A-Za-z]*\.com").unwrap());
static RE_EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F300}-\x{1F5FF}", // symbols & pictographs
        r"\x{1F680}-\x{1F6FF}", // transport & map
        r"\x{1F1E0}-\x{1F1FF}", // flags
        r"\x{2702}-\x{27B0}",
        r"\x{24C2}-\x{1F251}",
        r"\x{1F926}-\x{1F937}",
        r"\x{10000}-\x{10FFFF}",
        r"\x{200D}",
        r"\x{2640}-\x{2642}",
        r"\x{2600}-\x{2B55}",
        r"\x{23CF}",
        r"\x{23E9}",
        r"\x{231A}",
        r"\x{3030}",
        r"\x{FE0F}",
        "]+",
    ))
    .unwrap()
});
static RE_RESIDUAL_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https://\S+|www\.\S+").unwrap());
static RE_MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// A run of any single ASCII letter, as one alternation branch per letter.
static RE_REPEATED_ALPHA: Lazy<Regex> = Lazy::new(|| {
    let branches: Vec<String> = ('a'..='z')
        .chain('A'..='Z')
        .map(|c| format!("{}{{2,}}", c))
        .collect();
    Regex::new(&branches.join("|")).unwrap()
});
static RE_REPEATED_PUNCT: Lazy<Regex> = Lazy::new(|| {
    let branches: Vec<String> = REPEATABLE_PUNCTUATION
        .chars()
        .map(|c| format!("(?:{}){{2,}}", regex::escape(&c.to_string())))
        .collect();
    Regex::new(&branches.join("|")).unwrap()
});
static RE_FUSE_POINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?)]").unwrap());

/// Punctuation whose runs [`reduce_repetition`] collapses to one character.
const REPEATABLE_PUNCTUATION: &str = ".,/#!$%^&*?;:{}=_`~()+-";

fn replace_or_remove(re: &Regex, text: &str, replace_with: Option<&str>) -> String {
    re.replace_all(text, NoExpand(replace_with.unwrap_or("")))
        .into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Steps, in pipeline order
// ─────────────────────────────────────────────────────────────────────────────

/// Step 1: Unicode lowercase.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Step 2: literal replacement of [`DOMAIN_PHRASES`] by their category
/// markers. Expects already-lowercased text.
pub fn replace_domain_phrases(text: &str, markers: &PlaceholderMap) -> String {
    DOMAIN_PHRASES
        .iter()
        .fold(text.to_string(), |acc, &(phrase, category)| {
            acc.replace(phrase, markers.marker(category))
        })
}

/// Step 3: `0x`-prefixed 40-hex-digit addresses.
pub fn replace_crypto_addresses(text: &str, replace_with: Option<&str>) -> String {
    replace_or_remove(&RE_ADDRESS, text, replace_with)
}

/// Step 4: transliterate to ASCII (`á` → `a`). Characters outside the
/// transliteration tables, such as astral-plane pictographs, are dropped.
pub fn remove_accents(text: &str) -> String {
    unidecode::unidecode(text)
}

/// Step 5: `http(s)://…` and `www.…` tokens.
pub fn replace_urls(text: &str, replace_with: Option<&str>) -> String {
    replace_or_remove(&RE_URL, text, replace_with)
}

/// Step 6: `@handle` tokens.
pub fn replace_mentions(text: &str, replace_with: Option<&str>) -> String {
    replace_or_remove(&RE_MENTION, text, replace_with)
}

/// Step 7: `#tag` tokens.
pub fn replace_hashtags(text: &str, replace_with: Option<&str>) -> String {
    replace_or_remove(&RE_HASHTAG, text, replace_with)
}

/// Step 8: drop leftover `http…` fragments, then replace space-led
/// `word.com` tokens with a single space.
pub fn remove_links(text: &str) -> String {
    let text = RE_HTTP_FRAGMENT.replace_all(text, "");
    RE_DOT_COM.replace_all(&text, " ").into_owned()
}

/// Step 9: turn newlines, tabs, backslashes and escaped `\n` pairs into
/// spaces, re-join `. com` and strip forward slashes.
pub fn remove_newlines_tabs(text: &str) -> String {
    text.replace("\\n", " ")
        .replace('\n', " ")
        .replace('\t', " ")
        .replace('\\', " ")
        .replace(". com", ".com")
        .replace('/', "")
}

/// Step 10: delete emoji/pictograph/symbol runs, then any `https://` or
/// `www.` substring still present.
pub fn remove_emoji(text: &str) -> String {
    let text = RE_EMOJI.replace_all(text, "");
    RE_RESIDUAL_URL.replace_all(&text, "").into_owned()
}

/// Step 11: `Realllllyyy,   !!!!` → `Reallyy, !`.
///
/// Runs of one ASCII letter keep two copies, runs of one punctuation mark
/// keep one, and runs of two or more spaces become one.
pub fn reduce_repetition(text: &str) -> String {
    // Runs are ASCII, so byte slicing stays on char boundaries.
    let text = RE_REPEATED_ALPHA.replace_all(text, |caps: &Captures| caps[0][..2].to_string());
    let text = RE_REPEATED_PUNCT.replace_all(&text, |caps: &Captures| caps[0][..1].to_string());
    RE_MULTI_SPACE.replace_all(&text, " ").into_owned()
}

/// Step 12: collapse whitespace runs to one space and make sure every `?`
/// and `)` is followed by whitespace.
///
/// Only those two characters get the trailing space; other punctuation is
/// left attached.
pub fn normalize_whitespace(text: &str) -> String {
    let text = RE_WHITESPACE.replace_all(text, " ");

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut last = 0;
    for m in RE_FUSE_POINT.find_iter(&text) {
        out.push_str(&text[last..m.end()]);
        if !text[m.end()..].starts_with(char::is_whitespace) {
            out.push(' ');
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Step 13: strip leading and trailing whitespace.
pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0xabcdef0123456789abcdef0123456789abcdef01";

    #[test]
    fn test_to_lower() {
        assert_eq!(to_lower("ISLM To The MOON"), "islm to the moon");
        assert_eq!(to_lower("ÁRBOL"), "árbol");
    }

    #[test]
    fn test_domain_phrases_longest_first() {
        let map = PlaceholderMap::default();
        assert_eq!(replace_domain_phrases("islm coin", &map), " <COIN> ");
        assert_eq!(replace_domain_phrases("islamic coin rocks", &map), " <COIN>  rocks");
        assert_eq!(replace_domain_phrases("haqq network", &map), " <WALLET> ");
        assert_eq!(replace_domain_phrases("on galxe", &map), "on  <PLATFORM> ");
    }

    #[test]
    fn test_domain_phrases_substring_match() {
        // Literal replacement, no word boundaries.
        let map = PlaceholderMap::default();
        assert_eq!(replace_domain_phrases("#islmcoin", &map), "# <COIN> coin");
    }

    #[test]
    fn test_domain_phrases_case_sensitive() {
        let map = PlaceholderMap::default();
        assert_eq!(replace_domain_phrases("ISLM", &map), "ISLM");
    }

    #[test]
    fn test_crypto_addresses() {
        let text = format!("send to {} now", ADDRESS);
        assert_eq!(
            replace_crypto_addresses(&text, Some(" <ADDRESS> ")),
            "send to  <ADDRESS>  now"
        );
        assert_eq!(replace_crypto_addresses(&text, None), "send to  now");
    }

    #[test]
    fn test_crypto_addresses_length_is_exact() {
        let too_long = format!("{}f", ADDRESS);
        assert_eq!(replace_crypto_addresses(&too_long, None), too_long);
        let too_short = &ADDRESS[..41];
        assert_eq!(replace_crypto_addresses(too_short, None), too_short);
    }

    #[test]
    fn test_remove_accents() {
        assert_eq!(remove_accents("Málaga, àéêöhello"), "Malaga, aeeohello");
        assert_eq!(remove_accents("plain ascii"), "plain ascii");
    }

    #[test]
    fn test_replace_urls() {
        assert_eq!(
            replace_urls("see https://x.io/a?b=1 and www.site.org", Some(" <URL> ")),
            "see  <URL>  and  <URL> "
        );
        assert_eq!(replace_urls("see http://x.io", None), "see ");
    }

    #[test]
    fn test_replacement_is_literal() {
        assert_eq!(replace_mentions("@bob", Some("$1")), "$1");
    }

    #[test]
    fn test_mentions_and_hashtags() {
        assert_eq!(replace_mentions("hi @john_doe!", Some(" <MENTION> ")), "hi  <MENTION> !");
        assert_eq!(replace_mentions("hi @john", None), "hi ");
        assert_eq!(replace_hashtags("#defi #web3 rules", Some(" <HASHTAG> ")), " <HASHTAG>   <HASHTAG>  rules");
        assert_eq!(replace_hashtags("# alone", Some(" <HASHTAG> ")), "# alone");
    }

    #[test]
    fn test_remove_links() {
        assert_eq!(
            remove_links("To know more about this website: kajalyadav.com  visit: https://kajalyadav.com//Blogs"),
            "To know more about this website:   visit: "
        );
    }

    #[test]
    fn test_remove_newlines_tabs() {
        assert_eq!(
            remove_newlines_tabs("This is her \\ first day at this place.\n Please,\t Be nice to her.\\n"),
            "This is her   first day at this place.  Please,  Be nice to her. "
        );
        assert_eq!(remove_newlines_tabs("site. com/path"), "site.compath");
    }

    #[test]
    fn test_remove_emoji() {
        assert_eq!(remove_emoji("hi 😊👍 there\u{200D}\u{FE0F}"), "hi  there");
        assert_eq!(remove_emoji("left www.x.io right"), "left  right");
        assert_eq!(remove_emoji("keep http://x.io"), "keep http://x.io");
    }

    #[test]
    fn test_reduce_repetition() {
        assert_eq!(
            reduce_repetition("Realllllllllyyyyy,        Greeeeaaaatttt   !!!!?....;;;;:)"),
            "Reallyy, Greeaatt !?.;:)"
        );
        assert_eq!(reduce_repetition("good"), "good");
        assert_eq!(reduce_repetition("a--b"), "a-b");
        assert_eq!(reduce_repetition("?!?!"), "?!?!");
        assert_eq!(reduce_repetition("aAaA bbB"), "aAaA bbB");
    }

    #[test]
    fn test_reduce_repetition_long_input() {
        let text = "ab !!! cooool ".repeat(200_000);
        let out = reduce_repetition(&text);
        assert_eq!(out, "ab ! cool ".repeat(200_000));
    }

    #[test]
    fn test_reduce_repetition_keeps_markers() {
        assert_eq!(
            reduce_repetition(" <ADDRESS>   <HASHTAG> "),
            " <ADDRESS> <HASHTAG> "
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("how   are\tyou?fine)ok"),
            "how are you? fine) ok"
        );
        assert_eq!(normalize_whitespace("ok? yes) no"), "ok? yes) no");
        assert_eq!(normalize_whitespace("why?"), "why? ");
        // Other punctuation stays attached.
        assert_eq!(normalize_whitespace("a!b,c"), "a!b,c");
        assert_eq!(normalize_whitespace("??))"), "? ? ) ) ");
    }

    #[test]
    fn test_normalize_whitespace_long_input() {
        let text = "a?b ".repeat(600_000);
        assert_eq!(normalize_whitespace(&text), "a? b ".repeat(600_000));
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("  \t padded \n"), "padded");
    }

    #[test]
    fn test_empty_input() {
        let map = PlaceholderMap::default();
        assert_eq!(to_lower(""), "");
        assert_eq!(replace_domain_phrases("", &map), "");
        assert_eq!(replace_crypto_addresses("", None), "");
        assert_eq!(remove_accents(""), "");
        assert_eq!(remove_links(""), "");
        assert_eq!(remove_newlines_tabs(""), "");
        assert_eq!(remove_emoji(""), "");
        assert_eq!(reduce_repetition(""), "");
        assert_eq!(normalize_whitespace(""), "");
    }
}
