use std::sync::OnceLock;

use regex::Regex;

/// Bare `http://` / `https://` URL.
///
/// A URL is the scheme followed by every character up to the next whitespace
/// or the end of the line. Trailing punctuation is part of the URL.
pub struct Url;

impl Url {
    pub const PATTERN: &'static str = r"https?://\S+";

    /// Compiled [`Url::PATTERN`], built once per process.
    pub fn regex() -> &'static Regex {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        URL_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid URL regex"))
    }
}
