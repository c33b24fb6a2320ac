use lazy_static::lazy_static;
use regex::Regex;

/// Message shown when a submitted URL is not a post URL
pub const INVALID_URL_MESSAGE: &str = "Lütfen geçerli bir tweet URL'si girin.";

lazy_static! {
    // Anchored at the start only; anything may follow the status id.
    static ref POST_URL_REGEX: Regex =
        Regex::new(r"^https?://(www\.)?(twitter|x)\.com/.+/status/[0-9]+").unwrap();
}

/// Check that `url` has the shape of a Twitter/X status URL
///
/// Purely syntactic: no lookup is made against the network.
pub fn is_valid_post_url(url: &str) -> bool {
    POST_URL_REGEX.is_match(url)
}
