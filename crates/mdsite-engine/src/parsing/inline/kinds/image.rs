use std::sync::OnceLock;

use regex::Regex;

use super::Found;

fn pattern() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
}

/// Image inline type: `![alt](url)`.
pub struct Image;

impl Image {
    pub const PREFIX: char = '!';

    /// All images in `text`, left to right, non-overlapping.
    pub fn find_all(text: &str) -> Vec<Found> {
        pattern()
            .captures_iter(text)
            .map(|caps| Found {
                range: caps.get(0).map_or(0..0, |m| m.range()),
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            })
            .collect()
    }
}
