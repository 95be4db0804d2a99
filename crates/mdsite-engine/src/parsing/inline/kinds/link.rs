use std::sync::OnceLock;

use regex::Regex;

use super::{Found, Image};

fn pattern() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
}

/// Link inline type: `[text](url)` not preceded by `!`.
pub struct Link;

impl Link {
    /// All links in `text`, left to right, non-overlapping.
    ///
    /// `regex` has no look-behind, so a candidate opening right after `!`
    /// is rejected and the search resumes one byte past its `[`.
    pub fn find_all(text: &str) -> Vec<Found> {
        let mut found = Vec::new();
        let mut start = 0;
        while let Some(caps) = pattern().captures_at(text, start) {
            let Some(full) = caps.get(0) else { break };
            if text[..full.start()].ends_with(Image::PREFIX) {
                start = full.start() + 1;
                continue;
            }
            found.push(Found {
                range: full.range(),
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            });
            start = full.end();
        }
        found
    }
}
