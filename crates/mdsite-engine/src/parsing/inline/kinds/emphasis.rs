/// Bold emphasis: `**text**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Italic emphasis: `_text_`.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
}
