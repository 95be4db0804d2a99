/// Code span inline type with owned delimiter constant.
///
/// The bold and italic passes run first, so their delimiters inside
/// backticks are already consumed by the time code spans are split.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const DELIMITER: &'static str = "`";
}
