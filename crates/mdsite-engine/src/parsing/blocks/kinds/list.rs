/// Unordered list block type: every line opens with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_list(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::MARKER))
    }

    /// Item text for each line, marker removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .filter_map(|line| line.strip_prefix(Self::MARKER))
            .collect()
    }
}

/// Ordered list block type: line `i` opens with `{i}. `, counting from 1.
pub struct OrderedList;

impl OrderedList {
    /// Marker expected on the `number`-th line.
    pub fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    pub fn is_list(block: &str) -> bool {
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Item text for each correctly numbered line, marker removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .enumerate()
            .filter_map(|(i, line)| line.strip_prefix(Self::marker(i + 1).as_str()))
            .collect()
    }
}
