/*!
 * Line-level scanning for configuration documents.
 *
 * A configuration document is inspected as a sequence of `\n`-separated
 * lines. Each line keeps its leading whitespace so that indentation can be
 * used to approximate YAML block scoping without parsing the document.
 */

/// Whitespace as understood by the scanner.
///
/// Unicode whitespace plus the byte-order mark, so a BOM-prefixed first
/// line still matches its key. NEL (U+0085) is not whitespace here.
pub fn is_scan_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim scanner whitespace from both ends
pub fn trim_scan(text: &str) -> &str {
    text.trim_matches(is_scan_whitespace)
}

/// A single line of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Zero-based line index
    pub index: usize,
    /// Raw line content, leading whitespace included
    pub raw: &'a str,
}

impl<'a> Line<'a> {
    /// Create a line from its index and raw content
    pub fn new(index: usize, raw: &'a str) -> Self {
        Self { index, raw }
    }

    /// Number of leading whitespace characters before the first visible character
    pub fn indentation(&self) -> usize {
        self.raw.chars().take_while(|c| is_scan_whitespace(*c)).count()
    }

    /// Content with surrounding whitespace removed
    pub fn trimmed(&self) -> &'a str {
        trim_scan(self.raw)
    }

    /// Whether the line holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Whether the line is a `#` comment
    pub fn is_comment(&self) -> bool {
        self.trimmed().starts_with('#')
    }

    /// Whether the line declares `key`.
    ///
    /// Matches `key:`, `"key":` and `key  :` after any indentation. The key
    /// token must be followed by the colon, so `model_name:` does not declare
    /// `model`.
    pub fn declares_key(&self, key: &str) -> bool {
        let text = self.raw.trim_start_matches(is_scan_whitespace);
        let text = text.strip_prefix('"').unwrap_or(text);

        let Some(rest) = text.strip_prefix(key) else {
            return false;
        };

        let rest = rest.strip_prefix('"').unwrap_or(rest);
        rest.trim_start_matches(is_scan_whitespace).starts_with(':')
    }
}

/// Split content into lines on `\n`, keeping every segment including the last
pub fn split_lines(content: &str) -> Vec<Line<'_>> {
    content
        .split('\n')
        .enumerate()
        .map(|(index, raw)| Line::new(index, raw))
        .collect()
}
