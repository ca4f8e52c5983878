//! Toolbar text transforms for the Markdown editor.
//!
//! Selections come from the textarea in UTF-16 code units; all offsets
//! crossing this module's boundary are UTF-16, all slicing inside is bytes.

/// A Markdown formatting command from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatAction {
    Bold,
    Italic,
    Heading,
    Quote,
    UnorderedList,
    OrderedList,
    Link,
    Image,
}

impl FormatAction {
    pub const ALL: [FormatAction; 8] = [
        FormatAction::Bold,
        FormatAction::Italic,
        FormatAction::Heading,
        FormatAction::Quote,
        FormatAction::UnorderedList,
        FormatAction::OrderedList,
        FormatAction::Link,
        FormatAction::Image,
    ];

    /// Button face.
    pub fn label(self) -> &'static str {
        match self {
            FormatAction::Bold => "B",
            FormatAction::Italic => "I",
            FormatAction::Heading => "H",
            FormatAction::Quote => "❝",
            FormatAction::UnorderedList => "•",
            FormatAction::OrderedList => "1.",
            FormatAction::Link => "🔗",
            FormatAction::Image => "🖼",
        }
    }

    /// Tooltip.
    pub fn title(self) -> &'static str {
        match self {
            FormatAction::Bold => "Bold",
            FormatAction::Italic => "Italic",
            FormatAction::Heading => "Heading",
            FormatAction::Quote => "Quote",
            FormatAction::UnorderedList => "Generic list",
            FormatAction::OrderedList => "Numbered list",
            FormatAction::Link => "Create link",
            FormatAction::Image => "Insert image",
        }
    }
}

/// Result of a transform: new text and the selection to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub selection_start: u32,
    pub selection_end: u32,
}

impl Edit {
    fn from_bytes(text: String, start: usize, end: usize) -> Self {
        let selection_start = byte_idx_to_utf16(&text, start);
        let selection_end = byte_idx_to_utf16(&text, end);
        Self {
            text,
            selection_start,
            selection_end,
        }
    }
}

fn utf16_to_byte_idx(s: &str, pos_utf16: u32) -> usize {
    let mut acc: u32 = 0;
    for (i, ch) in s.char_indices() {
        if acc >= pos_utf16 {
            return i;
        }
        acc += ch.len_utf16() as u32;
    }
    s.len()
}

fn byte_idx_to_utf16(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx.min(s.len())].encode_utf16().count() as u32
}

/// Apply `action` to `text` with the selection `start..end` (UTF-16).
pub fn apply_format(action: FormatAction, text: &str, start: u32, end: u32) -> Edit {
    let start_byte = utf16_to_byte_idx(text, start.min(end));
    let end_byte = utf16_to_byte_idx(text, start.max(end));

    match action {
        FormatAction::Bold => wrap(text, start_byte, end_byte, "**", "**", "bold text"),
        FormatAction::Italic => wrap(text, start_byte, end_byte, "*", "*", "italic text"),
        FormatAction::Link => wrap(text, start_byte, end_byte, "[", "](https://)", "link text"),
        FormatAction::Image => wrap(text, start_byte, end_byte, "![", "](https://)", "alt text"),
        FormatAction::Heading
        | FormatAction::Quote
        | FormatAction::UnorderedList
        | FormatAction::OrderedList => prefix_lines(action, text, start_byte, end_byte),
    }
}

fn wrap(text: &str, start: usize, end: usize, open: &str, close: &str, placeholder: &str) -> Edit {
    let selected = &text[start..end];
    let inner = if selected.is_empty() { placeholder } else { selected };

    let mut out = String::with_capacity(text.len() + open.len() + close.len() + inner.len());
    out.push_str(&text[..start]);
    out.push_str(open);
    let inner_start = out.len();
    out.push_str(inner);
    let inner_end = out.len();
    out.push_str(close);
    out.push_str(&text[end..]);

    Edit::from_bytes(out, inner_start, inner_end)
}

fn line_prefix(action: FormatAction, index: usize) -> String {
    match action {
        FormatAction::Heading => "# ".to_string(),
        FormatAction::Quote => "> ".to_string(),
        FormatAction::UnorderedList => "- ".to_string(),
        FormatAction::OrderedList => format!("{}. ", index + 1),
        _ => String::new(),
    }
}

/// `line` without the prefix `action` adds, if it has one.
fn strip_line_prefix(action: FormatAction, line: &str) -> Option<&str> {
    match action {
        FormatAction::Heading => line.strip_prefix("# "),
        FormatAction::Quote => line.strip_prefix("> "),
        FormatAction::UnorderedList => line.strip_prefix("- "),
        FormatAction::OrderedList => {
            let digits = line.chars().take_while(char::is_ascii_digit).count();
            if digits == 0 {
                return None;
            }
            line[digits..].strip_prefix(". ")
        }
        _ => None,
    }
}

/// Toggle a line prefix on every line touched by the selection.
fn prefix_lines(action: FormatAction, text: &str, start: usize, end: usize) -> Edit {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[end..].find('\n').map_or(text.len(), |i| end + i);
    let lines: Vec<&str> = text[line_start..line_end].split('\n').collect();

    let remove = lines
        .iter()
        .all(|line| strip_line_prefix(action, line).is_some());
    let block = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if remove {
                strip_line_prefix(action, line).unwrap_or(line).to_string()
            } else {
                format!("{}{line}", line_prefix(action, i))
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::with_capacity(text.len() + block.len());
    out.push_str(&text[..line_start]);
    out.push_str(&block);
    out.push_str(&text[line_end..]);

    Edit::from_bytes(out, line_start, line_start + block.len())
}
