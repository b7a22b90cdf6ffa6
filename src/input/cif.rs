/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! CIF tokenizer and data-block parser
//!
//! Produces a lightweight [`CifBlock`] holding the tag/value items and loops of
//! each `data_` block. Interpretation of the items lives in
//! [`super::builder`].

use super::errors::{InputError, Result};
use log::trace;
use std::collections::HashMap;

/// A CIF token together with the line it started on
#[derive(Debug, Clone, PartialEq)]
struct Token {
    text: String,
    quoted: bool,
    line: usize,
}

impl Token {
    fn is_reserved(&self) -> bool {
        if self.quoted {
            return false;
        }
        let lower = self.text.to_ascii_lowercase();
        lower == "loop_"
            || lower == "global_"
            || lower == "stop_"
            || lower.starts_with("data_")
            || lower.starts_with("save_")
    }

    fn is_tag(&self) -> bool {
        !self.quoted && self.text.starts_with('_')
    }
}

/// A `loop_` construct: a header of tags and rows of values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CifLoop {
    /// Lower-cased tags in header order
    pub tags: Vec<String>,
    /// One entry per row, each with `tags.len()` values
    pub rows: Vec<Vec<String>>,
}

impl CifLoop {
    /// Column index of `tag`
    pub fn column(&self, tag: &str) -> Option<usize> {
        self.tags.iter().position(|t| t == tag)
    }

    /// Whether the loop contains `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.column(tag).is_some()
    }
}

/// One `data_` block of a CIF file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CifBlock {
    /// Block name without the `data_` prefix
    pub name: String,
    /// Single-valued items keyed by lower-cased tag
    pub items: HashMap<String, String>,
    /// Loops in file order
    pub loops: Vec<CifLoop>,
}

impl CifBlock {
    /// Value of a single-valued item
    pub fn item(&self, tag: &str) -> Option<&str> {
        self.items.get(tag).map(String::as_str)
    }

    /// First loop whose header contains any of `tags`
    pub fn find_loop(&self, tags: &[&str]) -> Option<&CifLoop> {
        self.loops
            .iter()
            .find(|l| tags.iter().any(|tag| l.has_tag(tag)))
    }
}

/// Parse CIF text into its data blocks
pub fn parse_blocks(text: &str) -> Result<Vec<CifBlock>> {
    let tokens = tokenize(text)?;
    trace!("CIF tokenizer produced {} tokens", tokens.len());

    let mut blocks: Vec<CifBlock> = Vec::new();
    let mut pos = 0;

    while pos < tokens.len() {
        let token = &tokens[pos];
        let lower = token.text.to_ascii_lowercase();

        if !token.quoted && lower.starts_with("data_") {
            blocks.push(CifBlock {
                name: token.text[5..].to_string(),
                ..CifBlock::default()
            });
            pos += 1;
            continue;
        }

        let block = blocks.last_mut().ok_or_else(|| {
            let message = format!("'{}' appears before any data_ block", token.text);
            InputError::parse(token.line, message)
        })?;

        if !token.quoted && lower == "loop_" {
            pos = parse_loop(&tokens, pos + 1, token.line, block)?;
        } else if token.is_tag() {
            let value = tokens
                .get(pos + 1)
                .filter(|t| !t.is_tag() && !t.is_reserved())
                .ok_or_else(|| {
                    InputError::parse(token.line, format!("tag {} has no value", token.text))
                })?;
            block.items.insert(lower, value.text.clone());
            pos += 2;
        } else if token.is_reserved() {
            // save frames and global blocks carry nothing we read
            pos += 1;
        } else {
            return Err(InputError::parse(
                token.line,
                format!("unexpected value '{}' outside of a loop", token.text),
            ));
        }
    }

    Ok(blocks)
}

fn parse_loop(
    tokens: &[Token],
    mut pos: usize,
    line: usize,
    block: &mut CifBlock,
) -> Result<usize> {
    let mut cif_loop = CifLoop::default();
    while let Some(token) = tokens.get(pos).filter(|t| t.is_tag()) {
        cif_loop.tags.push(token.text.to_ascii_lowercase());
        pos += 1;
    }
    if cif_loop.tags.is_empty() {
        return Err(InputError::parse(line, "loop_ without any tags"));
    }

    let mut values = Vec::new();
    while let Some(token) = tokens.get(pos).filter(|t| !t.is_tag() && !t.is_reserved()) {
        values.push(token.text.clone());
        pos += 1;
    }

    let width = cif_loop.tags.len();
    if values.len() % width != 0 {
        return Err(InputError::parse(
            line,
            format!(
                "loop with {} tags holds {} values, not a whole number of rows",
                width,
                values.len()
            ),
        ));
    }
    cif_loop.rows = values.chunks(width).map(<[String]>::to_vec).collect();
    block.loops.push(cif_loop);
    Ok(pos)
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lines = text.lines().enumerate().map(|(idx, l)| (idx + 1, l));

    while let Some((line_no, line)) = lines.next() {
        // semicolon-delimited text field
        if let Some(first) = line.strip_prefix(';') {
            let mut field = first.to_string();
            let mut closed = false;
            for (_, next) in lines.by_ref() {
                if next.starts_with(';') {
                    closed = true;
                    break;
                }
                field.push('\n');
                field.push_str(next);
            }
            if !closed {
                return Err(InputError::parse(line_no, "unterminated text field"));
            }
            tokens.push(Token {
                text: field,
                quoted: true,
                line: line_no,
            });
            continue;
        }

        tokenize_line(line, line_no, &mut tokens)?;
    }

    Ok(tokens)
}

fn tokenize_line(line: &str, line_no: usize, tokens: &mut Vec<Token>) -> Result<()> {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '#' {
            break;
        }

        if c == '\'' || c == '"' {
            // a quote only closes when followed by whitespace or end of line
            let start = i + 1;
            let mut end = start;
            loop {
                if end >= chars.len() {
                    return Err(InputError::parse(line_no, "unterminated quoted string"));
                }
                if chars[end] == c && chars.get(end + 1).map_or(true, |n| n.is_whitespace()) {
                    break;
                }
                end += 1;
            }
            tokens.push(Token {
                text: chars[start..end].iter().collect(),
                quoted: true,
                line: line_no,
            });
            i = end + 1;
            continue;
        }

        let start = i;
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }
        tokens.push(Token {
            text: chars[start..i].iter().collect(),
            quoted: false,
            line: line_no,
        });
    }

    Ok(())
}

/// Parse a CIF number, dropping a trailing standard uncertainty such as `(4)`
///
/// Returns `None` for the CIF placeholders `?` and `.`.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value == "?" || value == "." {
        return None;
    }
    let number = match value.find('(') {
        Some(idx) => &value[..idx],
        None => value,
    };
    number.parse().ok()
}
