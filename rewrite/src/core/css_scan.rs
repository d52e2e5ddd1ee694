//! Structural offsets of a stylesheet, via `cssparser`.
//!
//! Selector runs are bounded by real `{` tokens and split on real `,` tokens.
//! Braces, commas and quotes that sit inside comments, strings, `url()` or
//! escaped identifiers (`.a\,b`, `.q\"x`) never show up here.

use std::ops::Range;

use cssparser::{ParseError, Parser, ParserInput, Token};

/// Byte offsets of the tokens that matter for selector expansion.
///
/// All lists are in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    /// Offset of every `{` that opens a block, at any nesting depth.
    pub braces: Vec<usize>,
    /// Offset of every `,` outside `(...)`, `[...]` and functions.
    pub commas: Vec<usize>,
    /// Comments, strings and urls. Marker text in here is not a selector.
    pub inert: Vec<Range<usize>>,
}

impl Structure {
    /// First block-opening brace strictly after `offset`.
    pub fn next_brace_after(&self, offset: usize) -> Option<usize> {
        let idx = self.braces.partition_point(|&brace| brace <= offset);
        self.braces.get(idx).copied()
    }

    /// Separator commas inside `range`.
    pub fn commas_within(&self, range: Range<usize>) -> &[usize] {
        let start = self.commas.partition_point(|&comma| comma < range.start);
        let end = self.commas.partition_point(|&comma| comma < range.end);
        &self.commas[start..end]
    }

    pub fn is_inert(&self, offset: usize) -> bool {
        let idx = self.inert.partition_point(|span| span.start <= offset);
        idx > 0 && self.inert[idx - 1].contains(&offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    /// Top level or inside `{}`: commas separate selectors.
    Rules,
    /// Inside `()`, `[]` or a function: commas are arguments.
    Grouped,
}

/// Tokenize `text` and collect its [`Structure`].
pub fn scan_structure(text: &str) -> Structure {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut structure = Structure::default();
    scan_level(&mut parser, &mut structure, Level::Rules);
    structure
}

fn scan_level<'i>(parser: &mut Parser<'i, '_>, structure: &mut Structure, level: Level) {
    loop {
        let start = parser.position().byte_index();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        let end = parser.position().byte_index();

        let nested = match token {
            Token::Comment(_)
            | Token::QuotedString(_)
            | Token::BadString(_)
            | Token::UnquotedUrl(_)
            | Token::BadUrl(_) => {
                structure.inert.push(start..end);
                None
            }
            Token::Comma if level == Level::Rules => {
                structure.commas.push(start);
                None
            }
            Token::CurlyBracketBlock => {
                structure.braces.push(start);
                Some(Level::Rules)
            }
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                Some(Level::Grouped)
            }
            _ => None,
        };

        if let Some(inner_level) = nested {
            // The closure never fails; a block cut off by end of input just ends the scan.
            let _ = parser.parse_nested_block(|inner| {
                scan_level(inner, structure, inner_level);
                Ok::<(), ParseError<'i, ()>>(())
            });
        }
    }
}
