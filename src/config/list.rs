//! Tokenizer for list-valued configuration properties using logos
//!
//! A list property is a single string of comma separated items. An item may be
//! wrapped in single quotes so that it can carry literal commas, and inside quotes
//! a doubled quote (`''`) stands for one quote character. A quote only opens a
//! quoted segment at the start of an item; anywhere else it is plain text.

use logos::Logos;

use super::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum ListToken {
    #[token(",")]
    Comma,

    #[regex(r"'([^']|'')*'", |lex| unquote(lex.slice()))]
    Quoted(String),

    #[regex(r"[^,'\s][^,]*", |lex| lex.slice().to_string())]
    #[regex(r"\s+", |lex| lex.slice().to_string())]
    Text(String),
}

/// A quote that is never closed
#[derive(Debug, Clone, PartialEq)]
pub struct UnterminatedQuote {
    /// From the opening quote to the end of the value
    pub span: Span,
}

fn unquote(slice: &str) -> String {
    slice[1..slice.len() - 1].replace("''", "'")
}

/// Tokenize a raw list value
pub fn lex(input: &str) -> impl Iterator<Item = (Result<ListToken, ()>, Span)> + '_ {
    ListToken::lexer(input).spanned()
}

/// Split a raw list value into its items
///
/// Each item is trimmed of surrounding whitespace and empty items are dropped,
/// so `a, 'b,c', , d` yields `["a", "b,c", "d"]`.
pub fn split_list(input: &str) -> Result<Vec<String>, UnterminatedQuote> {
    let mut items = Vec::new();
    let mut current = String::new();

    for (token, span) in lex(input) {
        let token = token.map_err(|_| UnterminatedQuote {
            span: span.start..input.len(),
        })?;
        match token {
            ListToken::Comma => push_item(&mut items, std::mem::take(&mut current)),
            ListToken::Quoted(text) | ListToken::Text(text) => current.push_str(&text),
        }
    }
    push_item(&mut items, current);

    Ok(items)
}

fn push_item(items: &mut Vec<String>, item: String) {
    let trimmed = item.trim();
    if !trimmed.is_empty() {
        items.push(trimmed.to_string());
    }
}
