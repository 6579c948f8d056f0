//! Wildcard translation.
//!
//! A wildcard is lowered to a token list, from which both the regex-like
//! internal form (for display) and the `regex-syntax` HIR (for automaton
//! construction) are produced. Every character maps to a defined rule, so
//! translation cannot fail.

use regex_syntax::hir::{Dot, Hir, Repetition};

/// Characters that are always taken literally and shown escaped.
pub(crate) const RESERVED: &[char] = &[
    '(', ')', '{', '}', '[', ']', '|', '&', '~', '+', '^', '-', '.', '#', '@', '"', '<', '>',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    /// `*`: any run of characters.
    AnyRun,
    /// `?`: exactly one character.
    AnyChar,
    Literal(char),
}

#[derive(Debug)]
pub(crate) struct Translation {
    pub tokens: Vec<Token>,
    pub internal: String,
}

impl Translation {
    /// Built purely from `*` runs (or empty).
    pub fn is_match_all(&self) -> bool {
        self.tokens.iter().all(|t| *t == Token::AnyRun)
    }

    pub fn to_hir(&self) -> Hir {
        let mut buf = [0u8; 4];
        Hir::concat(
            self.tokens
                .iter()
                .map(|token| match *token {
                    Token::AnyRun => Hir::repetition(Repetition {
                        min: 0,
                        max: None,
                        greedy: true,
                        sub: Box::new(Hir::dot(Dot::AnyChar)),
                    }),
                    Token::AnyChar => Hir::dot(Dot::AnyChar),
                    Token::Literal(c) => Hir::literal(c.encode_utf8(&mut buf).as_bytes()),
                })
                .collect(),
        )
    }
}

pub(crate) fn translate(wildcard: &str) -> Translation {
    let mut tokens = Vec::with_capacity(wildcard.len());
    let mut internal = String::with_capacity(wildcard.len() * 2);
    let mut escaped = false;

    for c in wildcard.chars() {
        match c {
            '*' if !escaped => {
                tokens.push(Token::AnyRun);
                internal.push_str(".*");
            }
            '?' if !escaped => {
                tokens.push(Token::AnyChar);
                internal.push('.');
            }
            '\\' if !escaped => {
                escaped = true;
                continue;
            }
            '*' | '?' | '\\' => {
                tokens.push(Token::Literal(c));
                internal.push('\\');
                internal.push(c);
            }
            c if RESERVED.contains(&c) => {
                tokens.push(Token::Literal(c));
                internal.push('\\');
                internal.push(c);
            }
            c => {
                tokens.push(Token::Literal(c));
                internal.push(c);
            }
        }
        escaped = false;
    }

    if escaped {
        tokens.push(Token::Literal('\\'));
        internal.push_str("\\\\");
    }

    Translation { tokens, internal }
}
