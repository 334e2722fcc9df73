//! Tokenizer for the expression grammar.

use crate::error::EvalError;
use crate::eval::column_at;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// A token with its byte offset in the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Token kinds of the expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),
    Str(String),
    True,
    False,
    Ident(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEq,
    BangEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,

    // Grouping
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Ident(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::EqEq => write!(f, "=="),
            Self::BangEq => write!(f, "!="),
            Self::Less => write!(f, "<"),
            Self::LessEq => write!(f, "<="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEq => write!(f, ">="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Tokenizes a payload.
pub fn tokenize(src: &str) -> Result<Vec<Token>, EvalError> {
    Lexer::new(src).run()
}

struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::new();
        while let Some(&(offset, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.chars.next();
                continue;
            }
            let kind = match ch {
                '0'..='9' => self.number(offset)?,
                '"' => self.string(offset)?,
                c if c.is_alphabetic() || c == '_' => self.ident(offset),
                _ => self.operator(offset, ch)?,
            };
            tokens.push(Token { kind, offset });
        }
        Ok(tokens)
    }

    /// Scans a run of digit-like characters and classifies it.
    ///
    /// The whole run is slurped first so that `12abc` or `1.2.3` is
    /// reported as one malformed literal, not a number followed by noise.
    fn number(&mut self, start: usize) -> Result<TokenKind, EvalError> {
        let end = self.advance_while(|c| c.is_alphanumeric() || c == '.' || c == '_');
        let literal = &self.src[start..end];

        if !literal.contains('.')
            && let Ok(v) = literal.parse::<i64>()
        {
            return Ok(TokenKind::Int(v));
        }
        // Digits-only runs too large for i64 still land here and parse.
        if let Ok(v) = literal.parse::<f64>() {
            return Ok(TokenKind::Float(v));
        }
        Err(EvalError::MalformedNumber {
            literal: literal.to_string(),
            column: column_at(self.src, start),
        })
    }

    fn string(&mut self, start: usize) -> Result<TokenKind, EvalError> {
        self.chars.next(); // opening quote
        let mut text = String::new();
        for (_, ch) in self.chars.by_ref() {
            if ch == '"' {
                return Ok(TokenKind::Str(text));
            }
            text.push(ch);
        }
        Err(EvalError::UnterminatedString {
            column: column_at(self.src, start),
        })
    }

    fn ident(&mut self, start: usize) -> TokenKind {
        let end = self.advance_while(|c| c.is_alphanumeric() || c == '_');
        match &self.src[start..end] {
            "True" => TokenKind::True,
            "False" => TokenKind::False,
            name => TokenKind::Ident(name.to_string()),
        }
    }

    fn operator(&mut self, offset: usize, ch: char) -> Result<TokenKind, EvalError> {
        self.chars.next();
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '<' => {
                if self.eat('=') {
                    TokenKind::LessEq
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.eat('=') {
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                }
            }
            '=' if self.eat('=') => TokenKind::EqEq,
            '!' if self.eat('=') => TokenKind::BangEq,
            other => {
                return Err(EvalError::UnexpectedChar {
                    ch: other,
                    column: column_at(self.src, offset),
                });
            }
        };
        Ok(kind)
    }

    /// Consumes characters while the predicate holds; returns the end
    /// byte offset.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        while let Some(&(_, c)) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            self.chars.next();
        }
        self.chars.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek().is_some_and(|&(_, c)| c == expected) {
            self.chars.next();
            return true;
        }
        false
    }
}
