use crate::{
    error::{Error, Reporter, Result},
    token::{Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;
use tracing::{debug, trace};

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Walks a source string one character at a time.
///
/// As an `Iterator` it yields one item per lexeme: `Ok` for a token and `Err`
/// for a malformed lexeme, never stopping early and never yielding the
/// end-of-file token. `scan_tokens` drives it to completion, hands errors to
/// a `Reporter` and appends the end-of-file token.
pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    line: usize,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        loop {
            let next_char = self.src.next()?;
            self.lexeme_buffer.clear();
            self.lexeme_buffer.push(next_char);

            let line = self.line;
            if let Some(kind) = self.token_kind_from_char(next_char) {
                return Some(kind.map(|kind| {
                    let lexeme = std::mem::take(&mut self.lexeme_buffer);
                    trace!(line, kind = kind.name(), %lexeme, "token");
                    Token { kind, lexeme, line }
                }));
            }
        }
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            line: 1,
        }
    }

    pub fn scan_tokens(mut self, reporter: &mut impl Reporter) -> Vec<Token> {
        debug!("scan started");

        let mut tokens = Vec::new();
        let mut error_count = 0usize;
        for result in self.by_ref() {
            match result {
                Ok(token) => tokens.push(token),
                Err(e) => {
                    debug!(line = e.line(), message = e.message(), "lexical error");
                    error_count += 1;
                    reporter.report_error(e);
                },
            }
        }
        tokens.push(Token::end_of_file(self.line));

        debug!(tokens = tokens.len(), errors = error_count, line = self.line, "scan finished");
        tokens
    }

    /// `None` means the character was consumed without producing a lexeme.
    fn token_kind_from_char(&mut self, c: char) -> Option<Result<TokenKind>> {
        use TokenKind::*;
        match c {
            '(' => Some(Ok(LeftParen)),
            ')' => Some(Ok(RightParen)),
            '{' => Some(Ok(LeftBrace)),
            '}' => Some(Ok(RightBrace)),
            ',' => Some(Ok(Comma)),
            '.' => Some(Ok(Dot)),
            '-' => Some(Ok(Minus)),
            '+' => Some(Ok(Plus)),
            ';' => Some(Ok(Semicolon)),
            '*' => Some(Ok(Star)),
            '!' => Some(Ok(if self.does_next_match('=') { BangEqual } else { Bang })),
            '=' => Some(Ok(if self.does_next_match('=') { EqualEqual } else { Equal })),
            '<' => Some(Ok(if self.does_next_match('=') { LessEqual } else { Less })),
            '>' => Some(Ok(if self.does_next_match('=') { GreaterEqual } else { Greater })),
            '/' => {
                if self.does_next_match('/') { // comment runs to end of line
                    self.advance_until_match('\n');
                    None
                } else {
                    Some(Ok(Slash))
                }
            },
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            },
            '"' => Some(self.extract_string()),
            c if c.is_ascii_digit() => Some(Ok(self.extract_number())),
            c if can_start_identifier(&c) => Some(Ok(self.extract_identifier())),
            c => Some(Err(Error::unexpected_character(self.line, c))),
        }
    }

    fn does_next_match(&mut self, c: char) -> bool {
        if self.src.peek() == Some(&c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn extract_string(&mut self) -> Result<TokenKind> {
        let mut newline_count = 0;
        self.advance_until_match_for_each('"', |c| if c == '\n' { newline_count += 1 });
        self.line += newline_count;

        if self.advance().is_none() {
            return Err(Error::unterminated_string(self.line));
        }
        let contents = &self.lexeme_buffer[1..self.lexeme_buffer.len() - 1];
        Ok(TokenKind::String(contents.to_string()))
    }

    fn extract_number(&mut self) -> TokenKind {
        self.advance_until(|n| !n.is_ascii_digit());

        let has_fraction = self.src.peek() == Some(&'.')
            && self.src.peek_nth(1).map_or(false, |c| c.is_ascii_digit());
        if has_fraction {
            self.advance();
            self.advance_until(|n| !n.is_ascii_digit());
        }

        // A run of ASCII digits with an optional fraction always parses.
        TokenKind::Number(self.lexeme_buffer.parse().unwrap_or_default())
    }

    fn extract_identifier(&mut self) -> TokenKind {
        self.advance_until(|n| !is_part_of_valid_identifier(n));

        match KEYWORDS.get(self.lexeme_buffer.as_str()) {
            Some(keyword) => keyword.clone(),
            None => TokenKind::Identifier,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let next = self.src.next()?;
        self.lexeme_buffer.push(next);
        Some(next)
    }

    fn advance_until_match(&mut self, c: char) {
        self.advance_until(|n| n == &c)
    }

    fn advance_until(&mut self, should_stop: impl Fn(&char) -> bool) {
        self.advance_until_for_each(should_stop, |_| {})
    }

    fn advance_until_match_for_each(&mut self, c: char, f: impl FnMut(char)) {
        self.advance_until_for_each(|n| n == &c, f);
    }

    fn advance_until_for_each(
        &mut self,
        should_stop: impl Fn(&char) -> bool,
        mut f: impl FnMut(char),
    ) {
        while let Some(&next) = self.src.peek() {
            if should_stop(&next) {
                break;
            }
            self.advance();
            f(next);
        }
    }
}

fn can_start_identifier(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &'_'
}

fn is_part_of_valid_identifier(c: &char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}
