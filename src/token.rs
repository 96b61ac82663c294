use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) line: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String(String), Number(f64),

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EndOfFile,
}

/// The decoded value of a literal token.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Literal<'a> {
    String(&'a str),
    Number(f64),
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, line: usize) -> Token {
        Token { kind, lexeme: lexeme.into(), line }
    }

    pub(crate) fn end_of_file(line: usize) -> Token {
        Token { kind: TokenKind::EndOfFile, lexeme: String::new(), line }
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn literal(&self) -> Option<Literal<'_>> {
        match &self.kind {
            TokenKind::String(s) => Some(Literal::String(s)),
            TokenKind::Number(n) => Some(Literal::Number(*n)),
            _ => None,
        }
    }
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Slash => "SLASH",
            Star => "STAR",
            Bang => "BANG",
            BangEqual => "BANG_EQUAL",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Identifier => "IDENTIFIER",
            String(_) => "STRING",
            Number(_) => "NUMBER",
            And => "AND",
            Class => "CLASS",
            Else => "ELSE",
            False => "FALSE",
            Fun => "FUN",
            For => "FOR",
            If => "IF",
            Nil => "NIL",
            Or => "OR",
            Print => "PRINT",
            Return => "RETURN",
            Super => "SUPER",
            This => "THIS",
            True => "TRUE",
            Var => "VAR",
            While => "WHILE",
            EndOfFile => "EOF",
        }
    }
}

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{}", s),
            // Whole numbers keep their ".0" so 123 and "123" are told apart in dumps.
            Literal::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// `KIND lexeme literal`, with `null` standing in for a missing literal.
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind.name(), self.lexeme)?;
        match self.literal() {
            Some(literal) => write!(f, "{}", literal),
            None => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_literal_keeps_fraction() {
        let whole = Token::new(TokenKind::Number(123.0), "123", 1);
        assert_eq!("NUMBER 123 123.0", whole.to_string());

        let frac = Token::new(TokenKind::Number(123.45), "123.45", 1);
        assert_eq!("NUMBER 123.45 123.45", frac.to_string());
    }

    #[test]
    fn string_literal_is_unquoted() {
        let t = Token::new(TokenKind::String("hi".into()), "\"hi\"", 2);
        assert_eq!(Some(Literal::String("hi")), t.literal());
        assert_eq!("STRING \"hi\" hi", t.to_string());
    }

    #[test]
    fn non_literals_print_null() {
        let t = Token::new(TokenKind::BangEqual, "!=", 1);
        assert_eq!(None, t.literal());
        assert_eq!("BANG_EQUAL != null", t.to_string());
    }

    #[test]
    fn end_of_file_has_empty_lexeme() {
        let t = Token::end_of_file(4);
        assert_eq!("", t.lexeme());
        assert_eq!(4, t.line());
        assert_eq!("EOF  null", t.to_string());
    }
}
