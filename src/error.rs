use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// A malformed lexeme found while scanning.
///
/// Neither kind stops a scan: the scanner reports it and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("[line {line}] Error: Unexpected character.")]
    UnexpectedCharacter { line: usize, character: char },

    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },
}

impl Error {
    pub fn unexpected_character(line: usize, character: char) -> Error {
        Error::UnexpectedCharacter { line, character }
    }

    pub fn unterminated_string(line: usize) -> Error {
        Error::UnterminatedString { line }
    }

    pub fn line(&self) -> usize {
        match self {
            Error::UnexpectedCharacter { line, .. } | Error::UnterminatedString { line } => *line,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Error::UnexpectedCharacter { .. } => "Unexpected character.",
            Error::UnterminatedString { .. } => "Unterminated string.",
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        std::io::Error::new(InvalidData, e)
    }
}

/// Receives every lexical error as soon as the scanner detects it.
pub trait Reporter {
    fn report_error(&mut self, error: Error);
}

impl Reporter for Vec<Error> {
    fn report_error(&mut self, error: Error) {
        self.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_like_the_reference_reporter() {
        let e = Error::unexpected_character(3, '@');
        assert_eq!("[line 3] Error: Unexpected character.", e.to_string());

        let e = Error::unterminated_string(7);
        assert_eq!("[line 7] Error: Unterminated string.", e.to_string());
    }

    #[test]
    fn exposes_line_and_message() {
        let e = Error::unterminated_string(2);
        assert_eq!(2, e.line());
        assert_eq!("Unterminated string.", e.message());
    }

    #[test]
    fn vec_collects_reports_in_order() {
        let mut errors: Vec<Error> = vec![];
        errors.report_error(Error::unexpected_character(1, '#'));
        errors.report_error(Error::unterminated_string(4));
        assert_eq!(
            vec![Error::unexpected_character(1, '#'), Error::unterminated_string(4)],
            errors
        );
    }
}
