use super::{AnswerSetModel, ValidationResult};
use crate::errors::OracleError;
use lazy_static::lazy_static;
use regex::Regex;

/// The line separator used by the solver in its own transcripts.
pub const SOLVER_LINE_SEPARATOR: &str = "\r\n";

/// The line separator used in hand-authored expected transcripts.
pub const AUTHORED_LINE_SEPARATOR: &str = "\n";

const ENUMERATION_START_MARKER: &str = "Solving...";
const STATISTICS_HEADER: &str = "Models       :";

lazy_static! {
    static ref ANSWER_HEADER_PATTERN: Regex = Regex::new(r"^Answer: \d+$").unwrap();
}

/// A parser for answer-set enumeration transcripts.
///
/// The solver emits its transcript with its own line separator (see
/// [SOLVER_LINE_SEPARATOR]), while hand-authored expected transcripts use
/// plain newlines; the separator is therefore an explicit property of each
/// parser instance.
///
/// A full solver transcript wraps the enumeration in a `Solving...` marker
/// and a statistics footer; use [parse_transcript](Self::parse_transcript)
/// for it. A hand-authored expected transcript is the bare enumeration
/// (answer blocks followed by the verdict); use
/// [parse_enumeration](Self::parse_enumeration) for it.
///
/// # Example
///
/// ```
/// # use asporacle::transcript::TranscriptParser;
/// let parser = TranscriptParser::for_authored_output();
/// let result = parser
///     .parse_enumeration("Answer: 1\nmove(1,0,1,1)\nSATISFIABLE")
///     .unwrap();
/// assert!(result.is_satisfiable());
/// assert_eq!(1, result.n_models());
/// ```
pub struct TranscriptParser {
    line_separator: String,
}

impl TranscriptParser {
    /// Builds a parser splitting lines on the given separator.
    pub fn new<S>(line_separator: S) -> Self
    where
        S: Into<String>,
    {
        TranscriptParser {
            line_separator: line_separator.into(),
        }
    }

    /// Builds a parser for the solver's native transcripts.
    pub fn for_solver_output() -> Self {
        Self::new(SOLVER_LINE_SEPARATOR)
    }

    /// Builds a parser for hand-authored expected transcripts.
    pub fn for_authored_output() -> Self {
        Self::new(AUTHORED_LINE_SEPARATOR)
    }

    /// Parses a full solver transcript.
    ///
    /// The answer-set enumeration is located between the literal
    /// `Solving...` marker and the statistics footer; the absence of either
    /// marker signals a crashed solver or output-format drift and raises
    /// [OracleError::Protocol]. The models are returned in their original
    /// enumeration order.
    pub fn parse_transcript(&self, raw: &str) -> Result<ValidationResult, OracleError> {
        let region = self.extract_enumeration(raw)?;
        self.parse_enumeration(region)
    }

    /// Parses a bare answer-set enumeration.
    ///
    /// The text must consist of zero or more answer blocks (a header line
    /// `Answer: <n>` followed by one atom line) and a final verdict line.
    /// Lines are trimmed; an empty atom line denotes the empty model and is
    /// kept. The models are returned in their original enumeration order.
    pub fn parse_enumeration(&self, text: &str) -> Result<ValidationResult, OracleError> {
        let lines = text
            .split(self.line_separator.as_str())
            .map(str::trim)
            .collect::<Vec<&str>>();
        let (verdict, block_lines) = lines
            .split_last()
            .expect("str::split yields at least one element");
        if verdict.is_empty() {
            return Err(OracleError::Protocol("missing verdict token".to_string()));
        }
        if block_lines.len() % 2 != 0 {
            return Err(OracleError::Protocol(
                "malformed answer enumeration".to_string(),
            ));
        }
        let mut models = Vec::with_capacity(block_lines.len() / 2);
        for block in block_lines.chunks_exact(2) {
            if !ANSWER_HEADER_PATTERN.is_match(block[0]) {
                return Err(OracleError::Protocol(format!(
                    r#"expected an answer header, found "{}""#,
                    block[0]
                )));
            }
            models.push(parse_atom_line(block[1]));
        }
        Ok(ValidationResult::new(*verdict == "SATISFIABLE", models))
    }

    fn extract_enumeration<'a>(&self, raw: &'a str) -> Result<&'a str, OracleError> {
        let start = raw
            .find(ENUMERATION_START_MARKER)
            .ok_or_else(|| OracleError::Protocol("enumeration marker not found".to_string()))?
            + ENUMERATION_START_MARKER.len()
            + self.line_separator.len();
        let footer = format!(
            "{0}{0}{1}",
            self.line_separator, STATISTICS_HEADER
        );
        let end = raw
            .find(&footer)
            .ok_or_else(|| OracleError::Protocol("statistics footer not found".to_string()))?;
        raw.get(start..end)
            .ok_or_else(|| OracleError::Protocol("truncated enumeration region".to_string()))
    }
}

fn parse_atom_line(line: &str) -> AnswerSetModel {
    if line.is_empty() {
        AnswerSetModel::empty()
    } else {
        AnswerSetModel::new(line.split(' ').map(str::to_string).collect())
    }
}
