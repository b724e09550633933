//! Line-based prompting with cancellation.

use std::io::{BufRead, ErrorKind, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::SessionError;

/// Set by the interrupt handler, consumed by the next prompt.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Return whether the flag was raised and lower it.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Reads answers from `R`, writing prompts to the caller's writer.
pub struct Prompter<R> {
    reader: R,
    cancel: CancelFlag,
}

impl<R: BufRead> Prompter<R> {
    pub const fn new(reader: R, cancel: CancelFlag) -> Self {
        Self { reader, cancel }
    }

    /// Print `prompt` and read one trimmed line.
    ///
    /// An interrupt raised while waiting turns the answer into
    /// [`SessionError::Cancelled`]; end of input is [`SessionError::Closed`].
    /// Invalid UTF-8 is decoded lossily rather than treated as an I/O failure.
    pub fn read_line<W: Write>(
        &mut self,
        out: &mut W,
        prompt: &str,
    ) -> Result<String, SessionError> {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut raw = Vec::new();
        let read = match self.reader.read_until(b'\n', &mut raw) {
            Ok(read) => read,
            Err(error) if error.kind() == ErrorKind::Interrupted => {
                self.cancel.take();
                return Err(SessionError::Cancelled);
            }
            Err(error) => return Err(error.into()),
        };

        if self.cancel.take() {
            writeln!(out)?;
            return Err(SessionError::Cancelled);
        }
        if read == 0 {
            writeln!(out)?;
            return Err(SessionError::Closed);
        }
        // Undecodable bytes survive as U+FFFD and fail parsing like any other typo.
        Ok(String::from_utf8_lossy(&raw).trim().to_string())
    }

    /// Print `prompt` and read a finite number.
    pub fn read_number<W: Write>(
        &mut self,
        out: &mut W,
        prompt: &str,
    ) -> Result<f64, SessionError> {
        let raw = self.read_line(out, prompt)?;
        parse_number(&raw)
    }

    /// Print `prompt` and read a yes/no answer.
    pub fn confirm<W: Write>(&mut self, out: &mut W, prompt: &str) -> Result<bool, SessionError> {
        let answer = self.read_line(out, prompt)?;
        Ok(is_affirmative(&answer))
    }
}

/// Parse user text as a finite `f64`.
pub fn parse_number(raw: &str) -> Result<f64, SessionError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SessionError::MalformedNumber {
            raw: trimmed.to_string(),
        }),
    }
}

/// Accepts English and Portuguese yes.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::{CancelFlag, Prompter, is_affirmative, parse_number};
    use crate::error::SessionError;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), CancelFlag::new())
    }

    #[rstest]
    #[case("12", 12.0)]
    #[case("  -3.5 ", -3.5)]
    #[case("1e3", 1000.0)]
    #[case("+0.25", 0.25)]
    fn parses_numbers(#[case] raw: &str, #[case] expected: f64) {
        let value = parse_number(raw).expect("should parse");
        assert!((value - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("9,8")]
    #[case("inf")]
    #[case("NaN")]
    fn rejects_malformed(#[case] raw: &str) {
        assert!(matches!(
            parse_number(raw),
            Err(SessionError::MalformedNumber { .. })
        ));
    }

    #[rstest]
    #[case("y", true)]
    #[case("YES", true)]
    #[case("s", true)]
    #[case(" sim ", true)]
    #[case("n", false)]
    #[case("", false)]
    fn affirmative_answers(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(is_affirmative(answer), expected);
    }

    #[test]
    fn read_line_writes_prompt_and_trims() {
        let mut out = Vec::new();
        let mut prompter = prompter("  7  \n");
        let line = prompter.read_line(&mut out, "> ").expect("line");
        assert_eq!(line, "7");
        assert_eq!(String::from_utf8(out).expect("utf8"), "> ");
    }

    #[test]
    fn invalid_utf8_is_malformed_not_io() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(b"\xff\xfe\n3\n".to_vec()), CancelFlag::new());

        assert!(matches!(
            prompter.read_number(&mut out, "> "),
            Err(SessionError::MalformedNumber { .. })
        ));
        let next = prompter.read_number(&mut out, "> ").expect("next line is clean");
        assert!((next - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut out = Vec::new();
        let mut prompter = prompter("");
        assert!(matches!(
            prompter.read_line(&mut out, "> "),
            Err(SessionError::Closed)
        ));
    }

    #[test]
    fn raised_flag_cancels_one_prompt() {
        let flag = CancelFlag::new();
        let mut prompter = Prompter::new(Cursor::new(b"1\n2\n".to_vec()), flag.clone());
        let mut out = Vec::new();

        flag.raise();
        assert!(matches!(
            prompter.read_number(&mut out, "> "),
            Err(SessionError::Cancelled)
        ));
        let next = prompter.read_number(&mut out, "> ").expect("flag was consumed");
        assert!((next - 2.0).abs() < f64::EPSILON);
    }
}
