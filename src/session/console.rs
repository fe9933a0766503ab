use super::SessionError;
use std::fmt::Display;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::error;

/// Line-oriented prompt/answer console over any async reader and writer.
///
/// The binary wires it to stdin/stdout; tests use a byte slice and a `Vec<u8>`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `text` as-is and flushes, so prompts appear before input is read.
    pub async fn write(&mut self, text: &str) -> Result<(), SessionError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub async fn write_line(&mut self, text: &str) -> Result<(), SessionError> {
        self.write(text).await?;
        self.write("\n").await
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub async fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prints `prompt` and reads the answer. End of input is an error here.
    pub async fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.write(prompt).await?;
        self.read_line().await?.ok_or(SessionError::InputClosed)
    }

    /// Prints `prompt` and parses the answer as a number.
    pub async fn ask_number<T>(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> Result<T, SessionError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let answer = self.ask(prompt).await?;
        parse_number(field, &answer).map_err(|e| {
            error!(error = %e, "Malformed number");
            e
        })
    }
}

/// Parses a numeric answer, ignoring surrounding whitespace.
pub fn parse_number<T>(field: &'static str, input: &str) -> Result<T, SessionError>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .trim()
        .parse()
        .map_err(|e: T::Err| SessionError::InvalidNumber {
            field,
            input: input.to_string(),
            reason: e.to_string(),
        })
}
