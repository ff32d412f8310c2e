//! Picking one entry out of a numbered menu.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::error::{Error, Result};
use crate::output::{print_menu, print_prompt, print_warning};

/// Something that selects an index out of `options`.
#[async_trait]
pub trait Chooser: Send {
    /// Return an index into `options`. `options` is never empty.
    async fn choose(&mut self, heading: &str, options: &[String]) -> Result<usize>;
}

/// Numbered menu on stdout, selection read line by line from `R` (stdin by
/// default).
pub struct ConsoleChooser<R = BufReader<Stdin>> {
    lines: Lines<R>,
}

impl ConsoleChooser {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl Default for ConsoleChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleChooser<R> {
    /// Read selections from `reader` instead of stdin.
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Chooser for ConsoleChooser<R> {
    async fn choose(&mut self, heading: &str, options: &[String]) -> Result<usize> {
        print_menu(heading, options);

        loop {
            print_prompt("Choose");

            let line = self
                .lines
                .next_line()
                .await?
                .ok_or_else(|| Error::InvalidSelection("input closed".into()))?;

            match parse_selection(&line, options.len()) {
                Ok(index) => return Ok(index),
                Err(e) => print_warning(&e.to_string()),
            }
        }
    }
}

/// Plays back selections given up front, then defers to another chooser.
///
/// Without a fallback, running out of selections is an error.
pub struct PresetChooser<C = ConsoleChooser> {
    preset: VecDeque<usize>,
    fallback: Option<C>,
}

impl<C: Chooser> PresetChooser<C> {
    pub fn new(preset: impl IntoIterator<Item = usize>, fallback: Option<C>) -> Self {
        Self {
            preset: preset.into_iter().collect(),
            fallback,
        }
    }

    /// Selections not consumed yet.
    pub fn remaining(&self) -> usize {
        self.preset.len()
    }
}

#[async_trait]
impl<C: Chooser> Chooser for PresetChooser<C> {
    async fn choose(&mut self, heading: &str, options: &[String]) -> Result<usize> {
        if let Some(index) = self.preset.pop_front() {
            if index >= options.len() {
                return Err(Error::InvalidSelection(format!(
                    "{} is out of range for '{}' (0-{})",
                    index,
                    heading,
                    options.len() - 1
                )));
            }
            tracing::debug!("Preset selection {} for '{}': {}", index, heading, options[index]);
            return Ok(index);
        }

        match self.fallback.as_mut() {
            Some(fallback) => fallback.choose(heading, options).await,
            None => Err(Error::InvalidSelection(format!(
                "no selection given for '{}'",
                heading
            ))),
        }
    }
}

/// Parse a menu selection typed by the user.
pub fn parse_selection(input: &str, len: usize) -> Result<usize> {
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| Error::InvalidSelection(format!("'{}' is not a number", input)))?;

    if index >= len {
        return Err(Error::InvalidSelection(format!(
            "{} is out of range (0-{})",
            index,
            len.saturating_sub(1)
        )));
    }

    Ok(index)
}

/// Parse a comma separated list of selections, e.g. `0,2,1`.
pub fn parse_selection_path(input: &str) -> Result<Vec<usize>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse().map_err(|_| {
                Error::InvalidSelection(format!("'{}' in selection path is not a number", part))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {}", i)).collect()
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("0", 3).unwrap(), 0);
        assert_eq!(parse_selection(" 2 \n", 3).unwrap(), 2);
        assert!(parse_selection("3", 3).is_err());
        assert!(parse_selection("-1", 3).is_err());
        assert!(parse_selection("first", 3).is_err());
    }

    #[test]
    fn test_parse_selection_path() {
        assert_eq!(parse_selection_path("0,2, 1").unwrap(), vec![0, 2, 1]);
        assert_eq!(parse_selection_path("").unwrap(), Vec::<usize>::new());
        assert!(parse_selection_path("0,x").is_err());
    }

    #[tokio::test]
    async fn test_preset_chooser_consumes_in_order() {
        let mut chooser = PresetChooser::<ConsoleChooser>::new([1, 0], None);
        assert_eq!(chooser.choose("a", &options(2)).await.unwrap(), 1);
        assert_eq!(chooser.choose("b", &options(2)).await.unwrap(), 0);
        assert_eq!(chooser.remaining(), 0);

        let err = chooser.choose("c", &options(2)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidSelection(_)));
    }

    #[tokio::test]
    async fn test_preset_chooser_out_of_range() {
        let mut chooser = PresetChooser::<ConsoleChooser>::new([5], None);
        let err = chooser.choose("Live", &options(2)).await.unwrap_err();
        assert!(err.to_string().contains("Live"));
    }

    #[tokio::test]
    async fn test_console_chooser_asks_again_until_valid() {
        let input: &[u8] = b"x\n5\n1\n";
        let mut chooser = ConsoleChooser::from_reader(input);
        assert_eq!(chooser.choose("Live", &options(3)).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_console_chooser_closed_input() {
        let input: &[u8] = b"";
        let mut chooser = ConsoleChooser::from_reader(input);
        let err = chooser.choose("Live", &options(3)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidSelection(_)));

        let input: &[u8] = b"7\n";
        let mut chooser = ConsoleChooser::from_reader(input);
        assert!(matches!(
            chooser.choose("Live", &options(3)).await,
            Err(Error::InvalidSelection(_))
        ));
    }

    #[tokio::test]
    async fn test_preset_falls_back_to_console_input() {
        let input: &[u8] = b"2\n";
        let mut chooser = PresetChooser::new([0], Some(ConsoleChooser::from_reader(input)));
        assert_eq!(chooser.choose("a", &options(3)).await.unwrap(), 0);
        assert_eq!(chooser.choose("b", &options(3)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_preset_chooser_falls_back() {
        let fallback = PresetChooser::<ConsoleChooser>::new([1], None);
        let mut chooser = PresetChooser::new([0], Some(fallback));
        assert_eq!(chooser.choose("a", &options(2)).await.unwrap(), 0);
        assert_eq!(chooser.choose("b", &options(2)).await.unwrap(), 1);
    }
}
