use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use thiserror::Error;

use crate::types::{Statistics, TOP_WORDS, WordFrequency};

/// Errors raised while reading and counting a file.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("❌ Error: No se puede leer el archivo. Puede que no sea un archivo de texto válido.")]
    Decode,

    #[error("❌ Error al procesar el archivo: {0}")]
    Io(#[from] io::Error),
}

/// Counts whitespace-separated words in a text file.
///
/// A word is a maximal run of non-whitespace characters; punctuation stays
/// attached and comparisons are case-sensitive. The frequency map keeps
/// first-appearance order, which is the tie-break for the top-10 ranking.
#[derive(Debug, Default)]
pub struct WordCounter {
    words: Vec<String>,
    frequencies: IndexMap<String, usize>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `path` as UTF-8 text and recounts its words.
    ///
    /// Prior results are cleared up front, so a failed run reports zeroed
    /// statistics instead of the previous file's.
    ///
    /// # Errors
    /// Returns `ProcessError::Decode` for non-UTF-8 content and
    /// `ProcessError::Io` for any other read failure.
    pub fn process(&mut self, path: &Path) -> Result<(), ProcessError> {
        self.words.clear();
        self.frequencies.clear();

        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|_| ProcessError::Decode)?;

        self.words = content.split_whitespace().map(str::to_owned).collect();
        for word in &self.words {
            *self.frequencies.entry(word.clone()).or_insert(0) += 1;
        }
        Ok(())
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn distinct_words(&self) -> usize {
        self.frequencies.len()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Derives the report statistics from the last successful count.
    pub fn statistics(&self) -> Statistics {
        let mut ranked: Vec<(&str, usize)> = self
            .frequencies
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        // Stable sort: equal counts keep the map's first-appearance order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(TOP_WORDS);

        Statistics {
            total_words: self.words.len(),
            top_words: ranked
                .into_iter()
                .map(|(word, count)| WordFrequency {
                    word: word.to_owned(),
                    count,
                })
                .collect(),
            is_empty: self.words.is_empty(),
        }
    }
}
