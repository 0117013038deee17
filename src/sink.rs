//! Destinations for generated candidates and matched words.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives the candidate strings as batches complete.
///
/// Every string is delivered once, the first time any batch produces it.
pub trait CandidateSink {
    fn accept(&mut self, words: &[String]) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CandidateSink for NullSink {
    fn accept(&mut self, _words: &[String]) -> io::Result<()> {
        Ok(())
    }
}

/// Appends one word per line to a writer.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
    lines: usize,
}

impl LineSink<BufWriter<File>> {
    /// Truncate (or create) `path` and append to it from then on.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CandidateSink for LineSink<W> {
    fn accept(&mut self, words: &[String]) -> io::Result<()> {
        for word in words {
            writeln!(self.writer, "{}", word)?;
        }
        self.lines += words.len();
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Write `words` to `path`, one per line, replacing any previous content.
pub fn write_word_list<P: AsRef<Path>>(path: P, words: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for word in words {
        writeln!(writer, "{}", word)?;
    }
    writer.flush()
}

/// File holding every candidate of `length` letters
pub fn candidates_file(dir: &Path, length: usize) -> PathBuf {
    dir.join(format!("words_{}_letters.txt", length))
}

/// File holding the dictionary words of `length` letters
pub fn matches_file(dir: &Path, length: usize) -> PathBuf {
    dir.join(format!("valid_words_{}_letters.txt", length))
}
