//! Interactive word length prompt.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// Ask for a word length until the answer is a number inside `range`.
///
/// Returns `Ok(None)` when the input ends before a valid answer is given.
pub fn prompt_word_length<R, W>(
    input: &mut R,
    output: &mut W,
    range: RangeInclusive<usize>,
) -> io::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
{
    let (min, max) = (*range.start(), *range.end());
    loop {
        write!(
            output,
            "Enter the number of letters of the words to search for ({}-{}): ",
            min, max
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(length) if range.contains(&length) => return Ok(Some(length)),
            Ok(_) => writeln!(output, "Enter a number between {} and {}.", min, max)?,
            Err(_) => writeln!(output, "Enter a valid number.")?,
        }
    }
}
