//! Prints a match either as the bare key or, in verbose mode, as the full
//! expanded schedule plus the residual constraint words.

use std::io::{self, Write};

use super::distance::{residual_128, residual_256};
use super::scanner::Match;

/// Prints a single schedule word. The hex width (8 digits) and trailing
/// space are an external contract this tool must match byte-for-byte
/// with the legacy detector.
fn print_word(w: &mut impl Write, word: u32) -> io::Result<()> {
    write!(w, "{word:08x} ")
}

/// Prints `m` to `out`. In non-verbose mode, just the key words. In
/// verbose mode, the header, key, full extended schedule, and the
/// residual constraint words for every row.
pub fn print_match(out: &mut impl Write, m: &Match, verbose: bool) -> io::Result<()> {
    let num_words = (m.bit_width / 32) as usize;
    let num_roundkeys = if m.bit_width == 256 { 15 } else { 11 };

    if verbose {
        writeln!(out, "FOUND POSSIBLE {}-BIT KEY AT BYTE {:x}", m.bit_width, m.offset)?;
        writeln!(out)?;
        write!(out, "KEY: ")?;
    }

    for &word in &m.words[..num_words] {
        print_word(out, word)?;
    }
    writeln!(out)?;

    if !verbose {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "EXTENDED KEY:")?;
    for row in 0..num_roundkeys {
        for col in 0..4 {
            print_word(out, m.words[4 * row + col])?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "CONSTRAINTS ON ROWS:")?;
    for row in 1..num_roundkeys {
        for column in 0..num_words {
            if m.bit_width == 256 && row == 7 && column >= 4 {
                break;
            }
            let residual = if m.bit_width == 256 {
                let map: &[u32; 60] = m.words[..60].try_into().unwrap();
                residual_256(map, row, column)
            } else {
                let map: &[u32; 44] = m.words[..44].try_into().unwrap();
                residual_128(map, row, column)
            };
            print_word(out, residual)?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    Ok(())
}
