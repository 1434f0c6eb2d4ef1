//! The scan driver: walks every candidate byte offset in the image,
//! consulting the entropy filter, then the AES-256 evaluator, then the
//! four AES-128 tweak evaluations, emitting matches in ascending offset
//! order.

use std::io::Write;

use super::distance::{distance_128, distance_256};
use super::entropy::EntropyFilter;
use super::error::Error;
use super::tweak::{apply_tweak, ALL_TWEAKS};

/// A candidate key schedule found in the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Byte offset into the image where the schedule begins.
    pub offset: usize,
    /// `128` or `256`.
    pub bit_width: u32,
    /// Bit-error count the schedule was found at.
    pub xor_count: u32,
    /// The schedule itself, padded to 60 words (only the first
    /// `bit_width / 32 * (num_round_keys)` words are meaningful — 44 for
    /// AES-128, 60 for AES-256).
    pub words: Vec<u32>,
}

/// Size in bytes of the window the AES-256 evaluator reads.
const WINDOW_256: usize = 240;
/// Size in bytes of the window the entropy filter judges.
const WINDOW_ENTROPY: usize = 176;

/// Minimum image length the scanner can operate on: the AES-256 window
/// must fit past any evaluated offset.
pub const MIN_IMAGE_LEN: usize = WINDOW_256;

/// Reads the little-endian `u32` at byte offset `idx` in `bytes`, without
/// requiring 4-byte alignment — the image is an arbitrary byte blob, not
/// guaranteed word-aligned.
#[inline]
fn read_word_le(bytes: &[u8], idx: usize) -> u32 {
    u32::from_le_bytes(bytes[idx..idx + 4].try_into().unwrap())
}

fn read_window_256(image: &[u8], offset: usize) -> [u32; 60] {
    std::array::from_fn(|w| read_word_le(image, offset + w * 4))
}

/// Scans `image` for AES-128/256 key schedules, invoking `emit` for each
/// match found, in strictly ascending offset order (AES-256 before
/// AES-128 at a given offset; AES-128 tweaks in numeric order). When
/// `progress` is set, writes `Keyfind progress: NN%\r` lines to `stderr`
/// as the scan advances, finishing with a newline at 100%.
///
/// Returns [`Error::ImageTooSmall`] if `image.len() < MIN_IMAGE_LEN`.
pub fn scan_with<F: FnMut(Match)>(
    image: &[u8],
    threshold: u32,
    progress: bool,
    mut emit: F,
) -> Result<(), Error> {
    if image.len() < MIN_IMAGE_LEN {
        return Err(Error::ImageTooSmall { len: image.len() });
    }

    let last = image.len() - WINDOW_256;
    let mut filter = EntropyFilter::new();
    let mut percent = 0usize;
    let stderr = std::io::stderr();

    if progress {
        print_progress(&stderr, 0);
    }

    for i in 0..last {
        if filter.reject(image, i) {
            continue;
        }

        let map256 = read_window_256(image, i);
        if let Some(xor_count) = distance_256(&map256, threshold) {
            emit(Match {
                offset: i,
                bit_width: 256,
                xor_count,
                words: map256.to_vec(),
            });
        }

        for &tweak in &ALL_TWEAKS {
            let buf = apply_tweak(&map256, tweak);
            if let Some(xor_count) = distance_128(&buf, threshold) {
                emit(Match {
                    offset: i,
                    bit_width: 128,
                    xor_count,
                    words: buf.to_vec(),
                });
            }
        }

        if progress {
            let pct = if last > 0 { i * 100 / last } else { 100 };
            if pct > percent {
                percent = pct;
                print_progress(&stderr, percent);
            }
        }
    }

    if progress {
        print_progress(&stderr, 100);
        let _ = writeln!(&stderr);
    }

    Ok(())
}

fn print_progress(mut stderr: impl Write, percent: usize) {
    let _ = write!(stderr, "Keyfind progress: {percent}%\r");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyfind::schedule::expand_128;

    // End-to-end scenarios S1-S6 live in tests/scanner_tests.rs, against
    // the public API only. These cover driver mechanics the integration
    // tests don't: minimum-length rejection and match ordering.

    #[test]
    fn rejects_images_below_minimum_length() {
        let image = vec![0u8; 10];
        let result = scan_with(&image, 10, false, |_| {});
        assert!(matches!(result, Err(Error::ImageTooSmall { len: 10 })));
    }

    #[test]
    fn matches_are_emitted_in_ascending_offset_order() {
        let key: [u8; 16] = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let schedule = expand_128(&key);
        let mut words_bytes = Vec::new();
        for w in schedule {
            words_bytes.extend_from_slice(&w.to_le_bytes());
        }

        let mut image = vec![0u8; 50];
        image.extend_from_slice(&words_bytes);
        image.extend(vec![0u8; 50]);
        image.extend_from_slice(&words_bytes);
        image.extend(vec![0u8; 50]);

        let mut offsets = Vec::new();
        scan_with(&image, 1, false, |m| offsets.push(m.offset)).unwrap();

        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted);
        assert!(offsets.len() >= 2);
    }
}
