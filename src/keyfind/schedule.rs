//! Reference AES-128/256 key schedule generation, used only to build test
//! fixtures for the distance evaluators and reporter. The production
//! scanner never expands a key — it only measures distance from an
//! already-expanded schedule found in memory — so this module is test-only.

use super::util::{key_core, sbox_bytes};

/// Expands a 128-bit key into the 44-word (11-round) schedule, in the
/// detector's reverse-byte-order word convention.
pub(crate) fn expand_128(key: &[u8; 16]) -> [u32; 44] {
    expand::<4, 44>(key)
}

/// Expands a 256-bit key into the 60-word (15-round) schedule, in the
/// detector's reverse-byte-order word convention.
pub(crate) fn expand_256(key: &[u8; 32]) -> [u32; 60] {
    expand::<8, 60>(key)
}

fn expand<const NK: usize, const NW: usize>(key: &[u8]) -> [u32; NW] {
    let mut w = [0u32; NW];
    for (i, word) in w.iter_mut().enumerate().take(NK) {
        *word = u32::from_le_bytes(key[4 * i..4 * i + 4].try_into().unwrap());
    }

    for i in NK..NW {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = key_core(temp, i / NK);
        } else if NK == 8 && i % NK == 4 {
            temp = sbox_bytes(temp);
        }
        w[i] = temp ^ w[i - NK];
    }

    w
}
