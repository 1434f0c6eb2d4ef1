//! Reverses the InvMixColumn storage optimisation some decryption
//! implementations apply to round keys 1..9 of an AES-128 schedule, so the
//! same algebraic distance evaluator can be used regardless of how the
//! schedule was actually laid out in memory.

use super::util::xtime;

/// Word index where the MixColumn-protected region of an 11-round AES-128
/// schedule begins (the start of round key 1).
const FIRST_PROTECTED_WORD: usize = 4;
/// Word index one past the end of the MixColumn-protected region (the
/// start of round key 10, the final round key, which carries no
/// MixColumn step and is therefore left untouched).
const LAST_PROTECTED_WORD: usize = 40;

/// Undoes a forward InvMixColumn transform applied to words `4..40` of an
/// 11-round (44-word) AES-128 schedule, in place. Words `0..4` (the master
/// key) and `40..44` (the last round key) are untouched.
pub(crate) fn unconvert_key(k: &mut [u32; 44]) {
    for word in k.iter_mut().take(LAST_PROTECTED_WORD).skip(FIRST_PROTECTED_WORD) {
        *word = revert_word(*word);
    }
}

/// Applies the forward MixColumn byte transform to a single schedule word,
/// in the detector's reverse-byte-order convention (byte 0 is the
/// least-significant byte of `w`).
fn revert_word(w: u32) -> u32 {
    let a0 = (w & 0xFF) as u8;
    let a1 = ((w >> 8) & 0xFF) as u8;
    let a2 = ((w >> 16) & 0xFF) as u8;
    let a3 = ((w >> 24) & 0xFF) as u8;

    let tmp = a0 ^ a1 ^ a2 ^ a3;
    let old_a0 = a0;

    let a0 = a0 ^ tmp ^ xtime(a0 ^ a1);
    let a1 = a1 ^ tmp ^ xtime(a1 ^ a2);
    let a2 = a2 ^ tmp ^ xtime(a2 ^ a3);
    let a3 = a3 ^ tmp ^ xtime(a3 ^ old_a0);

    a0 as u32 | (a1 as u32) << 8 | (a2 as u32) << 16 | (a3 as u32) << 24
}
