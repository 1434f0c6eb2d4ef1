//! Enumerates the storage-layout variants ("tweaks") a real AES-128
//! implementation might apply to its round keys before the distance
//! evaluator runs. Only AES-128 is tweaked — AES-256 is scanned without
//! tweaks, a documented limitation carried over from the original
//! detector this crate is modeled on.

use super::revert::unconvert_key;

/// Bit 0: the schedule was pre-transformed with InvMixColumn as a
/// decryption-side optimisation; undo it before evaluating.
pub(crate) const TWEAK_INVMIXCOLUMN: u8 = 0x1;
/// Bit 1: the 11 round keys were stored in reverse (decryption) order.
pub(crate) const TWEAK_REVERSE_ORDER: u8 = 0x2;
/// All four combinations of the two tweak bits.
pub(crate) const ALL_TWEAKS: [u8; 4] = [0, TWEAK_INVMIXCOLUMN, TWEAK_REVERSE_ORDER, 3];

/// Builds the 44-word working copy for tweak mask `tweak` from the 60-word
/// window `map` (only the first 44 words, one AES-128-sized schedule, are
/// ever read). The original `map` is never mutated.
pub(crate) fn apply_tweak(map: &[u32], tweak: u8) -> [u32; 44] {
    let mut buf = [0u32; 44];

    if tweak & TWEAK_REVERSE_ORDER != 0 {
        for row in 0..11 {
            let src = &map[4 * (10 - row)..4 * (10 - row) + 4];
            buf[4 * row..4 * row + 4].copy_from_slice(src);
        }
    } else {
        buf.copy_from_slice(&map[..44]);
    }

    if tweak & TWEAK_INVMIXCOLUMN != 0 {
        unconvert_key(&mut buf);
    }

    buf
}
