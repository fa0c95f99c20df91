//! Bucket hashing for the scheme store.
//!
//! The accumulator is a 32-bit signed integer updated per code point as
//! `acc * 31 + code_point` with two's-complement wraparound. Bucket placement
//! depends on it, so it must stay bit-for-bit stable across releases.

/// Multiplier applied to the accumulator before each code point.
pub const HASH_MULTIPLIER: i32 = 31;

/// Raw 32-bit accumulator for `key`.
#[must_use]
pub fn bucket_hash(key: &str) -> i32 {
    key.chars().fold(0_i32, |acc, c| {
        // Every `char` is at most 0x10FFFF, which fits in i32.
        #[expect(clippy::cast_possible_wrap)]
        let code_point = u32::from(c) as i32;

        acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(code_point)
    })
}

/// Bucket index for `key` in a table of `bucket_count` buckets, or `None`
/// for an empty table.
///
/// `i32::MIN` has no positive counterpart in i32; its magnitude is taken as
/// 2^31 before the modulo.
#[must_use]
pub fn bucket_index(key: &str, bucket_count: usize) -> Option<usize> {
    let magnitude = bucket_hash(key).unsigned_abs();

    // u32 always fits in usize on supported targets.
    (magnitude as usize).checked_rem(bucket_count)
}
