//! DEFLATE symbol partitions (RFC 1951 Section 3.2.5).
//!
//! Match lengths and distances are not coded directly; each value falls
//! into a fixed class (a symbol) followed by a few extra bits. These tables
//! give the class boundaries used by the symbol tally and by any entropy
//! coder sitting downstream.

/// Minimum match length.
pub const MIN_MATCH: usize = 3;

/// Maximum match length.
pub const MAX_MATCH: usize = 258;

/// Maximum back-reference distance (32KB window).
pub const WINDOW_SIZE: usize = 32768;

/// Size of the literal/length alphabet including the two reserved slots.
pub const LITLEN_SYMBOLS: usize = 288;

/// Size of the distance alphabet including the two reserved slots.
pub const DIST_SYMBOLS: usize = 32;

/// End of block symbol.
pub const END_OF_BLOCK: usize = 256;

/// Length code base values.
///
/// For length codes 257-285, this gives the smallest length in the class.
pub const LENGTH_BASE: [u16; 29] = [
    3, 4, 5, 6, 7, 8, 9, 10, // 257-264: 0 extra bits
    11, 13, 15, 17, // 265-268: 1 extra bit
    19, 23, 27, 31, // 269-272: 2 extra bits
    35, 43, 51, 59, // 273-276: 3 extra bits
    67, 83, 99, 115, // 277-280: 4 extra bits
    131, 163, 195, 227, // 281-284: 5 extra bits
    258, // 285: 0 extra bits
];

/// Number of extra bits for length codes 257-285.
pub const LENGTH_EXTRA_BITS: [u8; 29] = [
    0, 0, 0, 0, 0, 0, 0, 0, // 257-264
    1, 1, 1, 1, // 265-268
    2, 2, 2, 2, // 269-272
    3, 3, 3, 3, // 273-276
    4, 4, 4, 4, // 277-280
    5, 5, 5, 5, // 281-284
    0, // 285
];

/// Distance code base values for codes 0-29.
pub const DISTANCE_BASE: [u16; 30] = [
    1, 2, 3, 4, // 0-3: 0 extra bits
    5, 7, // 4-5: 1 extra bit
    9, 13, // 6-7: 2 extra bits
    17, 25, // 8-9: 3 extra bits
    33, 49, // 10-11: 4 extra bits
    65, 97, // 12-13: 5 extra bits
    129, 193, // 14-15: 6 extra bits
    257, 385, // 16-17: 7 extra bits
    513, 769, // 18-19: 8 extra bits
    1025, 1537, // 20-21: 9 extra bits
    2049, 3073, // 22-23: 10 extra bits
    4097, 6145, // 24-25: 11 extra bits
    8193, 12289, // 26-27: 12 extra bits
    16385, 24577, // 28-29: 13 extra bits
];

/// Number of extra bits for distance codes 0-29.
pub const DISTANCE_EXTRA_BITS: [u8; 30] = [
    0, 0, 0, 0, // 0-3
    1, 1, // 4-5
    2, 2, // 6-7
    3, 3, // 8-9
    4, 4, // 10-11
    5, 5, // 12-13
    6, 6, // 14-15
    7, 7, // 16-17
    8, 8, // 18-19
    9, 9, // 20-21
    10, 10, // 22-23
    11, 11, // 24-25
    12, 12, // 26-27
    13, 13, // 28-29
];

/// Map a match length (3-258) to its literal/length symbol (257-285).
pub fn length_symbol(length: u16) -> usize {
    debug_assert!(
        (3..=258).contains(&length),
        "Length out of range: {}",
        length
    );

    let length = length as usize;
    match length {
        0..=10 => length + 254,
        11..=18 => (length - 11) / 2 + 265,
        19..=34 => (length - 19) / 4 + 269,
        35..=66 => (length - 35) / 8 + 273,
        67..=130 => (length - 67) / 16 + 277,
        131..=257 => (length - 131) / 32 + 281,
        _ => 285,
    }
}

/// Number of extra bits carried by the symbol of `length`.
pub fn length_extra_bits(length: u16) -> u8 {
    LENGTH_EXTRA_BITS[length_symbol(length) - 257]
}

/// Value of the extra bits carried by the symbol of `length`.
pub fn length_extra_value(length: u16) -> u16 {
    length - LENGTH_BASE[length_symbol(length) - 257]
}

/// Map a distance (1-32768) to its distance symbol (0-29).
pub fn dist_symbol(distance: u16) -> usize {
    debug_assert!(distance >= 1, "Distance out of range: {}", distance);

    if distance < 5 {
        return distance.saturating_sub(1) as usize;
    }
    // Two symbols per power of two: the highest set bit picks the pair and
    // the bit below it picks the half.
    let d = u32::from(distance - 1);
    let log2 = 31 - d.leading_zeros();
    let second = (d >> (log2 - 1)) & 1;
    (log2 * 2 + second) as usize
}

/// Number of extra bits carried by the symbol of `distance`.
pub fn dist_extra_bits(distance: u16) -> u8 {
    DISTANCE_EXTRA_BITS[dist_symbol(distance)]
}

/// Value of the extra bits carried by the symbol of `distance`.
pub fn dist_extra_value(distance: u16) -> u16 {
    distance - DISTANCE_BASE[dist_symbol(distance)]
}
