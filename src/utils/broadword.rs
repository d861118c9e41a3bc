/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

const ONES_STEP_4: u64 = 0x1111_1111_1111_1111;
const ONES_STEP_8: u64 = 0x0101_0101_0101_0101;
const MSBS_STEP_8: u64 = 0x80 * ONES_STEP_8;

/// `SELECT_IN_BYTE[b][r]` is the position of the set bit of rank `r` in the
/// byte `b`, or 8 if there is no such bit.
const SELECT_IN_BYTE: [[u8; 8]; 256] = {
    let mut table = [[8_u8; 8]; 256];
    let mut byte = 0;
    while byte < 256 {
        let mut rank = 0;
        let mut pos = 0;
        while pos < 8 {
            if byte & (1 << pos) != 0 {
                table[byte][rank] = pos as u8;
                rank += 1;
            }
            pos += 1;
        }
        byte += 1;
    }
    table
};

/// Return the position of the set bit of rank `rank` (starting from zero) in
/// `word`.
///
/// The byte containing the bit is located with broadword arithmetic on the
/// cumulative byte counts, and the bit is then looked up in a table. `word`
/// must contain more than `rank` ones; otherwise the result is meaningless,
/// but the function still runs in constant time.
///
/// # Examples
/// ```
/// use rice_fenwick::utils::select_in_word;
///
/// assert_eq!(select_in_word(0b1011_0000, 0), 4);
/// assert_eq!(select_in_word(0b1011_0000, 2), 7);
/// assert_eq!(select_in_word(1 << 63, 0), 63);
/// ```
#[must_use]
#[inline]
pub fn select_in_word(word: u64, rank: usize) -> usize {
    debug_assert!(rank < word.count_ones() as usize);
    // Popcount of each byte
    let mut s = word - ((word & (0xa * ONES_STEP_4)) >> 1);
    s = (s & (0x3 * ONES_STEP_4)) + ((s >> 2) & (0x3 * ONES_STEP_4));
    s = (s + (s >> 4)) & (0xf * ONES_STEP_8);
    // Byte i contains the number of ones in bytes 0 . . i
    let byte_sums = s.wrapping_mul(ONES_STEP_8);

    // The most significant bit of byte i is set iff byte_sums[i] <= rank
    let rank_step_8 = (rank as u64 & 0x7f).wrapping_mul(ONES_STEP_8);
    let leq_rank = ((rank_step_8 | MSBS_STEP_8) - byte_sums) & MSBS_STEP_8;
    let place = (leq_rank.count_ones() * 8).min(56);
    let byte_rank = (rank as u64).wrapping_sub(((byte_sums << 8) >> place) & 0xff);
    let byte = ((word >> place) & 0xff) as usize;
    place as usize + SELECT_IN_BYTE[byte][(byte_rank & 7) as usize] as usize
}
