// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Multi-Dimensional Offsets
//!
//! Linearization of a coordinate into the offset of a flattened
//! multi-dimensional array, with the first coordinate varying fastest.
//! These are hot-path helpers for indexing loops: they perform no
//! validation of their own, because a container allocated through
//! [`product`](crate::arith::product) or
//! [`create`](crate::container::create) already proves that every
//! in-extent offset fits the index type. Debug builds assert that
//! contract.

use crate::attest::Attestation;
use crate::num::repr::AsU128Lossy;
use crate::num::SizeInt;
use crate::verify::ensure_fits;

// Contract-checked narrowing for operands the caller has proven to fit.
#[inline(always)]
fn to_dest<S: SizeInt, V: Attestation>(x: V) -> S {
    debug_assert!(ensure_fits::<S, V>(x).is_ok());
    S::from_u128_lossy(x.value().as_u128_lossy())
}

/// Computes the offset of a coordinate in a flattened N-dimensional
/// array.
///
/// `positions` holds one coordinate per dimension, fastest-varying first;
/// `extents` holds the extent of every dimension except the last, in the
/// same order. The result is the usual
/// `p0 + e0 * (p1 + e1 * (p2 + ...))` pattern.
///
/// The caller must guarantee that every position lies within its
/// dimension's extent and that the product of the extents fits `S`; a
/// violated contract yields an unspecified numeric result.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::offset::nd_offset;
/// // Coordinate (1, 3, 5) in a 2 x 4 x n array.
/// let offset: u64 = nd_offset(&[1u32, 3, 5], &[2u32, 4]);
/// assert_eq!(offset, 47);
/// ```
#[inline]
pub fn nd_offset<S, P, E>(positions: &[P], extents: &[E]) -> S
where
    S: SizeInt,
    P: Attestation,
    E: Attestation,
{
    debug_assert!(positions.is_empty() || positions.len() == extents.len() + 1);
    let (last, rest) = match positions.split_last() {
        Some(split) => split,
        None => return S::zero(),
    };
    let mut offset = to_dest::<S, P>(*last);
    for (i, &position) in rest.iter().enumerate().rev() {
        offset = offset * to_dest::<S, E>(extents[i]) + to_dest::<S, P>(position);
    }
    offset
}

/// Computes a two-dimensional offset, `x1 + extent1 * x2`.
///
/// The fixed-arity form of [`nd_offset`] for the common row/column case,
/// with the same contract; operands may differ in type.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::offset::nd_offset2;
/// // Column 1 of row 3 in a matrix with 2 columns.
/// let offset: usize = nd_offset2(1u8, 2u8, 3u8);
/// assert_eq!(offset, 7);
/// ```
#[inline(always)]
pub fn nd_offset2<S, P1, E1, P2>(x1: P1, extent1: E1, x2: P2) -> S
where
    S: SizeInt,
    P1: Attestation,
    E1: Attestation,
    P2: Attestation,
{
    to_dest::<S, P1>(x1) + to_dest::<S, E1>(extent1) * to_dest::<S, P2>(x2)
}

/// Computes a three-dimensional offset,
/// `x1 + extent1 * (x2 + extent2 * x3)`.
///
/// The fixed-arity form of [`nd_offset`] for three dimensions, with the
/// same contract.
#[inline(always)]
pub fn nd_offset3<S, P1, E1, P2, E2, P3>(
    x1: P1,
    extent1: E1,
    x2: P2,
    extent2: E2,
    x3: P3,
) -> S
where
    S: SizeInt,
    P1: Attestation,
    E1: Attestation,
    P2: Attestation,
    E2: Attestation,
    P3: Attestation,
{
    to_dest::<S, P1>(x1)
        + to_dest::<S, E1>(extent1)
            * (to_dest::<S, P2>(x2) + to_dest::<S, E2>(extent2) * to_dest::<S, P3>(x3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nd_offset_three_dimensions() {
        let offset: u64 = nd_offset(&[1u32, 3, 5], &[2u32, 4]);
        assert_eq!(offset, 47);
    }

    #[test]
    fn test_nd_offset_degenerate_shapes() {
        let empty: u32 = nd_offset(&[] as &[u8], &[] as &[u8]);
        assert_eq!(empty, 0);
        let single: u32 = nd_offset(&[7u8], &[] as &[u8]);
        assert_eq!(single, 7);
    }

    #[test]
    fn test_nd_offset_walks_a_row_major_matrix() {
        // 2 columns by 3 rows; offsets must enumerate 0..6 without gaps.
        let mut seen = Vec::new();
        for row in 0..3u32 {
            for col in 0..2u32 {
                seen.push(nd_offset::<usize, _, _>(&[col, row], &[2u32]));
            }
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_nd_offset2() {
        let offset: usize = nd_offset2(1u8, 2u8, 3u8);
        assert_eq!(offset, 7);
        let mixed: u64 = nd_offset2(1u8, 10u32, 3i64);
        assert_eq!(mixed, 31);
    }

    #[test]
    fn test_nd_offset3_matches_the_slice_form() {
        let fixed: u64 = nd_offset3(1u16, 2u16, 3u16, 4u16, 5u16);
        let sliced: u64 = nd_offset(&[1u16, 3, 5], &[2u16, 4]);
        assert_eq!(fixed, 47);
        assert_eq!(fixed, sliced);
    }
}
