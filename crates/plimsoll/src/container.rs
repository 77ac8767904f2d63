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

//! # Validated Container Sizing
//!
//! Creation and resizing of standard containers from an attested length.
//! The length, whatever its source type, is validated and narrowed into
//! `usize` before it reaches the allocator, so a negative or oversized
//! request surfaces as a [`SizeError`](crate::error::SizeError) instead of
//! a bogus allocation size. The length check elides for attested lengths
//! whose bound already fits `usize`.

use crate::attest::Attestation;
use crate::cast::cast;
use crate::error::SizeError;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// A sequence container that can be built at, or brought to, a given
/// length.
///
/// Implemented for [`Vec`], [`VecDeque`] and [`SmallVec`]; the sizing
/// operations in this module are generic over it.
pub trait Container {
    /// The element type.
    type Item: Clone;

    /// Builds a container holding `len` clones of `value`.
    fn filled(len: usize, value: Self::Item) -> Self;

    /// Resizes the container to `len` elements, filling any newly created
    /// tail positions with clones of `value`.
    fn resize_to(&mut self, len: usize, value: Self::Item);
}

impl<T: Clone> Container for Vec<T> {
    type Item = T;

    #[inline]
    fn filled(len: usize, value: T) -> Self {
        vec![value; len]
    }

    #[inline]
    fn resize_to(&mut self, len: usize, value: T) {
        self.resize(len, value);
    }
}

impl<T: Clone> Container for VecDeque<T> {
    type Item = T;

    #[inline]
    fn filled(len: usize, value: T) -> Self {
        let mut deque = VecDeque::with_capacity(len);
        deque.resize(len, value);
        deque
    }

    #[inline]
    fn resize_to(&mut self, len: usize, value: T) {
        self.resize(len, value);
    }
}

impl<A> Container for SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Clone,
{
    type Item = A::Item;

    #[inline]
    fn filled(len: usize, value: A::Item) -> Self {
        SmallVec::from_elem(value, len)
    }

    #[inline]
    fn resize_to(&mut self, len: usize, value: A::Item) {
        self.resize(len, value);
    }
}

/// Builds a container of `len` default-valued elements.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] if `len` is negative without a
/// static proof, and [`SizeError::Overflow`] if it does not fit `usize`.
///
/// # Examples
///
/// ```rust
/// # use plimsoll::container::create;
/// let rows: Vec<u64> = create(3i32).unwrap();
/// assert_eq!(rows, vec![0, 0, 0]);
/// ```
#[inline]
pub fn create<C, V>(len: V) -> Result<C, SizeError>
where
    C: Container,
    C::Item: Default,
    V: Attestation,
{
    let len = cast::<usize, V>(len)?;
    Ok(C::filled(len, C::Item::default()))
}

/// Builds a container of `len` clones of `value`, validating the length as
/// [`create`] does.
#[inline]
pub fn create_filled<C, V>(len: V, value: C::Item) -> Result<C, SizeError>
where
    C: Container,
    V: Attestation,
{
    let len = cast::<usize, V>(len)?;
    Ok(C::filled(len, value))
}

/// Resizes a container to `len` elements, defaulting any new tail. The
/// length is validated as in [`create`]; the container is untouched on
/// error.
#[inline]
pub fn resize<C, V>(container: &mut C, len: V) -> Result<(), SizeError>
where
    C: Container,
    C::Item: Default,
    V: Attestation,
{
    let len = cast::<usize, V>(len)?;
    container.resize_to(len, C::Item::default());
    Ok(())
}

/// Resizes a container to `len` elements, filling any new tail with
/// clones of `value`. The length is validated as in [`create`]; the
/// container is untouched on error.
#[inline]
pub fn resize_filled<C, V>(container: &mut C, len: V, value: C::Item) -> Result<(), SizeError>
where
    C: Container,
    V: Attestation,
{
    let len = cast::<usize, V>(len)?;
    container.resize_to(len, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::SmallVec;

    #[test]
    fn test_create_vec() {
        let v: Vec<u64> = create(3i32).unwrap();
        assert_eq!(v, vec![0, 0, 0]);
        let v: Vec<u64> = create(0u8).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_create_filled_vec() {
        let v: Vec<&str> = create_filled(2u8, "x").unwrap();
        assert_eq!(v, vec!["x", "x"]);
    }

    #[test]
    fn test_create_rejects_negative_lengths() {
        let result: Result<Vec<u64>, _> = create(-1i32);
        assert_eq!(result.unwrap_err(), SizeError::OutOfRange);
    }

    #[test]
    fn test_create_rejects_oversized_lengths() {
        // Exceeds usize on every supported platform.
        let result: Result<Vec<u8>, _> = create(1u128 << 70);
        assert_eq!(result.unwrap_err(), SizeError::Overflow);
    }

    #[test]
    fn test_create_deque() {
        let d: VecDeque<i64> = create(4u16).unwrap();
        assert_eq!(d.len(), 4);
        assert!(d.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_create_small_vec_spills_past_inline_capacity() {
        let inline: SmallVec<[u8; 4]> = create_filled(3u8, 7).unwrap();
        assert_eq!(inline.len(), 3);
        assert!(!inline.spilled());

        let spilled: SmallVec<[u8; 4]> = create_filled(9u8, 7).unwrap();
        assert_eq!(spilled.len(), 9);
        assert!(spilled.spilled());
        assert!(spilled.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_resize_grows_and_shrinks() {
        let mut v: Vec<u32> = vec![1, 2, 3];
        resize(&mut v, 5u8).unwrap();
        assert_eq!(v, vec![1, 2, 3, 0, 0]);
        resize(&mut v, 2i64).unwrap();
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn test_resize_filled() {
        let mut v: Vec<u32> = vec![1];
        resize_filled(&mut v, 3u8, 9).unwrap();
        assert_eq!(v, vec![1, 9, 9]);
    }

    #[test]
    fn test_resize_leaves_container_untouched_on_error() {
        let mut v: Vec<u32> = vec![1, 2, 3];
        assert_eq!(resize(&mut v, -4i32), Err(SizeError::OutOfRange));
        assert_eq!(v, vec![1, 2, 3]);
    }
}
