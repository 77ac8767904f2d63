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

//! # Numeric Foundations
//!
//! Compile-time facts and by-value conversions for the integer types this
//! crate operates on. The traits here give generic code uniform access to
//! per-type constants (maximum, signedness, digit count) and to the common
//! `u128` representation used for signedness-safe comparison.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`MaxAsU128`, `Signedness`,
//!   `Digits`, `FloatDigits`) implemented for all core integer and float
//!   types, feeding the compile-time check-elision gates.
//! - `repr`: By-value widening/narrowing traits (`AsU128Lossy`,
//!   `FromU128Lossy`) through the common `u128` representation.
//!
//! ## Motivation
//!
//! Size arithmetic must stay generic over integer types without inheriting
//! the pitfalls of mixed signed/unsigned comparison or per-type special
//! cases. Collecting the required capabilities into one umbrella trait keeps
//! every operation signature down to a single bound.

use std::fmt::{Debug, Display};

use num_traits::PrimInt;

pub mod constants;
pub mod repr;

use constants::{Digits, MaxAsU128, Signedness};
use repr::{AsU128Lossy, FromU128Lossy};

/// A trait alias for integer types usable as sizes, extents, and offsets.
///
/// This collects the intrinsic capabilities (`PrimInt`), the compile-time
/// facts consumed by the static check-elision gates, and the `u128`
/// conversions used for signedness-safe comparison. All twelve primitive
/// integer types implement it through the blanket impl.
pub trait SizeInt:
    PrimInt
    + MaxAsU128
    + Signedness
    + Digits
    + AsU128Lossy
    + FromU128Lossy
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> SizeInt for T where
    T: PrimInt
        + MaxAsU128
        + Signedness
        + Digits
        + AsU128Lossy
        + FromU128Lossy
        + Debug
        + Display
        + Send
        + Sync
{
}
