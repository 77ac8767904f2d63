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

//! # Plimsoll
//!
//! Overflow-proof size arithmetic for containers, buffers, and indexing.
//! Every operation that moves an integer between types or combines two of
//! them either returns an exact result or reports an error; nothing wraps,
//! truncates, or flips sign silently. Static knowledge about operands is
//! carried in bound attestations, and every runtime check collapses to
//! nothing when an attestation already proves it redundant.
//!
//! ## Modules
//!
//! - `arith`: Overflow-checked `sum` and `product` over attested operands,
//!   variadic folds, unchecked hot-path variants, and the `needs_*_check`
//!   gate constants that drive static check elision.
//! - `attest`: The [`Attestation`](attest::Attestation) protocol, the
//!   `Attested` wrapper carrying a non-negativity proof and a value bound
//!   in its type, and the `attest_*` constructors that refine proofs.
//! - `cast`: Exact narrowing (`cast`), saturating narrowing (`cap`), and
//!   the pointer-offset conversions `to_offset`/`ensure_offset`.
//! - `cmp`: Signedness-safe comparison predicates plus `min`/`max` with a
//!   caller-chosen destination type.
//! - `container`: `Vec`/`VecDeque`/`SmallVec` creation and resizing from
//!   an attested length, validated before it reaches the allocator.
//! - `error`: The [`SizeError`](error::SizeError) type shared by every
//!   fallible operation.
//! - `float`: Truncating float-to-size conversion and exact
//!   size-to-float conversion with a mantissa precision check.
//! - `num`: The [`SizeInt`](num::SizeInt) capability trait and the
//!   per-primitive constant and representation traits beneath it.
//! - `offset`: Unchecked multi-dimensional offset linearization for
//!   indexing loops whose bounds were proven at allocation time.
//! - `verify`: The validation core, `check_non_negative` and
//!   `check_fits`, that every other module builds on.
//!
//! ## Purpose
//!
//! Size computations sit in front of every allocation and every index
//! expression, and the integer conversions they involve fail silently in
//! exactly the cases that matter (values near a type boundary, mixed
//! signedness, 32-bit platforms). These primitives make such failures
//! impossible to ignore while keeping the happy path free of runtime cost
//! wherever the type system can carry the proof.
//!
//! Refer to each module for detailed APIs and examples.

pub mod arith;
pub mod attest;
pub mod cast;
pub mod cmp;
pub mod container;
pub mod error;
pub mod float;
pub mod num;
pub mod offset;
pub mod verify;
