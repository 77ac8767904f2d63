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

//! # Size Errors
//!
//! The two recoverable failure kinds raised by validated size operations.
//! Everything fallible in this crate returns `Result<_, SizeError>`; the two
//! variants stay distinguishable so callers can react differently to a sign
//! violation and a range violation.
//!
//! Contract violations, such as constructing an attestation whose value
//! breaks the bound it claims to attest, are not represented here. Those are
//! bugs in the calling code and fail through assertions instead.

/// The error type for validated size arithmetic, casting, and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// A value required to be non-negative was negative at runtime and no
    /// static proof ruled that out.
    OutOfRange,
    /// A value or an arithmetic result does not fit into the requested
    /// destination integer type.
    Overflow,
}

impl std::fmt::Display for SizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "Value is negative and cannot be used as a size"),
            Self::Overflow => write!(f, "Value does not fit into the destination type"),
        }
    }
}

impl std::error::Error for SizeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let message = format!("{}", SizeError::OutOfRange);
        assert!(message.contains("negative"));
    }

    #[test]
    fn test_display_overflow() {
        let message = format!("{}", SizeError::Overflow);
        assert!(message.contains("destination"));
    }

    #[test]
    fn test_variants_are_distinguishable() {
        assert_ne!(SizeError::OutOfRange, SizeError::Overflow);
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(SizeError::Overflow);
        assert!(err.source().is_none());
    }
}
