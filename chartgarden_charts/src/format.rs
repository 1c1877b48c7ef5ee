// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting shared by labels and document attributes.

use core::fmt;

/// Formats an `f64` in its shortest round-trip form.
///
/// `-0`, non-finite values and trigonometric residue (below `1e-9` in magnitude) print as `0`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Num(pub(crate) f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() || self.0.abs() < 1e-9 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
