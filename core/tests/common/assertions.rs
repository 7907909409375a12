// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use timeframe_core::Timeframe;

/// Asserts that the timeframes are non-empty, ascending and pairwise disjoint.
///
/// # Panics
///
/// Panics if any timeframe is empty or overlaps/precedes its predecessor.
#[allow(dead_code)]
pub fn assert_sorted_disjoint(timeframes: &[Timeframe]) {
    for t in timeframes {
        assert!(!t.is_empty(), "Unexpected empty timeframe {t}");
    }
    for pair in timeframes.windows(2) {
        if let [a, b] = pair {
            assert!(a.end() <= b.start(), "{a} and {b} overlap or are unordered");
        }
    }
}

/// Asserts that `parts` tile `whole` exactly, with no gaps or overlaps.
///
/// # Panics
///
/// Panics if the parts do not start at the whole's start, end at its end, or
/// leave a hole between two neighbours.
#[allow(dead_code)]
pub fn assert_partitions(whole: &Timeframe, parts: &[Timeframe]) {
    let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
        panic!("No parts for {whole}");
    };
    assert_eq!(first.start(), whole.start(), "Partition start mismatch");
    assert_eq!(last.end(), whole.end(), "Partition end mismatch");
    for pair in parts.windows(2) {
        if let [a, b] = pair {
            assert_eq!(a.end(), b.start(), "Hole or overlap between {a} and {b}");
        }
    }
    let days: i32 = parts.iter().map(Timeframe::days).sum();
    assert_eq!(days, whole.days(), "Partition day count mismatch");
}
