//! Binary search over an x-monotone vertex chain.

use crate::predicates::{approx_eq, gt, lt};
use crate::types::Point2;

/// Locate the bracketing interval of `chain` for `query_x`.
///
/// `ascending` declares the chain's monotonic direction. The result is the
/// largest index `i` such that, walking the chain in that direction,
/// `chain[i].x` is on or before `query_x`; the bracketing segment is then
/// `[chain[i], chain[i + 1]]`. An eps-exact coordinate match returns that
/// index directly. Returns `None` when `query_x` lies outside the chain's
/// x-range in the declared direction.
///
/// The result may be the chain's last index. Callers must treat that as a
/// degenerate zero-length bracket at the final vertex rather than indexing
/// past the end; the containment test relies on this convention.
pub fn find_bracket(query_x: f64, chain: &[Point2], ascending: bool, eps: f64) -> Option<usize> {
    if chain.is_empty() {
        return None;
    }
    let first = chain[0].x;
    let last = chain[chain.len() - 1].x;
    if ascending {
        if lt(query_x, first, eps) || gt(query_x, last, eps) {
            return None;
        }
    } else if gt(query_x, first, eps) || lt(query_x, last, eps) {
        return None;
    }

    // Signed indices: `right` transiently reaches -1 only when the query is
    // out of range, which the check above has already excluded.
    let mut left: i64 = 0;
    let mut right: i64 = chain.len() as i64 - 1;
    while left <= right {
        let mid = (left + right) / 2;
        let x = chain[mid as usize].x;
        if approx_eq(x, query_x, eps) {
            return Some(mid as usize);
        }
        if (x < query_x) == ascending {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }
    // The loop ends with left = right + 1: chain[right].x is on or before
    // query_x in the declared direction, chain[right + 1].x strictly after.
    Some(right as usize)
}
