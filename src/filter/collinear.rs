//! Removal of solutions with three queens on one straight line

use crate::board::Coordinate;
use crate::search::Solution;
use itertools::Itertools;

/// Whether three points lie on a common line, of any slope.
///
/// Compares the slopes p1→p2 and p2→p3 by cross-multiplying, so the test is
/// exact integer arithmetic with no division.
pub fn are_collinear(p1: Coordinate, p2: Coordinate, p3: Coordinate) -> bool {
    let (x1, y1) = (p1.x as i64, p1.y as i64);
    let (x2, y2) = (p2.x as i64, p2.y as i64);
    let (x3, y3) = (p3.x as i64, p3.y as i64);
    (y3 - y2) * (x2 - x1) == (y2 - y1) * (x3 - x2)
}

/// First unordered triple of collinear queens, if any
pub fn find_collinear_triplet(queens: &[Coordinate]) -> Option<[Coordinate; 3]> {
    if queens.len() < 3 {
        return None;
    }

    queens
        .iter()
        .copied()
        .tuple_combinations()
        .find(|&(p1, p2, p3)| are_collinear(p1, p2, p3))
        .map(|(p1, p2, p3)| [p1, p2, p3])
}

pub fn has_collinear_triplet(queens: &[Coordinate]) -> bool {
    find_collinear_triplet(queens).is_some()
}

/// Keep only solutions with no three collinear queens, preserving their order
pub fn strip_collinear_triplets(solutions: Vec<Solution>) -> Vec<Solution> {
    solutions
        .into_iter()
        .filter(|solution| match find_collinear_triplet(solution.queens()) {
            Some([p1, p2, p3]) => {
                log::trace!("Dropping solution with queens {p1}, {p2}, {p3} in line");
                false
            }
            None => true,
        })
        .collect()
}
