// Automatic placement: one-ply greedy search rewarding immediate row completion.
// Uses no_std and avoids heap allocations.

use super::{
    board::Board,
    common::PlacementTarget,
    config::{BOARD_SIZE, ROW_COMPLETION_POINTS},
    shape::Shape,
};

/// Every origin at which `shape` can be placed, in row-major order
/// (row ascending, then column ascending).
pub fn valid_targets<'a>(
    board: &'a Board,
    shape: &'a Shape,
) -> impl Iterator<Item = PlacementTarget> + 'a {
    let max_row = (BOARD_SIZE + 1).saturating_sub(shape.height());
    let max_col = (BOARD_SIZE + 1).saturating_sub(shape.width());
    (0..max_row)
        .flat_map(move |row| (0..max_col).map(move |col| PlacementTarget::new(row, col)))
        .filter(move |t| board.can_place(shape, t.row, t.col))
}

/// Score a candidate placement: simulate it on a scratch copy and award
/// [`ROW_COMPLETION_POINTS`] for each of the rows spanned by the shape that
/// ends up fully occupied. Invalid targets score zero.
pub fn placement_score(board: &Board, shape: &Shape, target: PlacementTarget) -> u32 {
    let Ok(scratch) = board.with_placed(shape, target) else {
        return 0;
    };
    let completed = (target.row..target.row + shape.height())
        .filter(|&r| scratch.is_row_complete(r))
        .count() as u32;
    completed * ROW_COMPLETION_POINTS
}

/// Choose where `shape` goes.
///
/// The highest-scoring valid origin wins; on equal scores the first one in
/// row-major order is kept. When nothing completes a row every candidate
/// scores zero, so the result is the first valid origin. `None` means the
/// shape fits nowhere.
pub fn find_best_position(board: &Board, shape: &Shape) -> Option<PlacementTarget> {
    let mut best: Option<(u32, PlacementTarget)> = None;
    for target in valid_targets(board, shape) {
        let score = placement_score(board, shape, target);
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, target)),
        }
    }
    best.map(|(_, target)| target)
}
