use blockfill::{
    BitBoardError, Board, BoardError, ClickOutcome, CommitOutcome, CyclingShapes, EngineStatus,
    GameEngine, GameOverReason, PlacementTarget, ShapeSource, TickOutcome, BOARD_SIZE, DUO, OCTO,
    QUAD, SINGLE, TRIO,
};

const FULL_ROW: u16 = (1 << BOARD_SIZE) - 1;

/// Tick and commit in one go, as a session would after the placement delay.
fn place_next<S: ShapeSource>(engine: &mut GameEngine<S>) -> PlacementTarget {
    match engine.tick() {
        TickOutcome::Scheduled(pending) => match engine.commit(pending).unwrap() {
            CommitOutcome::Committed { target, .. } => target,
            CommitOutcome::Stale => panic!("fresh placement reported stale"),
        },
        other => panic!("expected a placement, got {:?}", other),
    }
}

fn octo_quad() -> GameEngine<CyclingShapes<2>> {
    GameEngine::new(CyclingShapes::new([OCTO, QUAD]))
}

#[test]
fn test_new_game_is_idle_and_empty() {
    let engine = octo_quad();
    assert_eq!(engine.status(), EngineStatus::Idle);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.board().occupied_count(), 0);
    assert!(engine.completed_rows().is_empty());
    assert_eq!(engine.queue().slots(), &[OCTO, QUAD, OCTO]);
    assert_eq!(engine.queue().cursor(), 0);
    assert_eq!(engine.game_over_reason(), None);
}

#[test]
fn test_octo_then_quad_completes_row_zero_and_clicks_score_it() {
    let mut engine = octo_quad();

    assert_eq!(place_next(&mut engine), PlacementTarget::new(0, 0));
    assert!(engine.completed_rows().is_empty());

    // The quad prefers the only origin that finishes row 0.
    assert_eq!(place_next(&mut engine), PlacementTarget::new(0, 8));
    let completed: Vec<_> = engine.completed_rows().iter().collect();
    assert_eq!(completed, vec![0]);
    assert!(engine.board().is_row_complete(0));

    for col in 0..BOARD_SIZE - 1 {
        assert_eq!(
            engine.click_cell(0, col).unwrap(),
            ClickOutcome::Cleared { row: 0, col }
        );
        assert_eq!(engine.score(), 0);
    }
    assert_eq!(
        engine.click_cell(0, BOARD_SIZE - 1).unwrap(),
        ClickOutcome::RowCleared { row: 0, score: 1 }
    );
    assert_eq!(engine.score(), 1);
    assert!(engine.completed_rows().is_empty());
    assert!(engine.board().is_row_empty(0));
    assert_eq!(engine.status(), EngineStatus::Idle);
}

#[test]
fn test_completed_rows_accumulate_until_cleared() {
    let mut engine = octo_quad();
    place_next(&mut engine);
    place_next(&mut engine);
    // Row 0 is full and left alone; the next pair fills row 1.
    assert_eq!(place_next(&mut engine), PlacementTarget::new(1, 0));
    match engine.tick() {
        TickOutcome::Scheduled(pending) => {
            assert_eq!(pending.shape, QUAD);
            assert_eq!(pending.target, PlacementTarget::new(1, 8));
            match engine.commit(pending).unwrap() {
                CommitOutcome::Committed { completed, .. } => {
                    assert!(completed.contains(0));
                    assert!(completed.contains(1));
                }
                CommitOutcome::Stale => panic!("unexpected stale commit"),
            }
        }
        other => panic!("expected a placement, got {:?}", other),
    }
    let completed: Vec<_> = engine.completed_rows().iter().collect();
    assert_eq!(completed, vec![0, 1]);
    assert_eq!(engine.placements(), 4);
}

#[test]
fn test_tick_with_no_fit_ends_game() {
    let board = Board::from_rows([FULL_ROW; BOARD_SIZE]);
    let mut engine = GameEngine::with_board(CyclingShapes::new([SINGLE]), board);
    assert_eq!(engine.completed_rows().len(), BOARD_SIZE);

    assert_eq!(engine.tick(), TickOutcome::GameOver);
    assert!(engine.is_game_over());
    assert_eq!(
        engine.game_over_reason(),
        Some(GameOverReason::NoValidPlacement)
    );
    assert_eq!(*engine.board(), board);

    // Terminal until reset: ticks and clicks do nothing.
    assert_eq!(engine.tick(), TickOutcome::Ignored);
    assert_eq!(engine.click_cell(0, 0).unwrap(), ClickOutcome::Ignored);
    assert_eq!(*engine.board(), board);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_game_over_when_only_small_gaps_remain() {
    let rows: [u16; BOARD_SIZE] =
        core::array::from_fn(|r| if r % 2 == 0 { 0b0101_0101_0101 } else { 0b1010_1010_1010 });
    let board = Board::from_rows(rows);
    let mut engine = GameEngine::with_board(CyclingShapes::new([DUO]), board);
    assert!(engine.completed_rows().is_empty());
    assert_eq!(engine.tick(), TickOutcome::GameOver);
    assert_eq!(*engine.board(), board);
}

#[test]
fn test_illegal_click_ends_game_without_touching_board() {
    let mut engine = octo_quad();
    place_next(&mut engine);
    let before = *engine.board();

    assert_eq!(engine.click_cell(0, 3).unwrap(), ClickOutcome::IllegalMove);
    assert!(engine.is_game_over());
    assert_eq!(engine.game_over_reason(), Some(GameOverReason::IllegalMove));
    assert_eq!(*engine.board(), before);
    assert_eq!(engine.tick(), TickOutcome::Ignored);
}

#[test]
fn test_empty_click_outside_completed_rows_is_noop() {
    let mut engine = octo_quad();
    place_next(&mut engine);
    let before = engine.snapshot();

    assert_eq!(engine.click_cell(5, 5).unwrap(), ClickOutcome::NoOp);
    assert_eq!(engine.click_cell(0, 11).unwrap(), ClickOutcome::NoOp);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_click_on_cleared_cell_of_completed_row() {
    let mut rows = [0u16; BOARD_SIZE];
    rows[6] = FULL_ROW;
    let mut engine = GameEngine::with_board(CyclingShapes::new([SINGLE]), Board::from_rows(rows));

    assert_eq!(
        engine.click_cell(6, 2).unwrap(),
        ClickOutcome::Cleared { row: 6, col: 2 }
    );
    // Row is still marked completed, so clicking the hole again is harmless.
    assert_eq!(
        engine.click_cell(6, 2).unwrap(),
        ClickOutcome::Cleared { row: 6, col: 2 }
    );
    assert!(!engine.is_game_over());
    assert!(engine.completed_rows().contains(6));
}

#[test]
fn test_click_out_of_range_is_error() {
    let mut engine = octo_quad();
    assert_eq!(
        engine.click_cell(BOARD_SIZE, 0).unwrap_err(),
        BoardError::BitBoardError(BitBoardError::IndexOutOfBounds {
            row: BOARD_SIZE,
            col: 0
        })
    );
    assert!(engine.click_cell(0, BOARD_SIZE).is_err());
    assert!(engine.click_cell(usize::MAX, usize::MAX).is_err());
    assert_eq!(engine.status(), EngineStatus::Idle);
}

#[test]
fn test_ticks_ignored_while_placing() {
    let mut engine = octo_quad();
    let pending = match engine.tick() {
        TickOutcome::Scheduled(p) => p,
        other => panic!("expected a placement, got {:?}", other),
    };
    assert_eq!(engine.status(), EngineStatus::Placing);
    assert_eq!(engine.tick(), TickOutcome::Ignored);
    assert_eq!(engine.board().occupied_count(), 0);

    assert!(matches!(
        engine.commit(pending).unwrap(),
        CommitOutcome::Committed { .. }
    ));
    assert_eq!(engine.status(), EngineStatus::Idle);
    // The same placement cannot be applied twice.
    assert_eq!(engine.commit(pending).unwrap(), CommitOutcome::Stale);
    assert_eq!(engine.board().occupied_count(), OCTO.cell_count());
}

#[test]
fn test_reset_makes_pending_placement_stale() {
    let mut engine = octo_quad();
    let pending = match engine.tick() {
        TickOutcome::Scheduled(p) => p,
        other => panic!("expected a placement, got {:?}", other),
    };
    let generation = engine.generation();
    engine.reset();
    assert_ne!(engine.generation(), generation);

    assert_eq!(engine.commit(pending).unwrap(), CommitOutcome::Stale);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.placements(), 0);
    assert_eq!(engine.status(), EngineStatus::Idle);
}

#[test]
fn test_reset_restores_fresh_game() {
    let fresh = GameEngine::new(CyclingShapes::new([OCTO, QUAD, SINGLE])).snapshot();

    let mut engine = GameEngine::new(CyclingShapes::new([OCTO, QUAD, SINGLE]));
    place_next(&mut engine);
    assert_eq!(engine.click_cell(0, 0).unwrap(), ClickOutcome::IllegalMove);

    engine.reset();
    assert_eq!(engine.snapshot(), fresh);
    engine.reset();
    assert_eq!(engine.snapshot(), fresh);
}

#[test]
fn test_queue_refills_after_three_placements() {
    let mut engine = GameEngine::new(CyclingShapes::new([SINGLE, DUO, TRIO, QUAD]));
    assert_eq!(engine.queue().slots(), &[SINGLE, DUO, TRIO]);

    place_next(&mut engine);
    assert_eq!(engine.queue().cursor(), 1);
    assert_eq!(engine.queue().current(), DUO);
    place_next(&mut engine);
    assert_eq!(engine.queue().cursor(), 2);
    place_next(&mut engine);

    assert_eq!(engine.queue().cursor(), 0);
    assert_eq!(engine.queue().slots(), &[QUAD, SINGLE, DUO]);
    assert_eq!(engine.snapshot().cursor, 0);
}

#[test]
fn test_snapshot_reflects_engine() {
    let mut engine = octo_quad();
    place_next(&mut engine);
    place_next(&mut engine);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.placements, 2);
    assert_eq!(snapshot.status, EngineStatus::Idle);
    assert!(!snapshot.game_over());
    assert!(snapshot.completed_rows.contains(0));
    assert!(snapshot.board.occupied(0, 11));
    assert!(!snapshot.board.occupied(1, 0));
    assert_eq!(snapshot.cursor, 2);
}

#[test]
fn test_illegal_click_while_placing_drops_pending_placement() {
    let mut engine = octo_quad();
    place_next(&mut engine);
    let pending = match engine.tick() {
        TickOutcome::Scheduled(p) => p,
        other => panic!("expected a placement, got {:?}", other),
    };
    assert_eq!(engine.status(), EngineStatus::Placing);
    let before = *engine.board();

    assert_eq!(engine.click_cell(0, 0).unwrap(), ClickOutcome::IllegalMove);
    assert!(engine.is_game_over());

    // Same generation, but the game ended before the delay elapsed.
    assert_eq!(pending.generation, engine.generation());
    assert_eq!(engine.commit(pending).unwrap(), CommitOutcome::Stale);
    assert_eq!(*engine.board(), before);
    assert_eq!(engine.placements(), 1);
    assert_eq!(engine.queue().cursor(), 1);
    assert_eq!(engine.game_over_reason(), Some(GameOverReason::IllegalMove));
}
