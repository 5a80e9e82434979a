//! In-memory integration tests for dragging tasks across a board.

use super::helpers::{SeededBoard, card_center, pointer, seeded_board};
use corkboard::{
    drag::services::DragOutcome,
    status::domain::StatusId,
    task::{
        domain::{BoardTasks, is_dense},
        ports::TaskSource,
    },
};
use rstest::rstest;

async fn source_titles(
    board: &SeededBoard,
    status_id: StatusId,
) -> Result<Vec<String>, eyre::Report> {
    let tasks = board.tasks.fetch_tasks(board.board_id).await?;
    let stored = BoardTasks::from_tasks(tasks);
    let column = stored.column(status_id);
    eyre::ensure!(is_dense(column), "column {status_id} is not densely numbered");
    Ok(column.iter().map(|task| task.title().to_owned()).collect())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_onto_a_card_inserts_before_it(
    seeded_board: SeededBoard,
) -> Result<(), eyre::Report> {
    let board = seeded_board;
    board.add_task("A", board.todo)?;
    let b = board.add_task("B", board.todo)?;
    board.add_task("C", board.doing)?;
    let mut controller = board.controller().await?;
    let columns = controller.columns(&board.columns);

    controller.on_drag_start(b)?;
    let (x, y) = card_center(1, 0);
    let outcome = controller.on_drag_end(&pointer(&columns, x, y)).await?;

    let DragOutcome::Moved(report) = outcome else {
        return Err(eyre::eyre!("expected B to move"));
    };
    eyre::ensure!(report.reorder_error.is_none(), "reorder was rejected");
    eyre::ensure!(report.reconciled, "board was not reconciled");
    assert_eq!(source_titles(&board, board.todo).await?, ["A"]);
    assert_eq!(source_titles(&board, board.doing).await?, ["B", "C"]);
    let authoritative = BoardTasks::from_tasks(board.tasks.fetch_tasks(board.board_id).await?);
    assert_eq!(controller.board(), &authoritative);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_into_an_empty_column_lands_at_index_zero(
    seeded_board: SeededBoard,
) -> Result<(), eyre::Report> {
    let board = seeded_board;
    let a = board.add_task("A", board.todo)?;
    let mut controller = board.controller().await?;
    let columns = controller.columns(&board.columns);

    controller.on_drag_start(a)?;
    let outcome = controller.on_drag_end(&pointer(&columns, 500, 80)).await?;

    eyre::ensure!(matches!(outcome, DragOutcome::Moved(_)), "expected A to move");
    assert!(source_titles(&board, board.todo).await?.is_empty());
    assert_eq!(source_titles(&board, board.done).await?, ["A"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reordering_within_a_column_keeps_positions_dense(
    seeded_board: SeededBoard,
) -> Result<(), eyre::Report> {
    let board = seeded_board;
    let a = board.add_task("A", board.todo)?;
    board.add_task("B", board.todo)?;
    board.add_task("C", board.todo)?;
    let mut controller = board.controller().await?;
    let columns = controller.columns(&board.columns);

    controller.on_drag_start(a)?;
    let (x, y) = card_center(0, 2);
    controller.on_drag_end(&pointer(&columns, x, y)).await?;

    assert_eq!(source_titles(&board, board.todo).await?, ["B", "C", "A"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_drags_follow_the_reconciled_board(
    seeded_board: SeededBoard,
) -> Result<(), eyre::Report> {
    let board = seeded_board;
    let a = board.add_task("A", board.todo)?;
    let b = board.add_task("B", board.todo)?;
    board.add_task("C", board.doing)?;
    let mut controller = board.controller().await?;

    controller.on_drag_start(a)?;
    let columns = controller.columns(&board.columns);
    let (x, y) = card_center(1, 0);
    controller.on_drag_end(&pointer(&columns, x, y)).await?;

    controller.on_drag_start(b)?;
    let columns = controller.columns(&board.columns);
    let (x, y) = card_center(1, 1);
    controller.on_drag_end(&pointer(&columns, x, y)).await?;

    assert!(source_titles(&board, board.todo).await?.is_empty());
    assert_eq!(source_titles(&board, board.doing).await?, ["A", "B", "C"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_in_place_leaves_the_source_untouched(
    seeded_board: SeededBoard,
) -> Result<(), eyre::Report> {
    let board = seeded_board;
    let a = board.add_task("A", board.todo)?;
    board.add_task("B", board.todo)?;
    let mut controller = board.controller().await?;
    let columns = controller.columns(&board.columns);

    controller.on_drag_start(a)?;
    let (x, y) = card_center(0, 0);
    let outcome = controller.on_drag_end(&pointer(&columns, x, y)).await?;

    eyre::ensure!(matches!(outcome, DragOutcome::Unchanged), "expected no move");
    assert_eq!(source_titles(&board, board.todo).await?, ["A", "B"]);
    Ok(())
}
