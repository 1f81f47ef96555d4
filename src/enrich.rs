//! Comment-Count Enrichment
//!
//! The board list shows a comment count per entry, but the backend only
//! exposes counts through `GET /board/{id}/comments`. The counts are
//! fetched as an unordered concurrent fan-out and jointly awaited, giving
//! one `Result` per entry; collapsing those into a single outcome is a
//! separate, deliberate step so the partial-failure policy stays visible
//! at the call site.

use futures::future::join_all;
use web_sys::AbortSignal;

use crate::api::{self, ApiError};
use crate::models::Board;

/// A board entry joined with its comment count, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub board: Board,
    pub comment_count: usize,
}

/// Fan-out: fetch every entry's comment count concurrently.
///
/// Preserves input order and returns a result per entry; nothing is
/// committed or dropped here.
pub async fn with_comment_counts(
    boards: Vec<Board>,
    signal: Option<AbortSignal>,
) -> Vec<(Board, Result<usize, ApiError>)> {
    let fetches = boards.into_iter().map(|board| {
        let signal = signal.clone();
        async move {
            let count = api::list_comments(board.board_number, signal.as_ref())
                .await
                .map(|comments| comments.len());
            (board, count)
        }
    });
    join_all(fetches).await
}

/// Fan-in: all-or-nothing collapse.
///
/// One failed count fails the whole population step and the list is not
/// updated. The first error (in entry order) is returned.
pub fn require_all(
    results: Vec<(Board, Result<usize, ApiError>)>,
) -> Result<Vec<BoardRow>, ApiError> {
    results
        .into_iter()
        .map(|(board, count)| count.map(|comment_count| BoardRow { board, comment_count }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_board(id: u32) -> Board {
        Board {
            board_number: id,
            board_title: format!("Entry {id}"),
            board_writer_nickname: "mina".into(),
            board_writer_profile: None,
            board_content: "body".into(),
            board_image: None,
            board_write_date: "2024-04-01".into(),
            board_click_count: 0,
        }
    }

    #[test]
    fn test_all_counts_present_commits_every_row() {
        let results = vec![
            (make_board(1), Ok(3)),
            (make_board(2), Ok(0)),
            (make_board(3), Ok(12)),
        ];

        let rows = require_all(results).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].board.board_number, 1);
        assert_eq!(rows[0].comment_count, 3);
        assert_eq!(rows[1].comment_count, 0);
        assert_eq!(rows[2].comment_count, 12);
    }

    #[test]
    fn test_single_failure_aborts_the_whole_commit() {
        let results = vec![
            (make_board(1), Ok(3)),
            (make_board(2), Err(ApiError::Status(502))),
            (make_board(3), Ok(12)),
        ];

        let err = require_all(results).unwrap_err();
        assert!(matches!(err, ApiError::Status(502)));
    }

    #[test]
    fn test_first_error_wins() {
        let results = vec![
            (make_board(1), Err(ApiError::Status(500))),
            (make_board(2), Err(ApiError::Status(404))),
        ];

        let err = require_all(results).unwrap_err();
        assert!(matches!(err, ApiError::Status(500)));
    }

    #[test]
    fn test_empty_list_commits_empty() {
        assert!(require_all(Vec::new()).unwrap().is_empty());
    }
}
