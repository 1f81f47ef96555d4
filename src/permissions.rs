//! Display-Layer Authorization
//!
//! Predicates deciding what the current viewer may see or trigger. These
//! gate UI affordances only; the backend enforces the same rules
//! independently and must never trust the client.

use crate::models::{Board, User};

/// Whether edit/delete controls should render for `current_user` on `entry`.
///
/// True only for the authenticated author of the entry.
pub fn can_edit(current_user: Option<&User>, entry: &Board) -> bool {
    current_user.is_some_and(|user| user.user_nickname == entry.board_writer_nickname)
}

/// Whether opening `entry` should increment its view counter.
///
/// Self-view exclusion: the author's own visits don't count. Anonymous
/// viewers always count.
pub fn should_count_view(current_user: Option<&User>, entry: &Board) -> bool {
    current_user.is_none_or(|user| user.user_nickname != entry.board_writer_nickname)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_board(author: &str) -> Board {
        Board {
            board_number: 1,
            board_title: "Onsite loop at BigCo".into(),
            board_writer_nickname: author.into(),
            board_writer_profile: None,
            board_content: "Five rounds, two system design.".into(),
            board_image: None,
            board_write_date: "2024-03-18".into(),
            board_click_count: 12,
        }
    }

    fn make_user(nickname: &str) -> User {
        User {
            user_nickname: nickname.into(),
        }
    }

    #[test]
    fn test_author_can_edit() {
        let board = make_board("mina");
        assert!(can_edit(Some(&make_user("mina")), &board));
    }

    #[test]
    fn test_non_author_cannot_edit() {
        let board = make_board("mina");
        assert!(!can_edit(Some(&make_user("jun")), &board));
    }

    #[test]
    fn test_anonymous_cannot_edit() {
        let board = make_board("mina");
        assert!(!can_edit(None, &board));
    }

    #[test]
    fn test_author_view_is_not_counted() {
        let board = make_board("mina");
        assert!(!should_count_view(Some(&make_user("mina")), &board));
    }

    #[test]
    fn test_other_viewers_are_counted() {
        let board = make_board("mina");
        assert!(should_count_view(Some(&make_user("jun")), &board));
        assert!(should_count_view(None, &board));
    }
}
