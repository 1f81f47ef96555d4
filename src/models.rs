//! Frontend Models
//!
//! Data structures matching the board backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Board entry (matches backend, camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub board_number: u32,
    pub board_title: String,
    pub board_writer_nickname: String,
    /// Profile image URL, absent for users without one
    #[serde(default)]
    pub board_writer_profile: Option<String>,
    pub board_content: String,
    /// Attached image URL
    #[serde(default)]
    pub board_image: Option<String>,
    /// Rendered as-is, no client-side date handling
    pub board_write_date: String,
    pub board_click_count: u32,
}

/// Comment on a board entry (no id; not editable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub text: String,
}

/// Authenticated user, resolved from the session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_nickname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_backend_json() {
        let json = r#"{
            "boardNumber": 7,
            "boardTitle": "Phone screen recap",
            "boardWriterNickname": "mina",
            "boardWriterProfile": "https://img.example/mina.png",
            "boardContent": "Went better than expected.",
            "boardImage": null,
            "boardWriteDate": "2024-05-02",
            "boardClickCount": 31
        }"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.board_number, 7);
        assert_eq!(board.board_writer_nickname, "mina");
        assert_eq!(board.board_image, None);
        assert_eq!(board.board_click_count, 31);
    }

    #[test]
    fn test_board_optional_fields_absent() {
        let json = r#"{
            "boardNumber": 1,
            "boardTitle": "t",
            "boardWriterNickname": "n",
            "boardContent": "c",
            "boardWriteDate": "2024-01-01",
            "boardClickCount": 0
        }"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.board_writer_profile, None);
        assert_eq!(board.board_image, None);
    }

    #[test]
    fn test_user_and_comment_json() {
        let user: User = serde_json::from_str(r#"{"userNickname":"mina"}"#).unwrap();
        assert_eq!(user.user_nickname, "mina");

        let comment: Comment =
            serde_json::from_str(r#"{"user":"mina","text":"hello"}"#).unwrap();
        assert_eq!(comment.text, "hello");
    }
}
