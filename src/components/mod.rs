//! Board Screens
//!
//! Screen and control components, one file per component.

mod board_detail;
mod board_list;
mod comment_section;
mod pagination;

pub use board_detail::BoardDetail;
pub use board_list::BoardList;
pub use comment_section::CommentSection;
pub use pagination::Pagination;
