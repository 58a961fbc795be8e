//! HTML parsing for WebClass pages. Everything in here is pure: a string in,
//! owned values out, no I/O.

pub mod contents;
pub mod courses;
pub mod query;
pub mod redirect;

pub use contents::{parse_course_contents, share_link_for};
pub use courses::parse_course_links;
pub use redirect::find_redirect_target;
