//! Domain entities - the core business objects.

mod comment;
mod post;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post};
