use chrono::Utc;
use tracing::debug;

use yearbook_types::api::NewComment;
use yearbook_types::models::Comment;

use crate::error::Result;
use crate::{Collection, Store};

impl Store {
    /// Comments for one friend in the order they were appended.
    pub fn comments_for_friend(&self, friend_id: i64) -> Result<Vec<Comment>> {
        let comments: Vec<Comment> = self.load(Collection::Comments)?;
        Ok(comments.into_iter().filter(|c| c.friend_id == friend_id).collect())
    }

    /// Stamp, append and persist a comment. Nothing about the input is
    /// validated: unknown friends and empty strings are stored as given.
    pub fn append_comment(&self, new: NewComment) -> Result<Comment> {
        let comment = Comment {
            friend_id: new.friend_id,
            username: new.username,
            comment: new.comment,
            date: Utc::now(),
        };

        let total = self.update(Collection::Comments, |comments: &mut Vec<Comment>| {
            comments.push(comment.clone());
            comments.len()
        })?;

        debug!("Comment appended for friend {} ({} total)", comment.friend_id, total);
        Ok(comment)
    }
}
