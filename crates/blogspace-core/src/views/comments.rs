use std::cmp::Reverse;

use crate::domain::Comment;

/// Shape stored comments into a thread: top-level comments newest first,
/// each with a single level of replies.
///
/// Replies nested deeper than one level are lifted into their top-level
/// comment's reply list, in depth-first order.
pub fn comment_tree(comments: Vec<Comment>) -> Vec<Comment> {
    let mut tree: Vec<Comment> = comments
        .into_iter()
        .map(|mut comment| {
            let mut flat = Vec::new();
            flatten_into(std::mem::take(&mut comment.replies), &mut flat);
            comment.replies = flat;
            comment
        })
        .collect();

    tree.sort_by_key(|c| Reverse(c.created_at));
    tree
}

fn flatten_into(replies: Vec<Comment>, out: &mut Vec<Comment>) {
    for mut reply in replies {
        let nested = std::mem::take(&mut reply.replies);
        out.push(reply);
        flatten_into(nested, out);
    }
}

/// Top-level comments plus replies.
pub fn total_comments(tree: &[Comment]) -> usize {
    tree.iter().map(|c| 1 + c.replies.len()).sum()
}
