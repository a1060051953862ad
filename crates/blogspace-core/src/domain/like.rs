use serde::{Deserialize, Serialize};

/// Like state of a post as seen by one viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeStatus {
    pub liked: bool,
    pub count: usize,
}
