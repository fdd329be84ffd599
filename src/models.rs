use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_ID;

/// A post as exchanged with the remote API.
///
/// `id` is assigned by the server and stays `None` for drafts; it is left
/// out of the JSON entirely when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl Post {
    /// An empty draft authored by `user_id`
    pub fn draft(user_id: u64) -> Self {
        Post {
            id: None,
            title: String::new(),
            body: String::new(),
            user_id,
        }
    }

    /// Both title and body contain something other than whitespace
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }
}

impl Default for Post {
    fn default() -> Self {
        Post::draft(DEFAULT_USER_ID)
    }
}

/// Form field currently receiving input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Body,
}

impl DraftField {
    pub fn next(&self) -> DraftField {
        match self {
            DraftField::Title => DraftField::Body,
            DraftField::Body => DraftField::Title,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DraftField::Title => "Title",
            DraftField::Body => "Body",
        }
    }
}
