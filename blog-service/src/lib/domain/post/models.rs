use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::identity::models::IdentityId;
use crate::domain::post::errors::PostContentError;
use crate::domain::post::errors::PostIdError;
use crate::domain::post::errors::PostTitleError;

/// Blog post aggregate.
///
/// Drafts (`published == false`) are only visible to their author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub text_content: PostContent,
    pub published: bool,
    pub author_id: IdentityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_owned_by(&self, identity_id: &IdentityId) -> bool {
        self.author_id == *identity_id
    }
}

/// Post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post title value type
///
/// Trimmed, non-empty, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new valid title.
    ///
    /// # Errors
    /// * `Empty` - Title is blank
    /// * `TooLong` - Title longer than 200 characters
    pub fn new(title: String) -> Result<Self, PostTitleError> {
        let trimmed = title.trim();
        let length = trimmed.chars().count();
        if length == 0 {
            Err(PostTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(PostTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post body, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(text: String) -> Result<Self, PostContentError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Err(PostContentError::Empty)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a post with domain types
#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: PostTitle,
    pub text_content: PostContent,
    pub published: bool,
}

impl CreatePostCommand {
    pub fn new(title: PostTitle, text_content: PostContent, published: bool) -> Self {
        Self {
            title,
            text_content,
            published,
        }
    }
}

/// Command to replace a post's content.
///
/// `published` is optional; when absent the current state is kept.
#[derive(Debug)]
pub struct UpdatePostCommand {
    pub title: PostTitle,
    pub text_content: PostContent,
    pub published: Option<bool>,
}
