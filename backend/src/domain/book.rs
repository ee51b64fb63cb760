//! Book review records owned by a single user.
//!
//! A [`Book`] only exists inside its owner's collection; the types here carry
//! no owner field because every port operation takes the owner explicitly.

use std::fmt;

use uuid::Uuid;

/// Error returned when a path segment is not a valid book id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookIdValidationError;

impl fmt::Display for BookIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "book id must be a valid UUID")
    }
}

impl std::error::Error for BookIdValidationError {}

/// Opaque book identifier, unique within the owner's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, BookIdValidationError> {
        Uuid::parse_str(raw.as_ref())
            .map(Self)
            .map_err(|_| BookIdValidationError)
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored review. Text fields are free-form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    review: String,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        review: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            review: review.into(),
        }
    }

    /// Materialise a draft under a freshly assigned id.
    pub fn from_draft(id: BookId, draft: &BookDraft) -> Self {
        Self::new(id, &draft.title, &draft.author, &draft.review)
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &BookPatch) {
        if let Some(title) = &patch.title {
            title.clone_into(&mut self.title);
        }
        if let Some(author) = &patch.author {
            author.clone_into(&mut self.author);
        }
        if let Some(review) = &patch.review {
            review.clone_into(&mut self.review);
        }
    }
}

/// Field values for a book that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub review: String,
}

/// Partial update: `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub review: Option<String>,
}

impl BookPatch {
    /// True when the patch would not change anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.review.is_none()
    }
}
