//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its payload variants.
//! - Enforce the non-empty-title rule at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Exactly one payload variant exists and it always matches the
//!   serialized `type` discriminant.
//! - `created_at` is assigned once at creation and never mutated.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable opaque identifier for a note.
///
/// Kept as a string wrapper so identifiers minted by earlier producers of
/// the persisted data round-trip unchanged; fresh ids are UUID v4 text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Note payload discriminant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Plain text note.
    #[default]
    Text,
    /// Note referencing an image by URL.
    Image,
    /// Note pinned to a user-typed location.
    Location,
}

impl NoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Location => "location",
        }
    }
}

/// Geographic payload for location notes.
///
/// Coordinates are user-supplied and intentionally unvalidated; `address`
/// is display text, not a geocoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Variant payload carrying the `type` discriminant.
///
/// Image and location payloads stay optional inside their variant: a note
/// keeps its kind even when the user left the URL or address blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NoteBody {
    Text,
    Image {
        #[serde(
            rename = "imageUrl",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        image_url: Option<String>,
    },
    Location {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<GeoPoint>,
    },
}

/// Canonical note record.
///
/// The serde shape (camelCase keys, `type` discriminant, optional payload
/// keys omitted when absent) is the compatibility boundary with data
/// already written to the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable id used for all lookup mutations.
    pub id: NoteId,
    /// Payload variant; serializes inline as `type` plus variant fields.
    #[serde(flatten)]
    pub body: NoteBody,
    /// Display title; never empty after construction.
    pub title: String,
    /// Free-form body text, may be empty.
    #[serde(default)]
    pub content: String,
    /// Optional label; registered in the category registry when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Creation instant, serialized as RFC 3339 text.
    pub created_at: DateTime<Local>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub completed: bool,
}

/// Creation-boundary validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title was empty or whitespace-only.
    EmptyTitle,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates a text note.
    pub fn text(
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        Self::with_body(NoteBody::Text, title, content)
    }

    /// Creates an image note; `image_url` is attached only when supplied.
    pub fn image(
        title: impl Into<String>,
        content: impl Into<String>,
        image_url: Option<String>,
    ) -> Result<Self, NoteValidationError> {
        Self::with_body(NoteBody::Image { image_url }, title, content)
    }

    /// Creates a location note; `location` is attached only when supplied.
    pub fn location(
        title: impl Into<String>,
        content: impl Into<String>,
        location: Option<GeoPoint>,
    ) -> Result<Self, NoteValidationError> {
        Self::with_body(NoteBody::Location { location }, title, content)
    }

    fn with_body(
        body: NoteBody,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }

        Ok(Self {
            id: NoteId::generate(),
            body,
            title,
            content: content.into().trim().to_string(),
            category: None,
            created_at: Local::now(),
            archived: false,
            completed: false,
        })
    }

    /// Returns the payload discriminant for this note.
    pub fn kind(&self) -> NoteKind {
        match self.body {
            NoteBody::Text => NoteKind::Text,
            NoteBody::Image { .. } => NoteKind::Image,
            NoteBody::Location { .. } => NoteKind::Location,
        }
    }

    /// Flips the archived flag.
    pub fn toggle_archived(&mut self) {
        self.archived = !self.archived;
    }

    /// Flips the completed flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
