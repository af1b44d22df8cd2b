//! Note use-case service.
//!
//! # Responsibility
//! - Provide the mutation API: create, delete, toggle-archive,
//!   toggle-complete.
//! - Resolve draft input (trimming, payload attachment, category
//!   precedence) before anything touches the store.
//!
//! # Invariants
//! - Every successful mutation persists the affected collection(s).
//! - Validation failures leave the store untouched.
//! - Lookup mutations on an unknown id are no-ops, never errors.

use crate::kv::KeyValueBackend;
use crate::model::note::{GeoPoint, Note, NoteId, NoteKind, NoteValidationError};
use crate::query::{visible, FilterOptions, Page, ITEMS_PER_PAGE};
use crate::store::{LoadReport, NoteStore, StoreError, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, NoteServiceError>;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Draft input rejected before any state change.
    Validation(NoteValidationError),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Draft input collected by the rendering collaborator.
///
/// Per-kind fields are only read for the matching `kind`; everything is
/// raw user text and gets trimmed during resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    pub kind: NoteKind,
    pub title: String,
    pub content: String,
    /// Image URL input; only meaningful for image drafts.
    pub image_url: String,
    /// Location inputs; only meaningful for location drafts.
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    /// Category picked from the existing registry.
    pub category: String,
    /// Freshly typed category; wins over `category` when both are set.
    pub new_category: String,
}

/// Use-case facade over a [`NoteStore`].
pub struct NoteService<B: KeyValueBackend> {
    store: NoteStore<B>,
}

impl<B: KeyValueBackend> NoteService<B> {
    /// Creates a service over an already-loaded store.
    pub fn new(store: NoteStore<B>) -> Self {
        Self { store }
    }

    /// Creates a note from draft input.
    ///
    /// Rejects an empty or whitespace-only title without mutating any
    /// state. The created note is prepended to the collection; a newly
    /// seen category grows the registry. Both affected collections are
    /// persisted before returning.
    pub fn create_note(&mut self, draft: &NoteDraft) -> ServiceResult<Note> {
        let mut note = build_note(draft)?;
        note.category = resolve_category(draft);

        if let Some(label) = note.category.clone() {
            if self.store.categories_mut().register(label) {
                self.store.save_categories()?;
            }
        }

        self.store.notes_mut().insert(0, note.clone());
        self.store.save_notes()?;

        info!(
            "event=note_create module=service status=ok id={} kind={} category={}",
            note.id,
            note.kind().as_str(),
            note.category.as_deref().unwrap_or("-")
        );
        Ok(note)
    }

    /// Removes the note with the given id.
    ///
    /// Returns `false` (no-op) when no such note exists.
    pub fn delete_note(&mut self, id: &NoteId) -> ServiceResult<bool> {
        let before = self.store.notes().len();
        self.store.notes_mut().retain(|note| &note.id != id);
        if self.store.notes().len() == before {
            return Ok(false);
        }

        self.store.save_notes()?;
        info!("event=note_delete module=service status=ok id={id}");
        Ok(true)
    }

    /// Flips the archived flag; `false` (no-op) on an unknown id.
    pub fn toggle_archived(&mut self, id: &NoteId) -> ServiceResult<bool> {
        self.toggle_flag(id, "note_archive_toggle", Note::toggle_archived)
    }

    /// Flips the completed flag; `false` (no-op) on an unknown id.
    pub fn toggle_completed(&mut self, id: &NoteId) -> ServiceResult<bool> {
        self.toggle_flag(id, "note_complete_toggle", Note::toggle_completed)
    }

    fn toggle_flag(
        &mut self,
        id: &NoteId,
        event: &str,
        apply: impl FnOnce(&mut Note),
    ) -> ServiceResult<bool> {
        let Some(note) = self.store.notes_mut().iter_mut().find(|note| &note.id == id)
        else {
            return Ok(false);
        };
        apply(note);

        self.store.save_notes()?;
        info!("event={event} module=service status=ok id={id}");
        Ok(true)
    }

    /// Computes the visible page for the default page size.
    pub fn visible_notes(&self, filter: &FilterOptions, page: usize) -> Page<'_> {
        visible(self.store.notes(), filter, page, ITEMS_PER_PAGE)
    }

    /// Canonical collection, storage order (newest first at creation).
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    /// Category labels in first-seen order.
    pub fn categories(&self) -> &[String] {
        self.store.categories().labels()
    }

    /// Loads persisted state into the underlying store.
    pub fn load(&mut self) -> StoreResult<LoadReport> {
        self.store.load()
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> NoteStore<B> {
        self.store
    }
}

fn build_note(draft: &NoteDraft) -> Result<Note, NoteValidationError> {
    match draft.kind {
        NoteKind::Text => Note::text(draft.title.as_str(), draft.content.as_str()),
        NoteKind::Image => Note::image(
            draft.title.as_str(),
            draft.content.as_str(),
            non_empty(&draft.image_url),
        ),
        NoteKind::Location => Note::location(
            draft.title.as_str(),
            draft.content.as_str(),
            non_empty(&draft.address).map(|address| GeoPoint {
                lat: draft.lat,
                lng: draft.lng,
                address,
            }),
        ),
    }
}

// The freshly typed label wins over the picked one.
fn resolve_category(draft: &NoteDraft) -> Option<String> {
    non_empty(&draft.new_category).or_else(|| non_empty(&draft.category))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
