//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations into use-case level APIs.
//! - Keep the rendering collaborator decoupled from storage details.

pub mod note_service;

pub use note_service::{NoteDraft, NoteService, NoteServiceError, ServiceResult};
