//! Domain model for notes and categories.
//!
//! # Responsibility
//! - Define the canonical note record shared by every layer.
//! - Own creation-time validation and the category label set.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Payload presence always matches the note kind (sum type, not
//!   nullable flat fields).

pub mod category;
pub mod note;
