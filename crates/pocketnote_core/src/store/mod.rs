//! Canonical state ownership and persistence mirroring.
//!
//! # Responsibility
//! - Own the live note collection and category registry.
//! - Mirror both collections into a key-value backend on every change.
//!
//! # Invariants
//! - The store is the only writer of either collection.
//! - Saves always rewrite the whole collection, never a diff.

pub mod note_store;

pub use note_store::{LoadReport, NoteStore, StoreError, StoreResult, CATEGORIES_KEY, NOTES_KEY};
