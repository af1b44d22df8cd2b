//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pocketnote_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use pocketnote_core::{FilterOptions, MemoryBackend, NoteDraft, NoteService, NoteStore};

fn main() {
    println!("pocketnote_core version={}", pocketnote_core::core_version());

    let mut service = NoteService::new(NoteStore::new(MemoryBackend::new()));
    let draft = NoteDraft {
        title: "smoke".to_string(),
        content: "core wiring probe".to_string(),
        ..NoteDraft::default()
    };

    match service.create_note(&draft) {
        Ok(note) => println!("pocketnote_core create=ok id={}", note.id),
        Err(err) => {
            eprintln!("pocketnote_core create=failed error={err}");
            std::process::exit(1);
        }
    }

    let page = service.visible_notes(&FilterOptions::default(), 1);
    println!(
        "pocketnote_core visible={} total_pages={}",
        page.items.len(),
        page.total_pages
    );
}
