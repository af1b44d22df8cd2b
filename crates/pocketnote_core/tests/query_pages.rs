use chrono::{Local, NaiveDate, TimeZone};
use pocketnote_core::{clamp_page, visible, FilterOptions, Note, ITEMS_PER_PAGE};

fn note_at(title: &str, year: i32, month: u32, day: u32, hour: u32) -> Note {
    let mut note = Note::text(title, "").unwrap();
    note.created_at = Local
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .unwrap();
    note
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn date_range_keeps_only_notes_inside_the_bounds() {
    let notes = vec![
        note_at("early", 2025, 12, 1, 10),
        note_at("middle", 2025, 12, 15, 10),
        note_at("late", 2025, 12, 31, 10),
    ];
    let filter = FilterOptions {
        start_date: Some(day(2025, 12, 10)),
        end_date: Some(day(2025, 12, 20)),
        ..FilterOptions::default()
    };

    let page = visible(&notes, &filter, 1, ITEMS_PER_PAGE);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "middle");
}

#[test]
fn date_bounds_are_inclusive_whole_days() {
    let notes = vec![
        note_at("boundary start", 2025, 12, 10, 0),
        note_at("boundary end", 2025, 12, 20, 23),
        note_at("just before", 2025, 12, 9, 23),
        note_at("just after", 2025, 12, 21, 0),
    ];
    let filter = FilterOptions {
        start_date: Some(day(2025, 12, 10)),
        end_date: Some(day(2025, 12, 20)),
        ..FilterOptions::default()
    };

    let page = visible(&notes, &filter, 1, ITEMS_PER_PAGE);
    let titles: Vec<&str> = page.items.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, ["boundary end", "boundary start"]);
}

#[test]
fn thirteen_notes_paginate_into_three_pages() {
    let notes: Vec<Note> = (1..=13)
        .map(|i| note_at(&format!("note {i:02}"), 2026, 1, i, 12))
        .collect();
    let filter = FilterOptions::default();

    let first = visible(&notes, &filter, 1, ITEMS_PER_PAGE);
    let second = visible(&notes, &filter, 2, ITEMS_PER_PAGE);
    let third = visible(&notes, &filter, 3, ITEMS_PER_PAGE);

    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 6);
    assert_eq!(second.items.len(), 6);
    assert_eq!(third.items.len(), 1);

    // Concatenated pages reproduce the sorted sequence exactly once each.
    let mut seen: Vec<&str> = Vec::new();
    for page in [&first, &second, &third] {
        seen.extend(page.items.iter().map(|note| note.title.as_str()));
    }
    let expected: Vec<String> = (1..=13).rev().map(|i| format!("note {i:02}")).collect();
    assert_eq!(seen, expected);
}

#[test]
fn sort_is_newest_first_with_ascending_id_tiebreak() {
    let mut tied_a = note_at("tied a", 2026, 2, 1, 9);
    let mut tied_b = note_at("tied b", 2026, 2, 1, 9);
    tied_b.created_at = tied_a.created_at;
    let newest = note_at("newest", 2026, 2, 2, 9);

    if tied_b.id < tied_a.id {
        std::mem::swap(&mut tied_a, &mut tied_b);
    }
    let notes = vec![tied_b.clone(), newest.clone(), tied_a.clone()];

    let page = visible(&notes, &FilterOptions::default(), 1, ITEMS_PER_PAGE);
    let ids: Vec<_> = page.items.iter().map(|note| note.id.clone()).collect();
    assert_eq!(ids, [newest.id, tied_a.id, tied_b.id]);
}

#[test]
fn archive_views_partition_the_collection() {
    let mut notes: Vec<Note> = (1..=5)
        .map(|i| note_at(&format!("n{i}"), 2026, 3, i, 8))
        .collect();
    notes[1].archived = true;
    notes[4].archived = true;

    let active = visible(&notes, &FilterOptions::default(), 1, 100);
    let archived = visible(
        &notes,
        &FilterOptions {
            show_archived: true,
            ..FilterOptions::default()
        },
        1,
        100,
    );

    assert_eq!(active.items.len() + archived.items.len(), notes.len());
    for note in &active.items {
        assert!(!archived.items.iter().any(|other| other.id == note.id));
    }
}

#[test]
fn shrinking_filter_clamps_the_current_page_downward() {
    // 13 matches -> 3 pages; the user sits on page 3.
    let notes: Vec<Note> = (1..=13)
        .map(|i| {
            let keep = if i <= 8 { "keep" } else { "drop" };
            note_at(&format!("{keep} {i:02}"), 2026, 4, i, 7)
        })
        .collect();

    let unfiltered = visible(&notes, &FilterOptions::default(), 3, ITEMS_PER_PAGE);
    assert_eq!(unfiltered.total_pages, 3);
    assert_eq!(unfiltered.items.len(), 1);

    // A search now matches only 8 notes -> 2 pages; page 3 is out of range.
    let filter = FilterOptions {
        search_term: "keep".to_string(),
        ..FilterOptions::default()
    };
    let out_of_range = visible(&notes, &filter, 3, ITEMS_PER_PAGE);
    assert_eq!(out_of_range.total_pages, 2);
    assert!(out_of_range.items.is_empty());

    let clamped = clamp_page(3, out_of_range.total_pages);
    assert_eq!(clamped, 2);
    let page = visible(&notes, &filter, clamped, ITEMS_PER_PAGE);
    assert_eq!(page.items.len(), 2);
}

#[test]
fn filters_compose_with_and_semantics() {
    let mut workout = note_at("Gym plan", 2026, 5, 10, 18);
    workout.category = Some("health".to_string());
    let mut groceries = note_at("Gym snacks", 2026, 5, 12, 18);
    groceries.category = Some("errands".to_string());
    let notes = vec![workout.clone(), groceries];

    let filter = FilterOptions {
        search_term: "gym".to_string(),
        category: Some("health".to_string()),
        start_date: Some(day(2026, 5, 1)),
        end_date: Some(day(2026, 5, 11)),
        ..FilterOptions::default()
    };

    let page = visible(&notes, &filter, 1, ITEMS_PER_PAGE);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, workout.id);
}
