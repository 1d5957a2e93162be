//! Create/edit/delete flows against a freshly seeded store
//!
//! These tests mirror the user-facing flows: start from the seeded
//! example data, then create, edit and delete notes the way the pages do.

use tempfile::TempDir;

use notely_core::{
    seed_example_data, Category, Config, Note, NoteDraft, NotePatch, SeedOutcome, Store,
};

fn seeded_store(temp_dir: &TempDir) -> Store {
    let config = Config {
        data_dir: temp_dir.path().to_path_buf(),
    };
    let mut store = Store::open_with_config(config).unwrap();
    seed_example_data(&mut store).unwrap();
    store
}

fn category_id_by_name(store: &Store, name: &str) -> i64 {
    store
        .all::<Category>()
        .unwrap()
        .into_iter()
        .find(|c| c.name == name)
        .map(|c| c.id)
        .unwrap()
}

#[test]
fn seeding_twice_never_duplicates_rows() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = seeded_store(&temp_dir);

    let outcome = seed_example_data(&mut store).unwrap();
    assert_eq!(outcome, SeedOutcome::AlreadyPopulated);

    assert_eq!(store.count::<Category>().unwrap(), 3);
    assert_eq!(store.count::<Note>().unwrap(), 3);
}

#[test]
fn seeding_survives_a_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        data_dir: temp_dir.path().to_path_buf(),
    };

    {
        let mut store = Store::open_with_config(config.clone()).unwrap();
        assert_eq!(
            seed_example_data(&mut store).unwrap(),
            SeedOutcome::Seeded
        );
    }

    // Second process start: data exists, seeding is a no-op
    let mut store = Store::open_with_config(config).unwrap();
    assert_eq!(
        seed_example_data(&mut store).unwrap(),
        SeedOutcome::AlreadyPopulated
    );
    assert_eq!(store.count::<Note>().unwrap(), 3);
}

#[test]
fn seed_content_matches_the_example_data() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir);

    let categories = store.all::<Category>().unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Work", "Personal", "Shopping"]);

    let notes = store.all::<Note>().unwrap();
    let titles: Vec<(&str, i64)> = notes
        .iter()
        .map(|n| (n.title.as_str(), n.priority))
        .collect();
    assert_eq!(
        titles,
        vec![
            ("Work Note 1", 3),
            ("Personal Note 1", 4),
            ("Shopping List", 2),
        ]
    );
}

#[test]
fn create_a_new_note() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = seeded_store(&temp_dir);
    let work = category_id_by_name(&store, "Work");

    let mut draft = NoteDraft::new("My New Note");
    draft.content = "This is the content of my new note.".to_string();
    draft.categories = vec![work];
    draft.priority = 5;

    let note = store.create::<Note>(draft).unwrap();

    let retrieved = store.find::<Note>(note.id).unwrap().unwrap();
    assert_eq!(retrieved.title, "My New Note");
    assert_eq!(retrieved.content, "This is the content of my new note.");
    assert_eq!(retrieved.categories, vec![work]);
    assert_eq!(retrieved.priority, 5);

    // The new note shows up in the list
    let titles: Vec<String> = store
        .all::<Note>()
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert!(titles.contains(&"My New Note".to_string()));
}

#[test]
fn edit_an_existing_note() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = seeded_store(&temp_dir);

    let shopping_list = store
        .all::<Note>()
        .unwrap()
        .into_iter()
        .find(|n| n.title == "Shopping List")
        .unwrap();

    let patch = NotePatch {
        title: Some("Updated Note Title".to_string()),
        content: Some("Updated note content.".to_string()),
        priority: Some(5),
        ..Default::default()
    };
    let updated = store.update::<Note>(shopping_list.id, patch).unwrap();

    // Only the patched fields changed
    assert_eq!(updated.id, shopping_list.id);
    assert_eq!(updated.title, "Updated Note Title");
    assert_eq!(updated.content, "Updated note content.");
    assert_eq!(updated.priority, 5);
    assert_eq!(updated.categories, shopping_list.categories);

    let titles: Vec<String> = store
        .all::<Note>()
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert!(titles.contains(&"Updated Note Title".to_string()));
    assert!(!titles.contains(&"Shopping List".to_string()));
}

#[test]
fn delete_a_note() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = seeded_store(&temp_dir);

    let shopping_list = store
        .all::<Note>()
        .unwrap()
        .into_iter()
        .find(|n| n.title == "Shopping List")
        .unwrap();

    store.delete::<Note>(shopping_list.id).unwrap();

    let titles: Vec<String> = store
        .all::<Note>()
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert!(!titles.contains(&"Shopping List".to_string()));
    assert_eq!(titles.len(), 2);
}

#[test]
fn delete_of_a_missing_id_is_reported_and_harmless() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = seeded_store(&temp_dir);

    let err = store.delete::<Note>(9999).unwrap_err();
    assert!(err.is_not_found());

    // Everything else is still there
    assert_eq!(store.count::<Category>().unwrap(), 3);
    assert_eq!(store.count::<Note>().unwrap(), 3);
}

#[test]
fn created_note_round_trips_through_find() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = seeded_store(&temp_dir);
    let personal = category_id_by_name(&store, "Personal");

    let mut draft = NoteDraft::new("Round Trip");
    draft.content = "Same fields back out.".to_string();
    draft.categories = vec![personal];
    draft.priority = 1;

    let created = store.create::<Note>(draft.clone()).unwrap();
    let found = store.find::<Note>(created.id).unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.title, draft.title);
    assert_eq!(found.content, draft.content);
    assert_eq!(found.categories, draft.categories);
    assert_eq!(found.priority, draft.priority);
}
