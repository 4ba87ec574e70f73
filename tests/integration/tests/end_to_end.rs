use std::time::Duration;

use integration_tests::spawn_server;
use todo_client::{ClientError, EditMode, TodoApi, TodoState};
use todo_domain::{NewTodo, TodoPatch, TodoRecord};

fn new_todo(id: &str, text: &str) -> NewTodo {
    NewTodo {
        id: id.to_string(),
        text: text.to_string(),
    }
}

// The full record lifecycle, driven through the typed API client with a
// fixed id: create t1 -> list -> complete -> list -> delete -> list empty -> 404.
#[tokio::test]
async fn crud_scenario_over_a_real_socket() {
    let server = spawn_server().await.unwrap();
    let api = TodoApi::new(&server.base_url);

    let created = api.create(&new_todo("t1", "buy milk")).await.unwrap();
    assert_eq!(
        created,
        TodoRecord {
            id: "t1".to_string(),
            text: "buy milk".to_string(),
            completed: false,
        }
    );

    let todos = api.fetch_all().await.unwrap();
    assert_eq!(todos, vec![created.clone()]);

    let updated = api
        .update(
            "t1",
            &TodoPatch {
                text: None,
                completed: Some(true),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.text, "buy milk");
    assert!(updated.completed);

    let todos = api.fetch_all().await.unwrap();
    assert_eq!(todos, vec![updated.clone()]);

    let deleted = api.delete("t1").await.unwrap();
    assert_eq!(deleted, updated);
    assert!(api.fetch_all().await.unwrap().is_empty());

    // idempotence: the second delete reports the row as missing and the
    // store is unchanged
    let err = api.delete("t1").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound));
    assert!(server.db.list_todos().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_create_surfaces_as_server_error() {
    let server = spawn_server().await.unwrap();
    let api = TodoApi::new(&server.base_url);

    api.create(&new_todo("t1", "first")).await.unwrap();
    let err = api.create(&new_todo("t1", "second")).await.unwrap_err();
    assert!(matches!(err, ClientError::Server { status: 500, .. }));

    let rows = server.db.list_todos().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text, "first");
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let server = spawn_server().await.unwrap();
    let api = TodoApi::new(&server.base_url);

    let err = api
        .update(
            "nope",
            &TodoPatch {
                text: Some("x".to_string()),
                completed: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound));
    assert!(server.db.list_todos().unwrap().is_empty());
}

// The full client-state loop against the real server: optimistic add, toggle,
// edit, remove, and a fresh load converging with the store at each step.
#[tokio::test]
async fn client_state_converges_with_the_store() {
    let server = spawn_server().await.unwrap();
    let mut state = TodoState::new(TodoApi::new(&server.base_url));

    state.load().await;
    assert!(state.todos().is_empty());

    state.add("buy milk").await;
    // ids are millisecond timestamps; space the creates apart
    tokio::time::sleep(Duration::from_millis(2)).await;
    state.add("walk dog").await;
    assert!(state.last_error().is_none());
    assert_eq!(state.todos().len(), 2);
    assert_eq!(server.db.list_todos().unwrap().len(), 2);

    let milk_id = state.todos()[0].id.clone();
    let dog_id = state.todos()[1].id.clone();

    state.toggle(&milk_id).await;
    assert!(state.todos()[0].completed);

    state.begin_edit(&dog_id);
    assert_eq!(
        state.edit_mode(),
        &EditMode::Editing {
            id: dog_id.clone(),
            draft: "walk dog".to_string(),
        }
    );
    state.submit_edit("walk the dog").await;
    assert_eq!(state.edit_mode(), &EditMode::Idle);
    assert_eq!(state.todos()[1].text, "walk the dog");

    // a reload sees exactly what the mutations left behind
    let mut fresh = TodoState::new(TodoApi::new(&server.base_url));
    fresh.load().await;
    let mut texts: Vec<&str> = fresh.todos().iter().map(|t| t.text.as_str()).collect();
    texts.sort_unstable();
    assert_eq!(texts, vec!["buy milk", "walk the dog"]);

    state.remove(&milk_id).await;
    state.remove(&dog_id).await;
    assert!(state.todos().is_empty());
    assert!(server.db.list_todos().unwrap().is_empty());
}

// An empty patch is accepted and re-returns the row unchanged.
#[tokio::test]
async fn empty_patch_is_a_noop() {
    let server = spawn_server().await.unwrap();
    let api = TodoApi::new(&server.base_url);

    let created = api.create(&new_todo("t1", "buy milk")).await.unwrap();
    let updated = api.update("t1", &TodoPatch::default()).await.unwrap();
    assert_eq!(updated, created);
    assert_eq!(server.db.list_todos().unwrap(), vec![created]);
}
