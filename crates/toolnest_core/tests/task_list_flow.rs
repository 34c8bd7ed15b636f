use rusqlite::Connection;
use toolnest_core::db::{open_db, open_db_in_memory};
use toolnest_core::{
    KeyValueStore, MemoryStore, SqliteKeyValueStore, StoreTaskRepository, TaskFilter, TaskId,
    TaskListController, TASKS_KEY,
};

#[test]
fn add_trims_text_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    let id = controller.add("  buy wood  ").expect("task should be added");
    assert_eq!(controller.task(id).unwrap().text, "buy wood");

    let reloaded = controller_over(&conn);
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.tasks()[0].text, "buy wood");
    assert!(!reloaded.tasks()[0].completed);
}

#[test]
fn whitespace_only_add_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    assert_eq!(controller.add(""), None);
    assert_eq!(controller.add("   \t  "), None);
    assert!(controller.tasks().is_empty());

    // No save happened, so the key was never written.
    let probe = SqliteKeyValueStore::try_new(&conn).unwrap();
    assert_eq!(probe.read(TASKS_KEY), None);
}

#[test]
fn toggle_marks_only_that_task() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    let first = controller.add("first").unwrap();
    let second = controller.add("second").unwrap();

    assert!(controller.toggle_complete(first));
    assert!(controller.task(first).unwrap().completed);
    assert!(!controller.task(second).unwrap().completed);

    let reloaded = controller_over(&conn);
    assert!(reloaded.task(first).unwrap().completed);
    assert!(!reloaded.task(second).unwrap().completed);
}

#[test]
fn toggle_twice_returns_to_active() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    let id = controller.add("flip me").unwrap();
    assert!(controller.toggle_complete(id));
    assert!(controller.toggle_complete(id));
    assert!(!controller.task(id).unwrap().completed);
}

#[test]
fn toggle_unknown_id_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);
    controller.add("only task").unwrap();
    let before = raw_payload(&conn);

    assert!(!controller.toggle_complete(999));

    assert_eq!(controller.tasks().len(), 1);
    assert!(!controller.tasks()[0].completed);
    assert_eq!(raw_payload(&conn), before);
}

#[test]
fn delete_removes_task_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    let keep = controller.add("keep").unwrap();
    let drop_id = controller.add("drop").unwrap();

    assert!(controller.delete(drop_id));
    assert_eq!(controller.tasks().len(), 1);

    let reloaded = controller_over(&conn);
    assert!(reloaded.task(keep).is_some());
    assert!(reloaded.task(drop_id).is_none());
}

#[test]
fn delete_unknown_id_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);
    controller.add("only task").unwrap();
    let before = raw_payload(&conn);

    assert!(!controller.delete(999));

    assert_eq!(controller.tasks().len(), 1);
    assert_eq!(raw_payload(&conn), before);
}

#[test]
fn filter_partitions_tasks_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    let a = controller.add("a").unwrap();
    let b = controller.add("b").unwrap();
    let c = controller.add("c").unwrap();
    controller.toggle_complete(b);

    assert_eq!(visible_ids(&controller), vec![a, b, c]);

    controller.set_filter(TaskFilter::Active);
    assert_eq!(visible_ids(&controller), vec![a, c]);

    controller.set_filter(TaskFilter::Completed);
    assert_eq!(visible_ids(&controller), vec![b]);
}

#[test]
fn filter_is_not_persisted_between_sessions() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);
    controller.add("task").unwrap();
    controller.set_filter(TaskFilter::Completed);

    let reloaded = controller_over(&conn);
    assert_eq!(reloaded.current_filter(), TaskFilter::All);
}

#[test]
fn state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toolnest.sqlite3");

    let first_id;
    let second_id;
    {
        let conn = open_db(&path).unwrap();
        let mut controller = controller_over(&conn);
        first_id = controller.add("buy wood").unwrap();
        second_id = controller.add("sand the shelf").unwrap();
        controller.toggle_complete(first_id);
    }

    let conn = open_db(&path).unwrap();
    let controller = controller_over(&conn);
    assert_eq!(controller.tasks().len(), 2);
    assert!(controller.task(first_id).unwrap().completed);
    assert!(!controller.task(second_id).unwrap().completed);
}

#[test]
fn duplicate_text_creates_separate_tasks() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    let first = controller.add("water plants").unwrap();
    let second = controller.add("water plants").unwrap();

    assert_ne!(first, second);
    assert_eq!(controller.tasks().len(), 2);
}

#[test]
fn rapid_adds_issue_distinct_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    let ids: Vec<TaskId> = (0..10)
        .map(|n| controller.add(&format!("task {n}")).unwrap())
        .collect();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn ids_keep_increasing_after_restart() {
    let conn = open_db_in_memory().unwrap();

    let earlier = {
        let mut controller = controller_over(&conn);
        controller.add("older task").unwrap()
    };

    let mut controller = controller_over(&conn);
    let later = controller.add("newer task").unwrap();
    assert!(later > earlier);
}

#[test]
fn every_mutation_round_trips_through_the_store() {
    let conn = open_db_in_memory().unwrap();
    let mut controller = controller_over(&conn);

    let a = controller.add("first").unwrap();
    assert_eq!(controller_over(&conn).tasks(), controller.tasks());

    let b = controller.add("second").unwrap();
    assert_eq!(controller_over(&conn).tasks(), controller.tasks());

    controller.toggle_complete(a);
    assert_eq!(controller_over(&conn).tasks(), controller.tasks());

    controller.delete(b);
    assert_eq!(controller_over(&conn).tasks(), controller.tasks());

    controller.toggle_complete(a);
    assert_eq!(controller_over(&conn).tasks(), controller.tasks());
}

#[test]
fn mutation_overwrites_malformed_payload() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut probe = SqliteKeyValueStore::try_new(&conn).unwrap();
        probe.write(TASKS_KEY, "not a task array");
    }

    let mut controller = controller_over(&conn);
    assert!(controller.tasks().is_empty());
    controller.add("fresh start").unwrap();

    let reloaded = controller_over(&conn);
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.tasks()[0].text, "fresh start");
}

#[test]
fn memory_store_backs_a_full_session() {
    let repo = StoreTaskRepository::new(MemoryStore::new());
    let mut controller = TaskListController::new(repo);

    let id = controller.add("ephemeral").unwrap();
    assert!(controller.toggle_complete(id));
    assert!(controller.delete(id));
    assert!(controller.tasks().is_empty());
}

fn controller_over(
    conn: &Connection,
) -> TaskListController<StoreTaskRepository<SqliteKeyValueStore<'_>>> {
    let store = SqliteKeyValueStore::try_new(conn).unwrap();
    TaskListController::new(StoreTaskRepository::new(store))
}

fn raw_payload(conn: &Connection) -> Option<String> {
    SqliteKeyValueStore::try_new(conn).unwrap().read(TASKS_KEY)
}

fn visible_ids<R: toolnest_core::TaskRepository>(controller: &TaskListController<R>) -> Vec<TaskId> {
    controller
        .visible_tasks()
        .iter()
        .map(|task| task.id)
        .collect()
}
