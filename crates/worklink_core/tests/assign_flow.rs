use worklink_core::{
    classify, classify_and_log, open_db_in_memory, AssignError, AssignService, AssignmentStore,
    FailureKind, SqliteAssignmentStore, StoreError,
};

#[test]
fn assign_links_user_into_task() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteAssignmentStore::new(&conn);
    let user = store.insert_user("13817171612", 1).unwrap();
    store.insert_task("10", 0).unwrap();

    let service = AssignService::new(SqliteAssignmentStore::new(&conn));
    service.assign_task_to_user("13817171612", "10").unwrap();

    let task = store.find_task_by_proj("10").unwrap();
    assert_eq!(task.userids, vec![user.userid]);
}

#[test]
fn assignment_list_keeps_append_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteAssignmentStore::new(&conn);
    let first = store.insert_user("13817171612", 1).unwrap();
    let second = store.insert_user("13900000000", 2).unwrap();
    store.insert_task("10", 0).unwrap();

    let service = AssignService::new(SqliteAssignmentStore::new(&conn));
    service.assign_task_to_user(&first.phone, "10").unwrap();
    service.assign_task_to_user(&second.phone, "10").unwrap();

    let task = store.find_task_by_proj("10").unwrap();
    assert_eq!(task.userids, vec![first.userid, second.userid]);
}

#[test]
fn missing_user_fails_fast_and_leaves_task_untouched() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteAssignmentStore::new(&conn);
    store.insert_task("10", 0).unwrap();

    let service = AssignService::new(SqliteAssignmentStore::new(&conn));
    let err = service
        .assign_task_to_user("13817171612", "10")
        .unwrap_err();

    assert!(matches!(
        &err,
        AssignError::FindUser { phone, source: StoreError::NotFound } if phone == "13817171612"
    ));
    assert_eq!(classify(&err), FailureKind::MissingPrerequisite);
    assert!(err.to_string().contains("coll:users"));
    assert!(err.to_string().contains("13817171612"));

    let task = store.find_task_by_proj("10").unwrap();
    assert!(task.userids.is_empty());
}

#[test]
fn missing_task_classifies_as_missing_prerequisite() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteAssignmentStore::new(&conn);
    store.insert_user("13817171612", 1).unwrap();

    let service = AssignService::new(SqliteAssignmentStore::new(&conn));
    let err = service
        .assign_task_to_user("13817171612", "10")
        .unwrap_err();

    assert!(matches!(
        &err,
        AssignError::FindTask { proj, source: StoreError::NotFound } if proj == "10"
    ));
    let kind = classify_and_log(&err);
    assert_eq!(kind, FailureKind::MissingPrerequisite);
    assert_eq!(kind.user_message(), "project or user not found");
    assert!(!kind.is_retryable());
}

#[test]
fn second_assign_surfaces_duplicate_without_growing_the_list() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteAssignmentStore::new(&conn);
    let user = store.insert_user("13817171612", 1).unwrap();
    store.insert_task("10", 0).unwrap();

    let service = AssignService::new(SqliteAssignmentStore::new(&conn));
    service.assign_task_to_user("13817171612", "10").unwrap();
    let err = service
        .assign_task_to_user("13817171612", "10")
        .unwrap_err();

    assert!(matches!(
        &err,
        AssignError::LinkUser { source: StoreError::Duplicate, .. }
    ));
    let kind = classify(&err);
    assert_eq!(kind, FailureKind::AlreadyLinked);
    assert!(kind.is_ignorable());

    let task = store.find_task_by_proj("10").unwrap();
    assert_eq!(task.userids, vec![user.userid]);
}

#[test]
fn infrastructure_fault_classifies_as_retryable() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteAssignmentStore::new(&conn);
    store.insert_user("13817171612", 1).unwrap();
    store.insert_task("10", 0).unwrap();

    // Simulate a storage fault between lookup and mutation.
    conn.execute_batch("DROP TABLE userids;").unwrap();

    let service = AssignService::new(SqliteAssignmentStore::new(&conn));
    let err = service
        .assign_task_to_user("13817171612", "10")
        .unwrap_err();

    assert!(matches!(
        &err,
        AssignError::FindTask { source: StoreError::Db(_), .. }
            | AssignError::LinkUser { source: StoreError::Db(_), .. }
    ));
    let kind = classify(&err);
    assert_eq!(kind, FailureKind::Infrastructure);
    assert!(kind.is_retryable());
    assert!(!kind.is_ignorable());
}

#[test]
fn duplicate_seed_phone_is_rejected_by_the_store() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteAssignmentStore::new(&conn);
    store.insert_user("13817171612", 1).unwrap();

    let err = store.insert_user("13817171612", 2).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate));
}

#[test]
fn find_user_returns_not_found_sentinel_directly() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteAssignmentStore::new(&conn);

    let err = store.find_user_by_phone("00000000000").unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
    assert!(err.is_expected());
}
