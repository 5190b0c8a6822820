use cadence_core::{
    CadenceError, Database, Role,
    models::{Page, Template},
    schedule::{assemble_plan, compose_plan_view},
};
use jiff::Timestamp;
use rusqlite::{Connection, params};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn now() -> Timestamp {
    "2025-01-01T10:00:00Z".parse().expect("Failed to parse timestamp")
}

/// Creates a template holding `task_count` tasks.
fn seed_template(db: &mut Database, prep_time: u32, task_count: usize) -> Template {
    let template = db
        .create_template("Couch to 5k", prep_time, None, None)
        .expect("Failed to create template");
    for i in 0..task_count {
        db.create_task(&template.id, &format!("Session {}", i + 1), 30, None, &[])
            .expect("Failed to create task");
    }
    db.get_template(&template.id)
        .expect("Failed to get template")
        .expect("Template should exist")
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());

    // Reopening runs the schema and migrations again without error.
    Database::new(temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_create_user_with_roles() {
    let (_temp_file, mut db) = create_test_db();

    let user = db
        .create_user(" coach@example.com ", &[Role::User, Role::Admin, Role::User])
        .expect("Failed to create user");
    assert_eq!(user.email, "coach@example.com");
    assert_eq!(user.roles, vec![Role::Admin, Role::User]);

    let found = db
        .get_user_by_email("coach@example.com")
        .expect("Failed to get user")
        .expect("User should exist");
    assert_eq!(found, user);
}

#[test]
fn test_create_user_rejects_bad_email() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.create_user("not-an-email", &[]).unwrap_err();
    assert!(matches!(err, CadenceError::InvalidInput { ref field, .. } if field == "email"));

    db.create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let err = db.create_user("runner@example.com", &[]).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_template_tasks_in_creation_order() {
    let (_temp_file, mut db) = create_test_db();

    let template = seed_template(&mut db, 2, 3);
    let titles: Vec<&str> = template.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Session 1", "Session 2", "Session 3"]);
    assert_eq!(template.prep_time, 2);
}

#[test]
fn test_task_media_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    let template = seed_template(&mut db, 0, 0);

    let media = vec!["warmup.mp4".to_string(), "https://example.com/drills".to_string()];
    let task = db
        .create_task(&template.id, "Drills", 20, Some("Form work"), &media)
        .expect("Failed to create task");

    let loaded = db
        .get_task(&task.id)
        .expect("Failed to get task")
        .expect("Task should exist");
    assert_eq!(loaded, task);
    assert_eq!(loaded.media, media);
}

#[test]
fn test_create_task_for_missing_template() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .create_task("missing", "Orphan", 10, None, &[])
        .unwrap_err();
    assert!(matches!(err, CadenceError::NotFound { resource: "Template", .. }));
}

#[test]
fn test_template_summaries_filter_before_paging() {
    let (_temp_file, mut db) = create_test_db();

    db.create_template("Empty", 0, None, None)
        .expect("Failed to create template");
    seed_template(&mut db, 0, 2);
    seed_template(&mut db, 0, 1);

    let page = Page {
        offset: 0,
        limit: 2,
    };

    let all = db
        .list_template_summaries(false, page)
        .expect("Failed to list templates");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Empty");

    let visible = db
        .list_template_summaries(true, page)
        .expect("Failed to list templates");
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].task_count, 2);
    assert_eq!(visible[1].task_count, 1);
}

#[test]
fn test_plan_aggregate_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    let user = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 3, 10);

    let draft = assemble_plan(&template, "2025-01-15T10:00:00Z", &user.id, now())
        .expect("Failed to assemble plan");
    db.insert_plan_draft(&draft)
        .expect("Failed to insert plan");

    let loaded = db
        .get_plan_for_user(&draft.plan.id, &user.id)
        .expect("Failed to load plan")
        .expect("Plan should exist");
    assert_eq!(loaded, draft.plan);

    let statuses = db
        .get_statuses(&draft.plan.id, &user.id)
        .expect("Failed to get statuses");
    assert_eq!(statuses.len(), 10);
    assert!(statuses.iter().all(|s| !s.completed));
}

#[test]
fn test_plan_is_invisible_to_other_users() {
    let (_temp_file, mut db) = create_test_db();
    let owner = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let other = db
        .create_user("other@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 0, 2);

    let plan = db
        .create_plan(&template.id, "2025-01-10", &owner.id, now())
        .expect("Failed to create plan");

    assert!(
        db.get_plan_for_user(&plan.id, &other.id)
            .expect("Failed to load plan")
            .is_none()
    );
    assert!(
        db.list_plans_for_user(&other.id)
            .expect("Failed to list plans")
            .is_empty()
    );
    assert_eq!(
        db.list_plans_for_user(&owner.id)
            .expect("Failed to list plans")
            .len(),
        1
    );
}

#[test]
fn test_rejected_deadline_writes_nothing() {
    let (_temp_file, mut db) = create_test_db();
    let user = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 5, 3);

    let err = db
        .create_plan(&template.id, "2025-01-04T10:00:00Z", &user.id, now())
        .unwrap_err();
    assert!(err.to_string().contains("days of preparation"));

    let err = db
        .create_plan(&template.id, "2024-12-31", &user.id, now())
        .unwrap_err();
    assert!(err.to_string().contains("Selected date must be in the future"));

    assert!(
        db.list_plans_for_user(&user.id)
            .expect("Failed to list plans")
            .is_empty()
    );
    assert!(
        db.get_statuses_for_user(&user.id)
            .expect("Failed to get statuses")
            .is_empty()
    );
}

#[test]
fn test_template_without_tasks_creates_empty_plan() {
    let (_temp_file, mut db) = create_test_db();
    let user = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 0, 0);

    let plan = db
        .create_plan(&template.id, "2025-01-10", &user.id, now())
        .expect("Failed to create plan");
    assert!(plan.weeks.is_empty());

    let view = compose_plan_view(&plan, &[], now());
    assert_eq!(view.total_tasks, 0);
    assert!(!view.is_completed());
}

#[test]
fn test_set_task_completed() {
    let (_temp_file, mut db) = create_test_db();
    let user = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 0, 2);
    let plan = db
        .create_plan(&template.id, "2025-01-10", &user.id, now())
        .expect("Failed to create plan");

    let task_id = &template.tasks[1].id;
    let status = db
        .set_task_completed(&plan.id, task_id, &user.id, true)
        .expect("Failed to complete task");
    assert!(status.completed);
    assert_eq!(&status.task_id, task_id);

    let statuses = db
        .get_statuses(&plan.id, &user.id)
        .expect("Failed to get statuses");
    assert_eq!(statuses.iter().filter(|s| s.completed).count(), 1);

    let err = db
        .set_task_completed(&plan.id, "missing", &user.id, true)
        .unwrap_err();
    assert!(matches!(err, CadenceError::NotFound { resource: "Task status", .. }));
}

#[test]
fn test_remove_task_from_plan_prunes_empty_weeks() {
    let (_temp_file, mut db) = create_test_db();
    let user = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 0, 2);
    let plan = db
        .create_plan(&template.id, "2025-01-15T10:00:00Z", &user.id, now())
        .expect("Failed to create plan");
    assert_eq!(plan.weeks.len(), 2);

    db.remove_task_from_plan(&plan.id, &template.tasks[1].id, &user.id)
        .expect("Failed to remove task");

    let plan = db
        .get_plan_for_user(&plan.id, &user.id)
        .expect("Failed to load plan")
        .expect("Plan should exist");
    assert_eq!(plan.weeks.len(), 1);
    assert_eq!(plan.day_tasks().count(), 1);

    // The completion row is kept.
    let statuses = db
        .get_statuses(&plan.id, &user.id)
        .expect("Failed to get statuses");
    assert_eq!(statuses.len(), 2);
}

#[test]
fn test_remove_task_from_foreign_plan() {
    let (_temp_file, mut db) = create_test_db();
    let owner = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let other = db
        .create_user("other@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 0, 1);
    let plan = db
        .create_plan(&template.id, "2025-01-10", &owner.id, now())
        .expect("Failed to create plan");

    let err = db
        .remove_task_from_plan(&plan.id, &template.tasks[0].id, &other.id)
        .unwrap_err();
    assert!(matches!(err, CadenceError::NotFound { resource: "Plan", .. }));
}

#[test]
fn test_delete_task_cascades_into_plans() {
    let (_temp_file, mut db) = create_test_db();
    let user = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 0, 2);
    let plan = db
        .create_plan(&template.id, "2025-01-10", &user.id, now())
        .expect("Failed to create plan");

    let deleted = db
        .delete_task(&template.tasks[0].id)
        .expect("Failed to delete task");
    assert_eq!(deleted.title, "Session 1");

    let plan = db
        .get_plan_for_user(&plan.id, &user.id)
        .expect("Failed to load plan")
        .expect("Plan should exist");
    let statuses = db
        .get_statuses(&plan.id, &user.id)
        .expect("Failed to get statuses");
    assert_eq!(statuses.len(), 1);

    let view = compose_plan_view(&plan, &statuses, now());
    assert_eq!(view.total_tasks, 1);
    assert_eq!(view.schedule[0].task.task.title, "Session 2");
}

#[test]
fn test_delete_plan_removes_statuses() {
    let (_temp_file, mut db) = create_test_db();
    let user = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 0, 3);
    let plan = db
        .create_plan(&template.id, "2025-01-10", &user.id, now())
        .expect("Failed to create plan");

    let err = db.delete_plan(&plan.id, "someone-else").unwrap_err();
    assert_eq!(err.status_code(), 404);

    db.delete_plan(&plan.id, &user.id)
        .expect("Failed to delete plan");
    assert!(
        db.get_statuses(&plan.id, &user.id)
            .expect("Failed to get statuses")
            .is_empty()
    );

    let err = db.delete_plan_admin(&plan.id).unwrap_err();
    assert!(matches!(err, CadenceError::NotFound { .. }));
}

#[test]
fn test_delete_template_cascades() {
    let (_temp_file, mut db) = create_test_db();
    let user = db
        .create_user("runner@example.com", &[])
        .expect("Failed to create user");
    let template = seed_template(&mut db, 0, 2);
    db.create_plan(&template.id, "2025-01-10", &user.id, now())
        .expect("Failed to create plan");

    db.delete_template(&template.id)
        .expect("Failed to delete template");

    assert!(
        db.get_task(&template.tasks[0].id)
            .expect("Failed to get task")
            .is_none()
    );
    assert!(
        db.list_plans_for_user(&user.id)
            .expect("Failed to list plans")
            .is_empty()
    );
    assert!(
        db.get_statuses_for_user(&user.id)
            .expect("Failed to get statuses")
            .is_empty()
    );
}

#[test]
fn test_duplicate_statuses_are_merged_on_open() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let (plan_id, user_id, task_id) = {
        let mut db = Database::new(temp_file.path()).expect("Failed to create test database");
        let user = db
            .create_user("runner@example.com", &[])
            .expect("Failed to create user");
        let template = seed_template(&mut db, 0, 2);
        let plan = db
            .create_plan(&template.id, "2025-01-10", &user.id, now())
            .expect("Failed to create plan");
        (plan.id, user.id, template.tasks[0].id.clone())
    };

    // Simulate a database written before the uniqueness constraint existed.
    {
        let conn = Connection::open(temp_file.path()).expect("Failed to open connection");
        conn.execute("DROP INDEX idx_user_task_status_unique", [])
            .expect("Failed to drop index");
        conn.execute(
            "INSERT INTO user_task_status (id, user_id, plan_id, task_id, completed)
             SELECT 'dup-' || id, user_id, plan_id, task_id, 1
             FROM user_task_status WHERE task_id = ?1",
            params![&task_id],
        )
        .expect("Failed to insert duplicate");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let statuses = db
        .get_statuses(&plan_id, &user_id)
        .expect("Failed to get statuses");
    assert_eq!(statuses.len(), 2);

    let merged = statuses
        .iter()
        .find(|s| s.task_id == task_id)
        .expect("Status should survive");
    assert!(merged.completed);
    assert!(!merged.id.starts_with("dup-"));

    let conn = Connection::open(temp_file.path()).expect("Failed to open connection");
    let err = conn.execute(
        "INSERT INTO user_task_status (id, user_id, plan_id, task_id) VALUES ('again', ?1, ?2, ?3)",
        params![&user_id, &plan_id, &task_id],
    );
    assert!(err.is_err());
}
