use cadence_core::{
    Planner, PlannerBuilder, Role, Task, Template, User,
    params::{CreateTask, CreateTemplate, CreateUser},
};
use jiff::{SignedDuration, Timestamp};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Registers a user with the given roles.
pub async fn register(planner: &Planner, email: &str, roles: Vec<Role>) -> User {
    planner
        .create_user(&CreateUser {
            email: email.to_string(),
            roles,
        })
        .await
        .expect("Failed to create user")
}

/// Creates a template and adds one task per title, in order.
pub async fn seed_template(
    planner: &Planner,
    name: &str,
    prep_time: i64,
    titles: &[&str],
) -> (Template, Vec<Task>) {
    let template = planner
        .create_template(&CreateTemplate {
            name: name.to_string(),
            prep_time,
            ideal_pre_req: None,
            duration: None,
        })
        .await
        .expect("Failed to create template");

    let mut tasks = Vec::new();
    for title in titles {
        tasks.push(
            planner
                .create_task(&CreateTask {
                    template_id: template.id.clone(),
                    title: (*title).to_string(),
                    duration: 25,
                    description: None,
                    media: vec![],
                })
                .await
                .expect("Failed to create task"),
        );
    }

    (template, tasks)
}

/// A deadline `days` whole days from now, as an RFC 3339 string.
pub fn deadline_in(days: i64) -> String {
    Timestamp::now()
        .checked_add(SignedDuration::from_hours(days * 24))
        .expect("Failed to compute deadline")
        .to_string()
}
