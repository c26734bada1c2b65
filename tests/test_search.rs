#[macro_use]
mod common;
use common::*;

use actix_web::http::StatusCode;

#[tokio::test]
async fn search_without_filters_returns_everything_paged() {
    let state = setup_test_state();
    let app = test_service!(state);

    for i in 0..5 {
        create_task_ok(&app, &task_json(&format!("Task {}", i))).await;
    }

    let page = search_tasks_ok(&app, "?page=0&size=2").await;
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.page_number, 0);
    assert_eq!(page.page_size, 2);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
    assert!(page.first);
    assert!(!page.last);

    let last = search_tasks_ok(&app, "?page=2&size=2").await;
    assert_eq!(last.content.len(), 1);
    assert!(!last.first);
    assert!(last.last);
}

#[tokio::test]
async fn default_sort_is_id_ascending() {
    let state = setup_test_state();
    let app = test_service!(state);

    for i in 0..4 {
        create_task_ok(&app, &task_json(&format!("Task {}", i))).await;
    }

    let page = search_tasks_ok(&app, "").await;
    let ids: Vec<uuid::Uuid> = page.content.iter().map(|t| t.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn sort_by_name_descending() {
    let state = setup_test_state();
    let app = test_service!(state);

    for name in ["Alpha", "Charlie", "Bravo"] {
        create_task_ok(&app, &task_json(name)).await;
    }

    let page = search_tasks_ok(&app, "?sort=name,desc").await;
    let names: Vec<&str> = page.content.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Bravo", "Alpha"]);
}

#[tokio::test]
async fn search_matches_name_or_description_case_insensitively() {
    let state = setup_test_state();
    let app = test_service!(state);

    let in_name = create_task_ok(&app, &task_json("Alpha rollout")).await;
    let in_description = create_task_ok(
        &app,
        &full_task_json("Cleanup", "part of the ALPHA push", "LOW", "TODO", days_from_now(1)),
    )
    .await;
    create_task_ok(&app, &task_json("Beta rollout")).await;

    let page = search_tasks_ok(&app, "?search=alpha").await;
    assert_eq!(page.total_elements, 2);
    let ids: Vec<uuid::Uuid> = page.content.iter().map(|t| t.id).collect();
    assert!(ids.contains(&in_name.id));
    assert!(ids.contains(&in_description.id));
}

#[tokio::test]
async fn filters_combine_with_and() {
    let state = setup_test_state();
    let app = test_service!(state);

    create_task_ok(
        &app,
        &full_task_json("High todo", "x", "HIGH", "TODO", days_from_now(1)),
    )
    .await;
    create_task_ok(
        &app,
        &full_task_json("High done", "x", "HIGH", "DONE", days_from_now(1)),
    )
    .await;
    create_task_ok(
        &app,
        &full_task_json("Low todo", "x", "LOW", "TODO", days_from_now(1)),
    )
    .await;

    let page = search_tasks_ok(&app, "?status=TODO&priority=HIGH").await;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].name, "High todo");
}

#[tokio::test]
async fn filter_by_project_membership() {
    let state = setup_test_state();
    let app = test_service!(state);

    let project = create_project_ok(&app, &project_json("Apollo")).await;
    let linked = create_task_ok(&app, &task_json("Linked task")).await;
    create_task_ok(&app, &task_json("Free task")).await;
    assign_ok(&app, project.id, linked.id).await;

    let page = search_tasks_ok(&app, &format!("?projectId={}", project.id)).await;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].id, linked.id);
}

#[tokio::test]
async fn name_filter_is_a_case_insensitive_substring_match() {
    let state = setup_test_state();
    let app = test_service!(state);

    let deploy = create_task_ok(&app, &task_json("Deploy staging")).await;
    create_task_ok(
        &app,
        &full_task_json("Unrelated", "mentions deploy only here", "LOW", "TODO", days_from_now(1)),
    )
    .await;

    // Unlike `search`, `name` only looks at the name column.
    let page = search_tasks_ok(&app, "?name=DEPLOY").await;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].id, deploy.id);
}

#[tokio::test]
async fn due_date_bounds_are_inclusive() {
    let state = setup_test_state();
    let app = test_service!(state);

    for offset in [1, 2, 3] {
        create_task_ok(
            &app,
            &full_task_json(
                &format!("Due in {} days", offset),
                "x",
                "MEDIUM",
                "TODO",
                days_from_now(offset),
            ),
        )
        .await;
    }
    // A task without a due date never matches a range bound.
    create_task_ok(&app, &task_json("Someday")).await;

    let from = search_tasks_ok(&app, &format!("?dueDateFrom={}", days_from_now(2))).await;
    assert_eq!(from.total_elements, 2);

    let to = search_tasks_ok(&app, &format!("?dueDateTo={}", days_from_now(2))).await;
    assert_eq!(to.total_elements, 2);

    let window = search_tasks_ok(
        &app,
        &format!(
            "?dueDateFrom={}&dueDateTo={}",
            days_from_now(2),
            days_from_now(2)
        ),
    )
    .await;
    assert_eq!(window.total_elements, 1);
}

#[tokio::test]
async fn inverted_due_date_range_returns_an_empty_page() {
    let state = setup_test_state();
    let app = test_service!(state);

    create_task_ok(
        &app,
        &full_task_json("In range", "x", "MEDIUM", "TODO", days_from_now(5)),
    )
    .await;

    let page = search_tasks_ok(
        &app,
        &format!(
            "?dueDateFrom={}&dueDateTo={}",
            days_from_now(9),
            days_from_now(1)
        ),
    )
    .await;
    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.first);
    assert!(page.last);
}

#[tokio::test]
async fn blank_filter_values_are_ignored() {
    let state = setup_test_state();
    let app = test_service!(state);

    create_task_ok(&app, &task_json("Untouched")).await;
    create_task_ok(&app, &task_json("Also untouched")).await;

    let page = search_tasks_ok(&app, "?name=%20%20&search=").await;
    assert_eq!(page.total_elements, 2);
}

#[tokio::test]
async fn page_size_is_clamped_to_the_configured_maximum() {
    let state = setup_test_state();
    let app = test_service!(state);

    create_task_ok(&app, &task_json("Lonely")).await;

    let page = search_tasks_ok(&app, "?size=100000").await;
    assert_eq!(page.page_size, 100);
}

#[tokio::test]
async fn search_tasks_by_exact_id() {
    let state = setup_test_state();
    let app = test_service!(state);

    let wanted = create_task_ok(&app, &task_json("Wanted")).await;
    create_task_ok(&app, &task_json("Decoy")).await;

    let page = search_tasks_ok(&app, &format!("?id={}", wanted.id)).await;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].id, wanted.id);
}

#[tokio::test]
async fn search_projects_by_single_id_yields_empty_or_exactly_one() {
    let state = setup_test_state();
    let app = test_service!(state);

    let project = create_project_ok(&app, &project_json("Apollo")).await;
    create_project_ok(&app, &project_json("Artemis")).await;

    let hit = search_projects_ok(&app, &format!("?id={}", project.id)).await;
    assert_eq!(hit.content.len(), 1);
    assert_eq!(hit.content[0].id, project.id);

    let miss = search_projects_ok(&app, &format!("?id={}", uuid::Uuid::new_v4())).await;
    assert!(miss.content.is_empty());
}

#[tokio::test]
async fn search_projects_by_name_and_description() {
    let state = setup_test_state();
    let app = test_service!(state);

    create_project_ok(
        &app,
        &serde_json::json!({ "name": "Apollo", "description": "moon landing" }),
    )
    .await;
    create_project_ok(
        &app,
        &serde_json::json!({ "name": "Artemis", "description": "return to the moon" }),
    )
    .await;
    create_project_ok(&app, &project_json("Gemini")).await;

    let by_name = search_projects_ok(&app, "?name=apo").await;
    assert_eq!(by_name.total_elements, 1);
    assert_eq!(by_name.content[0].name, "Apollo");

    let by_description = search_projects_ok(&app, "?description=moon").await;
    assert_eq!(by_description.total_elements, 2);
}

#[tokio::test]
async fn search_rejects_malformed_filter_values() {
    let state = setup_test_state();
    let app = test_service!(state);

    let req = actix_web::test::TestRequest::get()
        .uri("/api/tasks/search?status=BOGUS")
        .to_request();
    assert_eq!(status_of(&app, req).await, StatusCode::BAD_REQUEST);
}
