use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use civic_issue_service::repositories::Stores;
use civic_issue_service::routes::configure_all_routes;
use civic_issue_service::services::{IssueService, UserService};

/// 메모리 저장소 위에 전체 라우트를 올린 테스트 앱
macro_rules! app {
    () => {{
        let stores = Stores::in_memory();
        test::init_service(
            App::new()
                .app_data(web::Data::new(UserService::new(&stores)))
                .app_data(web::Data::new(IssueService::new(&stores)))
                .configure(configure_all_routes),
        )
        .await
    }};
}

fn header(resp: &ServiceResponse, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn test_citizen_reports_and_progresses_an_issue() {
    let app = app!();

    // 사용자 생성
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "John", "lastName": "Doe", "role": "citizen" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let john: Value = test::read_body_json(resp).await;
    let john_id = john["id"].as_str().unwrap().to_string();
    assert_eq!(john_id.len(), 24);
    assert!(john["createdAt"].is_string());

    // 같은 이름 쌍은 충돌
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "John", "lastName": "Doe", "role": "manager" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "already_exists");
    assert_eq!(body["message"], "User already exists");

    // 이슈 생성
    let req = test::TestRequest::post()
        .uri("/issues")
        .set_json(json!({
            "latitude": 46.5,
            "longitude": 6.6,
            "tags": ["light", "urgent"],
            "user": john_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let issue: Value = test::read_body_json(resp).await;
    let issue_id = issue["id"].as_str().unwrap().to_string();
    assert_eq!(issue["status"], "new");
    assert_eq!(issue["user"], john_id.as_str());
    assert_eq!(issue["tags"], json!(["light", "urgent"]));

    // 진행 중으로 변경
    let req = test::TestRequest::patch()
        .uri(&format!("/issues/{}", issue_id))
        .set_json(json!({ "status": "inProgress" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let patched: Value = test::read_body_json(resp).await;
    assert_eq!(patched["status"], "inProgress");
    assert_ne!(patched["updatedAt"], issue["updatedAt"]);
    for field in ["latitude", "longitude", "tags", "user", "createdAt"] {
        assert_eq!(patched[field], issue[field], "{} changed", field);
    }
}

#[actix_web::test]
async fn test_invalid_payloads_are_bad_requests() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "J", "role": "Citizen" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let fields: Vec<&str> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["firstName", "lastName", "role"]);

    // 숫자가 아닌 좌표는 변환하지 않고 거절
    let req = test::TestRequest::post()
        .uri("/issues")
        .set_json(json!({ "latitude": "46.5", "longitude": 6.6, "user": "58b2926f5e1def0123e97188" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 존재하지 않는 사용자 참조
    let req = test::TestRequest::post()
        .uri("/issues")
        .set_json(json!({ "latitude": 46.5, "longitude": 6.6, "user": "58b2926f5e1def0123e97188" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_reference");
}

#[actix_web::test]
async fn test_conflicting_query_parameters_are_bad_requests() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/issues?user=a&userId=b")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_failed");
    assert_eq!(body["violations"][0]["field"], "query");
    assert_eq!(body["violations"][0]["code"], "parse");
}

#[actix_web::test]
async fn test_issue_list_pagination_headers_follow_user_filter() {
    let app = app!();

    let mut user_ids = Vec::new();
    for (first, last) in [("John", "Doe"), ("Jane", "Roe")] {
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "firstName": first, "lastName": last, "role": "citizen" }))
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        user_ids.push(user["id"].as_str().unwrap().to_string());
    }

    for user in [&user_ids[0], &user_ids[0], &user_ids[0], &user_ids[1]] {
        let req = test::TestRequest::post()
            .uri("/issues")
            .set_json(json!({ "latitude": 46.5, "longitude": 6.6, "user": user }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/issues?userId={}&page=2&pageSize=2", user_ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "X-Pagination-Page"), "2");
    assert_eq!(header(&resp, "X-Pagination-Page-Size"), "2");
    assert_eq!(header(&resp, "X-Pagination-Total"), "3");

    let items: Value = test::read_body_json(resp).await;
    assert_eq!(items.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get().uri("/issues?pageSize=500").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(header(&resp, "X-Pagination-Page-Size"), "100");
    assert_eq!(header(&resp, "X-Pagination-Total"), "4");

    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(header(&resp, "X-Pagination-Total"), "2");
    let users: Value = test::read_body_json(resp).await;
    assert_eq!(users[0]["lastName"], "Doe");
    assert_eq!(users[1]["lastName"], "Roe");
}

#[actix_web::test]
async fn test_delete_issue_then_get_is_not_found() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "firstName": "John", "lastName": "Doe", "role": "manager" }))
        .to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/issues")
        .set_json(json!({ "latitude": 1.0, "longitude": 2.0, "user": user["id"] }))
        .to_request();
    let issue: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/issues/{}", issue["id"].as_str().unwrap());

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users/not-an-id").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No user found with ID not-an-id");
}

#[actix_web::test]
async fn test_health_check() {
    let app = app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
