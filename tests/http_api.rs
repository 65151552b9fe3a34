//! Router-level tests against a SeaORM mock connection. Each test queues the
//! rows the handler is expected to read, in the order it reads them.

use std::sync::Arc;

use autoservice_api::{
    app::build_app,
    entity::{makes, services, users, users::UserRole},
    state::AppState,
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use tower::ServiceExt;

fn stored_user(id: i32) -> users::Model {
    let now = Utc::now().fixed_offset();
    users::Model {
        id,
        created: now,
        updated: now,
        last_name: "Филатов".into(),
        first_name: "Никита".into(),
        patronymic: None,
        birthday: NaiveDate::from_ymd_opt(1984, 9, 5).unwrap(),
        phone: "+7 (950) 732-13-83".into(),
        email: "n@x.ru".into(),
        role: UserRole::Owner,
        login: "zz_filin_zz".into(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".into(),
    }
}

fn stored_service(id: i32) -> services::Model {
    let now = Utc::now().fixed_offset();
    services::Model {
        id,
        created: now,
        updated: now,
        name: "LeCar Service".into(),
        address: "г. Ярославль, Московский проспект, д. 110, к. Б".into(),
        summary: None,
        timetable: "Ежедневно с 08:00 до 20:00".into(),
        website: None,
    }
}

fn filatov_body() -> Value {
    json!({
        "last_name": "Филатов",
        "first_name": "Никита",
        "birthday": "1984-09-05",
        "phone": "+7 (950) 732-13-83",
        "email": "n@x.ru",
        "role": "owner",
        "login": "zz_filin_zz",
        "password": "2a_B4-cJ_q5"
    })
}

fn app(conn: DatabaseConnection) -> Router {
    build_app(AppState::new(conn))
}

/// Router plus a handle on its connection, for reading the transaction log
/// once the request has finished.
fn shared_app(conn: DatabaseConnection) -> (Router, Arc<DatabaseConnection>) {
    let conn = Arc::new(conn);
    (build_app(AppState::from_shared(conn.clone())), conn)
}

fn transaction_log(conn: Arc<DatabaseConnection>) -> String {
    let conn = Arc::try_unwrap(conn)
        .ok()
        .expect("router still holds the connection");
    format!("{:?}", conn.into_transaction_log())
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn get_user_hides_password_hash() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_user(1)]])
        .into_connection();

    let (status, body) = send(app(db), Method::GET, "/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["role"], "owner");
    assert_eq!(body["birthday"], "1984-09-05");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn missing_user_is_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();

    let (status, body) = send(app(db), Method::GET, "/users/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "User not found." }));
}

#[tokio::test]
async fn non_positive_or_malformed_ids_are_422() {
    let (status, body) = send(app(empty_db()), Method::GET, "/users/0", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["path", "id"]));

    let (status, _) = send(app(empty_db()), Method::DELETE, "/services/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_user_returns_201_without_password() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new(), vec![stored_user(1)]])
        .into_connection();

    let (status, body) = send(app(db), Method::POST, "/users/", Some(filatov_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["login"], "zz_filin_zz");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_user_is_409() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_user(1)]])
        .into_connection();

    let (status, body) = send(app(db), Method::POST, "/users/", Some(filatov_body())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["detail"],
        "User with the same phone number already exists."
    );
}

#[tokio::test]
async fn invalid_user_body_is_422_before_any_query() {
    let mut body = filatov_body();
    body["phone"] = json!("89507321383");
    body["birthday"] = json!(Utc::now().date_naive().to_string());

    // No rows queued: touching the database would surface as a 500.
    let (status, body) = send(app(empty_db()), Method::POST, "/users/", Some(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let locs: Vec<Value> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["loc"].clone())
        .collect();
    assert!(locs.contains(&json!(["body", "phone"])));
    assert!(locs.contains(&json!(["body", "birthday"])));
}

#[tokio::test]
async fn malformed_json_is_422() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/services/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app(empty_db()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// The uniqueness check does not exclude the user being patched, so sending
// back its own login is reported as a conflict.
#[tokio::test]
async fn patching_own_login_reports_conflict() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_user(7)], vec![stored_user(7)]])
        .into_connection();

    let (status, body) = send(
        app(db),
        Method::PATCH,
        "/users/7",
        Some(json!({ "login": "zz_filin_zz" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "User with the same login already exists.");
}

#[tokio::test]
async fn patch_missing_user_is_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();

    let (status, body) = send(
        app(db),
        Method::PATCH,
        "/users/5",
        Some(json!({ "first_name": "Пётр" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found.");
}

#[tokio::test]
async fn delete_then_delete_again() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let app = app(db);

    let (status, body) = send(app.clone(), Method::DELETE, "/users/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(app, Method::DELETE, "/users/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found.");
}

#[tokio::test]
async fn makes_query_uses_case_insensitive_match() {
    let (app, conn) = shared_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![makes::Model {
                id: 1,
                name: "Renault".into(),
            }]])
            .into_connection(),
    );

    let (status, body) = send(app, Method::GET, "/makes/?query=ren", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "name": "Renault" }]));

    let log = transaction_log(conn);
    assert!(log.contains("ILIKE"));
    assert!(log.contains("%ren%"));
    assert!(log.contains("ORDER BY"));
}

#[tokio::test]
async fn models_of_missing_make_is_404() {
    let (app, conn) = shared_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<makes::Model>::new()])
            .into_connection(),
    );

    let (status, body) = send(app, Method::GET, "/models/?make-id=99&query=dus", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Vehicle make not found.");

    let log = transaction_log(conn);
    assert!(!log.contains("make_id"));
}

#[tokio::test]
async fn catalog_parent_id_is_required() {
    for uri in [
        "/models/",
        "/ranges/",
        "/generations/",
        "/configurations/?generation-id=0",
        "/ranges/?model-id=abc",
    ] {
        let (status, _) = send(app(empty_db()), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}

#[tokio::test]
async fn negative_pagination_is_422() {
    let (status, body) = send(app(empty_db()), Method::GET, "/users/?limit=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["query", "limit"]));

    let (status, _) = send(app(empty_db()), Method::GET, "/services/?offset=-5", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// Past i64::MAX the value cannot be bound as a Postgres bigint.
#[tokio::test]
async fn pagination_beyond_bigint_is_422() {
    for uri in [
        "/services/?offset=9223372036854775808",
        "/users/?limit=18446744073709551615",
    ] {
        let (status, _) = send(app(empty_db()), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}

#[tokio::test]
async fn largest_bigint_offset_reaches_the_query() {
    let (app, conn) = shared_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<services::Model>::new()])
            .into_connection(),
    );

    let uri = "/services/?offset=9223372036854775807";
    let (status, body) = send(app, Method::GET, uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert!(transaction_log(conn).contains("9223372036854775807"));
}

#[tokio::test]
async fn missing_service_is_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<services::Model>::new()])
        .into_connection();

    let (status, body) = send(app(db), Method::GET, "/services/9", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Service not found." }));
}

#[tokio::test]
async fn create_service_returns_201() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_service(1)]])
        .into_connection();

    let (status, body) = send(
        app(db),
        Method::POST,
        "/services/",
        Some(json!({
            "name": "LeCar Service",
            "address": "г. Ярославль, Московский проспект, д. 110, к. Б",
            "timetable": "Ежедневно с 08:00 до 20:00"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "LeCar Service");
    assert_eq!(body["website"], Value::Null);
}

#[tokio::test]
async fn patch_service_only_sets_supplied_fields() {
    let mut updated = stored_service(4);
    updated.website = Some("https://yaroslavl.lecar.ru/".into());
    let (app, conn) = shared_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_service(4)], vec![updated]])
            .into_connection(),
    );

    let (status, body) = send(
        app,
        Method::PATCH,
        "/services/4",
        Some(json!({ "website": "https://yaroslavl.lecar.ru/" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["website"], "https://yaroslavl.lecar.ru/");
    assert_eq!(body["name"], "LeCar Service");

    let log = transaction_log(conn);
    assert!(log.contains("UPDATE"));
    assert!(log.contains("https://yaroslavl.lecar.ru/"));
}

#[tokio::test]
async fn patch_missing_service_is_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<services::Model>::new()])
        .into_connection();

    let (status, body) = send(
        app(db),
        Method::PATCH,
        "/services/4",
        Some(json!({ "name": "Other" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Service not found.");
}

#[tokio::test]
async fn delete_service_then_again() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let app = app(db);

    let (status, _) = send(app.clone(), Method::DELETE, "/services/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(app, Method::DELETE, "/services/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Service not found.");
}

#[tokio::test]
async fn patch_password_stores_a_new_hash() {
    let (app, conn) = shared_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_user(7)], vec![stored_user(7)]])
            .into_connection(),
    );

    let (status, body) = send(
        app,
        Method::PATCH,
        "/users/7",
        Some(json!({ "password": "new_pass_123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("password_hash").is_none());

    let log = transaction_log(conn);
    assert!(log.contains("$argon2id$"));
    assert!(!log.contains("new_pass_123"));
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let (status, body) = send(app(empty_db()), Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}
