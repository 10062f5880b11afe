//! End-to-end behaviour of the shareholder API against the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use futures::future::join_all;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use shareholders::Trace;
use shareholders::domain::ports::{ShareholderCommand, ShareholderQuery};
use shareholders::domain::{NewShareholder, ShareholderName, ShareholderService};
use shareholders::inbound::http::configure;
use shareholders::inbound::http::health::HealthState;
use shareholders::inbound::http::shareholders::ShareholderResponse;
use shareholders::inbound::http::state::HttpState;
use shareholders::outbound::persistence::InMemoryShareholderRepository;

#[fixture]
fn http_state() -> HttpState {
    HttpState::from_repository(Arc::new(InMemoryShareholderRepository::new()))
}

async fn init_app(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(HealthState::new()))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn create_alice(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
) -> ShareholderResponse {
    let res = test::call_service(
        app,
        TestRequest::post()
            .uri("/shareholders/")
            .set_json(json!({"name": "Alice", "shares": 100, "transactions": [100]}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    test::read_body_json(res).await
}

#[rstest]
#[actix_web::test]
async fn create_append_get_delete_lifecycle(http_state: HttpState) {
    let app = init_app(http_state).await;

    let created = create_alice(&app).await;
    assert_eq!(created.shares, 100);
    assert_eq!(created.transactions, vec![100]);

    let res = test::call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/shareholders/{}/transactions?transaction=-20", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let appended: ShareholderResponse = test::read_body_json(res).await;
    assert_eq!(appended.id, created.id);
    assert_eq!(appended.shares, 80);
    assert_eq!(appended.transactions, vec![100, -20]);

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/shareholders/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: ShareholderResponse = test::read_body_json(res).await;
    assert_eq!(fetched, appended);

    let res = test::call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/shareholders/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/shareholders/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body["detail"],
        format!("Shareholder {} not found", created.id)
    );
}

#[rstest]
#[actix_web::test]
async fn get_after_post_returns_same_fields(http_state: HttpState) {
    let app = init_app(http_state).await;
    let created = create_alice(&app).await;

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/shareholders/{}", created.id))
            .to_request(),
    )
    .await;

    let fetched: ShareholderResponse = test::read_body_json(res).await;
    assert_eq!(fetched, created);
}

#[rstest]
#[actix_web::test]
async fn deleting_twice_is_204_then_404(http_state: HttpState) {
    let app = init_app(http_state).await;
    let created = create_alice(&app).await;
    let uri = format!("/shareholders/{}", created.id);

    let first = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
    let second = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;

    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(json!({}))]
#[case(json!({"name": null, "shares": null, "transactions": null}))]
#[actix_web::test]
async fn empty_update_leaves_record_unchanged(http_state: HttpState, #[case] payload: Value) {
    let app = init_app(http_state).await;
    let created = create_alice(&app).await;

    let res = test::call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/shareholders/{}", created.id))
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let unchanged: ShareholderResponse = test::read_body_json(res).await;
    assert_eq!(unchanged, created);
}

#[rstest]
#[actix_web::test]
async fn partial_update_can_break_the_running_total(http_state: HttpState) {
    let app = init_app(http_state).await;
    let created = create_alice(&app).await;

    let res = test::call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/shareholders/{}", created.id))
            .set_json(json!({"shares": 7}))
            .to_request(),
    )
    .await;

    let updated: ShareholderResponse = test::read_body_json(res).await;
    assert_eq!(updated.shares, 7);
    assert_eq!(updated.transactions, vec![100]);
    assert_eq!(updated.name, "Alice");
}

#[rstest]
#[actix_web::test]
async fn updates_and_appends_on_unknown_ids_are_404(http_state: HttpState) {
    let app = init_app(http_state).await;
    let missing = "65a1f0c2e4b0a1b2c3d4e5f6";

    let update = test::call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/shareholders/{missing}"))
            .set_json(json!({"shares": 1}))
            .to_request(),
    )
    .await;
    let empty_update = test::call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/shareholders/{missing}"))
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    let append = test::call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/shareholders/{missing}/transactions?transaction=5"))
            .to_request(),
    )
    .await;

    assert_eq!(update.status(), StatusCode::NOT_FOUND);
    assert_eq!(empty_update.status(), StatusCode::NOT_FOUND);
    assert_eq!(append.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn list_reflects_created_records(http_state: HttpState) {
    let app = init_app(http_state).await;

    let empty = test::call_service(&app, TestRequest::get().uri("/shareholders/").to_request()).await;
    let empty: Vec<ShareholderResponse> = test::read_body_json(empty).await;
    assert!(empty.is_empty());

    let first = create_alice(&app).await;
    let second = create_alice(&app).await;

    let listed = test::call_service(&app, TestRequest::get().uri("/shareholders/").to_request()).await;
    let listed: Vec<ShareholderResponse> = test::read_body_json(listed).await;
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[actix_web::test]
async fn interleaved_appends_over_http_are_all_applied(http_state: HttpState) {
    let app = init_app(http_state).await;
    let created = create_alice(&app).await;

    let responses = join_all([30_i64, -5].map(|amount| {
        test::call_service(
            &app,
            TestRequest::put()
                .uri(&format!(
                    "/shareholders/{}/transactions?transaction={amount}",
                    created.id
                ))
                .to_request(),
        )
    }))
    .await;
    assert!(responses.iter().all(|res| res.status() == StatusCode::OK));

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/shareholders/{}", created.id))
            .to_request(),
    )
    .await;
    let fetched: ShareholderResponse = test::read_body_json(res).await;
    assert_eq!(fetched.shares, 125);
    assert_eq!(fetched.transactions.len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_from_many_callers_sum_exactly() {
    let service = Arc::new(ShareholderService::new(Arc::new(
        InMemoryShareholderRepository::new(),
    )));
    let created = service
        .create_shareholder(NewShareholder {
            name: ShareholderName::new("Alice").expect("valid name"),
            shares: 100,
            transactions: vec![100],
        })
        .await
        .expect("create");

    let tasks: Vec<_> = (0..64_i64)
        .map(|n| {
            let service = Arc::clone(&service);
            let id = created.id().clone();
            let amount = if n % 2 == 0 { n } else { -n };
            tokio::spawn(async move { service.append_transaction(&id, amount).await })
        })
        .collect();
    for task in tasks {
        task.await.expect("join").expect("append");
    }

    let stored = service.get_shareholder(created.id()).await.expect("get");
    let expected: i64 = 100 + (0..64_i64).map(|n| if n % 2 == 0 { n } else { -n }).sum::<i64>();
    assert_eq!(stored.shares(), expected);
    assert_eq!(stored.transactions().len(), 65);
    assert_eq!(
        stored.shares(),
        stored.transactions().iter().sum::<i64>(),
        "running total stays consistent with the transaction log"
    );
}

#[rstest]
#[actix_web::test]
async fn every_response_carries_a_trace_id(http_state: HttpState) {
    let app = init_app(http_state).await;

    let res = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;

    assert!(res.headers().contains_key("trace-id"));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"Hello": "World"}));
}
