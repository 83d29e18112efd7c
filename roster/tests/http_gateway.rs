mod common;

use std::time::Duration;

use roster::{
    consts::consts::PersonId,
    gateway::{
        gateway::{GatewayError, PersonGateway},
        http::HttpGateway,
        options::GatewayOptions,
    },
    model::{action::Action, person::Person},
    view::{admin::PersonAdmin, list::RenderState},
};

fn gateway_for(base_url: String) -> HttpGateway {
    HttpGateway::new(GatewayOptions::default().set_base_url(base_url))
        .expect("client should build")
}

fn ann() -> Person {
    Person::new("Ann", "Lee", "ann@x.com", 30)
}

fn bo() -> Person {
    Person::new("Bo", "Yu", "bo@x.com", 22)
}

mod crud {
    use super::*;

    #[actix_web::test]
    async fn list_returns_records() {
        let server = common::start(vec![ann()]);
        let gateway = gateway_for(server.base_url());

        let people = gateway.list().await.expect("list should succeed");

        assert_eq!(people, vec![ann().with_id(PersonId(1))]);

        server.stop().await;
    }

    #[actix_web::test]
    async fn create_returns_server_assigned_id() {
        let server = common::start(vec![ann()]);
        let gateway = gateway_for(server.base_url());

        // Any id on the draft is stripped before sending
        let created = gateway
            .create(bo().with_id(PersonId(77)))
            .await
            .expect("create should succeed");

        assert_eq!(created, bo().with_id(PersonId(2)));
        assert_eq!(server.people().len(), 2);

        server.stop().await;
    }

    #[actix_web::test]
    async fn update_replaces_full_record() {
        let server = common::start(vec![ann()]);
        let gateway = gateway_for(server.base_url());

        let mut older = ann();
        older.age = 31;

        let updated = gateway
            .update(PersonId(1), older.clone())
            .await
            .expect("update should succeed");

        assert_eq!(updated, older.with_id(PersonId(1)));
        assert_eq!(server.people(), vec![updated]);

        server.stop().await;
    }

    #[actix_web::test]
    async fn fetch_and_delete_by_id() {
        let server = common::start(vec![ann(), bo()]);
        let gateway = gateway_for(format!("{}/", server.base_url()));

        let fetched = gateway.fetch(PersonId(2)).await.expect("fetch should succeed");
        assert_eq!(fetched, bo().with_id(PersonId(2)));

        gateway.delete(PersonId(1)).await.expect("delete should succeed");
        assert_eq!(server.people(), vec![bo().with_id(PersonId(2))]);

        server.stop().await;
    }
}

mod failures {
    use super::*;

    fn is_request_failed<T>(result: Result<T, GatewayError>) -> bool {
        matches!(result, Err(GatewayError::RequestFailed(_)))
    }

    #[actix_web::test]
    async fn not_found_is_request_failed() {
        let server = common::start(vec![ann()]);
        let gateway = gateway_for(server.base_url());

        assert!(is_request_failed(gateway.delete(PersonId(999)).await));
        assert!(is_request_failed(gateway.fetch(PersonId(999)).await));
        assert_eq!(server.people().len(), 1);

        server.stop().await;
    }

    #[actix_web::test]
    async fn empty_update_response_is_request_failed() {
        let server = common::start(vec![]);
        let gateway = gateway_for(server.base_url());

        let result = gateway.update(PersonId(1), ann()).await;

        assert!(is_request_failed(result));

        server.stop().await;
    }

    #[actix_web::test]
    async fn server_error_is_indistinguishable() {
        let server = common::start(vec![ann()]);
        let gateway = gateway_for(server.broken_base_url());

        let error = gateway.list().await.expect_err("500 should fail");

        assert_eq!(error.to_string(), "Request failed");

        server.stop().await;
    }

    #[actix_web::test]
    async fn refused_connection_is_request_failed() {
        let server = common::start(vec![]);
        let base_url = server.base_url();
        server.stop().await;

        let gateway = HttpGateway::new(
            GatewayOptions::default()
                .set_base_url(base_url)
                .set_timeout(Some(Duration::from_secs(2))),
        )
        .expect("client should build");

        assert!(is_request_failed(gateway.list().await));
    }
}

#[actix_web::test]
async fn admin_view_over_http() {
    // Given the service holds Ann
    let server = common::start(vec![ann()]);
    let gateway = gateway_for(server.base_url());
    let mut admin = PersonAdmin::new();

    let action = admin.mount();
    admin.run(&gateway, action).await;

    // When Bo is created and Ann deleted
    admin.run(&gateway, Action::Create(bo())).await;
    admin.request_delete(PersonId(1)).expect("Ann is listed");
    let delete = admin
        .answer_confirmation(true)
        .expect("confirmation is pending")
        .expect("yes should delete");
    admin.run(&gateway, delete).await;

    // Then only Bo is shown, matching the server
    assert_eq!(
        admin.list().render_state(),
        RenderState::Populated(vec![&bo().with_id(PersonId(2))])
    );
    assert_eq!(server.people(), vec![bo().with_id(PersonId(2))]);

    server.stop().await;
}
