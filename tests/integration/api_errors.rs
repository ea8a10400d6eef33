// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for comprehensive error handling

#[cfg(test)]
mod error_handling_tests {
    use actix_web::{http::StatusCode, test, web::Data, App};
    use serde_json::{json, Value};

    use mailroom::api::rest::{configure_rest_service, AppState};
    use mailroom::config::Settings;
    use mailroom::mailbox::Mailbox;
    use mailroom::seed::Seed;

    fn state() -> Data<AppState> {
        Data::new(AppState::new(Settings::default(), Mailbox::new(Seed::builtin())))
    }

    #[actix_web::test]
    async fn test_empty_reviewer_is_rejected_and_nothing_is_saved() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_rest_service)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/mails/5/review")
            .set_json(json!({"reviewer": "", "subject": "Changed"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert!(body["timestamp"].is_string());

        let req = test::TestRequest::get().uri("/api/v1/mails/5").to_request();
        let mail: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(mail["subject"], "Draft: F2P User Onboarding");
        assert!(mail.get("review_tag").is_none());
    }

    #[actix_web::test]
    async fn test_missing_and_unknown_reviewer() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_rest_service)).await;

        for payload in [json!({}), json!({"reviewer": "ceo"})] {
            let req = test::TestRequest::post()
                .uri("/api/v1/mails/4/review")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[actix_web::test]
    async fn test_sent_mail_is_immutable() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_rest_service)).await;

        let requests = [
            test::TestRequest::post().uri("/api/v1/mails/1/send"),
            test::TestRequest::put().uri("/api/v1/mails/1").set_json(json!({"subject": "Edited"})),
            test::TestRequest::post()
                .uri("/api/v1/mails/1/review")
                .set_json(json!({"reviewer": "manager"})),
            test::TestRequest::delete().uri("/api/v1/mails/1"),
        ];

        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::CONFLICT);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "INVALID_TRANSITION");
        }

        let req = test::TestRequest::get().uri("/api/v1/mails/1").to_request();
        let mail: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(mail["subject"], "Welcome to F2P Platform");
        assert_eq!(mail["timestamp"], "2 hours ago");
    }

    #[actix_web::test]
    async fn test_unknown_resources() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_rest_service)).await;

        let requests = [
            test::TestRequest::get().uri("/api/v1/mails/99"),
            test::TestRequest::post().uri("/api/v1/mails/99/send"),
            test::TestRequest::get().uri("/api/v1/contacts/99"),
            test::TestRequest::post().uri("/api/v1/selection/mail/99"),
            test::TestRequest::post().uri("/api/v1/selection/contact/99"),
            // Conversation of another contact
            test::TestRequest::post().uri("/api/v1/selection/contact/2/conversation/1-1"),
        ];

        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "NOT_FOUND");
        }
    }

    #[actix_web::test]
    async fn test_payload_validation() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_rest_service)).await;

        let req = test::TestRequest::put()
            .uri("/api/v1/mails/5")
            .set_json(json!({"sender": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "BAD_REQUEST");

        let req = test::TestRequest::post()
            .uri("/api/v1/mails")
            .set_json(json!({"category": "p2f", "subject": "x".repeat(1000)}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/v1/mails/5")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["timestamp"].is_string());

        let req = test::TestRequest::get()
            .uri("/api/v1/mails?category=p2f&section=draft")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 1);

        let req = test::TestRequest::get().uri("/api/v1/mails/5").to_request();
        let mail: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(mail["subject"], "Draft: F2P User Onboarding");
    }
}
