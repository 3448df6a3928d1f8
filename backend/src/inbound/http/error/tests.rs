//! Tests for HTTP error mapping.

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test as actix_test;
use actix_web::{App, ResponseError, web};
use rstest::rstest;

use super::*;
use crate::domain::{Error, ErrorCode};

async fn body_text(response: HttpResponse) -> String {
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[rstest]
#[case(ErrorCode::NO_EMPLOYEES, 601)]
#[case(ErrorCode::MISSING_ID, 602)]
#[case(ErrorCode::EMPLOYEE_NOT_FOUND, 603)]
#[case(ErrorCode::FETCH_FAILED, 604)]
#[case(ErrorCode::BLANK_NAME, 605)]
#[case(ErrorCode::INVALID_AGE, 606)]
#[case(ErrorCode::SAVE_FAILED, 607)]
#[case(ErrorCode::DELETE_FAILED, 608)]
#[case(ErrorCode::DELETE_TARGET_MISSING, 609)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] expected: u16) {
    let error = Error::empty_output(code, "boom");
    assert_eq!(ResponseError::status_code(&error).as_u16(), expected);
}

#[rstest]
fn out_of_range_code_falls_back_to_internal_error() {
    let error = Error::invalid_input(ErrorCode::new(42), "odd");
    assert_eq!(
        ResponseError::status_code(&error),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[actix_web::test]
async fn domain_error_body_is_plain_message() {
    let error = Error::empty_output(
        ErrorCode::DELETE_TARGET_MISSING,
        "No employee found with ID: 999. Unable to delete employee.",
    );
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status().as_u16(), 609);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(
        body_text(response).await,
        "No employee found with ID: 999. Unable to delete employee."
    );
}

#[actix_web::test]
async fn wrong_method_rejection_uses_guidance_text() {
    let response = ResponseError::error_response(&RequestRejection::WrongMethod);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "You are using the wrong method for sending the request. Please select the correct method."
    );
}

#[actix_web::test]
async fn no_such_element_rejection_echoes_message() {
    let rejection = RequestRejection::no_such_element("missing field `id`");
    let response = ResponseError::error_response(&rejection);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "missing field `id`");
}

#[actix_web::test]
async fn path_extraction_failure_is_rejected_as_bad_request() {
    let app = actix_test::init_service(
        App::new()
            .app_data(
                web::PathConfig::default()
                    .error_handler(reject_extraction::<actix_web::error::PathError>),
            )
            .route(
                "/items/{id}",
                web::get().to(|id: web::Path<i64>| async move { id.into_inner().to_string() }),
            ),
    )
    .await;
    let req = actix_test::TestRequest::get().uri("/items/abc").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = actix_test::read_body(res).await;
    assert!(!body.is_empty());
}

#[actix_web::test]
async fn fallback_service_rejects_unsupported_method() {
    let app = actix_test::init_service(
        App::new().service(
            web::resource("/items")
                .route(web::get().to(|| async { "ok" }))
                .default_service(web::to(reject_wrong_method)),
        ),
    )
    .await;
    let req = actix_test::TestRequest::post().uri("/items").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = actix_test::read_body(res).await;
    assert_eq!(
        body.as_ref(),
        WRONG_METHOD_MESSAGE.as_bytes(),
    );
}
