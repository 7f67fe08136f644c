#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use connect_api::messages::FRENCH;
    use connect_api::routes::error::ApiError;
    use tracing_test::traced_test;

    #[test]
    fn test_status_codes_per_kind() {
        let bad_request = [
            ApiError::AccountDisabled,
            ApiError::BadCredentials,
            ApiError::EmailExists("e".into()),
            ApiError::UsernameExists("u".into()),
            ApiError::EmailNotFound("e".into()),
            ApiError::UserNotFound("u".into()),
            ApiError::NotAnImageFile("f".into()),
            ApiError::PasswordPolicy("p".into()),
            ApiError::Promotion("p".into()),
            ApiError::Forum("f".into()),
        ];
        for err in bad_request {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(
            ApiError::AccountLocked.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::TokenExpired("t".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::AccessDenied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::NoResult("n".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::NoHandlerFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed {
                supported: "GET".into()
            }
            .status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::from(std::io::Error::other("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_fixed_kinds_use_catalog_messages() {
        let cases = [
            (ApiError::AccountDisabled, FRENCH.account_disabled),
            (ApiError::BadCredentials, FRENCH.incorrect_credentials),
            (ApiError::AccessDenied, FRENCH.not_enough_permission),
            (ApiError::AccountLocked, FRENCH.account_locked),
            (ApiError::NoHandlerFound, FRENCH.no_mapping),
        ];
        for (err, expected) in cases {
            let (_, body) = err.to_response(&FRENCH);
            assert_eq!(body.message, expected.to_uppercase());
        }
    }

    #[test]
    fn test_echo_kinds_uppercase_their_message() {
        let err = ApiError::UserNotFound("compte introuvable pour cet identifiant".into());
        let (status, body) = err.to_response(&FRENCH);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "COMPTE INTROUVABLE POUR CET IDENTIFIANT");
    }

    #[test]
    fn test_echo_kind_with_blank_message_falls_back_to_reason() {
        let err = ApiError::UserNotFound(String::new());
        let (_, body) = err.to_response(&FRENCH);
        assert_eq!(body.message, "BAD REQUEST");
    }

    #[test]
    fn test_method_not_allowed_names_the_supported_method() {
        let err = ApiError::MethodNotAllowed {
            supported: "GET".into(),
        };
        let (status, body) = err.to_response(&FRENCH);
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(body.message.contains("'GET'"));
        assert!(!body.message.contains("%S"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_io_detail_is_logged_not_leaked() {
        let err = ApiError::from(std::io::Error::other("disque indisponible"));
        let (status, body) = err.to_response(&FRENCH);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, FRENCH.error_processing_file.to_uppercase());
        assert!(!body.message.to_lowercase().contains("disque indisponible"));
        assert!(logs_contain("disque indisponible"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_unexpected_detail_is_logged_not_leaked() {
        let err = ApiError::from(anyhow::anyhow!("défaillance interne simulée"));
        let (status, body) = err.to_response(&FRENCH);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, FRENCH.internal_server_error.to_uppercase());
        assert!(!body.message.to_lowercase().contains("défaillance"));
        assert!(logs_contain("défaillance interne simulée"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_rejected_upload_is_logged() {
        let err = ApiError::NotAnImageFile("rapport.pdf n'est pas une image".into());
        let (_, body) = err.to_response(&FRENCH);
        assert_eq!(body.message, "RAPPORT.PDF N'EST PAS UNE IMAGE");
        assert!(logs_contain("rapport.pdf n'est pas une image"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_no_result_is_logged_and_echoed() {
        let err = ApiError::NoResult("aucun enregistrement pour id 42".into());
        let (status, body) = err.to_response(&FRENCH);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "AUCUN ENREGISTREMENT POUR ID 42");
        assert!(logs_contain("aucun enregistrement pour id 42"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_client_faults_are_not_logged() {
        let (_, _) = ApiError::BadCredentials.to_response(&FRENCH);
        let (_, _) = ApiError::AccountDisabled.to_response(&FRENCH);
        assert!(!logs_contain("bad credentials"));
        assert!(!logs_contain("account disabled"));
    }

    #[test]
    fn test_expired_jwt_maps_to_token_expired() {
        let source = jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::ExpiredSignature,
        );
        let err = ApiError::from(source);
        let (status, body) = err.to_response(&FRENCH);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message, "TOKEN HAS EXPIRED");
    }

    #[test]
    fn test_other_jwt_failures_are_unclassified() {
        let source =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::InvalidToken);
        let err = ApiError::from(source);
        let (status, body) = err.to_response(&FRENCH);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, FRENCH.internal_server_error.to_uppercase());
    }

    #[test]
    fn test_same_error_maps_the_same_way_twice() {
        let err = ApiError::AccountLocked;
        let (first_status, first) = err.to_response(&FRENCH);
        let (second_status, second) = err.to_response(&FRENCH);
        assert_eq!(first_status, second_status);
        assert_eq!(first.status_code, second.status_code);
        assert_eq!(first.status, second.status);
        assert_eq!(first.reason, second.reason);
        assert_eq!(first.message, second.message);
    }
}
