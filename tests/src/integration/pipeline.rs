//! # Pipeline Flows
//!
//! `ValidationService` wired to the real `NviSoapClient`, talking to a canned
//! civil-registry server over loopback.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use tckn_validator::{
        IdentityVerificationApi, NviSoapClient, RejectReason, ValidationOutcome,
        ValidationRequest, ValidationResponse, ValidationService, VerificationError,
    };

    use crate::support::{CannedAuthority, CannedReply, UNREACHABLE_ENDPOINT};

    fn pipeline(endpoint: &str) -> ValidationService {
        let client = NviSoapClient::new(endpoint).unwrap();
        ValidationService::new(Arc::new(client))
    }

    // =============================================================================
    // REMOTE VERDICTS
    // =============================================================================

    #[tokio::test]
    async fn test_confirmed_identity_round_trip() {
        let authority = CannedAuthority::spawn(CannedReply::verdict(true)).await.unwrap();
        let outcome = pipeline(&authority.url())
            .validate(&ValidationRequest::new("10000000146", " ayşe ", "yılmaz", 1990))
            .await
            .unwrap();

        assert_eq!(outcome, ValidationOutcome::Valid);

        let requests = authority.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.content_type.as_deref(), Some("text/xml; charset=utf-8"));
        assert_eq!(
            request.soap_action.as_deref(),
            Some("http://tckimlik.nvi.gov.tr/WS/TCKimlikNoDogrula")
        );
        assert!(request.body.contains("<TCKimlikNo>10000000146</TCKimlikNo>"));
        assert!(request.body.contains("<Ad>AYŞE</Ad>"));
        assert!(request.body.contains("<Soyad>YILMAZ</Soyad>"));
        assert!(request.body.contains("<DogumYili>1990</DogumYili>"));
    }

    #[tokio::test]
    async fn test_negative_verdict() {
        let authority = CannedAuthority::spawn(CannedReply::verdict(false)).await.unwrap();
        let outcome = pipeline(&authority.url())
            .validate(&ValidationRequest::new("12345678950", "MEHMET", "KAYA", 1985))
            .await
            .unwrap();

        assert_eq!(outcome, ValidationOutcome::NotConfirmed);
        assert_eq!(
            ValidationResponse::from(outcome),
            ValidationResponse { valid: false, error: None }
        );
    }

    #[tokio::test]
    async fn test_error_status_with_marker_still_confirms() {
        let body = crate::support::soap_reply(true);
        let authority = CannedAuthority::spawn(CannedReply::raw(StatusCode::INTERNAL_SERVER_ERROR, body))
            .await
            .unwrap();
        let outcome = pipeline(&authority.url())
            .validate(&ValidationRequest::new("10000000146", "AYSE", "YILMAZ", 1990))
            .await
            .unwrap();
        assert_eq!(outcome, ValidationOutcome::Valid);
    }

    #[tokio::test]
    async fn test_soap_fault_is_negative() {
        let fault = concat!(
            r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
            "<soap:Body><soap:Fault><faultcode>soap:Server</faultcode>",
            "<faultstring>Server was unable to process request.</faultstring>",
            "</soap:Fault></soap:Body></soap:Envelope>"
        );
        let authority = CannedAuthority::spawn(CannedReply::raw(StatusCode::INTERNAL_SERVER_ERROR, fault))
            .await
            .unwrap();
        let outcome = pipeline(&authority.url())
            .validate(&ValidationRequest::new("10000000146", "AYSE", "YILMAZ", 1990))
            .await
            .unwrap();
        assert_eq!(outcome, ValidationOutcome::NotConfirmed);
    }

    // =============================================================================
    // LOCAL REJECTIONS NEVER REACH THE AUTHORITY
    // =============================================================================

    #[tokio::test]
    async fn test_local_rejections_send_nothing() {
        let authority = CannedAuthority::spawn(CannedReply::verdict(true)).await.unwrap();
        let service = pipeline(&authority.url());

        let cases = [
            (ValidationRequest::new("1000000014", "AYSE", "YILMAZ", 1990), RejectReason::MalformedLength),
            (ValidationRequest::new("12345678901", "AYSE", "YILMAZ", 1990), RejectReason::FailedChecksum),
            (ValidationRequest::new("10000000147", "AYSE", "YILMAZ", 1990), RejectReason::FailedChecksum),
            (ValidationRequest::new("00000000000", "AYSE", "YILMAZ", 1990), RejectReason::FailedChecksum),
            (ValidationRequest::new("10000000146", "", "YILMAZ", 1990), RejectReason::MissingField),
            (ValidationRequest::new("10000000146", "AYSE", "YILMAZ", 0), RejectReason::MissingField),
        ];

        for (request, reason) in cases {
            let outcome = service.validate(&request).await.unwrap();
            assert_eq!(outcome, ValidationOutcome::Rejected(reason), "{:?}", request);
        }
        assert!(authority.requests().is_empty());
    }

    // =============================================================================
    // FAILURES ARE NOT VERDICTS
    // =============================================================================

    #[tokio::test]
    async fn test_unreachable_authority_is_transport_error() {
        let result = pipeline(UNREACHABLE_ENDPOINT)
            .validate(&ValidationRequest::new("10000000146", "AYSE", "YILMAZ", 1990))
            .await;

        let err = result.as_ref().unwrap_err();
        assert!(matches!(err, VerificationError::Transport(_)), "{:?}", err);

        let response = ValidationResponse::from_result(&result);
        assert!(!response.valid);
        assert!(response
            .error
            .unwrap()
            .starts_with("Error validating TCKN: "));
    }
}
