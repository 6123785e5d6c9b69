//! Error mapping across protocols.

#[cfg(test)]
mod tests {
    use awsmobile_chime_messaging::ChimeMessagingErrorCode;
    use awsmobile_chime_messaging::operations::SendChannelMessage;
    use awsmobile_cognito_idp::CognitoIdpErrorCode;
    use awsmobile_cognito_idp::input::GetDeviceInput;
    use awsmobile_cognito_idp::operations::GetDevice;
    use awsmobile_comprehend::operations::DetectSentiment;
    use awsmobile_core::{MarshalError, Operation, SdkError, UnmarshalError, marshall_request};
    use awsmobile_sns::SnsErrorCode;
    use awsmobile_sns::operations::{CreateTopic, Publish};
    use awsmobile_translate::TranslateErrorCode;
    use awsmobile_translate::operations::TranslateText;
    use awsmobile_xml::error_to_xml;

    use crate::response;

    #[test]
    fn test_should_read_rest_json_error_from_header() {
        let resp = response(
            429,
            &[
                ("x-amzn-ErrorType", "ThrottledClientException:http://internal.amazon.com/"),
                ("x-amzn-RequestId", "req-1"),
            ],
            r#"{"Code": "ignored", "Message": "Rate exceeded"}"#,
        );
        let err = SendChannelMessage::parse_response(&resp)
            .unwrap_err()
            .into_service_error()
            .unwrap();

        assert_eq!(err.code, Some(ChimeMessagingErrorCode::ThrottledClientException));
        assert_eq!(err.message, "Rate exceeded");
        assert_eq!(err.status_code, http::StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            err.to_string(),
            "ThrottledClientException (429): Rate exceeded [request id: req-1]"
        );
    }

    #[test]
    fn test_should_strip_namespace_from_json_type() {
        let resp = response(
            400,
            &[],
            r#"{"__type": "com.amazonaws.cognito.identity.idp#NotAuthorizedException", "message": "Access Token has expired"}"#,
        );
        let err = GetDevice::parse_response(&resp)
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert!(err.is(CognitoIdpErrorCode::NotAuthorizedException));
        assert_eq!(err.raw_code, "NotAuthorizedException");
        assert_eq!(err.message, "Access Token has expired");
    }

    #[test]
    fn test_should_keep_unmodeled_code_raw() {
        let resp = response(400, &[], r#"{"__type": "DetectedLanguageLowConfidenceException"}"#);
        let err = TranslateText::parse_response(&resp)
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert!(err.code.is_none());
        assert_eq!(err.raw_code, "DetectedLanguageLowConfidenceException");
        assert_eq!(
            TranslateErrorCode::from_code("TooManyRequestsException"),
            Some(TranslateErrorCode::TooManyRequestsException)
        );
    }

    #[test]
    fn test_should_report_status_for_non_json_error_body() {
        let resp = response(503, &[], "<html>Service Unavailable</html>");
        let err = DetectSentiment::parse_response(&resp)
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert!(err.code.is_none());
        assert_eq!(err.status_code, http::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "UnknownError (503): ");
    }

    #[test]
    fn test_should_reject_checksum_mismatch_before_decoding() {
        let body = r#"{"Device": {"DeviceKey": "k"}}"#;
        let good = crc32fast::hash(body.as_bytes()).to_string();

        let ok = GetDevice::parse_response(&response(200, &[("x-amz-crc32", good.as_str())], body)).unwrap();
        assert_eq!(ok.device.unwrap().device_key.as_deref(), Some("k"));

        let err = GetDevice::parse_response(&response(200, &[("x-amz-crc32", "1")], body)).unwrap_err();
        assert!(matches!(
            err,
            SdkError::Unmarshal(UnmarshalError::ChecksumMismatch { expected: 1, .. })
        ));
    }

    #[test]
    fn test_should_check_crc32_apart_from_body_decoding() {
        let body = r#"{"Device": {"DeviceKey": "k"}}"#;
        let good = crc32fast::hash(body.as_bytes()).to_string();

        awsmobile_json::verify_crc32(&response(200, &[], body)).unwrap();
        awsmobile_json::verify_crc32(&response(200, &[("x-amz-crc32", good.as_str())], body)).unwrap();
        assert!(matches!(
            awsmobile_json::verify_crc32(&response(200, &[("x-amz-crc32", "7")], body)),
            Err(UnmarshalError::ChecksumMismatch { expected: 7, .. })
        ));

        let value: serde_json::Value = awsmobile_json::from_body(body.as_bytes()).unwrap();
        assert_eq!(value["Device"]["DeviceKey"], "k");
        let empty: serde_json::Value = awsmobile_json::from_body(b"  \n").unwrap();
        assert!(empty.is_null());
    }

    #[test]
    fn test_should_map_query_error_document() {
        let body = error_to_xml("AuthorizationError", "Not authorized to publish", "req-7");
        let err = Publish::parse_response(&response(403, &[], body))
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(err.code, Some(SnsErrorCode::AuthorizationError));
        assert_eq!(err.request_id.as_deref(), Some("req-7"));
        assert_eq!(
            SnsErrorCode::AuthorizationError.default_status_code(),
            http::StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_should_map_service_error_document_with_namespace() {
        let body = r#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <Error>
    <Type>Sender</Type>
    <Code>TopicLimitExceeded</Code>
    <Message>Topic limit exceeded</Message>
  </Error>
  <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
</ErrorResponse>"#;
        let err = CreateTopic::parse_response(&response(403, &[], body))
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(err.code, Some(SnsErrorCode::TopicLimitExceeded));
        assert_eq!(err.message, "Topic limit exceeded");
        assert_eq!(
            err.request_id.as_deref(),
            Some("9dd01905-5012-5f99-8663-4b3ecd0dfaef")
        );
    }

    #[test]
    fn test_should_fail_fast_on_missing_input() {
        let err = marshall_request::<GetDeviceInput>(None).unwrap_err();
        assert!(matches!(err, MarshalError::MissingInput("GetDevice")));
    }
}
