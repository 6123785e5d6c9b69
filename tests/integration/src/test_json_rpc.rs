//! awsJson1_1 wire tests (Cognito user pools, Translate, Comprehend).

#[cfg(test)]
mod tests {
    use awsmobile_cognito_idp::input::{ListDevicesInput, UpdateDeviceStatusInput};
    use awsmobile_cognito_idp::operations::{GetDevice, ListDevices, UpdateDeviceStatus};
    use awsmobile_cognito_idp::types::DeviceRememberedStatusType;
    use awsmobile_comprehend::input::DetectSentimentInput;
    use awsmobile_comprehend::operations::{DetectDominantLanguage, DetectSentiment};
    use awsmobile_comprehend::types::{LanguageCode, SentimentType};
    use awsmobile_core::Operation;
    use awsmobile_translate::input::{TranslateDocumentInput, TranslateTextInput};
    use awsmobile_translate::operations::{ListLanguages, TranslateDocument, TranslateText};
    use awsmobile_translate::types::{Document, Formality, TranslationSettings};
    use bytes::Bytes;
    use serde_json::json;

    use crate::{json_body, local_config, response};

    #[test]
    fn test_should_post_cognito_rpc_request() {
        let input = ListDevicesInput::default()
            .with_access_token("eyJraWQiOi")
            .with_limit(10);
        let req = ListDevices::build_request(&input, &local_config()).unwrap();

        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(req.uri().to_string(), "http://localhost:4566/");
        assert_eq!(
            req.headers()["x-amz-target"],
            "AWSCognitoIdentityProviderService.ListDevices"
        );
        assert_eq!(req.headers()["content-type"], "application/x-amz-json-1.1");
        assert_eq!(json_body(&req), json!({"AccessToken": "eyJraWQiOi", "Limit": 10}));
    }

    #[test]
    fn test_should_not_leak_access_token_in_debug_output() {
        let input = UpdateDeviceStatusInput::default()
            .with_access_token("secret-token")
            .with_device_key("us-east-1_abc")
            .with_device_remembered_status(DeviceRememberedStatusType::NotRemembered);
        assert!(!format!("{input:?}").contains("secret-token"));

        let req = UpdateDeviceStatus::build_request(&input, &local_config()).unwrap();
        assert_eq!(json_body(&req)["DeviceRememberedStatus"], "not_remembered");
        assert_eq!(json_body(&req)["AccessToken"], "secret-token");
    }

    #[test]
    fn test_should_decode_devices_with_epoch_dates() {
        let body = r#"{
            "Devices": [
                {
                    "DeviceKey": "us-east-1_1",
                    "DeviceAttributes": [
                        {"Name": "device_name", "Value": "pixel"},
                        {"Name": "last_ip_used", "Value": "10.0.0.1"}
                    ],
                    "DeviceCreateDate": 1600000000,
                    "DeviceLastModifiedDate": 1600000100.25
                },
                {"DeviceKey": "us-east-1_2"}
            ],
            "PaginationToken": "p2"
        }"#;
        let out = ListDevices::parse_response(&response(200, &[], body)).unwrap();

        let devices = out.devices.unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].attribute("device_name"), Some("pixel"));
        assert_eq!(devices[0].device_create_date.map(|t| t.timestamp()), Some(1_600_000_000));
        assert_eq!(
            devices[0].device_last_modified_date.map(|t| t.timestamp_millis()),
            Some(1_600_000_100_250)
        );
        assert!(devices[1].device_attributes.is_none());
        assert_eq!(out.pagination_token.as_deref(), Some("p2"));
    }

    #[test]
    fn test_should_decode_empty_body_as_default_output() {
        let out = GetDevice::parse_response(&response(200, &[], "")).unwrap();
        assert!(out.device.is_none());
        UpdateDeviceStatus::parse_response(&response(200, &[], "{}")).unwrap();
    }

    #[test]
    fn test_should_post_translate_text_with_settings() {
        let input = TranslateTextInput::default()
            .with_text("Hello")
            .with_source_language_code("auto")
            .with_target_language_code("fr")
            .with_settings(TranslationSettings {
                formality: Some(Formality::Formal),
                ..TranslationSettings::default()
            });
        let req = TranslateText::build_request(&input, &local_config()).unwrap();

        assert_eq!(
            req.headers()["x-amz-target"],
            "AWSShineFrontendService_20170701.TranslateText"
        );
        assert_eq!(
            json_body(&req),
            json!({
                "Text": "Hello",
                "SourceLanguageCode": "auto",
                "TargetLanguageCode": "fr",
                "Settings": {"Formality": "FORMAL"}
            })
        );
    }

    #[test]
    fn test_should_base64_document_content_both_ways() {
        let input = TranslateDocumentInput::default()
            .with_document(Document {
                content: Some(Bytes::from_static(b"<p>hi</p>")),
                content_type: Some("text/html".to_owned()),
            })
            .with_source_language_code("en")
            .with_target_language_code("de");
        let req = TranslateDocument::build_request(&input, &local_config()).unwrap();
        assert_eq!(json_body(&req)["Document"]["Content"], "PHA+aGk8L3A+");

        let body = r#"{"TranslatedDocument": {"Content": "PHA+aGFsbG88L3A+"}, "TargetLanguageCode": "de"}"#;
        let out = TranslateDocument::parse_response(&response(200, &[], body)).unwrap();
        assert_eq!(
            out.translated_document.unwrap().content,
            Some(Bytes::from_static(b"<p>hallo</p>"))
        );
    }

    #[test]
    fn test_should_send_empty_object_for_empty_input() {
        let req = ListLanguages::build_request(&Default::default(), &local_config()).unwrap();
        assert_eq!(&req.body()[..], b"{}");
        assert_eq!(req.headers()["content-length"], "2");
    }

    #[test]
    fn test_should_detect_sentiment_round_trip() {
        let input = DetectSentimentInput::default()
            .with_text("I love this")
            .with_language_code(LanguageCode::En);
        let req = DetectSentiment::build_request(&input, &local_config()).unwrap();
        assert_eq!(req.headers()["x-amz-target"], "Comprehend_20171127.DetectSentiment");
        assert_eq!(json_body(&req), json!({"Text": "I love this", "LanguageCode": "en"}));

        let body = r#"{"Sentiment": "POSITIVE", "SentimentScore": {"Positive": 0.75, "Negative": 0.25}}"#;
        let out = DetectSentiment::parse_response(&response(200, &[], body)).unwrap();
        assert_eq!(out.sentiment, Some(SentimentType::Positive));
        let score = out.sentiment_score.unwrap();
        assert_eq!(score.positive, Some(0.75));
        assert!(score.mixed.is_none());
    }

    #[test]
    fn test_should_pick_dominant_language() {
        let body = r#"{"Languages": [
            {"LanguageCode": "en", "Score": 0.25},
            {"LanguageCode": "fr", "Score": 0.5}
        ]}"#;
        let out = DetectDominantLanguage::parse_response(&response(200, &[], body)).unwrap();
        assert_eq!(out.best().and_then(|l| l.language_code.as_deref()), Some("fr"));
    }
}
