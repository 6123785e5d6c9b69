//! restJson1 wire tests (Chime SDK Messaging).

#[cfg(test)]
mod tests {
    use awsmobile_chime_messaging::operations::{
        GetChannelMessage, ListChannelMessages, SendChannelMessage,
    };
    use awsmobile_chime_messaging::input::{
        GetChannelMessageInput, ListChannelMessagesInput, SendChannelMessageInput,
    };
    use awsmobile_chime_messaging::types::{
        ChannelMessagePersistenceType, ChannelMessageStatus, ChannelMessageType, SortOrder,
    };
    use awsmobile_core::{ClientConfig, Operation};
    use chrono::{TimeZone, Utc};

    use crate::{json_body, local_config, response};

    const CHANNEL: &str = "arn:aws:chime:us-east-1:123456789012:app-instance/a1/channel/c1";
    const ENCODED_CHANNEL: &str =
        "arn%3Aaws%3Achime%3Aus-east-1%3A123456789012%3Aapp-instance%2Fa1%2Fchannel%2Fc1";

    #[test]
    fn test_should_send_message_with_body_and_bearer() {
        let input = SendChannelMessageInput::default()
            .with_channel_arn(CHANNEL)
            .with_content("hello")
            .with_message_type(ChannelMessageType::Standard)
            .with_persistence(ChannelMessagePersistenceType::NonPersistent)
            .with_chime_bearer("arn:aws:chime:us-east-1:123456789012:app-instance/a1/user/u1");

        let req = SendChannelMessage::build_request(&input, &local_config()).unwrap();

        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(
            req.uri().to_string(),
            format!("http://localhost:4566/channels/{ENCODED_CHANNEL}/messages")
        );
        assert_eq!(
            req.headers()["x-amz-chime-bearer"],
            "arn:aws:chime:us-east-1:123456789012:app-instance/a1/user/u1"
        );
        assert_eq!(req.headers()["content-type"], "application/json");

        let body = json_body(&req);
        assert_eq!(body["Content"], "hello");
        assert_eq!(body["Type"], "STANDARD");
        assert_eq!(body["Persistence"], "NON_PERSISTENT");
        assert_eq!(body["ClientRequestToken"].as_str().map(str::len), Some(36));
        assert!(body.get("ChannelArn").is_none());
        assert!(body.get("ChimeBearer").is_none());
    }

    #[test]
    fn test_should_keep_caller_request_token() {
        let input = SendChannelMessageInput::default()
            .with_channel_arn(CHANNEL)
            .with_content("again")
            .with_client_request_token("token-1");
        let req = SendChannelMessage::build_request(&input, &local_config()).unwrap();
        assert_eq!(json_body(&req)["ClientRequestToken"], "token-1");
    }

    #[test]
    fn test_should_list_messages_with_query_parameters() {
        let input = ListChannelMessagesInput::default()
            .with_channel_arn(CHANNEL)
            .with_sort_order(SortOrder::Descending)
            .with_not_after(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .with_next_token("a b");

        let req = ListChannelMessages::build_request(&input, &local_config()).unwrap();

        assert_eq!(req.method(), http::Method::GET);
        assert_eq!(
            req.uri().query(),
            Some("sort-order=DESCENDING&not-after=2024-01-02T03%3A04%3A05.000Z&next-token=a%20b")
        );
        assert!(req.body().is_empty());
    }

    #[test]
    fn test_should_resolve_regional_endpoint() {
        let input = GetChannelMessageInput::default()
            .with_channel_arn("c")
            .with_message_id("m");
        let config = ClientConfig::default().with_region("eu-central-1");
        let req = GetChannelMessage::build_request(&input, &config).unwrap();
        assert_eq!(
            req.uri().to_string(),
            "https://messaging-chime.eu-central-1.amazonaws.com/channels/c/messages/m"
        );
        assert_eq!(req.headers()["host"], "messaging-chime.eu-central-1.amazonaws.com");
    }

    #[test]
    fn test_should_decode_channel_message() {
        let body = r#"{
            "ChannelArn": "arn:c",
            "ChannelMessage": {
                "MessageId": "m1",
                "Content": "hi",
                "Type": "CONTROL",
                "CreatedTimestamp": 1700000000.5,
                "Sender": {"Arn": "arn:u", "Name": "Ana"},
                "Status": {"Value": "SENT"},
                "MessageAttributes": {"k": {"StringValues": ["v1", "v2"]}},
                "Target": [{"MemberArn": "arn:m"}],
                "SomethingNew": {"nested": [1, 2, 3]}
            }
        }"#;
        let out = GetChannelMessage::parse_response(&response(200, &[], body)).unwrap();

        assert_eq!(out.channel_arn.as_deref(), Some("arn:c"));
        let message = out.channel_message.unwrap();
        assert_eq!(message.message_type, Some(ChannelMessageType::Control));
        assert_eq!(
            message.created_timestamp.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_500)
        );
        assert_eq!(message.sender.unwrap().name.as_deref(), Some("Ana"));
        assert_eq!(message.status.unwrap().value, Some(ChannelMessageStatus::Sent));
        assert_eq!(
            message.message_attributes.unwrap()["k"].string_values,
            Some(vec!["v1".to_owned(), "v2".to_owned()])
        );
        assert_eq!(message.target.unwrap()[0].member_arn.as_deref(), Some("arn:m"));
    }

    #[test]
    fn test_should_tolerate_non_container_nested_values() {
        let body = r#"{"ChannelArn": "arn:c", "ChannelMessage": "oops"}"#;
        let out = GetChannelMessage::parse_response(&response(200, &[], body)).unwrap();
        assert_eq!(out.channel_arn.as_deref(), Some("arn:c"));
        assert!(out.channel_message.is_none());

        let body = r#"{"ChannelMessages": 7, "NextToken": "n"}"#;
        let out = ListChannelMessages::parse_response(&response(200, &[], body)).unwrap();
        assert!(out.channel_messages.is_none());
        assert_eq!(out.next_token.as_deref(), Some("n"));
    }

    #[test]
    fn test_should_reject_unknown_enum_value() {
        let body = r#"{"ChannelMessage": {"Type": "BROADCAST"}}"#;
        let err = GetChannelMessage::parse_response(&response(200, &[], body)).unwrap_err();
        assert!(err.as_service_error().is_none());
    }
}
