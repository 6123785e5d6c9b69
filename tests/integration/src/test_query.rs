//! awsQuery wire tests (SNS).

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use awsmobile_core::{ClientConfig, Operation};
    use awsmobile_sns::input::{CreateTopicInput, PublishInput};
    use awsmobile_sns::operations::{CreateTopic, GetTopicAttributes, ListTopics, Publish};
    use awsmobile_sns::output::ListTopicsResult;
    use awsmobile_sns::types::{MessageAttributeValue, Tag, Topic};
    use awsmobile_xml::{from_query_response, to_query_response};

    use crate::{form_params, local_config, response};

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_should_post_publish_form() {
        let input = PublishInput::default()
            .with_phone_number("+15555550100")
            .with_message("Your code is 1234")
            .with_message_attributes(HashMap::from([(
                "AWS.SNS.SMS.SMSType".to_owned(),
                MessageAttributeValue::string("Transactional"),
            )]));
        let req = Publish::build_request(&input, &local_config()).unwrap();

        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(req.uri().to_string(), "http://localhost:4566/");
        assert_eq!(
            req.headers()["content-type"],
            "application/x-www-form-urlencoded; charset=utf-8"
        );
        assert_eq!(
            form_params(&req),
            pairs(&[
                ("Action", "Publish"),
                ("Version", "2010-03-31"),
                ("PhoneNumber", "+15555550100"),
                ("Message", "Your code is 1234"),
                ("MessageAttributes.entry.1.Name", "AWS.SNS.SMS.SMSType"),
                ("MessageAttributes.entry.1.Value.DataType", "String"),
                ("MessageAttributes.entry.1.Value.StringValue", "Transactional"),
            ])
        );
    }

    #[test]
    fn test_should_index_tags_from_one() {
        let input = CreateTopicInput::default()
            .with_name("orders.fifo")
            .with_tags(vec![Tag::new("team", "checkout")]);
        let config = ClientConfig::default().with_region("ap-southeast-2");
        let req = CreateTopic::build_request(&input, &config).unwrap();

        assert_eq!(req.uri().to_string(), "https://sns.ap-southeast-2.amazonaws.com/");
        assert_eq!(
            form_params(&req),
            pairs(&[
                ("Action", "CreateTopic"),
                ("Version", "2010-03-31"),
                ("Name", "orders.fifo"),
                ("Tags.member.1.Key", "team"),
                ("Tags.member.1.Value", "checkout"),
            ])
        );
    }

    #[test]
    fn test_should_decode_topic_listing_from_service_document() {
        let body = r#"<?xml version="1.0"?>
<ListTopicsResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <ListTopicsResult>
    <Topics>
      <member>
        <TopicArn>arn:aws:sns:us-east-1:123456789012:alerts</TopicArn>
      </member>
      <member>
        <TopicArn>arn:aws:sns:us-east-1:123456789012:orders</TopicArn>
        <Unexpected><TopicArn>ignored</TopicArn></Unexpected>
      </member>
    </Topics>
    <NextToken>page-2</NextToken>
  </ListTopicsResult>
  <ResponseMetadata>
    <RequestId>3f1478c7-33a9-11df-9540-99d0768312d3</RequestId>
  </ResponseMetadata>
</ListTopicsResponse>"#;
        let out = ListTopics::parse_response(&response(200, &[], body)).unwrap();

        let arns: Vec<_> = out
            .topics
            .unwrap()
            .into_iter()
            .map(|t| t.topic_arn.unwrap_or_default())
            .collect();
        assert_eq!(
            arns,
            [
                "arn:aws:sns:us-east-1:123456789012:alerts",
                "arn:aws:sns:us-east-1:123456789012:orders",
            ]
        );
        assert_eq!(out.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_should_decode_attribute_map() {
        let body = "<GetTopicAttributesResponse><GetTopicAttributesResult><Attributes>\
            <entry><key>DisplayName</key><value>Alerts</value></entry>\
            <entry><key>Policy</key><value>{&quot;Version&quot;:&quot;2012-10-17&quot;}</value></entry>\
            </Attributes></GetTopicAttributesResult></GetTopicAttributesResponse>";
        let out = GetTopicAttributes::parse_response(&response(200, &[], body)).unwrap();

        let attributes = out.attributes.unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes["DisplayName"], "Alerts");
        assert_eq!(attributes["Policy"], r#"{"Version":"2012-10-17"}"#);
    }

    #[test]
    fn test_should_round_trip_result_through_service_document() {
        let result = ListTopicsResult {
            topics: Some(vec![Topic {
                topic_arn: Some("arn:aws:sns:us-east-1:1:a&b".to_owned()),
            }]),
            next_token: None,
        };
        let xml = to_query_response(
            "ListTopics",
            "http://sns.amazonaws.com/doc/2010-03-31/",
            &result,
            "req-9",
        )
        .unwrap();

        let out = ListTopics::parse_response(&response(200, &[], xml.clone())).unwrap();
        assert_eq!(out, result);

        let decoded = from_query_response::<ListTopicsResult>(&xml).unwrap();
        assert_eq!(decoded.request_id.as_deref(), Some("req-9"));
    }
}
