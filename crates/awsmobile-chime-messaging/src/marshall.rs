//! `restJson1` request marshallers.

use std::borrow::Cow;

use awsmobile_core::{Marshall, MarshalError, MarshalledRequest, TimestampFormat, UriTemplate};
use http::Method;

use crate::METADATA;
use crate::input::{
    DeleteChannelMessageInput, GetChannelMessageInput, ListChannelMessagesInput,
    SendChannelMessageInput,
};

const CHIME_BEARER: &str = "x-amz-chime-bearer";

const CHANNEL_MESSAGES: UriTemplate = UriTemplate::new("/channels/{channelArn}/messages");
const CHANNEL_MESSAGE: UriTemplate =
    UriTemplate::new("/channels/{channelArn}/messages/{messageId}");

impl Marshall for SendChannelMessageInput {
    const OPERATION: &'static str = "SendChannelMessage";

    fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
        let input = if self.client_request_token.is_some() {
            Cow::Borrowed(self)
        } else {
            let mut owned = self.clone();
            owned.client_request_token = Some(uuid::Uuid::new_v4().to_string());
            Cow::Owned(owned)
        };

        let path = CHANNEL_MESSAGES.resolve(&[("channelArn", input.channel_arn.as_deref())]);
        let request = MarshalledRequest::new(Self::OPERATION, Method::POST, path)
            .with_header(CHIME_BEARER, input.chime_bearer.as_deref())?;
        awsmobile_json::with_json_body(request, &METADATA, &*input)
    }
}

impl Marshall for GetChannelMessageInput {
    const OPERATION: &'static str = "GetChannelMessage";

    fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
        let path = CHANNEL_MESSAGE.resolve(&[
            ("channelArn", self.channel_arn.as_deref()),
            ("messageId", self.message_id.as_deref()),
        ]);
        Ok(MarshalledRequest::new(Self::OPERATION, Method::GET, path)
            .with_header(CHIME_BEARER, self.chime_bearer.as_deref())?
            .with_parameter("sub-channel-id", self.sub_channel_id.as_deref()))
    }
}

impl Marshall for ListChannelMessagesInput {
    const OPERATION: &'static str = "ListChannelMessages";

    fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
        let path = CHANNEL_MESSAGES.resolve(&[("channelArn", self.channel_arn.as_deref())]);
        let iso = |t: &chrono::DateTime<chrono::Utc>| TimestampFormat::Iso8601.format(t);

        Ok(MarshalledRequest::new(Self::OPERATION, Method::GET, path)
            .with_header(CHIME_BEARER, self.chime_bearer.as_deref())?
            .with_parameter("sort-order", self.sort_order.map(|s| s.as_str()))
            .with_parameter("not-before", self.not_before.as_ref().map(iso))
            .with_parameter("not-after", self.not_after.as_ref().map(iso))
            .with_parameter("max-results", self.max_results.map(|n| n.to_string()))
            .with_parameter("next-token", self.next_token.as_deref())
            .with_parameter("sub-channel-id", self.sub_channel_id.as_deref()))
    }
}

impl Marshall for DeleteChannelMessageInput {
    const OPERATION: &'static str = "DeleteChannelMessage";

    fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
        let path = CHANNEL_MESSAGE.resolve(&[
            ("channelArn", self.channel_arn.as_deref()),
            ("messageId", self.message_id.as_deref()),
        ]);
        Ok(MarshalledRequest::new(Self::OPERATION, Method::DELETE, path)
            .with_header(CHIME_BEARER, self.chime_bearer.as_deref())?
            .with_parameter("sub-channel-id", self.sub_channel_id.as_deref()))
    }
}
