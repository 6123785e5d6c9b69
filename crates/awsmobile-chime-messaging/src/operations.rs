//! Chime SDK Messaging operations.

use std::fmt;

use crate::error::ChimeMessagingError;
use crate::input::{
    DeleteChannelMessageInput, GetChannelMessageInput, ListChannelMessagesInput,
    SendChannelMessageInput,
};
use crate::output::{
    DeleteChannelMessageOutput, GetChannelMessageOutput, ListChannelMessagesOutput,
    SendChannelMessageOutput,
};

/// All supported Chime SDK Messaging operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChimeMessagingOperation {
    /// Send a message to a channel.
    SendChannelMessage,
    /// Fetch a single message.
    GetChannelMessage,
    /// List messages in a channel.
    ListChannelMessages,
    /// Delete a message.
    DeleteChannelMessage,
}

impl ChimeMessagingOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::SendChannelMessage,
        Self::GetChannelMessage,
        Self::ListChannelMessages,
        Self::DeleteChannelMessage,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SendChannelMessage => "SendChannelMessage",
            Self::GetChannelMessage => "GetChannelMessage",
            Self::ListChannelMessages => "ListChannelMessages",
            Self::DeleteChannelMessage => "DeleteChannelMessage",
        }
    }

    /// Parse an operation name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SendChannelMessage" => Some(Self::SendChannelMessage),
            "GetChannelMessage" => Some(Self::GetChannelMessage),
            "ListChannelMessages" => Some(Self::ListChannelMessages),
            "DeleteChannelMessage" => Some(Self::DeleteChannelMessage),
            _ => None,
        }
    }
}

impl fmt::Display for ChimeMessagingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

awsmobile_core::operation! {
    /// `POST /channels/{channelArn}/messages`
    SendChannelMessage {
        service: &crate::METADATA,
        input: SendChannelMessageInput,
        output: SendChannelMessageOutput,
        error: ChimeMessagingError,
        parse: awsmobile_json::parse_response,
    }
}

awsmobile_core::operation! {
    /// `GET /channels/{channelArn}/messages/{messageId}`
    GetChannelMessage {
        service: &crate::METADATA,
        input: GetChannelMessageInput,
        output: GetChannelMessageOutput,
        error: ChimeMessagingError,
        parse: awsmobile_json::parse_response,
    }
}

awsmobile_core::operation! {
    /// `GET /channels/{channelArn}/messages`
    ListChannelMessages {
        service: &crate::METADATA,
        input: ListChannelMessagesInput,
        output: ListChannelMessagesOutput,
        error: ChimeMessagingError,
        parse: awsmobile_json::parse_response,
    }
}

awsmobile_core::operation! {
    /// `DELETE /channels/{channelArn}/messages/{messageId}`
    DeleteChannelMessage {
        service: &crate::METADATA,
        input: DeleteChannelMessageInput,
        output: DeleteChannelMessageOutput,
        error: ChimeMessagingError,
        parse: awsmobile_json::parse_response,
    }
}
