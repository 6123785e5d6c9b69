//! `awsJson1_1` request marshallers.

use awsmobile_core::{Marshall, MarshalError, MarshalledRequest};

use crate::METADATA;
use crate::input::{DetectDominantLanguageInput, DetectSentimentInput};

impl Marshall for DetectSentimentInput {
    const OPERATION: &'static str = "DetectSentiment";

    fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
        awsmobile_json::rpc_request(&METADATA, Self::OPERATION, self)
    }
}

impl Marshall for DetectDominantLanguageInput {
    const OPERATION: &'static str = "DetectDominantLanguage";

    fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
        awsmobile_json::rpc_request(&METADATA, Self::OPERATION, self)
    }
}
