//! `awsJson1_1` request marshallers.

use awsmobile_core::{Marshall, MarshalError, MarshalledRequest};

use crate::METADATA;
use crate::input::{ListLanguagesInput, TranslateDocumentInput, TranslateTextInput};

macro_rules! json_rpc {
    ($($input:ty => $operation:literal),+ $(,)?) => {
        $(
            impl Marshall for $input {
                const OPERATION: &'static str = $operation;

                fn marshall(&self) -> Result<MarshalledRequest, MarshalError> {
                    awsmobile_json::rpc_request(&METADATA, Self::OPERATION, self)
                }
            }
        )+
    };
}

json_rpc! {
    TranslateTextInput => "TranslateText",
    TranslateDocumentInput => "TranslateDocument",
    ListLanguagesInput => "ListLanguages",
}
