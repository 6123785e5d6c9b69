//! Map `service:Operation` names onto typed operations.

use anyhow::{Context, Result, bail};
use awsmobile_chime_messaging::ChimeMessagingOperation;
use awsmobile_chime_messaging::operations as chime;
use awsmobile_cognito_idp::CognitoIdpOperation;
use awsmobile_cognito_idp::operations as cognito;
use awsmobile_comprehend::ComprehendOperation;
use awsmobile_comprehend::operations as comprehend;
use awsmobile_core::ClientConfig;
use awsmobile_sns::SnsOperation;
use awsmobile_sns::operations as sns;
use awsmobile_translate::TranslateOperation;
use awsmobile_translate::operations as translate;

use crate::render::render;

/// Service keys accepted before the `:`.
pub const SERVICES: &[&str] = &["chime-messaging", "cognito-idp", "comprehend", "sns", "translate"];

/// Marshal `input` for the operation named by `target` and format the request.
pub fn dispatch(target: &str, input: &str, config: &ClientConfig) -> Result<String> {
    let (service, name) = target
        .split_once(':')
        .with_context(|| format!("expected service:Operation, got {target:?}"))?;

    match service {
        "chime-messaging" => {
            let op = ChimeMessagingOperation::from_name(name).with_context(|| unknown(service, name))?;
            match op {
                ChimeMessagingOperation::SendChannelMessage => {
                    render::<chime::SendChannelMessage>(input, config)
                }
                ChimeMessagingOperation::GetChannelMessage => {
                    render::<chime::GetChannelMessage>(input, config)
                }
                ChimeMessagingOperation::ListChannelMessages => {
                    render::<chime::ListChannelMessages>(input, config)
                }
                ChimeMessagingOperation::DeleteChannelMessage => {
                    render::<chime::DeleteChannelMessage>(input, config)
                }
            }
        }
        "cognito-idp" => {
            let op = CognitoIdpOperation::from_name(name).with_context(|| unknown(service, name))?;
            match op {
                CognitoIdpOperation::GetDevice => render::<cognito::GetDevice>(input, config),
                CognitoIdpOperation::ListDevices => render::<cognito::ListDevices>(input, config),
                CognitoIdpOperation::UpdateDeviceStatus => {
                    render::<cognito::UpdateDeviceStatus>(input, config)
                }
            }
        }
        "comprehend" => {
            let op = ComprehendOperation::from_name(name).with_context(|| unknown(service, name))?;
            match op {
                ComprehendOperation::DetectSentiment => {
                    render::<comprehend::DetectSentiment>(input, config)
                }
                ComprehendOperation::DetectDominantLanguage => {
                    render::<comprehend::DetectDominantLanguage>(input, config)
                }
            }
        }
        "sns" => {
            let op = SnsOperation::from_name(name).with_context(|| unknown(service, name))?;
            match op {
                SnsOperation::Publish => render::<sns::Publish>(input, config),
                SnsOperation::CreateTopic => render::<sns::CreateTopic>(input, config),
                SnsOperation::GetTopicAttributes => render::<sns::GetTopicAttributes>(input, config),
                SnsOperation::ListTopics => render::<sns::ListTopics>(input, config),
            }
        }
        "translate" => {
            let op = TranslateOperation::from_name(name).with_context(|| unknown(service, name))?;
            match op {
                TranslateOperation::TranslateText => render::<translate::TranslateText>(input, config),
                TranslateOperation::TranslateDocument => {
                    render::<translate::TranslateDocument>(input, config)
                }
                TranslateOperation::ListLanguages => render::<translate::ListLanguages>(input, config),
            }
        }
        other => bail!("unknown service {other:?}, expected one of {}", SERVICES.join(", ")),
    }
}

fn unknown(service: &str, name: &str) -> String {
    format!("unknown {service} operation {name:?}")
}
