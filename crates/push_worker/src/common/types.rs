/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::tools::error::AppError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use strum_macros::{Display, EnumString};
use tracing::*;

pub type PushData = FxHashMap<String, String>;

#[derive(Deserialize, Serialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct NotificationContent {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
}

/// Message handed over by the vendor runtime for a push received in the background.
#[derive(Deserialize, Serialize, Clone, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PushPayload {
    pub notification: Option<NotificationContent>,
    pub data: Option<PushData>,
    pub from: Option<String>,
    pub collapse_key: Option<String>,
    pub message_id: Option<String>,
}

impl PushPayload {
    pub fn from_json(payload: &str) -> Result<Self, AppError> {
        serde_json::from_str(payload).map_err(|err| AppError::PayloadDecodeFailed(err.to_string()))
    }

    /// Decodes each field on its own, so a malformed field only loses itself.
    /// Non-text `data` values are kept in their JSON text form.
    pub fn decode_or_default(payload: Value) -> Self {
        let Value::Object(mut fields) = payload else {
            warn!(
                tag = "[BACKGROUND_MESSAGE]",
                "Payload Is Not An Object, Rendering Defaults"
            );
            return PushPayload::default();
        };

        PushPayload {
            notification: fields.remove("notification").and_then(decode_notification),
            data: fields.remove("data").and_then(decode_data),
            from: fields.remove("from").and_then(decode_text),
            collapse_key: fields.remove("collapseKey").and_then(decode_text),
            message_id: fields.remove("messageId").and_then(decode_text),
        }
    }
}

fn decode_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        _ => None,
    }
}

fn decode_notification(value: Value) -> Option<NotificationContent> {
    match value {
        Value::Object(mut fields) => Some(NotificationContent {
            title: fields.remove("title").and_then(decode_text),
            body: fields.remove("body").and_then(decode_text),
            image: fields.remove("image").and_then(decode_text),
        }),
        _ => None,
    }
}

fn decode_data(value: Value) -> Option<PushData> {
    match value {
        Value::Object(entries) => Some(
            entries
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(text) => (key, text),
                    other => (key, other.to_string()),
                })
                .collect(),
        ),
        _ => None,
    }
}

#[derive(
    Debug, Clone, Copy, EnumString, Display, Serialize, Deserialize, Eq, Hash, PartialEq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationActionKind {
    Open,
    Close,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct NotificationAction {
    pub action: NotificationActionKind,
    pub title: String,
}

impl NotificationAction {
    pub fn new(action: NotificationActionKind, title: &str) -> Self {
        NotificationAction {
            action,
            title: title.to_string(),
        }
    }
}

/// Options object in the shape `showNotification` accepts.
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PushData>,
    pub actions: Vec<NotificationAction>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct RenderedNotification {
    pub title: String,
    pub options: NotificationOptions,
}

/// Action reported by a notification click. An absent or empty action is the
/// notification body itself being clicked.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ClickAction {
    Default,
    Open,
    Close,
    Other(String),
}

impl ClickAction {
    pub fn from_event_action(action: Option<&str>) -> Self {
        match action {
            None | Some("") => ClickAction::Default,
            Some(action) => match NotificationActionKind::from_str(action) {
                Ok(NotificationActionKind::Open) => ClickAction::Open,
                Ok(NotificationActionKind::Close) => ClickAction::Close,
                Err(_) => ClickAction::Other(action.to_string()),
            },
        }
    }

    pub fn is_close(&self) -> bool {
        matches!(self, ClickAction::Close)
    }
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickAction::Default => write!(f, "default"),
            ClickAction::Open => write!(f, "{}", NotificationActionKind::Open),
            ClickAction::Close => write!(f, "{}", NotificationActionKind::Close),
            ClickAction::Other(action) => write!(f, "{action}"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ClickOutcome {
    Closed,
    Focused { url: String },
    Opened { path: String },
    Ignored,
}
