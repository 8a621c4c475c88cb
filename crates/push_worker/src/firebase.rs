/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::tools::error::AppError;
use serde::{Deserialize, Serialize};
use tracing::*;

/// Project identifiers handed to the vendor messaging SDK at worker start.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseApp {
    options: FirebaseConfig,
}

impl FirebaseApp {
    /// Validates the options the messaging SDK refuses to start without.
    pub fn initialize(options: FirebaseConfig) -> Result<Self, AppError> {
        let required = [
            ("projectId", &options.project_id),
            ("apiKey", &options.api_key),
            ("appId", &options.app_id),
            ("messagingSenderId", &options.messaging_sender_id),
        ];

        if let Some((name, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(AppError::MissingAppConfigValue(name.to_string()));
        }

        info!(
            tag = "[FIREBASE_APP]",
            project_id = %options.project_id,
            sender_id = %options.messaging_sender_id,
            "Firebase App Configured"
        );

        Ok(FirebaseApp { options })
    }

    pub fn options(&self) -> &FirebaseConfig {
        &self.options
    }

    pub fn project_id(&self) -> &str {
        &self.options.project_id
    }

    pub fn sender_id(&self) -> &str {
        &self.options.messaging_sender_id
    }
}
