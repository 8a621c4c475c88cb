/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::{
    firebase::{FirebaseApp, FirebaseConfig},
    tools::{error::AppError, logger::LoggerConfig},
};
use serde::Deserialize;

const WORKER_CONFIG: &str = include_str!("../../../dhall-configs/dev/push_worker.dhall");

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub default_title: String,
    pub default_body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
    pub open_action_title: String,
    pub close_action_title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClickConfig {
    pub window_url_markers: Vec<String>,
    pub root_path: String,
    pub include_uncontrolled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub firebase_cfg: FirebaseConfig,
    pub logger_cfg: LoggerConfig,
    pub notification_cfg: NotificationConfig,
    pub click_cfg: ClickConfig,
}

impl AppConfig {
    /// Configuration compiled into the worker binary.
    pub fn load() -> Result<AppConfig, AppError> {
        AppConfig::from_dhall(WORKER_CONFIG)
    }

    pub fn from_dhall(config: &str) -> Result<AppConfig, AppError> {
        Ok(serde_dhall::from_str(config).parse::<AppConfig>()?)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub firebase_app: FirebaseApp,
    pub notification_cfg: NotificationConfig,
    pub click_cfg: ClickConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Result<AppState, AppError> {
        let firebase_app = FirebaseApp::initialize(app_config.firebase_cfg)?;

        if app_config.notification_cfg.tag.is_empty() {
            return Err(AppError::InvalidConfig(
                "notification_cfg.tag must not be empty".to_string(),
            ));
        }

        if app_config
            .click_cfg
            .window_url_markers
            .iter()
            .any(|marker| marker.is_empty())
        {
            return Err(AppError::InvalidConfig(
                "click_cfg.window_url_markers must not contain empty markers".to_string(),
            ));
        }

        Ok(AppState {
            firebase_app,
            notification_cfg: app_config.notification_cfg,
            click_cfg: app_config.click_cfg,
        })
    }
}
