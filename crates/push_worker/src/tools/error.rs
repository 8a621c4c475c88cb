/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use strum_macros::IntoStaticStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, IntoStaticStr, PartialEq, Eq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AppError {
    #[error("Missing App Configuration Value : {0}")]
    MissingAppConfigValue(String),
    #[error("Invalid Configuration : {0}")]
    InvalidConfig(String),
    #[error("Notification Display Failed : {0}")]
    NotificationDisplayFailed(String),
    #[error("Client Lookup Failed : {0}")]
    ClientLookupFailed(String),
    #[error("Window Focus Failed : {0}")]
    WindowFocusFailed(String),
    #[error("Window Open Failed : {0}")]
    WindowOpenFailed(String),
    #[error("Payload Decode Failed : {0}")]
    PayloadDecodeFailed(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl From<serde_dhall::Error> for AppError {
    fn from(err: serde_dhall::Error) -> Self {
        AppError::InvalidConfig(err.to_string())
    }
}
