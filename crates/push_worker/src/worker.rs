/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::{
    action::{
        background_message::handle_background_message,
        notification_click::handle_notification_click,
    },
    common::types::{ClickOutcome, PushPayload, RenderedNotification},
    environment::{AppConfig, AppState},
    platform::{DisplayedNotification, NotificationClick, NotificationSurface, WindowClients},
    tools::error::AppError,
};

/// Handle built once per worker lifetime and shared by both event handlers.
pub struct PushWorker<P> {
    app_state: AppState,
    platform: P,
}

impl<P> PushWorker<P>
where
    P: NotificationSurface + WindowClients,
{
    pub fn new(app_config: AppConfig, platform: P) -> Result<Self, AppError> {
        Ok(PushWorker {
            app_state: AppState::new(app_config)?,
            platform,
        })
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub async fn on_background_message(
        &self,
        payload: PushPayload,
    ) -> Result<RenderedNotification, AppError> {
        handle_background_message(&self.app_state, &self.platform, payload).await
    }

    pub async fn on_notification_click<N>(
        &self,
        click: NotificationClick<N>,
    ) -> Result<ClickOutcome, AppError>
    where
        N: DisplayedNotification,
    {
        handle_notification_click(&self.app_state, &self.platform, click).await
    }
}
