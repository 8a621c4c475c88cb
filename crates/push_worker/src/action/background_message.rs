/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::{
    common::{
        types::{
            NotificationAction, NotificationActionKind, NotificationOptions, PushPayload,
            RenderedNotification,
        },
        utils::non_empty_or,
    },
    environment::{AppState, NotificationConfig},
    platform::NotificationSurface,
    tools::error::AppError,
};
use tracing::*;

pub fn render_notification(
    notification_cfg: &NotificationConfig,
    payload: PushPayload,
) -> RenderedNotification {
    let content = payload.notification.as_ref();

    RenderedNotification {
        title: non_empty_or(
            content.and_then(|content| content.title.as_deref()),
            &notification_cfg.default_title,
        ),
        options: NotificationOptions {
            body: non_empty_or(
                content.and_then(|content| content.body.as_deref()),
                &notification_cfg.default_body,
            ),
            icon: notification_cfg.icon.to_owned(),
            badge: notification_cfg.badge.to_owned(),
            tag: notification_cfg.tag.to_owned(),
            data: payload.data,
            actions: vec![
                NotificationAction::new(
                    NotificationActionKind::Open,
                    &notification_cfg.open_action_title,
                ),
                NotificationAction::new(
                    NotificationActionKind::Close,
                    &notification_cfg.close_action_title,
                ),
            ],
        },
    }
}

pub async fn handle_background_message<S>(
    app_state: &AppState,
    surface: &S,
    payload: PushPayload,
) -> Result<RenderedNotification, AppError>
where
    S: NotificationSurface + ?Sized,
{
    info!(
        tag = "[BACKGROUND_MESSAGE]",
        message_id = ?payload.message_id,
        from = ?payload.from,
        has_notification = payload.notification.is_some(),
        data_keys = payload.data.as_ref().map(|data| data.len()).unwrap_or(0),
        "Received Background Message"
    );

    let notification = render_notification(&app_state.notification_cfg, payload);

    surface.show_notification(&notification).await?;

    debug!(
        tag = "[BACKGROUND_MESSAGE]",
        title = %notification.title,
        notification_tag = %notification.options.tag,
        "Notification Shown"
    );

    Ok(notification)
}
