/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::{
    common::{types::ClickOutcome, utils::url_contains_any},
    environment::{AppState, ClickConfig},
    platform::{ClientQuery, ClientWindow, DisplayedNotification, NotificationClick, WindowClients},
    tools::error::AppError,
};
use tracing::*;

/// First window, in enumeration order, whose URL carries one of the app markers.
pub fn find_app_window<'a, W>(click_cfg: &ClickConfig, windows: &'a [W]) -> Option<&'a W>
where
    W: ClientWindow,
{
    windows
        .iter()
        .find(|window| url_contains_any(&window.url(), &click_cfg.window_url_markers))
}

pub async fn handle_notification_click<C, N>(
    app_state: &AppState,
    clients: &C,
    click: NotificationClick<N>,
) -> Result<ClickOutcome, AppError>
where
    C: WindowClients + ?Sized,
    N: DisplayedNotification,
{
    info!(
        tag = "[NOTIFICATION_CLICK]",
        action = %click.action,
        "Notification Click Received"
    );

    click.notification.close();

    if click.action.is_close() {
        return Ok(ClickOutcome::Closed);
    }

    let click_cfg = &app_state.click_cfg;
    let windows = clients
        .match_all(ClientQuery {
            include_uncontrolled: click_cfg.include_uncontrolled,
        })
        .await?;

    if let Some(window) = find_app_window(click_cfg, windows.as_slice()) {
        let url = window.url();
        debug!(tag = "[NOTIFICATION_CLICK]", %url, "Focusing Open App Window");
        clients.focus(window).await?;
        return Ok(ClickOutcome::Focused { url });
    }

    if clients.supports_open_window() {
        debug!(
            tag = "[NOTIFICATION_CLICK]",
            path = %click_cfg.root_path,
            windows = windows.len(),
            "No App Window Found, Opening New Window"
        );
        clients.open_window(&click_cfg.root_path).await?;
        return Ok(ClickOutcome::Opened {
            path: click_cfg.root_path.to_owned(),
        });
    }

    warn!(
        tag = "[NOTIFICATION_CLICK]",
        windows = windows.len(),
        "No App Window Found And Opening Windows Is Unsupported"
    );

    Ok(ClickOutcome::Ignored)
}
