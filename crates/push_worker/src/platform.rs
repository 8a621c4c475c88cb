/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::{
    common::types::{ClickAction, RenderedNotification},
    tools::error::AppError,
};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ClientQuery {
    pub include_uncontrolled: bool,
}

#[async_trait(?Send)]
pub trait NotificationSurface {
    async fn show_notification(&self, notification: &RenderedNotification)
        -> Result<(), AppError>;
}

pub trait ClientWindow {
    fn url(&self) -> String;
}

/// Window clients reachable from the worker. `match_all` only yields window-type clients.
#[async_trait(?Send)]
pub trait WindowClients {
    type Window: ClientWindow;

    async fn match_all(&self, query: ClientQuery) -> Result<Vec<Self::Window>, AppError>;

    async fn focus(&self, window: &Self::Window) -> Result<(), AppError>;

    fn supports_open_window(&self) -> bool;

    async fn open_window(&self, path: &str) -> Result<(), AppError>;
}

pub trait DisplayedNotification {
    fn close(&self);
}

pub struct NotificationClick<N> {
    pub action: ClickAction,
    pub notification: N,
}
