/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::mock_platform::{click, MockPlatform, PlatformCall};
use push_worker::{
    common::types::{ClickOutcome, NotificationActionKind, PushPayload},
    environment::AppConfig,
    tools::{error::AppError, logger::setup_tracing},
    worker::PushWorker,
};

#[tokio::test]
async fn background_message_then_click_focuses_app_window() -> anyhow::Result<()> {
    let app_config = AppConfig::load()?;
    let _guard = setup_tracing(app_config.logger_cfg.to_owned());

    let worker = PushWorker::new(
        app_config,
        MockPlatform::new().with_windows(&["https://frogio.app/orders"]),
    )?;

    let notification = worker
        .on_background_message(PushPayload::from_json(
            r#"{ "notification": { "title": "Alert", "body": "Check now" }, "data": { "orderId": "42" } }"#,
        )?)
        .await?;

    assert_eq!(notification.title, "Alert");
    assert_eq!(notification.options.body, "Check now");
    assert_eq!(notification.options.tag, "frogio-notification");
    assert_eq!(
        notification
            .options
            .data
            .as_ref()
            .and_then(|data| data.get("orderId"))
            .map(String::as_str),
        Some("42")
    );
    assert_eq!(
        notification
            .options
            .actions
            .iter()
            .map(|action| action.action)
            .collect::<Vec<_>>(),
        vec![NotificationActionKind::Open, NotificationActionKind::Close]
    );

    let (event, displayed) = click(None);
    let outcome = worker.on_notification_click(event).await?;

    assert!(displayed.is_closed());
    assert_eq!(
        outcome,
        ClickOutcome::Focused {
            url: "https://frogio.app/orders".to_string()
        }
    );
    assert!(matches!(
        worker.platform().calls().as_slice(),
        [
            PlatformCall::ShowNotification(_),
            PlatformCall::MatchAll(_),
            PlatformCall::Focus(_)
        ]
    ));

    Ok(())
}

#[tokio::test]
async fn worker_refuses_incomplete_vendor_config() -> anyhow::Result<()> {
    let mut app_config = AppConfig::load()?;
    app_config.firebase_cfg.api_key = String::new();

    let result = PushWorker::new(app_config, MockPlatform::new());

    assert_eq!(
        result.err(),
        Some(AppError::MissingAppConfigValue("apiKey".to_string()))
    );

    Ok(())
}

#[tokio::test]
async fn worker_exposes_initialized_vendor_app() -> anyhow::Result<()> {
    let worker = PushWorker::new(AppConfig::load()?, MockPlatform::new())?;

    assert_eq!(worker.app_state().firebase_app.project_id(), "frogio-201f9");
    assert_eq!(worker.app_state().firebase_app.sender_id(), "729189223627");

    Ok(())
}
