/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::mock_platform::{app_state, click, MockPlatform, MockWindow, PlatformCall};
use push_worker::{
    action::notification_click::{find_app_window, handle_notification_click},
    common::types::ClickOutcome,
    platform::ClientQuery,
    tools::error::AppError,
};

const ALL_WINDOWS: PlatformCall = PlatformCall::MatchAll(ClientQuery {
    include_uncontrolled: true,
});

#[tokio::test]
async fn close_action_only_dismisses() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new().with_windows(&["https://frogio.app/orders"]);
    let (event, notification) = click(Some("close"));

    let outcome = handle_notification_click(&app_state, &platform, event).await?;

    assert_eq!(outcome, ClickOutcome::Closed);
    assert!(notification.is_closed());
    assert!(platform.calls().is_empty());

    Ok(())
}

#[tokio::test]
async fn open_action_focuses_matching_window() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new().with_windows(&["https://frogio.app/orders"]);
    let (event, notification) = click(Some("open"));

    let outcome = handle_notification_click(&app_state, &platform, event).await?;

    assert_eq!(
        outcome,
        ClickOutcome::Focused {
            url: "https://frogio.app/orders".to_string()
        }
    );
    assert!(notification.is_closed());
    assert_eq!(
        platform.calls(),
        vec![
            ALL_WINDOWS,
            PlatformCall::Focus("https://frogio.app/orders".to_string())
        ]
    );

    Ok(())
}

#[tokio::test]
async fn body_click_focuses_matching_window() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new().with_windows(&[
        "https://accounts.example.com/login",
        "https://frogio.app/orders",
    ]);
    let (event, notification) = click(None);

    let outcome = handle_notification_click(&app_state, &platform, event).await?;

    assert_eq!(
        outcome,
        ClickOutcome::Focused {
            url: "https://frogio.app/orders".to_string()
        }
    );
    assert!(notification.is_closed());
    assert!(!platform
        .calls()
        .iter()
        .any(|call| matches!(call, PlatformCall::OpenWindow(_))));

    Ok(())
}

#[tokio::test]
async fn first_matching_window_wins() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new().with_windows(&[
        "https://example.com/",
        "http://localhost:5000/#/home",
        "https://frogio.app/orders",
    ]);
    let (event, _) = click(Some(""));

    let outcome = handle_notification_click(&app_state, &platform, event).await?;

    assert_eq!(
        outcome,
        ClickOutcome::Focused {
            url: "http://localhost:5000/#/home".to_string()
        }
    );
    assert_eq!(
        platform.calls(),
        vec![
            ALL_WINDOWS,
            PlatformCall::Focus("http://localhost:5000/#/home".to_string())
        ]
    );

    Ok(())
}

#[tokio::test]
async fn opens_root_when_no_window_matches() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new().with_windows(&["https://example.com/"]);
    let (event, notification) = click(Some("open"));

    let outcome = handle_notification_click(&app_state, &platform, event).await?;

    assert_eq!(
        outcome,
        ClickOutcome::Opened {
            path: "/".to_string()
        }
    );
    assert!(notification.is_closed());
    assert_eq!(
        platform.calls(),
        vec![ALL_WINDOWS, PlatformCall::OpenWindow("/".to_string())]
    );

    Ok(())
}

#[tokio::test]
async fn does_nothing_when_opening_is_unsupported() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new().without_open_window();
    let (event, notification) = click(None);

    let outcome = handle_notification_click(&app_state, &platform, event).await?;

    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(notification.is_closed());
    assert_eq!(platform.calls(), vec![ALL_WINDOWS]);

    Ok(())
}

#[tokio::test]
async fn unknown_action_follows_open_path() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new();
    let (event, _) = click(Some("snooze"));

    let outcome = handle_notification_click(&app_state, &platform, event).await?;

    assert_eq!(
        outcome,
        ClickOutcome::Opened {
            path: "/".to_string()
        }
    );

    Ok(())
}

#[tokio::test]
async fn lookup_failure_is_returned_after_dismissal() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new()
        .failing_lookup(AppError::ClientLookupFailed("matchAll rejected".to_string()));
    let (event, notification) = click(None);

    let result = handle_notification_click(&app_state, &platform, event).await;

    assert_eq!(
        result,
        Err(AppError::ClientLookupFailed("matchAll rejected".to_string()))
    );
    assert!(notification.is_closed());
    assert_eq!(platform.calls(), vec![ALL_WINDOWS]);

    Ok(())
}

#[tokio::test]
async fn focus_failure_does_not_fall_back_to_opening() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let platform = MockPlatform::new()
        .with_windows(&["https://frogio.app/"])
        .failing_focus(AppError::WindowFocusFailed("not allowed".to_string()));
    let (event, _) = click(None);

    let result = handle_notification_click(&app_state, &platform, event).await;

    assert_eq!(
        result,
        Err(AppError::WindowFocusFailed("not allowed".to_string()))
    );
    assert_eq!(
        platform.calls(),
        vec![
            ALL_WINDOWS,
            PlatformCall::Focus("https://frogio.app/".to_string())
        ]
    );

    Ok(())
}

#[test]
fn find_app_window_scans_in_order() -> anyhow::Result<()> {
    let app_state = app_state()?;
    let windows = vec![
        MockWindow {
            url: "https://example.com/frog".to_string(),
        },
        MockWindow {
            url: "https://frogio.app/a".to_string(),
        },
        MockWindow {
            url: "https://frogio.app/b".to_string(),
        },
    ];

    assert_eq!(
        find_app_window(&app_state.click_cfg, windows.as_slice()),
        windows.get(1)
    );
    assert_eq!(find_app_window(&app_state.click_cfg, &windows[..1]), None);

    Ok(())
}
