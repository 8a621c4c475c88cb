/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

//! Browser binding: plugs the worker into `ServiceWorkerGlobalScope` and the
//! vendor messaging SDK loaded by `web/firebase-messaging-sw.js`.

use crate::{
    common::types::{ClickAction, PushPayload, RenderedNotification},
    environment::AppConfig,
    platform::{
        ClientQuery, ClientWindow, DisplayedNotification, NotificationClick, NotificationSurface,
        WindowClients,
    },
    tools::{error::AppError, logger::setup_tracing},
    worker::PushWorker,
};
use async_trait::async_trait;
use js_sys::{Array, Promise, Reflect};
use serde::Serialize;
use std::rc::Rc;
use tracing::*;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    ClientQueryOptions, ClientType, Notification, NotificationEvent, NotificationOptions,
    ServiceWorkerGlobalScope, WindowClient,
};

#[wasm_bindgen]
extern "C" {
    type Messaging;

    #[wasm_bindgen(js_namespace = firebase, js_name = initializeApp, catch)]
    fn initialize_app(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = firebase, js_name = messaging, catch)]
    fn messaging() -> Result<Messaging, JsValue>;

    #[wasm_bindgen(method, js_name = onBackgroundMessage)]
    fn on_background_message(this: &Messaging, handler: &Closure<dyn FnMut(JsValue) -> Promise>);
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&format!("[{}] {}", err.code(), err))
    }
}

fn describe_js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| err.to_string())
}

async fn settle(promise: Result<Promise, JsValue>) -> Result<JsValue, String> {
    let promise = promise.map_err(describe_js_error)?;
    JsFuture::from(promise).await.map_err(describe_js_error)
}

pub struct BrowserPlatform {
    scope: ServiceWorkerGlobalScope,
}

impl BrowserPlatform {
    pub fn new() -> Self {
        BrowserPlatform {
            scope: js_sys::global().unchecked_into::<ServiceWorkerGlobalScope>(),
        }
    }

    pub fn scope(&self) -> &ServiceWorkerGlobalScope {
        &self.scope
    }
}

impl Default for BrowserPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl NotificationSurface for BrowserPlatform {
    async fn show_notification(
        &self,
        notification: &RenderedNotification,
    ) -> Result<(), AppError> {
        let options = to_js_value(&notification.options)
            .map_err(AppError::NotificationDisplayFailed)?
            .unchecked_into::<NotificationOptions>();

        settle(
            self.scope
                .registration()
                .show_notification_with_options(&notification.title, &options),
        )
        .await
        .map(|_| ())
        .map_err(AppError::NotificationDisplayFailed)
    }
}

impl ClientWindow for WindowClient {
    fn url(&self) -> String {
        let client: &web_sys::Client = self;
        client.url()
    }
}

#[async_trait(?Send)]
impl WindowClients for BrowserPlatform {
    type Window = WindowClient;

    async fn match_all(&self, query: ClientQuery) -> Result<Vec<WindowClient>, AppError> {
        let options = ClientQueryOptions::new();
        options.set_include_uncontrolled(query.include_uncontrolled);
        options.set_type(ClientType::Window);

        let clients = settle(Ok(self.scope.clients().match_all_with_options(&options)))
            .await
            .map_err(AppError::ClientLookupFailed)?;

        Ok(Array::from(&clients)
            .iter()
            .filter_map(|client| client.dyn_into::<WindowClient>().ok())
            .collect())
    }

    async fn focus(&self, window: &WindowClient) -> Result<(), AppError> {
        settle(window.focus())
            .await
            .map(|_| ())
            .map_err(AppError::WindowFocusFailed)
    }

    fn supports_open_window(&self) -> bool {
        Reflect::get(
            self.scope.clients().as_ref(),
            &JsValue::from_str("openWindow"),
        )
        .map(|open_window| open_window.is_function())
        .unwrap_or(false)
    }

    async fn open_window(&self, path: &str) -> Result<(), AppError> {
        settle(Ok(self.scope.clients().open_window(path)))
            .await
            .map(|_| ())
            .map_err(AppError::WindowOpenFailed)
    }
}

impl DisplayedNotification for Notification {
    fn close(&self) {
        Notification::close(self)
    }
}

fn decode_payload(payload: JsValue) -> PushPayload {
    let payload = serde_wasm_bindgen::from_value::<serde_json::Value>(payload).unwrap_or_else(|err| {
        warn!(
            tag = "[BACKGROUND_MESSAGE]",
            error = %err,
            "Unreadable Payload, Rendering Defaults"
        );
        serde_json::Value::Null
    });
    PushPayload::decode_or_default(payload)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let app_config = AppConfig::load()?;

    setup_tracing(app_config.logger_cfg.to_owned());

    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic Occured : {:?}", panic_info);
    }));

    let worker = Rc::new(PushWorker::new(app_config, BrowserPlatform::new())?);

    let options = to_js_value(worker.app_state().firebase_app.options())
        .map_err(|err| JsValue::from(AppError::InvalidConfig(err)))?;
    initialize_app(&options)?;
    let messaging = messaging()?;

    let background_worker = Rc::clone(&worker);
    let on_background_message = Closure::wrap(Box::new(move |payload: JsValue| {
        let worker = Rc::clone(&background_worker);
        future_to_promise(async move {
            match worker.on_background_message(decode_payload(payload)).await {
                Ok(_) => Ok(JsValue::UNDEFINED),
                Err(err) => {
                    error!(tag = "[BACKGROUND_MESSAGE]", error = %err, "Failed To Show Notification");
                    Err(err.into())
                }
            }
        })
    }) as Box<dyn FnMut(JsValue) -> Promise>);
    messaging.on_background_message(&on_background_message);
    on_background_message.forget();

    let click_worker = Rc::clone(&worker);
    let on_notification_click = Closure::wrap(Box::new(move |event: NotificationEvent| {
        let action = event.action();
        let click = NotificationClick {
            action: ClickAction::from_event_action(Some(action.as_str())),
            notification: event.notification(),
        };
        let worker = Rc::clone(&click_worker);
        let promise = future_to_promise(async move {
            match worker.on_notification_click(click).await {
                Ok(outcome) => {
                    debug!(tag = "[NOTIFICATION_CLICK]", ?outcome, "Notification Click Handled");
                    Ok(JsValue::UNDEFINED)
                }
                Err(err) => {
                    error!(tag = "[NOTIFICATION_CLICK]", error = %err, "Failed To Route Notification Click");
                    Err(err.into())
                }
            }
        });
        if let Err(err) = event.wait_until(&promise) {
            error!(
                tag = "[NOTIFICATION_CLICK]",
                error = %describe_js_error(err),
                "Failed To Extend Notification Click Event"
            );
        }
    }) as Box<dyn FnMut(NotificationEvent)>);
    worker.platform().scope().add_event_listener_with_callback(
        "notificationclick",
        on_notification_click.as_ref().unchecked_ref(),
    )?;
    on_notification_click.forget();

    info!(
        tag = "[PUSH_WORKER]",
        project_id = %worker.app_state().firebase_app.project_id(),
        sender_id = %worker.app_state().firebase_app.sender_id(),
        "Push Worker Started"
    );

    Ok(())
}
