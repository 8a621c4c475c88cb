/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[derive(Debug, Deserialize, Clone)]
pub struct LoggerConfig {
    pub level: String,
    pub log_to_file: bool,
}

#[cfg(not(target_arch = "wasm32"))]
pub fn setup_tracing(logger_cfg: LoggerConfig) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

    let (non_blocking, guard) = if logger_cfg.log_to_file {
        tracing_appender::non_blocking(tracing_appender::rolling::hourly(
            "./logs",
            "push_worker.log",
        ))
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(logger_cfg.level))
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(
            "push_worker".to_string(),
            non_blocking,
        ));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Global tracing subscriber was already set, keeping the existing one");
    }

    guard
}

/// Routes formatted events to the browser console, without timestamps.
#[cfg(target_arch = "wasm32")]
pub fn setup_tracing(logger_cfg: LoggerConfig) {
    use tracing_subscriber::fmt;

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(logger_cfg.level))
        .with(
            fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_writer(console::ConsoleMakeWriter),
        );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Global tracing subscriber was already set, keeping the existing one");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    #[derive(Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // One event is written per writer, so the line goes out when the writer is dropped.
    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&JsValue::from_str(line));
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::default()
        }
    }
}
