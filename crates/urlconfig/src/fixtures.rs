// Copyright (c) Contributors to the urlconfig project.
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, Mutex};

use url::Url;

use crate::{Context, Registry};

pub fn init_logging() {
    let sub = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter("urlconfig=trace,debug")
        .without_time()
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(sub);
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route the logs of the current thread here until the guard is dropped.
    pub fn set_default(&self) -> tracing::subscriber::DefaultGuard {
        let logs = self.clone();
        let sub = tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::TRACE)
            .without_time()
            .with_ansi(false)
            .with_writer(move || logs.clone())
            .finish();
        tracing::subscriber::set_default(sub)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Returned by the `example` scheme factory for urls with the host `error`.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("end of input")]
pub struct EndOfInput;

/// Echoes the url back, unless its host is `error`.
pub async fn echo_factory(_ctx: Context, url: Url) -> Result<String, EndOfInput> {
    if url.host_str() == Some("error") {
        return Err(EndOfInput);
    }
    Ok(url.to_string())
}

/// A registry with the `example` scheme bound to [`echo_factory`].
pub async fn example_registry() -> Registry<String> {
    init_logging();
    let registry = Registry::new();
    registry
        .register_fn("example", echo_factory)
        .await
        .expect("register the example scheme");
    registry
}
