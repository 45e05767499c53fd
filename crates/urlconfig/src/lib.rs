// Copyright (c) Contributors to the urlconfig project.
// SPDX-License-Identifier: Apache-2.0

//! Configure values of any type from urls.
//!
//! A [`Registry`] holds one [`Factory`] per url scheme. Calling
//! [`Registry::configure`] parses a url, looks up the factory for its
//! scheme and hands it the parsed url to build a value from.
//!
//! ```
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! use urlconfig::{Context, Registry};
//!
//! let registry = Registry::<String>::new();
//! registry
//!     .register_fn("example", |_ctx, url: urlconfig::Url| async move {
//!         Ok::<_, std::convert::Infallible>(url.to_string())
//!     })
//!     .await
//!     .unwrap();
//!
//! let value = registry
//!     .configure(&Context::new(), "example://test")
//!     .await
//!     .unwrap();
//! assert_eq!(value, "example://test");
//! # });
//! ```

#![deny(unsafe_op_in_unsafe_fn)]

mod context;
mod error;
#[cfg(test)]
mod fixtures;
mod from_url;
mod registry;

// re-exported to make downstream implementations easier
pub use async_trait::async_trait;
pub use context::Context;
pub use error::{BoxError, Error, Result};
pub use from_url::{FromConfig, FromUrl};
pub use registry::{Factory, FactoryResult, Registry, factory_fn};
pub use url::Url;
