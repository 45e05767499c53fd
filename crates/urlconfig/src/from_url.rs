// Copyright (c) Contributors to the urlconfig project.
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use url::Url;

use crate::{Context, FactoryResult};

#[cfg(test)]
#[path = "./from_url_test.rs"]
mod from_url_test;

/// A value that knows how to build itself from a url, so that it can
/// be registered with [`crate::Registry::register_from_url`] instead
/// of a hand written factory.
///
/// Implementations receive the same context and url that a factory
/// would and report failures the same way.
#[async_trait]
pub trait FromUrl: Sized {
    async fn from_url(ctx: &Context, url: &Url) -> FactoryResult<Self>;
}

/// A value built in two steps: the url is first decoded into
/// [`FromConfig::Config`], then the value is built from that.
///
/// Every `FromConfig` type is also [`FromUrl`].
#[async_trait]
pub trait FromConfig: Sized {
    /// The settings decoded from the url.
    type Config: FromUrl + Send;

    async fn from_config(ctx: &Context, config: Self::Config) -> FactoryResult<Self>;
}

#[async_trait]
impl<T> FromUrl for T
where
    T: FromConfig + Send + Sync,
{
    async fn from_url(ctx: &Context, url: &Url) -> FactoryResult<Self> {
        let settings = T::Config::from_url(ctx, url).await?;
        tracing::trace!(scheme = %url.scheme(), "decoded url settings");
        T::from_config(ctx, settings).await
    }
}
