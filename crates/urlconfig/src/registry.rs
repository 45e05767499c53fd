// Copyright (c) Contributors to the urlconfig project.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, TryFutureExt};
use tokio::sync::RwLock;
use url::Url;

use crate::{BoxError, Context, Error, FromUrl, Result};

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

/// The result of a factory call.
pub type FactoryResult<T> = std::result::Result<T, BoxError>;

/// Configures an instance of `T` from a parsed url.
pub type Factory<T> =
    Arc<dyn Fn(Context, Url) -> BoxFuture<'static, FactoryResult<T>> + Send + Sync>;

/// Wrap an async function or closure as a [`Factory`].
pub fn factory_fn<T, F, Fut, E>(func: F) -> Factory<T>
where
    T: Send + 'static,
    F: Fn(Context, Url) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    E: Into<BoxError> + 'static,
{
    Arc::new(
        move |ctx: Context, url: Url| -> BoxFuture<'static, FactoryResult<T>> {
            func(ctx, url).map_err(|err: E| -> BoxError { err.into() }).boxed()
        },
    )
}

/// Stores the factories that configure values of type `T` from urls,
/// keyed by the url scheme that each one handles.
pub struct Registry<T> {
    factories: RwLock<HashMap<String, Factory<T>>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").finish_non_exhaustive()
    }
}

impl<T> Registry<T> {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for a url scheme.
    ///
    /// # Errors
    /// [`Error::SchemeAlreadyRegistered`] if the scheme already has a
    /// factory, which remains in place.
    pub async fn register(&self, scheme: impl Into<String>, factory: Factory<T>) -> Result<()> {
        // the check and insert share one write lock so that concurrent
        // registrations of the same scheme cannot both succeed
        let mut factories = self.factories.write().await;
        match factories.entry(scheme.into()) {
            Entry::Occupied(entry) => Err(Error::SchemeAlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::debug!(scheme = %entry.key(), "registered url factory");
                entry.insert(factory);
                Ok(())
            }
        }
    }

    /// Register an async function or closure as the factory for a url scheme.
    ///
    /// See [`Registry::register`].
    pub async fn register_fn<F, Fut, E>(&self, scheme: impl Into<String>, func: F) -> Result<()>
    where
        T: Send + 'static,
        F: Fn(Context, Url) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        self.register(scheme, factory_fn(func)).await
    }

    /// Register the [`FromUrl`] implementation of `U` as the factory
    /// for a url scheme.
    ///
    /// See [`Registry::register`].
    pub async fn register_from_url<U>(&self, scheme: impl Into<String>) -> Result<()>
    where
        T: Send + 'static,
        U: FromUrl + Into<T> + Send + 'static,
    {
        self.register_fn(scheme, |ctx: Context, url: Url| async move {
            U::from_url(&ctx, &url)
                .await
                .map(|value: U| -> T { value.into() })
        })
        .await
    }

    /// Configure an instance of `T` from the given url.
    ///
    /// The scheme of the url selects the factory, which is given
    /// the context and the whole parsed url.
    ///
    /// # Errors
    /// - [`Error::MalformedUrl`] if the url cannot be parsed
    /// - [`Error::UnknownScheme`] if no factory handles the url's scheme
    /// - [`Error::Factory`] holding whatever error the factory returned
    pub async fn configure(&self, ctx: &Context, url: impl AsRef<str>) -> Result<T> {
        let url = url.as_ref();
        let parsed = Url::parse(url).map_err(|source| Error::MalformedUrl {
            url: url.to_string(),
            source,
        })?;
        self.configure_url(ctx, parsed).await
    }

    /// Configure an instance of `T` from an already parsed url.
    ///
    /// See [`Registry::configure`].
    pub async fn configure_url(&self, ctx: &Context, url: Url) -> Result<T> {
        // the read lock is held until the factory completes
        let factories = self.factories.read().await;
        let Some(factory) = factories.get(url.scheme()) else {
            return Err(Error::UnknownScheme(url.scheme().to_string()));
        };
        // the full url can carry credentials in its userinfo
        tracing::debug!(scheme = %url.scheme(), host = ?url.host_str(), "configuring from url");
        factory(ctx.clone(), url).await.map_err(Error::Factory)
    }
}
