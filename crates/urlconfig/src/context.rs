// Copyright (c) Contributors to the urlconfig project.
// SPDX-License-Identifier: Apache-2.0

use tokio_util::sync::CancellationToken;

/// The execution context handed to factories.
///
/// A registry never inspects or cancels a context, it only passes
/// it through, so whether and how cancellation is honored is up to
/// each factory.
#[derive(Clone, Debug, Default)]
pub struct Context {
    token: CancellationToken,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that is cancelled along with the given token.
    pub fn from_token(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Create a new context that is cancelled when this one is, but
    /// can also be cancelled on its own.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until this context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl From<CancellationToken> for Context {
    fn from(token: CancellationToken) -> Self {
        Self::from_token(token)
    }
}
