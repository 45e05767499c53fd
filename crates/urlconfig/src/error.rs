// Copyright (c) Contributors to the urlconfig project.
// SPDX-License-Identifier: Apache-2.0

use miette::Diagnostic;
use thiserror::Error;

/// Any error that a factory can fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    #[error("Malformed url {url:?}")]
    #[diagnostic(code(urlconfig::malformed_url))]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}: already registered")]
    #[diagnostic(
        code(urlconfig::scheme_already_registered),
        help("each scheme can only be registered once per registry")
    )]
    SchemeAlreadyRegistered(String),

    #[error("unknown scheme: {0}")]
    #[diagnostic(
        code(urlconfig::unknown_scheme),
        help("register a factory for this scheme before configuring from it")
    )]
    UnknownScheme(String),

    /// The error returned by a factory, unchanged.
    #[error(transparent)]
    #[diagnostic(code(urlconfig::factory))]
    Factory(BoxError),
}

impl Error {
    /// The error produced by a factory, if this is one.
    pub fn factory_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Factory(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// Take back the error produced by a factory, or this error if it
    /// did not come from one.
    pub fn into_factory_error(self) -> std::result::Result<BoxError, Self> {
        match self {
            Self::Factory(err) => Ok(err),
            err => Err(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
