//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, keeping error sites clean.

use thiserror::Error;

/// Errors produced by `airlift-core` primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid flight-time distribution: {0}")]
    Distribution(String),

    #[error("flight-time sampler exhausted after {attempts} rejected draws")]
    SamplerExhausted { attempts: u32 },
}

/// Shorthand result type for `airlift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
