//! tsxgen: generate React/TypeScript components from a short brief.
//!
//! The pipeline composes a prompt from a [`ComponentSpec`], requests one
//! completion from a chat model, and writes the reply verbatim to
//! `<Name>.tsx`.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{compose, connect, load_settings};
pub use app::commands::generate::{GenerateOutcome, execute as generate};
pub use domain::{
    AppConfig, AppError, ComponentName, ComponentSpec, ComposedPrompt, ConfigOverrides,
    TemplateKind,
};
