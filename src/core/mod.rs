//! Registry core: storage, configuration and construction.
//!
//! The only public API from this module is [`Registry`] (plus [`Config`],
//! [`RegistryBuilder`] and [`create_registry`]).
//!
//! Internal modules:
//! - [`registry`]: subscription storage, hierarchical emit, unsubscribe fan-out;
//! - [`builder`]: fluent construction with non-default policies;
//! - [`config`]: the policy knobs a registry is built with.

mod builder;
mod config;
mod registry;

pub use builder::RegistryBuilder;
pub use config::Config;
pub use registry::{create_registry, Registry};
