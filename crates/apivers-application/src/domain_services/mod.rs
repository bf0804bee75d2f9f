//! Domain services
//!
//! The building blocks a service definition is composed of.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`VersionStore`] | Version key → description reference |
//! | [`VersionResolver`] | Layered version selection |
//! | [`ApiLoader`] | Description loading and legacy translation |
//! | [`ClientFactory`] | Memoized client type construction |
//! | [`ModificationLog`] | Recorded cross-cutting modifications |

pub mod factory;
pub mod loader;
pub mod modifications;
pub mod resolver;
pub mod translation;
pub mod version_store;

pub use factory::ClientFactory;
pub use loader::{ApiLoader, DocumentFormat};
pub use modifications::ModificationLog;
pub use resolver::{ResolvedVersion, VersionResolver, VersionSource, select_not_after};
pub use translation::{TranslationOptions, strip_documentation, translate_legacy};
pub use version_store::VersionStore;
