//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ClientType`] | Memoized client type bound to one API description |
//! | [`ClientInstance`] | A constructed client with its effective configuration |

/// Constructed clients
pub mod client_instance;
/// Client types
pub mod client_type;

pub use client_instance::ClientInstance;
pub use client_type::ClientType;
