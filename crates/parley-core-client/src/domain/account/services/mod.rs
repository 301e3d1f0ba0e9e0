// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_provider::AuthProvider;
#[cfg(feature = "test")]
pub use auth_provider::MockAuthProvider;

mod auth_provider;
