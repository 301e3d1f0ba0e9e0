// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone)]
pub struct ConnectionProperties {
    /// The id of our connected user.
    pub connected_user_id: UserId,
    /// The time at which the connection was established.
    pub connection_timestamp: DateTime<Utc>,
}
