// parley-core-client/parley-socket
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A named event with a JSON payload, the transport's unit of exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    pub event: String,
    pub payload: serde_json::Value,
}

impl Packet {
    pub fn new(
        event: impl Into<String>,
        payload: impl Serialize,
    ) -> Result<Self, serde_json::Error> {
        Ok(Packet {
            event: event.into(),
            payload: serde_json::to_value(payload)?,
        })
    }

    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
