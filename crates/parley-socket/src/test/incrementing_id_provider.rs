// parley-core-client/parley-socket
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicI64, Ordering};

use crate::deps::IDProvider;

pub struct IncrementingIDProvider {
    prefix: String,
    last_id: AtomicI64,
}

impl IncrementingIDProvider {
    pub fn new(prefix: &str) -> Self {
        IncrementingIDProvider {
            prefix: prefix.to_string(),
            last_id: AtomicI64::new(0),
        }
    }

    pub fn reset(&self) {
        self.last_id.store(0, Ordering::SeqCst);
    }

    pub fn last_id(&self) -> String {
        let last_id = self.last_id.load(Ordering::SeqCst);
        format!("{}-{}", self.prefix, last_id)
    }
}

impl IDProvider for IncrementingIDProvider {
    fn new_id(&self) -> String {
        let last_id = self.last_id.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, last_id + 1)
    }
}
