// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::MockAppDependencies;

mod mock_app_dependencies;

pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_account_id as account_id, mock_peer_id as peer_id, mock_reference_date as reference_date,
        mock_second_peer_id as second_peer_id,
    };
}

#[macro_export]
macro_rules! user_id {
    ($id:expr) => {
        $crate::dtos::UserId::from($id)
    };
}
