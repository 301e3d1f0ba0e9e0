// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use parley_core_client::app::services::UnreadService;
use parley_core_client::domain::messaging::services::MessageStoreError;
use parley_core_client::domain::unread::models::UnreadCounts;
use parley_core_client::domain::unread::repos::UnreadCountsRepository;
use parley_core_client::infra::unread::InMemoryUnreadCountsRepository;
use parley_core_client::test::{mock_data, MockAppDependencies};
use parley_core_client::ClientEvent;

#[tokio::test]
async fn test_clear_applies_after_acknowledgement_settles() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let repo = Arc::new(InMemoryUnreadCountsRepository::default());
    repo.increment(&mock_data::peer_id());

    // A message that arrives while the acknowledgement is in flight is
    // considered read as well.
    let repo_during_ack = repo.clone();
    deps.message_store_service
        .expect_mark_read()
        .once()
        .with(predicate::eq(mock_data::peer_id()))
        .return_once(move |_| {
            Box::pin(async move {
                repo_during_ack.increment(&mock_data::peer_id());
                Ok(())
            })
        });

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::UnreadCountsChanged))
        .return_once(|_| ());

    let mut deps = deps.into_deps();
    deps.unread_counts_repo = repo.clone();

    let service = UnreadService::from(&deps);
    service.clear(&mock_data::peer_id()).await;

    assert_eq!(repo.get(&mock_data::peer_id()), 0);
    assert_eq!(repo.total(), 0);
    Ok(())
}

#[tokio::test]
async fn test_clear_applies_locally_even_when_acknowledgement_fails() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let repo = Arc::new(InMemoryUnreadCountsRepository::default());
    repo.increment(&mock_data::peer_id());

    deps.message_store_service
        .expect_mark_read()
        .once()
        .return_once(|_| {
            Box::pin(async {
                Err(MessageStoreError::Request {
                    msg: "boom".to_string(),
                })
            })
        });

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::UnreadCountsChanged))
        .return_once(|_| ());

    let mut deps = deps.into_deps();
    deps.unread_counts_repo = repo.clone();

    let service = UnreadService::from(&deps);
    service.clear(&mock_data::peer_id()).await;

    assert_eq!(repo.get(&mock_data::peer_id()), 0);
    Ok(())
}

#[tokio::test]
async fn test_clear_without_unread_messages_stays_silent() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.message_store_service
        .expect_mark_read()
        .once()
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.unread_counts_repo
        .expect_clear()
        .once()
        .return_once(|_| 0);

    let service = UnreadService::from(&deps.into_deps());
    service.clear(&mock_data::peer_id()).await;
    Ok(())
}

#[tokio::test]
async fn test_refresh_replaces_counts_wholesale() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let repo = Arc::new(InMemoryUnreadCountsRepository::default());
    repo.increment(&mock_data::peer_id());

    deps.message_store_service
        .expect_load_unread_counts()
        .once()
        .return_once(|| {
            Box::pin(async {
                Ok(UnreadCounts::new(HashMap::from([(
                    mock_data::second_peer_id(),
                    3,
                )])))
            })
        });

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::UnreadCountsChanged))
        .return_once(|_| ());

    let mut deps = deps.into_deps();
    deps.unread_counts_repo = repo.clone();

    let service = UnreadService::from(&deps);
    service.refresh_from_server().await;

    assert_eq!(repo.get(&mock_data::peer_id()), 0);
    assert_eq!(repo.get(&mock_data::second_peer_id()), 3);
    assert_eq!(repo.total(), 3);
    Ok(())
}
