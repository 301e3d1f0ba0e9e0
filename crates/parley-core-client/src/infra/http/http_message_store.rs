// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::deps::DynAuthProvider;
use crate::domain::messaging::models::{DeliveryState, Message, MessageId};
use crate::domain::messaging::services::{MessageStoreError, MessageStoreService};
use crate::domain::shared::models::UserId;
use crate::domain::unread::models::UnreadCounts;

/// `MessageStoreService` backed by the Message Store's REST API. All
/// responses come wrapped in a `{ "data": … }` envelope.
pub struct HttpMessageStore {
    client: reqwest::Client,
    base_url: Url,
    auth_provider: DynAuthProvider,
}

impl HttpMessageStore {
    pub fn new(base_url: Url, auth_provider: DynAuthProvider) -> Self {
        HttpMessageStore {
            client: reqwest::Client::new(),
            base_url,
            auth_provider,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, MessageStoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MessageStoreError::Request {
                msg: format!("Invalid base url '{}'", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&impl Serialize>,
    ) -> Result<T, MessageStoreError> {
        let Some(token) = self.auth_provider.auth_token() else {
            return Err(MessageStoreError::Unauthorized);
        };

        let mut request = self
            .client
            .request(method, url)
            .bearer_auth(token.expose_secret());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| MessageStoreError::Request {
                msg: err.to_string(),
            })?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.auth_provider.handle_unauthorized();
            return Err(MessageStoreError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(MessageStoreError::Request {
                msg: format!("Server responded with status {}", response.status()),
            });
        }

        let envelope: ApiResponse<T> =
            response
                .json()
                .await
                .map_err(|err| MessageStoreError::MalformedResponse {
                    msg: err.to_string(),
                })?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl MessageStoreService for HttpMessageStore {
    async fn load_history(&self, with: &UserId) -> Result<Vec<Message>, MessageStoreError> {
        let url = self.endpoint(&["api", "message", "history", with.as_ref()])?;
        let messages: Vec<MessageDto> = self.send(Method::GET, url, None::<&()>).await?;
        Ok(messages.into_iter().map(Message::from).collect())
    }

    async fn save_message(
        &self,
        receiver: &UserId,
        body: &str,
    ) -> Result<Message, MessageStoreError> {
        let Some(sender) = self.auth_provider.current_user_id() else {
            return Err(MessageStoreError::Unauthorized);
        };

        let url = self.endpoint(&["api", "message", "send"])?;
        let message: MessageDto = self
            .send(
                Method::POST,
                url,
                Some(&SendMessageRequest {
                    sender_id: sender,
                    receiver_id: receiver.clone(),
                    message: body.to_string(),
                }),
            )
            .await?;
        Ok(message.into())
    }

    async fn load_unread_counts(&self) -> Result<UnreadCounts, MessageStoreError> {
        let url = self.endpoint(&["api", "message", "unread-counts"])?;
        let counts: UnreadCountsDto = self.send(Method::GET, url, None::<&()>).await?;
        Ok(UnreadCounts {
            per_peer: counts.per_peer,
            total: counts.total,
        })
    }

    async fn mark_read(&self, peer: &UserId) -> Result<(), MessageStoreError> {
        let url = self.endpoint(&["api", "message", "mark-read"])?;
        let _: serde_json::Value = self
            .send(
                Method::POST,
                url,
                Some(&MarkReadRequest {
                    sender_id: peer.clone(),
                }),
            )
            .await?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    data: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageDto {
    id: MessageId,
    sender_id: UserId,
    receiver_id: UserId,
    message: String,
    timestamp: DateTime<Utc>,
}

impl From<MessageDto> for Message {
    fn from(dto: MessageDto) -> Self {
        Message {
            id: dto.id,
            sender: dto.sender_id,
            receiver: dto.receiver_id,
            body: dto.message,
            timestamp: dto.timestamp,
            state: DeliveryState::Confirmed,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest {
    sender_id: UserId,
    receiver_id: UserId,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnreadCountsDto {
    per_peer: HashMap<UserId, u32>,
    total: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkReadRequest {
    sender_id: UserId,
}
