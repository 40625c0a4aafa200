//! In-memory [`Transport`] serving canned API bodies and recording every call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use super::*;

pub const UPLOADS_PLAYLIST_ID: &str = "UUX6OQ3DkcsbYNE6H8uQQuVA";

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub resource: Resource,
    pub query: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Default)]
struct Inner {
    replies: HashMap<Resource, Reply>,
    calls: Vec<Call>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Mutex<Inner>>,
}

impl FakeTransport {
    pub fn with(self, resource: Resource, body: Value) -> Self {
        self.reply(resource, Reply::Body(body.to_string()))
    }

    pub fn with_raw(self, resource: Resource, body: &str) -> Self {
        self.reply(resource, Reply::Body(body.to_string()))
    }

    pub fn failing(self, resource: Resource, status: u16, message: &str) -> Self {
        self.reply(resource, Reply::Status(status, message.to_string()))
    }

    fn reply(self, resource: Resource, reply: Reply) -> Self {
        self.inner.lock().unwrap().replies.insert(resource, reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn calls_to(&self, resource: Resource) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.resource == resource)
            .count()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, resource: Resource, query: &[(&str, &str)]) -> Result<String> {
        let reply = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call {
                resource,
                query: query
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            });
            inner.replies.get(&resource).cloned()
        };

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status, message)) => ApiSnafu {
                resource,
                status,
                message,
            }
            .fail(),
            None => ApiSnafu {
                resource,
                status: 404u16,
                message: "no canned response",
            }
            .fail(),
        }
    }
}

pub fn channel_json(title: &str) -> Value {
    json!({
        "kind": "youtube#channelListResponse",
        "items": [{
            "id": "UCX6OQ3DkcsbYNE6H8uQQuVA",
            "snippet": {
                "title": title,
                "thumbnails": {
                    "default": { "url": "https://yt3.ggpht.com/default.jpg" },
                    "high": { "url": "https://yt3.ggpht.com/high.jpg" }
                }
            },
            "contentDetails": { "relatedPlaylists": { "likes": "", "uploads": UPLOADS_PLAYLIST_ID } },
            "statistics": {
                "viewCount": "48000000000",
                "subscriberCount": "250000000",
                "hiddenSubscriberCount": false,
                "videoCount": "800"
            }
        }]
    })
}

pub fn playlist_json(video_ids: &[&str]) -> Value {
    let items: Vec<Value> = video_ids
        .iter()
        .map(|id| json!({ "snippet": { "resourceId": { "kind": "youtube#video", "videoId": id } } }))
        .collect();

    json!({ "kind": "youtube#playlistItemListResponse", "items": items })
}

/// `(id, title, views, likes, comments)` per video, all published on 2024-05-01.
pub fn videos_json(videos: &[(&str, &str, u64, u64, u64)]) -> Value {
    let items: Vec<Value> = videos
        .iter()
        .map(|(id, title, views, likes, comments)| {
            json!({
                "id": id,
                "snippet": {
                    "title": title,
                    "publishedAt": "2024-05-01T17:00:00Z",
                    "thumbnails": { "default": { "url": format!("https://i.ytimg.com/vi/{id}/default.jpg") } }
                },
                "statistics": {
                    "viewCount": views.to_string(),
                    "likeCount": likes.to_string(),
                    "commentCount": comments.to_string()
                }
            })
        })
        .collect();

    json!({ "kind": "youtube#videoListResponse", "items": items })
}
