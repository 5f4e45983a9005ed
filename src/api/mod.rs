//! Todo Resource Bindings
//!
//! Frontend bindings to the REST `/todos` resource.

mod error;
mod todo;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::TodoId;

/// Characters escaped when an id is used as a path segment
const PATH_SEGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Handle on the remote todo resource
#[derive(Clone, Debug)]
pub struct TodoClient {
    http: reqwest::Client,
    base: String,
}

impl TodoClient {
    /// `base` is the absolute URL the `/todos` path hangs off
    pub fn new(base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base)
    }

    fn item_url(&self, id: &TodoId) -> String {
        format!("{}/todos/{}", self.base, utf8_percent_encode(id.as_str(), PATH_SEGMENT_SET))
    }
}
