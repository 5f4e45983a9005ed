//! Todo Calls
//!
//! One async function per operation on the resource.

use log::debug;
use reqwest::Response;

use super::error::{decode_list, expect_no_content, ApiError, NO_CONTENT};
use super::TodoClient;
use crate::models::{Todo, TodoFields, TodoId};

impl TodoClient {
    /// `GET /todos`
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.http.get(self.collection_url()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_list(status, &body)
    }

    /// `POST /todos`
    pub async fn create_todo(&self, title: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(&TodoFields::new_todo(title))
            .send()
            .await?;
        finish_mutation(response).await
    }

    /// `PATCH /todos/{id}`
    pub async fn update_todo(&self, id: &TodoId, fields: &TodoFields<'_>) -> Result<(), ApiError> {
        let response = self.http.patch(self.item_url(id)).json(fields).send().await?;
        finish_mutation(response).await
    }

    /// `DELETE /todos/{id}`
    pub async fn delete_todo(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        finish_mutation(response).await
    }
}

async fn finish_mutation(response: Response) -> Result<(), ApiError> {
    let status = response.status().as_u16();
    debug!("[API] {} -> {}", response.url(), status);
    if status == NO_CONTENT {
        return Ok(());
    }
    let body = response.text().await?;
    expect_no_content(status, &body)
}
