//! Resource accessor mirroring the UI data hook: one handle per resource
//! path, holding a cached list that is kept consistent with the server's
//! responses. Without a token every mutating call is a no-op returning a
//! sentinel; that is a convenience for logged-out paths, the real boundary
//! is server-side.

use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::calendar::repo::CalendarEvent;
use crate::files::repo::FileEntry;
use crate::goals::repo::Goal;
use crate::habits::repo::Habit;
use crate::notes::repo::Note;
use crate::tasks::repo::Task;

/// Rows the cache can track by primary key.
pub trait HasId {
    fn id(&self) -> Uuid;
}

macro_rules! impl_has_id {
    ($($ty:ty),* $(,)?) => {
        $(impl HasId for $ty {
            fn id(&self) -> Uuid {
                self.id
            }
        })*
    };
}

impl_has_id!(Task, Goal, Note, Habit, CalendarEvent, FileEntry);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, rb: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }
}

/// Cached accessor for one resource path (e.g. `/api/tasks`).
pub struct ResourceHandle<T> {
    client: ApiClient,
    path: String,
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> ResourceHandle<T>
where
    T: DeserializeOwned + HasId + Clone,
{
    pub fn new(client: ApiClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Construct and immediately fetch, like the hook does on mount.
    pub async fn mount(client: ApiClient, path: impl Into<String>) -> Self {
        let mut handle = Self::new(client, path);
        handle.refetch().await;
        handle
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetch the list and replace the cache wholesale. On failure the error
    /// flag is set and the cache keeps its previous contents.
    pub async fn refetch(&mut self) {
        self.loading = true;
        self.error = None;
        let request = self.client.authorize(self.client.http.get(self.client.url(&self.path)));
        match send_json::<Vec<T>>(request).await {
            Ok(list) => self.items = list,
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// POST, then prepend the server-returned row (the server owns the id).
    pub async fn create<B: Serialize + ?Sized>(&mut self, body: &B) -> Option<T> {
        if !self.client.has_token() {
            return None;
        }
        let request = self
            .client
            .authorize(self.client.http.post(self.client.url(&self.path)))
            .json(body);
        match send_json::<T>(request).await {
            Ok(row) => {
                prepend(&mut self.items, row.clone());
                Some(row)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// PUT `{path}/{id}`, then replace the matching cached row by id.
    pub async fn update<B: Serialize + ?Sized>(&mut self, id: Uuid, body: &B) -> Option<T> {
        if !self.client.has_token() {
            return None;
        }
        let url = format!("{}/{}", self.client.url(&self.path), id);
        let request = self.client.authorize(self.client.http.put(url)).json(body);
        match send_json::<T>(request).await {
            Ok(row) => {
                replace_by_id(&mut self.items, row.clone());
                Some(row)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    /// DELETE, then drop the cached row by id.
    pub async fn delete(&mut self, id: Uuid) -> bool {
        if !self.client.has_token() {
            return false;
        }
        let url = format!("{}/{}", self.client.url(&self.path), id);
        let request = self.client.authorize(self.client.http.delete(url));
        match send_json::<serde_json::Value>(request).await {
            Ok(_) => {
                remove_by_id(&mut self.items, id);
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }
}

async fn send_json<R: DeserializeOwned>(request: RequestBuilder) -> Result<R, String> {
    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| format!("request failed with status {status}"));
        return Err(message);
    }
    response.json::<R>().await.map_err(|e| e.to_string())
}

// Cache edits, kept as plain functions so the list discipline is testable
// without a server.

pub fn prepend<T>(items: &mut Vec<T>, row: T) {
    items.insert(0, row);
}

pub fn replace_by_id<T: HasId>(items: &mut [T], row: T) {
    if let Some(slot) = items.iter_mut().find(|it| it.id() == row.id()) {
        *slot = row;
    }
}

pub fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: Uuid) {
    items.retain(|it| it.id() != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: Uuid,
        label: String,
    }

    impl HasId for Row {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn row(label: &str) -> Row {
        Row {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }

    #[test]
    fn prepend_puts_new_rows_first() {
        let mut items = vec![row("old")];
        prepend(&mut items, row("new"));
        assert_eq!(items[0].label, "new");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn replace_by_id_swaps_only_the_match() {
        let a = row("a");
        let b = row("b");
        let mut items = vec![a.clone(), b.clone()];
        let updated = Row {
            id: b.id,
            label: "b2".into(),
        };
        replace_by_id(&mut items, updated);
        assert_eq!(items[0].label, "a");
        assert_eq!(items[1].label, "b2");
    }

    #[test]
    fn replace_by_id_ignores_unknown_rows() {
        let mut items = vec![row("a")];
        replace_by_id(&mut items, row("ghost"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "a");
    }

    #[test]
    fn remove_by_id_filters_the_row_out() {
        let a = row("a");
        let b = row("b");
        let mut items = vec![a.clone(), b.clone()];
        remove_by_id(&mut items, a.id);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, b.id);
    }

    #[tokio::test]
    async fn mutations_without_token_are_noops() {
        // The port is never contacted: the token check short-circuits first.
        let client = ApiClient::new("http://127.0.0.1:9");
        let mut handle: ResourceHandle<Row> = ResourceHandle::new(client, "/api/tasks");

        let created = handle
            .create(&serde_json::json!({ "label": "ignored" }))
            .await;
        assert!(created.is_none());

        let updated = handle
            .update(Uuid::new_v4(), &serde_json::json!({ "label": "ignored" }))
            .await;
        assert!(updated.is_none());

        assert!(!handle.delete(Uuid::new_v4()).await);
        assert!(handle.items().is_empty());
        assert!(handle.error().is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/tasks"), "http://localhost:8080/api/tasks");
    }

    #[test]
    fn with_token_marks_the_client_authenticated() {
        let client = ApiClient::new("http://localhost:8080");
        assert!(!client.has_token());
        assert!(client.with_token("jwt").has_token());
    }
}
