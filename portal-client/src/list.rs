// Generic resource list controller.
//
// One instance per entity collection. Owns a single server page plus
// the selection and the in-flight mutation ledger; every operation
// re-reads the tenant scope from the session manager before touching
// the network.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::{json, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use portal_auth::SessionManager;
use portal_core::{
    ApiRequest, ApiTransport, Draft, HttpMethod, ListFilters, Page, Pagination, PortalError,
    PortalResult, Resource,
};

/// Outcome of a `load`: either the page was applied, or a newer load
/// was issued while this one was in flight and its response was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Patch,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    Pending,
    Confirmed,
    Rejected,
}

/// One in-flight or settled mutation, inspectable via `mutations()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub id: Uuid,
    pub kind: MutationKind,
    pub status: MutationStatus,
}

/// Evidence that the caller obtained delete confirmation from the user.
/// The controller never second-guesses it.
#[derive(Debug, Clone, Copy)]
pub struct DeleteConfirmation(());

impl DeleteConfirmation {
    pub fn confirmed() -> Self {
        Self(())
    }
}

struct ListState<T> {
    items: Vec<T>,
    total_count: u64,
    filters: ListFilters,
    page: Pagination,
    selection: HashSet<String>,
    mutations: Vec<MutationRecord>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            filters: ListFilters::default(),
            page: Pagination::default(),
            selection: HashSet::new(),
            mutations: Vec::new(),
        }
    }
}

pub struct ResourceListController<T: Resource> {
    session: Arc<SessionManager>,
    transport: Arc<dyn ApiTransport>,
    generation: AtomicU64,
    state: RwLock<ListState<T>>,
}

impl<T: Resource> ResourceListController<T> {
    pub fn new(session: Arc<SessionManager>, transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            session,
            transport,
            generation: AtomicU64::new(0),
            state: RwLock::new(ListState::default()),
        }
    }

    /// Fetch one page. Replaces items and total count atomically on
    /// success; on failure the previous page is preserved. A response
    /// overtaken by a newer `load` is dropped without touching state.
    pub async fn load(
        &self,
        filters: ListFilters,
        page: Pagination,
    ) -> PortalResult<LoadOutcome> {
        let business_id = self
            .session
            .business_id()
            .ok_or(PortalError::TenantUnresolved)?;

        {
            let mut state = self.state.write().unwrap();
            // Selections never span a filter or page change.
            if state.filters != filters || state.page != page {
                state.selection.clear();
                state.filters = filters.clone();
                state.page = page;
            }
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut query = vec![("business_id".to_string(), business_id.0.clone())];
        query.extend(filters.to_query(&page));

        let request = self
            .authorized(ApiRequest::new(HttpMethod::Get, T::PATH).with_query(query))
            .await;
        let body = self.transport.send(request).await?.into_success()?;

        let page_data: Page<T> = serde_json::from_value(body)
            .map_err(|err| PortalError::network(format!("invalid list response: {err}")))?;

        match self.apply_page(generation, page_data) {
            Err(PortalError::StaleResponse) => {
                debug!(resource = T::PATH, "dropping stale list response");
                Ok(LoadOutcome::Superseded)
            }
            Err(other) => Err(other),
            Ok(()) => Ok(LoadOutcome::Applied),
        }
    }

    fn apply_page(&self, generation: u64, page_data: Page<T>) -> PortalResult<()> {
        let mut state = self.state.write().unwrap();
        if generation != self.generation.load(Ordering::SeqCst) {
            return Err(PortalError::StaleResponse);
        }

        state.items = page_data.items;
        state.total_count = page_data.total_count;

        // The new page may no longer contain previously selected ids.
        let live: HashSet<String> = state.items.iter().map(|i| i.id().to_string()).collect();
        state.selection.retain(|id| live.contains(id));
        Ok(())
    }

    /// Create a record from a draft. Rejects locally, with no network
    /// call, when required fields are missing. The server's canonical
    /// entity (not the draft) is appended on success.
    pub async fn add<D: Draft>(&self, draft: &D) -> PortalResult<T> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(PortalError::validation(missing));
        }

        let business_id = self
            .session
            .business_id()
            .ok_or(PortalError::TenantUnresolved)?;

        let mut body = serde_json::to_value(draft)
            .map_err(|err| PortalError::network(format!("unserializable draft: {err}")))?;
        if let Value::Object(map) = &mut body {
            map.insert("business_id".to_string(), json!(business_id.0));
        }

        let mutation = self.begin_mutation(MutationKind::Create);
        let request = self
            .authorized(ApiRequest::new(HttpMethod::Post, T::PATH).with_body(body))
            .await;

        let created = match self.send_entity(request).await {
            Ok(entity) => entity,
            Err(err) => {
                self.settle_mutation(mutation, MutationStatus::Rejected);
                return Err(err);
            }
        };

        let mut state = self.state.write().unwrap();
        state.items.push(created.clone());
        state.total_count += 1;
        drop(state);

        self.settle_mutation(mutation, MutationStatus::Confirmed);
        Ok(created)
    }

    /// Patch a record with only the changed fields. On failure the
    /// local copy is left exactly as it was.
    pub async fn update(&self, id: &str, patch: Value) -> PortalResult<T> {
        self.session
            .business_id()
            .ok_or(PortalError::TenantUnresolved)?;

        let mutation = self.begin_mutation(MutationKind::Patch);
        let path = format!("{}/{}", T::PATH, id);
        let request = self
            .authorized(ApiRequest::new(HttpMethod::Patch, path).with_body(patch))
            .await;

        let updated = match self.send_entity(request).await {
            Ok(entity) => entity,
            Err(err) => {
                self.settle_mutation(mutation, MutationStatus::Rejected);
                return Err(err);
            }
        };

        let mut state = self.state.write().unwrap();
        if let Some(slot) = state.items.iter_mut().find(|item| item.id() == id) {
            *slot = updated.clone();
        }
        drop(state);

        self.settle_mutation(mutation, MutationStatus::Confirmed);
        Ok(updated)
    }

    /// Bulk delete. Acknowledged ids leave the collection and the
    /// selection; on partial failure the rejected ids stay selected and
    /// a distinct `PartialDelete` error is raised after the acknowledged
    /// removals are applied.
    pub async fn remove(
        &self,
        ids: &HashSet<String>,
        _confirmation: DeleteConfirmation,
    ) -> PortalResult<Vec<String>> {
        self.session
            .business_id()
            .ok_or(PortalError::TenantUnresolved)?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut requested: Vec<String> = ids.iter().cloned().collect();
        requested.sort();

        let mutation = self.begin_mutation(MutationKind::Remove);
        let request = self
            .authorized(
                ApiRequest::new(HttpMethod::Delete, T::PATH).with_body(json!({ "ids": requested })),
            )
            .await;

        let body = match self.transport.send(request).await.and_then(|r| r.into_success()) {
            Ok(body) => body,
            Err(err) => {
                self.settle_mutation(mutation, MutationStatus::Rejected);
                return Err(err);
            }
        };

        let deleted = string_list(&body, "deletedIds");
        let failed = string_list(&body, "failedIds");

        let mut state = self.state.write().unwrap();
        state.items.retain(|item| !deleted.contains(&item.id().to_string()));
        for id in &deleted {
            state.selection.remove(id);
        }
        state.total_count = state.total_count.saturating_sub(deleted.len() as u64);
        drop(state);

        if failed.is_empty() {
            self.settle_mutation(mutation, MutationStatus::Confirmed);
            Ok(deleted)
        } else {
            warn!(
                resource = T::PATH,
                failed = failed.len(),
                "bulk delete partially failed"
            );
            self.settle_mutation(mutation, MutationStatus::Rejected);
            Err(PortalError::PartialDelete { deleted, failed })
        }
    }

    /// Select an item for a bulk action. Returns false when the id is
    /// not in the current page.
    pub fn select(&self, id: &str) -> bool {
        let mut state = self.state.write().unwrap();
        if state.items.iter().any(|item| item.id() == id) {
            state.selection.insert(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn deselect(&self, id: &str) {
        self.state.write().unwrap().selection.remove(id);
    }

    pub fn clear_selection(&self) {
        self.state.write().unwrap().selection.clear();
    }

    pub fn selected(&self) -> HashSet<String> {
        self.state.read().unwrap().selection.clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.state.read().unwrap().items.clone()
    }

    pub fn total_count(&self) -> u64 {
        self.state.read().unwrap().total_count
    }

    pub fn filters(&self) -> ListFilters {
        self.state.read().unwrap().filters.clone()
    }

    pub fn page(&self) -> Pagination {
        self.state.read().unwrap().page
    }

    pub fn mutations(&self) -> Vec<MutationRecord> {
        self.state.read().unwrap().mutations.clone()
    }

    async fn authorized(&self, request: ApiRequest) -> ApiRequest {
        match self.session.id_token().await {
            Some(token) => request.with_bearer(&token),
            None => request,
        }
    }

    async fn send_entity(&self, request: ApiRequest) -> PortalResult<T> {
        let body = self.transport.send(request).await?.into_success()?;
        serde_json::from_value(body)
            .map_err(|err| PortalError::network(format!("invalid entity response: {err}")))
    }

    fn begin_mutation(&self, kind: MutationKind) -> Uuid {
        let record = MutationRecord {
            id: Uuid::new_v4(),
            kind,
            status: MutationStatus::Pending,
        };
        let id = record.id;
        self.state.write().unwrap().mutations.push(record);
        id
    }

    fn settle_mutation(&self, id: Uuid, status: MutationStatus) {
        let mut state = self.state.write().unwrap();
        if let Some(record) = state.mutations.iter_mut().find(|m| m.id == id) {
            record.status = status;
        }
    }
}

fn string_list(body: &Value, key: &str) -> Vec<String> {
    body.get(key)
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use portal_auth::Identity;
    use portal_core::{ApiResponse, ClientConfig};
    use serde::{Deserialize, Serialize};
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        widget_id: String,
        name: String,
    }

    impl Resource for Widget {
        const PATH: &'static str = "widgets";

        fn id(&self) -> &str {
            &self.widget_id
        }
    }

    #[derive(Serialize)]
    struct WidgetDraft {
        name: String,
    }

    impl Draft for WidgetDraft {
        fn missing_fields(&self) -> Vec<&'static str> {
            let mut missing = Vec::new();
            if self.name.trim().is_empty() {
                missing.push("name");
            }
            missing
        }
    }

    struct FakeIdentity;

    #[async_trait]
    impl Identity for FakeIdentity {
        async fn id_token(&self) -> anyhow::Result<String> {
            Ok("tok-1".to_string())
        }
    }

    struct BrokenIdentity;

    #[async_trait]
    impl Identity for BrokenIdentity {
        async fn id_token(&self) -> anyhow::Result<String> {
            Err(anyhow!("expired"))
        }
    }

    /// Replays a scripted queue of responses, recording every request.
    struct ScriptedTransport {
        responses: Mutex<VecDeque<PortalResult<ApiResponse>>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<PortalResult<ApiResponse>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ApiTransport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> PortalResult<ApiResponse> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(ApiResponse::ok(Value::Null)))
        }
    }

    /// Holds its first response until released; later calls answer
    /// immediately. Used to force out-of-order arrival.
    struct HoldFirstTransport {
        calls: AtomicUsize,
        first: ApiResponse,
        rest: ApiResponse,
        started: Mutex<Option<oneshot::Sender<()>>>,
        release: Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl ApiTransport for HoldFirstTransport {
        async fn send(&self, _request: ApiRequest) -> PortalResult<ApiResponse> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                if let Some(tx) = self.started.lock().unwrap().take() {
                    let _ = tx.send(());
                }
                let release = self.release.lock().unwrap().take();
                if let Some(rx) = release {
                    let _ = rx.await;
                }
                Ok(self.first.clone())
            } else {
                Ok(self.rest.clone())
            }
        }
    }

    fn widget_page(ids: &[&str], total: u64) -> ApiResponse {
        let items: Vec<Value> = ids
            .iter()
            .map(|id| json!({"widget_id": id, "name": format!("widget {id}")}))
            .collect();
        ApiResponse::ok(json!({"items": items, "totalCount": total}))
    }

    async fn ready_session() -> Arc<SessionManager> {
        let tenant_transport =
            ScriptedTransport::new(vec![Ok(ApiResponse::ok(json!({"business_id": "biz-1"})))]);
        let session = Arc::new(SessionManager::new(
            ClientConfig::new("https://api.example.com"),
            tenant_transport,
        ));
        session
            .handle_identity_change(Some(Arc::new(FakeIdentity)))
            .await;
        assert!(session.business_id().is_some());
        session
    }

    async fn degraded_session() -> Arc<SessionManager> {
        let tenant_transport = ScriptedTransport::new(vec![Ok(ApiResponse {
            status: 500,
            body: json!({"error": "database connection error"}),
        })]);
        let session = Arc::new(SessionManager::new(
            ClientConfig::new("https://api.example.com"),
            tenant_transport,
        ));
        session
            .handle_identity_change(Some(Arc::new(FakeIdentity)))
            .await;
        session
    }

    #[tokio::test]
    async fn load_replaces_page_and_sends_scope() {
        let transport = ScriptedTransport::new(vec![Ok(widget_page(&["w1", "w2"], 7))]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport.clone());

        let outcome = controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(controller.total_count(), 7);
        assert_eq!(
            controller.items().iter().map(|w| w.id().to_string()).collect::<Vec<_>>(),
            vec!["w1", "w2"]
        );

        let sent = transport.requests.lock().unwrap()[0].clone();
        assert_eq!(sent.path, "widgets");
        assert!(sent
            .query
            .contains(&("business_id".to_string(), "biz-1".to_string())));
        assert_eq!(
            sent.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-1")
        );
    }

    #[tokio::test]
    async fn load_rejects_without_tenant_and_sends_nothing() {
        let transport = ScriptedTransport::new(vec![]);
        let controller =
            ResourceListController::<Widget>::new(degraded_session().await, transport.clone());

        let err = controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap_err();

        assert_eq!(err, PortalError::TenantUnresolved);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn load_failure_preserves_previous_page() {
        let transport = ScriptedTransport::new(vec![
            Ok(widget_page(&["w1"], 1)),
            Ok(ApiResponse {
                status: 503,
                body: json!({"error": "unavailable"}),
            }),
        ]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport);

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();
        let err = controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.total_count(), 1);
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let (started_tx, started_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        let transport = Arc::new(HoldFirstTransport {
            calls: AtomicUsize::new(0),
            first: widget_page(&["old"], 1),
            rest: widget_page(&["new"], 1),
            started: Mutex::new(Some(started_tx)),
            release: Mutex::new(Some(release_rx)),
        });
        let controller = Arc::new(ResourceListController::<Widget>::new(
            ready_session().await,
            transport,
        ));

        let slow = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                controller
                    .load(ListFilters::default(), Pagination::default())
                    .await
            })
        };
        started_rx.await.unwrap();

        let newer = controller
            .load(
                ListFilters {
                    search: Some("new".to_string()),
                    ..ListFilters::default()
                },
                Pagination::default(),
            )
            .await
            .unwrap();
        assert_eq!(newer, LoadOutcome::Applied);

        release_tx.send(()).unwrap();
        let stale = slow.await.unwrap().unwrap();

        assert_eq!(stale, LoadOutcome::Superseded);
        assert_eq!(
            controller.items().iter().map(|w| w.id().to_string()).collect::<Vec<_>>(),
            vec!["new"]
        );
    }

    #[tokio::test]
    async fn filter_change_resets_selection() {
        let transport = ScriptedTransport::new(vec![
            Ok(widget_page(&["w1", "w2"], 2)),
            Ok(widget_page(&["w1", "w2"], 2)),
        ]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport);

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();
        assert!(controller.select("w1"));
        assert_eq!(controller.selected().len(), 1);

        controller
            .load(
                ListFilters {
                    category: Some("cat".to_string()),
                    ..ListFilters::default()
                },
                Pagination::default(),
            )
            .await
            .unwrap();

        assert!(controller.selected().is_empty());
    }

    #[tokio::test]
    async fn reload_prunes_selection_to_live_ids() {
        let transport = ScriptedTransport::new(vec![
            Ok(widget_page(&["w1", "w2"], 2)),
            Ok(widget_page(&["w2"], 1)),
        ]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport);

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();
        controller.select("w1");
        controller.select("w2");

        // Same filters and page: the selection survives, minus dead ids.
        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();

        assert_eq!(controller.selected(), HashSet::from(["w2".to_string()]));
    }

    #[tokio::test]
    async fn select_rejects_unknown_ids() {
        let transport = ScriptedTransport::new(vec![Ok(widget_page(&["w1"], 1))]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport);

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();

        assert!(!controller.select("missing"));
        assert!(controller.selected().is_empty());
    }

    #[tokio::test]
    async fn add_with_missing_fields_never_hits_the_network() {
        let transport = ScriptedTransport::new(vec![]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport.clone());

        let err = controller
            .add(&WidgetDraft {
                name: "  ".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, PortalError::validation(vec!["name"]));
        assert_eq!(transport.request_count(), 0);
        assert!(controller.items().is_empty());
    }

    #[tokio::test]
    async fn add_appends_the_canonical_entity() {
        let transport = ScriptedTransport::new(vec![
            Ok(widget_page(&[], 0)),
            // Server assigns its own id and normalizes the name.
            Ok(ApiResponse::ok(
                json!({"widget_id": "srv-1", "name": "Widget"}),
            )),
        ]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport.clone());

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();
        let created = controller
            .add(&WidgetDraft {
                name: "widget".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.widget_id, "srv-1");
        assert_eq!(controller.items(), vec![created]);
        assert_eq!(controller.total_count(), 1);

        let sent = transport.requests.lock().unwrap()[1].clone();
        assert_eq!(sent.body.as_ref().unwrap()["business_id"], "biz-1");

        let mutations = controller.mutations();
        assert_eq!(mutations.len(), 1);
        assert_eq!(mutations[0].kind, MutationKind::Create);
        assert_eq!(mutations[0].status, MutationStatus::Confirmed);
    }

    #[tokio::test]
    async fn update_failure_leaves_entity_untouched() {
        let transport = ScriptedTransport::new(vec![
            Ok(widget_page(&["w1"], 1)),
            Err(PortalError::network("connection reset")),
        ]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport);

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();
        let before = controller.items();

        let err = controller
            .update("w1", json!({"name": "renamed"}))
            .await
            .unwrap_err();

        assert_eq!(err, PortalError::network("connection reset"));
        assert_eq!(controller.items(), before);
        assert_eq!(controller.mutations()[0].status, MutationStatus::Rejected);
    }

    #[tokio::test]
    async fn update_merges_server_acknowledged_entity() {
        let transport = ScriptedTransport::new(vec![
            Ok(widget_page(&["w1"], 1)),
            Ok(ApiResponse::ok(
                json!({"widget_id": "w1", "name": "renamed"}),
            )),
        ]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport.clone());

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();
        controller
            .update("w1", json!({"name": "renamed"}))
            .await
            .unwrap();

        assert_eq!(controller.items()[0].name, "renamed");

        // Only the changed fields travel.
        let sent = transport.requests.lock().unwrap()[1].clone();
        assert_eq!(sent.path, "widgets/w1");
        assert_eq!(sent.body, Some(json!({"name": "renamed"})));
    }

    #[tokio::test]
    async fn partial_delete_keeps_rejected_ids_selected() {
        let transport = ScriptedTransport::new(vec![
            Ok(widget_page(&["a", "b"], 2)),
            Ok(ApiResponse::ok(
                json!({"deletedIds": ["a"], "failedIds": ["b"]}),
            )),
        ]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport);

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();
        controller.select("a");
        controller.select("b");

        let err = controller
            .remove(&controller.selected(), DeleteConfirmation::confirmed())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PortalError::PartialDelete {
                deleted: vec!["a".to_string()],
                failed: vec!["b".to_string()],
            }
        );
        assert_eq!(
            controller.items().iter().map(|w| w.id().to_string()).collect::<Vec<_>>(),
            vec!["b"]
        );
        assert_eq!(controller.selected(), HashSet::from(["b".to_string()]));
        assert_eq!(controller.total_count(), 1);
    }

    #[tokio::test]
    async fn full_delete_clears_collection_and_selection() {
        let transport = ScriptedTransport::new(vec![
            Ok(widget_page(&["a", "b"], 2)),
            Ok(ApiResponse::ok(json!({"deletedIds": ["a", "b"]}))),
        ]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport.clone());

        controller
            .load(ListFilters::default(), Pagination::default())
            .await
            .unwrap();
        controller.select("a");
        controller.select("b");

        let deleted = controller
            .remove(&controller.selected(), DeleteConfirmation::confirmed())
            .await
            .unwrap();

        assert_eq!(deleted, vec!["a".to_string(), "b".to_string()]);
        assert!(controller.items().is_empty());
        assert!(controller.selected().is_empty());
        assert_eq!(controller.total_count(), 0);

        let sent = transport.requests.lock().unwrap()[1].clone();
        assert_eq!(sent.method, HttpMethod::Delete);
        assert_eq!(sent.body, Some(json!({"ids": ["a", "b"]})));
    }

    #[tokio::test]
    async fn empty_delete_is_a_no_op() {
        let transport = ScriptedTransport::new(vec![]);
        let controller =
            ResourceListController::<Widget>::new(ready_session().await, transport.clone());

        let deleted = controller
            .remove(&HashSet::new(), DeleteConfirmation::confirmed())
            .await
            .unwrap();

        assert!(deleted.is_empty());
        assert_eq!(transport.request_count(), 0);
    }
}
