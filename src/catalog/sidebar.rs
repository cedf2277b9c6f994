//! Draggable-table list backed by a [`SchemaCatalog`].
//!
//! Selecting a data source starts a background fetch. Selecting another one
//! before the first finishes aborts the stale task, and every result is
//! tagged with the generation it was started for, so an old response can
//! never replace the tables of the current data source.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::provider::SchemaCatalog;
use crate::model::Table;

/// What the sidebar currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarState {
    /// Data source the state belongs to.
    pub data_source_id: Option<String>,
    /// Incremented on every selection.
    pub generation: u64,
    pub loading: bool,
    pub tables: Vec<Table>,
    /// Inline error text from the last failed fetch.
    pub error: Option<String>,
}

impl SidebarState {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

pub struct SchemaSidebar {
    catalog: Arc<dyn SchemaCatalog>,
    state: Arc<watch::Sender<SidebarState>>,
    in_flight: Option<JoinHandle<()>>,
}

impl SchemaSidebar {
    pub fn new(catalog: Arc<dyn SchemaCatalog>) -> Self {
        let (state, _) = watch::channel(SidebarState::default());
        Self {
            catalog,
            state: Arc::new(state),
            in_flight: None,
        }
    }

    /// Switch to `data_source_id` and start fetching its tables.
    ///
    /// Must be called from within a tokio runtime.
    pub fn select_data_source(&mut self, data_source_id: impl Into<String>) {
        let data_source_id = data_source_id.into();

        if let Some(task) = self.in_flight.take() {
            task.abort();
        }

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.data_source_id = Some(data_source_id.clone());
            state.loading = true;
            state.tables.clear();
            state.error = None;
        });

        let catalog = Arc::clone(&self.catalog);
        let state = Arc::clone(&self.state);
        self.in_flight = Some(tokio::spawn(async move {
            let result = catalog.fetch_tables(&data_source_id).await;
            state.send_if_modified(|current| {
                if current.generation != generation {
                    log::debug!(
                        "discarding stale catalog response for {} (generation {})",
                        data_source_id,
                        generation
                    );
                    return false;
                }
                match result {
                    Ok(tables) => {
                        log::debug!("loaded {} tables for {}", tables.len(), data_source_id);
                        current.tables = tables;
                        current.error = None;
                    }
                    Err(err) => {
                        log::warn!("failed to load tables for {}: {}", data_source_id, err);
                        current.tables.clear();
                        current.error = Some(err.to_string());
                    }
                }
                current.loading = false;
                true
            });
        }));
    }

    /// Current state.
    pub fn state(&self) -> SidebarState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SidebarState> {
        self.state.subscribe()
    }

    /// Wait for the current fetch (if any) to finish and return the state.
    pub async fn loaded(&self) -> SidebarState {
        let mut rx = self.subscribe();
        let state = match rx.wait_for(|state| !state.loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        state
    }
}

impl Drop for SchemaSidebar {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
