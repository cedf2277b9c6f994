//! Editor session: the state behind one open query editor.
//!
//! Every user gesture is one synchronous transition on [`EditorSession`].
//! The compiled specification is never stored; [`EditorSession::render`]
//! rebuilds it from the diagram and field configs each time.
//!
//! Export failures never propagate out of the session. They become
//! [`Notification`]s and leave the diagram and configs as they were.

use std::path::PathBuf;

use crate::compile::{compile_diagram, CompileOutput};
use crate::diagram::{ConnectionId, DiagramStore, GridLayout, NodeId};
use crate::export::{ExportGateway, QueryApi, SUCCESS_MESSAGE};
use crate::fields::{ConfigPanel, FieldConfigStore};
use crate::model::{FieldKey, Table};
use crate::query::QuerySpecification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct EditorSession {
    diagram: DiagramStore,
    fields: FieldConfigStore,
    export_panel_open: bool,
    notifications: Vec<Notification>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: GridLayout) -> Self {
        Self {
            diagram: DiagramStore::with_layout(layout),
            ..Default::default()
        }
    }

    pub fn diagram(&self) -> &DiagramStore {
        &self.diagram
    }

    pub fn fields(&self) -> &FieldConfigStore {
        &self.fields
    }

    // =========================================================================
    // Canvas gestures
    // =========================================================================

    /// Drop a table from the sidebar onto the canvas.
    pub fn add_table(&mut self, table: Table) -> NodeId {
        self.diagram.add_table(table)
    }

    /// Drag-connect two handles. Invalid connections are ignored.
    pub fn connect(&mut self, source_handle: &str, target_handle: &str) -> Option<ConnectionId> {
        match self.diagram.add_connection(source_handle, target_handle) {
            Ok(id) => Some(id),
            Err(err) => {
                log::debug!(
                    "ignoring connection {} -> {}: {}",
                    source_handle,
                    target_handle,
                    err
                );
                None
            }
        }
    }

    /// Open the config panel for a field.
    pub fn open_field(&self, key: FieldKey) -> ConfigPanel {
        self.fields.open(key)
    }

    /// Save an open config panel.
    pub fn save_field(&mut self, panel: ConfigPanel) {
        self.fields.save(panel);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Compile the current state, including join-inference diagnostics.
    pub fn compile(&self) -> CompileOutput {
        compile_diagram(&self.diagram, &self.fields)
    }

    /// The specification for the current state.
    pub fn render(&self) -> QuerySpecification {
        self.compile().specification
    }

    // =========================================================================
    // Export panel
    // =========================================================================

    pub fn open_export_panel(&mut self) {
        self.export_panel_open = true;
    }

    pub fn close_export_panel(&mut self) {
        self.export_panel_open = false;
    }

    pub fn is_export_panel_open(&self) -> bool {
        self.export_panel_open
    }

    pub async fn copy_to_clipboard(&mut self, gateway: &ExportGateway) -> bool {
        let spec = self.render();
        match gateway.copy_to_clipboard(&spec).await {
            Ok(()) => {
                self.notify(Notification::success("Copied to clipboard"));
                true
            }
            Err(err) => {
                self.notify(Notification::error(err.to_string()));
                false
            }
        }
    }

    pub fn download(&mut self, gateway: &ExportGateway) -> Option<PathBuf> {
        let spec = self.render();
        match gateway.download(&spec) {
            Ok(path) => {
                self.notify(Notification::success(format!(
                    "Saved {}",
                    path.display()
                )));
                Some(path)
            }
            Err(err) => {
                self.notify(Notification::error(err.to_string()));
                None
            }
        }
    }

    /// Submit the current specification as `query_type`.
    ///
    /// The export panel closes and exactly one notification is queued,
    /// whether or not the submission succeeds. Returns true on success.
    pub async fn create_query(
        &mut self,
        api: &dyn QueryApi,
        data_source_id: &str,
        query_type: &str,
    ) -> bool {
        let spec = self.render();
        let result = api.create_query(data_source_id, &spec, query_type).await;
        self.close_export_panel();

        match result {
            Ok(()) => {
                self.notify(Notification::success(SUCCESS_MESSAGE));
                true
            }
            Err(err) => {
                log::warn!("create query failed: {}", err);
                self.notify(Notification::error(err.user_message()));
                false
            }
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drain queued notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
