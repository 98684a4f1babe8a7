//! Delete confirmation
//!
//! `Closed -> Confirming -> Deleting -> Closed`, with `cancel` going back
//! from `Confirming` to `Closed`. DELETE is only ever sent from `confirm`.

use crate::error::{ClientError, ClientResult};
use crate::form::capitalize;
use crate::http::HttpClient;
use crate::notify::Notifier;
use crate::resource::{Resource, ResourceApi};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Closed,
    Confirming { id: String, label: String },
    Deleting { id: String, label: String },
}

#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    state: ConfirmState,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConfirmState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ConfirmState::Closed)
    }

    /// Ask for confirmation before deleting `item`
    pub fn request<R: Resource>(&mut self, item: &R) -> ClientResult<()> {
        if let ConfirmState::Deleting { .. } = self.state {
            return Err(ClientError::Busy);
        }
        self.state = ConfirmState::Confirming {
            id: item.id().to_string(),
            label: item.label(),
        };
        Ok(())
    }

    /// Dismiss the dialog; returns false if nothing was pending
    pub fn cancel(&mut self) -> bool {
        match self.state {
            ConfirmState::Confirming { .. } => {
                self.state = ConfirmState::Closed;
                true
            }
            _ => false,
        }
    }

    /// Send the DELETE for the pending id
    ///
    /// On failure the dialog stays on the same record and the server's
    /// message goes out verbatim.
    pub async fn confirm<R: Resource, H: HttpClient>(
        &mut self,
        api: &ResourceApi<R, H>,
        notifier: &dyn Notifier,
    ) -> ClientResult<()> {
        let (id, label) = match std::mem::take(&mut self.state) {
            ConfirmState::Confirming { id, label } => (id, label),
            other => {
                let name = match &other {
                    ConfirmState::Closed => "closed",
                    _ => "deleting",
                };
                self.state = other;
                return Err(ClientError::InvalidState(format!(
                    "delete confirmation is {}",
                    name
                )));
            }
        };
        self.state = ConfirmState::Deleting {
            id: id.clone(),
            label: label.clone(),
        };

        match api.delete(&id).await {
            Ok(ack) => {
                self.state = ConfirmState::Closed;
                let message =
                    ack.unwrap_or_else(|| format!("{} deleted successfully", capitalize(R::NAME)));
                notifier.success(&message);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, %id, error = %e, "delete failed");
                notifier.error(&e.user_message(&format!("Failed to delete {}", R::NAME)));
                self.state = ConfirmState::Confirming { id, label };
                Err(e)
            }
        }
    }
}
