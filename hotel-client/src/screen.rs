//! One admin screen: list, form, delete dialog and status toggles
//!
//! Every successful create, edit or delete re-fetches the whole list.
//! Status toggles only replace the affected row.

use shared::models::{RestaurantTable, TableStatus};

use crate::confirm::{ConfirmState, DeleteConfirmation};
use crate::error::{ClientError, ClientResult};
use crate::form::ResourceForm;
use crate::http::HttpClient;
use crate::list::{ListFilter, ResourceList};
use crate::notify::Notifier;
use crate::resource::{Resource, ResourceApi};
use crate::toggle::{self, Toggle};

pub struct ResourceScreen<R: Resource, H, N> {
    api: ResourceApi<R, H>,
    notifier: N,
    list: ResourceList<R>,
    form: Option<ResourceForm<R>>,
    confirm: DeleteConfirmation,
    pub filter: ListFilter,
}

impl<R: Resource, H: HttpClient, N: Notifier> ResourceScreen<R, H, N> {
    pub fn new(http: H, notifier: N) -> Self {
        Self {
            api: ResourceApi::new(http),
            notifier,
            list: ResourceList::new(),
            form: None,
            confirm: DeleteConfirmation::new(),
            filter: ListFilter::default(),
        }
    }

    pub fn api(&self) -> &ResourceApi<R, H> {
        &self.api
    }

    pub fn list(&self) -> &ResourceList<R> {
        &self.list
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        self.list.load(&self.api, &self.notifier).await
    }

    /// Re-fetch after a mutation; a failed refresh is reported but does
    /// not undo the mutation
    async fn refresh(&mut self) {
        if let Err(e) = self.load().await {
            tracing::warn!(resource = R::NAME, error = %e, "refresh after change failed");
        }
    }

    pub fn visible(&self) -> Vec<&R> {
        self.list.visible(&self.filter)
    }

    // ========== Form ==========

    pub fn open_create(&mut self, draft: R::Draft) -> &mut ResourceForm<R> {
        self.form.insert(ResourceForm::create(draft))
    }

    pub fn open_edit(&mut self, id: &str) -> ClientResult<&mut ResourceForm<R>> {
        let form = ResourceForm::edit(self.list.require(id)?);
        Ok(self.form.insert(form))
    }

    pub fn form(&self) -> Option<&ResourceForm<R>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ResourceForm<R>> {
        self.form.as_mut()
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form, then reload the list
    pub async fn submit_form(&mut self) -> ClientResult<R> {
        let form = self
            .form
            .as_mut()
            .ok_or_else(|| ClientError::InvalidState("no form is open".into()))?;
        let saved = form
            .submit(&self.api, self.list.items(), &self.notifier)
            .await?;
        self.form = None;
        self.refresh().await;
        Ok(saved)
    }

    // ========== Delete ==========

    pub fn request_delete(&mut self, id: &str) -> ClientResult<()> {
        let item = self.list.require(id)?;
        self.confirm.request(item)
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.confirm.cancel()
    }

    pub fn confirm_state(&self) -> &ConfirmState {
        self.confirm.state()
    }

    /// Send the confirmed DELETE, then reload the list
    pub async fn confirm_delete(&mut self) -> ClientResult<()> {
        self.confirm.confirm(&self.api, &self.notifier).await?;
        self.refresh().await;
        Ok(())
    }
}

impl<R: Toggle, H: HttpClient, N: Notifier> ResourceScreen<R, H, N> {
    pub async fn toggle(&mut self, id: &str) -> ClientResult<R> {
        toggle::toggle(&self.api, &mut self.list, id, &self.notifier).await
    }
}

impl<H: HttpClient, N: Notifier> ResourceScreen<RestaurantTable, H, N> {
    pub async fn set_table_status(
        &mut self,
        id: &str,
        status: TableStatus,
    ) -> ClientResult<RestaurantTable> {
        toggle::set_table_status(&self.api, &mut self.list, id, status, &self.notifier).await
    }

    pub async fn cycle_table_status(&mut self, id: &str) -> ClientResult<RestaurantTable> {
        toggle::cycle_table_status(&self.api, &mut self.list, id, &self.notifier).await
    }
}
