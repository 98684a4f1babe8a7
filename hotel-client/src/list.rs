//! List screen state

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::notify::Notifier;
use crate::resource::{Resource, ResourceApi};

/// Text and status filter of a list screen
///
/// Text matches any search field case-insensitively; an empty filter
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: String,
    pub status: Option<String>,
}

impl ListFilter {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn matches<R: Resource>(&self, item: &R) -> bool {
        if let Some(wanted) = &self.status
            && !item
                .status_key()
                .is_some_and(|s| s.eq_ignore_ascii_case(wanted))
        {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))
    }
}

/// Loaded collection plus loading and error flags
#[derive(Debug, Clone)]
pub struct ResourceList<R> {
    items: Vec<R>,
    loading: bool,
    error: Option<String>,
}

impl<R> Default for ResourceList<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<R: Resource> ResourceList<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the collection, replacing what was loaded before
    ///
    /// On failure the list is emptied, the error is kept for display and
    /// an error notice goes out.
    pub async fn load<H: HttpClient>(
        &mut self,
        api: &ResourceApi<R, H>,
        notifier: &dyn Notifier,
    ) -> ClientResult<()> {
        self.loading = true;
        let result = api.list().await;
        self.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(resource = R::NAME, count = items.len(), "list loaded");
                self.items = items;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                let message = e.user_message(&format!("Failed to load {} list", R::NAME));
                tracing::warn!(resource = R::NAME, error = %e, "list load failed");
                self.items.clear();
                self.error = Some(message.clone());
                notifier.error(&message);
                Err(e)
            }
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible(&self, filter: &ListFilter) -> Vec<&R> {
        self.items.iter().filter(|item| filter.matches(*item)).collect()
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn require(&self, id: &str) -> ClientResult<&R> {
        self.find(id)
            .ok_or_else(|| ClientError::NotFound(format!("{} {}", R::NAME, id)))
    }

    /// Swap in the server's copy of one row; returns false if it is not loaded
    pub fn replace_item(&mut self, item: R) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_items(&mut self, items: Vec<R>) {
        self.items = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{RestaurantTable, TableStatus};

    fn table(id: &str, number: u32, status: TableStatus, customer: Option<&str>) -> RestaurantTable {
        RestaurantTable {
            id: id.into(),
            number,
            capacity: 4,
            status,
            reservation_time: None,
            customer_name: customer.map(String::from),
        }
    }

    fn list() -> ResourceList<RestaurantTable> {
        let mut list = ResourceList::new();
        list.set_items(vec![
            table("t1", 1, TableStatus::Available, None),
            table("t2", 2, TableStatus::Reserved, Some("Okafor")),
            table("t3", 3, TableStatus::Occupied, Some("Lindqvist")),
        ]);
        list
    }

    #[test]
    fn filter_by_status_and_text() {
        let list = list();
        assert_eq!(list.visible(&ListFilter::default()).len(), 3);

        let reserved = list.visible(&ListFilter::default().status("reserved"));
        assert_eq!(reserved.len(), 1);
        assert_eq!(reserved[0].id, "t2");

        let by_name = list.visible(&ListFilter::default().search("LIND"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "t3");

        assert!(list
            .visible(&ListFilter::default().search("okafor").status("occupied"))
            .is_empty());
    }

    #[test]
    fn replace_keeps_position() {
        let mut list = list();
        assert!(list.replace_item(table("t2", 2, TableStatus::Occupied, None)));
        assert_eq!(list.items()[1].status, TableStatus::Occupied);
        assert!(!list.replace_item(table("t9", 9, TableStatus::Available, None)));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn require_missing_row() {
        let list = list();
        assert!(list.require("t1").is_ok());
        assert!(matches!(list.require("nope"), Err(ClientError::NotFound(_))));
    }
}
