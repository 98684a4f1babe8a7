//! Generic resource manager
//!
//! Every admin screen follows the same list / form / delete pattern over
//! one REST collection. [`Resource`] describes an entity once (endpoint,
//! envelope shape, columns, search fields, draft encoding) and
//! [`ResourceApi`] performs the typed CRUD calls for it.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ApiResponse, ListShape};
use validator::Validate;

use crate::access::Area;
use crate::error::ClientResult;
use crate::http::{HttpClient, MultipartPayload};
use crate::images::ImageSet;

/// Request body of a create or edit submission
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Multipart(MultipartPayload),
}

impl Payload {
    pub fn json<T: Serialize>(value: &T) -> ClientResult<Self> {
        Ok(Payload::Json(serde_json::to_value(value)?))
    }
}

/// Entity managed by one admin screen
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Form payload used for both create and edit
    type Draft: Serialize + DeserializeOwned + Validate + Clone + Send + Sync;

    /// Human name, singular ("menu category")
    const NAME: &'static str;
    /// Collection endpoint
    const ENDPOINT: &'static str;
    /// Where list responses keep the collection
    const LIST_SHAPE: ListShape;
    const AREA: Area;
    /// Table header
    const COLUMNS: &'static [&'static str];
    /// Edit form keeps one photo rather than a gallery
    const SINGLE_IMAGE: bool = false;

    fn id(&self) -> &str;

    /// Short label for confirmations and notices
    fn label(&self) -> String;

    /// Table cells, one per entry of `COLUMNS`
    fn row(&self) -> Vec<String>;

    /// Fields matched by the text filter
    fn search_fields(&self) -> Vec<&str>;

    /// Value matched by the status filter
    fn status_key(&self) -> Option<&str> {
        None
    }

    /// Display order of a loaded list
    fn order(_items: &mut [Self]) {}

    /// Fill in server-assigned defaults before a create (sort positions)
    fn prepare_create(_draft: &mut Self::Draft, _existing: &[Self]) {}

    /// Draft pre-filled from an existing record for the edit form
    fn to_draft(&self) -> Self::Draft;

    /// Stored image URLs shown in the edit form
    fn stored_images(&self) -> Vec<String> {
        Vec::new()
    }

    /// Encode a submission; resources with uploads override this
    fn encode(draft: &Self::Draft, _images: &ImageSet) -> ClientResult<Payload> {
        Payload::json(draft)
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::ENDPOINT, urlencoding::encode(id))
    }
}

/// Typed CRUD calls for one resource
#[derive(Debug, Clone)]
pub struct ResourceApi<R, H> {
    http: H,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource, H: HttpClient> ResourceApi<R, H> {
    pub fn new(http: H) -> Self {
        Self {
            http,
            _marker: PhantomData,
        }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// GET the whole collection in display order
    pub async fn list(&self) -> ClientResult<Vec<R>> {
        tracing::debug!(resource = R::NAME, "listing");
        let resp: ApiResponse<Value> = self.http.get(R::ENDPOINT).await?;
        let mut items: Vec<R> = resp.into_list(R::LIST_SHAPE)?;
        R::order(&mut items);
        Ok(items)
    }

    pub async fn get(&self, id: &str) -> ClientResult<R> {
        let resp: ApiResponse<Value> = self.http.get(&R::item_path(id)).await?;
        Ok(resp.into_item()?)
    }

    pub async fn create(&self, payload: Payload) -> ClientResult<R> {
        tracing::debug!(resource = R::NAME, "creating");
        let resp: ApiResponse<Value> = match payload {
            Payload::Json(body) => self.http.post(R::ENDPOINT, &body).await?,
            Payload::Multipart(form) => self.http.post_multipart(R::ENDPOINT, form).await?,
        };
        Ok(resp.into_item()?)
    }

    pub async fn update(&self, id: &str, payload: Payload) -> ClientResult<R> {
        tracing::debug!(resource = R::NAME, %id, "updating");
        let path = R::item_path(id);
        let resp: ApiResponse<Value> = match payload {
            Payload::Json(body) => self.http.put(&path, &body).await?,
            Payload::Multipart(form) => self.http.put_multipart(&path, form).await?,
        };
        Ok(resp.into_item()?)
    }

    /// PUT the full record back (single-field toggles)
    pub async fn replace(&self, item: &R) -> ClientResult<R> {
        tracing::debug!(resource = R::NAME, id = item.id(), "replacing");
        let resp: ApiResponse<Value> = self.http.put(&R::item_path(item.id()), item).await?;
        Ok(resp.into_item()?)
    }

    /// DELETE; returns the server's acknowledgement message
    pub async fn delete(&self, id: &str) -> ClientResult<Option<String>> {
        tracing::debug!(resource = R::NAME, %id, "deleting");
        let resp: ApiResponse<Value> = self.http.delete(&R::item_path(id)).await?;
        Ok(resp.into_ack()?)
    }
}
