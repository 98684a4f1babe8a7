//! Create / edit form state

use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::images::ImageSet;
use crate::notify::Notifier;
use crate::resource::{Payload, Resource, ResourceApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// One open create or edit form
///
/// A failed submission leaves the form open with the draft and images as
/// the user left them.
#[derive(Debug, Clone)]
pub struct ResourceForm<R: Resource> {
    mode: FormMode,
    pub draft: R::Draft,
    pub images: ImageSet,
    open: bool,
    submitting: bool,
    error: Option<String>,
}

impl<R: Resource> ResourceForm<R> {
    pub fn create(draft: R::Draft) -> Self {
        let images = if R::SINGLE_IMAGE {
            ImageSet::single(None)
        } else {
            ImageSet::gallery(Vec::new())
        };
        Self::with(FormMode::Create, draft, images)
    }

    /// Form pre-filled from an existing record
    pub fn edit(item: &R) -> Self {
        let stored = item.stored_images();
        let images = if R::SINGLE_IMAGE {
            ImageSet::single(stored.into_iter().next())
        } else {
            ImageSet::gallery(stored)
        };
        Self::with(FormMode::Edit(item.id().to_string()), item.to_draft(), images)
    }

    fn with(mode: FormMode, draft: R::Draft, images: ImageSet) -> Self {
        Self {
            mode,
            draft,
            images,
            open: true,
            submitting: false,
            error: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn validate(&self) -> ClientResult<()> {
        self.draft
            .validate()
            .map_err(|errors| ClientError::validation(&errors))
    }

    /// Validate, encode and send the form
    ///
    /// `existing` is the loaded list, used by create hooks such as the next
    /// sort position. Returns the server's copy of the saved record.
    pub async fn submit<H: HttpClient>(
        &mut self,
        api: &ResourceApi<R, H>,
        existing: &[R],
        notifier: &dyn Notifier,
    ) -> ClientResult<R> {
        if !self.open {
            return Err(ClientError::InvalidState("form is closed".into()));
        }
        if self.submitting {
            return Err(ClientError::Busy);
        }
        if let Err(e) = self.validate() {
            self.error = Some(e.user_message("Please check the form"));
            return Err(e);
        }

        let outgoing = self.prepare(existing);
        let result = {
            let _in_flight = InFlight::start(&mut self.submitting)?;
            match outgoing {
                Ok(outgoing) => outgoing.send(api).await,
                Err(e) => Err(e),
            }
        };

        match result {
            Ok(saved) => {
                let verb = match self.mode {
                    FormMode::Create => "created",
                    FormMode::Edit(_) => "updated",
                };
                notifier.success(&format!("{} {} successfully", capitalize(R::NAME), verb));
                self.error = None;
                self.open = false;
                Ok(saved)
            }
            Err(e) => {
                let action = match self.mode {
                    FormMode::Create => "create",
                    FormMode::Edit(_) => "update",
                };
                let message = e.user_message(&format!("Failed to {} {}", action, R::NAME));
                tracing::warn!(resource = R::NAME, error = %e, "submit failed");
                notifier.error(&message);
                self.error = Some(message);
                Err(e)
            }
        }
    }

    fn prepare(&self, existing: &[R]) -> ClientResult<Outgoing> {
        match &self.mode {
            FormMode::Create => {
                let mut draft = self.draft.clone();
                R::prepare_create(&mut draft, existing);
                Ok(Outgoing::Create(R::encode(&draft, &self.images)?))
            }
            FormMode::Edit(id) => Ok(Outgoing::Update(
                id.clone(),
                R::encode(&self.draft, &self.images)?,
            )),
        }
    }
}

/// Encoded request, detached from the form while it is in flight
enum Outgoing {
    Create(Payload),
    Update(String, Payload),
}

impl Outgoing {
    async fn send<R: Resource, H: HttpClient>(self, api: &ResourceApi<R, H>) -> ClientResult<R> {
        match self {
            Outgoing::Create(payload) => api.create(payload).await,
            Outgoing::Update(id, payload) => api.update(&id, payload).await,
        }
    }
}

/// Holds the submitting flag; clears it when dropped, even if the submit
/// future is abandoned mid-request
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> ClientResult<Self> {
        if *flag {
            return Err(ClientError::Busy);
        }
        *flag = true;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
