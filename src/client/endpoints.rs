//! One method per Pingen endpoint, grouped by resource family.

use std::path::Path;

use serde::Serialize;

use super::{HttpMethod, Payload, PingenClient, PingenError};
use crate::domain::{
    FaxCalculation, ListOptions, PostCalculation, PreviewOptions, SendOptions, ServiceResponse,
    SpeedLookup, UploadOptions,
};
use crate::transport::{
    Parameters, Resource, account_path, action_path, encode_parameters, fax_calculator_path,
    id_path, list_path, post_calculator_path, preview_path, send_parameters, speed_path,
    upload_parameters,
};

fn body_parameters<T: Serialize + ?Sized>(data: &T) -> Result<Parameters, PingenError> {
    encode_parameters(data).map_err(|err| PingenError::Encoding(Box::new(err)))
}

impl PingenClient {
    async fn get(&self, path: String) -> Result<ServiceResponse, PingenError> {
        self.execute(HttpMethod::Get, path, Payload::None).await
    }

    async fn post(
        &self,
        path: String,
        params: Parameters,
    ) -> Result<ServiceResponse, PingenError> {
        self.execute(HttpMethod::Post, path, Payload::Parameters(params))
            .await
    }

    // Documents

    /// List uploaded documents (`document/list`, sorted by `date` unless overridden).
    pub async fn document_list(
        &self,
        options: &ListOptions,
    ) -> Result<ServiceResponse, PingenError> {
        self.get(list_path(Resource::Document, options)).await
    }

    /// Fetch a single document.
    pub async fn document_get(&self, document_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Document, "get", document_id))
            .await
    }

    /// Download a document; a successful call yields [`ServiceResponse::Binary`] with a PDF.
    pub async fn document_pdf(&self, document_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Document, "pdf", document_id))
            .await
    }

    /// Render one page of a document as PNG.
    pub async fn document_preview(
        &self,
        document_id: u64,
        options: PreviewOptions,
    ) -> Result<ServiceResponse, PingenError> {
        self.get(preview_path(Resource::Document, document_id, &options))
            .await
    }

    pub async fn document_delete(&self, document_id: u64) -> Result<ServiceResponse, PingenError> {
        self.post(
            id_path(Resource::Document, "delete", document_id),
            Parameters::new(),
        )
        .await
    }

    /// Send an uploaded document by post.
    pub async fn document_send(
        &self,
        document_id: u64,
        options: SendOptions,
    ) -> Result<ServiceResponse, PingenError> {
        self.post(
            id_path(Resource::Document, "send", document_id),
            send_parameters(&options),
        )
        .await
    }

    /// Upload a file from disk and optionally send it right away.
    ///
    /// The file is attached as multipart field `file` under its base name, the options as the
    /// JSON-encoded `data` field.
    ///
    /// Errors:
    /// - Returns [`PingenError::File`] when the file cannot be read (no request is sent).
    pub async fn document_upload(
        &self,
        path: impl AsRef<Path>,
        options: UploadOptions,
    ) -> Result<ServiceResponse, PingenError> {
        self.execute(
            HttpMethod::Post,
            action_path(Resource::Document, "upload"),
            Payload::UploadFile {
                path: path.as_ref(),
                params: upload_parameters(&options),
            },
        )
        .await
    }

    /// Upload in-memory file content, see [`PingenClient::document_upload`].
    pub async fn document_upload_bytes(
        &self,
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
        options: UploadOptions,
    ) -> Result<ServiceResponse, PingenError> {
        self.execute(
            HttpMethod::Post,
            action_path(Resource::Document, "upload"),
            Payload::UploadBytes {
                file_name: file_name.into(),
                content: content.into(),
                params: upload_parameters(&options),
            },
        )
        .await
    }

    // Letters

    /// List letters (`letter/list`, sorted by `date` unless overridden).
    pub async fn letter_list(&self, options: &ListOptions) -> Result<ServiceResponse, PingenError> {
        self.get(list_path(Resource::Letter, options)).await
    }

    pub async fn letter_get(&self, letter_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Letter, "get", letter_id)).await
    }

    /// Create a letter from body parameters (recipients, place, date, title, content, ...).
    ///
    /// `data` must serialize to a JSON object.
    pub async fn letter_add<T: Serialize + ?Sized>(
        &self,
        data: &T,
    ) -> Result<ServiceResponse, PingenError> {
        let params = body_parameters(data)?;
        self.post(action_path(Resource::Letter, "add"), params)
            .await
    }

    pub async fn letter_edit<T: Serialize + ?Sized>(
        &self,
        letter_id: u64,
        data: &T,
    ) -> Result<ServiceResponse, PingenError> {
        let params = body_parameters(data)?;
        self.post(id_path(Resource::Letter, "edit", letter_id), params)
            .await
    }

    /// Render one page of a letter as PNG.
    pub async fn letter_preview(
        &self,
        letter_id: u64,
        options: PreviewOptions,
    ) -> Result<ServiceResponse, PingenError> {
        self.get(preview_path(Resource::Letter, letter_id, &options))
            .await
    }

    pub async fn letter_pdf(&self, letter_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Letter, "pdf", letter_id)).await
    }

    pub async fn letter_send(
        &self,
        letter_id: u64,
        options: SendOptions,
    ) -> Result<ServiceResponse, PingenError> {
        self.post(
            id_path(Resource::Letter, "send", letter_id),
            send_parameters(&options),
        )
        .await
    }

    pub async fn letter_delete(&self, letter_id: u64) -> Result<ServiceResponse, PingenError> {
        self.post(
            id_path(Resource::Letter, "delete", letter_id),
            Parameters::new(),
        )
        .await
    }

    // Sendings

    /// List postal sendings (`send/list`, sorted by `date` unless overridden).
    pub async fn send_list(&self, options: &ListOptions) -> Result<ServiceResponse, PingenError> {
        self.get(list_path(Resource::Send, options)).await
    }

    pub async fn send_get(&self, send_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Send, "get", send_id)).await
    }

    /// Retrieve the send confirmation document.
    pub async fn send_confirmation(&self, send_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Send, "confirmation", send_id))
            .await
    }

    pub async fn send_cancel(&self, send_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Send, "cancel", send_id)).await
    }

    /// Tracking information, where the carrier provides it.
    pub async fn send_track(&self, send_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Send, "track", send_id)).await
    }

    /// Available delivery speeds for one or more countries.
    pub async fn send_speed(&self, lookup: &SpeedLookup) -> Result<ServiceResponse, PingenError> {
        self.get(speed_path(lookup)).await
    }

    // Queue

    /// List queue entries (`queue/list`, sorted by `date` unless overridden).
    pub async fn queue_list(&self, options: &ListOptions) -> Result<ServiceResponse, PingenError> {
        self.get(list_path(Resource::Queue, options)).await
    }

    pub async fn queue_get(&self, queue_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Queue, "get", queue_id)).await
    }

    /// Cancel a pending queue entry.
    pub async fn queue_cancel(&self, queue_id: u64) -> Result<ServiceResponse, PingenError> {
        self.post(
            id_path(Resource::Queue, "cancel", queue_id),
            Parameters::new(),
        )
        .await
    }

    /// Cancel a pending queue entry with additional body parameters.
    pub async fn queue_cancel_with<T: Serialize + ?Sized>(
        &self,
        queue_id: u64,
        data: &T,
    ) -> Result<ServiceResponse, PingenError> {
        let params = body_parameters(data)?;
        self.post(id_path(Resource::Queue, "cancel", queue_id), params)
            .await
    }

    // Contacts

    /// List contacts (`contact/list`, sorted by `id` unless overridden).
    pub async fn contact_list(
        &self,
        options: &ListOptions,
    ) -> Result<ServiceResponse, PingenError> {
        self.get(list_path(Resource::Contact, options)).await
    }

    pub async fn contact_get(&self, contact_id: u64) -> Result<ServiceResponse, PingenError> {
        self.get(id_path(Resource::Contact, "get", contact_id))
            .await
    }

    /// Create a contact; `data` must serialize to a JSON object.
    pub async fn contact_add<T: Serialize + ?Sized>(
        &self,
        data: &T,
    ) -> Result<ServiceResponse, PingenError> {
        let params = body_parameters(data)?;
        self.post(action_path(Resource::Contact, "add"), params)
            .await
    }

    pub async fn contact_edit<T: Serialize + ?Sized>(
        &self,
        contact_id: u64,
        data: &T,
    ) -> Result<ServiceResponse, PingenError> {
        let params = body_parameters(data)?;
        self.post(id_path(Resource::Contact, "edit", contact_id), params)
            .await
    }

    pub async fn contact_delete(&self, contact_id: u64) -> Result<ServiceResponse, PingenError> {
        self.post(
            id_path(Resource::Contact, "delete", contact_id),
            Parameters::new(),
        )
        .await
    }

    // Calculator & account

    /// Price of a fax sending.
    pub async fn calculator_fax(
        &self,
        calculation: &FaxCalculation,
    ) -> Result<ServiceResponse, PingenError> {
        self.get(fax_calculator_path(calculation)).await
    }

    /// Price of a postal sending.
    pub async fn calculator_post(
        &self,
        calculation: &PostCalculation,
    ) -> Result<ServiceResponse, PingenError> {
        self.get(post_calculator_path(calculation)).await
    }

    /// Current account credit.
    pub async fn account_credit(&self) -> Result<ServiceResponse, PingenError> {
        self.get(account_path("credit")).await
    }

    /// Current account plan.
    pub async fn account_plan(&self) -> Result<ServiceResponse, PingenError> {
        self.get(account_path("plan")).await
    }
}
