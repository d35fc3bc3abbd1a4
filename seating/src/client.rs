//! reqwest implementation of [`SeatingBackend`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use shared_http::api::{
    AllocationStatsQuery, AllocationStatsResponse, AllotResponse, AllotmentRecord, Block,
    CreateHallRequest, ErrorResponse, Exam, ExamDate, ExamQuery, Hall, HallAllocationResponse,
    HallSeatsResponse, HallTicketResponse, HealthResponse, Listing, RunAllocationRequest,
    RunAllocationResponse, StatsResponse, StudentQuery, StudentRef, StudentRow, UploadResponse,
};
use strum_macros::{Display, EnumIter};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::ports::SeatingBackend;
use crate::upload::{UPLOAD_TIMEOUT, UploadFile, UploadKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ReportKind {
    #[strum(serialize = "excel")]
    Excel,
    #[strum(serialize = "pdf")]
    Pdf,
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    upload_timeout: Duration,
}

impl HttpBackend {
    /// `base_url` is the gateway (or backend) origin; `/api/...` is appended per call.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidInput(format!("invalid base url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidInput(format!(
                "invalid base url '{base_url}'"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            upload_timeout: UPLOAD_TIMEOUT,
        })
    }

    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Download link for a generated report.
    pub fn report_url(&self, kind: ReportKind) -> String {
        self.endpoint(&["reports", &kind.to_string()]).to_string()
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.endpoint(segments);
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn get_with<T, Q>(&self, segments: &[&str], query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.endpoint(segments);
        debug!(%url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        decode(response).await
    }

    async fn post<T, B>(&self, segments: &[&str], body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.endpoint(segments);
        debug!(%url, "POST");
        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        decode(request.send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        // The request deadline also covers the body, so a stall here is a timeout.
        return response.json::<T>().await.map_err(ApiError::from);
    }

    let message = response.json::<ErrorResponse>().await.ok().map(|e| e.error);
    warn!(status = status.as_u16(), ?message, "backend returned an error");
    Err(ApiError::status(status.as_u16(), message))
}

#[cfg(not(target_arch = "wasm32"))]
async fn send_with_deadline(request: RequestBuilder, deadline: Duration) -> ApiResult<Response> {
    Ok(request.timeout(deadline).send().await?)
}

// Dropping the in-flight fetch aborts it.
#[cfg(target_arch = "wasm32")]
async fn send_with_deadline(request: RequestBuilder, deadline: Duration) -> ApiResult<Response> {
    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;

    let millis = u32::try_from(deadline.as_millis()).unwrap_or(u32::MAX);
    let send = Box::pin(request.send());
    match select(send, TimeoutFuture::new(millis)).await {
        Either::Left((result, _)) => Ok(result?),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SeatingBackend for HttpBackend {
    async fn health(&self) -> ApiResult<HealthResponse> {
        self.get(&["health"]).await
    }

    async fn stats(&self) -> ApiResult<StatsResponse> {
        self.get(&["stats"]).await
    }

    async fn list_blocks(&self) -> ApiResult<Vec<Block>> {
        self.get::<Listing<Block>>(&["blocks"])
            .await
            .map(Listing::into_vec)
    }

    async fn list_halls(&self, block: Option<&str>) -> ApiResult<Vec<Hall>> {
        let listing: Listing<Hall> = match block {
            Some(block) => self.get_with(&["halls"], &[("block", block)]).await?,
            None => self.get(&["halls"]).await?,
        };
        Ok(listing.into_vec())
    }

    async fn create_hall(&self, request: &CreateHallRequest) -> ApiResult<Hall> {
        self.post(&["halls"], Some(request)).await
    }

    async fn delete_hall(&self, id: i64) -> ApiResult<()> {
        let url = self.endpoint(&["halls", &id.to_string()]);
        debug!(%url, "DELETE");
        let response = self.client.delete(url).send().await?;
        decode::<serde_json::Value>(response).await.map(|_| ())
    }

    async fn hall_seats(&self, hall: &str) -> ApiResult<HallSeatsResponse> {
        self.get(&["halls", hall, "seats"]).await
    }

    async fn find_student(&self, query: &str) -> ApiResult<StudentRef> {
        self.get(&["students", query]).await
    }

    async fn list_students(&self, query: &StudentQuery) -> ApiResult<Vec<StudentRow>> {
        self.get_with::<Listing<StudentRow>, _>(&["students"], query)
            .await
            .map(Listing::into_vec)
    }

    async fn list_exams(&self, query: &ExamQuery) -> ApiResult<Vec<Exam>> {
        self.get_with(&["exams"], query).await
    }

    async fn exam_dates(&self, year: u8) -> ApiResult<Vec<ExamDate>> {
        self.get_with(&["exams", "dates"], &[("year", year)]).await
    }

    async fn list_allotments(&self) -> ApiResult<Vec<AllotmentRecord>> {
        self.get(&["allotments"]).await
    }

    async fn run_allotment(&self) -> ApiResult<AllotResponse> {
        self.post::<_, ()>(&["allot"], None).await
    }

    async fn hall_ticket(&self, reg_no: &str) -> ApiResult<HallTicketResponse> {
        self.get_with(&["search"], &[("reg_no", reg_no)]).await
    }

    async fn allocation_stats(
        &self,
        query: &AllocationStatsQuery,
    ) -> ApiResult<AllocationStatsResponse> {
        self.get_with(&["allocation", "stats"], query).await
    }

    async fn hall_allocation(&self, hall: &str, year: u8) -> ApiResult<HallAllocationResponse> {
        self.get_with(&["allocation", "hall", hall], &[("year", year)])
            .await
    }

    async fn run_allocation(
        &self,
        request: &RunAllocationRequest,
    ) -> ApiResult<RunAllocationResponse> {
        self.post(&["allocation", "run"], Some(request)).await
    }

    async fn upload(&self, kind: UploadKind, files: Vec<UploadFile>) -> ApiResult<UploadResponse> {
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.name)
                .mime_str("application/pdf")?;
            form = form.part("files", part);
        }

        let url = self.endpoint(&["upload", kind.as_ref()]);
        debug!(%url, timeout = ?self.upload_timeout, "POST multipart");
        let request = self.client.post(url).multipart(form);
        let response = send_with_deadline(request, self.upload_timeout).await?;
        decode(response).await
    }
}
