use crate::http::ApiClient;
use crate::modules::resource;
use crate::modules::sessions::model::{CreateSessionDto, Session, UpdateSessionDto};
use tracing::instrument;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_core::status::AccountStatus;
use vestry_models::SessionId;

const PATH: &str = "sessions";

pub struct SessionService;

impl SessionService {
    /// List a page of academic sessions. Degrades to an empty page on
    /// failure.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: &PageQuery) -> Page<Session> {
        resource::list(api, PATH, query).await
    }

    /// Propagating variant of [`Self::list`].
    pub async fn try_list(api: &ApiClient, query: &PageQuery) -> Result<Page<Session>, ApiError> {
        resource::try_list(api, PATH, query).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: SessionId) -> Result<Session, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateSessionDto) -> Result<(), ApiError> {
        resource::create(api, PATH, dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: SessionId,
        dto: &UpdateSessionDto,
    ) -> Result<Session, ApiError> {
        resource::update(api, PATH, id.into_inner(), dto).await
    }

    /// Toggle a session between ACTIVE and DISABLED. Renders from the
    /// server's returned record, never the locally computed target.
    #[instrument(skip(api))]
    pub async fn change_status(
        api: &ApiClient,
        id: SessionId,
        current: AccountStatus,
    ) -> Result<Session, ApiError> {
        resource::change_status(api, PATH, id.into_inner(), current.toggled().as_str()).await
    }
}
