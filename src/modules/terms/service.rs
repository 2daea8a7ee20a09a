use crate::http::ApiClient;
use crate::modules::resource;
use crate::modules::terms::model::{CreateTermDto, Term, UpdateTermDto};
use tracing::instrument;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_core::status::AccountStatus;
use vestry_models::TermId;

const PATH: &str = "terms";

pub struct TermService;

impl TermService {
    /// List a page of terms. Degrades to an empty page on failure.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: &PageQuery) -> Page<Term> {
        resource::list(api, PATH, query).await
    }

    /// Propagating variant of [`Self::list`].
    pub async fn try_list(api: &ApiClient, query: &PageQuery) -> Result<Page<Term>, ApiError> {
        resource::try_list(api, PATH, query).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: TermId) -> Result<Term, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateTermDto) -> Result<(), ApiError> {
        resource::create(api, PATH, dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: TermId,
        dto: &UpdateTermDto,
    ) -> Result<Term, ApiError> {
        resource::update(api, PATH, id.into_inner(), dto).await
    }

    /// Toggle a term between ACTIVE and DISABLED. Renders from the
    /// server's returned record, never the locally computed target.
    #[instrument(skip(api))]
    pub async fn change_status(
        api: &ApiClient,
        id: TermId,
        current: AccountStatus,
    ) -> Result<Term, ApiError> {
        resource::change_status(api, PATH, id.into_inner(), current.toggled().as_str()).await
    }

    /// Advance the current term through the school's progression
    /// sequence. The progression itself is opaque to the console: the
    /// server decides which term comes next, and the caller reloads its
    /// listing after confirmation.
    #[instrument(skip(api))]
    pub async fn rotate(api: &ApiClient) -> Result<(), ApiError> {
        api.post_unit(&format!("{PATH}/rotate"), &[], None::<&()>)
            .await
    }
}
