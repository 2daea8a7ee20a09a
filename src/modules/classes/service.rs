use crate::http::ApiClient;
use crate::modules::classes::model::{Class, CreateClassDto, UpdateClassDto};
use crate::modules::resource;
use tracing::instrument;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_core::status::ClassStatus;

const PATH: &str = "classes";

pub struct ClassService;

impl ClassService {
    /// List a page of classes. Degrades to an empty page on failure.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: &PageQuery) -> Page<Class> {
        resource::list(api, PATH, query).await
    }

    /// Propagating variant of [`Self::list`].
    pub async fn try_list(api: &ApiClient, query: &PageQuery) -> Result<Page<Class>, ApiError> {
        resource::try_list(api, PATH, query).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: vestry_models::ClassId) -> Result<Class, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateClassDto) -> Result<(), ApiError> {
        resource::create(api, PATH, dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: vestry_models::ClassId,
        dto: &UpdateClassDto,
    ) -> Result<Class, ApiError> {
        resource::update(api, PATH, id.into_inner(), dto).await
    }

    /// Toggle a class between ONGOING and GRADUATED.
    ///
    /// The target is computed from the row the user acted on, so it is
    /// advisory only; the returned record is the server's authoritative
    /// state and is what the screen must render.
    #[instrument(skip(api))]
    pub async fn change_status(
        api: &ApiClient,
        id: vestry_models::ClassId,
        current: ClassStatus,
    ) -> Result<Class, ApiError> {
        resource::change_status(api, PATH, id.into_inner(), current.toggled().as_str()).await
    }
}
