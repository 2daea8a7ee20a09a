use crate::http::ApiClient;
use crate::modules::resource;
use crate::modules::users::model::{CreateUserDto, UpdateUserDto, User};
use tracing::instrument;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_core::status::AccountStatus;
use vestry_models::UserId;
use vestry_models::identity::ActingUser;

const PATH: &str = "users";

pub struct UserService;

impl UserService {
    /// List a page of users. Degrades to an empty page on failure.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: &PageQuery) -> Page<User> {
        resource::list(api, PATH, query).await
    }

    /// Propagating variant of [`Self::list`].
    pub async fn try_list(api: &ApiClient, query: &PageQuery) -> Result<Page<User>, ApiError> {
        resource::try_list(api, PATH, query).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: UserId) -> Result<User, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    /// Create a user account. Gated on the acting user's role: the
    /// backend enforces this too, but checking here spares a round trip
    /// and gives the dialog the same ApiError shape either way.
    #[instrument(skip(api, dto))]
    pub async fn create(
        api: &ApiClient,
        acting: &ActingUser,
        dto: &CreateUserDto,
    ) -> Result<(), ApiError> {
        if !acting.role.can_manage_users() {
            return Err(ApiError::forbidden(anyhow::anyhow!(
                "role {:?} may not create user accounts",
                acting.role
            )));
        }
        resource::create(api, PATH, dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: UserId,
        dto: &UpdateUserDto,
    ) -> Result<User, ApiError> {
        resource::update(api, PATH, id.into_inner(), dto).await
    }

    /// Toggle a user between ACTIVE and DISABLED. Renders from the
    /// server's returned record, never the locally computed target.
    #[instrument(skip(api))]
    pub async fn change_status(
        api: &ApiClient,
        id: UserId,
        current: AccountStatus,
    ) -> Result<User, ApiError> {
        resource::change_status(api, PATH, id.into_inner(), current.toggled().as_str()).await
    }
}
