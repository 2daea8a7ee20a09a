use crate::http::ApiClient;
use crate::http::envelope::ListBody;
use crate::modules::resource;
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use tracing::{error, instrument};
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_core::status::AccountStatus;
use vestry_models::{ClassId, StudentId};

const PATH: &str = "students";

pub struct StudentService;

impl StudentService {
    /// List a page of students. Degrades to an empty page on failure.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: &PageQuery) -> Page<Student> {
        resource::list(api, PATH, query).await
    }

    /// Propagating variant of [`Self::list`].
    pub async fn try_list(api: &ApiClient, query: &PageQuery) -> Result<Page<Student>, ApiError> {
        resource::try_list(api, PATH, query).await
    }

    /// List the students of one class.
    ///
    /// This is the one endpoint that accepts a set of status tokens,
    /// sent comma-joined in a single `status` query parameter. An empty
    /// set means all statuses. Degrades to an empty page on failure,
    /// like every list read.
    #[instrument(skip(api))]
    pub async fn list_by_class(
        api: &ApiClient,
        class_id: ClassId,
        statuses: &[AccountStatus],
        query: &PageQuery,
    ) -> Page<Student> {
        match Self::try_list_by_class(api, class_id, statuses, query).await {
            Ok(page) => page,
            Err(err) => {
                error!(%class_id, error = %err, "students-by-class request failed, degrading to empty page");
                Page::empty()
            }
        }
    }

    pub async fn try_list_by_class(
        api: &ApiClient,
        class_id: ClassId,
        statuses: &[AccountStatus],
        query: &PageQuery,
    ) -> Result<Page<Student>, ApiError> {
        let mut pairs = vec![
            ("page", query.page().to_string()),
            ("size", query.size().to_string()),
        ];
        if !statuses.is_empty() {
            let joined = statuses
                .iter()
                .map(|status| status.as_str())
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("status", joined));
        }

        let body: ListBody<Student> = api
            .get_json(&format!("classes/{class_id}/students"), &pairs)
            .await?;
        Ok(body.into_page())
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: StudentId) -> Result<Student, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateStudentDto) -> Result<(), ApiError> {
        resource::create(api, PATH, dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: StudentId,
        dto: &UpdateStudentDto,
    ) -> Result<Student, ApiError> {
        resource::update(api, PATH, id.into_inner(), dto).await
    }

    /// Toggle a student between ACTIVE and DISABLED. Renders from the
    /// server's returned record, never the locally computed target.
    #[instrument(skip(api))]
    pub async fn change_status(
        api: &ApiClient,
        id: StudentId,
        current: AccountStatus,
    ) -> Result<Student, ApiError> {
        resource::change_status(api, PATH, id.into_inner(), current.toggled().as_str()).await
    }
}
