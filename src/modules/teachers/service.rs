use crate::http::ApiClient;
use crate::modules::resource;
use crate::modules::teachers::model::{
    AssignSubjectsDto, CreateTeacherDto, Teacher, UpdateTeacherDto,
};
use futures_util::future::join_all;
use tracing::instrument;
use vestry_core::batch::BatchOutcome;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_core::status::AccountStatus;
use vestry_models::{SubjectId, TeacherId};

const PATH: &str = "teachers";

pub struct TeacherService;

impl TeacherService {
    /// List a page of teachers. Degrades to an empty page on failure.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: &PageQuery) -> Page<Teacher> {
        resource::list(api, PATH, query).await
    }

    /// Propagating variant of [`Self::list`].
    pub async fn try_list(api: &ApiClient, query: &PageQuery) -> Result<Page<Teacher>, ApiError> {
        resource::try_list(api, PATH, query).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: TeacherId) -> Result<Teacher, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateTeacherDto) -> Result<(), ApiError> {
        resource::create(api, PATH, dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: TeacherId,
        dto: &UpdateTeacherDto,
    ) -> Result<Teacher, ApiError> {
        resource::update(api, PATH, id.into_inner(), dto).await
    }

    /// Toggle a teacher between ACTIVE and DISABLED. Renders from the
    /// server's returned record, never the locally computed target.
    #[instrument(skip(api))]
    pub async fn change_status(
        api: &ApiClient,
        id: TeacherId,
        current: AccountStatus,
    ) -> Result<Teacher, ApiError> {
        resource::change_status(api, PATH, id.into_inner(), current.toggled().as_str()).await
    }

    /// Assign a batch of subjects to a teacher in one request.
    #[instrument(skip(api))]
    pub async fn assign_subjects(
        api: &ApiClient,
        teacher_id: TeacherId,
        subject_ids: &[SubjectId],
    ) -> Result<(), ApiError> {
        let dto = AssignSubjectsDto {
            subject_ids: subject_ids.to_vec(),
        };
        api.post_unit(&format!("{PATH}/{teacher_id}/subjects"), &[], Some(&dto))
            .await
    }

    /// Unassign subjects from a teacher. One request per subject; the
    /// outcome can be partial and is returned in full.
    #[instrument(skip(api))]
    pub async fn unassign_subjects(
        api: &ApiClient,
        teacher_id: TeacherId,
        subject_ids: &[SubjectId],
    ) -> BatchOutcome<SubjectId> {
        let requests = subject_ids.iter().map(|subject_id| async move {
            let result = api
                .delete_unit(&format!("{PATH}/{teacher_id}/subjects/{subject_id}"))
                .await;
            (*subject_id, result)
        });
        BatchOutcome::collect(join_all(requests).await)
    }
}
