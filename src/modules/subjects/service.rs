use crate::http::ApiClient;
use crate::modules::resource;
use crate::modules::subjects::model::{
    AssignClassesDto, CreateSubjectDto, Subject, UpdateSubjectDto,
};
use futures_util::future::join_all;
use tracing::instrument;
use vestry_core::batch::BatchOutcome;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_core::status::SubjectStatus;
use vestry_models::{ClassId, SubjectId};

const PATH: &str = "subjects";

pub struct SubjectService;

impl SubjectService {
    /// List a page of subjects. Degrades to an empty page on failure.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: &PageQuery) -> Page<Subject> {
        resource::list(api, PATH, query).await
    }

    /// Propagating variant of [`Self::list`].
    pub async fn try_list(api: &ApiClient, query: &PageQuery) -> Result<Page<Subject>, ApiError> {
        resource::try_list(api, PATH, query).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: SubjectId) -> Result<Subject, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateSubjectDto) -> Result<(), ApiError> {
        resource::create(api, PATH, dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: SubjectId,
        dto: &UpdateSubjectDto,
    ) -> Result<Subject, ApiError> {
        resource::update(api, PATH, id.into_inner(), dto).await
    }

    /// Delete a subject. One-way: the target is always DELETED, whatever
    /// the row claimed its current status was.
    #[instrument(skip(api))]
    pub async fn delete(
        api: &ApiClient,
        id: SubjectId,
        current: SubjectStatus,
    ) -> Result<Subject, ApiError> {
        resource::change_status(api, PATH, id.into_inner(), current.retired().as_str()).await
    }

    /// Assign a batch of classes to a subject in one request.
    #[instrument(skip(api))]
    pub async fn assign_classes(
        api: &ApiClient,
        subject_id: SubjectId,
        class_ids: &[ClassId],
    ) -> Result<(), ApiError> {
        let dto = AssignClassesDto {
            class_ids: class_ids.to_vec(),
        };
        api.post_unit(&format!("{PATH}/{subject_id}/classes"), &[], Some(&dto))
            .await
    }

    /// Unassign classes from a subject.
    ///
    /// The backend only exposes a per-child delete, so this fires one
    /// request per class and the outcome can be partial. The split is
    /// returned in full; a dialog must report the failed IDs rather
    /// than toasting success while some remain assigned.
    #[instrument(skip(api))]
    pub async fn unassign_classes(
        api: &ApiClient,
        subject_id: SubjectId,
        class_ids: &[ClassId],
    ) -> BatchOutcome<ClassId> {
        let requests = class_ids.iter().map(|class_id| async move {
            let result = api
                .delete_unit(&format!("{PATH}/{subject_id}/classes/{class_id}"))
                .await;
            (*class_id, result)
        });
        BatchOutcome::collect(join_all(requests).await)
    }
}
