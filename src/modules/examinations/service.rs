use crate::http::ApiClient;
use crate::modules::examinations::model::{
    ClassExam, CreateClassExamDto, CreateExamDto, Examination, UpdateExamDto,
};
use crate::modules::resource;
use tracing::instrument;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_core::status::{AccountStatus, ExamStatus};
use vestry_models::{ClassExamId, ExamId};

const PATH: &str = "examinations";
const CLASS_EXAM_PATH: &str = "class-exams";

pub struct ExamService;

impl ExamService {
    /// List a page of examinations. Degrades to an empty page on failure.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: &PageQuery) -> Page<Examination> {
        resource::list(api, PATH, query).await
    }

    /// Propagating variant of [`Self::list`].
    pub async fn try_list(
        api: &ApiClient,
        query: &PageQuery,
    ) -> Result<Page<Examination>, ApiError> {
        resource::try_list(api, PATH, query).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: ExamId) -> Result<Examination, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateExamDto) -> Result<(), ApiError> {
        resource::create(api, PATH, dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: ExamId,
        dto: &UpdateExamDto,
    ) -> Result<Examination, ApiError> {
        resource::update(api, PATH, id.into_inner(), dto).await
    }

    /// Delete an examination. One-way: the target is always DISABLED,
    /// whatever the row claimed its current status was.
    #[instrument(skip(api))]
    pub async fn delete(
        api: &ApiClient,
        id: ExamId,
        current: ExamStatus,
    ) -> Result<Examination, ApiError> {
        resource::change_status(api, PATH, id.into_inner(), current.retired().as_str()).await
    }

    /// Trigger the publish/unpublish visibility rotation. The rotation
    /// itself is computed server-side; the returned record is the
    /// state to render.
    #[instrument(skip(api))]
    pub async fn publish(api: &ApiClient, id: ExamId) -> Result<Examination, ApiError> {
        api.post_json(&format!("{PATH}/{id}/publish"), &[], None::<&()>)
            .await
    }
}

pub struct ClassExamService;

impl ClassExamService {
    /// List the class sittings of one examination. Degrades to an empty
    /// page on failure.
    #[instrument(skip(api))]
    pub async fn list_for_exam(
        api: &ApiClient,
        exam_id: ExamId,
        query: &PageQuery,
    ) -> Page<ClassExam> {
        resource::list(api, &format!("{PATH}/{exam_id}/classes"), query).await
    }

    /// Schedule a class into an examination.
    #[instrument(skip(api, dto))]
    pub async fn schedule(api: &ApiClient, dto: &CreateClassExamDto) -> Result<(), ApiError> {
        resource::create(api, CLASS_EXAM_PATH, dto).await
    }

    /// Cancel a sitting by disabling the schedule row.
    #[instrument(skip(api))]
    pub async fn cancel(api: &ApiClient, id: ClassExamId) -> Result<ClassExam, ApiError> {
        resource::change_status(
            api,
            CLASS_EXAM_PATH,
            id.into_inner(),
            AccountStatus::Disabled.as_str(),
        )
        .await
    }
}
