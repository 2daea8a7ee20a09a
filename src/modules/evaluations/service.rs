use crate::http::ApiClient;
use crate::modules::evaluations::model::{
    CreateEvaluationDto, StudentEvaluation, UpdateEvaluationDto,
};
use crate::modules::resource;
use tracing::instrument;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};
use vestry_models::{EvaluationId, StudentId};

const PATH: &str = "evaluations";

pub struct EvaluationService;

impl EvaluationService {
    /// List the evaluations of one student. Degrades to an empty page
    /// on failure.
    #[instrument(skip(api))]
    pub async fn list_for_student(
        api: &ApiClient,
        student_id: StudentId,
        query: &PageQuery,
    ) -> Page<StudentEvaluation> {
        resource::list(api, &format!("students/{student_id}/evaluations"), query).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: EvaluationId) -> Result<StudentEvaluation, ApiError> {
        resource::fetch_one(api, PATH, id.into_inner()).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateEvaluationDto) -> Result<(), ApiError> {
        resource::create(api, PATH, dto).await
    }

    /// Partially update an evaluation. PATCH semantics: only the keys
    /// present in the DTO travel, and the backend merges them.
    #[instrument(skip(api, dto))]
    pub async fn update_partial(
        api: &ApiClient,
        id: EvaluationId,
        dto: &UpdateEvaluationDto,
    ) -> Result<StudentEvaluation, ApiError> {
        resource::patch(api, PATH, id.into_inner(), dto).await
    }
}
