use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, patch, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::{
    Applicant, ApplicantId, InterviewQuestion, InterviewQuestionId, MozipId, PaperQuestion,
    PaperQuestionId, UserId,
};
use super::filter::IdFilter;
use super::ranking::ApplicantSort;
use super::repository::RecruitmentRepository;
use super::service::{ApplicantService, QuestionService, ServiceError};
use super::views::{
    ApplicantListResponse, PaperAnswersResponse, QuestionUpdate, UpdateApplicantStatusRequest,
    UpdateApplicantStatusResponse,
};

/// Shared handler state: both services over one repository.
pub struct RecruitmentState<R> {
    pub applicants: Arc<ApplicantService<R>>,
    pub questions: Arc<QuestionService<R>>,
}

impl<R> RecruitmentState<R>
where
    R: RecruitmentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            applicants: Arc::new(ApplicantService::new(repository.clone())),
            questions: Arc::new(QuestionService::new(repository)),
        }
    }
}

impl<R> Clone for RecruitmentState<R> {
    fn clone(&self) -> Self {
        Self {
            applicants: self.applicants.clone(),
            questions: self.questions.clone(),
        }
    }
}

/// Router builder exposing applicant review and question maintenance endpoints.
pub fn recruitment_router<R>(state: RecruitmentState<R>) -> Router
where
    R: RecruitmentRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/applicants/:applicant_id",
            get(applicant_handler::<R>),
        )
        .route(
            "/api/v1/mozips/:mozip_id/applicants",
            get(applicant_list_handler::<R>),
        )
        .route(
            "/api/v1/mozips/:mozip_id/applicants/paper-status",
            patch(paper_status_handler::<R>),
        )
        .route(
            "/api/v1/mozips/:mozip_id/paper-answers",
            get(paper_answers_handler::<R>),
        )
        .route(
            "/api/v1/mozips/:mozip_id/interview-questions",
            get(interview_questions_handler::<R>),
        )
        .route(
            "/api/v1/paper-questions/:question_id",
            put(update_paper_question_handler::<R>),
        )
        .route(
            "/api/v1/interview-questions/:question_id",
            put(update_interview_question_handler::<R>),
        )
        .with_state(state)
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(error = %self, "recruitment request failed");
        }
        let payload = json!({ "error": self.to_string() });
        (status, Json(payload)).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ApplicantListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaperAnswerParams {
    pub evaluator_id: String,
    pub question_ids: Option<String>,
    pub applicant_ids: Option<String>,
}

pub(crate) async fn applicant_handler<R>(
    State(state): State<RecruitmentState<R>>,
    Path(applicant_id): Path<String>,
) -> Result<Json<Applicant>, ServiceError>
where
    R: RecruitmentRepository + 'static,
{
    let applicant = state
        .applicants
        .get_applicant(&ApplicantId(applicant_id))?;
    Ok(Json(applicant))
}

pub(crate) async fn applicant_list_handler<R>(
    State(state): State<RecruitmentState<R>>,
    Path(mozip_id): Path<String>,
    Query(params): Query<ApplicantListParams>,
) -> Result<Json<ApplicantListResponse>, ServiceError>
where
    R: RecruitmentRepository + 'static,
{
    let sort = ApplicantSort::from_params(params.sort_by.as_deref(), params.order.as_deref())?;
    let list = state.applicants.applicant_list(&MozipId(mozip_id), sort)?;
    Ok(Json(list.sorted()))
}

pub(crate) async fn paper_answers_handler<R>(
    State(state): State<RecruitmentState<R>>,
    Path(mozip_id): Path<String>,
    Query(params): Query<PaperAnswerParams>,
) -> Result<Json<PaperAnswersResponse>, ServiceError>
where
    R: RecruitmentRepository + 'static,
{
    let question_filter = IdFilter::<PaperQuestionId>::parse(params.question_ids.as_deref());
    let applicant_filter = IdFilter::<ApplicantId>::parse(params.applicant_ids.as_deref());

    let answers = state.applicants.paper_answers(
        &UserId(params.evaluator_id),
        &MozipId(mozip_id),
        &question_filter,
        &applicant_filter,
    )?;
    Ok(Json(answers))
}

pub(crate) async fn paper_status_handler<R>(
    State(state): State<RecruitmentState<R>>,
    Path(mozip_id): Path<String>,
    Json(request): Json<UpdateApplicantStatusRequest>,
) -> Result<Json<UpdateApplicantStatusResponse>, ServiceError>
where
    R: RecruitmentRepository + 'static,
{
    let confirmation = state
        .applicants
        .update_paper_statuses(&MozipId(mozip_id), request)?;
    Ok(Json(confirmation))
}

pub(crate) async fn interview_questions_handler<R>(
    State(state): State<RecruitmentState<R>>,
    Path(mozip_id): Path<String>,
) -> Result<Json<Vec<InterviewQuestion>>, ServiceError>
where
    R: RecruitmentRepository + 'static,
{
    let questions = state.questions.interview_questions(&MozipId(mozip_id))?;
    Ok(Json(questions))
}

pub(crate) async fn update_paper_question_handler<R>(
    State(state): State<RecruitmentState<R>>,
    Path(question_id): Path<String>,
    Json(update): Json<QuestionUpdate>,
) -> Result<Json<PaperQuestion>, ServiceError>
where
    R: RecruitmentRepository + 'static,
{
    let question = state
        .questions
        .update_paper_question(&PaperQuestionId(question_id), update)?;
    Ok(Json(question))
}

pub(crate) async fn update_interview_question_handler<R>(
    State(state): State<RecruitmentState<R>>,
    Path(question_id): Path<String>,
    Json(update): Json<QuestionUpdate>,
) -> Result<Json<InterviewQuestion>, ServiceError>
where
    R: RecruitmentRepository + 'static,
{
    let question = state
        .questions
        .update_interview_question(&InterviewQuestionId(question_id), update)?;
    Ok(Json(question))
}
