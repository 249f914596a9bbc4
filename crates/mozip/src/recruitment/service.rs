use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info, warn};

use super::domain::{
    Applicant, ApplicantId, EvaluationId, InterviewQuestion, InterviewQuestionId, Mozip, MozipId,
    PaperAnswerId, PaperQuestion, PaperQuestionId, User, UserId,
};
use super::filter::IdFilter;
use super::ranking::{ApplicantSort, InvalidSort};
use super::repository::{RecruitmentRepository, RepositoryError};
use super::views::{
    ApplicantListResponse, ApplicantSummary, PaperAnswersResponse, PaperQuestionWithAnswers,
    QuestionUpdate, ScoredPaperAnswer, UpdateApplicantStatusRequest,
    UpdateApplicantStatusResponse,
};

/// Read and update queries that join across applicant, question, and evaluation records.
pub struct ApplicantService<R> {
    repository: Arc<R>,
}

impl<R> ApplicantService<R>
where
    R: RecruitmentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetch a single applicant regardless of recruitment cycle.
    pub fn get_applicant(&self, applicant_id: &ApplicantId) -> Result<Applicant, ServiceError> {
        self.repository
            .find_applicant(applicant_id)?
            .ok_or_else(|| ServiceError::EntityNotFound {
                entity: "applicant",
                id: applicant_id.to_string(),
            })
    }

    /// Every applicant of a cycle with the sum of all evaluators' paper scores.
    ///
    /// `sort` is recorded on the response; rows stay in storage order until
    /// the caller applies [`ApplicantListResponse::sorted`].
    pub fn applicant_list(
        &self,
        mozip_id: &MozipId,
        sort: ApplicantSort,
    ) -> Result<ApplicantListResponse, ServiceError> {
        let mozip = self.require_mozip(mozip_id)?;
        let applicants = self.repository.applicants_by_mozip(&mozip.id)?;

        let summaries = applicants
            .iter()
            .map(|applicant| -> Result<ApplicantSummary, ServiceError> {
                let total_paper_score: i64 = self
                    .repository
                    .evaluations_by_applicant(&applicant.id)?
                    .iter()
                    .map(|evaluation| i64::from(evaluation.paper_score))
                    .sum();
                Ok(ApplicantSummary::from_applicant(applicant, total_paper_score))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(%mozip_id, applicants = summaries.len(), "computed applicant totals");
        Ok(ApplicantListResponse::new(&mozip, sort, summaries))
    }

    /// Paper answers grouped by question, each carrying the evaluator's own score.
    ///
    /// Every retained answer must already be scored by `evaluator_id`; the first
    /// missing evaluation aborts the whole query.
    pub fn paper_answers(
        &self,
        evaluator_id: &UserId,
        mozip_id: &MozipId,
        question_filter: &IdFilter<PaperQuestionId>,
        applicant_filter: &IdFilter<ApplicantId>,
    ) -> Result<PaperAnswersResponse, ServiceError> {
        let evaluator = self.require_user(evaluator_id)?;

        let questions: Vec<PaperQuestion> = self
            .repository
            .paper_questions_by_mozip(mozip_id)?
            .into_iter()
            .filter(|question| question_filter.allows(&question.id))
            .collect();

        let mut groups = Vec::with_capacity(questions.len());
        for question in &questions {
            let answers = self
                .repository
                .paper_answers_by_question(&question.id)?
                .into_iter()
                .filter(|answer| applicant_filter.allows(&answer.applicant_id));

            let mut scored = Vec::new();
            for answer in answers {
                let evaluation = self
                    .repository
                    .find_evaluation(&evaluator.id, &answer.applicant_id)?
                    .ok_or_else(|| ServiceError::EvaluationNotFound {
                        evaluator_id: evaluator.id.clone(),
                        applicant_id: answer.applicant_id.clone(),
                    })?;

                let paper_evaluation = self
                    .repository
                    .find_paper_evaluation(&answer.id, &evaluation.id)?
                    .ok_or_else(|| ServiceError::PaperEvaluationNotFound {
                        evaluation_id: evaluation.id.clone(),
                        answer_id: answer.id.clone(),
                    })?;

                scored.push(ScoredPaperAnswer::from_answer(&answer, paper_evaluation.score));
            }

            groups.push(PaperQuestionWithAnswers::from_question(question, scored));
        }

        debug!(
            evaluator = %evaluator.id,
            %mozip_id,
            questions = groups.len(),
            "resolved scored paper answers"
        );
        Ok(PaperAnswersResponse { questions: groups })
    }

    /// Apply paper-review statuses in request order.
    ///
    /// Each change is saved as soon as its applicant resolves. A failure stops
    /// the batch and leaves earlier changes from the same call in place.
    pub fn update_paper_statuses(
        &self,
        mozip_id: &MozipId,
        request: UpdateApplicantStatusRequest,
    ) -> Result<UpdateApplicantStatusResponse, ServiceError> {
        let mozip = self.require_mozip(mozip_id)?;
        let requested = request.applicants.len();

        for (applied, change) in request.applicants.into_iter().enumerate() {
            let mut applicant = match self
                .repository
                .find_applicant_in_mozip(&change.applicant_id, &mozip.id)?
            {
                Some(applicant) => applicant,
                None => {
                    warn!(
                        %mozip_id,
                        applicant_id = %change.applicant_id,
                        applied,
                        requested,
                        "status batch stopped on unknown applicant"
                    );
                    return Err(ServiceError::ApplicantNotFound {
                        applicant_id: change.applicant_id,
                        mozip_id: mozip.id,
                    });
                }
            };

            applicant.paper_status = change.status;
            self.repository.save_applicant(applicant)?;
        }

        info!(%mozip_id, updated = requested, "paper statuses updated");
        Ok(UpdateApplicantStatusResponse {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }

    fn require_mozip(&self, mozip_id: &MozipId) -> Result<Mozip, ServiceError> {
        self.repository
            .find_mozip(mozip_id)?
            .ok_or_else(|| ServiceError::MozipNotFound(mozip_id.clone()))
    }

    fn require_user(&self, user_id: &UserId) -> Result<User, ServiceError> {
        self.repository
            .find_user(user_id)?
            .ok_or_else(|| ServiceError::UserNotFound(user_id.clone()))
    }
}

/// Question maintenance for paper and interview questionnaires.
pub struct QuestionService<R> {
    repository: Arc<R>,
}

impl<R> QuestionService<R>
where
    R: RecruitmentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn update_paper_question(
        &self,
        question_id: &PaperQuestionId,
        update: QuestionUpdate,
    ) -> Result<PaperQuestion, ServiceError> {
        validate_question(&update)?;
        let mut question = self
            .repository
            .find_paper_question(question_id)?
            .ok_or_else(|| ServiceError::PaperQuestionNotFound(question_id.clone()))?;

        question.update_question(update.question, update.details, update.is_required);
        self.repository.save_paper_question(question.clone())?;

        info!(question_id = %question.id, "paper question updated");
        Ok(question)
    }

    /// Interview questions of a cycle by `question_no`; unnumbered ones trail in storage order.
    pub fn interview_questions(
        &self,
        mozip_id: &MozipId,
    ) -> Result<Vec<InterviewQuestion>, ServiceError> {
        if self.repository.find_mozip(mozip_id)?.is_none() {
            return Err(ServiceError::MozipNotFound(mozip_id.clone()));
        }

        let mut questions = self.repository.interview_questions_by_mozip(mozip_id)?;
        questions.sort_by_key(|question| (question.question_no.is_none(), question.question_no));
        Ok(questions)
    }

    pub fn update_interview_question(
        &self,
        question_id: &InterviewQuestionId,
        update: QuestionUpdate,
    ) -> Result<InterviewQuestion, ServiceError> {
        validate_question(&update)?;
        let mut question = self
            .repository
            .find_interview_question(question_id)?
            .ok_or_else(|| ServiceError::InterviewQuestionNotFound(question_id.clone()))?;

        question.update_question(update.question, update.details, update.is_required);
        self.repository.save_interview_question(question.clone())?;

        info!(question_id = %question.id, "interview question updated");
        Ok(question)
    }
}

fn validate_question(update: &QuestionUpdate) -> Result<(), ServiceError> {
    if update.question.trim().is_empty() {
        return Err(ServiceError::InvalidQuestion(
            "question text must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// Error raised by the recruitment services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{entity} not found: {id}")]
    EntityNotFound { entity: &'static str, id: String },
    #[error("mozip not found: {0}")]
    MozipNotFound(MozipId),
    #[error("applicant {applicant_id} not found in mozip {mozip_id}")]
    ApplicantNotFound {
        applicant_id: ApplicantId,
        mozip_id: MozipId,
    },
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    #[error("evaluator {evaluator_id} has no evaluation for applicant {applicant_id}")]
    EvaluationNotFound {
        evaluator_id: UserId,
        applicant_id: ApplicantId,
    },
    #[error("evaluation {evaluation_id} has no score for paper answer {answer_id}")]
    PaperEvaluationNotFound {
        evaluation_id: EvaluationId,
        answer_id: PaperAnswerId,
    },
    #[error("paper question not found: {0}")]
    PaperQuestionNotFound(PaperQuestionId),
    #[error("interview question not found: {0}")]
    InterviewQuestionNotFound(InterviewQuestionId),
    #[error("invalid question: {0}")]
    InvalidQuestion(String),
    #[error(transparent)]
    InvalidSort(#[from] InvalidSort),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::EntityNotFound { .. }
            | ServiceError::MozipNotFound(_)
            | ServiceError::ApplicantNotFound { .. }
            | ServiceError::UserNotFound(_)
            | ServiceError::EvaluationNotFound { .. }
            | ServiceError::PaperEvaluationNotFound { .. }
            | ServiceError::PaperQuestionNotFound(_)
            | ServiceError::InterviewQuestionNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidQuestion(_) | ServiceError::InvalidSort(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Repository(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
            ServiceError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}
