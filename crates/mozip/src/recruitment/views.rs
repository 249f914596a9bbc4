use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    Applicant, ApplicantId, Mozip, MozipId, PaperAnswer, PaperAnswerId, PaperQuestion,
    PaperQuestionId, PaperStatus, UserId,
};
use super::ranking::ApplicantSort;

/// One row of the ranked applicant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantSummary {
    pub applicant_id: ApplicantId,
    pub user_id: UserId,
    pub name: String,
    pub paper_status: PaperStatus,
    pub applied_at: DateTime<Utc>,
    pub total_paper_score: i64,
}

impl ApplicantSummary {
    pub fn from_applicant(applicant: &Applicant, total_paper_score: i64) -> Self {
        Self {
            applicant_id: applicant.id.clone(),
            user_id: applicant.user_id.clone(),
            name: applicant.name.clone(),
            paper_status: applicant.paper_status,
            applied_at: applicant.created_at,
            total_paper_score,
        }
    }
}

/// Applicants of a recruitment cycle paired with their summed paper scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantListResponse {
    pub mozip_id: MozipId,
    pub title: String,
    pub sort: ApplicantSort,
    pub applicants: Vec<ApplicantSummary>,
}

impl ApplicantListResponse {
    pub fn new(mozip: &Mozip, sort: ApplicantSort, applicants: Vec<ApplicantSummary>) -> Self {
        Self {
            mozip_id: mozip.id.clone(),
            title: mozip.title.clone(),
            sort,
            applicants,
        }
    }
}

/// A paper answer annotated with the requesting evaluator's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPaperAnswer {
    pub answer_id: PaperAnswerId,
    pub applicant_id: ApplicantId,
    pub answer: String,
    pub score: i32,
}

impl ScoredPaperAnswer {
    pub fn from_answer(answer: &PaperAnswer, score: i32) -> Self {
        Self {
            answer_id: answer.id.clone(),
            applicant_id: answer.applicant_id.clone(),
            answer: answer.answer.clone(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperQuestionWithAnswers {
    pub question_id: PaperQuestionId,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub is_required: bool,
    pub answers: Vec<ScoredPaperAnswer>,
}

impl PaperQuestionWithAnswers {
    pub fn from_question(question: &PaperQuestion, answers: Vec<ScoredPaperAnswer>) -> Self {
        Self {
            question_id: question.id.clone(),
            question: question.question().to_string(),
            details: question.details().map(str::to_string),
            is_required: question.is_required(),
            answers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperAnswersResponse {
    pub questions: Vec<PaperQuestionWithAnswers>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantStatusChange {
    pub applicant_id: ApplicantId,
    pub status: PaperStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateApplicantStatusRequest {
    pub applicants: Vec<ApplicantStatusChange>,
}

/// Confirmation carrying the RFC 3339 completion time of a status batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateApplicantStatusResponse {
    pub timestamp: String,
}

/// Replacement group for a question's text, details, and required flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionUpdate {
    pub question: String,
    #[serde(default)]
    pub details: Option<String>,
    pub is_required: bool,
}
