//! Recruitment cycle review: applicant ranking, scored answer review, status
//! updates, and question maintenance over a pluggable repository.

pub mod domain;
pub mod filter;
pub mod ids;
pub mod memory;
pub mod ranking;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantId, Evaluation, EvaluationId, InterviewQuestion, InterviewQuestionId,
    Mozip, MozipId, PaperAnswer, PaperAnswerId, PaperEvaluation, PaperEvaluationId,
    PaperQuestion, PaperQuestionId, PaperStatus, User, UserId,
};
pub use filter::IdFilter;
pub use ids::{IdGenerator, TimeOrderedIds};
pub use memory::InMemoryRecruitmentRepository;
pub use ranking::{ApplicantSort, InvalidSort, SortDirection, SortField};
pub use repository::{RecruitmentRepository, RepositoryError};
pub use router::{recruitment_router, RecruitmentState};
pub use service::{ApplicantService, QuestionService, ServiceError};
pub use views::{
    ApplicantListResponse, ApplicantStatusChange, ApplicantSummary, PaperAnswersResponse,
    PaperQuestionWithAnswers, QuestionUpdate, ScoredPaperAnswer, UpdateApplicantStatusRequest,
    UpdateApplicantStatusResponse,
};
