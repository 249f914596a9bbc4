use super::domain::{
    Applicant, ApplicantId, Evaluation, EvaluationId, InterviewQuestion, InterviewQuestionId,
    Mozip, MozipId, PaperAnswer, PaperAnswerId, PaperEvaluation, PaperQuestion, PaperQuestionId,
    User, UserId,
};

/// Storage abstraction so the services can be exercised in isolation.
///
/// Scans return records in storage order. Saves are upserts and are visible to
/// every later read, including reads within the same service call.
pub trait RecruitmentRepository: Send + Sync {
    fn find_mozip(&self, id: &MozipId) -> Result<Option<Mozip>, RepositoryError>;
    fn save_mozip(&self, mozip: Mozip) -> Result<(), RepositoryError>;

    fn find_user(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    fn save_user(&self, user: User) -> Result<(), RepositoryError>;

    fn find_applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError>;
    /// Resolves an applicant only when it belongs to `mozip`.
    fn find_applicant_in_mozip(
        &self,
        id: &ApplicantId,
        mozip: &MozipId,
    ) -> Result<Option<Applicant>, RepositoryError>;
    fn applicants_by_mozip(&self, mozip: &MozipId) -> Result<Vec<Applicant>, RepositoryError>;
    fn save_applicant(&self, applicant: Applicant) -> Result<(), RepositoryError>;

    fn find_paper_question(
        &self,
        id: &PaperQuestionId,
    ) -> Result<Option<PaperQuestion>, RepositoryError>;
    fn paper_questions_by_mozip(
        &self,
        mozip: &MozipId,
    ) -> Result<Vec<PaperQuestion>, RepositoryError>;
    fn save_paper_question(&self, question: PaperQuestion) -> Result<(), RepositoryError>;

    fn paper_answers_by_question(
        &self,
        question: &PaperQuestionId,
    ) -> Result<Vec<PaperAnswer>, RepositoryError>;
    fn save_paper_answer(&self, answer: PaperAnswer) -> Result<(), RepositoryError>;

    fn evaluations_by_applicant(
        &self,
        applicant: &ApplicantId,
    ) -> Result<Vec<Evaluation>, RepositoryError>;
    fn find_evaluation(
        &self,
        evaluator: &UserId,
        applicant: &ApplicantId,
    ) -> Result<Option<Evaluation>, RepositoryError>;
    fn save_evaluation(&self, evaluation: Evaluation) -> Result<(), RepositoryError>;

    fn find_paper_evaluation(
        &self,
        answer: &PaperAnswerId,
        evaluation: &EvaluationId,
    ) -> Result<Option<PaperEvaluation>, RepositoryError>;
    fn save_paper_evaluation(&self, evaluation: PaperEvaluation) -> Result<(), RepositoryError>;

    fn find_interview_question(
        &self,
        id: &InterviewQuestionId,
    ) -> Result<Option<InterviewQuestion>, RepositoryError>;
    fn interview_questions_by_mozip(
        &self,
        mozip: &MozipId,
    ) -> Result<Vec<InterviewQuestion>, RepositoryError>;
    fn save_interview_question(&self, question: InterviewQuestion) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("uniqueness violated: {0}")]
    Conflict(String),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
