use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::recruitment::domain::{
    Applicant, ApplicantId, Evaluation, EvaluationId, InterviewQuestion, InterviewQuestionId,
    Mozip, MozipId, PaperAnswer, PaperAnswerId, PaperEvaluation, PaperEvaluationId,
    PaperQuestion, PaperQuestionId, User, UserId,
};
use crate::recruitment::memory::InMemoryRecruitmentRepository;
use crate::recruitment::repository::{RecruitmentRepository, RepositoryError};
use crate::recruitment::router::{recruitment_router, RecruitmentState};
use crate::recruitment::service::{ApplicantService, QuestionService};

pub(super) const SPRING: &str = "mozip-spring";
pub(super) const FALL: &str = "mozip-fall";
pub(super) const EVALUATOR_ONE: &str = "evaluator-1";
pub(super) const EVALUATOR_TWO: &str = "evaluator-2";
pub(super) const EVALUATOR_THREE: &str = "evaluator-3";

pub(super) fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 2, 10, minute, 0)
        .single()
        .expect("valid timestamp")
}

fn mozip(id: &str, title: &str) -> Mozip {
    Mozip {
        id: MozipId::from(id),
        title: title.to_string(),
        description: None,
        created_at: at(0),
    }
}

fn user(id: &str, name: &str) -> User {
    User {
        id: UserId::from(id),
        name: name.to_string(),
        email: format!("{id}@mozip.test"),
    }
}

fn applicant(id: &str, mozip: &str, name: &str, minute: u32) -> Applicant {
    Applicant::new(
        ApplicantId::from(id),
        MozipId::from(mozip),
        UserId::from(format!("user-{id}")),
        name,
        at(minute),
    )
}

fn question(id: &str, mozip: &str, text: &str) -> PaperQuestion {
    PaperQuestion::new(
        PaperQuestionId::from(id),
        MozipId::from(mozip),
        text,
        Some(format!("{text} (details)")),
        true,
        at(1),
    )
}

fn answer(applicant: &str, question: &str) -> PaperAnswer {
    PaperAnswer {
        id: answer_id(applicant, question),
        applicant_id: ApplicantId::from(applicant),
        paper_question_id: PaperQuestionId::from(question),
        answer: format!("{applicant} answering {question}"),
        created_at: at(20),
    }
}

pub(super) fn answer_id(applicant: &str, question: &str) -> PaperAnswerId {
    PaperAnswerId(format!("ans-{applicant}-{question}"))
}

pub(super) fn evaluation_id(evaluator: &str, applicant: &str) -> EvaluationId {
    EvaluationId(format!("eval-{evaluator}-{applicant}"))
}

fn evaluation(evaluator: &str, applicant: &str, paper_score: i32) -> Evaluation {
    Evaluation {
        id: evaluation_id(evaluator, applicant),
        evaluator_id: UserId::from(evaluator),
        applicant_id: ApplicantId::from(applicant),
        paper_score,
    }
}

fn paper_evaluation(evaluator: &str, applicant: &str, question: &str, score: i32) -> PaperEvaluation {
    PaperEvaluation {
        id: PaperEvaluationId(format!("peval-{evaluator}-{applicant}-{question}")),
        paper_answer_id: answer_id(applicant, question),
        evaluation_id: evaluation_id(evaluator, applicant),
        score,
    }
}

fn interview_question(id: &str, question_no: Option<u32>) -> InterviewQuestion {
    InterviewQuestion::new(
        InterviewQuestionId::from(id),
        MozipId::from(SPRING),
        format!("interview prompt {id}"),
        question_no,
        None,
        false,
        at(2),
    )
}

/// Seeds two cycles.
///
/// Spring has applicants a1, a2, a4 and questions q1..q3. Evaluators 1..3 scored
/// a1 with paper scores 3, 5, and 2. Evaluator 2 also scored a2 (4). Evaluator 1
/// scored a1's answers to q1 and q2 but not q3. Evaluator 2 scored every spring
/// answer. a4 has no answers or evaluations. Fall has applicant a3 and question q4.
pub(super) fn seeded_repository() -> Arc<InMemoryRecruitmentRepository> {
    let repository = InMemoryRecruitmentRepository::new();

    repository
        .save_mozip(mozip(SPRING, "2025 Spring Recruiting"))
        .expect("seed mozip");
    repository
        .save_mozip(mozip(FALL, "2025 Fall Recruiting"))
        .expect("seed mozip");

    for (id, name) in [
        (EVALUATOR_ONE, "Jung Haeun"),
        (EVALUATOR_TWO, "Oh Jiwon"),
        (EVALUATOR_THREE, "Han Sora"),
    ] {
        repository.save_user(user(id, name)).expect("seed user");
    }

    for record in [
        applicant("a1", SPRING, "Kim Minji", 5),
        applicant("a2", SPRING, "Lee Dahye", 3),
        applicant("a3", FALL, "Park Seojun", 4),
        applicant("a4", SPRING, "Choi Yuna", 7),
    ] {
        repository.save_applicant(record).expect("seed applicant");
    }

    for record in [
        question("q1", SPRING, "Why do you want to join?"),
        question("q2", SPRING, "Describe a project you led."),
        question("q3", SPRING, "What would you change about the club?"),
        question("q4", FALL, "Introduce yourself."),
    ] {
        repository.save_paper_question(record).expect("seed question");
    }

    for applicant in ["a1", "a2"] {
        for question in ["q1", "q2", "q3"] {
            repository
                .save_paper_answer(answer(applicant, question))
                .expect("seed answer");
        }
    }
    repository
        .save_paper_answer(answer("a3", "q4"))
        .expect("seed answer");

    for record in [
        evaluation(EVALUATOR_ONE, "a1", 3),
        evaluation(EVALUATOR_TWO, "a1", 5),
        evaluation(EVALUATOR_THREE, "a1", 2),
        evaluation(EVALUATOR_TWO, "a2", 4),
    ] {
        repository.save_evaluation(record).expect("seed evaluation");
    }

    let mut scores = vec![
        paper_evaluation(EVALUATOR_ONE, "a1", "q1", 8),
        paper_evaluation(EVALUATOR_ONE, "a1", "q2", 6),
    ];
    for (applicant, base) in [("a1", 1), ("a2", 4)] {
        for (offset, question) in ["q1", "q2", "q3"].into_iter().enumerate() {
            scores.push(paper_evaluation(
                EVALUATOR_TWO,
                applicant,
                question,
                base + offset as i32,
            ));
        }
    }
    for record in scores {
        repository
            .save_paper_evaluation(record)
            .expect("seed paper evaluation");
    }

    for record in [
        interview_question("iq1", Some(2)),
        interview_question("iq2", None),
        interview_question("iq3", Some(1)),
    ] {
        repository
            .save_interview_question(record)
            .expect("seed interview question");
    }

    Arc::new(repository)
}

pub(super) fn applicant_service(
    repository: &Arc<InMemoryRecruitmentRepository>,
) -> ApplicantService<InMemoryRecruitmentRepository> {
    ApplicantService::new(repository.clone())
}

pub(super) fn question_service(
    repository: &Arc<InMemoryRecruitmentRepository>,
) -> QuestionService<InMemoryRecruitmentRepository> {
    QuestionService::new(repository.clone())
}

pub(super) fn router_with<R>(repository: Arc<R>) -> axum::Router
where
    R: RecruitmentRepository + 'static,
{
    recruitment_router(RecruitmentState::new(repository))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) struct UnavailableRepository;

fn offline<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::Unavailable("database offline".to_string()))
}

impl RecruitmentRepository for UnavailableRepository {
    fn find_mozip(&self, _id: &MozipId) -> Result<Option<Mozip>, RepositoryError> {
        offline()
    }

    fn save_mozip(&self, _mozip: Mozip) -> Result<(), RepositoryError> {
        offline()
    }

    fn find_user(&self, _id: &UserId) -> Result<Option<User>, RepositoryError> {
        offline()
    }

    fn save_user(&self, _user: User) -> Result<(), RepositoryError> {
        offline()
    }

    fn find_applicant(&self, _id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        offline()
    }

    fn find_applicant_in_mozip(
        &self,
        _id: &ApplicantId,
        _mozip: &MozipId,
    ) -> Result<Option<Applicant>, RepositoryError> {
        offline()
    }

    fn applicants_by_mozip(&self, _mozip: &MozipId) -> Result<Vec<Applicant>, RepositoryError> {
        offline()
    }

    fn save_applicant(&self, _applicant: Applicant) -> Result<(), RepositoryError> {
        offline()
    }

    fn find_paper_question(
        &self,
        _id: &PaperQuestionId,
    ) -> Result<Option<PaperQuestion>, RepositoryError> {
        offline()
    }

    fn paper_questions_by_mozip(
        &self,
        _mozip: &MozipId,
    ) -> Result<Vec<PaperQuestion>, RepositoryError> {
        offline()
    }

    fn save_paper_question(&self, _question: PaperQuestion) -> Result<(), RepositoryError> {
        offline()
    }

    fn paper_answers_by_question(
        &self,
        _question: &PaperQuestionId,
    ) -> Result<Vec<PaperAnswer>, RepositoryError> {
        offline()
    }

    fn save_paper_answer(&self, _answer: PaperAnswer) -> Result<(), RepositoryError> {
        offline()
    }

    fn evaluations_by_applicant(
        &self,
        _applicant: &ApplicantId,
    ) -> Result<Vec<Evaluation>, RepositoryError> {
        offline()
    }

    fn find_evaluation(
        &self,
        _evaluator: &UserId,
        _applicant: &ApplicantId,
    ) -> Result<Option<Evaluation>, RepositoryError> {
        offline()
    }

    fn save_evaluation(&self, _evaluation: Evaluation) -> Result<(), RepositoryError> {
        offline()
    }

    fn find_paper_evaluation(
        &self,
        _answer: &PaperAnswerId,
        _evaluation: &EvaluationId,
    ) -> Result<Option<PaperEvaluation>, RepositoryError> {
        offline()
    }

    fn save_paper_evaluation(&self, _evaluation: PaperEvaluation) -> Result<(), RepositoryError> {
        offline()
    }

    fn find_interview_question(
        &self,
        _id: &InterviewQuestionId,
    ) -> Result<Option<InterviewQuestion>, RepositoryError> {
        offline()
    }

    fn interview_questions_by_mozip(
        &self,
        _mozip: &MozipId,
    ) -> Result<Vec<InterviewQuestion>, RepositoryError> {
        offline()
    }

    fn save_interview_question(&self, _question: InterviewQuestion) -> Result<(), RepositoryError> {
        offline()
    }
}
