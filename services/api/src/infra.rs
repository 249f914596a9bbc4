use chrono::{Duration, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use mozip::recruitment::{
    Applicant, ApplicantId, Evaluation, EvaluationId, IdGenerator, InterviewQuestion,
    InterviewQuestionId, Mozip, MozipId, PaperAnswer, PaperAnswerId, PaperEvaluation,
    PaperEvaluationId, PaperQuestion, PaperQuestionId, RecruitmentRepository, RepositoryError,
    User, UserId,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Identifiers of the sample cycle written by [`seed_demo_cycle`].
#[derive(Debug, Clone)]
pub(crate) struct DemoCycle {
    pub(crate) mozip_id: MozipId,
    pub(crate) evaluators: Vec<UserId>,
    pub(crate) applicants: Vec<ApplicantId>,
    pub(crate) questions: Vec<PaperQuestionId>,
}

const APPLICANTS: [&str; 3] = ["Kim Minji", "Lee Dahye", "Park Seojun"];
const PAPER_QUESTIONS: [(&str, &str); 2] = [
    ("Why do you want to join the club?", "Up to 500 characters."),
    ("Tell us about a team project you contributed to.", "Include your role."),
];
const INTERVIEW_QUESTIONS: [&str; 2] = [
    "Introduce yourself in one minute.",
    "How would you balance club activities with coursework?",
];

/// Writes one recruitment cycle where every evaluator has scored every answer.
pub(crate) fn seed_demo_cycle<R, G>(repository: &R, ids: &G) -> Result<DemoCycle, RepositoryError>
where
    R: RecruitmentRepository,
    G: IdGenerator,
{
    let opened_at = Utc::now() - Duration::days(7);
    let mozip_id = MozipId(ids.next_id());
    repository.save_mozip(Mozip {
        id: mozip_id.clone(),
        title: "Spring recruiting".to_string(),
        description: Some("Sample cycle generated for local runs".to_string()),
        created_at: opened_at,
    })?;

    let mut evaluators = Vec::new();
    for (index, name) in ["Jung Haeun", "Oh Jiwon"].into_iter().enumerate() {
        let id = UserId(ids.next_id());
        repository.save_user(User {
            id: id.clone(),
            name: name.to_string(),
            email: format!("evaluator{}@mozip.local", index + 1),
        })?;
        evaluators.push(id);
    }

    let mut questions = Vec::new();
    for (text, details) in PAPER_QUESTIONS {
        let id = PaperQuestionId(ids.next_id());
        repository.save_paper_question(PaperQuestion::new(
            id.clone(),
            mozip_id.clone(),
            text,
            Some(details.to_string()),
            true,
            opened_at,
        ))?;
        questions.push(id);
    }

    for (index, text) in INTERVIEW_QUESTIONS.into_iter().enumerate() {
        repository.save_interview_question(InterviewQuestion::new(
            InterviewQuestionId(ids.next_id()),
            mozip_id.clone(),
            text,
            Some(index as u32 + 1),
            None,
            true,
            opened_at,
        ))?;
    }

    let mut applicants = Vec::new();
    for (index, name) in APPLICANTS.into_iter().enumerate() {
        let applicant_id = ApplicantId(ids.next_id());
        let applied_at = opened_at + Duration::hours(index as i64 * 5 + 1);
        repository.save_applicant(Applicant::new(
            applicant_id.clone(),
            mozip_id.clone(),
            UserId(ids.next_id()),
            name,
            applied_at,
        ))?;

        let answers: Vec<PaperAnswerId> = questions
            .iter()
            .map(|question_id| -> Result<PaperAnswerId, RepositoryError> {
                let answer_id = PaperAnswerId(ids.next_id());
                repository.save_paper_answer(PaperAnswer {
                    id: answer_id.clone(),
                    applicant_id: applicant_id.clone(),
                    paper_question_id: question_id.clone(),
                    answer: format!("{name}'s answer"),
                    created_at: applied_at,
                })?;
                Ok(answer_id)
            })
            .collect::<Result<_, _>>()?;

        for (rank, evaluator_id) in evaluators.iter().enumerate() {
            let evaluation_id = EvaluationId(ids.next_id());
            let mut paper_score = 0;
            for (position, answer_id) in answers.iter().enumerate() {
                let score = demo_score(index, rank, position);
                paper_score += score;
                repository.save_paper_evaluation(PaperEvaluation {
                    id: PaperEvaluationId(ids.next_id()),
                    paper_answer_id: answer_id.clone(),
                    evaluation_id: evaluation_id.clone(),
                    score,
                })?;
            }
            repository.save_evaluation(Evaluation {
                id: evaluation_id,
                evaluator_id: evaluator_id.clone(),
                applicant_id: applicant_id.clone(),
                paper_score,
            })?;
        }

        applicants.push(applicant_id);
    }

    Ok(DemoCycle {
        mozip_id,
        evaluators,
        applicants,
        questions,
    })
}

fn demo_score(applicant: usize, evaluator: usize, question: usize) -> i32 {
    (3 + (applicant * 7 + evaluator * 3 + question * 5) % 8) as i32
}
