use std::sync::{Mutex, MutexGuard};

use super::domain::{
    Applicant, ApplicantId, Evaluation, EvaluationId, InterviewQuestion, InterviewQuestionId,
    Mozip, MozipId, PaperAnswer, PaperAnswerId, PaperEvaluation, PaperQuestion, PaperQuestionId,
    User, UserId,
};
use super::repository::{RecruitmentRepository, RepositoryError};

/// Process-local store backing the server binary, demos, and tests.
///
/// Each collection is a `Vec` so scans come back in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRecruitmentRepository {
    mozips: Mutex<Vec<Mozip>>,
    users: Mutex<Vec<User>>,
    applicants: Mutex<Vec<Applicant>>,
    paper_questions: Mutex<Vec<PaperQuestion>>,
    paper_answers: Mutex<Vec<PaperAnswer>>,
    evaluations: Mutex<Vec<Evaluation>>,
    paper_evaluations: Mutex<Vec<PaperEvaluation>>,
    interview_questions: Mutex<Vec<InterviewQuestion>>,
}

impl InMemoryRecruitmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<'a, T>(
    collection: &'a Mutex<Vec<T>>,
    name: &str,
) -> Result<MutexGuard<'a, Vec<T>>, RepositoryError> {
    collection
        .lock()
        .map_err(|_| RepositoryError::Unavailable(format!("{name} store poisoned")))
}

fn upsert<T>(items: &mut Vec<T>, item: T, same_record: impl Fn(&T, &T) -> bool) {
    match items.iter_mut().find(|existing| same_record(existing, &item)) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

impl RecruitmentRepository for InMemoryRecruitmentRepository {
    fn find_mozip(&self, id: &MozipId) -> Result<Option<Mozip>, RepositoryError> {
        let guard = lock(&self.mozips, "mozip")?;
        Ok(guard.iter().find(|mozip| &mozip.id == id).cloned())
    }

    fn save_mozip(&self, mozip: Mozip) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.mozips, "mozip")?;
        upsert(&mut guard, mozip, |a, b| a.id == b.id);
        Ok(())
    }

    fn find_user(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let guard = lock(&self.users, "user")?;
        Ok(guard.iter().find(|user| &user.id == id).cloned())
    }

    fn save_user(&self, user: User) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.users, "user")?;
        upsert(&mut guard, user, |a, b| a.id == b.id);
        Ok(())
    }

    fn find_applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        let guard = lock(&self.applicants, "applicant")?;
        Ok(guard.iter().find(|applicant| &applicant.id == id).cloned())
    }

    fn find_applicant_in_mozip(
        &self,
        id: &ApplicantId,
        mozip: &MozipId,
    ) -> Result<Option<Applicant>, RepositoryError> {
        let guard = lock(&self.applicants, "applicant")?;
        Ok(guard
            .iter()
            .find(|applicant| &applicant.id == id && applicant.mozip_id() == mozip)
            .cloned())
    }

    fn applicants_by_mozip(&self, mozip: &MozipId) -> Result<Vec<Applicant>, RepositoryError> {
        let guard = lock(&self.applicants, "applicant")?;
        Ok(guard
            .iter()
            .filter(|applicant| applicant.mozip_id() == mozip)
            .cloned()
            .collect())
    }

    fn save_applicant(&self, applicant: Applicant) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.applicants, "applicant")?;
        upsert(&mut guard, applicant, |a, b| a.id == b.id);
        Ok(())
    }

    fn find_paper_question(
        &self,
        id: &PaperQuestionId,
    ) -> Result<Option<PaperQuestion>, RepositoryError> {
        let guard = lock(&self.paper_questions, "paper question")?;
        Ok(guard.iter().find(|question| &question.id == id).cloned())
    }

    fn paper_questions_by_mozip(
        &self,
        mozip: &MozipId,
    ) -> Result<Vec<PaperQuestion>, RepositoryError> {
        let guard = lock(&self.paper_questions, "paper question")?;
        Ok(guard
            .iter()
            .filter(|question| &question.mozip_id == mozip)
            .cloned()
            .collect())
    }

    fn save_paper_question(&self, question: PaperQuestion) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.paper_questions, "paper question")?;
        upsert(&mut guard, question, |a, b| a.id == b.id);
        Ok(())
    }

    fn paper_answers_by_question(
        &self,
        question: &PaperQuestionId,
    ) -> Result<Vec<PaperAnswer>, RepositoryError> {
        let guard = lock(&self.paper_answers, "paper answer")?;
        Ok(guard
            .iter()
            .filter(|answer| &answer.paper_question_id == question)
            .cloned()
            .collect())
    }

    fn save_paper_answer(&self, answer: PaperAnswer) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.paper_answers, "paper answer")?;
        upsert(&mut guard, answer, |a, b| a.id == b.id);
        Ok(())
    }

    fn evaluations_by_applicant(
        &self,
        applicant: &ApplicantId,
    ) -> Result<Vec<Evaluation>, RepositoryError> {
        let guard = lock(&self.evaluations, "evaluation")?;
        Ok(guard
            .iter()
            .filter(|evaluation| &evaluation.applicant_id == applicant)
            .cloned()
            .collect())
    }

    fn find_evaluation(
        &self,
        evaluator: &UserId,
        applicant: &ApplicantId,
    ) -> Result<Option<Evaluation>, RepositoryError> {
        let guard = lock(&self.evaluations, "evaluation")?;
        Ok(guard
            .iter()
            .find(|evaluation| {
                &evaluation.evaluator_id == evaluator && &evaluation.applicant_id == applicant
            })
            .cloned())
    }

    fn save_evaluation(&self, evaluation: Evaluation) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.evaluations, "evaluation")?;
        let duplicate = guard.iter().any(|existing| {
            existing.id != evaluation.id
                && existing.evaluator_id == evaluation.evaluator_id
                && existing.applicant_id == evaluation.applicant_id
        });
        if duplicate {
            return Err(RepositoryError::Conflict(format!(
                "evaluator {} already evaluated applicant {}",
                evaluation.evaluator_id, evaluation.applicant_id
            )));
        }
        upsert(&mut guard, evaluation, |a, b| a.id == b.id);
        Ok(())
    }

    fn find_paper_evaluation(
        &self,
        answer: &PaperAnswerId,
        evaluation: &EvaluationId,
    ) -> Result<Option<PaperEvaluation>, RepositoryError> {
        let guard = lock(&self.paper_evaluations, "paper evaluation")?;
        Ok(guard
            .iter()
            .find(|scored| &scored.paper_answer_id == answer && &scored.evaluation_id == evaluation)
            .cloned())
    }

    fn save_paper_evaluation(&self, evaluation: PaperEvaluation) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.paper_evaluations, "paper evaluation")?;
        let duplicate = guard.iter().any(|existing| {
            existing.id != evaluation.id
                && existing.paper_answer_id == evaluation.paper_answer_id
                && existing.evaluation_id == evaluation.evaluation_id
        });
        if duplicate {
            return Err(RepositoryError::Conflict(format!(
                "answer {} already scored under evaluation {}",
                evaluation.paper_answer_id, evaluation.evaluation_id
            )));
        }
        upsert(&mut guard, evaluation, |a, b| a.id == b.id);
        Ok(())
    }

    fn find_interview_question(
        &self,
        id: &InterviewQuestionId,
    ) -> Result<Option<InterviewQuestion>, RepositoryError> {
        let guard = lock(&self.interview_questions, "interview question")?;
        Ok(guard.iter().find(|question| &question.id == id).cloned())
    }

    fn interview_questions_by_mozip(
        &self,
        mozip: &MozipId,
    ) -> Result<Vec<InterviewQuestion>, RepositoryError> {
        let guard = lock(&self.interview_questions, "interview question")?;
        Ok(guard
            .iter()
            .filter(|question| &question.mozip_id == mozip)
            .cloned()
            .collect())
    }

    fn save_interview_question(&self, question: InterviewQuestion) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.interview_questions, "interview question")?;
        upsert(&mut guard, question, |a, b| a.id == b.id);
        Ok(())
    }
}
