use crate::infra::{seed_demo_cycle, DemoCycle};
use clap::Args;
use mozip::error::AppError;
use mozip::recruitment::{
    ApplicantService, ApplicantSort, ApplicantStatusChange, IdFilter, InMemoryRecruitmentRepository,
    PaperStatus, QuestionService, ServiceError, TimeOrderedIds, UpdateApplicantStatusRequest,
    UserId,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Ranking field: applied_at, name, total_paper_score, or paper_status.
    #[arg(long)]
    pub(crate) sort_by: Option<String>,
    /// Ranking direction: asc or desc.
    #[arg(long)]
    pub(crate) order: Option<String>,
    /// Which seeded evaluator (0-based) reviews the scored answers.
    #[arg(long, default_value_t = 0)]
    pub(crate) evaluator: usize,
    /// Number of top-ranked applicants to mark as passed.
    #[arg(long, default_value_t = 1)]
    pub(crate) pass_top: usize,
    /// Print each view as pretty JSON instead of the text summary.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let sort = ApplicantSort::from_params(args.sort_by.as_deref(), args.order.as_deref())
        .map_err(ServiceError::from)?;

    let repository = Arc::new(InMemoryRecruitmentRepository::new());
    let cycle = seed_demo_cycle(repository.as_ref(), &TimeOrderedIds)?;
    let applicants = ApplicantService::new(repository.clone());
    let questions = QuestionService::new(repository);

    let list = applicants.applicant_list(&cycle.mozip_id, sort)?.sorted();
    if args.json {
        print_json("Applicant ranking", &list);
    } else {
        println!("Applicant ranking for {} ({})", list.title, list.mozip_id);
        for (position, row) in list.applicants.iter().enumerate() {
            println!(
                "  {}. {} score={} status={} applied={}",
                position + 1,
                row.name,
                row.total_paper_score,
                row.paper_status.label(),
                row.applied_at.format("%Y-%m-%d %H:%M")
            );
        }
    }

    let evaluator = evaluator_for(&cycle, args.evaluator);
    let answers = applicants.paper_answers(
        evaluator,
        &cycle.mozip_id,
        &IdFilter::All,
        &IdFilter::All,
    )?;
    if args.json {
        print_json("Scored answers", &answers);
    } else {
        println!(
            "\nScored answers for evaluator {evaluator} across {} questions",
            cycle.questions.len()
        );
        for group in &answers.questions {
            println!("- {}", group.question);
            for answer in &group.answers {
                println!("    {} -> {}", answer.applicant_id, answer.score);
            }
        }
    }

    let changes: Vec<ApplicantStatusChange> = list
        .applicants
        .iter()
        .enumerate()
        .map(|(position, row)| ApplicantStatusChange {
            applicant_id: row.applicant_id.clone(),
            status: if position < args.pass_top {
                PaperStatus::Passed
            } else {
                PaperStatus::Hold
            },
        })
        .collect();
    let confirmation = applicants.update_paper_statuses(
        &cycle.mozip_id,
        UpdateApplicantStatusRequest {
            applicants: changes,
        },
    )?;
    if args.json {
        print_json("Status update", &confirmation);
    } else {
        println!(
            "\nPaper statuses recorded at {} (top {} passed)",
            confirmation.timestamp, args.pass_top
        );
    }

    let interview = questions.interview_questions(&cycle.mozip_id)?;
    if args.json {
        print_json("Interview questions", &interview);
    } else {
        println!("\nInterview questions");
        for question in &interview {
            let number = question
                .question_no
                .map(|no| no.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("  [{number}] {}", question.question());
        }
    }

    Ok(())
}

fn evaluator_for(cycle: &DemoCycle, index: usize) -> &UserId {
    let last = cycle.evaluators.len().saturating_sub(1);
    &cycle.evaluators[index.min(last)]
}

fn print_json<T: Serialize>(heading: &str, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{heading}:\n{json}"),
        Err(err) => println!("{heading} unavailable: {err}"),
    }
}
