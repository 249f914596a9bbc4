use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a recruitment cycle.
    MozipId
);
string_id!(ApplicantId);
string_id!(
    /// Identifier of a staff or evaluator account.
    UserId
);
string_id!(PaperQuestionId);
string_id!(PaperAnswerId);
string_id!(EvaluationId);
string_id!(PaperEvaluationId);
string_id!(InterviewQuestionId);

/// A recruitment cycle owning questions and applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mozip {
    pub id: MozipId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Staff account; evaluators are users who score applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// A person applying to exactly one recruitment cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    mozip_id: MozipId,
    pub user_id: UserId,
    pub name: String,
    pub paper_status: PaperStatus,
    pub created_at: DateTime<Utc>,
}

impl Applicant {
    pub fn new(
        id: ApplicantId,
        mozip_id: MozipId,
        user_id: UserId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            mozip_id,
            user_id,
            name: name.into(),
            paper_status: PaperStatus::Pending,
            created_at,
        }
    }

    /// Owning cycle; fixed once the applicant exists.
    pub fn mozip_id(&self) -> &MozipId {
        &self.mozip_id
    }
}

/// Paper-review stage of an applicant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaperStatus {
    #[default]
    Pending,
    Passed,
    Failed,
    Hold,
}

impl PaperStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PaperStatus::Pending => "PENDING",
            PaperStatus::Passed => "PASSED",
            PaperStatus::Failed => "FAILED",
            PaperStatus::Hold => "HOLD",
        }
    }
}

/// Written question attached to a recruitment cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperQuestion {
    pub id: PaperQuestionId,
    pub mozip_id: MozipId,
    question: String,
    details: Option<String>,
    is_required: bool,
    pub created_at: DateTime<Utc>,
}

impl PaperQuestion {
    pub fn new(
        id: PaperQuestionId,
        mozip_id: MozipId,
        question: impl Into<String>,
        details: Option<String>,
        is_required: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            mozip_id,
            question: question.into(),
            details,
            is_required,
            created_at,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// Replaces text, details, and the required flag as one group.
    pub fn update_question(&mut self, question: String, details: Option<String>, is_required: bool) {
        self.question = question;
        self.details = details;
        self.is_required = is_required;
    }
}

/// Interview-stage question; `question_no` positions it within the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: InterviewQuestionId,
    pub mozip_id: MozipId,
    question: String,
    pub question_no: Option<u32>,
    details: Option<String>,
    is_required: bool,
    pub created_at: DateTime<Utc>,
}

impl InterviewQuestion {
    pub fn new(
        id: InterviewQuestionId,
        mozip_id: MozipId,
        question: impl Into<String>,
        question_no: Option<u32>,
        details: Option<String>,
        is_required: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            mozip_id,
            question: question.into(),
            question_no,
            details,
            is_required,
            created_at,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn update_question(&mut self, question: String, details: Option<String>, is_required: bool) {
        self.question = question;
        self.details = details;
        self.is_required = is_required;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperAnswer {
    pub id: PaperAnswerId,
    pub applicant_id: ApplicantId,
    pub paper_question_id: PaperQuestionId,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// One evaluator's aggregate paper score for one applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: EvaluationId,
    pub evaluator_id: UserId,
    pub applicant_id: ApplicantId,
    pub paper_score: i32,
}

/// Score an evaluation assigns to a single paper answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperEvaluation {
    pub id: PaperEvaluationId,
    pub paper_answer_id: PaperAnswerId,
    pub evaluation_id: EvaluationId,
    pub score: i32,
}
