//! # Vestry Models
//!
//! Entity records and DTOs for the Vestry console.
//!
//! Every entity record deserializes through an explicit typed struct,
//! which doubles as the allow-listed field projection: fields the
//! backend adds but this crate does not name never reach the UI layer.
//! Records carry `id`, `status`, and `created_at` plus display fields;
//! update DTOs never carry `status`, and status transitions never carry
//! display fields.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed ID newtypes
//! - [`identity`]: the acting user read from persisted client state
//! - [`classes`], [`subjects`], [`teachers`], [`students`],
//!   [`examinations`], [`class_exams`], [`terms`], [`users`],
//!   [`sessions`], [`evaluations`]: one module per entity

pub mod class_exams;
pub mod classes;
pub mod evaluations;
pub mod examinations;
pub mod identity;
pub mod ids;
pub mod sessions;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod terms;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use class_exams::{ClassExam, CreateClassExamDto};
pub use classes::{Class, CreateClassDto, UpdateClassDto};
pub use evaluations::{CreateEvaluationDto, StudentEvaluation, UpdateEvaluationDto};
pub use examinations::{CreateExamDto, Examination, UpdateExamDto};
pub use identity::{ActingUser, Role, StoredSession};
pub use ids::{
    ClassExamId, ClassId, EvaluationId, ExamId, SessionId, StudentId, SubjectId, TeacherId, TermId,
    UserId,
};
pub use sessions::{CreateSessionDto, Session, UpdateSessionDto};
pub use students::{CreateStudentDto, Student, UpdateStudentDto};
pub use subjects::{AssignClassesDto, CreateSubjectDto, Subject, UpdateSubjectDto};
pub use teachers::{AssignSubjectsDto, CreateTeacherDto, Teacher, UpdateTeacherDto};
pub use terms::{CreateTermDto, Term, UpdateTermDto};
pub use users::{CreateUserDto, UpdateUserDto, User};
