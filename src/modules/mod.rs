//! Feature modules, one per entity.
//!
//! Each module follows a consistent structure:
//!
//! - `model.rs`: entity records and DTOs (re-exported from `vestry-models`)
//! - `service.rs`: the Entity Access Module for that entity
//!
//! The shared list/read/write/status logic lives in [`resource`]; the
//! per-entity services configure it with their resource path and layer
//! on entity-specific operations (term rotation, exam publishing,
//! batch assignment).

pub mod classes;
pub mod evaluations;
pub mod examinations;
pub(crate) mod resource;
pub mod sessions;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod terms;
pub mod users;

pub use self::classes::service::ClassService;
pub use self::evaluations::service::EvaluationService;
pub use self::examinations::service::{ClassExamService, ExamService};
pub use self::sessions::service::SessionService;
pub use self::students::service::StudentService;
pub use self::subjects::service::SubjectService;
pub use self::teachers::service::TeacherService;
pub use self::terms::service::TermService;
pub use self::users::service::UserService;
