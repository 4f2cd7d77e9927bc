mod alumni;
mod certification;
mod internship;
mod profile;
mod session;

pub use alumni::AlumniCount;
pub use certification::{CertificationRecord, Tier, ASSOCIATE_MARKER, ENGINEER_MARKER};
pub use internship::{DurationClass, GradeRequirement, Internship};
pub use profile::{AcquiredSet, StudentProfile};
pub use session::{Comment, Feedback, StudentSession};
