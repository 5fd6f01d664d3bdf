//! Access checker port - existence and ownership queries.
//!
//! These are the storage-backed half of the precondition layer. Each
//! query is read-only and maps to one boolean predicate.
//!
//! # Contract
//!
//! The ownership checks are single combined existence+ownership
//! queries: a student (or session) owned by a different instructor
//! yields `false`, exactly as if it did not exist. Callers must not try
//! to distinguish the two cases through this port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, InstructorId, SessionId, StudentId};

/// Read-only existence and ownership queries.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// True iff a student row with this id exists.
    async fn student_exists(&self, student_id: &StudentId) -> Result<bool, DomainError>;

    /// True iff a session row with this id exists.
    async fn session_exists(&self, session_id: &SessionId) -> Result<bool, DomainError>;

    /// True iff a student row exists with this id AND this owning
    /// instructor.
    async fn student_owned_by(
        &self,
        instructor_id: &InstructorId,
        student_id: &StudentId,
    ) -> Result<bool, DomainError>;

    /// True iff a session row exists with this id AND this owning
    /// instructor.
    async fn session_owned_by(
        &self,
        instructor_id: &InstructorId,
        session_id: &SessionId,
    ) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_checker_is_object_safe() {
        fn _accepts_dyn(_checker: &dyn AccessChecker) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn AccessChecker>>();
    }
}
