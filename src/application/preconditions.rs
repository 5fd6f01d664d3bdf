//! Preconditions - the validation layer.
//!
//! A set of independent boolean predicates, each gating one failure
//! kind. The scalar and enumeration checks are pure; the existence and
//! ownership checks are read-only queries through the `AccessChecker`
//! port. None of them mutates state.

use std::sync::Arc;

use crate::domain::foundation::{
    Currency, DomainError, InstructorId, SessionId, SessionStatus, StudentId,
};
use crate::ports::AccessChecker;

/// Boolean predicates gating session mutations.
#[derive(Clone)]
pub struct Preconditions {
    access: Arc<dyn AccessChecker>,
}

impl Preconditions {
    pub fn new(access: Arc<dyn AccessChecker>) -> Self {
        Self { access }
    }

    /// True iff the value (price or meeting count) is non-negative.
    pub fn value_is_valid(value: i32) -> bool {
        value >= 0
    }

    /// True iff the code names a supported currency (case-insensitive).
    pub fn currency_exists(code: &str) -> bool {
        Currency::code_exists(code)
    }

    /// True iff the code names a known session status.
    pub fn session_status_exists(code: i32) -> bool {
        SessionStatus::is_valid_code(code)
    }

    /// True iff a student row with this id exists.
    pub async fn student_exists(&self, student_id: &StudentId) -> Result<bool, DomainError> {
        tracing::debug!(student_id = %student_id, "checking if student exists");
        self.access.student_exists(student_id).await
    }

    /// True iff a session row with this id exists.
    pub async fn session_exists(&self, session_id: &SessionId) -> Result<bool, DomainError> {
        self.access.session_exists(session_id).await
    }

    /// True iff the student exists AND belongs to the instructor.
    ///
    /// One combined query: a student owned by someone else yields false
    /// even though the student exists.
    pub async fn user_can_update_student(
        &self,
        instructor_id: &InstructorId,
        student_id: &StudentId,
    ) -> Result<bool, DomainError> {
        self.access.student_owned_by(instructor_id, student_id).await
    }

    /// True iff the session exists AND belongs to the instructor.
    pub async fn user_can_update_student_session(
        &self,
        instructor_id: &InstructorId,
        session_id: &SessionId,
    ) -> Result<bool, DomainError> {
        self.access.session_owned_by(instructor_id, session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use proptest::prelude::*;

    struct MockAccessChecker {
        student: Option<StudentId>,
        session: Option<SessionId>,
        owner: Option<InstructorId>,
    }

    impl MockAccessChecker {
        fn empty() -> Self {
            Self {
                student: None,
                session: None,
                owner: None,
            }
        }

        fn with_student(student: StudentId, owner: InstructorId) -> Self {
            Self {
                student: Some(student),
                session: None,
                owner: Some(owner),
            }
        }

        fn with_session(session: SessionId, owner: InstructorId) -> Self {
            Self {
                student: None,
                session: Some(session),
                owner: Some(owner),
            }
        }
    }

    #[async_trait]
    impl AccessChecker for MockAccessChecker {
        async fn student_exists(&self, student_id: &StudentId) -> Result<bool, DomainError> {
            Ok(self.student.as_ref() == Some(student_id))
        }

        async fn session_exists(&self, session_id: &SessionId) -> Result<bool, DomainError> {
            Ok(self.session.as_ref() == Some(session_id))
        }

        async fn student_owned_by(
            &self,
            instructor_id: &InstructorId,
            student_id: &StudentId,
        ) -> Result<bool, DomainError> {
            Ok(self.student.as_ref() == Some(student_id)
                && self.owner.as_ref() == Some(instructor_id))
        }

        async fn session_owned_by(
            &self,
            instructor_id: &InstructorId,
            session_id: &SessionId,
        ) -> Result<bool, DomainError> {
            Ok(self.session.as_ref() == Some(session_id)
                && self.owner.as_ref() == Some(instructor_id))
        }
    }

    #[test]
    fn value_is_valid_accepts_zero_and_positive() {
        assert!(Preconditions::value_is_valid(0));
        assert!(Preconditions::value_is_valid(150));
    }

    #[test]
    fn value_is_valid_rejects_negative() {
        assert!(!Preconditions::value_is_valid(-1));
    }

    #[test]
    fn currency_exists_matches_supported_set() {
        assert!(Preconditions::currency_exists("USD"));
        assert!(Preconditions::currency_exists("eur"));
        assert!(!Preconditions::currency_exists("XYZ"));
    }

    #[test]
    fn session_status_exists_matches_known_codes() {
        assert!(Preconditions::session_status_exists(1));
        assert!(Preconditions::session_status_exists(2));
        assert!(Preconditions::session_status_exists(3));
        assert!(!Preconditions::session_status_exists(0));
        assert!(!Preconditions::session_status_exists(4));
    }

    proptest! {
        #[test]
        fn value_is_valid_iff_non_negative(value in i32::MIN..i32::MAX) {
            prop_assert_eq!(Preconditions::value_is_valid(value), value >= 0);
        }

        #[test]
        fn status_codes_outside_known_set_are_invalid(code in prop::num::i32::ANY) {
            prop_assert_eq!(
                Preconditions::session_status_exists(code),
                (1..=3).contains(&code)
            );
        }
    }

    #[tokio::test]
    async fn student_exists_reflects_storage() {
        let student = StudentId::new();
        let preconditions = Preconditions::new(Arc::new(MockAccessChecker::with_student(
            student,
            InstructorId::new(),
        )));

        assert!(preconditions.student_exists(&student).await.unwrap());
        assert!(!preconditions.student_exists(&StudentId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn session_exists_reflects_storage() {
        let session = SessionId::new();
        let preconditions = Preconditions::new(Arc::new(MockAccessChecker::with_session(
            session,
            InstructorId::new(),
        )));

        assert!(preconditions.session_exists(&session).await.unwrap());
        assert!(!preconditions.session_exists(&SessionId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn ownership_check_is_false_for_other_instructor() {
        let student = StudentId::new();
        let owner = InstructorId::new();
        let preconditions =
            Preconditions::new(Arc::new(MockAccessChecker::with_student(student, owner)));

        // The owner passes; anybody else fails even though the student exists.
        assert!(preconditions
            .user_can_update_student(&owner, &student)
            .await
            .unwrap());
        assert!(!preconditions
            .user_can_update_student(&InstructorId::new(), &student)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn session_ownership_check_is_false_for_other_instructor() {
        let session = SessionId::new();
        let owner = InstructorId::new();
        let preconditions =
            Preconditions::new(Arc::new(MockAccessChecker::with_session(session, owner)));

        assert!(preconditions
            .user_can_update_student_session(&owner, &session)
            .await
            .unwrap());
        assert!(!preconditions
            .user_can_update_student_session(&InstructorId::new(), &session)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn ownership_check_is_false_for_missing_rows() {
        let preconditions = Preconditions::new(Arc::new(MockAccessChecker::empty()));

        assert!(!preconditions
            .user_can_update_student(&InstructorId::new(), &StudentId::new())
            .await
            .unwrap());
        assert!(!preconditions
            .user_can_update_student_session(&InstructorId::new(), &SessionId::new())
            .await
            .unwrap());
    }
}
