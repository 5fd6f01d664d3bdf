//! ListSessionsHandler - query handler for an instructor's sessions.

use std::sync::Arc;

use crate::domain::foundation::InstructorId;
use crate::domain::session::SessionError;
use crate::ports::{SessionPage, SessionReader};

/// Query for every session owned by the acting instructor.
#[derive(Debug, Clone)]
pub struct ListSessionsQuery {
    pub instructor_id: InstructorId,
}

/// Handler for listing sessions, newest first.
pub struct ListSessionsHandler {
    reader: Arc<dyn SessionReader>,
}

impl ListSessionsHandler {
    pub fn new(reader: Arc<dyn SessionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<SessionPage>, SessionError> {
        let pages = self.reader.list_by_instructor(&query.instructor_id).await?;
        Ok(pages)
    }
}
