//! Output schema for teachers as seen by a principal

use crate::core::schema::Schema;
use crate::entities::Teacher;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whitelisted teacher fields exposed to principals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrincipalTeacherView {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrincipalTeacherSchema;

impl Schema for PrincipalTeacherSchema {
    type Record = Teacher;
    type View = PrincipalTeacherView;

    fn entity_type(&self) -> &'static str {
        "teacher"
    }

    fn dump(&self, teacher: &Teacher) -> PrincipalTeacherView {
        PrincipalTeacherView {
            id: teacher.id,
            user_id: teacher.user_id,
            name: teacher.name.clone(),
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
        }
    }
}
