//! Entity records mirrored from the records API.
//!
//! DESIGN
//! ======
//! Field names on the wire are camelCase and prefixed per entity
//! (`classRoomName`, `parentEmail`, ...). Structs use plain Rust names and map
//! through serde renames. Nested arrays are decoded leniently: the API mixes
//! numeric back-references with full objects, and only objects are kept.
//!
//! The student collection is served as a tree; [`Student::decode_list`]
//! flattens it into a unique-by-id list.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::endpoint;
use crate::search::Searchable;

/// The four record collections exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Classroom,
    Student,
    Teacher,
    Parent,
}

impl EntityKind {
    pub const ALL: [Self; 4] = [Self::Classroom, Self::Student, Self::Teacher, Self::Parent];

    /// Collection endpoint for `GET`.
    #[must_use]
    pub fn list_path(self) -> &'static str {
        match self {
            Self::Classroom => endpoint::CLASSROOM_LIST_PATH,
            Self::Student => endpoint::STUDENT_LIST_PATH,
            Self::Teacher => endpoint::TEACHER_LIST_PATH,
            Self::Parent => endpoint::PARENT_LIST_PATH,
        }
    }

    /// Item endpoint for `DELETE`.
    #[must_use]
    pub fn delete_path(self, id: i64) -> String {
        match self {
            Self::Classroom => endpoint::classroom_delete_path(id),
            Self::Student => endpoint::student_delete_path(id),
            Self::Teacher => endpoint::teacher_delete_path(id),
            Self::Parent => endpoint::parent_delete_path(id),
        }
    }

    /// Lowercase singular name used in logs and CLI output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Classroom => "classroom",
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
        }
    }
}

/// A record collection item that can be listed, searched, and deleted.
pub trait Entity: DeserializeOwned + Clone + Searchable {
    const KIND: EntityKind;

    fn id(&self) -> i64;

    /// Decode a `GET` collection response body.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the body is not the expected array shape.
    fn decode_list(value: Value) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Class teacher summary embedded in a classroom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRef {
    #[serde(rename = "teacherId")]
    pub id: i64,
    #[serde(rename = "teacherFullName", default)]
    pub full_name: String,
}

/// Student summary embedded in a classroom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRef {
    #[serde(rename = "studentId")]
    pub id: i64,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    #[serde(rename = "classRoomId")]
    pub id: i64,
    #[serde(rename = "classRoomName", default)]
    pub name: String,
    #[serde(rename = "classTeacher", default, deserialize_with = "lenient_option")]
    pub teacher: Option<TeacherRef>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub students: Vec<StudentRef>,
}

impl Classroom {
    #[must_use]
    pub fn teacher_name(&self) -> Option<&str> {
        self.teacher.as_ref().map(|t| t.full_name.as_str())
    }
}

/// Classroom reference carried by a student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomRef {
    #[serde(rename = "classRoomId")]
    pub id: i64,
    #[serde(rename = "classRoomName", default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "studentId")]
    pub id: i64,
    #[serde(rename = "studentName", default)]
    pub name: String,
    #[serde(rename = "studentSurname", default)]
    pub surname: String,
    #[serde(rename = "classRoom", default, deserialize_with = "lenient_option")]
    pub classroom: Option<ClassroomRef>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub parents: Vec<Parent>,
}

impl Student {
    /// Classroom name, or empty when the API omitted it.
    #[must_use]
    pub fn classroom_name(&self) -> &str {
        self.classroom.as_ref().map_or("", |c| c.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "teacherId")]
    pub id: i64,
    #[serde(rename = "teacherName", default)]
    pub name: String,
    #[serde(rename = "teacherSurname", default)]
    pub surname: String,
    #[serde(rename = "teacherFullName", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Teacher {
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(self.full_name.as_deref(), &self.name, &self.surname)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    #[serde(rename = "parentId")]
    pub id: i64,
    #[serde(rename = "parentName", default)]
    pub name: String,
    #[serde(rename = "parentSurname", default)]
    pub surname: String,
    #[serde(rename = "parentEmail", default)]
    pub email: String,
    #[serde(rename = "parentPhone", default)]
    pub phone: String,
    #[serde(rename = "parentFullName", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Student ids of this parent's children.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub children: Vec<i64>,
}

impl Parent {
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(self.full_name.as_deref(), &self.name, &self.surname)
    }
}

fn display_name(full_name: Option<&str>, name: &str, surname: &str) -> String {
    match full_name.map(str::trim) {
        Some(full) if !full.is_empty() => full.to_owned(),
        _ => format!("{name} {surname}").trim().to_owned(),
    }
}

impl Entity for Classroom {
    const KIND: EntityKind = EntityKind::Classroom;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Student {
    const KIND: EntityKind = EntityKind::Student;

    fn id(&self) -> i64 {
        self.id
    }

    fn decode_list(value: Value) -> Result<Vec<Self>, serde_json::Error> {
        // Top-level entries may be numeric back-references too.
        let raw: Vec<Value> = serde_json::from_value(value)?;
        let nodes = raw.into_iter().filter_map(|v| serde_json::from_value::<StudentNode>(v).ok()).collect();
        Ok(flatten_students(nodes))
    }
}

impl Entity for Teacher {
    const KIND: EntityKind = EntityKind::Teacher;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Parent {
    const KIND: EntityKind = EntityKind::Parent;

    fn id(&self) -> i64 {
        self.id
    }
}

// =============================================================
// Student tree
// =============================================================

/// One element of the `GET /api/student` tree.
#[derive(Debug, Deserialize)]
struct StudentNode {
    #[serde(rename = "studentId", default)]
    id: Option<i64>,
    #[serde(rename = "studentName", default)]
    name: String,
    #[serde(rename = "studentSurname", default)]
    surname: String,
    #[serde(rename = "classRoom", default, deserialize_with = "lenient_option")]
    classroom: Option<ClassroomNode>,
    #[serde(default, deserialize_with = "lenient_vec")]
    parents: Vec<Parent>,
}

#[derive(Debug, Deserialize)]
struct ClassroomNode {
    #[serde(rename = "classRoomId")]
    id: i64,
    #[serde(rename = "classRoomName", default)]
    name: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    students: Vec<StudentNode>,
}

impl ClassroomNode {
    fn to_ref(&self) -> ClassroomRef {
        ClassroomRef { id: self.id, name: self.name.clone() }
    }
}

impl StudentNode {
    fn into_student(self, id: i64, inherited: Option<&ClassroomRef>) -> Student {
        let classroom = self.classroom.as_ref().map(ClassroomNode::to_ref).or_else(|| inherited.cloned());
        Student { id, name: self.name, surname: self.surname, classroom, parents: self.parents }
    }
}

/// Walk the tree in document order: each top-level student, then the student
/// objects nested in its classroom. First occurrence of an id wins.
fn flatten_students(nodes: Vec<StudentNode>) -> Vec<Student> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for mut node in nodes {
        let nested = node.classroom.as_mut().map(|c| std::mem::take(&mut c.students)).unwrap_or_default();
        let enclosing = node.classroom.as_ref().map(ClassroomNode::to_ref);

        if let Some(id) = node.id {
            if seen.insert(id) {
                out.push(node.into_student(id, None));
            }
        }

        for child in nested {
            let Some(id) = child.id else {
                continue;
            };
            if seen.insert(id) {
                out.push(child.into_student(id, enclosing.as_ref()));
            }
        }
    }

    out
}

// =============================================================
// Lenient decoding
// =============================================================

/// Keep array entries that decode as `T`; drop numeric references and
/// anything else. `null` decodes as an empty list.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().filter_map(|v| serde_json::from_value(v).ok()).collect())
}

/// Decode `T` when the value has the right shape, otherwise `None`.
fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}
