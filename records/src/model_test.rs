use serde_json::json;

use super::*;

// =============================================================
// Classroom
// =============================================================

#[test]
fn classroom_decodes_wire_names() {
    let body = json!([{
        "classRoomId": 1,
        "classRoomName": "1.A",
        "classTeacher": { "teacherId": 4, "teacherFullName": "Eva Malá" },
        "students": [{ "studentId": 10, "fullName": "Petr Novák" }, 11]
    }]);
    let rows = Classroom::decode_list(body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].name, "1.A");
    assert_eq!(rows[0].teacher_name(), Some("Eva Malá"));
    assert_eq!(rows[0].students, vec![StudentRef { id: 10, full_name: "Petr Novák".to_owned() }]);
}

#[test]
fn classroom_without_teacher_or_students() {
    let rows = Classroom::decode_list(json!([{ "classRoomId": 2, "classRoomName": "2.B", "classTeacher": null }])).unwrap();
    assert_eq!(rows[0].teacher, None);
    assert!(rows[0].students.is_empty());
}

#[test]
fn decode_list_rejects_non_array() {
    assert!(Classroom::decode_list(json!({ "error": "nope" })).is_err());
}

// =============================================================
// Teacher / Parent
// =============================================================

#[test]
fn teacher_display_name_prefers_full_name() {
    let rows = Teacher::decode_list(json!([
        { "teacherId": 1, "teacherName": "Eva", "teacherSurname": "Malá", "teacherFullName": "Mgr. Eva Malá" },
        { "teacherId": 2, "teacherName": "Jan", "teacherSurname": "Velký" }
    ]))
    .unwrap();
    assert_eq!(rows[0].display_name(), "Mgr. Eva Malá");
    assert_eq!(rows[1].display_name(), "Jan Velký");
}

#[test]
fn parent_decodes_contact_fields_and_child_ids() {
    let rows = Parent::decode_list(json!([{
        "parentId": 5,
        "parentName": "Jana",
        "parentSurname": "Nová",
        "parentEmail": "jana@example.cz",
        "parentPhone": "+420 777 111 222",
        "parentFullName": "Jana Nová",
        "children": [10, { "studentId": 11 }, 12]
    }]))
    .unwrap();
    let parent = &rows[0];
    assert_eq!(parent.email, "jana@example.cz");
    assert_eq!(parent.phone, "+420 777 111 222");
    assert_eq!(parent.children, vec![10, 12]);
    assert_eq!(parent.display_name(), "Jana Nová");
}

#[test]
fn blank_full_name_falls_back_to_parts() {
    let parent = Parent {
        id: 1,
        name: "Jana".to_owned(),
        surname: "Nová".to_owned(),
        email: String::new(),
        phone: String::new(),
        full_name: Some("  ".to_owned()),
        children: vec![],
    };
    assert_eq!(parent.display_name(), "Jana Nová");
}

// =============================================================
// Student flattening
// =============================================================

fn student_tree() -> serde_json::Value {
    json!([
        {
            "studentId": 1,
            "studentName": "Adam",
            "studentSurname": "Král",
            "classRoom": {
                "classRoomId": 7,
                "classRoomName": "3.C",
                "students": [
                    1,
                    { "studentId": 2, "studentName": "Bára", "studentSurname": "Malá" },
                    { "studentId": 3, "studentName": "Cyril", "studentSurname": "Dub",
                      "classRoom": { "classRoomId": 8, "classRoomName": "4.A" } }
                ]
            },
            "parents": [{ "parentId": 9, "parentName": "Hana", "parentSurname": "Králová" }]
        },
        {
            "studentId": 2,
            "studentName": "Bára",
            "studentSurname": "Malá",
            "classRoom": { "classRoomId": 7, "classRoomName": "3.C", "students": [] }
        }
    ])
}

#[test]
fn flatten_emits_top_level_then_nested_in_order() {
    let students = Student::decode_list(student_tree()).unwrap();
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn flatten_skips_numeric_references_and_dedupes() {
    let students = Student::decode_list(student_tree()).unwrap();
    assert_eq!(students.iter().filter(|s| s.id == 2).count(), 1);
    assert_eq!(students.iter().filter(|s| s.id == 1).count(), 1);
}

#[test]
fn nested_student_inherits_enclosing_classroom() {
    let students = Student::decode_list(student_tree()).unwrap();
    let bara = students.iter().find(|s| s.id == 2).unwrap();
    assert_eq!(bara.classroom_name(), "3.C");
}

#[test]
fn nested_student_keeps_own_classroom() {
    let students = Student::decode_list(student_tree()).unwrap();
    let cyril = students.iter().find(|s| s.id == 3).unwrap();
    assert_eq!(cyril.classroom, Some(ClassroomRef { id: 8, name: "4.A".to_owned() }));
}

#[test]
fn top_level_student_keeps_parents() {
    let students = Student::decode_list(student_tree()).unwrap();
    assert_eq!(students[0].parents.len(), 1);
    assert_eq!(students[0].parents[0].name, "Hana");
}

#[test]
fn top_level_entry_without_id_still_yields_nested_students() {
    let students = Student::decode_list(json!([{
        "classRoom": {
            "classRoomId": 1,
            "classRoomName": "1.A",
            "students": [{ "studentId": 4, "studentName": "Dana" }]
        }
    }]))
    .unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, 4);
    assert_eq!(students[0].classroom_name(), "1.A");
}

#[test]
fn student_with_numeric_classroom_has_no_classroom() {
    let students = Student::decode_list(json!([{ "studentId": 1, "classRoom": 3 }])).unwrap();
    assert_eq!(students[0].classroom, None);
    assert_eq!(students[0].classroom_name(), "");
}

// =============================================================
// EntityKind
// =============================================================

#[test]
fn kind_paths_follow_endpoint_table() {
    assert_eq!(EntityKind::Student.list_path(), "/api/student");
    assert_eq!(EntityKind::Teacher.delete_path(5), "/api/teacher/deleteTeacher/5");
    assert_eq!(<Parent as Entity>::KIND, EntityKind::Parent);
}

#[test]
fn kind_labels_are_distinct() {
    let labels: HashSet<&str> = EntityKind::ALL.iter().map(|k| k.label()).collect();
    assert_eq!(labels.len(), 4);
}

#[test]
fn top_level_numeric_reference_is_skipped() {
    let students = Student::decode_list(json!([
        {
            "studentId": 1,
            "classRoom": { "classRoomId": 7, "classRoomName": "3.C", "students": [1, { "studentId": 2 }] }
        },
        2
    ]))
    .unwrap();
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn nested_student_with_numeric_classroom_inherits_enclosing() {
    let students = Student::decode_list(json!([{
        "studentId": 1,
        "classRoom": {
            "classRoomId": 7,
            "classRoomName": "3.C",
            "students": [{ "studentId": 2, "studentName": "Bára", "classRoom": 7 }]
        }
    }]))
    .unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].classroom, Some(ClassroomRef { id: 7, name: "3.C".to_owned() }));
}

#[test]
fn numeric_enclosing_classroom_yields_only_top_level_student() {
    let students = Student::decode_list(json!([
        { "studentId": 1, "studentName": "Adam", "classRoom": 7 },
        { "studentId": 3, "classRoom": { "classRoomId": 7, "classRoomName": "3.C", "students": [{ "studentId": 4 }] } }
    ]))
    .unwrap();
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(students[0].classroom, None);
}
