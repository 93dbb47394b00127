use records::model::{ClassroomRef, TeacherRef};

use super::*;

fn teacher(id: i64, name: &str, surname: &str) -> Teacher {
    Teacher { id, name: name.to_owned(), surname: surname.to_owned(), full_name: None }
}

#[test]
fn render_page_prints_header_rows_and_footer() {
    let page = records::page::paginate(&[teacher(1, "Eva", "Malá"), teacher(2, "Jan", "Velký")], 1, 10);
    let out = render_page(&page);
    assert_eq!(out, "id\tname\n1\tEva Malá\n2\tJan Velký\npage 1 of 1 (2 total)\n");
}

#[test]
fn render_page_reports_later_pages() {
    let rows: Vec<Teacher> = (1..=12).map(|i| teacher(i, "T", &i.to_string())).collect();
    let out = render_page(&records::page::paginate(&rows, 2, 10));
    assert_eq!(out.lines().count(), 4);
    assert!(out.ends_with("page 2 of 2 (12 total)\n"));
}

#[test]
fn empty_page_still_has_footer() {
    let out = render_page::<Parent>(&records::page::paginate(&[], 1, 10));
    assert_eq!(out, "id\tname\temail\tphone\npage 1 of 1 (0 total)\n");
}

#[test]
fn classroom_cells_include_teacher_and_student_count() {
    let classroom = Classroom {
        id: 3,
        name: "2.B".to_owned(),
        teacher: Some(TeacherRef { id: 9, full_name: "Eva Malá".to_owned() }),
        students: vec![],
    };
    assert_eq!(classroom.cells(), vec!["3", "2.B", "Eva Malá", "0"]);
}

#[test]
fn student_cells_strip_tabs() {
    let student = Student {
        id: 1,
        name: "Adam\tX".to_owned(),
        surname: "Král".to_owned(),
        classroom: Some(ClassroomRef { id: 7, name: "3.C".to_owned() }),
        parents: vec![],
    };
    let page = Page { items: vec![student], page: 1, total_pages: 1, total_items: 1 };
    let out = render_page(&page);
    assert!(out.contains("1\tAdam X\tKrál\t3.C\t\n"));
}
