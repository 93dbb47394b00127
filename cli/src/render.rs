//! Plain-text table output for `list` commands.

use records::page::Page;
use records::{Classroom, Parent, Student, Teacher};

/// A record printable as one tab-separated line.
pub trait Row {
    const HEADER: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl Row for Classroom {
    const HEADER: &'static [&'static str] = &["id", "name", "teacher", "students"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.teacher_name().unwrap_or_default().to_owned(),
            self.students.len().to_string(),
        ]
    }
}

impl Row for Student {
    const HEADER: &'static [&'static str] = &["id", "name", "surname", "classroom", "parents"];

    fn cells(&self) -> Vec<String> {
        let parents: Vec<String> = self.parents.iter().map(Parent::display_name).collect();
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.surname.clone(),
            self.classroom_name().to_owned(),
            parents.join(", "),
        ]
    }
}

impl Row for Teacher {
    const HEADER: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.display_name()]
    }
}

impl Row for Parent {
    const HEADER: &'static [&'static str] = &["id", "name", "email", "phone"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.display_name(), self.email.clone(), self.phone.clone()]
    }
}

/// Header, one line per row, then a `page N of M (K total)` footer.
pub fn render_page<T: Row>(page: &Page<T>) -> String {
    let mut out = T::HEADER.join("\t");
    out.push('\n');
    for row in &page.items {
        // Tabs or newlines inside values would break the columns.
        let cells: Vec<String> = row.cells().into_iter().map(|c| c.replace(['\t', '\n'], " ")).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out.push_str(&format!("page {} of {} ({} total)\n", page.page, page.total_pages, page.total_items));
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
