use super::*;

#[test]
fn url_joins_without_double_slash() {
    assert_eq!(url("https://api.test/", "/api/login"), "https://api.test/api/login");
    assert_eq!(url("https://api.test", "/api/login"), "https://api.test/api/login");
}

#[test]
fn url_inserts_missing_slash() {
    assert_eq!(url("http://localhost:8080", "api/parent"), "http://localhost:8080/api/parent");
}

#[test]
fn delete_paths_match_api_routes() {
    assert_eq!(classroom_delete_path(3), "/api/classroom/deleteClassRoom/3");
    assert_eq!(student_delete_path(7), "/api/deleteStudent/7");
    assert_eq!(teacher_delete_path(11), "/api/teacher/deleteTeacher/11");
    assert_eq!(parent_delete_path(2), "/api/parent/2");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}
