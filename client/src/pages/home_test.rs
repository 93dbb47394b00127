use super::*;

#[test]
fn tile_target_navigates_when_signed_in() {
    assert_eq!(tile_target(true, "/students"), Ok("/students"));
}

#[test]
fn tile_target_hints_when_signed_out() {
    assert_eq!(tile_target(false, "/students"), Err(LOGIN_REQUIRED_MESSAGE));
}

#[test]
fn tiles_cover_every_table_route() {
    let paths: Vec<&str> = TILES.iter().map(|t| t.path).collect();
    assert_eq!(paths, vec!["/classrooms", "/teachers", "/students", "/parents"]);
}
