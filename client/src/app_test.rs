use super::*;

#[test]
fn path_and_segment_agree() {
    for route in [AppRoute::Home, AppRoute::Login] {
        assert_eq!(route.path(), format!("/{}", route.segment()));
    }
}

#[test]
fn home_is_the_root_path() {
    assert_eq!(AppRoute::Home.path(), "/");
    assert_eq!(AppRoute::Login.path(), "/login");
}
