use super::*;

#[test]
fn clicking_a_closed_panel_opens_it() {
    assert_eq!(toggle_panel(None, 2), Some(2));
    assert_eq!(toggle_panel(Some(0), 2), Some(2));
}

#[test]
fn clicking_the_open_panel_closes_it() {
    assert_eq!(toggle_panel(Some(1), 1), None);
}
