use super::*;

#[test]
fn pages_round_up() {
    assert_eq!(total_pages(0, 6), 1);
    assert_eq!(total_pages(1, 6), 1);
    assert_eq!(total_pages(6, 6), 1);
    assert_eq!(total_pages(7, 6), 2);
    assert_eq!(total_pages(13, 6), 3);
}

#[test]
fn degenerate_inputs_stay_at_one_page() {
    assert_eq!(total_pages(-5, 6), 1);
    assert_eq!(total_pages(10, 0), 1);
}
