use hamlet::matcher::{
    array, array_with_size, close_to, collection_with_size, eq, greater_than_or_equal_to,
    has_item_in_array, less_than, map_with_size, matches_pattern,
};
use hamlet::{render, Description, Matcher};

#[test]
fn composed_matchers_render_nested_descriptions() {
    assert_eq!(
        render(&has_item_in_array(close_to(1.0, 0.5))),
        "an array containing a Number within 0.5 of 1.0"
    );

    assert_eq!(
        render(&array_with_size(greater_than_or_equal_to(2usize))),
        "an array with size a value equal to or greater than 2"
    );

    assert_eq!(
        render(&collection_with_size(less_than(10usize))),
        "a collection with size a value less than 10"
    );

    assert_eq!(
        render(&map_with_size(eq(3usize))),
        "a map with size 3"
    );
}

#[test]
fn element_matchers_of_mixed_kinds_render_in_order() {
    let matcher = array(vec![
        Box::new(eq(1)) as Box<dyn Matcher<i32>>,
        Box::new(less_than(10)),
        Box::new(close_to(5.0, 1.0)),
    ]);

    assert_eq!(
        render(&matcher),
        "[1, a value less than 10, a Number within 1.0 of 5.0]"
    );

    assert!(matcher.matches(&[1, 9, 5]));
    assert!(!matcher.matches(&[1, 9, 7]));
}

#[test]
fn a_failure_message_can_be_assembled_from_parts() {
    let matcher = matches_pattern("[a-z]+");

    let mut message = Description::new();
    message
        .append_text("expected ")
        .append_description_of(&matcher)
        .append_text(" but was ")
        .append_value(&"FUU");

    assert_eq!(
        message.to_string(),
        "expected matches /[a-z]+/ but was \"FUU\""
    );
}

#[test]
fn descriptions_render_only_on_demand_and_repeatedly() {
    let matcher = eq(42);

    let first = render(&matcher);
    let second = render(&matcher);

    assert_eq!(first, second);
}
