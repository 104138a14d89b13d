//! End-to-end pipelines over text, driven the way an application would.

use pushflow::prelude::*;

#[test]
fn test_uppercase_into_output_string() {
    let my_string = String::from("Hello World");
    let mut output = String::new();

    yield_iter(my_string.chars()) | map(|c: char| c.to_ascii_uppercase()) | insert_back(&mut output);

    assert_eq!(output, "HELLO WORLD");
}

#[test]
fn test_lowercase_overwrites_existing_buffer() {
    let my_string = String::from("Hello World");
    let mut output: Vec<char> = "HELLO WORLD".chars().collect();

    yield_iter(my_string.chars())
        | map(|c: char| c.to_ascii_lowercase())
        | overwrite_forward(output.iter_mut());

    assert_eq!(output.iter().collect::<String>(), "hello world");
}

#[test]
fn test_three_drives_share_one_overwriter() {
    let mut output = vec!['.'; 11];
    let mut overwriter = overwrite_forward(output.iter_mut());

    yield_from_copy("Hello".chars().collect::<Vec<_>>()) | overwriter.by_ref();
    yield_from_copy(['.']) | overwriter.by_ref();
    yield_from_copy("World".chars().collect::<Vec<_>>()) | overwriter.by_ref();

    assert_eq!(overwriter.finish(), Ok(11));
    assert_eq!(output.iter().collect::<String>(), "Hello.World");
}

#[test]
fn test_partial_fill_leaves_tail_untouched() {
    let mut output = vec!['.'; 11];
    let mut overwriter = overwrite_forward(output.iter_mut());

    yield_iter("Hello".chars()) | overwriter.by_ref();
    assert_eq!(overwriter.written(), 5);
    drop(overwriter);

    assert_eq!(output.iter().collect::<String>(), "Hello......");
}

#[test]
fn test_reusable_stage_chain_over_several_sources() {
    let mut words = Vec::new();
    let mut sink = filter(|w: &&str| !w.is_empty()) | map(str::len) | insert_back(&mut words);

    yield_from_copy(["push", "", "flow"]) | sink.by_ref();
    yield_iter("a bb".split(' ')) | sink.by_ref();
    drop(sink);

    assert_eq!(words, vec![4, 4, 1, 2]);
}

#[test]
fn test_compose_builds_the_same_pipeline_as_the_operator() {
    let text = "Fused";
    let mut by_operator = String::new();
    let mut by_function = String::new();

    yield_iter(text.chars()) | filter(|c: &char| c.is_lowercase()) | insert_back(&mut by_operator);
    compose(
        yield_iter(text.chars()),
        compose(filter(|c: &char| c.is_lowercase()), insert_back(&mut by_function)),
    );

    assert_eq!(by_operator, "used");
    assert_eq!(by_operator, by_function);
}
