use super::test_helpers::{assert_cli_success, assert_output_contains, TestBakery};

/// push, push, pop, clear, list against a fresh bakery
#[test]
fn test_push_pop_clear_list_scenario() {
    let bakery = TestBakery::new();

    let out = bakery.stdout(&["push", "a"]);
    assert!(out.contains("Pushed \"a\"."), "Output: {out}");
    assert_eq!(bakery.cake_file("keki").as_deref(), Some("a\n"));

    bakery.stdout(&["push", "b"]);
    assert_eq!(bakery.cake_file("keki").as_deref(), Some("b\na\n"));

    let out = bakery.stdout(&["pop"]);
    assert!(out.contains("Popped \"b\"."), "Output: {out}");
    assert_eq!(bakery.cake_file("keki").as_deref(), Some("a\n"));

    let out = bakery.stdout(&["clear"]);
    assert!(out.contains("No more layers in the cake."), "Output: {out}");
    assert_eq!(bakery.cake_file("keki").as_deref(), Some(""));

    let out = bakery.stdout(&["list"]);
    assert!(out.contains("No layers in the cake."), "Output: {out}");
}

#[test]
fn test_list_renders_top_first_with_marker() {
    let bakery = TestBakery::new();
    for layer in ["bottom", "middle", "top"] {
        bakery.stdout(&["push", layer]);
    }

    let out = bakery.stdout(&["list"]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Cake: keki");
    assert_eq!(lines[1], "-".repeat("keki".len() + 6));
    assert_eq!(lines[2], "top <--");
    assert_eq!(lines[3], "middle");
    assert_eq!(lines[4], "bottom");
}

#[test]
fn test_list_is_the_default_command() {
    let bakery = TestBakery::new();
    bakery.stdout(&["push", "only layer"]);

    let out = bakery.stdout(&[]);
    assert!(out.contains("only layer <--"), "Output: {out}");
}

#[test]
fn test_eat_alias_clears() {
    let bakery = TestBakery::new();
    bakery.stdout(&["push", "crumb"]);

    let output = bakery.run(&["eat"]);
    assert_cli_success(&output, "eat");
    assert_eq!(bakery.cake_file("keki").as_deref(), Some(""));
}

#[test]
fn test_pop_empty_cake_reports_and_keeps_file_absent() {
    let bakery = TestBakery::new();

    let output = bakery.run(&["pop"]);

    assert_cli_success(&output, "pop");
    assert_output_contains(&output, "No layers in the cake.", "pop on empty cake");
    assert_eq!(bakery.cake_file("keki"), None);
}

#[test]
fn test_push_reads_layer_from_stdin_when_omitted() {
    let bakery = TestBakery::new();

    let output = bakery.run_with_input(&["push"], Some("typed layer\n"));

    assert_cli_success(&output, "push");
    assert_output_contains(&output, "Item name: ", "push prompt");
    assert_eq!(bakery.cake_file("keki").as_deref(), Some("typed layer\n"));
}

#[test]
fn test_push_cancelled_on_empty_input() {
    let bakery = TestBakery::new();

    let output = bakery.run_with_input(&["push"], Some("\n"));

    assert_cli_success(&output, "push");
    assert_output_contains(&output, "Cancelled.", "push with empty input");
    assert_eq!(bakery.cake_file("keki"), None);
}

#[test]
fn test_list_does_not_rewrite_file() {
    let bakery = TestBakery::new();
    bakery.stdout(&["push", "x"]);
    let before = std::fs::metadata(bakery.cake_path("keki"))
        .unwrap()
        .modified()
        .unwrap();

    bakery.stdout(&["list"]);
    bakery.stdout(&["list"]);

    let after = std::fs::metadata(bakery.cake_path("keki"))
        .unwrap()
        .modified()
        .unwrap();
    assert_eq!(before, after);
    assert_eq!(bakery.cake_file("keki").as_deref(), Some("x\n"));
}
