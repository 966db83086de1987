use super::slugify;

#[test]
fn test_collapses_whitespace_and_periods() {
    assert_eq!(slugify("Hello   World. Two"), "Hello-World-Two");
}

#[test]
fn test_leaves_everything_else_alone() {
    assert_eq!(slugify("Ünïcode_Title!"), "Ünïcode_Title!");
    assert_eq!(slugify("CamelCase"), "CamelCase");
    assert_eq!(slugify("a|b"), "a|b");
}

#[test]
fn test_pipes_survive_next_to_separators() {
    assert_eq!(slugify("Input | Output"), "Input-|-Output");
    assert_eq!(slugify("a.|.b"), "a-|-b");
}

#[test]
fn test_edges_become_hyphens() {
    assert_eq!(slugify(" v1.2 "), "-v1-2-");
    assert_eq!(slugify("..."), "-");
    assert_eq!(slugify(""), "");
}

#[test]
fn test_tabs_and_carriage_returns_count_as_whitespace() {
    assert_eq!(slugify("a\tb\r"), "a-b-");
}
