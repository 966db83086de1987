use super::{render_markdown, render_tree, rows};
use crate::toc::build_heading_forest;

const DOC: &str = "# Intro\n## Setup\n### Linux\n### macOS\n## Usage\n# Reference\n## API v1.0";

#[test]
fn test_rows_prefixes_follow_open_ancestors() {
    let forest = build_heading_forest("# A\n## B\n### C\n## D\n### E\n# F");
    let prefixes: Vec<String> = rows(&forest).into_iter().map(|row| row.prefix).collect();
    assert_eq!(prefixes, ["", "├── ", "│   └── ", "└── ", "    └── ", ""]);
}

#[test]
fn test_render_tree() {
    let forest = build_heading_forest(DOC);
    let expected = "\
Intro (#Intro)
├── Setup (#Setup)
│   ├── Linux (#Linux)
│   └── macOS (#macOS)
└── Usage (#Usage)
Reference (#Reference)
└── API v1.0 (#API-v1-0)
";
    assert_eq!(render_tree(&forest), expected);
}

#[test]
fn test_render_markdown_indents_by_display_depth() {
    let forest = build_heading_forest(DOC);
    let expected = "\
- [Intro](#Intro)
  - [Setup](#Setup)
    - [Linux](#Linux)
    - [macOS](#macOS)
  - [Usage](#Usage)
- [Reference](#Reference)
  - [API v1.0](#API-v1-0)
";
    assert_eq!(render_markdown(&forest, 2), expected);
}

#[test]
fn test_render_markdown_ignores_raw_depth_gaps() {
    let forest = build_heading_forest("## Top\n###### Way down");
    assert_eq!(
        render_markdown(&forest, 4),
        "- [Top](#Top)\n    - [Way down](#Way-down)\n"
    );
}

#[test]
fn test_empty_forest_renders_nothing() {
    let forest = build_heading_forest("no headings here");
    assert_eq!(render_tree(&forest), "");
    assert_eq!(render_markdown(&forest, 2), "");
}
