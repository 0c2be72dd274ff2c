//! Integration tests for dependency resolution

use std::collections::HashSet;
use yamk::config::parse_config;
use yamk::runner::resolve;

#[test]
fn test_diamond_resolves_to_exact_order() {
    let config = parse_config(
        r#"
tasks:
  base: {}
  mid:
    dependencies: [base]
  top:
    dependencies: [mid, base]
"#,
    )
    .unwrap();

    let order = resolve("top", &config.tasks);
    assert_eq!(order, vec!["base", "mid", "top"]);
}

#[test]
fn test_target_is_last_and_unique() {
    let config = parse_config(
        r#"
tasks:
  fetch: {}
  configure:
    dependencies: [fetch]
  compile:
    dependencies: [configure, fetch]
  link:
    dependencies: [compile, configure]
"#,
    )
    .unwrap();

    let order = resolve("link", &config.tasks);

    assert_eq!(order.last().map(|s| s.as_str()), Some("link"));

    let unique: HashSet<&String> = order.iter().collect();
    assert_eq!(unique.len(), order.len());

    for (i, name) in order.iter().enumerate() {
        for dep in &config.tasks[name].dependencies {
            let dep_pos = order.iter().position(|n| n == dep).unwrap();
            assert!(dep_pos < i, "{} must appear before {}", dep, name);
        }
    }
}

#[test]
fn test_dependencies_follow_declaration_order() {
    let config = parse_config(
        r#"
tasks:
  first: {}
  second: {}
  third: {}
  all:
    dependencies: [first, second, third]
"#,
    )
    .unwrap();

    let order = resolve("all", &config.tasks);
    assert_eq!(order, vec!["first", "second", "third", "all"]);
}

#[test]
fn test_unknown_task_resolves_empty() {
    let config = parse_config(
        r#"
tasks:
  build: {}
"#,
    )
    .unwrap();

    assert!(resolve("missing", &config.tasks).is_empty());
}

#[test]
fn test_deep_chain_resolves() {
    // Deep graphs must not hit recursion limits; the traversal is iterative
    let mut yaml = String::from("tasks:\n  t0: {}\n");
    for i in 1..500 {
        yaml.push_str(&format!("  t{}:\n    dependencies: [t{}]\n", i, i - 1));
    }
    let config = parse_config(&yaml).unwrap();

    let order = resolve("t499", &config.tasks);
    assert_eq!(order.len(), 500);
    assert_eq!(order[0], "t0");
    assert_eq!(order[499], "t499");
}
