//! Custom assertions for generated artifacts

/// Assert that `needles` occur in `haystack` in the given order
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("expected {needle:?} after byte {from} in:\n{haystack}"),
        }
    }
}

/// Assert that the artifact declares the helper macro for `marker_line`
pub fn assert_has_helper(artifact: &str, marker_line: u32) {
    let define = format!("#define __DEF_CLASS_HELPER_L_{marker_line}()");
    assert!(
        artifact.contains(&define),
        "expected {define:?} in:\n{artifact}"
    );
}

/// Assert the exact ordered list of `RegisterDefault<...>` calls
pub fn assert_registered(registry: &str, expected: &[&str]) {
    let found: Vec<&str> = registry
        .match_indices("RegisterDefault<")
        .map(|(pos, tag)| {
            let start = pos + tag.len();
            let end = start + registry[start..].find(">()").expect("closing >()");
            &registry[start..end]
        })
        .collect();
    assert_eq!(found, expected, "registry:\n{registry}");
}
