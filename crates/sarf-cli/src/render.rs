//! Plain-text views written to any `io::Write`.

use sarf::core::{
    index::{RootIndex, RootNode},
    obs::EventOps,
    scheme::SchemeStore,
    snapshot::LexiconReport,
};
use std::io::{self, Write};

/// Sideways tree, right subtree above its parent and left subtree below.
pub(crate) fn tree(index: &RootIndex, out: &mut impl Write) -> io::Result<()> {
    match index.head() {
        None => writeln!(out, "(no roots)"),
        head => branch(head, "", true, out),
    }
}

fn branch(
    node: Option<&RootNode>,
    prefix: &str,
    is_left: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(node) = node else {
        return Ok(());
    };

    let (above, below, elbow) = if is_left {
        ("│   ", "    ", "└── ")
    } else {
        ("    ", "│   ", "┌── ")
    };

    branch(node.right(), &format!("{prefix}{above}"), false, out)?;
    writeln!(out, "{prefix}{elbow}{}", node.root())?;
    branch(node.left(), &format!("{prefix}{below}"), true, out)
}

pub(crate) fn roots(index: &RootIndex, out: &mut impl Write) -> io::Result<()> {
    if index.is_empty() {
        return writeln!(out, "(no roots)");
    }

    for node in index {
        let derivatives = node
            .derivatives()
            .iter()
            .map(|d| format!("{} [{}]", d.word, d.scheme))
            .collect::<Vec<_>>();

        if derivatives.is_empty() {
            writeln!(out, "{}", node.root())?;
        } else {
            writeln!(out, "{}: {}", node.root(), derivatives.join(", "))?;
        }
    }

    Ok(())
}

pub(crate) fn schemes(store: &SchemeStore, out: &mut impl Write) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "(no schemes)");
    }

    for scheme in store.iter() {
        writeln!(out, "{} = {}", scheme.name, scheme.pattern)?;
    }

    Ok(())
}

/// Occupied buckets only, then a one-line occupancy summary.
pub(crate) fn buckets(store: &SchemeStore, out: &mut impl Write) -> io::Result<()> {
    for (i, bucket) in store.buckets().iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }

        let entries = bucket
            .iter()
            .map(|s| format!("{} = {}", s.name, s.pattern))
            .collect::<Vec<_>>();
        writeln!(out, "[{i:02}] {}", entries.join(" | "))?;
    }

    writeln!(
        out,
        "{}/{} buckets occupied, collisions at {:?}",
        store.occupied_buckets(),
        store.bucket_count(),
        store.collisions()
    )
}

pub(crate) fn report(
    report: &LexiconReport,
    ops: &EventOps,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "roots          {}", report.roots)?;
    writeln!(out, "derivatives    {}", report.derivatives)?;
    writeln!(out, "tree depth     {}", report.tree_depth)?;
    writeln!(out, "indexed words  {}", report.indexed_words)?;
    writeln!(
        out,
        "schemes        {} in {}/{} buckets, collisions at {:?}",
        report.schemes, report.occupied_buckets, report.bucket_count, report.collisions
    )?;
    writeln!(
        out,
        "events         generate {} | validate {} ({} matched) | analyze {} ({} matched, {} cached)",
        ops.generate_calls,
        ops.validate_calls,
        ops.validate_matches,
        ops.analyze_calls,
        ops.analyze_matches,
        ops.analyze_cache_hits
    )
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use sarf::core::scheme::Scheme;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).expect("write to vec");

        String::from_utf8(out).expect("utf-8 output")
    }

    fn index(roots: &[&str]) -> RootIndex {
        let mut index = RootIndex::new();
        for root in roots {
            index.insert(root, []).expect("valid root");
        }

        index
    }

    #[test]
    fn tree_puts_right_subtree_above() {
        let text = rendered(|out| tree(&index(&["كتب", "درس", "علم"]), out));

        assert_eq!(text, "└── كتب\n    │   ┌── علم\n    └── درس\n");
    }

    #[test]
    fn tree_with_both_children() {
        let text = rendered(|out| tree(&index(&["درس", "كتب", "خرج"]), out));

        assert_eq!(text, "│   ┌── كتب\n└── درس\n    └── خرج\n");
    }

    #[test]
    fn empty_views_say_so() {
        let empty = RootIndex::new();

        assert_eq!(rendered(|out| tree(&empty, out)), "(no roots)\n");
        assert_eq!(rendered(|out| roots(&empty, out)), "(no roots)\n");
        assert_eq!(
            rendered(|out| schemes(&SchemeStore::new(), out)),
            "(no schemes)\n"
        );
    }

    #[test]
    fn buckets_list_collisions() {
        let mut store = SchemeStore::new();
        store.insert(Scheme::new("a", "x"));
        store.insert(Scheme::new("مصدر", "فِعَالَة"));

        let text = rendered(|out| buckets(&store, out));
        assert_eq!(
            text,
            "[04] a = x | مصدر = فِعَالَة\n1/31 buckets occupied, collisions at [4]\n"
        );
    }
}
