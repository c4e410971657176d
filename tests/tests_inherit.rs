//! Inheritance flattening and override resolution.

mod helpers;

use docmodel::doc::{collect_members, overridden_by};
use docmodel::{GraphBuilder, SymbolFlags, SymbolGraph, SymbolId, SymbolKind, Type};

/// A extends B, C; B extends D; C extends D — the classic diamond.
struct Diamond {
    graph: SymbolGraph,
    a: SymbolId,
    d_base: SymbolId,
}

fn diamond() -> Diamond {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    let pkg = builder.add(root, "p", SymbolKind::Package, SymbolFlags::EMPTY);

    let d = builder.add(pkg, "D", SymbolKind::Trait, SymbolFlags::EMPTY);
    let d_base = builder.add(d, "base", SymbolKind::Method, SymbolFlags::EMPTY);
    let b = builder.add(pkg, "B", SymbolKind::Trait, SymbolFlags::EMPTY);
    builder.set_parents(b, vec![Type::reference(d)]);
    let c = builder.add(pkg, "C", SymbolKind::Trait, SymbolFlags::EMPTY);
    builder.set_parents(c, vec![Type::reference(d)]);
    let a = builder.add(pkg, "A", SymbolKind::Class, SymbolFlags::EMPTY);
    builder.set_parents(a, vec![Type::reference(b), Type::reference(c)]);

    Diamond {
        graph: builder.finish(),
        a,
        d_base,
    }
}

#[test]
fn test_diamond_lineage_contributes_each_name_once() {
    let fixture = diamond();
    let members = collect_members(&fixture.graph, fixture.a);

    let base_count = members
        .iter()
        .filter(|&&sym| sym == fixture.d_base)
        .count();
    assert_eq!(base_count, 1, "diamond base member duplicated");
}

#[test]
fn test_collect_members_includes_own_and_inherited() {
    let lib = helpers::sample_library();
    let members = collect_members(&lib.graph, lib.buffer_class);

    // Own declarations win their name; inherited names follow.
    assert!(members.contains(&lib.buffer_length));
    assert!(!members.contains(&lib.seq_length), "shadowed inherited member leaked");
    assert!(members.contains(&lib.buffer_size));
    // Inherited overloads come expanded into alternatives.
    assert!(members.contains(&lib.map_a));
    assert!(members.contains(&lib.map_b));
    assert!(!members.contains(&lib.map_group));
}

#[test]
fn test_collect_members_drops_irrelevant_alternatives() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    let cls = builder.add(root, "A", SymbolKind::Class, SymbolFlags::EMPTY);
    let public_f = builder.add_detached(cls, "f", SymbolKind::Method, SymbolFlags::EMPTY);
    let private_f = builder.add_detached(cls, "f", SymbolKind::Method, SymbolFlags::PRIVATE);
    builder
        .add_overload_group(cls, "f", vec![public_f, private_f])
        .expect("two alternatives");
    let graph = builder.finish();

    let members = collect_members(&graph, cls);
    assert!(members.contains(&public_f));
    assert!(!members.contains(&private_f));
}

#[test]
fn test_overridden_by_finds_parent_declaration() {
    let lib = helpers::sample_library();
    assert_eq!(
        overridden_by(&lib.graph, lib.buffer_length),
        Some(lib.seq_length)
    );
}

#[test]
fn test_overridden_by_none_without_parent_declaration() {
    let lib = helpers::sample_library();
    assert_eq!(overridden_by(&lib.graph, lib.buffer_size), None);
    // A trait's own fresh method overrides nothing.
    assert_eq!(overridden_by(&lib.graph, lib.seq_length), None);
}

#[test]
fn test_overridden_by_walks_transitive_parents() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    let pkg = builder.add(root, "p", SymbolKind::Package, SymbolFlags::EMPTY);
    let top = builder.add(pkg, "Top", SymbolKind::Trait, SymbolFlags::EMPTY);
    let top_run = builder.add(top, "run", SymbolKind::Method, SymbolFlags::EMPTY);
    let mid = builder.add(pkg, "Mid", SymbolKind::Trait, SymbolFlags::EMPTY);
    builder.set_parents(mid, vec![Type::reference(top)]);
    let bottom = builder.add(pkg, "Bottom", SymbolKind::Class, SymbolFlags::EMPTY);
    builder.set_parents(bottom, vec![Type::reference(mid)]);
    let bottom_run = builder.add(bottom, "run", SymbolKind::Method, SymbolFlags::EMPTY);
    let graph = builder.finish();

    // `Mid` declares nothing; the override target sits two levels up.
    assert_eq!(overridden_by(&graph, bottom_run), Some(top_run));
}

#[test]
fn test_overridden_by_requires_matching_kind() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    let parent = builder.add(root, "P", SymbolKind::Trait, SymbolFlags::EMPTY);
    builder.add(parent, "size", SymbolKind::Method, SymbolFlags::EMPTY);
    let child = builder.add(root, "C", SymbolKind::Class, SymbolFlags::EMPTY);
    builder.set_parents(child, vec![Type::reference(parent)]);
    let field = builder.add(child, "size", SymbolKind::Field, SymbolFlags::EMPTY);
    let graph = builder.finish();

    assert_eq!(overridden_by(&graph, field), None);
}
