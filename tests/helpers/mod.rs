//! Shared graph fixtures and assertion helpers for the integration tests.

#![allow(dead_code)]

use docmodel::{GraphBuilder, SymbolFlags, SymbolGraph, SymbolId, SymbolKind, Type};

/// Decoded display names of a symbol list, in order.
pub fn display_names(graph: &SymbolGraph, syms: &[SymbolId]) -> Vec<String> {
    syms.iter()
        .map(|&sym| graph.display_name(sym).into_owned())
        .collect()
}

/// Assert a name list is non-decreasing.
pub fn assert_sorted(names: &[String]) {
    for pair in names.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "expected sorted names, got {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// A small standard library shape shared by several test files.
///
/// ```text
/// <root>
/// ├── package collections
/// │   ├── trait Seq                      (methods: length, map/2 overloads)
/// │   ├── class Buffer extends Seq       (method length, stable accessor size)
/// │   ├── object Buffer                  (companion of class Buffer)
/// │   ├── class Secret                   (private)
/// │   └── package nested
/// │       └── class Inner
/// └── package other
///     └── class Outside
/// ```
pub struct Library {
    pub graph: SymbolGraph,
    pub root: SymbolId,
    pub collections: SymbolId,
    pub seq: SymbolId,
    pub seq_length: SymbolId,
    pub map_group: SymbolId,
    pub map_a: SymbolId,
    pub map_b: SymbolId,
    pub buffer_class: SymbolId,
    pub buffer_length: SymbolId,
    pub buffer_size: SymbolId,
    pub buffer_object: SymbolId,
    pub secret: SymbolId,
    pub nested: SymbolId,
    pub inner: SymbolId,
    pub other: SymbolId,
    pub outside: SymbolId,
}

pub fn sample_library() -> Library {
    let mut builder = GraphBuilder::new();
    let root = builder.root();

    let collections = builder.add(root, "collections", SymbolKind::Package, SymbolFlags::EMPTY);

    let seq = builder.add(collections, "Seq", SymbolKind::Trait, SymbolFlags::EMPTY);
    let seq_length = builder.add(seq, "length", SymbolKind::Method, SymbolFlags::EMPTY);
    let map_a = builder.add_detached(seq, "map", SymbolKind::Method, SymbolFlags::EMPTY);
    let map_b = builder.add_detached(seq, "map", SymbolKind::Method, SymbolFlags::EMPTY);
    let map_group = builder
        .add_overload_group(seq, "map", vec![map_a, map_b])
        .expect("two alternatives");

    let buffer_class = builder.add(collections, "Buffer", SymbolKind::Class, SymbolFlags::EMPTY);
    builder.set_parents(buffer_class, vec![Type::reference(seq)]);
    let buffer_length = builder.add(
        buffer_class,
        "length",
        SymbolKind::Method,
        SymbolFlags::EMPTY,
    );
    let buffer_size = builder.add(
        buffer_class,
        "size",
        SymbolKind::Method,
        SymbolFlags::STABLE,
    );
    let buffer_object = builder.add(collections, "Buffer", SymbolKind::Object, SymbolFlags::EMPTY);
    builder.link_companions(buffer_class, buffer_object);

    let secret = builder.add(
        collections,
        "Secret",
        SymbolKind::Class,
        SymbolFlags::PRIVATE,
    );

    let nested = builder.add(collections, "nested", SymbolKind::Package, SymbolFlags::EMPTY);
    let inner = builder.add(nested, "Inner", SymbolKind::Class, SymbolFlags::EMPTY);

    let other = builder.add(root, "other", SymbolKind::Package, SymbolFlags::EMPTY);
    let outside = builder.add(other, "Outside", SymbolKind::Class, SymbolFlags::EMPTY);

    Library {
        graph: builder.finish(),
        root,
        collections,
        seq,
        seq_length,
        map_group,
        map_a,
        map_b,
        buffer_class,
        buffer_length,
        buffer_size,
        buffer_object,
        secret,
        nested,
        inner,
        other,
        outside,
    }
}
