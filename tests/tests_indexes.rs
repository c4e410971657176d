//! Alphabetical index, subtype index, and owner grouping.

mod helpers;

use docmodel::doc::{alpha_index, group_symbols, sub_templates, walk};
use docmodel::{GraphBuilder, SymbolFlags, SymbolKind, Type};

#[test]
fn test_alpha_index_buckets_by_uppercased_initial() {
    let lib = helpers::sample_library();
    let index = alpha_index(&lib.graph, lib.collections, None);

    // `collections` and `Buffer` (class + object) share the C and B buckets.
    assert!(index.bucket('C').contains(&lib.collections));
    assert!(index.bucket('B').contains(&lib.buffer_class));
    assert!(index.bucket('B').contains(&lib.buffer_object));
    // Lowercase names land under their uppercased letter.
    assert!(index.bucket('N').contains(&lib.nested));
    assert!(index.bucket('L').contains(&lib.seq_length));

    // Letters ascending, bucket members name-sorted.
    let mut sorted_letters = index.letters.clone();
    sorted_letters.sort_unstable();
    assert_eq!(index.letters, sorted_letters);
    for letter in &index.letters {
        helpers::assert_sorted(&helpers::display_names(&lib.graph, index.bucket(*letter)));
    }
}

#[test]
fn test_alpha_index_every_symbol_in_exactly_one_bucket() {
    let lib = helpers::sample_library();
    let index = alpha_index(&lib.graph, lib.collections, None);

    let walked = walk(&lib.graph, lib.collections).count();
    let indexed: usize = index.letters.iter().map(|&ch| index.bucket(ch).len()).sum();
    assert_eq!(indexed, walked);
}

#[test]
fn test_sub_templates_keeps_instantiated_parent_types() {
    let mut builder = GraphBuilder::new();
    let root = builder.root();
    let pkg = builder.add(root, "p", SymbolKind::Package, SymbolFlags::EMPTY);
    let ordered = builder.add(pkg, "Ordered", SymbolKind::Trait, SymbolFlags::EMPTY);
    let int = builder.add(pkg, "Int", SymbolKind::Class, SymbolFlags::EMPTY);
    let string = builder.add(pkg, "Str", SymbolKind::Class, SymbolFlags::EMPTY);

    let ordered_int = Type::Reference {
        symbol: ordered,
        args: vec![Type::reference(int)],
    };
    let ordered_str = Type::Reference {
        symbol: ordered,
        args: vec![Type::reference(string)],
    };
    let a = builder.add(pkg, "Count", SymbolKind::Class, SymbolFlags::EMPTY);
    builder.set_parents(a, vec![ordered_int.clone()]);
    let b = builder.add(pkg, "Label", SymbolKind::Class, SymbolFlags::EMPTY);
    builder.set_parents(b, vec![ordered_str.clone()]);
    let graph = builder.finish();

    let subs = sub_templates(&graph, root, None);
    let under_ordered = subs.get(&ordered).expect("Ordered has subtypes");
    assert_eq!(
        under_ordered,
        &vec![(a, ordered_int), (b, ordered_str)]
    );
}

#[test]
fn test_sub_templates_registers_every_declared_parent() {
    let lib = helpers::sample_library();
    let subs = sub_templates(&lib.graph, lib.root, None);

    let under_seq = subs.get(&lib.seq).expect("Seq has subtypes");
    assert_eq!(under_seq.len(), 1);
    assert_eq!(under_seq[0].0, lib.buffer_class);
    // Types without subtypes get no entry at all.
    assert!(!subs.contains_key(&lib.inner));
}

#[test]
fn test_group_symbols_sorts_owners_and_members() {
    let lib = helpers::sample_library();
    let input = vec![
        lib.outside,
        lib.buffer_length,
        lib.seq_length,
        lib.inner,
        lib.buffer_class,
    ];
    let groups = group_symbols(&lib.graph, &input);

    let owner_paths: Vec<String> = groups
        .owners
        .iter()
        .map(|&owner| lib.graph.qualified_name(owner))
        .collect();
    assert_eq!(
        owner_paths,
        vec![
            "collections",
            "collections.Buffer",
            "collections.Seq",
            "collections.nested",
            "other",
        ]
    );

    // Every input symbol under its true owner, members name-sorted.
    assert_eq!(groups.members(lib.collections), &[lib.buffer_class]);
    assert_eq!(groups.members(lib.buffer_class), &[lib.buffer_length]);
    assert_eq!(groups.members(lib.seq), &[lib.seq_length]);
    let total: usize = groups
        .owners
        .iter()
        .map(|&owner| groups.members(owner).len())
        .sum();
    assert_eq!(total, input.len());
}
