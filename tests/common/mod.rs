//! Shared record fixtures for integration tests.
//!
//! The fixture set mirrors a generator run over a small container library:
//! a duplicate label living in two unrelated scopes (`getNext`), a member
//! with overloads collapsed into one record (`getAdjacencyList`), class
//! entries whose first reference is the class page itself, and a global
//! symbol scoped to a file rather than a type (`main`).

use rstest::fixture;
use symdex::{RawRecord, RawReference, SymbolIndex};

/// A member reference inside `scope`.
pub fn reference(scope: &str, anchor_url: &str) -> RawReference {
    RawReference {
        scope: scope.to_string(),
        scope_label: scope.to_string(),
        anchor_url: anchor_url.to_string(),
        is_declaration_only: false,
    }
}

/// A reference to the defining page of `scope` itself.
pub fn declaration(scope: &str, anchor_url: &str) -> RawReference {
    RawReference {
        scope: scope.to_string(),
        scope_label: scope.to_string(),
        anchor_url: anchor_url.to_string(),
        is_declaration_only: true,
    }
}

pub fn record(label: &str, references: Vec<RawReference>) -> RawRecord {
    RawRecord {
        label: label.to_string(),
        references,
    }
}

/// Records in producer emission order. The two `getNext` records are
/// deliberately emitted `SLelement` before `DLelement` so tests can tell
/// result ordering apart from load ordering.
pub fn container_library() -> Vec<RawRecord> {
    vec![
        record(
            "getNext",
            vec![reference("SLelement", "classSLelement.html#aa11b")],
        ),
        record(
            "getNext",
            vec![reference("DLelement", "classDLelement.html#a0f6c")],
        ),
        record(
            "getAdjacencyList",
            vec![
                reference("GraphAdjList", "classGraphAdjList.html#a72f5"),
                reference("GraphAdjList", "classGraphAdjList.html#a4246"),
            ],
        ),
        record(
            "GraphAdjList",
            vec![
                declaration("GraphAdjList", "classGraphAdjList.html"),
                reference("GraphAdjList", "classGraphAdjList.html#a8c31"),
            ],
        ),
        record(
            "getPrev",
            vec![reference("DLelement", "classDLelement.html#a9d2e")],
        ),
        record(
            "setNext",
            vec![reference("SLelement", "classSLelement.html#ab44c")],
        ),
        record("size", vec![reference("ArrayList", "classArrayList.html#ae10f")]),
        record(
            "SLelement",
            vec![
                declaration("SLelement", "classSLelement.html"),
                reference("SLelement", "classSLelement.html#a77d0"),
            ],
        ),
        record(
            "getValue",
            vec![reference("Element", "classElement.html#a51b8")],
        ),
        record("Element", vec![declaration("Element", "classElement.html")]),
        record(
            "main",
            vec![RawReference {
                scope: String::new(),
                scope_label: "driver.cpp".to_string(),
                anchor_url: "driver_8cpp.html#a3c04".to_string(),
                is_declaration_only: false,
            }],
        ),
    ]
}

/// An index built strictly from [`container_library`].
#[fixture]
pub fn library_index() -> SymbolIndex {
    SymbolIndex::build(container_library()).expect("fixture records are well-formed")
}
