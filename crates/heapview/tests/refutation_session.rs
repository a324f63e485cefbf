//! End-to-end refutation sessions over a small heap graph.

use std::collections::BTreeSet;

use heapview::{HeapNode, PointsToGraph, SuppressibleGraphView, ViewError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn x() -> HeapNode {
    HeapNode::pointer("Main.main:x")
}

fn y() -> HeapNode {
    HeapNode::pointer("Main.main:y")
}

fn a1() -> HeapNode {
    HeapNode::instance("new A@1")
}

fn field_f() -> HeapNode {
    HeapNode::pointer("A.f")
}

fn b2() -> HeapNode {
    HeapNode::instance("new B@2")
}

/// x -> A@1 -> A.f -> B@2 <- y
fn heap() -> SuppressibleGraphView<PointsToGraph<HeapNode>> {
    SuppressibleGraphView::new(PointsToGraph::from_edges([
        (x(), a1()),
        (a1(), field_f()),
        (field_f(), b2()),
        (y(), b2()),
    ])
    .unwrap())
}

fn render(view: &SuppressibleGraphView<PointsToGraph<HeapNode>>) -> String {
    let mut lines = Vec::new();
    for node in view.all_nodes() {
        let mut succ: Vec<String> = view
            .successors(node)
            .unwrap()
            .map(|n| n.to_string())
            .collect();
        succ.sort();
        lines.push(format!("{node} -> [{}]", succ.join(", ")));
    }
    for (src, dst) in view.suppressed().sorted_edges() {
        let src = view.node_of(src).unwrap();
        let dst = view.node_of(dst).unwrap();
        lines.push(format!("hidden: {src} -> {dst}"));
    }
    lines.join("\n")
}

fn names(nodes: Vec<&HeapNode>) -> BTreeSet<String> {
    nodes.into_iter().map(|n| n.to_string()).collect()
}

#[test]
fn abcd_scenario() {
    init_tracing();
    let mut view = SuppressibleGraphView::new(PointsToGraph::from_edges([
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
    ])
    .unwrap());
    view.add_ignore_edge(&"A", &"B").unwrap();

    let succ: BTreeSet<_> = view.successors(&"A").unwrap().copied().collect();
    let pred_b: BTreeSet<_> = view.predecessors(&"B").unwrap().copied().collect();
    let pred_d: BTreeSet<_> = view.predecessors(&"D").unwrap().copied().collect();

    assert_eq!(succ, BTreeSet::from(["C"]));
    assert!(pred_b.is_empty());
    assert_eq!(pred_d, BTreeSet::from(["B"]));
}

#[test]
fn refuting_a_field_edge_cuts_backward_search() {
    init_tracing();
    let mut view = heap();

    assert_eq!(
        names(view.backward_reachable(&b2()).unwrap()),
        names(vec![&b2(), &field_f(), &a1(), &x(), &y()])
    );

    view.add_ignore_edge(&field_f(), &b2()).unwrap();

    assert_eq!(
        names(view.backward_reachable(&b2()).unwrap()),
        names(vec![&b2(), &y()])
    );
    assert_eq!(view.all_nodes().count(), 5);
}

#[test]
fn adjacency_dump_after_refutation() {
    init_tracing();
    let mut view = heap();
    view.add_ignore_edge(&y(), &b2()).unwrap();
    view.add_ignore_edge(&field_f(), &b2()).unwrap();

    insta::assert_snapshot!(render(&view), @r"
    ptr:Main.main:x -> [obj:new A@1]
    obj:new A@1 -> [ptr:A.f]
    ptr:A.f -> []
    obj:new B@2 -> []
    ptr:Main.main:y -> []
    hidden: ptr:A.f -> obj:new B@2
    hidden: ptr:Main.main:y -> obj:new B@2
    ");
}

#[test]
fn session_restart_forgets_suppression() {
    init_tracing();
    let mut view = heap();
    view.add_ignore_edge(&x(), &a1()).unwrap();
    assert_eq!(view.successors(&x()).unwrap().count(), 0);

    let (base, suppressed) = view.into_parts();
    assert_eq!(suppressed.len(), 1);

    let view = SuppressibleGraphView::new(base);
    assert_eq!(view.successors(&x()).unwrap().count(), 1);
}

#[test]
fn unknown_node_is_recoverable() {
    init_tracing();
    let mut view = heap();
    let ghost = HeapNode::instance("never allocated");

    let err = view.predecessors(&ghost).unwrap_err();
    assert!(matches!(err, ViewError::UnknownNode { .. }));
    assert!(!err.is_fatal());

    // the session carries on unaffected
    assert!(view.add_ignore_edge(&y(), &b2()).unwrap());
    assert_eq!(view.predecessors(&b2()).unwrap().count(), 1);
}

#[test]
fn bulk_adjacency_is_fatal() {
    init_tracing();
    let view = heap();
    let err = view.successor_numbers(&x()).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(
        err,
        ViewError::UnsupportedQuery {
            query: "successor_numbers"
        }
    ));
}
