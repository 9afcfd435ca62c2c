use glam::Vec3;
use vehicle_waypoint_editor::core::{
    auto_connect_nearby, chain_in_order, connect_all_pairs, FlatGround, NoGround, NodeTemplate,
    TopologyBuilder,
};
use vehicle_waypoint_editor::{Team, VehicleKind, WaypointGraph};

fn template() -> NodeTemplate {
    NodeTemplate::with_radius(8.0)
}

/// Zählt Nodes, die von `start` aus erreichbar sind, ohne die Kante (a, b) zu benutzen.
fn reachable_without_edge(graph: &WaypointGraph, start: u64, skip: (u64, u64)) -> usize {
    let mut seen = vec![start];
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        for next in graph.connections(current) {
            if (current, next) == skip || (next, current) == skip {
                continue;
            }
            if !seen.contains(&next) {
                seen.push(next);
                stack.push(next);
            }
        }
    }
    seen.len()
}

#[test]
fn test_ring_of_eight_is_single_cycle() {
    let mut graph = WaypointGraph::new(VehicleKind::Tank);
    let builder = TopologyBuilder::new(Vec3::new(5.0, 0.0, -5.0), &NoGround, template());

    let ids = builder.create_ring(&mut graph, 8, 80.0);

    assert_eq!(ids.len(), 8);
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 8);
    assert!(ids.iter().all(|&id| graph.degree(id) == 2));

    // Entfernen einer beliebigen Kante lässt einen zusammenhängenden Pfad übrig
    for (a, b) in graph.edges() {
        assert_eq!(reachable_without_edge(&graph, a, (a, b)), 8);
    }
    graph.verify_invariants().expect("Invarianten verletzt");
}

#[test]
fn test_grid_three_by_three_degrees() {
    let mut graph = WaypointGraph::new(VehicleKind::Wheeled);
    let builder = TopologyBuilder::new(Vec3::ZERO, &NoGround, template());

    let ids = builder.create_grid(&mut graph, 3, 3, 20.0);

    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.edge_count(), 12);
    // Zeilenweise: Ecken 0, 2, 6, 8; Mitte 4; Kantenmitten 1, 3, 5, 7
    assert_eq!(graph.degree(ids[4]), 4);
    for corner in [0, 2, 6, 8] {
        assert_eq!(graph.degree(ids[corner]), 2);
    }
    for side in [1, 3, 5, 7] {
        assert_eq!(graph.degree(ids[side]), 3);
    }
    assert_eq!(graph.node(ids[4]).expect("Mitte").position, Vec3::ZERO);
}

#[test]
fn test_grid_edge_count_formula_for_rectangles() {
    for (width, height) in [(1, 1), (1, 5), (4, 2), (5, 3)] {
        let mut graph = WaypointGraph::new(VehicleKind::Tank);
        let builder = TopologyBuilder::new(Vec3::ZERO, &NoGround, template());
        builder.create_grid(&mut graph, width, height, 10.0);

        assert_eq!(graph.node_count(), width * height);
        assert_eq!(
            graph.edge_count(),
            (width - 1) * height + (height - 1) * width,
            "Raster {width}×{height}"
        );
    }
}

#[test]
fn test_generators_project_each_node() {
    let ground = FlatGround::new(12.0, 100.0, 200.0);
    let mut graph = WaypointGraph::new(VehicleKind::Tank);
    let builder = TopologyBuilder::new(Vec3::ZERO, &ground, template());

    builder.create_ring(&mut graph, 5, 30.0);

    assert!(graph.nodes().all(|node| node.position.y == 12.0));
}

#[test]
fn test_chain_of_five_anchored_placements() {
    let mut graph = WaypointGraph::new(VehicleKind::Tank);
    let builder = TopologyBuilder::new(Vec3::ZERO, &NoGround, template());

    let mut anchor = None;
    let mut ids = Vec::new();
    for i in 0..5 {
        let id = builder.place_with_anchor(&mut graph, Vec3::new(i as f32 * 3.0, 0.0, 0.0), anchor);
        ids.push(id);
        anchor = Some(id);
    }

    assert_eq!(graph.edge_count(), 4);
    assert!(ids.iter().all(|&id| graph.degree(id) <= 2));
    assert_eq!(graph.degree(ids[0]), 1);
    assert_eq!(graph.degree(ids[4]), 1);
}

#[test]
fn test_connect_all_pairs_versus_chain_in_order() {
    let mut complete = WaypointGraph::new(VehicleKind::Tank);
    let mut path = WaypointGraph::new(VehicleKind::Tank);
    let mut ids = Vec::new();
    for i in 0..5 {
        let pos = Vec3::new(i as f32, 0.0, 0.0);
        ids.push(complete.add_node(pos, 1.0, Team::None, false));
        path.add_node(pos, 1.0, Team::None, false);
    }

    assert_eq!(connect_all_pairs(&mut complete, &ids), 10);
    assert_eq!(chain_in_order(&mut path, &ids), 4);
    assert!(!path.is_connected(ids[0], ids[2]));
}

#[test]
fn test_proximity_monotonicity() {
    let mut graph = WaypointGraph::new(VehicleKind::Wheeled);
    let x = graph.add_node(Vec3::ZERO, 5.0, Team::None, false);
    let near = graph.add_node(Vec3::new(0.0, 0.0, 12.0), 5.0, Team::None, false);
    let far = graph.add_node(Vec3::new(0.0, 0.0, 40.0), 5.0, Team::None, false);
    let remote = graph.add_node(Vec3::new(500.0, 0.0, 0.0), 5.0, Team::None, false);
    graph.connect(x, remote).expect("connect");

    let added = auto_connect_nearby(&mut graph, x, 25.0);

    assert_eq!(added, 1);
    assert!(graph.is_connected(x, near));
    assert!(!graph.is_connected(x, far));
    assert!(graph.is_connected(x, remote));
}
