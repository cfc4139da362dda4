// Host-side tests for the orbit ring, marker geometry, sphere mesh, and the
// scene composer's per-frame accumulation.

use coherence_core::markers::zone_marker_lines;
use coherence_core::mesh::SphereMesh;
use coherence_core::nodes::{node_hue, node_intensity, node_position, ring_nodes, spoke_endpoints};
use coherence_core::scene::Scene;
use coherence_core::VisualState;
use glam::Vec3;

#[test]
fn ring_has_eight_nodes_within_layout_bounds() {
    let nodes = ring_nodes(&VisualState::default());
    assert_eq!(nodes.len(), 8);
    for (i, n) in nodes.iter().enumerate() {
        let radial = (n.position.x * n.position.x + n.position.z * n.position.z).sqrt();
        assert!(
            (3.0..=5.0).contains(&radial),
            "node {i} radial distance {radial} outside [3, 5]"
        );
        assert!(n.position.y.abs() <= 2.0, "node {i} y {} beyond band", n.position.y);
    }
}

#[test]
fn node_positions_are_static_per_index() {
    // The ring wobbles via the model rotation, not per-node motion
    for i in 0..8 {
        assert_eq!(node_position(i), node_position(i));
    }
}

#[test]
fn node_hue_wraps_into_unit_interval() {
    for i in 0..8 {
        for tone_step in 0..=18 {
            let tone = 1.0 + tone_step as f32 * 0.5;
            let h = node_hue(i, tone);
            assert!((0.0..1.0).contains(&h), "hue {h} out of range");
        }
    }
}

#[test]
fn node_intensity_follows_the_ring_law() {
    for i in 0..8 {
        let expected = (0.7 + (i as f32 * 0.8).sin() * 0.3) * 0.5;
        assert!((node_intensity(i, 0.7) - expected).abs() < 1e-6);
    }
    // Coherence lifts every node equally
    for i in 0..8 {
        assert!(node_intensity(i, 1.0) > node_intensity(i, 0.0));
    }
}

#[test]
fn node_colors_stay_normalized() {
    let state = VisualState::default()
        .with_core_tone(10.0)
        .with_coherence_level(1.0);
    for n in ring_nodes(&state) {
        assert!(n.color.min_element() >= 0.0 && n.color.max_element() <= 1.0);
    }
}

#[test]
fn spokes_run_from_node_to_origin() {
    for i in 0..8 {
        let (a, b) = spoke_endpoints(i);
        assert_eq!(a, node_position(i));
        assert_eq!(b, Vec3::ZERO);
    }
}

#[test]
fn marker_lines_form_a_bounded_line_list() {
    let lines = zone_marker_lines();
    assert!(!lines.is_empty());
    assert_eq!(lines.len() % 2, 0, "line list needs an even vertex count");
    for v in &lines {
        // Shells at y = +-8 with radius 6, band at radius 7
        assert!(v.position[1].abs() <= 14.0 + 1e-4);
        let radial = (v.position[0] * v.position[0] + v.position[2] * v.position[2]).sqrt();
        assert!(radial <= 7.0 + 1e-4);
        assert!(v.color[3] > 0.0 && v.color[3] <= 1.0);
    }
}

#[test]
fn sphere_mesh_has_fixed_topology() {
    let mesh = SphereMesh::waveform();
    assert_eq!(mesh.vertices.len(), 65 * 65);
    assert_eq!(mesh.indices.len(), 64 * 64 * 6);
    assert_eq!(mesh.index_count() as usize, mesh.indices.len());
    for v in &mesh.vertices {
        let r = Vec3::from(v.position).length();
        assert!((r - 2.0).abs() < 1e-4, "vertex off the sphere surface: r={r}");
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4, "normal not unit length");
    }
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len());
    }
}

#[test]
fn scene_accumulates_fixed_rotation_increments() {
    let mut scene = Scene::new(42);
    let state = VisualState::default().with_mirror_interactions(0.0);
    for _ in 0..100 {
        scene.advance(1.0 / 60.0, &state);
    }
    assert!((scene.waveform_rotation - 100.0 * 0.005).abs() < 1e-5);
    assert!((scene.ring_rotation - 100.0 * 0.002).abs() < 1e-5);
    assert!((scene.elapsed - 100.0 / 60.0).abs() < 1e-4);
}

#[test]
fn scene_ignores_negative_frame_deltas() {
    let mut scene = Scene::new(1);
    let state = VisualState::default();
    scene.advance(-1.0, &state);
    assert_eq!(scene.elapsed, 0.0);
}
