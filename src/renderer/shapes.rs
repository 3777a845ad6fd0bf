//! Triangle tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::Rect;
use super::vertex::Vertex;

/// Segment count for a circle so edges stay smooth at any ball size
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(12, 64)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle fan from the center
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(rect: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right(), rect.bottom());

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertices_on_rim() {
        let center = Vec2::new(100.0, 50.0);
        let verts = circle(center, 10.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);

        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [100.0, 50.0]);
            for v in &tri[1..] {
                let p = Vec2::from(v.position);
                assert!((p.distance(center) - 10.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_circle_segments_clamped() {
        assert_eq!(circle_segments(1.0), 12);
        assert_eq!(circle_segments(20.0), 30);
        assert_eq!(circle_segments(500.0), 64);
    }

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Rect::new(0.0, 200.0, 10.0, 200.0), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(verts.len(), 6);
        let corners: Vec<[f32; 2]> = verts.iter().map(|v| v.position).collect();
        for corner in [[0.0, 200.0], [10.0, 200.0], [0.0, 400.0], [10.0, 400.0]] {
            assert!(corners.contains(&corner));
        }
    }
}
