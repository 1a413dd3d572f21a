/// Geometry primitives for wireframe rendering
use nalgebra::Point3;

/// A triangle defined by three ordered points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    /// Apply `f` to each point, keeping the order
    pub fn map(&self, mut f: impl FnMut(&Point3<f32>) -> Point3<f32>) -> Self {
        let [p0, p1, p2] = &self.points;
        Self::new(f(p0), f(p1), f(p2))
    }

    /// The three edges in draw order: p0-p1, p1-p2, p2-p0
    pub fn edges(&self) -> [(Point3<f32>, Point3<f32>); 3] {
        let [p0, p1, p2] = self.points;
        [(p0, p1), (p1, p2), (p2, p0)]
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// The unit cube spanning [0, 1] on every axis
    pub fn cube() -> Self {
        build_cube()
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
    Triangle::new(Point3::from(a), Point3::from(b), Point3::from(c))
}

/// Build the unit cube: two triangles per face sharing a diagonal
pub fn build_cube() -> Mesh {
    Mesh::new(vec![
        // South
        tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
        tri([0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        // East
        tri([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]),
        tri([1.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]),
        // North
        tri([1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]),
        tri([1.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]),
        // West
        tri([0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]),
        tri([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]),
        // Top
        tri([0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
        tri([0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]),
        // Bottom
        tri([1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]),
        tri([1.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
    ])
}
