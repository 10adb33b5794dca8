use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;
use std::fmt::Write as _;
use std::io::Cursor;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Convert this Mesh to an **ASCII STL** string with the given `name`.
    ///
    /// ```rust
    /// # use slidensnap::mesh::Mesh;
    /// let mesh = Mesh::<()>::cube(1.0, None);
    /// let stl = mesh.to_stl_ascii("my_solid");
    /// assert!(stl.starts_with("solid my_solid\n"));
    /// assert_eq!(stl.matches("facet normal").count(), 12);
    /// ```
    pub fn to_stl_ascii(&self, name: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "solid {name}");

        for poly in &self.polygons {
            let n = poly.plane.normal();
            for tri in poly.triangulate() {
                let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
                out.push_str("    outer loop\n");
                for v in &tri {
                    let _ = writeln!(
                        out,
                        "      vertex {:.6} {:.6} {:.6}",
                        v.pos.x, v.pos.y, v.pos.z
                    );
                }
                out.push_str("    endloop\n");
                out.push_str("  endfacet\n");
            }
        }

        let _ = writeln!(out, "endsolid {name}");
        out
    }

    /// Convert this Mesh to a **binary STL** byte vector.
    ///
    /// The binary format has no room for a name.
    ///
    /// ```rust
    /// # use slidensnap::mesh::Mesh;
    /// # fn main() -> std::io::Result<()> {
    /// let bytes = Mesh::<()>::cube(1.0, None).to_stl_binary()?;
    /// assert_eq!(bytes.len(), 80 + 4 + 12 * 50);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        use stl_io::{Normal, Triangle, Vertex as StlVertex, write_stl};

        let triangles: Vec<Triangle> = self
            .polygons
            .iter()
            .flat_map(|poly| {
                let n = poly.plane.normal();
                poly.triangulate().into_iter().map(move |tri| Triangle {
                    normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                    vertices: tri.map(|v| {
                        StlVertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])
                    }),
                })
            })
            .collect();

        let mut cursor = Cursor::new(Vec::new());
        write_stl(&mut cursor, triangles.iter())?;
        Ok(cursor.into_inner())
    }

    /// Read a binary or ASCII STL into a triangle Mesh. Precision is that of
    /// the file (`f32`).
    pub fn from_stl(bytes: &[u8], metadata: Option<S>) -> std::io::Result<Mesh<S>> {
        let stl = stl_io::read_stl(&mut Cursor::new(bytes))?;

        let polygons: Vec<Polygon<S>> = stl
            .faces
            .iter()
            .map(|face| {
                let normal = Vector3::new(
                    face.normal[0] as Real,
                    face.normal[1] as Real,
                    face.normal[2] as Real,
                );
                let vertices = face
                    .vertices
                    .iter()
                    .map(|&i| {
                        let p = stl.vertices[i];
                        Vertex::new(Point3::new(p[0] as Real, p[1] as Real, p[2] as Real), normal)
                    })
                    .collect();
                Polygon::new(vertices, metadata.clone())
            })
            .collect();

        Ok(Mesh::from_polygons(&polygons, metadata))
    }
}
