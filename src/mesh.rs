//! Read-only triangle mesh consumed by the render pass.
//!
//! Vertices are expected to already be in normalized device coordinates.
//! Every constructor validates face indices, so code downstream of a
//! [`Mesh`] can index its vertices without checking.

use std::path::Path;

use thiserror::Error;

use crate::math::Vec3f;

/// A triangle as three 0-based indices into the mesh's vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Obj(#[from] tobj::LoadError),
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("model contains no triangles")]
    Empty,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3f>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, rejecting faces that point past the vertex list.
    pub fn new(vertices: Vec<Vec3f>, faces: Vec<Face>) -> Result<Self, LoadError> {
        let vertex_count = vertices.len();
        for (face, f) in faces.iter().enumerate() {
            if let Some(&index) = f.indices().iter().find(|&&i| i >= vertex_count) {
                return Err(LoadError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Load every object in an OBJ file into a single mesh.
    ///
    /// Polygons are triangulated on load. Objects are concatenated in file
    /// order, so face order (and therefore draw order) follows the file.
    pub fn from_obj<P: AsRef<Path>>(file_path: P) -> Result<Self, LoadError> {
        let file_path = file_path.as_ref();
        let (models, _materials) = tobj::load_obj(
            file_path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for model in &models {
            let base = vertices.len();
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3f::new(p[0], p[1], p[2])),
            );
            faces.extend(model.mesh.indices.chunks_exact(3).map(|tri| {
                Face::new(
                    base + tri[0] as usize,
                    base + tri[1] as usize,
                    base + tri[2] as usize,
                )
            }));
        }

        if faces.is_empty() {
            return Err(LoadError::Empty);
        }

        log::info!(
            "loaded {} ({} objects, {} vertices, {} faces)",
            file_path.display(),
            models.len(),
            vertices.len(),
            faces.len()
        );
        Self::new(vertices, faces)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, index: usize) -> Vec3f {
        self.vertices[index]
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn face(&self, index: usize) -> Face {
        self.faces[index]
    }

    pub fn vertices(&self) -> &[Vec3f] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The three vertex positions of a face, in winding order.
    pub fn face_vertices(&self, face: Face) -> [Vec3f; 3] {
        face.indices().map(|i| self.vertices[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_obj(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn rejects_out_of_range_index() {
        let vertices = vec![Vec3f::ZERO; 3];
        let faces = vec![Face::new(0, 1, 2), Face::new(0, 3, 1)];
        match Mesh::new(vertices, faces) {
            Err(LoadError::IndexOutOfRange {
                face,
                index,
                vertex_count,
            }) => {
                assert_eq!((face, index, vertex_count), (1, 3, 3));
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn accessors() {
        let vertices = vec![
            Vec3f::new(0.0, 0.0, 0.0),
            Vec3f::new(1.0, 0.0, 0.0),
            Vec3f::new(0.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices, vec![Face::new(2, 1, 0)]).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0), Face::new(2, 1, 0));
        assert_eq!(mesh.vertex(1), Vec3f::new(1.0, 0.0, 0.0));
        assert_eq!(
            mesh.face_vertices(mesh.face(0))[0],
            Vec3f::new(0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn loads_and_triangulates_obj() {
        let path = write_obj(
            "softraster_mesh_quad.obj",
            "v -1 -1 0\nv 1 -1 0\nv 1 1 0\nv -1 1 0\nf 1 2 3 4\n",
        );
        let mesh = Mesh::from_obj(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        for face in mesh.faces() {
            assert!(face.indices().iter().all(|&i| i < 4));
        }
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn obj_without_faces_is_empty() {
        let path = write_obj("softraster_mesh_empty.obj", "v 0 0 0\n");
        assert!(matches!(Mesh::from_obj(&path), Err(LoadError::Empty)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_obj_file_is_an_error() {
        let path = std::env::temp_dir().join("softraster_does_not_exist.obj");
        assert!(matches!(Mesh::from_obj(path), Err(LoadError::Obj(_))));
    }
}
