//! Flat text output for cut-cell meshes.
//!
//! Two whitespace-separated record streams:
//! - vertices: one `x z` line per vertex, in mesh order;
//! - faces: one `x1 z1 x2 z2` line per face, endpoints resolved to coordinates.
//!
//! Numbers use the default `f64` `Display` form.
#![forbid(unsafe_code)]

pub mod error;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cutcell_geom::Vertex;
use cutcell_mesh::Mesh;

pub use error::{OutputError, OutputResult};

pub fn write_vertices<W: Write>(mesh: &Mesh, out: &mut W) -> OutputResult<usize> {
    let mut n = 0;
    for v in mesh.vertices() {
        writeln!(out, "{} {}", v.x, v.z)?;
        n += 1;
    }
    Ok(n)
}

/// Fails with a mesh error when the face list went stale during cutting.
pub fn write_faces<W: Write>(mesh: &Mesh, out: &mut W) -> OutputResult<usize> {
    let faces = mesh.face_endpoints()?;
    for (a, b) in &faces {
        write_face(out, *a, *b)?;
    }
    Ok(faces.len())
}

fn write_face<W: Write>(out: &mut W, a: Vertex, b: Vertex) -> OutputResult<()> {
    writeln!(out, "{} {} {} {}", a.x, a.z, b.x, b.z)?;
    Ok(())
}

pub fn write_vertices_file(mesh: &Mesh, path: &Path) -> OutputResult<usize> {
    let file = File::create(path).map_err(|e| OutputError::create(path, e))?;
    let mut out = BufWriter::new(file);
    let n = write_vertices(mesh, &mut out)?;
    out.flush()?;
    log::info!("wrote {} vertices to {}", n, path.display());
    Ok(n)
}

pub fn write_faces_file(mesh: &Mesh, path: &Path) -> OutputResult<usize> {
    // resolve first so a stale mesh never truncates an existing file
    let faces = mesh.face_endpoints()?;
    let file = File::create(path).map_err(|e| OutputError::create(path, e))?;
    let mut out = BufWriter::new(file);
    for (a, b) in &faces {
        write_face(&mut out, *a, *b)?;
    }
    out.flush()?;
    if faces.is_empty() {
        log::warn!("mesh has no faces; {} is empty", path.display());
    } else {
        log::info!("wrote {} faces to {}", faces.len(), path.display());
    }
    Ok(faces.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_lines_use_display_form() {
        let mesh = Mesh::from_vertices([Vertex::new(-12500.0, 0.0), Vertex::new(0.25, 1e-30)]);
        let mut buf = Vec::new();
        assert_eq!(write_vertices(&mesh, &mut buf).unwrap(), 2);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("-12500 0\n0.25 {}\n", 1e-30f64));
    }
}
