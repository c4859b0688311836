//! Wavefront OBJ writer for generated terrain.
//!
//! Vertices carry their color as the common `v x y z r g b` extension,
//! followed by one `vn` per vertex and 1-based `f a//a b//b c//c` faces.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::TerrainError;
use crate::mesh::GeometrySnapshot;

/// Write a snapshot to an OBJ file.
pub fn save_obj(snapshot: &GeometrySnapshot, path: &Path) -> Result<(), TerrainError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(snapshot, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Serialize a snapshot as OBJ text into `out`.
pub fn write_obj<W: Write>(snapshot: &GeometrySnapshot, out: &mut W) -> io::Result<()> {
    let range = snapshot.elevation_range();
    writeln!(out, "# landform terrain")?;
    writeln!(
        out,
        "# vertices {} triangles {} height {}..{}",
        snapshot.vertex_count(),
        snapshot.triangle_count(),
        range.min,
        range.max
    )?;
    writeln!(out, "o terrain")?;

    for (p, c) in snapshot.positions().iter().zip(snapshot.colors()) {
        writeln!(
            out,
            "v {:.6} {:.6} {:.6} {:.4} {:.4} {:.4}",
            p.x, p.y, p.z, c.r, c.g, c.b
        )?;
    }

    for n in snapshot.normals() {
        writeln!(out, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
    }

    for [a, b, c] in snapshot.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    Ok(())
}

/// Serialize a snapshot to an in-memory OBJ string.
pub fn obj_string(snapshot: &GeometrySnapshot) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_obj(snapshot, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
