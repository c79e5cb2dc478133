//! Text renderings of graph instances and covers, matching what `parser` reads back.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::parser::Instance;
use crate::{Cover, CoverError, CoverResult};

/// Write an instance in graph file format.
///
/// The vertex count line is only written when the labels are exactly 0..n,
/// since reading it back registers those vertices. Edges follow as "u v", u < v.
pub fn write_instance_to<W: Write>(writer: &mut W, instance: &Instance) -> io::Result<()> {
    let contiguous = instance.vertices.iter().copied().eq(0..instance.vertices.len());
    if contiguous {
        writeln!(writer, "{}", instance.vertices.len())?;
    }
    for (u, v) in instance.edges() {
        writeln!(writer, "{} {}", u, v)?;
    }
    Ok(())
}

/// Cover size on the first line, then each vertex in ascending order
pub fn write_cover_to<W: Write>(writer: &mut W, cover: &Cover) -> io::Result<()> {
    writeln!(writer, "{}", cover.size())?;
    for vertex in cover.vertices() {
        writeln!(writer, "{}", vertex)?;
    }
    Ok(())
}

fn write_file<F>(path: &Path, write: F) -> CoverResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| CoverError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| CoverError::io(path, e))
}

pub fn write_instance(path: &Path, instance: &Instance) -> CoverResult<()> {
    write_file(path, |writer| write_instance_to(writer, instance))
}

pub fn write_cover(path: &Path, cover: &Cover) -> CoverResult<()> {
    write_file(path, |writer| write_cover_to(writer, cover))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_cover, parse_instance};

    fn instance_text(instance: &Instance) -> String {
        let mut buffer = Vec::new();
        write_instance_to(&mut buffer, instance).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn cover_text(cover: &Cover) -> String {
        let mut buffer = Vec::new();
        write_cover_to(&mut buffer, cover).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    /// Accepts a fixed number of bytes, then fails every write
    struct FullWriter {
        remaining: usize,
    }

    impl Write for FullWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "device full"));
            }
            let written = buf.len().min(self.remaining);
            self.remaining -= written;
            Ok(written)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_instance() {
        let instance = Instance::from_edges(4, [(2, 1), (0, 1), (1, 0)]).unwrap();
        assert_eq!(instance_text(&instance), "4\n0 1\n1 2\n");
    }

    #[test]
    fn test_sparse_labels_survive() {
        let instance = Instance::from_edges(0, [(5, 17), (17, 40)]).unwrap();
        let text = instance_text(&instance);
        assert_eq!(text, "5 17\n17 40\n");
        assert_eq!(parse_instance(&text).unwrap(), instance);
    }

    #[test]
    fn test_isolated_vertices_survive() {
        let instance = Instance::from_edges(5, [(0, 3)]).unwrap();
        assert_eq!(parse_instance(&instance_text(&instance)).unwrap(), instance);
    }

    #[test]
    fn test_write_cover() {
        let cover = Cover::from_vertices([9, 2, 4].into_iter().collect());
        let text = cover_text(&cover);
        assert_eq!(text, "3\n2\n4\n9\n");
        assert_eq!(parse_cover(&text).unwrap(), cover);
        assert_eq!(cover_text(&Cover::default()), "0\n");
    }

    #[test]
    fn test_write_errors_are_reported() {
        let instance = Instance::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let mut full = FullWriter { remaining: 4 };
        let error = write_instance_to(&mut full, &instance).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::WriteZero);

        let cover = Cover::from_vertices([1].into_iter().collect());
        assert!(write_cover_to(&mut FullWriter { remaining: 0 }, &cover).is_err());
        assert!(write_cover_to(&mut FullWriter { remaining: 4 }, &cover).is_ok());
    }

    #[test]
    fn test_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.txt");
        write_cover(&path, &Cover::from_vertices([1].into_iter().collect())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n1\n");

        let graph = dir.path().join("graph.txt");
        let instance = Instance::from_edges(3, [(0, 2)]).unwrap();
        write_instance(&graph, &instance).unwrap();
        assert_eq!(std::fs::read_to_string(&graph).unwrap(), "3\n0 2\n");

        let missing = dir.path().join("missing").join("graph.txt");
        assert!(matches!(
            write_instance(&missing, &Instance::default()),
            Err(CoverError::Io { .. })
        ));
    }
}
