//! interp2x-io - Grayscale image I/O
//!
//! Reads encoded images into a [`Grid`] and writes a [`Grid`] back out.
//! Every format is decoded to a single 8-bit intensity channel; color
//! sources are reduced with [`interp2x_core::color::luma`].
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | BMP    | yes  | yes   | `bmp`        |
//! | PNM    | yes  | yes   | `pnm`        |
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | yes   | `jpeg`       |
//!
//! # Example
//!
//! ```no_run
//! use interp2x_io::{ImageFormat, read_image, write_image};
//!
//! let grid = read_image("input.png").unwrap();
//! write_image(&grid, "output.pgm", ImageFormat::Pnm).unwrap();
//! ```

#[cfg(feature = "bmp")]
pub mod bmp;
mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use interp2x_core::ImageFormat;

use interp2x_core::Grid;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;

/// Read an image file as a grayscale grid.
///
/// The format is detected from the file's magic bytes, not its extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let file = File::open(path)?;
    read_image_from(BufReader::new(file))
}

/// Read an image from an in-memory buffer
pub fn read_image_mem(data: &[u8]) -> IoResult<Grid> {
    read_image_from(Cursor::new(data))
}

/// Read an image from a buffered, seekable reader
pub fn read_image_from<R: BufRead + Seek>(mut reader: R) -> IoResult<Grid> {
    let format = detect_format_from_bytes(reader.fill_buf()?)?;
    debug!("detected {:?}", format);

    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::read_bmp(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write a grid to a file in the given format.
///
/// [`ImageFormat::Unknown`] is resolved from the path's extension,
/// falling back to PNG.
pub fn write_image<P: AsRef<Path>>(grid: &Grid, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = resolve_format(format, path);
    debug!(
        "writing {}x{} {:?} to {}",
        grid.width(),
        grid.height(),
        format,
        path.display()
    );

    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(grid, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode a grid into an in-memory buffer
pub fn write_image_mem(grid: &Grid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(grid, &mut buffer, format)?;
    Ok(buffer)
}

/// Encode a grid to a writer
pub fn write_image_to<W: Write>(grid: &Grid, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::write_bmp(grid, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(grid, writer, jpeg::DEFAULT_QUALITY),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(grid, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write {:?}",
            other
        ))),
    }
}

/// Pick a concrete output format, guessing from the extension if needed.
pub fn resolve_format<P: AsRef<Path>>(format: ImageFormat, path: P) -> ImageFormat {
    if format != ImageFormat::Unknown {
        return format;
    }
    match path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(ImageFormat::from_extension)
    {
        Some(ImageFormat::Unknown) | None => ImageFormat::Png,
        Some(guessed) => guessed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_rows(&[[0u8, 50, 100, 150], [200, 250, 25, 75], [5, 10, 15, 20]]).unwrap()
    }

    #[test]
    fn test_lossless_formats_roundtrip_in_memory() {
        let grid = sample_grid();
        for format in [ImageFormat::Bmp, ImageFormat::Png, ImageFormat::Pnm] {
            let bytes = write_image_mem(&grid, format).unwrap();
            assert_eq!(detect_format_from_bytes(&bytes).unwrap(), format);
            assert_eq!(read_image_mem(&bytes).unwrap(), grid, "{:?}", format);
        }
    }

    #[test]
    fn test_jpeg_in_memory() {
        let grid = sample_grid();
        let bytes = write_image_mem(&grid, ImageFormat::Jpeg).unwrap();
        let decoded = read_image_mem(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), grid.dimensions());
    }

    #[test]
    fn test_write_unknown_format_fails() {
        assert!(matches!(
            write_image_mem(&sample_grid(), ImageFormat::Unknown),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_unrecognized_bytes() {
        assert!(read_image_mem(b"GIF89a....").is_err());
        assert!(read_image_mem(b"").is_err());
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(ImageFormat::Bmp, "x.png"), ImageFormat::Bmp);
        assert_eq!(resolve_format(ImageFormat::Unknown, "x.pgm"), ImageFormat::Pnm);
        assert_eq!(resolve_format(ImageFormat::Unknown, "x.jpg"), ImageFormat::Jpeg);
        assert_eq!(resolve_format(ImageFormat::Unknown, "x.tif"), ImageFormat::Png);
        assert_eq!(resolve_format(ImageFormat::Unknown, "noext"), ImageFormat::Png);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = std::env::temp_dir().join("interp2x_io_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.pgm");

        let grid = sample_grid();
        write_image(&grid, &path, ImageFormat::Unknown).unwrap();
        assert_eq!(detect_format(&path).unwrap(), ImageFormat::Pnm);
        assert_eq!(read_image(&path).unwrap(), grid);

        std::fs::remove_file(&path).unwrap();
    }
}
