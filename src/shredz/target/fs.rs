use super::Target;
use crate::error::{Result, ShredError};
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

/// Production target backed by a write-only handle to a regular file.
///
/// The byte length is captured once, at open time, and every pass covers
/// exactly that extent. If another process grows or truncates the file
/// mid-run the overwrite coverage is undefined; the tool does not try to
/// detect that.
#[derive(Debug)]
pub struct FileTarget {
    file: File,
    size: u64,
}

impl FileTarget {
    /// Open `path` for destructive writing.
    ///
    /// The path must name an existing regular file; directories, sockets
    /// and other special files are rejected before any handle is opened.
    /// On Unix the open also requests `O_SYNC` as a best-effort hint, but
    /// the explicit [`Target::sync`] after each pass is the durability
    /// guarantee either way.
    pub fn open(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|source| ShredError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ShredError::NotRegular {
                path: path.to_path_buf(),
            });
        }

        let mut options = OpenOptions::new();
        options.write(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_SYNC);
        }
        let file = options.open(path).map_err(|source| ShredError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // Size comes from the opened handle, not the path: this one value
        // is what every pass of the run covers.
        let size = file
            .metadata()
            .map_err(|source| ShredError::Stat {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        Ok(Self { file, size })
    }

    /// Byte length captured at open time.
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Target for FileTarget {
    fn rewind(&mut self) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(0)).map(|_| ())
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.file.sync_all()
    }
}
