use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Visitor counter persisted as a plain integer in a text file.
///
/// The original site re-read and re-wrote the file without any coordination,
/// losing increments under concurrent load. The internal mutex serializes the
/// read-increment-write here; sequential counts are identical either way.
pub struct VisitorCounter {
    path: PathBuf,
    lock: Mutex<()>,
}

impl VisitorCounter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Current count, creating the backing file with `0` when missing.
    pub fn read(&self) -> io::Result<u64> {
        let _guard = self.lock.lock().unwrap();
        self.read_locked()
    }

    /// Add one and persist, returning the new count.
    pub fn increment(&self) -> io::Result<u64> {
        let _guard = self.lock.lock().unwrap();
        let count = self.read_locked()? + 1;
        fs::write(&self.path, count.to_string())?;
        Ok(count)
    }

    fn read_locked(&self) -> io::Result<u64> {
        if !self.path.exists() {
            fs::write(&self.path, "0")?;
            return Ok(0);
        }
        let raw = fs::read_to_string(&self.path)?;
        raw.trim().parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: not an integer", self.path.display()),
            )
        })
    }
}
