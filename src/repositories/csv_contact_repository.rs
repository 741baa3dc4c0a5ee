use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactBook, CSV_HEADER};
use crate::repositories::traits::ContactRepository;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::{self, File, Permissions};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Contact repository backed by a flat CSV file.
///
/// Reads go through the `csv` reader with the header row mapped to columns.
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a failed write never truncates the existing file. The
/// replacement keeps the existing file's permissions and line endings.
#[derive(Debug, Clone)]
pub struct CsvContactRepository {
    path: PathBuf,
}

impl CsvContactRepository {
    /// Create a new CsvContactRepository for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with only the header row if it does not exist.
    ///
    /// Returns whether a new file was created.
    pub fn ensure_exists(&self) -> StoreResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.persist(&ContactBook::new())?;
        debug!("Created empty contacts file {}", self.path.display());
        Ok(true)
    }

    fn temp_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Line terminator of the existing file, judged by its header row.
    fn existing_terminator(&self) -> Terminator {
        let mut first_line = Vec::new();
        let read = File::open(&self.path)
            .and_then(|file| BufReader::new(file).read_until(b'\n', &mut first_line));

        if read.is_ok() && first_line.ends_with(b"\r\n") {
            Terminator::CRLF
        } else {
            Terminator::Any(b'\n')
        }
    }

    /// Permissions the replacement file should carry.
    fn target_permissions(&self) -> Option<Permissions> {
        match fs::metadata(&self.path) {
            Ok(meta) => Some(meta.permissions()),
            Err(_) => default_permissions(),
        }
    }
}

// Temp files are created owner-only; new contact files get the usual 0644.
#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

impl ContactRepository for CsvContactRepository {
    fn load(&self) -> StoreResult<ContactBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist, starting empty", self.path.display());
                return Ok(ContactBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        if headers.iter().all(str::is_empty) {
            return Ok(ContactBook::new());
        }
        let columns = Columns::from_headers(&headers)?;

        let mut book = ContactBook::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            book.insert_loaded(columns.contact(&record, line)?);
        }

        debug!("Loaded {} contacts from {}", book.len(), self.path.display());
        Ok(book)
    }

    fn persist(&self, book: &ContactBook) -> StoreResult<()> {
        let temp = NamedTempFile::new_in(self.temp_dir())?;
        if let Some(permissions) = self.target_permissions() {
            temp.as_file().set_permissions(permissions)?;
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(self.existing_terminator())
            .from_writer(temp);

        writer.write_record(CSV_HEADER)?;
        for contact in book {
            writer.serialize(contact)?;
        }
        writer.flush()?;

        let temp = writer
            .into_inner()
            .map_err(|e| StoreError::Io(e.into_error()))?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path)
            .map_err(|e| StoreError::Io(e.error))?;

        debug!("Wrote {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Positions of the four contact columns in the header row.
struct Columns {
    indexes: [usize; 4],
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> StoreResult<Self> {
        let mut indexes = [0; 4];
        for (slot, name) in indexes.iter_mut().zip(CSV_HEADER) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| StoreError::MalformedRecord {
                    line: 1,
                    reason: format!("header is missing column '{}'", name),
                })?;
        }
        Ok(Self { indexes })
    }

    fn contact(&self, record: &StringRecord, line: u64) -> StoreResult<Contact> {
        let mut fields = [""; 4];
        for ((field, &index), name) in fields.iter_mut().zip(&self.indexes).zip(CSV_HEADER) {
            *field = record.get(index).ok_or_else(|| StoreError::MalformedRecord {
                line,
                reason: format!("missing field '{}'", name),
            })?;
        }

        let [email, first_name, last_name, phone_number] = fields;
        if email.is_empty() {
            return Err(StoreError::MalformedRecord {
                line,
                reason: "empty email".to_string(),
            });
        }

        Ok(Contact::new(email, first_name, last_name, phone_number))
    }
}
