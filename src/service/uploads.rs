use std::fs;
use std::io;
use std::path::Path;

/// Extensions accepted by every image-accepting form.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// True when the name has a dot and the suffix after the last dot,
/// lower-cased, is an allowed image extension. This is a naming convenience,
/// not a security boundary; file contents are never inspected.
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Strip path components and unsafe characters from an uploaded filename.
/// Returns None when nothing usable remains.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let cleaned = cleaned.trim_matches('.').to_string();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Validate and write an upload into `dir`, returning the stored filename.
/// `Ok(None)` means the file was rejected (bad extension or unusable name);
/// the caller must not mutate the owning entity in that case.
pub fn store(dir: &Path, original_name: &str, data: &[u8]) -> io::Result<Option<String>> {
    if !allowed_file(original_name) {
        return Ok(None);
    }
    let Some(name) = sanitize_filename(original_name) else {
        return Ok(None);
    };
    fs::create_dir_all(dir)?;
    fs::write(dir.join(&name), data)?;
    Ok(Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(allowed_file("photo.PNG"));
        assert!(allowed_file("photo.jpeg"));
        assert!(!allowed_file("notes.txt"));
        assert!(!allowed_file("no-extension"));
        assert!(!allowed_file("archive.tar.gz"));
    }

    #[test]
    fn sanitize_strips_paths_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd.png"), Some("passwd.png".to_string()));
        assert_eq!(sanitize_filename("C:\\img\\logo.jpg"), Some("logo.jpg".to_string()));
        assert_eq!(sanitize_filename("my photo (1).gif"), Some("myphoto1.gif".to_string()));
        assert_eq!(sanitize_filename("///"), None);
    }

    #[test]
    fn store_writes_accepted_files_and_rejects_others() {
        let dir = tempfile::tempdir().expect("tempdir");
        let stored = store(dir.path(), "x.PNG", b"bytes").expect("store");
        assert_eq!(stored, Some("x.PNG".to_string()));
        assert!(dir.path().join("x.PNG").exists());

        assert_eq!(store(dir.path(), "x.txt", b"bytes").expect("store"), None);
        assert!(!dir.path().join("x.txt").exists());
    }
}
