use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Language id of submissions stored as a base64-encoded zip archive.
pub const ZIP_LANGID: &str = "zip";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("zip submission is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Strip characters that would break an unquoted `Content-Disposition` filename.
fn sanitize(part: &str) -> String {
    part.chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | ';' | '\\' | '/' | ','))
        .collect()
}

/// `<username>-<problem>-<attempt>.<langid>`
pub fn download_filename(username: &str, problem: &str, attempt: i32, langid: &str) -> String {
    format!(
        "{}-{}-{}.{}",
        sanitize(username),
        sanitize(problem),
        attempt,
        sanitize(langid)
    )
}

pub fn content_disposition_value(filename: &str) -> String {
    format!("attachment; filename={filename}")
}

/// Body served for a submission download.
///
/// Zip submissions are decoded from base64, ignoring any whitespace the judge
/// wrapped them with. Everything else is served as the stored text.
pub fn decode_source(langid: &str, source: &str) -> Result<Vec<u8>, DownloadError> {
    if langid != ZIP_LANGID {
        return Ok(source.as_bytes().to_vec());
    }
    let compact: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

pub fn content_type(langid: &str) -> &'static str {
    if langid == ZIP_LANGID {
        "application/zip"
    } else {
        "text/plain; charset=utf-8"
    }
}
