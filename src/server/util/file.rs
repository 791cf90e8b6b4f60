//! File name and URL classification for evidence uploads.

use entity::sea_orm_active_enums::EvidenceType;
use url::Url;

/// Extensions accepted by the upload endpoint.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png", "gif", "webp", "doc", "docx"];

/// Lower-cased extension of `filename`, if it has one.
pub fn extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Returns the extension when it is on the allow list.
pub fn allowed_extension(filename: &str) -> Option<String> {
    extension(filename).filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Infers an evidence type from an uploaded file name.
///
/// Checks run in order on the lower-cased name and the first match wins.
pub fn infer_evidence_type(filename: &str) -> EvidenceType {
    let name = filename.to_lowercase();

    if name.contains("lesson") {
        EvidenceType::LessonPlan
    } else if name.contains("media") {
        EvidenceType::TeachingMedia
    } else if name.contains("test") {
        EvidenceType::Assessment
    } else if name.contains("work") {
        EvidenceType::StudentWork
    } else if name.ends_with(".jpg") || name.ends_with(".jpeg") || name.ends_with(".png") {
        EvidenceType::ClassroomPhoto
    } else if name.contains("research") {
        EvidenceType::ActionResearch
    } else {
        EvidenceType::Other
    }
}

/// MIME type served for a stored file name.
pub fn content_type(filename: &str) -> &'static str {
    match extension(filename).as_deref() {
        Some("pdf") => "application/pdf",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// Whether a requested upload name is a bare file name.
pub fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}

/// Parses a video link, accepting only http or https URLs with a host.
pub fn parse_http_url(input: &str) -> Option<Url> {
    let url = Url::parse(input.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str().filter(|host| !host.is_empty())?;

    Some(url)
}

/// Detects the hosting platform of a video URL from its host.
pub fn detect_video_platform(url: &Url) -> &'static str {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();

    if is_host_or_subdomain(&host, "youtube.com") || is_host_or_subdomain(&host, "youtu.be") {
        "YOUTUBE"
    } else if is_host_or_subdomain(&host, "drive.google.com") {
        "GOOGLE_DRIVE"
    } else {
        "OTHER"
    }
}

fn is_host_or_subdomain(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
