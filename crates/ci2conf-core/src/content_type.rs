//! Content type detection for attachment uploads.

/// Guess the MIME type of a file from its extension.
///
/// Unrecognized extensions (including none at all) fall back to
/// `application/octet-stream`, which Confluence accepts for any upload.
#[must_use]
pub fn guess_content_type(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("txt") => "text/plain",
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("csv") => "text/csv",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "tgz") => "application/gzip",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(guess_content_type("report.txt"), "text/plain");
        assert_eq!(guess_content_type("index.html"), "text/html");
        assert_eq!(guess_content_type("data.json"), "application/json");
        assert_eq!(guess_content_type("chart.png"), "image/png");
        assert_eq!(guess_content_type("photo.jpeg"), "image/jpeg");
        assert_eq!(guess_content_type("bundle.tgz"), "application/gzip");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(guess_content_type("build.log"), "application/octet-stream");
        assert_eq!(guess_content_type("binary.exe"), "application/octet-stream");
    }

    #[test]
    fn test_no_extension_falls_back() {
        assert_eq!(guess_content_type("Makefile"), "application/octet-stream");
        assert_eq!(guess_content_type(""), "application/octet-stream");
    }

    #[test]
    fn test_takes_last_extension() {
        assert_eq!(guess_content_type("archive.tar.gz"), "application/gzip");
    }
}
