//! Response header lines collected from libcurl.

/// Content-Type of the final response. Header blocks of interim responses
/// (`100 Continue`, redirects) are discarded when a new status line starts.
pub(crate) fn final_content_type(lines: &[String]) -> Option<String> {
    let mut content_type = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_type = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }
    content_type
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn picks_content_type_case_insensitively() {
        let l = lines(&["HTTP/1.1 200 OK", "content-type: application/json; charset=utf-8", ""]);
        assert_eq!(
            final_content_type(&l).as_deref(),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn interim_response_headers_are_dropped() {
        let l = lines(&[
            "HTTP/1.1 302 Found",
            "Content-Type: text/html",
            "",
            "HTTP/1.1 500 Internal Server Error",
            "Content-Length: 0",
            "",
        ]);
        assert_eq!(final_content_type(&l), None);
    }
}
