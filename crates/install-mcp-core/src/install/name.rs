//! Server name inference from install targets.

/// Whether `target` is installed through the gateway rather than run as a
/// command. Matches any target starting with `http`, which covers `https`.
pub fn is_url_target(target: &str) -> bool {
    target.starts_with("http")
}

/// Derive a server name from a URL or command line.
///
/// URLs with more than three `/`-separated parts yield the second-to-last
/// part (`https://example.com/pkg/server` gives `pkg`, `https://host/file`
/// gives `host`), shorter ones the last (`http://host` gives `host`).
/// For `npx` command lines the first argument that is not a flag is used,
/// falling back to the last argument. Any other command yields its first
/// token. The result may be empty, e.g. for a URL ending in `/`.
pub fn infer_name(target: &str) -> String {
    if is_url_target(target) {
        let parts: Vec<&str> = target.split('/').collect();
        let index = if parts.len() > 3 {
            parts.len() - 2
        } else {
            parts.len() - 1
        };
        return parts[index].to_string();
    }

    let parts: Vec<&str> = target.split(' ').collect();
    if parts[0] == "npx" && parts.len() > 1 {
        return parts[1..]
            .iter()
            .find(|part| !part.starts_with('-'))
            .or_else(|| parts.last())
            .map(|part| part.to_string())
            .unwrap_or_default();
    }
    parts[0].to_string()
}
