use std::path::{Component, Path};

/// Path to `target` as a Markdown link written from a file in `base_dir`.
///
/// Falls back to `target` as given when it does not live under `base_dir`.
/// Separators are always `/`.
pub fn markdown_link_path(target: &Path, base_dir: &Path) -> String {
    let rel = target.strip_prefix(base_dir).unwrap_or(target);
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();

    let joined = parts.join("/");
    if rel.has_root() {
        format!("/{joined}")
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_base() {
        assert_eq!(
            markdown_link_path(Path::new("/repo/docs/badge.svg"), Path::new("/repo")),
            "docs/badge.svg"
        );
    }

    #[test]
    fn test_outside_base_uses_path_as_given() {
        assert_eq!(
            markdown_link_path(Path::new("/elsewhere/badge.svg"), Path::new("/repo")),
            "/elsewhere/badge.svg"
        );
    }

    #[test]
    fn test_skips_current_dir_components() {
        assert_eq!(
            markdown_link_path(Path::new("./docs/./badge.svg"), Path::new("/repo")),
            "docs/badge.svg"
        );
    }
}
