//! os-release file parsing.
//!
//! Parses the `KEY=value` format described in os-release(5). Parsing is a
//! pure function over file content so it can be unit tested without a
//! filesystem.

/// Fields of interest from an os-release file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsRelease {
    /// The `ID` field (e.g. "ubuntu").
    pub id: Option<String>,

    /// The `ID_LIKE` field, split on whitespace (e.g. ["ubuntu", "debian"]).
    pub id_like: Vec<String>,

    /// The `PRETTY_NAME` field, for display.
    pub pretty_name: Option<String>,
}

impl OsRelease {
    /// Parse os-release content.
    ///
    /// Unknown keys, blank lines, and `#` comments are ignored. Values may
    /// be quoted with single or double quotes.
    pub fn parse(content: &str) -> Self {
        let mut release = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = unquote(value.trim());

            match key.trim() {
                "ID" => release.id = Some(value.to_lowercase()),
                "ID_LIKE" => {
                    release.id_like = value
                        .split_whitespace()
                        .map(|s| s.to_lowercase())
                        .collect();
                }
                "PRETTY_NAME" => release.pretty_name = Some(value),
                _ => {}
            }
        }

        release
    }

    /// Candidate identifiers in precedence order: `ID` first, then each
    /// `ID_LIKE` token.
    pub fn id_candidates(&self) -> impl Iterator<Item = &str> {
        self.id
            .as_deref()
            .into_iter()
            .chain(self.id_like.iter().map(String::as_str))
    }
}

fn unquote(value: &str) -> String {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && ((bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[bytes.len() - 1] == b'\''))
    {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ubuntu_os_release() {
        let content = r#"
NAME="Ubuntu"
VERSION="22.04.4 LTS (Jammy Jellyfish)"
ID=ubuntu
ID_LIKE=debian
PRETTY_NAME="Ubuntu 22.04.4 LTS"
VERSION_ID="22.04"
"#;
        let release = OsRelease::parse(content);
        assert_eq!(release.id.as_deref(), Some("ubuntu"));
        assert_eq!(release.id_like, vec!["debian"]);
        assert_eq!(release.pretty_name.as_deref(), Some("Ubuntu 22.04.4 LTS"));
    }

    #[test]
    fn parses_quoted_and_unquoted_values() {
        let release = OsRelease::parse("ID=\"fedora\"\nPRETTY_NAME='Fedora Linux 40'");
        assert_eq!(release.id.as_deref(), Some("fedora"));
        assert_eq!(release.pretty_name.as_deref(), Some("Fedora Linux 40"));
    }

    #[test]
    fn id_like_splits_on_whitespace() {
        let release = OsRelease::parse("ID=linuxmint\nID_LIKE=\"ubuntu debian\"");
        assert_eq!(release.id_like, vec!["ubuntu", "debian"]);
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let release = OsRelease::parse("# comment\n\nID=arch\n");
        assert_eq!(release.id.as_deref(), Some("arch"));
    }

    #[test]
    fn ignores_malformed_lines() {
        let release = OsRelease::parse("NOEQUALS\nID=debian");
        assert_eq!(release.id.as_deref(), Some("debian"));
    }

    #[test]
    fn id_is_lowercased() {
        let release = OsRelease::parse("ID=CentOS");
        assert_eq!(release.id.as_deref(), Some("centos"));
    }

    #[test]
    fn id_candidates_prefer_id_over_id_like() {
        let release = OsRelease::parse("ID=linuxmint\nID_LIKE=\"ubuntu debian\"");
        let candidates: Vec<&str> = release.id_candidates().collect();
        assert_eq!(candidates, vec!["linuxmint", "ubuntu", "debian"]);
    }

    #[test]
    fn empty_content_yields_defaults() {
        let release = OsRelease::parse("");
        assert_eq!(release, OsRelease::default());
    }
}
