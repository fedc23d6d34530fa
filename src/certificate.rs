//! Certificate export for Expert-tier results.
//!
//! Pure presentation: it receives only the finalized identity and tier
//! fields and renders a single-page plain-text artifact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const PAGE_WIDTH: usize = 64;

/// The finalized fields a certificate is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub user_name: String,
    pub domain: String,
    pub level: String,
    pub date: String,
}

impl Certificate {
    /// Render the single-page certificate.
    pub fn render(&self) -> String {
        let border = format!("+{}+", "=".repeat(PAGE_WIDTH));
        let blank = framed("");
        let mut lines = vec![
            border.clone(),
            blank.clone(),
            framed("CERTIFICATE OF ACHIEVEMENT"),
            blank.clone(),
            framed("proudly awarded to"),
            blank.clone(),
            framed(&self.user_name),
            blank.clone(),
            framed("for successfully demonstrating skills at level"),
            framed(&self.level),
            framed("in the domain of"),
            framed(&self.domain),
            blank.clone(),
            framed(&format!("Issued on {}", self.date)),
            blank,
            border,
        ];
        lines.push(String::new());
        lines.join("\n")
    }

    /// Write the rendered certificate to `path`.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }

    /// `certificate-<slugged user name>.txt` in the working directory.
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(format!("certificate-{}.txt", slug(&self.user_name)))
    }
}

fn framed(text: &str) -> String {
    let width = text.chars().count().min(PAGE_WIDTH);
    let truncated: String = text.chars().take(PAGE_WIDTH).collect();
    let left = (PAGE_WIDTH - width) / 2;
    let right = PAGE_WIDTH - width - left;
    format!("|{}{}{}|", " ".repeat(left), truncated, " ".repeat(right))
}

fn slug(name: &str) -> String {
    let mut slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certificate() -> Certificate {
        Certificate {
            user_name: "Jean Dupont".to_string(),
            domain: "Software Development".to_string(),
            level: "Expert".to_string(),
            date: "24/08/2026".to_string(),
        }
    }

    #[test]
    fn test_render_contains_all_fields() {
        let page = certificate().render();
        assert!(page.contains("Jean Dupont"));
        assert!(page.contains("Expert"));
        assert!(page.contains("Software Development"));
        assert!(page.contains("Issued on 24/08/2026"));
    }

    #[test]
    fn test_render_lines_are_uniform_width() {
        let page = certificate().render();
        for line in page.lines() {
            assert_eq!(line.chars().count(), PAGE_WIDTH + 2, "line: {line:?}");
        }
    }

    #[test]
    fn test_default_path_slugs_the_name() {
        assert_eq!(
            certificate().default_path(),
            PathBuf::from("certificate-jean-dupont.txt")
        );
    }
}
