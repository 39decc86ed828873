//! # cfp-sitemap
//!
//! Static `sitemap.xml` generation for the portal's public routes.
//!
//! The deployed portal served this from a serverless handler; the CLI emits
//! the same document so it can be committed or uploaded during deploys.

use serde::Serialize;

/// One `<url>` entry in the sitemap.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SitemapEntry {
    /// Route path, joined onto the base URL.
    pub path: &'static str,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

/// The portal's public routes with the priorities the deployed generator used.
#[must_use]
pub const fn routes() -> &'static [SitemapEntry] {
    &[
        SitemapEntry {
            path: "/",
            changefreq: "weekly",
            priority: "1.0",
        },
        SitemapEntry {
            path: "/admin/login",
            changefreq: "weekly",
            priority: "0.8",
        },
        SitemapEntry {
            path: "/admin/dashboard",
            changefreq: "weekly",
            priority: "0.9",
        },
        SitemapEntry {
            path: "/student/dashboard",
            changefreq: "weekly",
            priority: "0.9",
        },
        SitemapEntry {
            path: "/student/submit-issue",
            changefreq: "weekly",
            priority: "0.8",
        },
        SitemapEntry {
            path: "/student/track-issue",
            changefreq: "weekly",
            priority: "0.8",
        },
        SitemapEntry {
            path: "/student/issue-details",
            changefreq: "weekly",
            priority: "0.8",
        },
    ]
}

/// Render the full sitemap document for a base URL.
///
/// Trailing slashes on the base URL are tolerated; the root route renders
/// as `<base>/` exactly once.
#[must_use]
pub fn render(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in routes() {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{base}{}</loc>\n", entry.path));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.changefreq
        ));
        xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_all_seven_routes() {
        let xml = render("https://portal.example.ac.ke");
        assert_eq!(xml.matches("<url>").count(), 7);
        assert!(xml.contains("<loc>https://portal.example.ac.ke/</loc>"));
        assert!(xml.contains("<loc>https://portal.example.ac.ke/student/track-issue</loc>"));
    }

    #[test]
    fn trailing_slash_on_base_is_collapsed() {
        let xml = render("https://portal.example.ac.ke/");
        assert!(xml.contains("<loc>https://portal.example.ac.ke/</loc>"));
        assert!(!xml.contains(".ac.ke//"));
    }

    #[test]
    fn document_is_namespaced_and_weekly() {
        let xml = render("https://portal.example.ac.ke");
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("http://www.sitemaps.org/schemas/sitemap/0.9"));
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 7);
    }

    #[test]
    fn root_has_top_priority() {
        let xml = render("https://portal.example.ac.ke");
        let root_pos = xml.find("<loc>https://portal.example.ac.ke/</loc>").unwrap();
        let after = &xml[root_pos..];
        assert!(after.trim_start().contains("<priority>1.0</priority>"));
    }
}
