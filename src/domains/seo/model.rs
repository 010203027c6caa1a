/// One page in the XML sitemap.
#[derive(Debug, Clone, Copy)]
pub struct SitemapEntry {
  pub path: &'static str,
  pub last_modified: &'static str,
  pub priority: &'static str,
  pub change_frequency: &'static str,
}

const LAST_MODIFIED: &str = "2025-03-10";

/// Every public page of the site with its SEO properties.
pub const SITE_PAGES: &[SitemapEntry] = &[
  SitemapEntry {
    path: "/",
    last_modified: LAST_MODIFIED,
    priority: "1.0",
    change_frequency: "weekly",
  },
  SitemapEntry {
    path: "/features",
    last_modified: LAST_MODIFIED,
    priority: "0.8",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/pricing",
    last_modified: LAST_MODIFIED,
    priority: "0.9",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/setup-guides",
    last_modified: LAST_MODIFIED,
    priority: "0.7",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/testimonials",
    last_modified: LAST_MODIFIED,
    priority: "0.6",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/faq",
    last_modified: LAST_MODIFIED,
    priority: "0.7",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/contact",
    last_modified: LAST_MODIFIED,
    priority: "0.6",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/about",
    last_modified: LAST_MODIFIED,
    priority: "0.6",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/privacy-policy",
    last_modified: LAST_MODIFIED,
    priority: "0.5",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/terms-of-service",
    last_modified: LAST_MODIFIED,
    priority: "0.5",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/refund-policy",
    last_modified: LAST_MODIFIED,
    priority: "0.5",
    change_frequency: "monthly",
  },
  SitemapEntry {
    path: "/dmca",
    last_modified: LAST_MODIFIED,
    priority: "0.4",
    change_frequency: "monthly",
  },
];

pub fn render_robots_txt(site_base_url: &str) -> String {
  format!(
    "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n\nDisallow: /api/\n",
    site_base_url
  )
}

pub fn render_sitemap(site_base_url: &str, pages: &[SitemapEntry]) -> String {
  let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
  xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

  for page in pages {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}{}</loc>\n", site_base_url, page.path));
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", page.last_modified));
    xml.push_str(&format!("    <changefreq>{}</changefreq>\n", page.change_frequency));
    xml.push_str(&format!("    <priority>{}</priority>\n", page.priority));
    xml.push_str("  </url>\n");
  }

  xml.push_str("</urlset>");
  xml
}
