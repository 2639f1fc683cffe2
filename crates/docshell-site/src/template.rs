//! HTML page shell for static site generation.
//!
//! Produces the sidebar-navigated docs layout: header with menu and theme
//! toggles, sidebar groups, article, table of contents and page footer.

use std::fmt::Write;

use docshell_nav::{MenuState, NavGroup, Pagination};
use docshell_renderer::{TocEntry, escape_html as escape};

/// Script wiring the menu and theme toggles.
///
/// Mirrors [`MenuState`]: toggle flips the menu, following a sidebar link
/// closes it before the next page loads.
const SHELL_SCRIPT: &str = r#"(function () {
  var shell = document.querySelector("[data-menu-state]");
  var button = document.querySelector("[data-menu-toggle]");
  function setMenu(state) {
    shell.setAttribute("data-menu-state", state);
    button.setAttribute("aria-expanded", state === "open" ? "true" : "false");
  }
  button.addEventListener("click", function () {
    setMenu(shell.getAttribute("data-menu-state") === "open" ? "closed" : "open");
  });
  document.querySelectorAll(".docs-sidebar a").forEach(function (link) {
    link.addEventListener("click", function () { setMenu("closed"); });
  });
  var root = document.documentElement;
  var stored = localStorage.getItem("docshell-theme");
  if (stored) { root.setAttribute("data-theme", stored); }
  document.querySelector("[data-theme-toggle]").addEventListener("click", function () {
    var next = root.getAttribute("data-theme") === "dark" ? "light" : "dark";
    root.setAttribute("data-theme", next);
    localStorage.setItem("docshell-theme", next);
  });
})();"#;

/// All data needed to render a static page.
pub struct PageData<'a> {
    pub site_title: &'a str,
    pub home_label: &'a str,
    pub logo: &'a str,
    pub title: &'a str,
    pub html_content: &'a str,
    pub toc: &'a [TocEntry],
    pub sidebar: &'a [NavGroup],
    pub pagination: &'a Pagination,
    pub edit_url: Option<&'a str>,
    pub menu: MenuState,
    pub css_path: &'a str,
}

/// Render a complete static HTML page.
pub fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(8192);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"light\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        html,
        "<title>{} | {}</title>",
        escape(page.title),
        escape(page.site_title)
    );
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape(page.css_path)
    );
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(
        html,
        "<div class=\"docs-shell\" data-menu-state=\"{}\">",
        page.menu.as_str()
    );

    render_header(&mut html, page);

    html.push_str("<div class=\"docs-layout\">\n");
    render_sidebar(&mut html, page.sidebar);

    html.push_str("<main class=\"docs-main\">\n");
    html.push_str("<article class=\"docs-article\">\n");
    html.push_str(page.html_content);
    html.push_str("\n</article>\n");
    render_footer(&mut html, page.pagination, page.edit_url);
    html.push_str("</main>\n");

    render_toc(&mut html, page.toc);

    html.push_str("</div>\n</div>\n");
    let _ = writeln!(html, "<script>\n{SHELL_SCRIPT}\n</script>");
    html.push_str("</body>\n</html>\n");
    html
}

/// Render the top bar: home link, menu toggle and theme toggle.
fn render_header(html: &mut String, page: &PageData<'_>) {
    html.push_str("<header class=\"docs-header\">\n");
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"docs-home\"><span class=\"sr-only\">{}</span><span aria-hidden=\"true\">{}</span></a>",
        escape(page.home_label),
        escape(page.logo)
    );
    let _ = writeln!(html, "<span class=\"docs-site-title\">{}</span>", escape(page.site_title));
    let _ = writeln!(
        html,
        "<button type=\"button\" class=\"docs-menu-button\" data-menu-toggle aria-controls=\"docs-sidebar\" aria-expanded=\"{}\">Menu</button>",
        page.menu.is_open()
    );
    html.push_str(
        "<button type=\"button\" class=\"docs-theme-button\" data-theme-toggle>Toggle theme</button>\n",
    );
    html.push_str("</header>\n");
}

/// Render the sidebar groups.
fn render_sidebar(html: &mut String, groups: &[NavGroup]) {
    html.push_str("<aside id=\"docs-sidebar\" class=\"docs-sidebar\">\n<nav>\n");
    for group in groups {
        html.push_str("<section class=\"docs-nav-group\">\n");
        let _ = writeln!(html, "<h2 class=\"docs-nav-label\">{}</h2>", escape(&group.label));
        html.push_str("<ul>\n");
        for item in &group.items {
            let class = if item.active {
                "docs-nav-link docs-nav-link-active"
            } else {
                "docs-nav-link"
            };
            let current = if item.active {
                " aria-current=\"page\""
            } else {
                ""
            };
            let target = if item.external {
                " target=\"_blank\" rel=\"noopener noreferrer\""
            } else {
                ""
            };
            let _ = writeln!(
                html,
                "<li><a href=\"{}\" class=\"{class}\"{current}{target}>{}</a></li>",
                escape(&item.href),
                escape(&item.title),
            );
        }
        html.push_str("</ul>\n</section>\n");
    }
    html.push_str("</nav>\n</aside>\n");
}

/// Render the page footer: edit link and previous/next pagination.
fn render_footer(html: &mut String, pagination: &Pagination, edit_url: Option<&str>) {
    if edit_url.is_none() && pagination.is_empty() {
        return;
    }
    html.push_str("<footer class=\"docs-footer\">\n");
    if let Some(url) = edit_url {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"docs-edit-link\" target=\"_blank\" rel=\"noopener noreferrer\">Edit this page</a>",
            escape(url)
        );
    }
    if !pagination.is_empty() {
        html.push_str("<nav class=\"docs-pagination\">\n");
        if let Some(previous) = &pagination.previous {
            let _ = writeln!(
                html,
                "<a href=\"{}\" class=\"docs-pagination-previous\" rel=\"prev\"><span>Previous</span> {}</a>",
                escape(&previous.href),
                escape(&previous.title)
            );
        }
        if let Some(next) = &pagination.next {
            let _ = writeln!(
                html,
                "<a href=\"{}\" class=\"docs-pagination-next\" rel=\"next\"><span>Next</span> {}</a>",
                escape(&next.href),
                escape(&next.title)
            );
        }
        html.push_str("</nav>\n");
    }
    html.push_str("</footer>\n");
}

/// Render the table of contents sidebar.
fn render_toc(html: &mut String, toc: &[TocEntry]) {
    if toc.is_empty() {
        return;
    }
    html.push_str("<aside class=\"docs-toc\">\n");
    html.push_str("<h2 class=\"docs-toc-label\">On this page</h2>\n<ul>\n");
    for entry in toc {
        let indent = if entry.level >= 3 {
            " class=\"docs-toc-nested\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<li{indent}><a href=\"#{}\">{}</a></li>",
            escape(&entry.id),
            escape(&entry.title),
        );
    }
    html.push_str("</ul>\n</aside>\n");
}

/// Render the root page redirecting to `target`.
pub fn render_redirect(target: &str, site_title: &str) -> String {
    let target = escape(target);
    let mut html = String::with_capacity(512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<meta http-equiv=\"refresh\" content=\"0; url={target}\">");
    let _ = writeln!(html, "<link rel=\"canonical\" href=\"{target}\">");
    let _ = writeln!(html, "<title>{}</title>", escape(site_title));
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<a href=\"{target}\">{target}</a>");
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use docshell_nav::{NavItem, PaginationLink};

    use super::*;

    fn page<'a>(sidebar: &'a [NavGroup], pagination: &'a Pagination) -> PageData<'a> {
        PageData {
            site_title: "Docs",
            home_label: "Docs homepage",
            logo: "📦",
            title: "Setup",
            html_content: "<p>Hello world</p>",
            toc: &[],
            sidebar,
            pagination,
            edit_url: None,
            menu: MenuState::Closed,
            css_path: "/assets/docshell.css",
        }
    }

    fn sidebar() -> Vec<NavGroup> {
        vec![
            NavGroup {
                label: "Start".to_owned(),
                items: vec![
                    NavItem {
                        title: "Intro".to_owned(),
                        href: "/intro".to_owned(),
                        active: false,
                        external: false,
                    },
                    NavItem {
                        title: "Setup".to_owned(),
                        href: "/setup".to_owned(),
                        active: true,
                        external: false,
                    },
                ],
            },
            NavGroup {
                label: "Community".to_owned(),
                items: vec![NavItem {
                    title: "GitHub".to_owned(),
                    href: "https://github.com/org/repo".to_owned(),
                    active: false,
                    external: true,
                }],
            },
        ]
    }

    #[test]
    fn render_page_contains_content() {
        let pagination = Pagination::default();
        let html = render_page(&page(&[], &pagination));
        assert!(html.contains("<p>Hello world</p>"));
        assert!(html.contains("<title>Setup | Docs</title>"));
        assert!(html.contains("/assets/docshell.css"));
    }

    #[test]
    fn render_page_home_link_has_accessible_label() {
        let pagination = Pagination::default();
        let html = render_page(&page(&[], &pagination));
        assert!(html.contains("<span class=\"sr-only\">Docs homepage</span>"));
    }

    #[test]
    fn render_page_menu_closed() {
        let pagination = Pagination::default();
        let html = render_page(&page(&[], &pagination));
        assert!(html.contains("data-menu-state=\"closed\""));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn render_page_menu_open() {
        let pagination = Pagination::default();
        let mut data = page(&[], &pagination);
        data.menu = MenuState::Open;
        let html = render_page(&data);
        assert!(html.contains("data-menu-state=\"open\""));
        assert!(html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn render_page_marks_active_nav_item() {
        let groups = sidebar();
        let pagination = Pagination::default();
        let html = render_page(&page(&groups, &pagination));
        assert!(html.contains(
            "<a href=\"/setup\" class=\"docs-nav-link docs-nav-link-active\" aria-current=\"page\">Setup</a>"
        ));
        assert!(html.contains("<a href=\"/intro\" class=\"docs-nav-link\">Intro</a>"));
    }

    #[test]
    fn render_page_community_links_open_new_tab() {
        let groups = sidebar();
        let pagination = Pagination::default();
        let html = render_page(&page(&groups, &pagination));
        assert!(html.contains("<h2 class=\"docs-nav-label\">Community</h2>"));
        assert!(html.contains(
            "href=\"https://github.com/org/repo\" class=\"docs-nav-link\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
    }

    #[test]
    fn render_page_pagination() {
        let pagination = Pagination {
            previous: Some(PaginationLink {
                title: "Intro".to_owned(),
                href: "/intro".to_owned(),
            }),
            next: Some(PaginationLink {
                title: "API Reference".to_owned(),
                href: "/api-ref".to_owned(),
            }),
        };
        let html = render_page(&page(&[], &pagination));
        assert!(html.contains("<a href=\"/intro\" class=\"docs-pagination-previous\""));
        assert!(html.contains("<span>Next</span> API Reference</a>"));
    }

    #[test]
    fn render_page_without_footer() {
        let pagination = Pagination::default();
        let html = render_page(&page(&[], &pagination));
        assert!(!html.contains("docs-footer"));
    }

    #[test]
    fn render_page_edit_link() {
        let pagination = Pagination::default();
        let mut data = page(&[], &pagination);
        data.edit_url = Some("https://github.com/org/repo/edit/main/setup.mdx");
        let html = render_page(&data);
        assert!(html.contains(
            "<a href=\"https://github.com/org/repo/edit/main/setup.mdx\" class=\"docs-edit-link\""
        ));
        assert!(html.contains("Edit this page"));
        assert!(!html.contains("docs-pagination"));
    }

    #[test]
    fn render_page_indents_toc_level_3() {
        let toc = vec![
            TocEntry {
                level: 2,
                title: "Section".to_owned(),
                id: "section".to_owned(),
            },
            TocEntry {
                level: 3,
                title: "Subsection".to_owned(),
                id: "subsection".to_owned(),
            },
        ];
        let pagination = Pagination::default();
        let mut data = page(&[], &pagination);
        data.toc = &toc;
        let html = render_page(&data);
        assert!(html.contains("On this page"));
        assert!(html.contains("<li class=\"docs-toc-nested\"><a href=\"#subsection\">"));
        assert!(html.contains("<li><a href=\"#section\">"));
    }

    #[test]
    fn render_page_escapes_titles() {
        let pagination = Pagination::default();
        let mut data = page(&[], &pagination);
        data.title = "<Setup>";
        let html = render_page(&data);
        assert!(html.contains("<title>&lt;Setup&gt; | Docs</title>"));
    }

    #[test]
    fn render_redirect_points_to_target() {
        let html = render_redirect("/intro", "Docs");
        assert!(html.contains("content=\"0; url=/intro\""));
        assert!(html.contains("<a href=\"/intro\">/intro</a>"));
    }
}
