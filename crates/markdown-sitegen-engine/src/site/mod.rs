//! # Site Generation
//!
//! File-system side of the generator: reads markdown, renders it through the
//! pure [`parsing`](crate::parsing) pipeline, fills a [`Template`] and writes
//! HTML pages. Static assets are copied verbatim.

pub mod template;

pub use template::Template;

use std::path::{Path, PathBuf};

use crate::{
    error::MarkdownError,
    io::{self, IoError},
    parsing::{extract_title, render_document},
};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        source: MarkdownError,
    },
}

/// Locations and defaults for one site build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template_path: PathBuf,
    pub default_title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildReport {
    pub pages: usize,
    pub static_files: usize,
}

/// Renders one markdown file into `destination` using `template`.
///
/// A page without a level-1 heading gets `default_title`; any other
/// rendering error fails the page.
pub fn generate_page(
    source: &Path,
    template: &Template,
    destination: &Path,
    default_title: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {}",
        source.display(),
        destination.display()
    );

    let markdown = io::read_file(source)?;
    let render_error = |err: MarkdownError| SiteError::Render {
        path: source.to_path_buf(),
        source: err,
    };

    let content = render_document(&markdown).map_err(render_error)?;
    let title = match extract_title(&markdown) {
        Ok(title) => title,
        Err(MarkdownError::NoTitleFound) => {
            log::warn!(
                "No title found in {}. Using \"{default_title}\".",
                source.display()
            );
            default_title.to_string()
        }
        Err(e) => return Err(render_error(e)),
    };

    io::write_file(destination, &template.render(&title, &content))?;
    Ok(())
}

/// Renders every markdown file under `content_dir` into `public_dir`.
///
/// `content_dir/a/b.md` becomes `public_dir/a/b.html`. Returns the page count.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    public_dir: &Path,
    default_title: &str,
) -> Result<usize, SiteError> {
    let files = io::scan_markdown_files(content_dir)?;
    for source in &files {
        let destination = io::html_output_path(content_dir, source, public_dir)?;
        generate_page(source, template, &destination, default_title)?;
    }
    log::info!("Generated {} pages", files.len());
    Ok(files.len())
}

/// Full build: copy static assets, then render every page.
///
/// A missing static directory is skipped with a warning; the public
/// directory is still recreated so stale output never survives a build.
pub fn build_site(options: &BuildOptions) -> Result<BuildReport, SiteError> {
    let static_files = if options.static_dir.is_dir() {
        io::copy_directory(&options.static_dir, &options.public_dir)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping asset copy",
            options.static_dir.display()
        );
        io::reset_directory(&options.public_dir)?;
        0
    };

    let template = Template::load(&options.template_path)?;
    let pages = generate_pages_recursive(
        &options.content_dir,
        &template,
        &options.public_dir,
        &options.default_title,
    )?;

    Ok(BuildReport {
        pages,
        static_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    #[test]
    fn generate_page_with_title() {
        let dir = create_test_dir();
        let source = create_test_file(&dir, "index.md", "# Welcome\n\nHello **there**");
        let dest = dir.path().join("out/index.html");

        generate_page(&source, &Template::new(TEMPLATE), &dest, "Untitled Page").unwrap();

        assert_eq!(
            io::read_file(&dest).unwrap(),
            "<title>Welcome</title><main><div><h1>Welcome</h1><p>Hello <b>there</b></p></div></main>"
        );
    }

    #[test]
    fn generate_page_falls_back_to_default_title() {
        let dir = create_test_dir();
        let source = create_test_file(&dir, "notes.md", "## Not a title");
        let dest = dir.path().join("notes.html");

        generate_page(&source, &Template::new(TEMPLATE), &dest, "Untitled Page").unwrap();

        assert_eq!(
            io::read_file(&dest).unwrap(),
            "<title>Untitled Page</title><main><div><h2>Not a title</h2></div></main>"
        );
    }

    #[test]
    fn generate_page_propagates_render_errors() {
        let dir = create_test_dir();
        let source = create_test_file(&dir, "bad.md", "# Title\n\nthis is **broken");
        let dest = dir.path().join("bad.html");

        let err = generate_page(&source, &Template::new(TEMPLATE), &dest, "x").unwrap_err();

        assert!(matches!(
            err,
            SiteError::Render {
                source: MarkdownError::UnbalancedDelimiter { .. },
                ..
            }
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn generate_page_missing_source() {
        let dir = create_test_dir();
        let err = generate_page(
            &dir.path().join("missing.md"),
            &Template::new(TEMPLATE),
            &dir.path().join("missing.html"),
            "x",
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Io(IoError::NotFound(_))));
    }

    #[test]
    fn generate_pages_mirrors_directory_layout() {
        let content = create_test_dir();
        create_test_file(&content, "index.md", "# Home");
        std::fs::create_dir(content.path().join("blog")).unwrap();
        std::fs::write(content.path().join("blog/post.md"), "# Post").unwrap();
        let public = create_test_dir();

        let pages = generate_pages_recursive(
            content.path(),
            &Template::new("{{ Title }}"),
            public.path(),
            "x",
        )
        .unwrap();

        assert_eq!(pages, 2);
        assert_eq!(io::read_file(&public.path().join("index.html")).unwrap(), "Home");
        assert_eq!(
            io::read_file(&public.path().join("blog/post.html")).unwrap(),
            "Post"
        );
    }

    #[test]
    fn build_site_copies_static_and_renders_pages() {
        let root = create_test_dir();
        let path = |p: &str| root.path().join(p);
        std::fs::create_dir_all(path("content")).unwrap();
        std::fs::create_dir_all(path("static/images")).unwrap();
        std::fs::write(path("content/index.md"), "# Home\n\n* one\n* two").unwrap();
        std::fs::write(path("static/index.css"), "body {}").unwrap();
        std::fs::write(path("static/images/logo.png"), "png").unwrap();
        std::fs::write(path("template.html"), TEMPLATE).unwrap();

        let report = build_site(&BuildOptions {
            content_dir: path("content"),
            static_dir: path("static"),
            public_dir: path("public"),
            template_path: path("template.html"),
            default_title: "Untitled Page".to_string(),
        })
        .unwrap();

        assert_eq!(
            report,
            BuildReport {
                pages: 1,
                static_files: 2,
            }
        );
        assert!(path("public/index.css").exists());
        assert!(path("public/images/logo.png").exists());
        assert_eq!(
            io::read_file(&path("public/index.html")).unwrap(),
            "<title>Home</title><main><div><h1>Home</h1><ul><li>one</li><li>two</li></ul></div></main>"
        );
    }

    #[test]
    fn build_site_without_static_dir() {
        let root = create_test_dir();
        let path = |p: &str| root.path().join(p);
        std::fs::create_dir_all(path("content")).unwrap();
        std::fs::create_dir_all(path("public")).unwrap();
        std::fs::write(path("public/stale.html"), "old").unwrap();
        std::fs::write(path("content/a.md"), "text").unwrap();
        std::fs::write(path("template.html"), "{{ Content }}").unwrap();

        let report = build_site(&BuildOptions {
            content_dir: path("content"),
            static_dir: path("static"),
            public_dir: path("public"),
            template_path: path("template.html"),
            default_title: "Untitled Page".to_string(),
        })
        .unwrap();

        assert_eq!(report.static_files, 0);
        assert_eq!(report.pages, 1);
        assert!(!path("public/stale.html").exists());
        assert_eq!(io::read_file(&path("public/a.html")).unwrap(), "<div><p>text</p></div>");
    }
}
