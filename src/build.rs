//! Static build: render every known route into the output directory.
//!
//! ```text
//! build_site()
//!     ├── prepare_output()       clean / create output dir
//!     └── rayon::join
//!           ├── pages  ──► <output>/<path>/index.html
//!           └── files  ──► robots.txt, sitemap, feed
//! ```

use crate::{config::SiteConfig, log, router::Route, utils::log::ProgressBars};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

/// Build the whole site. Returns the number of files written.
pub fn build_site(config: &SiteConfig) -> Result<usize> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let pages: Vec<(Route, PathBuf)> = Route::pages()
        .into_iter()
        .filter_map(|route| {
            let file = page_file(&route, config)?;
            Some((route, file))
        })
        .collect();
    let files = generated_files(config);

    log!("build"; "rendering {} pages into {}", pages.len(), output.display());
    let progress = ProgressBars::new(&[("pages", pages.len()), ("files", files.len())]);
    let has_error = AtomicBool::new(false);

    let write_all = |entries: &[(Route, PathBuf)], bar: usize| {
        entries.par_iter().try_for_each(|(route, file)| {
            if has_error.load(Ordering::Relaxed) {
                return Err(anyhow!("Aborted"));
            }
            if let Err(e) = write_route(route, file, config) {
                if !has_error.swap(true, Ordering::Relaxed) {
                    log!("error"; "{}: {:#}", file.display(), e);
                }
                return Err(anyhow!("Build failed"));
            }
            progress.inc(bar);
            Ok(())
        })
    };

    let (pages_result, files_result) = rayon::join(|| write_all(&pages, 0), || write_all(&files, 1));
    progress.finish();
    pages_result?;
    files_result?;

    let written = pages.len() + files.len();
    log!("build"; "done, {} files", written);
    Ok(written)
}

/// Create the output directory, emptying it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// `/` → `index.html`, `/blog/x` → `blog/x/index.html`.
fn page_file(route: &Route, config: &SiteConfig) -> Option<PathBuf> {
    let path = route.path(config)?;
    let relative = path.trim_matches('/');
    Some(config.build.output.join(relative).join("index.html"))
}

/// Enabled crawler files and where they go.
fn generated_files(config: &SiteConfig) -> Vec<(Route, PathBuf)> {
    let build = &config.build;
    let mut files = Vec::with_capacity(3);
    if build.robots.enable {
        files.push((Route::Robots, build.output.join("robots.txt")));
    }
    if build.sitemap.enable {
        files.push((Route::Sitemap, build.sitemap.path.clone()));
    }
    if build.rss.enable {
        files.push((Route::Feed, build.rss.path.clone()));
    }
    files
}

fn write_route(route: &Route, file: &Path, config: &SiteConfig) -> Result<()> {
    let response = route.render(config)?;
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file, response.body).with_context(|| format!("Failed to write {}", file.display()))
}
