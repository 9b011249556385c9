//! Static website generation.
//!
//! Renders the catalog snapshot as an HTML grid and substitutes it into the
//! template's placeholder token. Interpolated fields are escaped; metadata
//! arrives from an external service and posters can be arbitrary URLs.

use crate::movie_store::{Movie, MovieStore};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

pub const MOVIE_GRID_TOKEN: &str = "__TEMPLATE_MOVIE_GRID__";

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One `<li>` fragment per movie, concatenated in snapshot order.
pub fn render_grid(movies: &[Movie]) -> String {
    let mut grid = String::new();
    for movie in movies {
        let title = escape_html(&movie.title);
        let poster = escape_html(movie.poster.as_deref().unwrap_or(""));
        let year = movie.year.map(|y| y.to_string()).unwrap_or_default();
        let rating = movie.rating.map(|r| format!("{:.1}", r)).unwrap_or_default();

        grid.push_str(&format!(
            r#"
        <li class="movie-item">
            <img src="{poster}" alt="{title} poster"/>
            <h3>{title}</h3>
            <p>Year: {year}</p>
            <p>Rating: {rating}</p>
        </li>
        "#
        ));
    }
    grid
}

/// Substitutes the rendered grid into the template. A template without the
/// placeholder token is a configuration error, not a silent no-op.
pub fn render_page(movies: &[Movie], template: &str) -> Result<String> {
    if !template.contains(MOVIE_GRID_TOKEN) {
        bail!("Template is missing the {} placeholder", MOVIE_GRID_TOKEN);
    }
    Ok(template.replace(MOVIE_GRID_TOKEN, &render_grid(movies)))
}

/// Reads the template, renders the current snapshot, writes the output file.
pub fn generate(
    store: &dyn MovieStore,
    template_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let template = std::fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template {:?}", template_path))?;
    let movies = store.list()?;
    let html = render_page(&movies, &template)?;
    std::fs::write(output_path, html)
        .with_context(|| format!("Failed to write website to {:?}", output_path))?;

    info!("Generated website with {} movies at {:?}", movies.len(), output_path);
    Ok(())
}
