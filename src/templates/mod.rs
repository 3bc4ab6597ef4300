//! HTML rendering for the two list pages.
//!
//! Handlers never build template contexts by hand: each page is described by a
//! [`PlaceListView`] and rendered through [`Templates`], which wraps Tera.
//! The templates under `templates/` are compiled into the binary; a directory
//! of replacements can be loaded instead with [`Templates::from_dir`].

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;
use tera::{Context, Tera};

use crate::models::Place;

const EMBEDDED: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("wishlist.html", include_str!("../../templates/wishlist.html")),
    ("visited.html", include_str!("../../templates/visited.html")),
];

/// The list pages the application serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceList {
    Wishlist,
    Visited,
}

impl PlaceList {
    /// Value of the `visited` flag of the places this page shows.
    pub fn visited(self) -> bool {
        matches!(self, Self::Visited)
    }

    pub fn template_name(self) -> &'static str {
        match self {
            Self::Wishlist => "wishlist.html",
            Self::Visited => "visited.html",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Wishlist => "You have no places in your wishlist",
            Self::Visited => "You have not visited any places yet",
        }
    }
}

/// Everything a list page template can see.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceListView {
    pub page: PlaceList,
    pub places: Vec<Place>,
    pub empty_message: &'static str,
}

impl PlaceListView {
    pub fn new(page: PlaceList, places: Vec<Place>) -> Self {
        Self {
            page,
            places,
            empty_message: page.empty_message(),
        }
    }
}

pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(EMBEDDED.iter().copied())
            .context("Failed to parse embedded templates")?;
        Ok(Self { tera })
    }

    /// Load every `*.html` file under `dir`. The directory must provide all
    /// of the templates the embedded set does.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let pattern = format!("{}/**/*.html", dir.display());
        let tera = Tera::new(&pattern)
            .with_context(|| format!("Failed to load templates from {}", dir.display()))?;

        let loaded: Vec<&str> = tera.get_template_names().collect();
        for (name, _) in EMBEDDED {
            if !loaded.contains(name) {
                anyhow::bail!("Template directory {} is missing {}", dir.display(), name);
            }
        }

        tracing::info!("Loaded {} template(s) from {}", loaded.len(), dir.display());
        Ok(Self { tera })
    }

    pub fn render_place_list(&self, view: &PlaceListView) -> Result<String> {
        let template = view.page.template_name();
        let context = Context::from_serialize(view)
            .with_context(|| format!("Failed to build context for {}", template))?;
        self.tera
            .render(template, &context)
            .with_context(|| format!("Failed to render {}", template))
    }
}
