use serde::{Deserialize, Serialize};

/// Catalog categories. The filter bar offers an extra "all" entry, which is
/// represented as `None` at the filter level rather than as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Textbooks,
    Research,
    Guides,
    Tutorials,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Textbooks,
        Category::Research,
        Category::Guides,
        Category::Tutorials,
    ];

    /// Singular badge label ("Textbook" on a card, "Textbooks" on the filter).
    pub fn label(self) -> &'static str {
        match self {
            Category::Textbooks => "Textbook",
            Category::Research => "Research Paper",
            Category::Guides => "Study Guide",
            Category::Tutorials => "Tutorial",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Category::Textbooks => "Textbooks",
            Category::Research => "Research Papers",
            Category::Guides => "Study Guides",
            Category::Tutorials => "Tutorials",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Textbooks => "📘",
            Category::Research => "🔬",
            Category::Guides => "🧭",
            Category::Tutorials => "🎓",
        }
    }

    /// Accent color used for badges and star rows.
    pub fn color(self) -> &'static str {
        match self {
            Category::Textbooks => "#3b82f6",
            Category::Research => "#8b5cf6",
            Category::Guides => "#10b981",
            Category::Tutorials => "#f59e0b",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Textbooks => "textbooks",
            Category::Research => "research",
            Category::Guides => "guides",
            Category::Tutorials => "tutorials",
        }
    }

    /// Used when restoring a category filter from a `?cat=` query parameter.
    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// One entry in the resource catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,                // Unique catalog id
    pub title: String,          // Display title
    pub author: String,         // Author(s), one display string
    pub description: String,    // Short blurb shown on cards and previews
    pub category: Category,
    pub tags: Vec<String>,      // Lowercase search tags
    pub rating: f64,            // Static base rating, blended with reviews at display time
    pub pages: u32,
    pub year: u32,
    pub downloads: u32,
    pub file_size: String,      // Display string, e.g. "14.2 MB"
    pub thumbnail: String,      // Cover image URL
    pub latest: bool,           // Featured on the Latest page
}

impl Resource {
    /// Linear filter used by the browse pages: case-insensitive match on
    /// title, author or any tag, plus an optional category restriction.
    pub fn matches(&self, query: &str, category: Option<Category>) -> bool {
        if let Some(cat) = category {
            if self.category != cat {
                return false;
            }
        }
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&q)
            || self.author.to_lowercase().contains(&q)
            || self.tags.iter().any(|tag| tag.contains(&q))
    }
}
