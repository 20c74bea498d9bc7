//! The mock catalog and everything derived from it.
//!
//! ReadSpace has no backend: the catalog, the registered-user list and the
//! admin analytics all live here as plain data. Review state is the one
//! thing that is *not* here: that belongs to the ratings store.

use crate::models::resource::{Category, Resource};
use crate::models::user::Role;

#[allow(clippy::too_many_arguments)]
fn resource(
    id: u32,
    title: &str,
    author: &str,
    description: &str,
    category: Category,
    tags: &[&str],
    rating: f64,
    pages: u32,
    year: u32,
    downloads: u32,
    file_size: &str,
    latest: bool,
) -> Resource {
    Resource {
        id,
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        pages,
        year,
        downloads,
        file_size: file_size.to_string(),
        thumbnail: format!("/assets/covers/{id:02}.jpg"),
        latest,
    }
}

/// The full catalog, in display order.
pub fn resources() -> Vec<Resource> {
    vec![
        resource(
            1,
            "Introduction to Algorithms and Data Structures",
            "H. Ramanathan",
            "From asymptotic analysis to balanced trees and graph algorithms, with worked \
             complexity proofs and several hundred exercises.",
            Category::Textbooks,
            &["algorithms", "data structures", "complexity"],
            4.2,
            912,
            2024,
            48210,
            "14.2 MB",
            false,
        ),
        resource(
            2,
            "Discrete Mathematics for Computer Science",
            "L. Whitfield & P. Osei",
            "Logic, sets, combinatorics and graph theory, written for first-year CS students \
             with no proof background assumed.",
            Category::Textbooks,
            &["logic", "combinatorics", "proofs"],
            4.5,
            640,
            2023,
            39875,
            "9.8 MB",
            false,
        ),
        resource(
            3,
            "Operating Systems: Principles in Practice",
            "M. Castellanos",
            "Processes, scheduling, virtual memory and file systems, each chapter paired with \
             a small kernel lab in C.",
            Category::Textbooks,
            &["os", "kernels", "systems"],
            4.4,
            758,
            2025,
            31566,
            "18.6 MB",
            true,
        ),
        resource(
            4,
            "A Survey of Transformer Efficiency Techniques",
            "Y. Nakamura et al.",
            "Peer-reviewed survey of pruning, quantization and attention approximations, with \
             reproducible benchmark tables.",
            Category::Research,
            &["machine learning", "transformers", "efficiency"],
            4.7,
            52,
            2025,
            22340,
            "3.1 MB",
            true,
        ),
        resource(
            5,
            "Consensus in Partially Synchronous Networks",
            "D. Björklund",
            "A readable treatment of Paxos, Raft and BFT variants, including the failure \
             models under which each guarantee holds.",
            Category::Research,
            &["distributed systems", "consensus", "raft"],
            4.3,
            38,
            2022,
            18752,
            "2.4 MB",
            false,
        ),
        resource(
            6,
            "Measuring Study Habits at Scale",
            "Institute for Learning Analytics",
            "Longitudinal study of 40,000 undergraduates linking spaced repetition habits to \
             exam outcomes.",
            Category::Research,
            &["education", "statistics", "learning"],
            3.9,
            64,
            2024,
            9412,
            "5.0 MB",
            false,
        ),
        resource(
            7,
            "The Linear Algebra Survival Guide",
            "R. Adeyemi",
            "Condensed exam prep: every standard theorem stated, illustrated and followed by \
             two solved problems.",
            Category::Guides,
            &["linear algebra", "exam prep", "matrices"],
            4.6,
            184,
            2024,
            54120,
            "6.3 MB",
            false,
        ),
        resource(
            8,
            "Writing a Thesis Without Losing Your Mind",
            "C. Duran & K. Albrecht",
            "Planning templates, citation workflows and a chapter-by-chapter checklist for \
             final-year students.",
            Category::Guides,
            &["thesis", "writing", "research skills"],
            4.1,
            142,
            2023,
            27034,
            "4.4 MB",
            false,
        ),
        resource(
            9,
            "Pocket Guide to Technical Interviews",
            "S. Vance",
            "Sixty canonical problems with discussion of the pattern behind each, from two \
             pointers to dynamic programming.",
            Category::Guides,
            &["interviews", "problem solving", "practice"],
            4.0,
            210,
            2025,
            61208,
            "5.7 MB",
            true,
        ),
        resource(
            10,
            "Build a Web Server from Scratch",
            "A. Kowalczyk",
            "Hands-on tutorial series: sockets, HTTP parsing, routing and a thread pool, one \
             working milestone per chapter.",
            Category::Tutorials,
            &["networking", "http", "rust"],
            4.8,
            96,
            2025,
            45980,
            "7.9 MB",
            true,
        ),
        resource(
            11,
            "Practical SQL for Data Analysis",
            "N. Haddad",
            "Window functions, CTEs and query plans taught against a realistic warehouse \
             dataset you load on page one.",
            Category::Tutorials,
            &["sql", "databases", "analytics"],
            4.4,
            168,
            2024,
            33417,
            "8.2 MB",
            false,
        ),
        resource(
            12,
            "Version Control Beyond the Basics",
            "E. Thorne",
            "Interactive rebasing, bisecting and release branching strategies, with recovery \
             recipes for the messes you will make.",
            Category::Tutorials,
            &["git", "workflow", "tooling"],
            4.2,
            124,
            2022,
            29876,
            "3.8 MB",
            false,
        ),
    ]
}

/// Linear scan shared by the browse pages and the admin search boxes.
pub fn search(all: &[Resource], query: &str, category: Option<Category>) -> Vec<Resource> {
    all.iter()
        .filter(|r| r.matches(query, category))
        .cloned()
        .collect()
}

/// Catalog sorted by download count, most popular first.
pub fn by_downloads(all: &[Resource]) -> Vec<Resource> {
    let mut sorted = all.to_vec();
    sorted.sort_by(|a, b| b.downloads.cmp(&a.downloads));
    sorted
}

/// Catalog sorted by publication year, newest first.
pub fn by_year(all: &[Resource]) -> Vec<Resource> {
    let mut sorted = all.to_vec();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Suspended => "suspended",
        }
    }
}

/// Rows for the admin "Manage Users" table. Display data only.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub joined: String,
    pub downloads: u32,
    pub status: AccountStatus,
}

fn registered(
    id: u32,
    name: &str,
    email: &str,
    role: Role,
    joined: &str,
    downloads: u32,
    status: AccountStatus,
) -> RegisteredUser {
    RegisteredUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        joined: joined.to_string(),
        downloads,
        status,
    }
}

pub fn registered_users() -> Vec<RegisteredUser> {
    vec![
        registered(1, "Amara Diallo", "amara.d@readspace.edu", Role::Admin, "Aug 2024", 312, AccountStatus::Active),
        registered(2, "Tom Brzezinski", "tomb@campus.edu", Role::Student, "Sep 2024", 187, AccountStatus::Active),
        registered(3, "Leila Haddad", "leila.h@campus.edu", Role::Student, "Jan 2025", 96, AccountStatus::Active),
        registered(4, "Marcus Webb", "mwebb@campus.edu", Role::Student, "Feb 2025", 58, AccountStatus::Suspended),
        registered(5, "Ingrid Solheim", "ingrid.s@campus.edu", Role::Student, "Mar 2025", 75, AccountStatus::Active),
        registered(6, "Kenji Watanabe", "kenji.w@campus.edu", Role::Student, "May 2025", 41, AccountStatus::Active),
    ]
}

/// Monthly download totals for the admin overview chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyDownloads {
    pub month: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub total_resources: usize,
    pub total_users: u32,
    pub total_downloads: u64,
    pub total_categories: usize,
    pub monthly_downloads: Vec<MonthlyDownloads>,
}

pub fn analytics() -> Analytics {
    let catalog = resources();
    Analytics {
        total_resources: catalog.len(),
        total_users: 2847,
        total_downloads: catalog.iter().map(|r| u64::from(r.downloads)).sum(),
        total_categories: Category::ALL.len(),
        monthly_downloads: vec![
            MonthlyDownloads { month: "Mar", value: 8400 },
            MonthlyDownloads { month: "Apr", value: 9650 },
            MonthlyDownloads { month: "May", value: 11020 },
            MonthlyDownloads { month: "Jun", value: 10480 },
            MonthlyDownloads { month: "Jul", value: 12760 },
            MonthlyDownloads { month: "Aug", value: 13890 },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_title_author_and_tags_case_insensitively() {
        let all = resources();
        let by_title = search(&all, "ALGORITHMS", None);
        assert!(by_title.iter().any(|r| r.id == 1));

        let by_author = search(&all, "vance", None);
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id, 9);

        let by_tag = search(&all, "consensus", None);
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, 5);
    }

    #[test]
    fn search_respects_the_category_filter() {
        let all = resources();
        let guides = search(&all, "", Some(Category::Guides));
        assert!(!guides.is_empty());
        assert!(guides.iter().all(|r| r.category == Category::Guides));

        // Query and category combine.
        let none = search(&all, "consensus", Some(Category::Guides));
        assert!(none.is_empty());
    }

    #[test]
    fn empty_query_returns_everything() {
        let all = resources();
        assert_eq!(search(&all, "   ", None).len(), all.len());
    }

    #[test]
    fn popularity_and_year_orderings() {
        let all = resources();
        let popular = by_downloads(&all);
        assert!(popular.windows(2).all(|w| w[0].downloads >= w[1].downloads));

        let latest = by_year(&all);
        assert!(latest.windows(2).all(|w| w[0].year >= w[1].year));
    }

    #[test]
    fn analytics_totals_derive_from_the_catalog() {
        let stats = analytics();
        assert_eq!(stats.total_resources, resources().len());
        assert_eq!(
            stats.total_downloads,
            resources().iter().map(|r| u64::from(r.downloads)).sum::<u64>()
        );
        assert_eq!(stats.total_categories, 4);
    }
}
