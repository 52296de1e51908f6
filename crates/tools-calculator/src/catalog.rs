//! Catalog of the available tools, with the keyword search the front page uses.

use serde::Serialize;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub endpoint: &'static str,
    pub keywords: &'static [&'static str],
}

pub const TOOLS: &[ToolInfo] = &[
    ToolInfo {
        id: "age",
        name: "Age Calculator",
        description: "Calculate exact age in years, months and days",
        category: "Personal",
        endpoint: "/api/age",
        keywords: &["age calculator", "birthday", "date of birth", "age in years", "calculate age"],
    },
    ToolInfo {
        id: "cgpa",
        name: "CGPA to Percentage",
        description: "Convert CGPA to percentage for Indian universities",
        category: "Education",
        endpoint: "/api/cgpa",
        keywords: &["cgpa calculator", "gpa to percentage", "university cgpa", "vtu cgpa", "anna university"],
    },
    ToolInfo {
        id: "gst",
        name: "GST Calculator India",
        description: "Calculate GST and total price instantly",
        category: "Business",
        endpoint: "/api/gst",
        keywords: &["gst calculator", "goods and services tax", "tax calculator", "gst rate", "indian tax"],
    },
    ToolInfo {
        id: "emi",
        name: "EMI Calculator",
        description: "Calculate loan EMI, interest and total amount payable",
        category: "Finance",
        endpoint: "/api/emi",
        keywords: &["emi calculator", "loan calculator", "home loan calculator", "monthly installment", "personal loan", "car loan"],
    },
];

/// Distinct categories in catalog order, prefixed with [`ALL_CATEGORIES`].
pub fn categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for tool in TOOLS {
        if !categories.contains(&tool.category) {
            categories.push(tool.category);
        }
    }
    categories
}

/// Tools whose name, description or a keyword contains `query` (case-insensitive)
/// and whose category equals `category`. Empty/absent filters match everything.
pub fn search(query: Option<&str>, category: Option<&str>) -> Vec<&'static ToolInfo> {
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
    TOOLS
        .iter()
        .filter(|tool| {
            needle.is_empty()
                || tool.name.to_lowercase().contains(&needle)
                || tool.description.to_lowercase().contains(&needle)
                || tool.keywords.iter().any(|k| k.to_lowercase().contains(&needle))
        })
        .filter(|tool| match category {
            None | Some("") | Some(ALL_CATEGORIES) => true,
            Some(wanted) => tool.category == wanted,
        })
        .collect()
}
