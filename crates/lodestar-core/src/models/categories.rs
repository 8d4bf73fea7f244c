//! Canonical display labels for category tags.

/// Known category tags and their display labels.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("agents", "AI Agents & Automation"),
    ("coding", "AI-Assisted Coding"),
    ("deployment", "MLOps & Deployment"),
    ("general", "General AI/ML Topics"),
    ("privacy", "Privacy"),
    ("prompting", "Prompt Engineering"),
    ("rag", "RAG & Knowledge Systems"),
    ("safety", "AI Safety & Ethics"),
    ("training", "Fine-tuning & Training"),
];

/// Display label for a category tag.
///
/// Unknown tags fall back to title-casing the raw tag so new catalog
/// categories still render reasonably.
pub fn category_label(category: &str) -> String {
    for (tag, label) in CATEGORY_LABELS {
        if *tag == category {
            return (*label).to_string();
        }
    }
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
