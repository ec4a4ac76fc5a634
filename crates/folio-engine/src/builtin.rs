//! Content bundled with the binary: the default gallery and the showcase
//! project used as the open-fallback target.

use folio_types::{Category, Project};

/// Id of the showcase project
pub const SHOWCASE_ID: &str = "showcase";

/// Six-entry gallery used when no catalog source is configured
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "1",
            "E-commerce Sales Dashboard",
            "Interactive dashboard visualizing sales trends, customer behavior, and product performance for an e-commerce platform.",
            Category::Dashboard,
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        )
        .with_tools(["Tableau", "SQL", "Excel"]),
        Project::new(
            "2",
            "Customer Segmentation Analysis",
            "In-depth analysis of customer segments using clustering algorithms to identify key customer groups and their behaviors.",
            Category::Analysis,
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&q=80",
        )
        .with_tools(["Python", "Scikit-learn", "Pandas", "Matplotlib"]),
        Project::new(
            "3",
            "Global Supply Chain Visualization",
            "Interactive visualization of global supply chain networks, highlighting bottlenecks and optimization opportunities.",
            Category::Visualization,
            "https://images.unsplash.com/photo-1494412574643-ff11b0a5c1c3?w=800&q=80",
        )
        .with_tools(["D3.js", "JavaScript", "GeoJSON"]),
        Project::new(
            "4",
            "Predictive Maintenance Model",
            "Machine learning model to predict equipment failures before they occur, reducing downtime and maintenance costs.",
            Category::Analysis,
            "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800&q=80",
        )
        .with_tools(["Python", "TensorFlow", "Time Series Analysis"]),
        Project::new(
            "5",
            "Marketing Campaign Performance",
            "Comprehensive dashboard tracking marketing campaign performance across multiple channels and customer segments.",
            Category::Dashboard,
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
        )
        .with_tools(["Power BI", "Google Analytics", "R"]),
        Project::new(
            "6",
            "Social Media Sentiment Analysis",
            "Real-time analysis of social media sentiment for brand monitoring and reputation management.",
            Category::Visualization,
            "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?w=800&q=80",
        )
        .with_tools(["Python", "NLTK", "Plotly", "Twitter API"]),
    ]
}

/// Fully populated project shown when an id cannot be resolved
pub fn showcase_project() -> Project {
    Project::new(
        SHOWCASE_ID,
        "E-commerce Customer Behavior Analysis",
        "A comprehensive analysis of customer behavior patterns for an e-commerce platform, identifying key trends and providing actionable insights.",
        Category::Analysis,
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
    )
    .with_tools(["Python", "Pandas", "Matplotlib", "SQL", "Tableau"])
    .with_objectives([
        "Identify key customer segments based on purchasing behavior",
        "Analyze seasonal trends in product categories",
        "Determine factors influencing cart abandonment",
        "Provide recommendations for improving conversion rates",
    ])
    .with_methodology(
        "This analysis utilized a combination of SQL queries for data extraction, Python for data cleaning and statistical analysis, and Tableau for visualization. The dataset included 12 months of customer transactions, browsing behavior, and demographic information.",
    )
    .with_findings([
        "Identified 4 distinct customer segments with unique purchasing patterns",
        "Discovered 23% higher conversion rates for customers using mobile app vs website",
        "Found significant seasonal variations in electronics and apparel categories",
        "Cart abandonment rates peaked during checkout when shipping costs were revealed",
    ])
    .with_conclusion(
        "The analysis revealed several opportunities for improving customer engagement and conversion rates. By implementing targeted marketing strategies for identified customer segments and addressing key pain points in the checkout process, the client could potentially increase conversion rates by 15-20%.",
    )
    .with_link("https://example.com/project")
    .with_download_link("/files/project-report.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_gallery_ids_are_unique_and_ordered() {
        let ids: Vec<String> = default_projects()
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 6);
    }

    #[test]
    fn showcase_id_does_not_collide_with_default_gallery() {
        assert!(default_projects().iter().all(|p| p.id.as_str() != SHOWCASE_ID));
    }
}
