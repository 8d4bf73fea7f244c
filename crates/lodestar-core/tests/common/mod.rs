//! Shared fixtures for integration tests.

use lodestar_core::Catalog;

/// A compact catalog with a trunk, three pathways, and an elective pool.
pub const CATALOG_JSON: &str = r#"{
    "courses": [
        {"id": "ai-for-everyone", "title": "AI For Everyone", "type": "course",
         "difficulty": "beginner", "estimated_hours": 6,
         "categories": ["general"], "partner": "DeepLearning.AI"},
        {"id": "python-basics", "title": "Python Basics for AI", "type": "course",
         "difficulty": "beginner", "estimated_hours": 9,
         "categories": ["coding"]},
        {"id": "prompting", "title": "Prompt Engineering", "type": "short",
         "difficulty": "beginner", "estimated_hours": 2,
         "categories": ["prompting"], "partner": "DeepLearning.AI"},
        {"id": "rag-systems", "title": "Building RAG Systems", "type": "course",
         "difficulty": "intermediate", "estimated_hours": 12,
         "categories": ["rag"], "partner": "LangChain"},
        {"id": "agent-design", "title": "Agent Design Patterns", "type": "course",
         "difficulty": "intermediate", "estimated_hours": 10,
         "categories": ["agents"]},
        {"id": "mlops-cert", "title": "MLOps Certificate", "type": "certificate",
         "difficulty": "advanced",
         "categories": ["deployment"], "partner": "Google"},
        {"id": "math-found", "title": "Mathematics for ML", "type": "course",
         "difficulty": "beginner", "estimated_hours": 14,
         "categories": ["general"]},
        {"id": "training-llms", "title": "Training LLMs", "type": "course",
         "difficulty": "advanced", "estimated_hours": 18,
         "categories": ["training"]},
        {"id": "governance", "title": "AI Governance", "type": "course",
         "difficulty": "beginner", "estimated_hours": 4,
         "categories": ["safety"], "partner": "Microsoft"},
        {"id": "safety-eval", "title": "Evaluating AI Safety", "type": "course",
         "difficulty": "intermediate", "estimated_hours": 5,
         "categories": ["safety"], "partner": "Anthropic"}
    ],
    "pathways": {
        "trunk": {
            "name": "AI Foundations",
            "milestone": "Foundations Complete",
            "courses": ["ai-for-everyone", "python-basics"]
        },
        "builder": {
            "name": "AI Product Engineer",
            "phases": [
                {"name": "Applied LLMs", "courses": ["prompting", "rag-systems"]},
                {"name": "Agents & Deployment",
                 "courses": ["agent-design", "mlops-cert"]}
            ]
        },
        "researcher": {
            "name": "Model Architect",
            "phases": [
                {"name": "Math Foundations", "courses": ["math-found"]},
                {"name": "Model Training", "courses": ["training-llms"]}
            ]
        },
        "enterprise": {
            "name": "Enterprise AI Leader",
            "phases": [
                {"name": "Governance & Strategy",
                 "courses": ["governance", "safety-eval"]}
            ]
        }
    }
}"#;

/// Parse the shared fixture catalog.
pub fn fixture_catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).expect("fixture catalog must parse")
}
