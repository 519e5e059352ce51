//! The skill taxonomy every document is scanned against.
//!
//! The list is fixed at build time. Entries keep their display casing here;
//! matching always goes through [`lowercased`].

use std::sync::LazyLock;

pub const SKILL_VOCABULARY: &[&str] = &[
    // Technical
    "Python", "Java", "JavaScript", "C++", "C#", "Ruby", "Go", "Rust", "Swift", "Kotlin",
    "SQL", "NoSQL", "Database Design", "Data Modeling", "ETL", "Data Warehousing",
    "HTML/CSS", "React", "Angular", "Vue.js", "Node.js", "Django", "Flask", "Spring",
    "REST APIs", "GraphQL", "Microservices", "Docker", "Kubernetes", "CI/CD",
    "AWS", "Azure", "GCP", "Cloud Architecture", "DevOps", "Terraform",
    "Machine Learning", "Deep Learning", "NLP", "Computer Vision", "Data Science",
    "Big Data", "Hadoop", "Spark", "PySpark", "Pandas", "NumPy", "TensorFlow", "PyTorch",
    "Cybersecurity", "Ethical Hacking", "Penetration Testing", "Network Security",
    // Business & management
    "Business Analysis", "Process Improvement", "Lean Six Sigma", "Agile Methodologies",
    "Scrum", "Kanban", "SAFe", "Product Ownership", "UX/UI Design", "Prototyping",
    "Market Research", "Competitive Analysis", "Financial Modeling", "Risk Management",
    "Investment Banking", "Mergers & Acquisitions", "Venture Capital", "Private Equity",
    "Corporate Finance", "Financial Reporting", "Taxation", "Auditing", "Compliance",
    "Regulatory Affairs", "Corporate Governance", "Stakeholder Management",
    // Creative & design
    "Graphic Design", "Illustration", "Motion Graphics", "3D Modeling", "Animation",
    "Video Editing", "Photography", "Videography", "Sound Design", "Game Design",
    "UI/UX Design", "Interaction Design", "User Research", "Wireframing", "Figma",
    "Adobe Creative Suite", "Photoshop", "Illustrator", "InDesign", "Premiere Pro",
    // Healthcare & science
    "Clinical Research", "Biostatistics", "Epidemiology", "Public Health",
    "Pharmaceuticals", "Medical Devices", "Healthcare IT", "HIPAA Compliance",
    "Biotechnology", "Genomics", "Bioinformatics", "Chemistry", "Physics",
    "Environmental Science", "Geology", "Meteorology",
    // Soft skills
    "Leadership", "Team Management", "Conflict Resolution", "Negotiation",
    "Public Speaking", "Presentation Skills", "Storytelling", "Emotional Intelligence",
    "Critical Thinking", "Problem Solving", "Decision Making", "Time Management",
    "Adaptability", "Creativity", "Collaboration", "Mentoring", "Coaching",
    // Industry-specific
    "Supply Chain Optimization", "Logistics", "Inventory Management", "Procurement",
    "Retail Management", "E-commerce", "Digital Marketing", "SEO/SEM", "PPC",
    "Content Marketing", "Social Media Marketing", "Email Marketing", "Marketing Analytics",
    "Brand Management", "Event Planning", "Hospitality Management", "Tourism",
    "Real Estate", "Urban Planning", "Architecture", "Construction Management",
    "Education Technology", "Curriculum Development", "Instructional Design",
    "Nonprofit Management", "Grant Writing", "Fundraising", "Public Policy",
    "International Relations", "Journalism", "Technical Writing", "Translation",
];

static LOWERCASED: LazyLock<Vec<String>> =
    LazyLock::new(|| SKILL_VOCABULARY.iter().map(|s| s.to_lowercase()).collect());

/// Lower-cased vocabulary, in the same order as [`SKILL_VOCABULARY`].
pub fn lowercased() -> &'static [String] {
    &LOWERCASED
}
