// Skill taxonomy and extraction. Pure text processing, no I/O.

pub mod extractor;
pub mod handlers;
pub mod vocabulary;

pub use extractor::{extract_skills, SkillExtractor, SkillMatchMode, SkillSet};
