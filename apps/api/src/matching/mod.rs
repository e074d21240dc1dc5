// Skill extraction and job matching.
// Tokenizer and catalog are shared; the pipeline in `recommend` composes the rest.

pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod query;
pub mod recommend;
pub mod skill_extractor;
pub mod tokenizer;
