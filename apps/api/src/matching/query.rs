//! Query Classifier — turns a skill list into a job-search link.
//!
//! A candidate is technical when any skill, lowercased as a whole string,
//! equals a technical keyword. No tokenization: "Python 3" is not "python".

use reqwest::Url;
use serde::Serialize;

const SEARCH_BASE_URL: &str = "https://www.google.com/search";

const TECHNICAL_KEYWORDS: &[&str] = &[
    "javascript",
    "node.js",
    "react",
    "mongodb",
    "python",
    "java",
    "c",
    "c++",
    "html",
    "css",
    "backend",
    "frontend",
    "fullstack",
    "web development",
    "programming",
    "software",
    "devops",
    "sql",
];

const TECHNICAL_JOB_TYPES: &[&str] = &[
    "fullstack developer jobs",
    "backend developer jobs",
    "devops jobs",
    "software engineer jobs",
    "web developer jobs",
];

const GENERAL_JOB_TYPES: &[&str] = &[
    "general office jobs",
    "sales jobs",
    "customer service jobs",
    "administrative jobs",
    "creative jobs",
];

/// A constructed search link. Nothing is fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSearchQuery {
    pub url: String,
    pub show_apply_button: bool,
    pub job_types: Vec<String>,
}

pub fn is_technical<S: AsRef<str>>(skills: &[S]) -> bool {
    skills.iter().any(|skill| {
        let skill = skill.as_ref().to_lowercase();
        TECHNICAL_KEYWORDS.contains(&skill.as_str())
    })
}

pub fn classify<S: AsRef<str>>(skills: &[S]) -> JobSearchQuery {
    let technical = is_technical(skills);
    let job_types = if technical {
        TECHNICAL_JOB_TYPES
    } else {
        GENERAL_JOB_TYPES
    };

    JobSearchQuery {
        url: build_search_url(job_types),
        show_apply_button: technical,
        job_types: job_types.iter().map(|s| s.to_string()).collect(),
    }
}

fn build_search_url(job_types: &[&str]) -> String {
    let query = job_types.join(" OR ");
    let params = [("q", query.as_str()), ("udm", "8"), ("sa", "X")];
    match Url::parse_with_params(SEARCH_BASE_URL, &params) {
        Ok(url) => url.to_string(),
        // Unreachable while SEARCH_BASE_URL is a valid absolute URL.
        Err(_) => SEARCH_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_is_technical() {
        let query = classify(&["Python"]);
        assert!(query.show_apply_button);
        assert!(query.url.contains("software+engineer"));
        assert_eq!(query.job_types.len(), 5);
        assert_eq!(query.job_types[0], "fullstack developer jobs");
    }

    #[test]
    fn test_sales_is_not_technical() {
        let query = classify(&["Sales"]);
        assert!(!query.show_apply_button);
        assert!(query.url.contains("sales+jobs"));
        assert!(!query.url.contains("software"));
    }

    #[test]
    fn test_match_is_whole_string_not_token() {
        assert!(!is_technical(&["Python 3", "Advanced SQL"]));
        assert!(is_technical(&["Node.js"]));
        assert!(is_technical(&["C++"]));
        assert!(is_technical(&["Web Development"]));
    }

    #[test]
    fn test_empty_skills_fall_back_to_general() {
        let skills: Vec<String> = Vec::new();
        let query = classify(&skills);
        assert!(!query.show_apply_button);
        assert_eq!(query.job_types[0], "general office jobs");
    }

    #[test]
    fn test_url_shape() {
        let query = classify(&["sql"]);
        assert!(query.url.starts_with("https://www.google.com/search?q="));
        assert!(query.url.contains("+OR+"));
        assert!(query.url.ends_with("&udm=8&sa=X"));
        assert_eq!(
            query.url,
            "https://www.google.com/search?q=fullstack+developer+jobs+OR+backend+developer+jobs\
             +OR+devops+jobs+OR+software+engineer+jobs+OR+web+developer+jobs&udm=8&sa=X"
        );
    }

    #[test]
    fn test_one_technical_skill_is_enough() {
        let query = classify(&["Marketing", "Communication", "React"]);
        assert!(query.show_apply_button);
    }
}
