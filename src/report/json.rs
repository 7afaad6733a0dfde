use crate::types::report::ResultView;

pub fn to_json(view: &ResultView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_view;
    use crate::types::config::QuizConfig;
    use crate::types::level::ResultCode;
    use crate::types::result_type::ResultCatalog;

    #[test]
    fn json_view_contains_type_and_levels() {
        let config = QuizConfig::default();
        let path = config.path("pillars").expect("pillars should exist");
        let code = ResultCode::parse("222").expect("code should parse");
        let view = build_view(
            &config,
            path,
            &code,
            &ResultCatalog::default(),
            Some("MDEy".to_string()),
        );

        let rendered = to_json(&view).expect("json should serialize");
        assert!(rendered.contains("\"result_type\": \"resister\""));
        assert!(rendered.contains("\"level\": \"high\""));
        assert!(rendered.contains("\"answer_token\": \"MDEy\""));
    }
}
