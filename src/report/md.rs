use crate::types::report::ResultView;

pub fn to_markdown(view: &ResultView) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", view.meta.name));
    output.push_str(&format!("{} · result {}\n\n", view.path_name, view.code));
    if !view.meta.summary.is_empty() {
        output.push_str(&format!("{}\n\n", view.meta.summary));
    }
    if !view.meta.description.is_empty() {
        output.push_str(&format!("{}\n\n", view.meta.description));
    }

    output.push_str("## Dimensions\n\n");
    for dimension in &view.dimensions {
        output.push_str(&format!("- {}: {}\n", dimension.label, dimension.level));
    }
    output.push('\n');

    output.push_str("## Share\n\n");
    output.push_str(&format!("- link: {}\n", view.address));
    if let Some(token) = &view.answer_token {
        output.push_str(&format!("- answers: {token}\n"));
    }
    if !view.meta.hook.is_empty() {
        output.push_str(&format!("- hook: {}\n", view.meta.hook));
    }

    if !view.other_paths.is_empty() {
        output.push_str("\n## Other paths\n\n");
        for link in &view.other_paths {
            output.push_str(&format!("- {} ({})\n", link.name, link.address));
        }
    }
    output
}
