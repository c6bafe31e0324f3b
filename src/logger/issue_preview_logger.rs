use serde_json::json;

/// Prints the issue a dry run would have filed.
pub struct IssuePreviewLogger {}

impl IssuePreviewLogger {

    pub fn render_issue_preview(owner: &str, repo: &str, title: &str, body_chunks: &[String]) -> String {
        let issue = json!({
            "owner": owner,
            "repo": repo,
            "title": title,
            "body": body_chunks.first().map(String::as_str).unwrap_or_default(),
        });

        let mut preview = String::from("Issue not posted: \n");
        preview.push_str(&issue.to_string());
        preview.push('\n');
        for (index, chunk) in body_chunks.iter().enumerate().skip(1) {
            preview.push_str(&format!("\n━━━━━━━━ Comment {} of {} ━━━━━━━━\n", index, body_chunks.len() - 1));
            preview.push_str(chunk);
            preview.push('\n');
        }
        preview
    }

    pub fn print_issue_preview(owner: &str, repo: &str, title: &str, body_chunks: &[String]) {
        println!("{}", Self::render_issue_preview(owner, repo, title, body_chunks));
    }
}
