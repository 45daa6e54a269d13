use crate::git::GitLogResult;
use chrono::NaiveDate;

/// Build the prompt asking the model to write the daily report
///
/// Embeds the same data the deterministic formatter renders, plus
/// explicit formatting instructions so the response mirrors the report
/// layout. The model's adherence is not validated on the way back.
pub fn build_report_prompt(result: &GitLogResult, repo_name: &str, today: NaiveDate) -> String {
    let today = today.format("%Y-%m-%d");
    let mut prompt = String::new();

    prompt.push_str(
        "Write a daily work report in markdown from the following git log information.\n\n",
    );
    prompt.push_str(&format!("Date: {}\n", today));
    prompt.push_str(&format!("Repository: {}\n\n", repo_name));

    prompt.push_str("Commits:\n");
    for commit in &result.commits {
        prompt.push_str(&format!(
            "- {}: {} ({})\n",
            commit.hash, commit.message, commit.author
        ));
    }

    prompt.push_str("\nStatistics:\n");
    prompt.push_str(&format!("- Commits: {}\n", result.commits.len()));
    prompt.push_str(&format!("- Insertions: +{}\n", result.stats.insertions));
    prompt.push_str(&format!("- Deletions: -{}\n", result.stats.deletions));

    prompt.push_str("\nRequirements:\n");
    prompt.push_str(&format!(
        "1. Start with the heading \"# Daily Report - {}\"\n",
        today
    ));
    prompt.push_str(
        "2. Summarize what the commits accomplished under a \"## Work Summary\" section\n",
    );
    prompt.push_str("3. Include the statistics under a \"## Statistics\" section\n");
    prompt.push_str("4. Keep it concise and easy to read\n");

    prompt
}
