//! Rendering of scenario reports for stdout.

use gridworld_mdp::ScenarioReport;

const SEPARATOR: &str = "--------------------------------------------------";

/// Human-readable value tables, one block per scenario.
pub fn render_tables(reports: &[ScenarioReport], with_policy: bool) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "Optimal Value Function for Reward: {} ({} iteration, {} sweeps)\n",
            report.base_reward, report.method, report.solution.sweeps
        ));
        out.push_str(&report.solution.values.render(&report.grid));
        if with_policy {
            out.push_str("Greedy policy:\n");
            out.push_str(&report.policy.render(&report.grid));
        }
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

/// Pretty-printed JSON array of reports.
pub fn render_json(reports: &[ScenarioReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
