//! Markdown report grouped by Baseline status.

use baseline_core::types::TargetPolicy;
use url::Url;

use super::StatusBuckets;
use crate::baseline::FeatureAnalysis;

const FOOTER: &str = "*Powered by [Baseline](https://web.dev/baseline) and [web-features](https://github.com/web-platform-dx/web-features)*";
const MDN_SEARCH: &str = "https://developer.mozilla.org/en-US/search";

/// Render the report for `issues`, which are assumed to be already filtered
/// by `policy`. The output depends only on its inputs.
pub fn format_report(policy: TargetPolicy, issues: &[FeatureAnalysis]) -> String {
    if issues.is_empty() {
        return all_clear(policy);
    }

    let buckets = StatusBuckets::group(issues);
    let mut out = String::from("## ⚠️ Baseline CI - Features Detected\n\n");
    out.push_str(&format!("**Target:** Baseline {}\n", policy.label()));
    out.push_str(&format!("**Total Issues:** {}\n\n", issues.len()));

    if !buckets.limited.is_empty() {
        push_section(
            &mut out,
            &format!("🔴 Limited Availability ({})", buckets.limited.len()),
            "These features are **not yet baseline** and have limited browser support:",
            &buckets.limited,
        );
    }

    if !buckets.newly.is_empty() && matches!(policy, TargetPolicy::Widely | TargetPolicy::All) {
        push_section(
            &mut out,
            &format!("🟡 Newly Available ({})", buckets.newly.len()),
            "These features are baseline but not yet widely available (< 30 months across browsers):",
            &buckets.newly,
        );
    }

    if !buckets.widely.is_empty() && policy == TargetPolicy::All {
        push_section(
            &mut out,
            &format!("✅ Widely Available ({})", buckets.widely.len()),
            "These features are widely available across modern browsers (30+ months):",
            &buckets.widely,
        );
    }

    if !buckets.unknown.is_empty() {
        push_section(
            &mut out,
            &format!("⚪ Unknown ({})", buckets.unknown.len()),
            "These features could not be mapped to Baseline data:",
            &buckets.unknown,
        );
    }

    out.push_str("### 💡 Recommendations\n\n");
    if !buckets.limited.is_empty() {
        out.push_str("- Consider using polyfills or feature detection for limited availability features\n");
        out.push_str("- Check [Can I Use](https://caniuse.com) for detailed browser support\n");
    }
    if !buckets.newly.is_empty() && policy == TargetPolicy::Widely {
        out.push_str(
            "- Newly available features are safe for modern browsers but may need fallbacks for older ones\n",
        );
    }

    out.push_str("\n---\n");
    out.push_str(FOOTER);
    out
}

fn all_clear(policy: TargetPolicy) -> String {
    let scope = match policy {
        TargetPolicy::Widely => "widely available",
        TargetPolicy::Newly | TargetPolicy::All => "baseline-approved",
    };
    format!(
        "## ✅ Baseline CI - All Clear!\n\n\
         No non-baseline features detected in this PR. All features used are {scope} across modern browsers.\n\n\
         ---\n{FOOTER}"
    )
}

fn push_section(out: &mut String, title: &str, blurb: &str, rows: &[&FeatureAnalysis]) {
    out.push_str(&format!("### {title}\n\n{blurb}\n\n"));
    out.push_str(&feature_table(rows));
    out.push('\n');
}

fn feature_table(rows: &[&FeatureAnalysis]) -> String {
    let mut table = String::from("| Feature | File | Line | Status |\n|---------|------|------|--------|\n");
    for analysis in rows {
        let feature = &analysis.feature;
        let status = analysis.baseline.status;
        let line = feature
            .line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.push_str(&format!(
            "| {} | `{}` | {} | {} {} |\n",
            feature_cell(analysis),
            basename(&feature.file),
            line,
            status.emoji(),
            status.label()
        ));
    }
    table
}

/// Code-formatted name, linked to an MDN search when the feature resolved.
fn feature_cell(analysis: &FeatureAnalysis) -> String {
    let name = &analysis.feature.name;
    match analysis.feature_id.as_ref().and(mdn_search_url(name)) {
        Some(link) => format!("[`{name}`]({link})"),
        None => format!("`{name}`"),
    }
}

pub(crate) fn mdn_search_url(query: &str) -> Option<String> {
    Url::parse_with_params(MDN_SEARCH, &[("q", query)])
        .ok()
        .map(String::from)
}

fn basename(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}
