//! Suggested file names for exported reports.

use teamassess_scoring::Assessment;

fn path_safe(part: &str) -> String {
    part.trim().replace(['/', '\\'], "-")
}

/// `assessment-{name}-{type}-{date}.csv`, or
/// `assessment-comparison-{name}-{date}.csv` when a comparison is included.
///
/// Path separators in user-entered text are replaced with `-`.
pub fn export_filename(
    assessment: &Assessment,
    comparison: Option<&Assessment>,
    date: &str,
) -> String {
    let name = path_safe(&assessment.meta.assessee_name);
    match comparison {
        Some(_) => format!("assessment-comparison-{name}-{date}.csv"),
        None => format!(
            "assessment-{name}-{}-{date}.csv",
            path_safe(&assessment.meta.assessment_type)
        ),
    }
}
