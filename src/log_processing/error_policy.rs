/// What a run does with a kill or userinfo line it cannot apply.
///
/// # Variants
///
/// * `FailFast` - Abort the run on the first such line. No partial result is returned.
/// * `Collect` - Skip the line, log a warning and report it in `ParseReport::rejected_lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    #[default]
    FailFast,
    Collect,
}
