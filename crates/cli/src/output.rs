use wirelookup_domain::ResolutionResult;

/// Text for stdout on success, or the failure message for stderr.
pub fn render(result: &ResolutionResult) -> Result<String, String> {
    match result {
        ResolutionResult::Resolved { name, address } => Ok(format!(
            "Host Name:\n{}\n\nIP Address:\n{}",
            name, address
        )),
        ResolutionResult::Failed { reason } => Err(reason.to_string()),
    }
}
