
#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:5678/webhook-test/cv-analysis"  // Local workflow instance
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://automation.cvmatch.app/webhook/cv-analysis"
}

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Pause between the webhook accepting a job-match submission and the
/// "complete" screen. The webhook only queues the analysis, so this is a
/// presentational delay, not a processing signal.
pub const SIMULATED_ANALYSIS_DELAY_MS: u32 = 3_000;

pub const TOAST_DURATION_MS: u32 = 5_000;

pub const MIN_JOB_DESCRIPTION_CHARS: usize = 10;

pub const THEME_STORAGE_KEY: &str = "theme";
