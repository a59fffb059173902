#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    DateRangeRequired,
    ReportLoadFailed,
    ReportHeader(String, String), // start, end
    ReportRowsRendered(usize),
    ApiUrlMissing,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleApi,
    ConfigModuleReport,

    // === PROMPTS ===
    PromptSelectModules,
    PromptApiUrl,
    PromptStandardShiftMinutes,
    PromptStartDate,
    PromptEndDate,
}
