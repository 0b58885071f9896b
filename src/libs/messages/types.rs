#[derive(Debug, Clone)]
pub enum Message {
    // === INPUT MESSAGES ===
    InputSaved(usize),  // line count
    InputEmpty,         // pasted/cached blob has no content
    InputCacheMissing,  // no cached log and no --file given
    InputShowEmpty,     // nothing cached to show

    // === REPORT MESSAGES ===
    ReportHeader(String),  // source description
    NoValidPunches,
    ParsedRecords(usize),

    // === SUMMARY MESSAGES ===
    SummaryHeader,

    // === ESTIMATE MESSAGES ===
    EstimatedPunchOut(String), // formatted time
    EstimateNotApplicable,
    PromptPunchIn,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleSchedule,
    PromptWorkdayStart,
    PromptWorkdayEnd,
    PromptRequiredHours,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // output path
    ExportNoData,
}
