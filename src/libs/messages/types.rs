#[derive(Debug, Clone)]
pub enum Message {
    // === STEP LABELS ===
    StepCheckingOs,
    StepCheckingConfig,
    StepVerifyingCredentials,
    StepValidatingApiUrl,
    StepFetchingTodayStats,
    StepFetchingWeekStats,
    StepSendingHeartbeat,
    StepValidatingArgs,
    StepArgsValid,
    StepLoadingClient,

    // === ENVIRONMENT MESSAGES ===
    HomeDirUnavailable,
    UnrecognizedOs(String), // reported OS name

    // === DOCTOR MESSAGES ===
    OsConfigReport(String, String), // os, config path
    ConfigFileMissing,
    ConfigMalformed(String), // raw parse error
    ConfigMissingSettings,
    ConfigMissingApiKey,
    ConfigMissingApiUrl,
    WakatimeKeyValid,
    WakatimeKeyInvalid,
    ApiUrlMismatch(String, String), // found, expected
    ApiKeyRejected,
    ApiUnexpectedError(String), // raw error
    CodedTodayReport(String),   // formatted time
    HeartbeatSendFailed(String), // raw error
    DoctorAllGood,

    // === TEST HEARTBEAT MESSAGES ===
    ConfigUnavailableNoArgs,
    NoSettingsSection,
    NoApiKeyInConfig,
    NoApiUrlInConfig,
    SendingHeartbeatTo(String), // target URL
    HeartbeatSent,

    // === STATUS MESSAGES ===
    TodayTotal(String),        // formatted time
    WeekTotal(String, String), // total, daily average
    LanguagesHeader,
    EditorsHeader,
    ProjectsHeader,
}
