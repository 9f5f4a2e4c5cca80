use serde::{Deserialize, Serialize};

/// Identifies one kind of diagnostic data a collector can put into a report.
///
/// The serialized name of each field (also returned by [`ReportField::name`])
/// is the key used in the JSON report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportField {
    /// Unique id of this report, generated when the report is collected.
    ReportId,
    /// Stable id of this installation, generated once and persisted next to the reports.
    InstallationId,
    /// Application name, as registered by the embedding application.
    AppName,
    /// Application version, as registered by the embedding application.
    AppVersion,
    /// Absolute path of the running executable.
    ExecutablePath,
    /// Working directory of the process at crash time.
    WorkingDirectory,
    /// Command line the process was started with.
    CommandLine,
    /// Operating system name.
    OsName,
    /// Operating system version.
    OsVersion,
    /// Kernel version.
    KernelVersion,
    /// Host name of the machine.
    Hostname,
    /// CPU architecture the executable runs on.
    CpuArchitecture,
    /// Total physical memory in bytes.
    TotalMemory,
    /// Available physical memory in bytes at crash time.
    AvailableMemory,
    /// Process start time, RFC 3339.
    AppStartTime,
    /// Crash time, RFC 3339.
    CrashTime,
    /// Panic payload or error message.
    PanicMessage,
    /// `file:line:column` of the panic site, when known.
    PanicLocation,
    /// Name of the thread the crash happened on.
    ThreadName,
    /// Rendered stack trace or error chain.
    StackTrace,
    /// Short hash over the stack frames, stable across identical crashes.
    StackTraceHash,
    /// Environment variables, filtered through the configured exclusion patterns.
    Environment,
    /// Tail of the application log file designated in the configuration.
    ApplicationLog,
    /// Key/value data supplied by the embedding application for this crash.
    CustomData,
    /// Whether the report was filed silently (without user interaction).
    IsSilent,
}

impl ReportField {
    /// Fields enabled when the configuration does not override `report_content`.
    ///
    /// Everything except [`ReportField::ApplicationLog`], which only makes sense
    /// once a log file path has been configured. The order here is the order
    /// fields appear in the report output.
    pub const DEFAULT_FIELDS: &'static [ReportField] = &[
        ReportField::ReportId,
        ReportField::InstallationId,
        ReportField::AppName,
        ReportField::AppVersion,
        ReportField::ExecutablePath,
        ReportField::WorkingDirectory,
        ReportField::CommandLine,
        ReportField::OsName,
        ReportField::OsVersion,
        ReportField::KernelVersion,
        ReportField::Hostname,
        ReportField::CpuArchitecture,
        ReportField::TotalMemory,
        ReportField::AvailableMemory,
        ReportField::AppStartTime,
        ReportField::CrashTime,
        ReportField::PanicMessage,
        ReportField::PanicLocation,
        ReportField::ThreadName,
        ReportField::StackTrace,
        ReportField::StackTraceHash,
        ReportField::Environment,
        ReportField::CustomData,
        ReportField::IsSilent,
    ];

    /// The report key for this field.
    pub const fn name(self) -> &'static str {
        match self {
            ReportField::ReportId => "REPORT_ID",
            ReportField::InstallationId => "INSTALLATION_ID",
            ReportField::AppName => "APP_NAME",
            ReportField::AppVersion => "APP_VERSION",
            ReportField::ExecutablePath => "EXECUTABLE_PATH",
            ReportField::WorkingDirectory => "WORKING_DIRECTORY",
            ReportField::CommandLine => "COMMAND_LINE",
            ReportField::OsName => "OS_NAME",
            ReportField::OsVersion => "OS_VERSION",
            ReportField::KernelVersion => "KERNEL_VERSION",
            ReportField::Hostname => "HOSTNAME",
            ReportField::CpuArchitecture => "CPU_ARCHITECTURE",
            ReportField::TotalMemory => "TOTAL_MEMORY",
            ReportField::AvailableMemory => "AVAILABLE_MEMORY",
            ReportField::AppStartTime => "APP_START_TIME",
            ReportField::CrashTime => "CRASH_TIME",
            ReportField::PanicMessage => "PANIC_MESSAGE",
            ReportField::PanicLocation => "PANIC_LOCATION",
            ReportField::ThreadName => "THREAD_NAME",
            ReportField::StackTrace => "STACK_TRACE",
            ReportField::StackTraceHash => "STACK_TRACE_HASH",
            ReportField::Environment => "ENVIRONMENT",
            ReportField::ApplicationLog => "APPLICATION_LOG",
            ReportField::CustomData => "CUSTOM_DATA",
            ReportField::IsSilent => "IS_SILENT",
        }
    }
}

impl std::fmt::Display for ReportField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
