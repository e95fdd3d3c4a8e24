//! Check orchestration and notification policy
//!
//! The `Monitor` owns all mutable state and is driven entirely from
//! host-delivered callbacks: a once-per-second tick and a command line.
//! Each check walks Idle -> LocalParsed -> RemoteFetched -> Compared and
//! collapses back to idle with a single outcome.

use sectorwatch_api::{
    CheckOutcome, CheckTrigger, Command, LocalSector, RemoteManifest, StatusReport,
    CMD_UPDATE_CHECK, CMD_UPDATE_OPEN,
};
use sectorwatch_config::MonitorConfig;
use sectorwatch_host_api::{Fetcher, HostAdapter};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    fetch_welcome, parse_manifest, parse_sector_label, welcome_text, CheckError, CheckResult,
    SessionTracker,
};

/// Sender name shown on every routine message
pub const MONITOR_NAME: &str = "sectorwatch";

/// Title for the update alert dialog
const UPDATE_ALERT_TITLE: &str = "sectorwatch updater";

/// Title for the break reminder dialog
const REMINDER_TITLE: &str = "sectorwatch reminder";

const REMINDER_TEXT: &str = "You have been online for a long session! Time for a break.";

/// The update and session monitor.
///
/// Constructed once at startup; all state is owned here and mutated only
/// from within callback invocations, which the host guarantees are neither
/// re-entrant nor concurrent.
pub struct Monitor {
    config: MonitorConfig,
    host: Arc<dyn HostAdapter>,
    fetcher: Arc<dyn Fetcher>,

    first_tick_done: bool,
    last_check_counter: u64,

    /// Set once a local version has been parsed; gates only the periodic
    /// check variant, manual checks always run
    auto_checks_stopped: bool,

    /// Download URL from the most recently parsed manifest
    last_download_url: Option<String>,

    welcome_attempted: bool,
    session: SessionTracker,
}

impl Monitor {
    pub fn new(config: MonitorConfig, host: Arc<dyn HostAdapter>, fetcher: Arc<dyn Fetcher>) -> Self {
        info!(
            manifest_url = %config.manifest_url,
            check_interval_secs = config.check_interval.as_secs(),
            reminder_interval_secs = config.reminder_interval.as_secs(),
            "Monitor initialized"
        );

        Self {
            config,
            host,
            fetcher,
            first_tick_done: false,
            last_check_counter: 0,
            auto_checks_stopped: false,
            last_download_url: None,
            welcome_attempted: false,
            session: SessionTracker::new(),
        }
    }

    /// Host tick callback. `counter` is seconds since host start, delivered
    /// once per second.
    pub fn on_timer(&mut self, counter: u64) {
        if !self.first_tick_done {
            self.first_tick_done = true;
            self.try_welcome();
            let _ = self.check_and_notify(CheckTrigger::Manual);
            self.host.show_message(
                MONITOR_NAME,
                &format!("To run a manual check: {}", CMD_UPDATE_CHECK),
            );
        }

        if !self.auto_checks_stopped
            && counter.saturating_sub(self.last_check_counter)
                >= self.config.check_interval.as_secs()
        {
            let _ = self.check_and_notify(CheckTrigger::Periodic);
            self.last_check_counter = counter;
        }

        let connected = self.host.is_connected();
        if let Some(due) = self
            .session
            .observe(connected, self.config.reminder_interval)
        {
            info!(
                interval_index = due.interval_index,
                online_secs = due.online.as_secs(),
                "Break reminder due"
            );
            self.host.show_alert(REMINDER_TITLE, REMINDER_TEXT);
        }
    }

    /// Host command-line callback. Returns `true` when the line was one of
    /// the monitor's commands and has been handled.
    pub fn handle_command(&mut self, line: &str) -> bool {
        let Some(command) = Command::parse(line) else {
            return false;
        };
        info!(command = ?command, "Command received");

        match command {
            Command::UpdateCheck => {
                let _ = self.check_and_notify(CheckTrigger::Manual);
            }
            Command::OpenDownload => self.open_download(),
            Command::Status => self.report_status(),
            Command::Hey => self
                .host
                .show_message(MONITOR_NAME, "Hey! Good to see you on frequency."),
            Command::Coffee => self.host.show_alert(
                "sectorwatch café",
                "Coffee delivered to your scope. Clear skies!",
            ),
            Command::Falcon => self
                .host
                .show_message(MONITOR_NAME, "The falcon watches over your sector."),
        }

        true
    }

    /// Run one update check and surface the outcome per the trigger's
    /// reporting policy: periodic checks are silent except for "update
    /// available", manual checks always report.
    pub fn check_and_notify(&mut self, trigger: CheckTrigger) -> CheckResult<CheckOutcome> {
        debug!(trigger = ?trigger, "Starting update check");
        let result = self.run_check();

        match &result {
            Ok(CheckOutcome::UpdateAvailable { local, remote }) => {
                info!(
                    local = %local.version,
                    remote = %remote.version,
                    "Newer sector package available"
                );
                self.host
                    .show_alert(UPDATE_ALERT_TITLE, &update_alert_text(local, remote));
            }
            Ok(CheckOutcome::UpToDate { local }) => {
                debug!(local = %local.version, "Sector package is up to date");
                if trigger.is_verbose() {
                    self.host.show_message(
                        MONITOR_NAME,
                        &format!("Up to date. Local {}.", local.version),
                    );
                }
            }
            Err(e) => {
                debug!(trigger = ?trigger, error = %e, "Check produced no comparison");
                if trigger.is_verbose() {
                    self.host.show_message(MONITOR_NAME, &check_error_text(e));
                }
            }
        }

        result
    }

    /// Idle -> LocalParsed -> RemoteFetched -> Compared
    fn run_check(&mut self) -> CheckResult<CheckOutcome> {
        let label = self
            .host
            .sector_label()
            .filter(|label| !label.is_empty())
            .ok_or(CheckError::NoSectorLoaded)?;

        let local = parse_sector_label(&label)
            .ok_or_else(|| CheckError::LocalUnparseable {
                label: label.clone(),
            })?;

        // The local version can only change with a reload; periodic checks
        // have done their job once it is known
        if !self.auto_checks_stopped {
            debug!(label = %label, "Local version parsed, stopping periodic checks");
            self.auto_checks_stopped = true;
        }

        let body = self.fetcher.fetch_text(&self.config.manifest_url)?;
        let remote = parse_manifest(&body).ok_or(CheckError::ManifestMalformed)?;
        self.last_download_url = Some(remote.download_url.clone());

        if remote.version > local.version {
            Ok(CheckOutcome::UpdateAvailable { local, remote })
        } else {
            Ok(CheckOutcome::UpToDate { local })
        }
    }

    /// Open the advertised download URL in the operator's default handler.
    ///
    /// If no manifest has been seen yet this process, one quiet fetch is
    /// attempted to learn the URL.
    pub fn open_download(&mut self) {
        if self.last_download_url.as_deref().is_none_or(str::is_empty)
            && let Ok(body) = self.fetcher.fetch_text(&self.config.manifest_url)
            && let Some(remote) = parse_manifest(&body)
        {
            self.last_download_url = Some(remote.download_url);
        }

        match self
            .last_download_url
            .as_deref()
            .filter(|url| !url.is_empty())
        {
            Some(url) => {
                if let Err(e) = self.host.open_url(url) {
                    warn!(url = %url, error = %e, "Failed to open download URL");
                    self.host
                        .show_message(MONITOR_NAME, "Could not open the download URL.");
                }
            }
            None => self
                .host
                .show_message(MONITOR_NAME, "No download URL in manifest."),
        }
    }

    /// Build a local/remote summary, fetching the manifest fresh
    pub fn status_report(&self) -> StatusReport {
        let sector_label = self.host.sector_label().filter(|label| !label.is_empty());
        let local = sector_label
            .as_deref()
            .and_then(parse_sector_label)
            .map(|local| local.version);
        let remote = self
            .fetcher
            .fetch_text(&self.config.manifest_url)
            .ok()
            .and_then(|body| parse_manifest(&body));

        StatusReport {
            sector_label,
            local,
            remote,
        }
    }

    fn report_status(&self) {
        let report = self.status_report();
        self.host.show_message(MONITOR_NAME, &report.to_string());
    }

    /// At most one attempt per process lifetime; failures are silent
    fn try_welcome(&mut self) {
        if self.welcome_attempted {
            return;
        }
        self.welcome_attempted = true;

        if let Some(notice) = fetch_welcome(self.fetcher.as_ref(), &self.config.welcome_url) {
            info!(title = %notice.title, "Welcome notice shown");
            self.host
                .show_message(MONITOR_NAME, &welcome_text(&notice, MONITOR_NAME));
        }
    }
}

fn update_alert_text(local: &LocalSector, remote: &RemoteManifest) -> String {
    let mut text = format!(
        "New sector package available: {}.\nYou have {}.\nType {} to download it.",
        remote.version, local.version, CMD_UPDATE_OPEN
    );
    if !remote.notes.is_empty() {
        text.push_str("\nRelease notes: ");
        text.push_str(&remote.notes);
    }
    text
}

fn check_error_text(error: &CheckError) -> String {
    match error {
        CheckError::NoSectorLoaded => {
            "No sector file detected yet. Load a sector file and try again.".into()
        }
        CheckError::LocalUnparseable { label } => format!(
            "Could not parse sector label. Got: {}  | Expected like: '... 2510/2-2 LBSR 20251013'",
            label
        ),
        CheckError::FetchFailed(_) => "Failed to fetch manifest.".into(),
        CheckError::ManifestMalformed => "Manifest is missing required fields.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sectorwatch_host_api::{MockFetcher, MockHost};
    use std::time::Duration;

    const MANIFEST_URL: &str = "https://updates.test/version.json";
    const WELCOME_URL: &str = "https://updates.test/welcome.json";
    const LABEL: &str = "Sofia Control 2510/2 LBSR 20251013";

    fn test_config() -> MonitorConfig {
        MonitorConfig {
            manifest_url: MANIFEST_URL.into(),
            welcome_url: WELCOME_URL.into(),
            check_interval: Duration::from_secs(5),
            fetch_timeout: Duration::from_secs(1),
            reminder_interval: Duration::from_secs(60),
        }
    }

    fn make_monitor() -> (Monitor, Arc<MockHost>, Arc<MockFetcher>) {
        let host = Arc::new(MockHost::new());
        let fetcher = Arc::new(MockFetcher::new());
        let monitor = Monitor::new(test_config(), host.clone(), fetcher.clone());
        (monitor, host, fetcher)
    }

    fn manifest_body(cycle: u32, revision: u32, patch: u32) -> String {
        format!(
            r#"{{"airac_cycle": {}, "airac_version": {}, "package_version": {},
               "latest_package_name": "Sector_{}_{}",
               "download_url": "https://updates.test/pkg.zip",
               "notes": "Minor fixes"}}"#,
            cycle, revision, patch, cycle, revision
        )
    }

    #[test]
    fn update_available_raises_alert_for_both_triggers() {
        let (mut monitor, host, fetcher) = make_monitor();
        host.set_sector_label(Some(LABEL));
        fetcher.set_response(MANIFEST_URL, &manifest_body(2510, 2, 1));

        let outcome = monitor.check_and_notify(CheckTrigger::Periodic).unwrap();
        assert!(matches!(outcome, CheckOutcome::UpdateAvailable { .. }));

        let alerts = host.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].1.contains("AIRAC 2510/2 (Package 1)"));
        assert!(alerts[0].1.contains("AIRAC 2510/2 (Package 0)"));
        assert!(alerts[0].1.contains("Release notes: Minor fixes"));
    }

    #[test]
    fn up_to_date_reported_only_on_manual_checks() {
        let (mut monitor, host, fetcher) = make_monitor();
        host.set_sector_label(Some(LABEL));
        fetcher.set_response(MANIFEST_URL, &manifest_body(2510, 2, 0));

        monitor.check_and_notify(CheckTrigger::Periodic).unwrap();
        assert!(host.messages().is_empty());
        assert!(host.alerts().is_empty());

        monitor.check_and_notify(CheckTrigger::Manual).unwrap();
        let messages = host.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.contains("Up to date"));
    }

    #[test]
    fn lower_remote_cycle_is_up_to_date() {
        let (mut monitor, host, fetcher) = make_monitor();
        host.set_sector_label(Some(LABEL));
        fetcher.set_response(MANIFEST_URL, &manifest_body(2509, 9, 9));

        let outcome = monitor.check_and_notify(CheckTrigger::Manual).unwrap();
        assert!(matches!(outcome, CheckOutcome::UpToDate { .. }));
    }

    #[test]
    fn missing_sector_label_errors() {
        let (mut monitor, host, _fetcher) = make_monitor();

        let result = monitor.check_and_notify(CheckTrigger::Periodic);
        assert!(matches!(result, Err(CheckError::NoSectorLoaded)));
        // Periodic failures stay silent
        assert!(host.messages().is_empty());

        let result = monitor.check_and_notify(CheckTrigger::Manual);
        assert!(matches!(result, Err(CheckError::NoSectorLoaded)));
        assert!(host.messages()[0].1.contains("No sector file detected"));
    }

    #[test]
    fn unparseable_label_errors_without_fetching() {
        let (mut monitor, host, fetcher) = make_monitor();
        host.set_sector_label(Some("no version in here"));

        let result = monitor.check_and_notify(CheckTrigger::Manual);
        assert!(matches!(result, Err(CheckError::LocalUnparseable { .. })));
        assert!(host.messages()[0].1.contains("Could not parse sector label"));
        assert!(fetcher.requests().is_empty());
    }

    #[test]
    fn fetch_failure_and_malformed_manifest_errors() {
        let (mut monitor, host, fetcher) = make_monitor();
        host.set_sector_label(Some(LABEL));

        // Nothing scripted: the fetch fails
        let result = monitor.check_and_notify(CheckTrigger::Manual);
        assert!(matches!(result, Err(CheckError::FetchFailed(_))));

        // Manifest without the required cycle field
        fetcher.set_response(MANIFEST_URL, r#"{"airac_version": 2}"#);
        let result = monitor.check_and_notify(CheckTrigger::Manual);
        assert!(matches!(result, Err(CheckError::ManifestMalformed)));
    }

    #[test]
    fn periodic_checks_stop_after_local_version_parses() {
        let (mut monitor, host, fetcher) = make_monitor();
        host.set_sector_label(Some(LABEL));
        fetcher.set_response(MANIFEST_URL, &manifest_body(2510, 2, 0));

        // First tick runs the initial check, which parses the local version
        monitor.on_timer(0);
        let manifest_fetches = fetcher.request_count(MANIFEST_URL);
        assert!(manifest_fetches >= 1);

        // Sixty more ticks: no further periodic fetches
        for counter in 1..=60 {
            monitor.on_timer(counter);
        }
        assert_eq!(fetcher.request_count(MANIFEST_URL), manifest_fetches);

        // Manual checks still work
        monitor.check_and_notify(CheckTrigger::Manual).unwrap();
        assert_eq!(fetcher.request_count(MANIFEST_URL), manifest_fetches + 1);
    }

    #[test]
    fn periodic_checks_continue_until_label_appears() {
        let (mut monitor, _host, fetcher) = make_monitor();

        // No label: every interval boundary fetches nothing (the check
        // fails before the fetch) but keeps being attempted
        for counter in 0..=20 {
            monitor.on_timer(counter);
        }
        assert_eq!(fetcher.request_count(MANIFEST_URL), 0);
        // Welcome was still attempted exactly once
        assert_eq!(fetcher.request_count(WELCOME_URL), 1);
    }

    #[test]
    fn first_tick_posts_hint_and_welcome_once() {
        let (mut monitor, host, fetcher) = make_monitor();
        fetcher.set_response(
            WELCOME_URL,
            r#"{"title": "Ops", "message": "Briefing at 18z"}"#,
        );

        monitor.on_timer(0);
        monitor.on_timer(1);

        assert_eq!(fetcher.request_count(WELCOME_URL), 1);
        let messages = host.messages();
        assert!(messages.iter().any(|(_, text)| text == "Ops Briefing at 18z"));
        assert!(messages
            .iter()
            .any(|(_, text)| text.contains(CMD_UPDATE_CHECK)));
    }

    #[test]
    fn reminder_fires_through_the_tick_path() {
        let (mut monitor, host, _fetcher) = make_monitor();
        host.set_connected(true);

        for counter in 0..121 {
            monitor.on_timer(counter);
        }

        let reminders: Vec<_> = host
            .alerts()
            .into_iter()
            .filter(|(title, _)| title == REMINDER_TITLE)
            .collect();
        assert_eq!(reminders.len(), 2);
        assert!(reminders[0].1.contains("Time for a break"));
    }

    #[test]
    fn open_download_uses_cached_url() {
        let (mut monitor, host, fetcher) = make_monitor();
        host.set_sector_label(Some(LABEL));
        fetcher.set_response(MANIFEST_URL, &manifest_body(2510, 2, 1));

        monitor.check_and_notify(CheckTrigger::Manual).unwrap();
        monitor.open_download();

        assert_eq!(host.opened_urls(), vec!["https://updates.test/pkg.zip"]);
    }

    #[test]
    fn open_download_learns_url_from_a_fresh_fetch() {
        let (mut monitor, host, fetcher) = make_monitor();
        fetcher.set_response(MANIFEST_URL, &manifest_body(2510, 2, 1));

        monitor.open_download();
        assert_eq!(host.opened_urls(), vec!["https://updates.test/pkg.zip"]);
    }

    #[test]
    fn open_download_without_url_reports() {
        let (mut monitor, host, fetcher) = make_monitor();
        fetcher.set_response(
            MANIFEST_URL,
            r#"{"airac_cycle": 2510, "airac_version": 2}"#,
        );

        monitor.open_download();
        assert!(host.opened_urls().is_empty());
        assert!(host.messages()[0].1.contains("No download URL"));
    }

    #[test]
    fn commands_are_routed() {
        let (mut monitor, host, fetcher) = make_monitor();
        host.set_sector_label(Some(LABEL));
        fetcher.set_response(MANIFEST_URL, &manifest_body(2510, 3, 0));

        assert!(monitor.handle_command(".sectorwatch-update-check"));
        assert_eq!(host.alerts().len(), 1);

        assert!(monitor.handle_command(".sectorwatch-status"));
        assert!(host
            .messages()
            .iter()
            .any(|(_, text)| text.contains("[Local]") && text.contains("[Remote]")));

        assert!(monitor.handle_command(".sectorwatch-coffee"));
        assert!(host
            .alerts()
            .iter()
            .any(|(title, _)| title.contains("café")));

        assert!(!monitor.handle_command(".unrelated-command"));
        assert!(!monitor.handle_command("plain chat text"));
    }

    #[test]
    fn status_report_survives_fetch_failure() {
        let (monitor, host, _fetcher) = make_monitor();
        host.set_sector_label(Some(LABEL));

        let report = monitor.status_report();
        assert_eq!(report.local.unwrap(), sectorwatch_api::SectorVersion::new(2510, 2, 0));
        assert!(report.remote.is_none());
        assert!(report.to_string().contains("<fetch/parse failed>"));
    }
}
