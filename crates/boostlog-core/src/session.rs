// File: crates/boostlog-core/src/session.rs
// Summary: Load session: one outstanding file read at a time, parse on completion, keep last good chart.
// Notes:
// - The read itself happens outside this type (browser file reader, filesystem,
//   ...). `begin_load` marks the suspension point, `complete_load` resumes it.
// - A failed load never replaces what is displayed.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::ChartConfig;
use crate::error::{ConfigError, LoadError};
use crate::ingest::{parse_bytes, ColumnStats, ParsedTable};
use crate::series::{build_series, ChartModel};
use crate::theme::{Palette, ThemeMode};

/// What to do with a new file while a read is still outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InFlightPolicy {
    /// Refuse the new file; the outstanding read proceeds.
    #[default]
    Reject,
    /// Abandon the outstanding read; its completion is ignored.
    Restart,
}

/// Handle for one outstanding read.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    id: u64,
    file_name: String,
}

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// The file filter a drop target applies: extension `.csv`, any case.
pub fn accepts_file_name(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

struct Displayed {
    file_name: String,
    table: ParsedTable,
    model: ChartModel,
}

/// Per-column ingestion counts carried alongside the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnReport<'a> {
    pub name: &'a str,
    pub header: &'a str,
    #[serde(flatten)]
    pub stats: ColumnStats,
}

/// Displayed chart plus the palette to draw it with.
#[derive(Clone, Debug, Serialize)]
pub struct ChartView<'a> {
    pub file_name: &'a str,
    pub theme: ThemeMode,
    pub palette: Palette,
    pub chart: &'a ChartModel,
    pub columns: Vec<ColumnReport<'a>>,
}

pub struct Viewer {
    config: ChartConfig,
    theme: ThemeMode,
    policy: InFlightPolicy,
    next_ticket: u64,
    in_flight: Option<(u64, String)>,
    displayed: Option<Displayed>,
}

impl Viewer {
    pub fn new(config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            theme: ThemeMode::default(),
            policy: InFlightPolicy::default(),
            next_ticket: 1,
            in_flight: None,
            displayed: None,
        })
    }

    pub fn with_policy(mut self, policy: InFlightPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn policy(&self) -> InFlightPolicy {
        self.policy
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start reading `file_name`. Subject to the file filter and the in-flight policy.
    pub fn begin_load(&mut self, file_name: &str) -> Result<LoadTicket, LoadError> {
        if !accepts_file_name(file_name) {
            warn!(file = file_name, "dropped file rejected by .csv filter");
            return Err(LoadError::UnsupportedFile(file_name.to_string()));
        }
        if let Some((_, pending)) = &self.in_flight {
            match self.policy {
                InFlightPolicy::Reject => {
                    warn!(file = file_name, pending = %pending, "read in flight; new file ignored");
                    return Err(LoadError::Busy(pending.clone()));
                }
                InFlightPolicy::Restart => {
                    info!(file = file_name, abandoned = %pending, "read in flight; restarting with new file");
                }
            }
        }
        let id = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some((id, file_name.to_string()));
        Ok(LoadTicket { id, file_name: file_name.to_string() })
    }

    /// Resume after the read finished: parse, build, and display on success.
    pub fn complete_load(&mut self, ticket: LoadTicket, bytes: &[u8]) -> Result<&ChartModel, LoadError> {
        self.take_in_flight(&ticket)?;
        let LoadTicket { file_name, .. } = ticket;

        let table = match parse_bytes(bytes, &self.config.columns) {
            Ok(t) => t,
            Err(source) => {
                warn!(file = %file_name, error = %source, "parse failed; keeping previous chart");
                return Err(LoadError::Parse { file: file_name, source });
            }
        };
        let model = build_series(&table, &self.config);
        info!(
            file = %file_name,
            rows = table.row_count,
            series = model.series.len(),
            coercion_failures = table.total_coercion_failures(),
            "chart loaded"
        );
        let shown = self.displayed.insert(Displayed { file_name, table, model });
        Ok(&shown.model)
    }

    /// The read itself failed; the session is ready for another file.
    pub fn fail_load(&mut self, ticket: LoadTicket, reason: impl Into<String>) -> LoadError {
        let reason = reason.into();
        if let Err(e) = self.take_in_flight(&ticket) {
            return e;
        }
        warn!(file = %ticket.file_name, %reason, "read failed; keeping previous chart");
        LoadError::Read { file: ticket.file_name, reason }
    }

    fn take_in_flight(&mut self, ticket: &LoadTicket) -> Result<(), LoadError> {
        match &self.in_flight {
            Some((id, _)) if *id == ticket.id => {
                self.in_flight = None;
                Ok(())
            }
            // Handed out earlier but replaced under `Restart`.
            _ if ticket.id < self.next_ticket && self.policy == InFlightPolicy::Restart => {
                info!(file = %ticket.file_name, "completion of superseded read ignored");
                Err(LoadError::Superseded(ticket.file_name.clone()))
            }
            _ => Err(LoadError::UnknownTicket(ticket.id)),
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Swap configuration and rebuild the displayed chart from the retained
    /// columns. Columns the old spec did not extract appear after the next load.
    pub fn set_config(&mut self, config: ChartConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        if let Some(d) = self.displayed.as_mut() {
            d.model = build_series(&d.table, &self.config);
        }
        Ok(())
    }

    pub fn displayed(&self) -> Option<&ChartModel> {
        self.displayed.as_ref().map(|d| &d.model)
    }

    pub fn table(&self) -> Option<&ParsedTable> {
        self.displayed.as_ref().map(|d| &d.table)
    }

    pub fn view(&self) -> Option<ChartView<'_>> {
        self.displayed.as_ref().map(|d| ChartView {
            file_name: &d.file_name,
            theme: self.theme,
            palette: self.palette(),
            chart: &d.model,
            columns: d
                .table
                .columns()
                .iter()
                .map(|c| ColumnReport { name: &c.name, header: &c.header, stats: c.stats })
                .collect(),
        })
    }
}
