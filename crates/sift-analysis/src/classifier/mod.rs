//! RecordClassifier: routes each record and accumulates processor output.

mod fan_out;
pub mod route;

pub use route::Route;

use serde_json::Value;
use tracing::{debug, info, info_span};

use sift_core::{
    AnalysisConfig, ClassifyError, Clock, FilterConfig, OptionsConfig, SiftConfig, SystemClock,
};

use crate::processors::{
    finalize, handle_unknown_type, process_auto_pending, process_batch, process_inactive,
    process_medium_priority, process_single,
};
use crate::record::RecordView;
use crate::results::{FinalizedResult, ProcessedItem};
use crate::validation::validate;
use fan_out::FanOut;

/// A finalized result plus the recoverable errors skipped while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub result: FinalizedResult,
    /// Non-fatal per-entry errors, in encounter order.
    pub errors: Vec<ClassifyError>,
}

impl AnalysisOutcome {
    /// Returns true if no entry was skipped.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Classifies datasets of semi-structured records.
///
/// Holds only read-only configuration and a clock, so one instance can serve
/// any number of calls. Each call owns its own accumulator.
#[derive(Debug, Clone)]
pub struct RecordClassifier<C: Clock = SystemClock> {
    config: AnalysisConfig,
    clock: C,
}

impl RecordClassifier<SystemClock> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for RecordClassifier<SystemClock> {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl<C: Clock> RecordClassifier<C> {
    pub fn with_clock(config: AnalysisConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run with the threshold, options and filters from a resolved
    /// [`SiftConfig`]. Its `analysis` section takes the place of the
    /// classifier's own for this call.
    pub fn analyze_with(&self, dataset: &[Value], config: &SiftConfig) -> Option<FinalizedResult> {
        self.run(
            dataset,
            config.analysis.effective_threshold(),
            Some(&config.filters),
            Some(&config.options),
        )
        .map(|outcome| outcome.result)
    }

    /// Classify `dataset`. Returns `None` when it is empty.
    ///
    /// Omitted `filters` / `options` take their defaults
    /// (`include_metadata = true`; `strict = true, verbose = false`).
    pub fn analyze(
        &self,
        dataset: &[Value],
        filters: Option<&FilterConfig>,
        options: Option<&OptionsConfig>,
    ) -> Option<FinalizedResult> {
        self.analyze_detailed(dataset, filters, options)
            .map(|outcome| outcome.result)
    }

    /// Like [`analyze`](Self::analyze) for a raw JSON value: returns `None`
    /// unless `dataset` is a non-empty array.
    pub fn analyze_value(
        &self,
        dataset: Option<&Value>,
        filters: Option<&FilterConfig>,
        options: Option<&OptionsConfig>,
    ) -> Option<FinalizedResult> {
        let records = dataset?.as_array()?;
        self.analyze(records, filters, options)
    }

    /// Classify `dataset` and also return the skipped per-entry errors.
    pub fn analyze_detailed(
        &self,
        dataset: &[Value],
        filters: Option<&FilterConfig>,
        options: Option<&OptionsConfig>,
    ) -> Option<AnalysisOutcome> {
        self.run(dataset, self.config.effective_threshold(), filters, options)
    }

    fn run(
        &self,
        dataset: &[Value],
        threshold: f64,
        filters: Option<&FilterConfig>,
        options: Option<&OptionsConfig>,
    ) -> Option<AnalysisOutcome> {
        if dataset.is_empty() {
            return None;
        }

        let filters = filters.copied().unwrap_or_default();
        let options = options.copied().unwrap_or_default();
        let span = info_span!("sift.analyze", records = dataset.len(), strict = options.strict);
        let _guard = span.enter();

        let fan_out = FanOut {
            threshold,
            filters: &filters,
            options: &options,
            clock: &self.clock,
        };
        let mut processed: Vec<ProcessedItem> = Vec::new();
        let mut errors: Vec<ClassifyError> = Vec::new();

        for (record_index, raw) in dataset.iter().enumerate() {
            let record = RecordView::new(raw);
            let route = Route::select(&record, &options);
            debug!(record_index, ?route, skipped = route.is_skipped(), "routed record");

            match route {
                Route::DeepFanOut => {
                    fan_out.expand(&record, record_index, &mut processed, &mut errors);
                }
                Route::MediumPriority => {
                    for item in record.items().iter().filter(|item| validate(item)) {
                        processed.push(process_medium_priority(item, &self.clock).into());
                    }
                }
                Route::Batch => {
                    processed.extend(
                        process_batch(&record, &self.clock)
                            .into_iter()
                            .map(ProcessedItem::from),
                    );
                }
                Route::Single => processed.push(process_single(&record, &self.clock).into()),
                Route::UnknownType => handle_unknown_type(&record, &mut processed, &self.clock),
                Route::AutoPending => {
                    processed.push(process_auto_pending(&record, &self.clock).into());
                }
                Route::Inactive => processed.push(process_inactive(&record, &self.clock).into()),
                Route::StrictSkipped | Route::PendingSkipped | Route::InactiveSkipped => {}
            }
        }

        let result = finalize(processed, &self.clock);
        info!(
            total_processed = result.total_processed,
            skipped_entries = errors.len(),
            "analysis finalized"
        );

        Some(AnalysisOutcome { result, errors })
    }
}
