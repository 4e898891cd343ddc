// SPDX-License-Identifier: GPL-3.0-or-later
use releasekit_config::AppConfig;
pub mod events;
pub mod field_validation;
pub mod release_time;
pub mod schema;
pub mod submission_validation;
pub mod submit;
pub mod territory;
pub mod upload;
pub mod wizard;

pub use events::{EventPublisher, InMemoryEventBus};
pub use field_validation::{validate_field, validate_field_named, FieldKind, FieldRules};
pub use release_time::{
    effective_release_moment, format_in_zone, parse_time_12h, project, to_utc, ReleaseTimeError,
    ReleaseTimeResolver, ZoneProjection,
};
pub use schema::{load_release, SchemaError, SubmissionDocument};
pub use submission_validation::{validate_submission, QcValidator};
pub use submit::{
    can_submit, submit_release, ServiceError, SubmissionError, SubmissionReceipt, SubmissionService,
};
pub use territory::{available_territories, resolve_all, resolve_territories, TerritoryEditor};
pub use upload::{
    calculate_quality_score, AudioProcessingResult, AudioProcessor, UploadError, UploadFile,
    UploadId, UploadQueue, UploadStatus,
};
pub use wizard::{validate_section, SubmissionWizard, WizardError, WizardStep};

use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn on_start(&self) {
        info!(
            target: "application",
            default_timezone = %self.config.release_time.default_timezone,
            "application state initialized"
        );
    }

    /// QC validator configured from the `qc` section.
    pub fn validator(&self) -> QcValidator {
        QcValidator::new(self.config.qc.clone())
    }

    pub fn release_time(&self) -> ReleaseTimeResolver {
        ReleaseTimeResolver::from(&self.config.release_time)
    }

    pub fn upload_queue<P: AudioProcessor>(&self, processor: P) -> UploadQueue<P> {
        UploadQueue::new(processor, self.config.upload.clone())
    }
}
